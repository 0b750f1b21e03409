//! Labor Planning Engine
//!
//! This crate partitions a project's lifetime into Monday-aligned calendar
//! weeks and prorates each employee's payroll into a daily labor cost, then
//! aggregates those costs over the days that have planned activity.
//!
//! All computation is pure: no I/O happens outside of
//! [`config::ConfigLoader`], and every function can be called concurrently.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
