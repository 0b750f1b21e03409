//! Configuration loading and management for the Labor Planning Engine.
//!
//! This module provides functionality to load the planning configuration
//! from a YAML file: which employment statuses count as active, whether
//! padding days are clipped, and how totals are rounded.
//!
//! # Example
//!
//! ```no_run
//! use labor_planning_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config").unwrap();
//! println!("Amount scale: {}", loader.config().amount_scale);
//! ```

mod loader;
mod types;

pub use loader::{CONFIG_FILE_NAME, ConfigLoader};
pub use types::PlanningConfig;
