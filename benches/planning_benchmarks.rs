//! Performance benchmarks for the Labor Planning Engine.
//!
//! This benchmark suite covers:
//! - Week generation for projects of increasing length
//! - Single daily proration for each policy family
//! - Full plan builds for crews of increasing size over six months
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use chrono::{Days, NaiveDate};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use labor_planning_engine::calculation::{build_labor_plan, compute_daily_cost, generate_weeks};
use labor_planning_engine::config::PlanningConfig;
use labor_planning_engine::models::{
    ActiveDateSet, EmployeePayrollProfile, EmploymentStatus, PaymentFrequency, PayrollType,
    ProjectDateRange, ProjectEmployee, SalaryBasis,
};

fn project_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 3).unwrap()
}

/// Cycles through the payroll policy families.
fn profile_for(index: usize) -> EmployeePayrollProfile {
    match index % 4 {
        0 => EmployeePayrollProfile::contractor(Decimal::new(5000, 2)),
        1 => EmployeePayrollProfile::monthly_package(
            PayrollType::Administrative,
            PaymentFrequency::Weekly,
            Decimal::from(600),
            Decimal::from(50),
        ),
        2 => EmployeePayrollProfile::monthly_package(
            PayrollType::Execution,
            PaymentFrequency::Biweekly,
            Decimal::from(2800),
            Decimal::from(300),
        ),
        _ => EmployeePayrollProfile::base_salary(
            SalaryBasis::Monthly,
            PaymentFrequency::Weekly,
            Decimal::from(2200),
        ),
    }
}

fn create_crew(size: usize) -> Vec<ProjectEmployee> {
    (0..size)
        .map(|i| ProjectEmployee {
            id: format!("emp_{:04}", i),
            name: None,
            status: if i % 10 == 9 {
                EmploymentStatus::Terminated
            } else {
                EmploymentStatus::Active
            },
            payroll: profile_for(i),
        })
        .collect()
}

fn bench_generate_weeks(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_weeks");

    for days in [7_u64, 90, 365, 1825] {
        let range =
            ProjectDateRange::new(project_start(), project_start() + Days::new(days)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(days), &range, |b, range| {
            b.iter(|| generate_weeks(black_box(range)).unwrap())
        });
    }

    group.finish();
}

fn bench_daily_cost(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_daily_cost");
    let date = NaiveDate::from_ymd_opt(2024, 4, 13).unwrap();

    for (name, index) in [
        ("contractor", 0),
        ("admin_weekly", 1),
        ("execution_biweekly", 2),
        ("monthly_base", 3),
    ] {
        let profile = profile_for(index);
        group.bench_function(name, |b| {
            b.iter(|| compute_daily_cost(black_box(&profile), black_box(date)))
        });
    }

    group.finish();
}

fn bench_labor_plan(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_labor_plan");
    let range = ProjectDateRange::new(project_start(), project_start() + Days::new(182)).unwrap();
    // Every weekday plus alternate Saturdays
    let active: ActiveDateSet = (0..=182)
        .map(|offset| project_start() + Days::new(offset))
        .filter(|d| {
            use chrono::Datelike;
            d.weekday().number_from_monday() <= 5 || d.iso_week().week() % 2 == 0
        })
        .collect();
    let config = PlanningConfig::default();

    for crew_size in [1_usize, 10, 50, 200] {
        let crew = create_crew(crew_size);
        group.throughput(Throughput::Elements(crew_size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(crew_size), &crew, |b, crew| {
            b.iter(|| build_labor_plan(black_box(&range), crew, &active, &config).unwrap())
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_generate_weeks,
    bench_daily_cost,
    bench_labor_plan
);
criterion_main!(benches);
