//! Performance benchmarks for the attendance engine.
//!
//! This benchmark suite covers the reconciliation core and the HTTP surface:
//! - One employee, one month of punches
//! - A month of punches for a growing number of employees
//! - A full `/analyze` request through the router
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use attendance_engine::api::{create_router, AppState};
use attendance_engine::calculation::{analyze_attendance, normalize_rows, reconcile_punches};
use attendance_engine::config::{ConfigLoader, ReportPeriod};
use attendance_engine::models::RawPunchRow;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Creates a test state with loaded configuration.
fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/attendance").expect("Failed to load config");
    AppState::new(config)
}

/// Punch text for a day, cycling through a day shift, a split shift, an
/// overnight start and an overnight finish.
fn punch_text(day: u32) -> &'static str {
    match day % 4 {
        0 => "08:00 17:00",
        1 => "07:55 12:00 12:45 16:30",
        2 => "09:00 13:00 22:00",
        _ => "02:10 10:00 18:00",
    }
}

/// Creates a month of rows for each employee.
fn create_rows(employees: usize) -> Vec<RawPunchRow> {
    (0..employees)
        .flat_map(|e| {
            (1..=31).map(move |day| RawPunchRow {
                employee: format!("Employee {:04}", e),
                day,
                raw_text: punch_text(day).to_string(),
            })
        })
        .collect()
}

/// Benchmark: reconcile one employee's month.
fn bench_single_employee_month(c: &mut Criterion) {
    let days = normalize_rows(&create_rows(1), ReportPeriod::default());

    c.bench_function("single_employee_month", |b| {
        b.iter(|| black_box(reconcile_punches(black_box(&days))))
    });
}

/// Benchmark: full analysis as the number of employees grows.
fn bench_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaling");

    for employees in [1usize, 10, 100, 1000].iter() {
        let days = normalize_rows(&create_rows(*employees), ReportPeriod::default());

        group.throughput(Throughput::Elements(*employees as u64));
        group.bench_with_input(
            BenchmarkId::new("employees", employees),
            employees,
            |b, _| b.iter(|| black_box(analyze_attendance(days.clone()))),
        );
    }

    group.finish();
}

/// Benchmark: a 100-employee month through the `/analyze` endpoint.
fn bench_analyze_request(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(create_test_state());

    let rows: Vec<serde_json::Value> = create_rows(100)
        .into_iter()
        .map(|row| {
            serde_json::json!({
                "employee": row.employee,
                "day": row.day,
                "raw_text": row.raw_text
            })
        })
        .collect();
    let body = serde_json::json!({ "rows": rows, "default_hourly_rate": "12.50" }).to_string();

    c.bench_function("analyze_request_100_employees", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/analyze")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

criterion_group!(
    benches,
    bench_single_employee_month,
    bench_scaling,
    bench_analyze_request,
);
criterion_main!(benches);
