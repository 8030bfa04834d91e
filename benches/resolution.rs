//! Finder resolution benchmark suite.
//!
//! Measures the engine's own overhead against an in-process session that
//! answers instantly:
//! - Chain construction (no session traffic)
//! - Array resolution and counting at different sizes
//! - Map and filter pipelines over repeated rows
//!
//! Run with: cargo bench --bench resolution
//! Results saved to: target/criterion/

use std::hint::black_box;

use async_trait::async_trait;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use serde_json::{Value, json};
use tokio::runtime::Runtime;

use ng_finder::locator::scripts;
use ng_finder::{Action, Browser, By, ElementId, Result, Session};

// ============================================================================
// Benchmark Parameters
// ============================================================================

const ROW_COUNTS: &[usize] = &[10, 100, 1000];

// ============================================================================
// Session
// ============================================================================

/// Session whose every lookup yields `rows` elements.
struct FlatSession {
    rows: usize,
}

impl FlatSession {
    fn ids(&self, prefix: &str) -> Vec<ElementId> {
        (0..self.rows)
            .map(|i| ElementId::new(format!("{prefix}-{i}")))
            .collect()
    }

    fn references(&self, prefix: &str) -> Value {
        Value::Array(self.ids(prefix).iter().map(ElementId::to_reference).collect())
    }
}

#[async_trait]
impl Session for FlatSession {
    async fn find_many(
        &self,
        _using: &str,
        value: &str,
        _context: Option<&ElementId>,
    ) -> Result<Vec<ElementId>> {
        Ok(self.ids(value))
    }

    async fn run_script(&self, source: &str, _args: Vec<Value>) -> Result<Value> {
        if source == scripts::FIND_REPEATER {
            return Ok(json!({ "elements": self.references("row"), "skipped": 0 }));
        }
        Ok(self.references("bound"))
    }

    async fn perform(&self, _action: Action, element: &ElementId, _args: Vec<Value>) -> Result<Value> {
        Ok(Value::String(element.as_str().to_string()))
    }
}

fn browser(rows: usize) -> Browser {
    Browser::new(FlatSession { rows })
}

// ============================================================================
// Benchmark: Chain Construction
// ============================================================================

fn bench_construction(c: &mut Criterion) {
    let browser = browser(1);

    c.bench_function("construct_chain", |b| {
        b.iter(|| {
            let finder = browser
                .element(By::id("app"))
                .all(By::repeater("day in days").column("day.name"))
                .filter(|_, index| async move { index % 2 == 0 })
                .last()
                .element(By::binding("greeting"));
            black_box(finder)
        });
    });
}

// ============================================================================
// Benchmark: Counting
// ============================================================================

fn bench_count(c: &mut Criterion) {
    let rt = Runtime::new().expect("runtime");

    let mut group = c.benchmark_group("count");
    for &rows in ROW_COUNTS {
        let browser = browser(rows);
        group.bench_with_input(BenchmarkId::new("repeater", rows), &rows, |b, _| {
            b.to_async(&rt).iter(|| async {
                let count = browser.all(By::repeater("day in days")).count().await;
                black_box(count.expect("count"))
            });
        });
        group.bench_with_input(BenchmarkId::new("css", rows), &rows, |b, _| {
            b.to_async(&rt).iter(|| async {
                let count = browser.css_all("li").count().await;
                black_box(count.expect("count"))
            });
        });
    }
    group.finish();
}

// ============================================================================
// Benchmark: Pipelines
// ============================================================================

fn bench_pipelines(c: &mut Criterion) {
    let rt = Runtime::new().expect("runtime");

    let mut group = c.benchmark_group("pipeline");
    group.sample_size(20);

    for &rows in ROW_COUNTS {
        let browser = browser(rows);
        group.bench_with_input(BenchmarkId::new("map_text", rows), &rows, |b, _| {
            b.to_async(&rt).iter(|| async {
                let texts = browser
                    .all(By::repeater("day in days"))
                    .map(|row, _| async move { row.get_text() })
                    .await;
                black_box(texts.expect("texts"))
            });
        });
        group.bench_with_input(BenchmarkId::new("filter_count", rows), &rows, |b, _| {
            b.to_async(&rt).iter(|| async {
                let count = browser
                    .all(By::binding("day.name"))
                    .filter(|row, _| async move { row.get_text().map(|t| t.ends_with('0')) })
                    .count()
                    .await;
                black_box(count.expect("count"))
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_construction, bench_count, bench_pipelines);
criterion_main!(benches);
