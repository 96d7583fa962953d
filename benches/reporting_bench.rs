use criterion::{criterion_group, criterion_main, Criterion};
use suite_runner::reporting::{json, text, xml};
use suite_runner::{Failure, Location, Note, TestResult, TestRun};

fn sample_runs(count: usize) -> Vec<TestRun> {
    (0..count)
        .map(|i| {
            let result = match i % 4 {
                0 => TestResult::Passed {
                    notes: vec![Note::new("iteration", i.to_string())],
                },
                1 => TestResult::Skipped,
                2 => TestResult::Failed {
                    notes: vec![],
                    failures: vec![Failure {
                        location: Some(Location {
                            module: "bench::cases".to_string(),
                            file: "src/cases.rs".to_string(),
                            line: Some(i as u32),
                        }),
                        message: format!("expected {}, got {}", i, i + 1),
                    }],
                },
                _ => TestResult::Aborted {
                    notes: vec![],
                    message: "unexpected fault & <detail>".to_string(),
                },
            };
            TestRun::new(format!("bench.group{}.case{}", i % 10, i), result)
        })
        .collect()
}

fn bench_reporters(c: &mut Criterion) {
    let runs = sample_runs(1000);

    c.bench_function("render_text_1000", |b| b.iter(|| text::render(&runs)));
    c.bench_function("render_json_1000", |b| b.iter(|| json::render(&runs)));
    c.bench_function("render_xml_1000", |b| b.iter(|| xml::render(&runs)));
}

criterion_group!(benches, bench_reporters);
criterion_main!(benches);
