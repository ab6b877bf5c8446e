//! Benchmarks for the savings model and report rendering.
//!
//! Every form edit triggers a full recompute, so `compute_savings` should
//! stay well under a microsecond.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use savingscalc::formatting::FormattingConfig;
use savingscalc::io::output::{MarkdownWriter, OutputWriter, TerminalWriter};
use savingscalc::{compute_savings, CalculatorInput, CalculatorReport, CalculatorSession, TimeUnit};
use std::hint::black_box;

fn bench_compute_savings(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_savings");

    for (label, time_unit) in [("minutes", TimeUnit::Minutes), ("days", TimeUnit::Days)] {
        let input = CalculatorInput {
            time_unit,
            ..CalculatorInput::default()
        };
        group.bench_with_input(BenchmarkId::from_parameter(label), &input, |b, input| {
            b.iter(|| compute_savings(black_box(input)))
        });
    }

    group.finish();
}

fn bench_session_edits(c: &mut Criterion) {
    c.bench_function("session_edit_sequence", |b| {
        b.iter(|| {
            let mut session = CalculatorSession::new();
            for minutes in [5.0, 15.0, 30.0, 45.0, 60.0] {
                let _ = session.set_time_saved(black_box(minutes));
            }
            session.output().break_even
        })
    });
}

fn bench_rendering(c: &mut Criterion) {
    let input = CalculatorInput::default();
    let output = compute_savings(&input);
    let report = CalculatorReport::new(input, output);

    let mut group = c.benchmark_group("render_report");
    group.bench_function("markdown", |b| {
        b.iter(|| {
            let mut buffer = Vec::with_capacity(4096);
            let _ = MarkdownWriter::new(&mut buffer).write_report(black_box(&report));
            buffer
        })
    });
    group.bench_function("terminal_plain", |b| {
        b.iter(|| {
            let mut buffer = Vec::with_capacity(4096);
            let _ = TerminalWriter::new(&mut buffer, FormattingConfig::plain())
                .write_report(black_box(&report));
            buffer
        })
    });
    group.finish();
}

criterion_group!(benches, bench_compute_savings, bench_session_edits, bench_rendering);
criterion_main!(benches);
