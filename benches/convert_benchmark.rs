//! Benchmarks for draft conversion and export.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mdocx::{ApplicationDraft, MarkdownParser, Mdocx, SectionKind};

/// Builds a synthetic markdown draft with the given number of
/// heading/list/table groups.
fn synthetic_draft_text(groups: usize) -> String {
    let mut text = String::new();
    for i in 0..groups {
        text.push_str(&format!("## Work Package {i}\n\n"));
        text.push_str("The package delivers **measurable** results with *regional* reach.\n\n");
        text.push_str("1. Needs analysis\n2. Pilot rollout\n3. Evaluation\n\n");
        text.push_str("Milestone | Quarter | Status\n---|---|---\n");
        for m in 0..5 {
            text.push_str(&format!("M{m} | Q{} | planned\n", m % 4 + 1));
        }
        text.push('\n');
    }
    text
}

fn bench_parse(c: &mut Criterion) {
    let parser = MarkdownParser::new();
    let small = synthetic_draft_text(2);
    let large = synthetic_draft_text(50);

    c.bench_function("parse_small_draft", |b| {
        b.iter(|| parser.parse(black_box(&small)))
    });
    c.bench_function("parse_large_draft", |b| {
        b.iter(|| parser.parse(black_box(&large)))
    });
}

fn bench_export(c: &mut Criterion) {
    let mut draft = ApplicationDraft::new();
    let text = synthetic_draft_text(4);
    for kind in SectionKind::ALL {
        draft.record_generated(kind, text.clone());
    }

    c.bench_function("export_full_draft", |b| {
        b.iter(|| Mdocx::new().export_bytes(black_box(&draft)).unwrap())
    });
}

criterion_group!(benches, bench_parse, bench_export);
criterion_main!(benches);
