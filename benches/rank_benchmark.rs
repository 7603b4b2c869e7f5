//! Benchmarks for outline extraction and relevance ranking.
//!
//! Run with: cargo bench
//!
//! These benchmarks use synthetic fragment streams shaped like a typical
//! sectioned report.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use docrank::{analyze, extract_outline, DocumentFragments, TextFragment};

/// Creates a synthetic document with the given number of sections.
fn create_test_document(id: &str, section_count: usize) -> DocumentFragments {
    let mut doc = DocumentFragments::new(id);
    let mut position = 0;

    doc.push(TextFragment::new("Synthetic Benchmark Report", 24.0, 1, position));
    position += 1;

    for i in 0..section_count {
        let page = (i / 4 + 1) as u32;

        doc.push(TextFragment::new(
            format!("{}. Section Heading", i + 1),
            16.0,
            page,
            position,
        ));
        position += 1;

        for _ in 0..6 {
            doc.push(TextFragment::new(
                "The study gathered research data and recorded results. \
                 Analysis of the methodology followed established practice.",
                12.0,
                page,
                position,
            ));
            position += 1;
        }
    }

    doc
}

fn bench_extract_outline(c: &mut Criterion) {
    let doc = create_test_document("bench.pdf", 40);

    c.bench_function("extract_outline_40_sections", |b| {
        b.iter(|| extract_outline(black_box(&doc)))
    });
}

fn bench_analyze(c: &mut Criterion) {
    let docs: Vec<DocumentFragments> = (0..4)
        .map(|i| create_test_document(&format!("bench{}.pdf", i), 20))
        .collect();

    c.bench_function("analyze_4_documents", |b| {
        b.iter(|| {
            analyze(
                black_box(&docs),
                "PhD Researcher in Computational Biology",
                "Prepare a literature review",
            )
        })
    });
}

criterion_group!(benches, bench_extract_outline, bench_analyze);
criterion_main!(benches);
