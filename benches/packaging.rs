//! Benchmarks for the packaging pipeline.
//!
//! Run with: cargo bench

use std::io::Cursor;

use criterion::{Criterion, criterion_group, criterion_main};

use folio::{Document, EpubExporter, Metadata};

const CHAPTERS: usize = 200;

fn sample_document() -> Document {
    let mut doc = Document::new(Metadata::new("Benchmark").with_author("Bench"));
    doc.set_default_stylesheet();
    doc.add_auto_navigation("Contents").unwrap();

    let body = "<p>Lorem ipsum dolor sit amet, consectetur adipiscing elit.</p>\n".repeat(200);
    for i in 1..=CHAPTERS {
        doc.add_page(&format!("Chapter{i:05}.xhtml"), &format!("Chapter {i}"), &body, true)
            .unwrap();
    }
    doc
}

fn bench_packaging(c: &mut Criterion) {
    let mut group = c.benchmark_group("packaging");

    group.bench_function("finalize", |b| {
        b.iter_batched(
            sample_document,
            |doc| EpubExporter::new().finalize(doc).unwrap(),
            criterion::BatchSize::LargeInput,
        )
    });

    group.bench_function("export_to_memory", |b| {
        b.iter_batched(
            sample_document,
            |doc| {
                EpubExporter::new()
                    .export_to_writer(doc, Cursor::new(Vec::new()))
                    .unwrap()
            },
            criterion::BatchSize::LargeInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_packaging);
criterion_main!(benches);
