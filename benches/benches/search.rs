// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use folio_search::{ProjectEntry, SearchSession};

const TAGS: [&str; 4] = ["SEO", "E-Commerce", "Branding", "Web App"];

fn catalog(len: usize) -> Vec<ProjectEntry> {
    (0..len)
        .map(|i| {
            ProjectEntry::new(
                format!("project-{i}"),
                format!("Project {i}"),
                format!("Client site number {i} with a custom CMS"),
                TAGS[i % TAGS.len()],
            )
        })
        .collect()
}

fn bench_typing(c: &mut Criterion) {
    let mut group = c.benchmark_group("search/typing");

    // Each keystroke recomputes the results from scratch.
    for len in [32_usize, 512, 4_096] {
        let items = catalog(len);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &items, |b, items| {
            b.iter_batched(
                || SearchSession::new(items.iter()),
                |mut session| {
                    for query in ["c", "co", "com", "comm", "comme"] {
                        session.set_query(query);
                    }
                    black_box(session.results().len());
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_typing);
criterion_main!(benches);
