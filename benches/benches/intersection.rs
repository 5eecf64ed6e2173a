// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use folio_intersection::{Measurement, RootMargin, SoftwareObserver, Thresholds};
use kurbo::{Rect, Vec2};

const VIEWPORT: Rect = Rect::new(0.0, 0.0, 1280.0, 800.0);

/// A long page of stacked 600 px blocks.
fn page(len: u32) -> Vec<Rect> {
    (0..len)
        .map(|i| {
            let y = f64::from(i) * 600.0;
            Rect::new(0.0, y, 1280.0, y + 600.0)
        })
        .collect()
}

fn bench_measurement(c: &mut Criterion) {
    let margin: RootMargin = "-10% 0px".parse().unwrap();
    let target = Rect::new(0.0, 500.0, 1280.0, 1100.0);
    c.bench_function("intersection/measurement", |b| {
        b.iter(|| Measurement::new(black_box(target), black_box(VIEWPORT), &margin));
    });
}

fn bench_observer_scroll(c: &mut Criterion) {
    let mut group = c.benchmark_group("intersection/observer_scroll");

    // One update per frame while scrolling; most targets do not cross a
    // threshold, so this mostly measures the no-change path.
    for len in [16_u32, 128, 1_024] {
        let rects = page(len);
        group.throughput(Throughput::Elements(u64::from(len)));
        group.bench_with_input(BenchmarkId::from_parameter(len), &rects, |b, rects| {
            let mut observer =
                SoftwareObserver::new(Thresholds::new(&[0.1, 0.3, 0.5]), RootMargin::ZERO);
            for i in 0..rects.len() {
                observer.observe(i);
            }
            let mut scroll = 0.0;
            b.iter(|| {
                scroll = (scroll + 7.0) % 4_000.0;
                let offset = Vec2::new(0.0, scroll);
                let entries = observer.update(VIEWPORT, 0, |&i| Some(rects[i] - offset));
                black_box(entries);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_measurement, bench_observer_scroll);
criterion_main!(benches);
