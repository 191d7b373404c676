// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for position resolution.
//!
//! The element frame with scroll normalization walks the whole ancestor chain
//! on every call, so it is measured against chain depth. Multi-contact
//! resolution is measured against the number of touches.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Size, Vec2};
use std::rc::Rc;
use understory_click_pos::{
    InputEvent, LayoutElement, LayoutHost, ReferenceFrame, ResolveOptions, TouchPoint, resolve,
    resolve_all,
};

struct Node {
    rect: Rect,
    scroll: Vec2,
    parent: Option<El>,
}

#[derive(Clone)]
struct El(Rc<Node>);

impl LayoutElement for El {
    fn bounding_client_rect(&self) -> Rect {
        self.0.rect
    }

    fn parent_element(&self) -> Option<Self> {
        self.0.parent.clone()
    }

    fn scroll_offset(&self) -> Vec2 {
        self.0.scroll
    }
}

struct Host;

impl LayoutHost for Host {
    type Element = El;

    fn scroll_offset(&self) -> Vec2 {
        Vec2::new(0.0, 120.0)
    }

    fn viewport_size(&self) -> Size {
        Size::new(1280.0, 800.0)
    }

    fn document_size(&self) -> Size {
        Size::new(1280.0, 4000.0)
    }

    fn is_scroll_root(&self, _: &El) -> bool {
        false
    }
}

/// A chain of `depth` nested scroll containers; returns the innermost.
fn nested(depth: usize) -> El {
    let mut current: Option<El> = None;
    for i in 0..depth {
        let inset = i as f64;
        current = Some(El(Rc::new(Node {
            rect: Rect::new(inset, inset, 1000.0 - inset, 1000.0 - inset),
            scroll: Vec2::new(1.0, 2.0),
            parent: current,
        })));
    }
    current.expect("depth is non-zero")
}

fn bench_element_depth(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve/element_normalized");
    let event = InputEvent::mouse(Point::new(400.0, 300.0));

    for depth in [1_usize, 8, 32, 128] {
        let options = ResolveOptions::new()
            .with_frame(ReferenceFrame::Element(nested(depth)))
            .with_normalize_scroll(true)
            .with_percent(true);
        group.throughput(Throughput::Elements(depth as u64));
        group.bench_with_input(BenchmarkId::from_parameter(depth), &options, |b, options| {
            b.iter(|| black_box(resolve(&Host, black_box(&event), options)));
        });
    }
    group.finish();
}

fn bench_touch_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_all/touches");
    let target = nested(4);

    for count in [1_usize, 2, 5, 10] {
        let event = InputEvent::touch((0..count).map(|i| {
            let offset = i as f64 * 10.0;
            TouchPoint::new(Point::new(100.0 + offset, 200.0 + offset), i as i32)
        }))
        .with_current_target(target.clone());
        let options = ResolveOptions::new().with_frame(ReferenceFrame::CurrentTarget);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &event, |b, event| {
            b.iter(|| black_box(resolve_all(&Host, black_box(event), &options)));
        });
    }
    group.finish();
}

fn bench_frames(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve/frames");
    let event = InputEvent::mouse(Point::new(400.0, 300.0));
    let frames = [
        ("viewport", ReferenceFrame::Viewport),
        ("document", ReferenceFrame::Document),
        ("element", ReferenceFrame::Element(nested(1))),
    ];
    for (name, frame) in frames {
        let options = ResolveOptions::new().with_frame(frame).with_percent(true);
        group.bench_function(name, |b| {
            b.iter(|| black_box(resolve(&Host, black_box(&event), &options)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_element_depth, bench_touch_count, bench_frames);
criterion_main!(benches);
