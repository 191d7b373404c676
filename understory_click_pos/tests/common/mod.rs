// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A small in-memory layout tree standing in for a browser document.

#![allow(
    missing_docs,
    dead_code,
    reason = "Integration-test helper module; each test binary uses a different subset."
)]

use std::rc::Rc;

use kurbo::{Rect, Size, Vec2};
use understory_click_pos::{LayoutElement, LayoutHost, SvgTransform};

#[derive(Debug)]
struct Node {
    rect: Rect,
    scroll: Vec2,
    svg: Option<SvgTransform>,
    parent: Option<FakeElement>,
}

/// Shared handle to a fake element; clones refer to the same node.
#[derive(Clone, Debug)]
pub(crate) struct FakeElement(Rc<Node>);

impl PartialEq for FakeElement {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Builder for a [`FakeElement`].
#[derive(Debug, Default)]
pub(crate) struct ElementBuilder {
    rect: Rect,
    scroll: Vec2,
    svg: Option<SvgTransform>,
    parent: Option<FakeElement>,
}

impl ElementBuilder {
    pub(crate) fn rect(mut self, x: f64, y: f64, width: f64, height: f64) -> Self {
        self.rect = Rect::new(x, y, x + width, y + height);
        self
    }

    pub(crate) fn scroll(mut self, x: f64, y: f64) -> Self {
        self.scroll = Vec2::new(x, y);
        self
    }

    pub(crate) fn svg(mut self, svg: SvgTransform) -> Self {
        self.svg = Some(svg);
        self
    }

    pub(crate) fn parent(mut self, parent: &FakeElement) -> Self {
        self.parent = Some(parent.clone());
        self
    }

    pub(crate) fn build(self) -> FakeElement {
        FakeElement(Rc::new(Node {
            rect: self.rect,
            scroll: self.scroll,
            svg: self.svg,
            parent: self.parent,
        }))
    }
}

pub(crate) fn element() -> ElementBuilder {
    ElementBuilder::default()
}

impl LayoutElement for FakeElement {
    fn bounding_client_rect(&self) -> Rect {
        self.0.rect
    }

    fn parent_element(&self) -> Option<Self> {
        self.0.parent.clone()
    }

    fn scroll_offset(&self) -> Vec2 {
        self.0.scroll
    }

    fn svg_transform(&self) -> Option<SvgTransform> {
        self.0.svg
    }
}

/// Document state plus the elements that end the ancestor scroll walk.
#[derive(Debug)]
pub(crate) struct FakeHost {
    pub(crate) scroll: Vec2,
    pub(crate) viewport: Size,
    pub(crate) document: Size,
    pub(crate) roots: Vec<FakeElement>,
}

impl Default for FakeHost {
    fn default() -> Self {
        Self {
            scroll: Vec2::ZERO,
            viewport: Size::new(1024.0, 768.0),
            document: Size::new(1024.0, 768.0),
            roots: Vec::new(),
        }
    }
}

impl FakeHost {
    /// Creates a host with a `documentElement > body` chain registered as roots.
    pub(crate) fn with_document_roots() -> (Self, FakeElement) {
        let html = element().rect(0.0, 0.0, 1024.0, 768.0).scroll(100.0, 100.0).build();
        let body = element()
            .rect(0.0, 0.0, 1024.0, 768.0)
            .scroll(100.0, 100.0)
            .parent(&html)
            .build();
        let host = Self {
            roots: vec![html, body.clone()],
            ..Self::default()
        };
        (host, body)
    }
}

impl LayoutHost for FakeHost {
    type Element = FakeElement;

    fn scroll_offset(&self) -> Vec2 {
        self.scroll
    }

    fn viewport_size(&self) -> Size {
        self.viewport
    }

    fn document_size(&self) -> Size {
        self.document
    }

    fn is_scroll_root(&self, element: &FakeElement) -> bool {
        self.roots.contains(element)
    }
}
