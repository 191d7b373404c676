// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout queries against the live DOM.

use kurbo::{Affine, Rect, Size, Vec2};
use tracing::debug;
use understory_click_pos::{LayoutElement, LayoutHost, SvgExtent, SvgLength, SvgTransform};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, SvgAnimatedLength, SvgForeignObjectElement, SvgGraphicsElement,
    SvgImageElement, SvgRectElement, SvgUseElement, SvgsvgElement, Window,
};

/// The current browser window and document.
#[derive(Clone, Debug)]
pub struct WebHost {
    window: Window,
    document: Document,
}

impl WebHost {
    /// Captures the global `window` and its document.
    ///
    /// Returns `None` outside a browser main thread, where there is no DOM
    /// to measure.
    pub fn new() -> Option<Self> {
        let Some(window) = web_sys::window() else {
            debug!("no global window");
            return None;
        };
        let Some(document) = window.document() else {
            debug!("window has no document");
            return None;
        };
        Some(Self { window, document })
    }

    /// Uses an explicit window and document, for example from an iframe.
    pub fn from_parts(window: Window, document: Document) -> Self {
        Self { window, document }
    }

    /// The document being measured.
    pub fn document(&self) -> &Document {
        &self.document
    }
}

fn read_or_zero(value: Result<f64, JsValue>, property: &'static str) -> f64 {
    value.unwrap_or_else(|err| {
        debug!(?err, property, "layout query failed");
        0.0
    })
}

impl LayoutHost for WebHost {
    type Element = WebElement;

    fn scroll_offset(&self) -> Vec2 {
        Vec2::new(
            read_or_zero(self.window.scroll_x(), "scrollX"),
            read_or_zero(self.window.scroll_y(), "scrollY"),
        )
    }

    fn viewport_size(&self) -> Size {
        let as_number = |value: JsValue| value.as_f64().unwrap_or(0.0);
        Size::new(
            read_or_zero(self.window.inner_width().map(as_number), "innerWidth"),
            read_or_zero(self.window.inner_height().map(as_number), "innerHeight"),
        )
    }

    fn document_size(&self) -> Size {
        self.document
            .document_element()
            .map_or(Size::ZERO, |root| {
                Size::new(f64::from(root.scroll_width()), f64::from(root.scroll_height()))
            })
    }

    fn is_scroll_root(&self, element: &WebElement) -> bool {
        let node = &element.0;
        self.document
            .body()
            .is_some_and(|body| node.is_same_node(Some(body.as_ref())))
            || self
                .document
                .document_element()
                .is_some_and(|root| node.is_same_node(Some(root.as_ref())))
    }
}

/// A DOM element used as a reference frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WebElement(Element);

impl WebElement {
    /// Wraps a DOM element.
    pub fn new(element: Element) -> Self {
        Self(element)
    }

    /// The wrapped DOM element.
    pub fn as_element(&self) -> &Element {
        &self.0
    }

    /// Unwraps the DOM element.
    pub fn into_inner(self) -> Element {
        self.0
    }
}

impl From<Element> for WebElement {
    fn from(element: Element) -> Self {
        Self(element)
    }
}

impl LayoutElement for WebElement {
    fn bounding_client_rect(&self) -> Rect {
        let rect = self.0.get_bounding_client_rect();
        Rect::from_origin_size((rect.left(), rect.top()), (rect.width(), rect.height()))
    }

    fn parent_element(&self) -> Option<Self> {
        self.0.parent_element().map(Self)
    }

    fn scroll_offset(&self) -> Vec2 {
        Vec2::new(
            f64::from(self.0.scroll_left()),
            f64::from(self.0.scroll_top()),
        )
    }

    fn svg_transform(&self) -> Option<SvgTransform> {
        let graphics = self.0.dyn_ref::<SvgGraphicsElement>()?;
        let m = graphics.get_screen_ctm()?;
        let ctm = Affine::new([
            f64::from(m.a()),
            f64::from(m.b()),
            f64::from(m.c()),
            f64::from(m.d()),
            f64::from(m.e()),
            f64::from(m.f()),
        ]);
        let transform = SvgTransform::new(ctm);
        Some(match declared_extent(&self.0) {
            Some(extent) => transform.with_extent(extent),
            None => transform,
        })
    }
}

/// `width`/`height` of the SVG element kinds that declare them.
fn declared_extent(element: &Element) -> Option<SvgExtent> {
    macro_rules! sized {
        ($($kind:ty),+) => {
            $(
                if let Some(el) = element.dyn_ref::<$kind>() {
                    return Some(SvgExtent {
                        width: base_value(&el.width()),
                        height: base_value(&el.height()),
                    });
                }
            )+
        };
    }
    sized!(
        SvgsvgElement,
        SvgRectElement,
        SvgImageElement,
        SvgForeignObjectElement,
        SvgUseElement
    );
    None
}

fn base_value(length: &SvgAnimatedLength) -> SvgLength {
    SvgLength::Animated {
        base_val: length.base_val().value().ok().map(f64::from),
    }
}
