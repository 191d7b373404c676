// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host capabilities: the layout information the resolvers read.
//!
//! The resolvers never query a platform directly. A host adapter (for
//! example `understory_click_pos_web` for browsers, or a fake tree in tests)
//! implements [`LayoutHost`] for the document and [`LayoutElement`] for its
//! element handles. All values are read from layout that the host has
//! already computed; nothing is mutated.

use kurbo::{Affine, Point, Rect, Size, Vec2};

/// A visual element that can act as a reference frame.
pub trait LayoutElement: Clone {
    /// Axis-aligned bounding box in viewport (client) coordinates.
    ///
    /// Hidden or detached elements report an empty rect at the origin.
    fn bounding_client_rect(&self) -> Rect;

    /// The parent element, or `None` at the top of the tree.
    fn parent_element(&self) -> Option<Self>;

    /// How far this element's own content is scrolled.
    fn scroll_offset(&self) -> Vec2;

    /// SVG screen-space transform, if this element supports one.
    ///
    /// Return `Some` only when the element is an SVG graphics element, it has
    /// a screen transformation matrix, and the host can map points through
    /// it. Ordinary elements keep the default.
    fn svg_transform(&self) -> Option<SvgTransform> {
        None
    }
}

/// The document-level state of the host.
pub trait LayoutHost {
    /// Element handle type.
    type Element: LayoutElement;

    /// Current scroll offset of the viewport.
    fn scroll_offset(&self) -> Vec2;

    /// Size of the viewport in pixels.
    fn viewport_size(&self) -> Size;

    /// Full scrollable size of the document.
    fn document_size(&self) -> Size;

    /// Whether `element` bounds the ancestor scroll walk.
    ///
    /// Browsers report `true` for `body` and the document element. The walk
    /// stops at the first such ancestor without counting its scroll.
    fn is_scroll_root(&self, element: &Self::Element) -> bool;
}

/// Width or height of an SVG element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SvgLength {
    /// A plain number.
    Number(f64),
    /// An animated length; `base_val` is its base value when it is numeric.
    Animated {
        /// Base value of the length, if it could be read as a number.
        base_val: Option<f64>,
    },
}

impl SvgLength {
    fn is_present(self) -> bool {
        match self {
            // Zero and NaN count as missing.
            Self::Number(value) => value != 0.0 && !value.is_nan(),
            Self::Animated { .. } => true,
        }
    }

    /// The divisor this length contributes to percent scaling.
    ///
    /// Animated lengths without a numeric base value scale by `1.0`.
    pub fn divisor(self) -> f64 {
        match self {
            Self::Number(value) => value,
            Self::Animated { base_val } => base_val.unwrap_or(1.0),
        }
    }
}

/// Declared width and height of an SVG element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SvgExtent {
    /// Declared width.
    pub width: SvgLength,
    /// Declared height.
    pub height: SvgLength,
}

impl SvgExtent {
    /// Creates an extent from plain numbers.
    pub fn from_numbers(width: f64, height: f64) -> Self {
        Self {
            width: SvgLength::Number(width),
            height: SvgLength::Number(height),
        }
    }

    /// Size to divide by in percent mode, if both lengths are present.
    pub fn percent_divisor(self) -> Option<Size> {
        (self.width.is_present() && self.height.is_present())
            .then(|| Size::new(self.width.divisor(), self.height.divisor()))
    }
}

/// Screen-space transform of an SVG graphics element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SvgTransform {
    /// Maps element user space to viewport (client) space.
    pub screen_ctm: Affine,
    /// Declared size of the element, when it has one.
    pub extent: Option<SvgExtent>,
}

impl SvgTransform {
    /// Creates a transform with no declared extent.
    pub fn new(screen_ctm: Affine) -> Self {
        Self {
            screen_ctm,
            extent: None,
        }
    }

    /// Sets the declared extent.
    #[must_use]
    pub fn with_extent(mut self, extent: SvgExtent) -> Self {
        self.extent = Some(extent);
        self
    }

    /// Maps a client-space point into element user space.
    ///
    /// In percent mode the result is divided by the declared extent when both
    /// lengths are present; otherwise it is left in user units. A singular
    /// matrix yields non-finite coordinates.
    pub fn map_client(&self, client: Point, percent: bool) -> Point {
        let local = self.screen_ctm.inverse() * client;
        match self.extent.and_then(SvgExtent::percent_divisor) {
            Some(size) if percent => Point::new(local.x / size.width, local.y / size.height),
            _ => local,
        }
    }
}
