// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_click_pos --heading-base-level=0

//! Understory Click Pos: resolve pointer positions in a chosen coordinate space.
//!
//! Given a mouse, touch, or pointer event, this crate computes where it
//! happened relative to the viewport, the whole document, or a specific
//! element (including SVG elements with their own user space). Positions can
//! optionally have scroll offsets removed and be expressed as fractions of the
//! frame's extent.
//!
//! It does **not** listen for events or keep state between calls. Callers are
//! expected to:
//! - Convert platform events into an [`InputEvent`] at the boundary.
//! - Provide current layout through a [`LayoutHost`] and its
//!   [`LayoutElement`] handles (`understory_click_pos_web` does this for
//!   browsers).
//! - Call [`resolve`] for one position or [`resolve_all`] for every contact.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size, Vec2};
//! use understory_click_pos::{
//!     InputEvent, LayoutElement, LayoutHost, ReferenceFrame, ResolveOptions, resolve,
//! };
//!
//! #[derive(Clone)]
//! struct Panel(Rect);
//!
//! impl LayoutElement for Panel {
//!     fn bounding_client_rect(&self) -> Rect {
//!         self.0
//!     }
//!     fn parent_element(&self) -> Option<Self> {
//!         None
//!     }
//!     fn scroll_offset(&self) -> Vec2 {
//!         Vec2::ZERO
//!     }
//! }
//!
//! struct Page;
//!
//! impl LayoutHost for Page {
//!     type Element = Panel;
//!     fn scroll_offset(&self) -> Vec2 {
//!         Vec2::new(0.0, 50.0)
//!     }
//!     fn viewport_size(&self) -> Size {
//!         Size::new(400.0, 400.0)
//!     }
//!     fn document_size(&self) -> Size {
//!         Size::new(1000.0, 2000.0)
//!     }
//!     fn is_scroll_root(&self, _: &Panel) -> bool {
//!         false
//!     }
//! }
//!
//! let panel = Panel(Rect::new(30.0, 40.0, 130.0, 140.0));
//! let event = InputEvent::mouse(Point::new(50.0, 60.0));
//!
//! let options = ResolveOptions::new().with_frame(ReferenceFrame::Element(panel));
//! assert_eq!(resolve(&Page, &event, &options), Some(Point::new(20.0, 20.0)));
//!
//! let options = ResolveOptions::new().with_frame(ReferenceFrame::Document);
//! assert_eq!(resolve(&Page, &event, &options), Some(Point::new(50.0, 110.0)));
//! ```
//!
//! ## Multiple contacts
//!
//! [`resolve_all`] returns every touch contact, tagged with its identifier and
//! a [`PointerKind`]. Pointer and mouse events produce a single entry.
//! Combine the results with [`distance`], [`angle`], [`bounding_box`] and
//! [`centroid`].
//!
//! ## Absence and degenerate results
//!
//! Resolution never fails with an error. It returns `None` (or an empty list)
//! when the filter rejects the event, when the event has no coordinates, or
//! when the reference element is hidden or detached. Percent mode divides by
//! the frame extent as-is, so a zero-sized viewport or a rect with exactly one
//! zero side gives non-finite components.
//!
//! ## Features
//!
//! - `std` (default): build Kurbo and friends with the standard library.
//! - `libm`: use `libm` for float math in `no_std` builds.
//! - `serde`: serialize [`TaggedPoint`], [`PointerId`] and [`PointerKind`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod event;
mod geometry;
mod host;
mod options;
mod resolve;

pub use event::{
    InputEvent, InputSource, MouseInput, PointerId, PointerInput, TouchInput, TouchPoint,
};
pub use geometry::{EmptyPointsError, angle, bounding_box, centroid, distance};
pub use host::{LayoutElement, LayoutHost, SvgExtent, SvgLength, SvgTransform};
pub use options::{EventFilter, ReferenceFrame, ResolveOptions};
pub use resolve::{PointerKind, TaggedPoint, resolve, resolve_all};
