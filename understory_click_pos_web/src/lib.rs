// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_click_pos_web --heading-base-level=0

//! Browser host for `understory_click_pos`.
//!
//! When targeting `wasm32`, this crate provides:
//! - `WebHost`, a `LayoutHost` that reads scroll offsets, viewport and
//!   document sizes from the global `window`, and treats `body` and the
//!   document element as the end of the ancestor scroll walk.
//! - `WebElement`, a `LayoutElement` over `web_sys::Element` that reads
//!   `getBoundingClientRect`, `scrollLeft`/`scrollTop`, and, for SVG
//!   graphics elements, `getScreenCTM` plus the declared `width`/`height`.
//! - Conversions from `web_sys` mouse, pointer and touch events into
//!   `InputEvent`s.
//! - `click_pos` and `touch_positions`, which do all of the above for a raw
//!   `web_sys::Event`.
//!
//! ```no_run
//! #[cfg(target_arch = "wasm32")]
//! fn on_pointer_down(event: &web_sys::Event, canvas: web_sys::Element) {
//!     use understory_click_pos::{ReferenceFrame, ResolveOptions};
//!     use understory_click_pos_web::{WebElement, click_pos};
//!
//!     let options = ResolveOptions::new()
//!         .with_frame(ReferenceFrame::Element(WebElement::new(canvas)))
//!         .with_percent(true);
//!     if let Some(pos) = click_pos(event, &options) {
//!         // `pos` is a fraction of the canvas size.
//!         let _ = pos;
//!     }
//! }
//! ```
//!
//! On other targets this crate is empty.

#![no_std]

#[cfg(target_arch = "wasm32")]
extern crate alloc;

#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod host;

#[cfg(target_arch = "wasm32")]
pub use events::{from_event, from_mouse_event, from_pointer_event, from_touch_event};
#[cfg(target_arch = "wasm32")]
pub use host::{WebElement, WebHost};

#[cfg(target_arch = "wasm32")]
use alloc::vec::Vec;
#[cfg(target_arch = "wasm32")]
use kurbo::Point;
#[cfg(target_arch = "wasm32")]
use understory_click_pos::{ResolveOptions, TaggedPoint, resolve, resolve_all};

/// Resolves the position of a DOM event using the global document.
///
/// Returns `None` when there is no DOM, and otherwise behaves like
/// [`understory_click_pos::resolve`].
#[cfg(target_arch = "wasm32")]
pub fn click_pos(
    event: &web_sys::Event,
    options: &ResolveOptions<'_, WebElement>,
) -> Option<Point> {
    let host = WebHost::new()?;
    resolve(&host, &from_event(event), options)
}

/// Resolves every active contact of a DOM event using the global document.
///
/// Returns an empty list when there is no DOM, and otherwise behaves like
/// [`understory_click_pos::resolve_all`].
#[cfg(target_arch = "wasm32")]
pub fn touch_positions(
    event: &web_sys::Event,
    options: &ResolveOptions<'_, WebElement>,
) -> Vec<TaggedPoint> {
    WebHost::new().map_or_else(Vec::new, |host| {
        resolve_all(&host, &from_event(event), options)
    })
}
