// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single- and multi-point position resolution.

use alloc::vec::Vec;

use kurbo::{Point, Size, Vec2};
use tracing::{debug, trace};

use crate::event::{InputEvent, InputSource, PointerId, finite};
use crate::host::{LayoutElement, LayoutHost};
use crate::options::{ReferenceFrame, ResolveOptions};

/// Kind of input a [`TaggedPoint`] came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PointerKind {
    /// A touch contact.
    Touch,
    /// A pointer event.
    Pointer,
    /// A mouse event.
    Mouse,
}

/// A resolved position tagged with the contact it belongs to.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TaggedPoint {
    /// Resolved position.
    pub pos: Point,
    /// Touch identifier, pointer id, or [`PointerId::MOUSE`].
    pub id: PointerId,
    /// Input kind.
    pub kind: PointerKind,
}

/// Resolves the position of `event` in the frame chosen by `options`.
///
/// Touch events use their first contact. Returns `None` when the filter
/// rejects the event, when the event carries no finite coordinates, or when
/// the reference element is hidden or detached (its bounding rect has zero
/// width and zero height).
pub fn resolve<H: LayoutHost>(
    host: &H,
    event: &InputEvent<H::Element>,
    options: &ResolveOptions<'_, H::Element>,
) -> Option<Point> {
    if !options.accepts(event) {
        trace!("event rejected by filter");
        return None;
    }
    locate(host, event, options)
}

/// Resolves every active contact of `event`.
///
/// Touch events yield one entry per contact, in order; contacts that do not
/// resolve are skipped. Pointer and mouse events yield at most one entry.
/// The filter is applied once to the whole event: a rejected event yields an
/// empty list.
pub fn resolve_all<H: LayoutHost>(
    host: &H,
    event: &InputEvent<H::Element>,
    options: &ResolveOptions<'_, H::Element>,
) -> Vec<TaggedPoint> {
    if !options.accepts(event) {
        trace!("event rejected by filter");
        return Vec::new();
    }
    match &event.source {
        InputSource::Touch(input) if !input.touches.is_empty() => {
            let target = event.current_target.as_ref();
            input
                .touches
                .iter()
                .filter_map(|touch| {
                    let client = finite(touch.client)?;
                    let pos = in_frame(host, client, target, options)?;
                    Some(TaggedPoint {
                        pos,
                        id: touch.id.clone(),
                        kind: PointerKind::Touch,
                    })
                })
                .collect()
        }
        InputSource::Pointer(input) => locate(host, event, options)
            .map(|pos| TaggedPoint {
                pos,
                id: input.pointer_id.clone(),
                kind: PointerKind::Pointer,
            })
            .into_iter()
            .collect(),
        _ => locate(host, event, options)
            .map(|pos| TaggedPoint {
                pos,
                id: PointerId::MOUSE,
                kind: PointerKind::Mouse,
            })
            .into_iter()
            .collect(),
    }
}

/// Extraction plus frame mapping, without the filter.
fn locate<H: LayoutHost>(
    host: &H,
    event: &InputEvent<H::Element>,
    options: &ResolveOptions<'_, H::Element>,
) -> Option<Point> {
    let Some(client) = event.client_position() else {
        trace!("event has no client coordinates");
        return None;
    };
    in_frame(host, client, event.current_target.as_ref(), options)
}

fn in_frame<H: LayoutHost>(
    host: &H,
    client: Point,
    current_target: Option<&H::Element>,
    options: &ResolveOptions<'_, H::Element>,
) -> Option<Point> {
    match &options.frame {
        ReferenceFrame::Viewport => {
            let mut pos = client;
            if options.normalize_scroll {
                pos -= host.scroll_offset();
            }
            if options.percent {
                pos = fraction_of(pos, host.viewport_size());
            }
            Some(pos)
        }
        ReferenceFrame::Document => {
            let pos = client + host.scroll_offset();
            if options.percent {
                Some(fraction_of(pos, host.document_size()))
            } else {
                Some(pos)
            }
        }
        ReferenceFrame::Element(element) => in_element(host, element, client, options),
        ReferenceFrame::CurrentTarget => match current_target {
            Some(element) => in_element(host, element, client, options),
            None => {
                trace!("no current target; using raw client position");
                Some(client)
            }
        },
    }
}

fn in_element<H: LayoutHost>(
    host: &H,
    element: &H::Element,
    client: Point,
    options: &ResolveOptions<'_, H::Element>,
) -> Option<Point> {
    if let Some(svg) = element.svg_transform() {
        debug!(ctm = ?svg.screen_ctm.as_coeffs(), "mapping through SVG screen transform");
        return Some(svg.map_client(client, options.percent));
    }

    let rect = element.bounding_client_rect();
    if rect.width() == 0.0 && rect.height() == 0.0 {
        trace!("reference element is hidden or detached");
        return None;
    }
    let mut pos = Point::new(client.x - rect.min_x(), client.y - rect.min_y());
    if options.normalize_scroll {
        pos -= host.scroll_offset() + ancestor_scroll(host, element);
    }
    if options.percent {
        // Only one side can be zero here; the division is left to produce a
        // non-finite component.
        pos = fraction_of(pos, rect.size());
    }
    Some(pos)
}

/// Sum of the scroll offsets of `element`'s ancestors below the scroll root.
fn ancestor_scroll<H: LayoutHost>(host: &H, element: &H::Element) -> Vec2 {
    let mut total = Vec2::ZERO;
    let mut next = element.parent_element();
    while let Some(parent) = next {
        if host.is_scroll_root(&parent) {
            break;
        }
        total += parent.scroll_offset();
        next = parent.parent_element();
    }
    total
}

fn fraction_of(pos: Point, extent: Size) -> Point {
    Point::new(pos.x / extent.width, pos.y / extent.height)
}
