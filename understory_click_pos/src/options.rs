// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use core::fmt;

use crate::event::InputEvent;

/// Coordinate space that resolved positions are expressed in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReferenceFrame<E> {
    /// Relative to the viewport's top-left corner.
    Viewport,
    /// Relative to the document origin, including the viewport scroll.
    Document,
    /// Relative to the given element.
    Element(E),
    /// Relative to the event's current target.
    ///
    /// Events without a current target resolve to their raw viewport
    /// position, with no scroll or percent adjustment.
    CurrentTarget,
}

impl<E> Default for ReferenceFrame<E> {
    fn default() -> Self {
        Self::Viewport
    }
}

/// Predicate deciding whether an event is resolved at all.
pub type EventFilter<'a, E> = dyn Fn(&InputEvent<E>) -> bool + 'a;

/// Options shared by [`resolve`](crate::resolve) and
/// [`resolve_all`](crate::resolve_all).
///
/// ```rust
/// use understory_click_pos::{InputSource, ReferenceFrame, ResolveOptions};
///
/// let options = ResolveOptions::<()>::new()
///     .with_frame(ReferenceFrame::Document)
///     .with_percent(true)
///     .with_filter(|ev| matches!(&ev.source, InputSource::Mouse(m) if m.button == 0));
/// assert!(options.percent);
/// assert!(!options.normalize_scroll);
/// ```
pub struct ResolveOptions<'a, E> {
    /// Target coordinate space. Defaults to [`ReferenceFrame::Viewport`].
    pub frame: ReferenceFrame<E>,
    /// Subtract scroll offsets, for content with fixed or sticky positioning.
    ///
    /// Has no effect for [`ReferenceFrame::Document`], which always includes
    /// the viewport scroll.
    pub normalize_scroll: bool,
    /// Express positions as fractions of the frame's extent instead of pixels.
    pub percent: bool,
    filter: Option<Box<EventFilter<'a, E>>>,
}

impl<'a, E> ResolveOptions<'a, E> {
    /// Creates options with the default viewport frame and no adjustments.
    pub fn new() -> Self {
        Self {
            frame: ReferenceFrame::Viewport,
            normalize_scroll: false,
            percent: false,
            filter: None,
        }
    }

    /// Sets the reference frame.
    #[must_use]
    pub fn with_frame(mut self, frame: ReferenceFrame<E>) -> Self {
        self.frame = frame;
        self
    }

    /// Sets whether scroll offsets are subtracted.
    #[must_use]
    pub fn with_normalize_scroll(mut self, normalize_scroll: bool) -> Self {
        self.normalize_scroll = normalize_scroll;
        self
    }

    /// Sets whether positions are expressed as fractions of the frame extent.
    #[must_use]
    pub fn with_percent(mut self, percent: bool) -> Self {
        self.percent = percent;
        self
    }

    /// Sets a predicate that must accept an event before it is resolved.
    #[must_use]
    pub fn with_filter(mut self, filter: impl Fn(&InputEvent<E>) -> bool + 'a) -> Self {
        self.filter = Some(Box::new(filter));
        self
    }

    /// Removes the filter predicate.
    pub fn clear_filter(&mut self) {
        self.filter = None;
    }

    /// Returns `true` if a filter predicate is set.
    pub fn has_filter(&self) -> bool {
        self.filter.is_some()
    }

    /// Runs the filter predicate; events are accepted when there is none.
    pub fn accepts(&self, event: &InputEvent<E>) -> bool {
        self.filter.as_ref().is_none_or(|filter| filter(event))
    }
}

impl<E> Default for ResolveOptions<'_, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: fmt::Debug> fmt::Debug for ResolveOptions<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolveOptions")
            .field("frame", &self.frame)
            .field("normalize_scroll", &self.normalize_scroll)
            .field("percent", &self.percent)
            .field("filter", &self.filter.as_ref().map(|_| "<fn>"))
            .finish()
    }
}
