// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input event model: a closed union over mouse, touch, and pointer shapes.
//!
//! Host adapters build an [`InputEvent`] once, at the boundary where the
//! platform event is received. The resolvers then dispatch on
//! [`InputSource`] instead of probing for fields.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Point;

/// Stable identifier of a touch or pointer.
///
/// Platforms report either numeric identifiers (DOM `Touch.identifier`,
/// `PointerEvent.pointerId`) or opaque names; both are preserved as given.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum PointerId {
    /// Numeric identifier.
    Number(i64),
    /// Named identifier.
    Name(String),
}

impl PointerId {
    /// Identifier reported for mouse input, which has no identifier of its own.
    pub const MOUSE: Self = Self::Number(0);
}

impl From<i32> for PointerId {
    fn from(id: i32) -> Self {
        Self::Number(id.into())
    }
}

impl From<String> for PointerId {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<&str> for PointerId {
    fn from(name: &str) -> Self {
        Self::Name(name.into())
    }
}

/// A mouse event position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MouseInput {
    /// Position in viewport (client) pixels.
    pub client: Point,
    /// Button that changed state, using DOM numbering (`0` is the main button).
    pub button: i16,
}

/// One active contact of a touch event.
#[derive(Clone, Debug, PartialEq)]
pub struct TouchPoint {
    /// Position in viewport (client) pixels.
    pub client: Point,
    /// Identifier stable for the lifetime of the contact.
    pub id: PointerId,
}

impl TouchPoint {
    /// Creates a touch contact.
    pub fn new(client: Point, id: impl Into<PointerId>) -> Self {
        Self {
            client,
            id: id.into(),
        }
    }
}

/// A touch event with its active contacts, in platform order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TouchInput {
    /// Active contacts. The first entry is used when a single position is needed.
    pub touches: Vec<TouchPoint>,
}

/// A pointer event position.
#[derive(Clone, Debug, PartialEq)]
pub struct PointerInput {
    /// Position in viewport (client) pixels.
    pub client: Point,
    /// Identifier of the pointer that produced the event.
    pub pointer_id: PointerId,
    /// Button that changed state, using DOM numbering.
    pub button: i16,
    /// Whether this is the primary pointer of its type.
    pub is_primary: bool,
}

/// The shape of an input event.
#[derive(Clone, Debug, PartialEq)]
pub enum InputSource {
    /// Mouse event.
    Mouse(MouseInput),
    /// Touch event carrying zero or more contacts.
    Touch(TouchInput),
    /// Pointer event.
    Pointer(PointerInput),
    /// An event with no client coordinates, such as a custom event.
    Other,
}

/// An input event together with the element whose listener is handling it.
///
/// `E` is the host's element handle; see [`LayoutElement`](crate::LayoutElement).
#[derive(Clone, Debug, PartialEq)]
pub struct InputEvent<E> {
    /// Shape-specific payload.
    pub source: InputSource,
    /// The element the event is currently dispatched to, if known.
    ///
    /// Used as the reference element for
    /// [`ReferenceFrame::CurrentTarget`](crate::ReferenceFrame::CurrentTarget).
    pub current_target: Option<E>,
}

impl<E> InputEvent<E> {
    /// Creates an event from a source with no current target.
    pub fn new(source: InputSource) -> Self {
        Self {
            source,
            current_target: None,
        }
    }

    /// Creates a mouse event for the main button.
    pub fn mouse(client: Point) -> Self {
        Self::new(InputSource::Mouse(MouseInput { client, button: 0 }))
    }

    /// Creates a touch event from its active contacts.
    pub fn touch(touches: impl IntoIterator<Item = TouchPoint>) -> Self {
        Self::new(InputSource::Touch(TouchInput {
            touches: touches.into_iter().collect(),
        }))
    }

    /// Creates a primary pointer event for the main button.
    pub fn pointer(client: Point, pointer_id: impl Into<PointerId>) -> Self {
        Self::new(InputSource::Pointer(PointerInput {
            client,
            pointer_id: pointer_id.into(),
            button: 0,
            is_primary: true,
        }))
    }

    /// Creates an event that carries no coordinates.
    pub fn other() -> Self {
        Self::new(InputSource::Other)
    }

    /// Sets the current target.
    #[must_use]
    pub fn with_current_target(mut self, target: E) -> Self {
        self.current_target = Some(target);
        self
    }

    /// Returns the raw viewport position of this event.
    ///
    /// Touch events report their first contact. Returns `None` for events
    /// without contacts or coordinates, and for non-finite coordinates.
    pub fn client_position(&self) -> Option<Point> {
        let client = match &self.source {
            InputSource::Mouse(mouse) => mouse.client,
            InputSource::Pointer(pointer) => pointer.client,
            InputSource::Touch(touch) => touch.touches.first()?.client,
            InputSource::Other => return None,
        };
        finite(client)
    }
}

pub(crate) fn finite(pt: Point) -> Option<Point> {
    pt.is_finite().then_some(pt)
}
