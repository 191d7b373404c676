// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversion from `web_sys` events into [`InputEvent`]s.

use kurbo::Point;
use understory_click_pos::{
    InputEvent, InputSource, MouseInput, PointerInput, TouchInput, TouchPoint,
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, Event, MouseEvent, PointerEvent, TouchEvent};

use crate::host::WebElement;

fn current_target(event: &Event) -> Option<WebElement> {
    event
        .current_target()?
        .dyn_into::<Element>()
        .ok()
        .map(WebElement::new)
}

fn with_target(source: InputSource, event: &Event) -> InputEvent<WebElement> {
    InputEvent {
        source,
        current_target: current_target(event),
    }
}

fn client_of(event: &MouseEvent) -> Point {
    Point::new(f64::from(event.client_x()), f64::from(event.client_y()))
}

/// Converts a mouse event.
pub fn from_mouse_event(event: &MouseEvent) -> InputEvent<WebElement> {
    let source = InputSource::Mouse(MouseInput {
        client: client_of(event),
        button: event.button(),
    });
    with_target(source, event)
}

/// Converts a pointer event.
pub fn from_pointer_event(event: &PointerEvent) -> InputEvent<WebElement> {
    let source = InputSource::Pointer(PointerInput {
        client: client_of(event),
        pointer_id: event.pointer_id().into(),
        button: event.button(),
        is_primary: event.is_primary(),
    });
    with_target(source, event)
}

/// Converts a touch event, keeping every active touch in list order.
pub fn from_touch_event(event: &TouchEvent) -> InputEvent<WebElement> {
    let list = event.touches();
    let touches = (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|touch| {
            TouchPoint::new(
                Point::new(f64::from(touch.client_x()), f64::from(touch.client_y())),
                touch.identifier(),
            )
        })
        .collect();
    with_target(InputSource::Touch(TouchInput { touches }), event)
}

fn has_property(event: &Event, name: &str) -> bool {
    js_sys::Reflect::has(event, &JsValue::from_str(name)).unwrap_or(false)
}

/// Converts any event, choosing its shape from the fields it exposes.
///
/// Events with a `touches` list are touch events, events with a `pointerId`
/// are pointer events, and events with `clientX` are mouse events. Anything
/// else becomes [`InputSource::Other`]. Fields are probed rather than
/// checked with `instanceof`, since some browsers do not define `TouchEvent`.
pub fn from_event(event: &Event) -> InputEvent<WebElement> {
    if has_property(event, "touches") {
        from_touch_event(event.unchecked_ref())
    } else if has_property(event, "pointerId") {
        from_pointer_event(event.unchecked_ref())
    } else if has_property(event, "clientX") {
        from_mouse_event(event.unchecked_ref())
    } else {
        with_target(InputSource::Other, event)
    }
}
