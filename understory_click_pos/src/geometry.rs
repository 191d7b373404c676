// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Small geometry helpers over resolved points.

use kurbo::{Point, Rect, Vec2};

/// Error returned when a helper that needs at least one point gets none.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("no points provided")]
pub struct EmptyPointsError;

/// Euclidean distance between `a` and `b`.
pub fn distance(a: Point, b: Point) -> f64 {
    a.distance(b)
}

/// Angle in radians of the direction from `a` to `b`.
///
/// `0` points along the positive x axis and values grow counterclockwise,
/// in the range `(-π, π]`.
pub fn angle(a: Point, b: Point) -> f64 {
    (b - a).atan2()
}

/// Smallest axis-aligned rect containing all `points`.
///
/// `x0`/`y0` hold the minimum and `x1`/`y1` the maximum coordinates.
pub fn bounding_box(points: &[Point]) -> Result<Rect, EmptyPointsError> {
    let (first, rest) = points.split_first().ok_or(EmptyPointsError)?;
    let mut bounds = Rect::from_points(*first, *first);
    for pt in rest {
        bounds.x0 = bounds.x0.min(pt.x);
        bounds.y0 = bounds.y0.min(pt.y);
        bounds.x1 = bounds.x1.max(pt.x);
        bounds.y1 = bounds.y1.max(pt.y);
    }
    Ok(bounds)
}

/// Mean position of `points`.
pub fn centroid(points: &[Point]) -> Result<Point, EmptyPointsError> {
    if points.is_empty() {
        return Err(EmptyPointsError);
    }
    let sum = points.iter().fold(Vec2::ZERO, |acc, pt| acc + pt.to_vec2());
    let n = points.len() as f64;
    Ok((sum / n).to_point())
}
