//! Geometry and identifier helpers used by stroke tracking.
//!
//! This module provides:
//! - Element-local pointer coordinates for mouse/pen and touch events
//! - Euclidean distance between stroke points
//! - Random version-4 identifiers for strokes and sessions

use rand::Rng;
use serde::{Deserialize, Serialize};

// ============================================================================
// Pointer Geometry
// ============================================================================

/// A point in element-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Layout of the element that received an event.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ElementMetrics {
    pub border_left_width: f64,
    pub border_top_width: f64,
    /// Left edge of the element's bounding rect, in client coordinates
    pub rect_left: f64,
    /// Top edge of the element's bounding rect, in client coordinates
    pub rect_top: f64,
}

impl ElementMetrics {
    fn local_x(&self, client_x: f64) -> f64 {
        client_x - self.border_left_width - self.rect_left
    }

    fn local_y(&self, client_y: f64) -> f64 {
        client_y - self.border_top_width - self.rect_top
    }
}

/// A single touch contact, in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    pub client_x: f64,
    pub client_y: f64,
}

/// A pointer or touch event as delivered by the host UI.
///
/// Mouse and pen events carry `client_x`/`client_y`; touch events usually
/// carry only `changed_touches`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PointerEvent {
    pub client_x: Option<f64>,
    pub client_y: Option<f64>,
    pub changed_touches: Vec<TouchPoint>,
    pub target: ElementMetrics,
}

/// A coordinate counts as missing when it is absent, zero or NaN.
fn usable(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0 && !v.is_nan())
}

/// Drops NaN so only a real `0.0` survives as a last resort.
fn not_nan(value: Option<f64>) -> Option<f64> {
    value.filter(|v| !v.is_nan())
}

/// Computes the event position relative to the target element's content box.
///
/// Each axis uses the primary pointer coordinate unless that coordinate is
/// missing, zero or NaN, in which case the first changed touch is used
/// instead. A local coordinate of exactly `0.0` therefore also switches to
/// the touch point when one exists.
///
/// Returns `None` if an axis has neither a usable primary coordinate nor a
/// touch.
pub fn pointer_position(event: &PointerEvent) -> Option<Point> {
    let target = &event.target;
    let touch = event.changed_touches.first();

    let primary_x = event.client_x.map(|x| target.local_x(x));
    let primary_y = event.client_y.map(|y| target.local_y(y));
    let touch_x = touch.map(|t| target.local_x(t.client_x));
    let touch_y = touch.map(|t| target.local_y(t.client_y));

    let x = usable(primary_x).or(touch_x).or(not_nan(primary_x))?;
    let y = usable(primary_y).or(touch_y).or(not_nan(primary_y))?;
    Some(Point::new(x, y))
}

/// Euclidean distance between two points.
pub fn linear_distance(p1: Point, p2: Point) -> f64 {
    let xs = p2.x - p1.x;
    let ys = p2.y - p1.y;
    (xs * xs + ys * ys).sqrt()
}

// ============================================================================
// Identifiers
// ============================================================================

/// Returns a random identifier of the form `xxxxxxxx-xxxx-4xxx-yxxx-xxxxxxxxxxxx`.
///
/// The version nibble is always `4` and `y` is one of `8`, `9`, `a`, `b`.
/// Identifiers are only statistically unique; do not use them as secrets.
pub fn uuid4() -> String {
    let bytes: [u8; 16] = rand::rng().random();
    uuid::Builder::from_random_bytes(bytes)
        .into_uuid()
        .hyphenated()
        .to_string()
}
