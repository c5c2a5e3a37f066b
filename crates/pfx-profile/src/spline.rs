//! Color grading spline.

use pfx_core::{Curve, Vector2};
use serde::{Deserialize, Serialize};

/// A keyframed curve plus the metadata the grading pass needs to sample it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Spline {
    /// Control points.
    pub curve: Curve,
    /// Value used when the curve has no keys.
    pub zero_value: f32,
    /// Whether the curve wraps around its range (hue curves).
    #[serde(rename = "loop")]
    pub looped: bool,
    /// Horizontal range.
    pub range: Vector2,
}

impl Default for Spline {
    fn default() -> Self {
        Self::new(Curve::empty(), 0.0, false)
    }
}

impl Spline {
    /// Creates a spline over the unit range.
    pub fn new(curve: Curve, zero_value: f32, looped: bool) -> Self {
        Self {
            curve,
            zero_value,
            looped,
            range: Vector2::new(0.0, 1.0),
        }
    }

    /// Replaces the control points, keeping the sampling metadata.
    pub fn with_curve(mut self, curve: Curve) -> Self {
        self.curve = curve;
        self
    }
}
