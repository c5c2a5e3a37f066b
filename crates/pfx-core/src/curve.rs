//! Keyframed curves.
//!
//! A [`Curve`] is an ordered list of [`Keyframe`] control points. Between
//! two keys the curve is a cubic Hermite segment whose end slopes are the
//! left key's out-tangent and the right key's in-tangent. Outside the key
//! range the curve clamps to the first/last value.
//!
//! Curves are copied by value between schema versions, so equality here is
//! exact field equality; nothing is resampled or normalized.
//!
//! # Example
//!
//! ```rust
//! use pfx_core::{Curve, Keyframe};
//!
//! let curve = Curve::new(vec![
//!     Keyframe::new(0.0, 0.0, 0.0, 0.0),
//!     Keyframe::new(1.0, 1.0, 0.0, 0.0),
//! ]);
//! // Flat tangents give a smoothstep between the keys
//! assert_eq!(curve.evaluate(0.5), 0.5);
//! assert_eq!(curve.evaluate(2.0), 1.0);
//! ```

use serde::{Deserialize, Serialize};

/// A single curve control point.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Keyframe {
    /// Position on the horizontal axis.
    pub time: f32,
    /// Curve value at `time`.
    pub value: f32,
    /// Incoming slope.
    pub in_tangent: f32,
    /// Outgoing slope.
    pub out_tangent: f32,
}

impl Keyframe {
    /// Creates a keyframe.
    #[inline]
    pub const fn new(time: f32, value: f32, in_tangent: f32, out_tangent: f32) -> Self {
        Self {
            time,
            value,
            in_tangent,
            out_tangent,
        }
    }
}

/// Ordered sequence of keyframes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Curve {
    keys: Vec<Keyframe>,
}

impl Curve {
    /// Creates a curve from keys, sorting them by time.
    pub fn new(mut keys: Vec<Keyframe>) -> Self {
        keys.sort_by(|a, b| a.time.total_cmp(&b.time));
        Self { keys }
    }

    /// Curve with no keys.
    #[inline]
    pub const fn empty() -> Self {
        Self { keys: Vec::new() }
    }

    /// Two-key diagonal from (0,0) to (1,1) with unit tangents.
    ///
    /// This is the exact shape the legacy editor writes for an untouched
    /// master/red/green/blue curve.
    pub fn identity() -> Self {
        Self {
            keys: vec![Keyframe::new(0.0, 0.0, 1.0, 1.0), Keyframe::new(1.0, 1.0, 1.0, 1.0)],
        }
    }

    /// Control points in time order.
    #[inline]
    pub fn keys(&self) -> &[Keyframe] {
        &self.keys
    }

    /// Number of control points.
    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// True if the curve has no control points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Evaluates the curve at `t`.
    ///
    /// Returns 0 for an empty curve. Non-finite tangents produce a stepped
    /// segment holding the left key's value.
    pub fn evaluate(&self, t: f32) -> f32 {
        let (first, last) = match (self.keys.first(), self.keys.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return 0.0,
        };
        if t <= first.time {
            return first.value;
        }
        if t >= last.time {
            return last.value;
        }

        // First key strictly after t; t > first.time guarantees index >= 1
        let i = self.keys.partition_point(|k| k.time <= t);
        let k0 = &self.keys[i - 1];
        let k1 = &self.keys[i];
        hermite(k0, k1, t)
    }
}

#[inline]
fn hermite(k0: &Keyframe, k1: &Keyframe, t: f32) -> f32 {
    let dt = k1.time - k0.time;
    if dt <= 0.0 {
        return k0.value;
    }
    if !k0.out_tangent.is_finite() || !k1.in_tangent.is_finite() {
        return k0.value;
    }

    let s = (t - k0.time) / dt;
    let s2 = s * s;
    let s3 = s2 * s;

    let m0 = k0.out_tangent * dt;
    let m1 = k1.in_tangent * dt;

    let h00 = 2.0 * s3 - 3.0 * s2 + 1.0;
    let h10 = s3 - 2.0 * s2 + s;
    let h01 = -2.0 * s3 + 3.0 * s2;
    let h11 = s3 - s2;

    h00 * k0.value + h10 * m0 + h01 * k1.value + h11 * m1
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn identity_is_diagonal() {
        let c = Curve::identity();
        for i in 0..=10 {
            let t = i as f32 / 10.0;
            assert_relative_eq!(c.evaluate(t), t, epsilon = 1e-6);
        }
    }

    #[test]
    fn clamps_outside_range() {
        let c = Curve::identity();
        assert_eq!(c.evaluate(-1.0), 0.0);
        assert_eq!(c.evaluate(3.0), 1.0);
    }

    #[test]
    fn empty_evaluates_to_zero() {
        assert_eq!(Curve::empty().evaluate(0.5), 0.0);
        assert!(Curve::empty().is_empty());
    }

    #[test]
    fn keys_are_sorted() {
        let c = Curve::new(vec![
            Keyframe::new(1.0, 1.0, 0.0, 0.0),
            Keyframe::new(0.0, 0.0, 0.0, 0.0),
        ]);
        assert_eq!(c.keys()[0].time, 0.0);
        assert_eq!(c.len(), 2);
    }

    #[test]
    fn infinite_tangent_steps() {
        let c = Curve::new(vec![
            Keyframe::new(0.0, 0.2, 0.0, f32::INFINITY),
            Keyframe::new(1.0, 0.8, 0.0, 0.0),
        ]);
        assert_eq!(c.evaluate(0.7), 0.2);
    }

    #[test]
    fn three_key_segment_selection() {
        let c = Curve::new(vec![
            Keyframe::new(0.0, 0.0, 0.0, 0.0),
            Keyframe::new(0.5, 1.0, 0.0, 0.0),
            Keyframe::new(1.0, 0.0, 0.0, 0.0),
        ]);
        assert_relative_eq!(c.evaluate(0.5), 1.0);
        assert_relative_eq!(c.evaluate(0.25), 0.5, epsilon = 1e-6);
        assert_relative_eq!(c.evaluate(0.75), 0.5, epsilon = 1e-6);
    }

    #[test]
    fn serializes_as_plain_list() {
        let yaml = serde_yaml::to_string(&Curve::identity()).unwrap();
        assert!(yaml.starts_with("- time: 0"));
        let back: Curve = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back, Curve::identity());
    }
}
