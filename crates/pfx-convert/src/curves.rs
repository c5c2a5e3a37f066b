//! Untouched tone curve detection.
//!
//! The legacy editor initializes the red, green, blue and master curves to
//! the same two-key diagonal with unit tangents. When all four still have
//! that exact signature the grading never used them, so the converted
//! grading can run in high dynamic range.
//!
//! Comparisons are exact on purpose: the check recognizes a written
//! initialization value, not a curve that is merely close to identity.

use pfx_core::Curve;

/// Combined key count of four untouched tone curves.
pub const DEFAULT_TONE_CURVE_KEYS: usize = 8;

/// Returns true if the four tone curves still carry the editor's
/// initialization signature.
///
/// Each curve must have exactly two keys and each of the eight keys must
/// have both tangents equal to 1.0. Key times and values are not checked.
#[allow(clippy::float_cmp)]
pub fn is_default_tone_curves(curves: [&Curve; 4]) -> bool {
    let total: usize = curves.iter().map(|c| c.len()).sum();
    if total != DEFAULT_TONE_CURVE_KEYS {
        return false;
    }
    curves.iter().all(|curve| {
        curve.len() == 2
            && curve
                .keys()
                .iter()
                .all(|k| k.in_tangent == 1.0 && k.out_tangent == 1.0)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pfx_core::Keyframe;

    fn identity4() -> [Curve; 4] {
        [Curve::identity(), Curve::identity(), Curve::identity(), Curve::identity()]
    }

    fn refs(c: &[Curve; 4]) -> [&Curve; 4] {
        [&c[0], &c[1], &c[2], &c[3]]
    }

    #[test]
    fn untouched_curves_detected() {
        let c = identity4();
        assert!(is_default_tone_curves(refs(&c)));
    }

    #[test]
    fn any_perturbed_tangent_fails() {
        for curve in 0..4 {
            for key in 0..2 {
                for side in 0..2 {
                    let mut c = identity4();
                    let mut keys = c[curve].keys().to_vec();
                    if side == 0 {
                        keys[key].in_tangent = 1.0 + f32::EPSILON;
                    } else {
                        keys[key].out_tangent = 0.999;
                    }
                    c[curve] = Curve::new(keys);
                    assert!(!is_default_tone_curves(refs(&c)), "curve {curve} key {key} side {side}");
                }
            }
        }
    }

    #[test]
    fn moved_keys_with_unit_tangents_still_detected() {
        let mut c = identity4();
        c[3] = Curve::new(vec![Keyframe::new(0.0, 0.2, 1.0, 1.0), Keyframe::new(1.0, 0.8, 1.0, 1.0)]);
        assert!(is_default_tone_curves(refs(&c)));
    }

    #[test]
    fn uneven_distribution_of_eight_keys_fails() {
        let mut c = identity4();
        c[0] = Curve::new(vec![
            Keyframe::new(0.0, 0.0, 1.0, 1.0),
            Keyframe::new(0.5, 0.5, 1.0, 1.0),
            Keyframe::new(1.0, 1.0, 1.0, 1.0),
        ]);
        c[1] = Curve::new(vec![Keyframe::new(0.0, 0.0, 1.0, 1.0)]);
        assert!(!is_default_tone_curves(refs(&c)));
    }

    #[test]
    fn extra_key_fails() {
        let mut c = identity4();
        c[2] = Curve::new(vec![
            Keyframe::new(0.0, 0.0, 1.0, 1.0),
            Keyframe::new(0.5, 0.5, 1.0, 1.0),
            Keyframe::new(1.0, 1.0, 1.0, 1.0),
        ]);
        assert!(!is_default_tone_curves(refs(&c)));
    }
}
