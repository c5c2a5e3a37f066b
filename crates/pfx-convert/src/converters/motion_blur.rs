//! Motion blur.

use pfx_legacy::MotionBlurSettings;
use pfx_profile::MotionBlur;
use tracing::trace;

/// Legacy fields with no destination.
pub const UNSUPPORTED: &[&str] = &["frameBlending"];

/// Converts legacy motion blur settings.
pub fn convert(settings: &MotionBlurSettings) -> MotionBlur {
    trace!(shutter_angle = settings.shutter_angle, "converters::motion_blur");
    let mut out = MotionBlur::default();
    out.sample_count.set(settings.sample_count);
    out.shutter_angle.set(settings.shutter_angle);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copies_shutter_and_samples() {
        let legacy = MotionBlurSettings {
            shutter_angle: 180.0,
            sample_count: 16,
            frame_blending: 0.5,
        };
        let mb = convert(&legacy);
        assert_eq!(mb.shutter_angle.get(), 180.0);
        assert_eq!(mb.sample_count.get(), 16);
        assert!(mb.shutter_angle.overridden() && mb.sample_count.overridden());
    }
}
