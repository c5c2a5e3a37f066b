//! Chromatic aberration.

use pfx_core::Texture;
use pfx_legacy::ChromaticAberrationSettings;
use pfx_profile::ChromaticAberration;
use tracing::trace;

/// Legacy fields with no destination.
pub const UNSUPPORTED: &[&str] = &[];

/// Converts legacy chromatic aberration settings.
///
/// The spectral texture is marked overridden even when absent.
pub fn convert(settings: &ChromaticAberrationSettings) -> ChromaticAberration {
    trace!(intensity = settings.intensity, "converters::chromatic_aberration");
    let mut out = ChromaticAberration::default();
    out.intensity.set(settings.intensity);
    out.spectral_lut.set(settings.spectral_texture.clone().map(Texture::from));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pfx_core::TextureRef;

    #[test]
    fn copies_intensity_and_texture() {
        let legacy = ChromaticAberrationSettings {
            spectral_texture: Some(TextureRef::new("spectral")),
            intensity: 0.8,
        };
        let ca = convert(&legacy);
        assert_eq!(ca.intensity.get(), 0.8);
        assert_eq!(ca.spectral_lut.value(), &Some(Texture::Asset(TextureRef::new("spectral"))));
        assert!(!ca.fast_mode.overridden());
    }

    #[test]
    fn absent_texture_overridden() {
        let ca = convert(&ChromaticAberrationSettings::default());
        assert!(ca.spectral_lut.overridden());
        assert!(ca.spectral_lut.value().is_none());
    }
}
