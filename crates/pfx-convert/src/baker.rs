//! LUT baking capability.
//!
//! The legacy-LUT color grading path needs something that can render the
//! legacy grading into a lookup table. The engine never does this itself;
//! the host supplies an implementation of [`LutBaker`]. `pfx-cli` ships a
//! CPU reference baker.

use pfx_core::Texture;
use pfx_legacy::ColorGradingSettings;

use crate::ConvertResult;

/// Renders legacy color grading settings into a lookup table texture.
///
/// The returned texture is treated as opaque and attached to the converted
/// profile as is.
pub trait LutBaker: Send + Sync {
    /// Bakes `settings` into a lookup table.
    fn bake(&self, settings: &ColorGradingSettings) -> ConvertResult<Texture>;
}

impl<F> LutBaker for F
where
    F: Fn(&ColorGradingSettings) -> ConvertResult<Texture> + Send + Sync,
{
    fn bake(&self, settings: &ColorGradingSettings) -> ConvertResult<Texture> {
        self(settings)
    }
}
