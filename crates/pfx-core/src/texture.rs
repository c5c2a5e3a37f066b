//! Texture slots.
//!
//! Profiles never own image files. A texture field either points at an
//! asset managed by the host ([`TextureRef`]) or carries a lookup table
//! produced during conversion ([`BakedTexture`]). Both are opaque to the
//! conversion engine: they are copied, never inspected.

use serde::{Deserialize, Serialize};

use crate::{CoreError, CoreResult};

/// Reference to a host-managed texture asset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextureRef {
    /// Asset identifier.
    pub guid: String,
    /// Sub-object identifier inside the asset file.
    #[serde(default)]
    pub file_id: i64,
}

impl TextureRef {
    /// Creates a reference to the main object of an asset.
    pub fn new(guid: impl Into<String>) -> Self {
        Self {
            guid: guid.into(),
            file_id: 0,
        }
    }
}

/// A 2D texture generated in-process, stored as linear RGBA floats.
///
/// Baked color lookup tables use the strip layout: an `N^3` lattice stored
/// as `N` slices of `N x N` placed side by side, i.e. `N*N` wide and `N`
/// high. Red varies fastest along a slice row, green along the height, and
/// blue selects the slice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BakedTexture {
    /// Display name.
    pub name: String,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Row-major pixels, `width * height` entries.
    pub pixels: Vec<[f32; 4]>,
}

impl BakedTexture {
    /// Creates a texture, validating the pixel count.
    pub fn new(name: impl Into<String>, width: u32, height: u32, pixels: Vec<[f32; 4]>) -> CoreResult<Self> {
        if width == 0 || height == 0 {
            return Err(CoreError::InvalidDimensions { width, height });
        }
        let expected = (width as usize)
            .checked_mul(height as usize)
            .ok_or(CoreError::InvalidDimensions { width, height })?;
        if pixels.len() != expected {
            return Err(CoreError::pixel_count_mismatch(width, height, expected, pixels.len()));
        }
        Ok(Self {
            name: name.into(),
            width,
            height,
            pixels,
        })
    }

    /// Lattice size if this texture has the strip LUT layout.
    pub fn lut_size(&self) -> Option<u32> {
        self.height
            .checked_mul(self.height)
            .filter(|&w| w == self.width)
            .map(|_| self.height)
    }

    /// Pixel at (x, y), or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[f32; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y as usize * self.width as usize + x as usize).copied()
    }
}

/// Contents of a texture field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Texture {
    /// Host asset reference.
    Asset(TextureRef),
    /// Texture produced during conversion.
    Baked(BakedTexture),
}

impl From<TextureRef> for Texture {
    fn from(r: TextureRef) -> Self {
        Self::Asset(r)
    }
}

impl From<BakedTexture> for Texture {
    fn from(t: BakedTexture) -> Self {
        Self::Baked(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_wrong_pixel_count() {
        assert!(BakedTexture::new("x", 2, 2, vec![[0.0; 4]; 3]).is_err());
        assert!(BakedTexture::new("x", 0, 2, Vec::new()).is_err());
    }

    #[test]
    fn strip_layout_size() {
        let t = BakedTexture::new("lut", 16, 4, vec![[0.0; 4]; 64]).unwrap();
        assert_eq!(t.lut_size(), Some(4));

        let t = BakedTexture::new("plain", 8, 4, vec![[0.0; 4]; 32]).unwrap();
        assert_eq!(t.lut_size(), None);
    }

    #[test]
    fn pixel_lookup() {
        let mut pixels = vec![[0.0; 4]; 6];
        pixels[4] = [1.0, 2.0, 3.0, 4.0];
        let t = BakedTexture::new("t", 3, 2, pixels).unwrap();
        assert_eq!(t.pixel(1, 1), Some([1.0, 2.0, 3.0, 4.0]));
        assert_eq!(t.pixel(3, 0), None);
    }

    #[test]
    fn tagged_yaml() {
        let tex = Texture::from(TextureRef::new("abc123"));
        let yaml = serde_yaml::to_string(&tex).unwrap();
        assert!(yaml.contains("kind: asset"));
        assert!(yaml.contains("guid: abc123"));
        let back: Texture = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back, tex);
    }
}
