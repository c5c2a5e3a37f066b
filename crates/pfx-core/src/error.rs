//! Error types for pfx-core value types.
//!
//! Most core types are infallible plain data. The exceptions are
//! constructors that validate shape, such as [`crate::BakedTexture::new`],
//! which checks that the pixel buffer matches the declared dimensions.
//!
//! # Usage
//!
//! ```rust
//! use pfx_core::{BakedTexture, CoreError};
//!
//! let err = BakedTexture::new("lut", 4, 4, vec![[0.0; 4]; 3]).unwrap_err();
//! assert!(matches!(err, CoreError::PixelCountMismatch { .. }));
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation
//!
//! # Used By
//!
//! - [`crate::texture`] - baked texture construction
//! - `pfx-convert` - wraps core errors raised by LUT bakers

use thiserror::Error;

/// Result type alias using [`CoreError`] as the error type.
pub type CoreResult<T> = std::result::Result<T, CoreError>;

/// Errors raised while constructing core value types.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Pixel buffer length does not match `width * height`.
    #[error("texture {width}x{height} expects {expected} pixels, got {got}")]
    PixelCountMismatch {
        /// Texture width
        width: u32,
        /// Texture height
        height: u32,
        /// Expected pixel count
        expected: usize,
        /// Actual pixel count
        got: usize,
    },

    /// Texture dimensions are zero or overflow the pixel count.
    #[error("invalid texture dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
    },

    /// Lookup table lattice size is out of range.
    #[error("invalid LUT size {size} (expected {min}..={max})")]
    InvalidLutSize {
        /// Requested lattice size
        size: u32,
        /// Smallest accepted size
        min: u32,
        /// Largest accepted size
        max: u32,
    },
}

impl CoreError {
    /// Creates a [`CoreError::PixelCountMismatch`] error.
    #[inline]
    pub fn pixel_count_mismatch(width: u32, height: u32, expected: usize, got: usize) -> Self {
        Self::PixelCountMismatch {
            width,
            height,
            expected,
            got,
        }
    }
}
