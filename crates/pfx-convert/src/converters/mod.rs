//! Per-effect converters.
//!
//! Each module exposes a pure `convert` function from one legacy settings
//! record to one destination record, plus an `UNSUPPORTED` list naming the
//! legacy fields that have no destination. Fields a converter writes are
//! always marked overridden; fields it does not write keep the destination
//! default and stay unowned, except where a converter overrides everything
//! up front ([`reflections`], [`color_grading`]).
//!
//! [`lut`] is the alternate color grading path. It touches two entries and
//! so works on the profile instead of returning a record.

pub mod ambient_occlusion;
pub mod bloom;
pub mod chromatic_aberration;
pub mod color_grading;
pub mod depth_of_field;
pub mod eye_adaptation;
pub mod grain;
pub mod lut;
pub mod motion_blur;
pub mod reflections;
pub mod vignette;
