//! # pfx-io
//!
//! Reading and writing profile documents.
//!
//! Both profile schemas are stored in the same envelope, a [`Document`]
//! with a `schema` number (1 legacy, 2 current), a display name and the
//! profile body. The encoding is chosen by [`Format::from_extension`].
//!
//! # Example
//!
//! ```rust,no_run
//! use pfx_io::{peek_schema, read_legacy, unique_path, LEGACY_SCHEMA};
//!
//! let path = "Profiles/Night.asset";
//! if peek_schema(path)? == LEGACY_SCHEMA {
//!     let doc = read_legacy(path)?;
//!     println!("{}: {:?}", doc.name, doc.profile.enabled_effects());
//!     println!("would write {}", unique_path(path).display());
//! }
//! # Ok::<(), pfx_io::IoError>(())
//! ```
//!
//! # Dependencies
//!
//! - [`serde_yaml`], [`serde_json`] - encodings
//! - [`tracing`] - file-level events
//!
//! # Used By
//!
//! - `pfx-cli` - every command

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod detect;
mod document;
mod error;

pub use detect::Format;
pub use document::{Document, LegacyDocument, ProfileDocument, LEGACY_SCHEMA, PROFILE_SCHEMA};
pub use error::{IoError, IoResult};

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use document::SchemaProbe;

fn format_of(path: &Path) -> IoResult<Format> {
    match Format::from_extension(path) {
        Format::Unknown => Err(IoError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
        format => Ok(format),
    }
}

/// Decodes `text` in `format`.
pub fn decode<T: DeserializeOwned>(text: &str, format: Format) -> IoResult<T> {
    match format {
        Format::Yaml => Ok(serde_yaml::from_str(text)?),
        Format::Json => Ok(serde_json::from_str(text)?),
        Format::Unknown => Err(IoError::UnsupportedFormat { path: PathBuf::new() }),
    }
}

/// Encodes `value` in `format`.
pub fn encode<T: Serialize>(value: &T, format: Format) -> IoResult<String> {
    match format {
        Format::Yaml => Ok(serde_yaml::to_string(value)?),
        Format::Json => Ok(serde_json::to_string_pretty(value)?),
        Format::Unknown => Err(IoError::UnsupportedFormat { path: PathBuf::new() }),
    }
}

/// Reads the `schema` number of a document without decoding its body.
pub fn peek_schema<P: AsRef<Path>>(path: P) -> IoResult<u32> {
    let path = path.as_ref();
    let format = format_of(path)?;
    let text = fs::read_to_string(path)?;
    let probe: SchemaProbe = decode(&text, format)?;
    probe.schema.ok_or_else(|| IoError::MissingSchema {
        path: path.to_path_buf(),
    })
}

/// Reads a document, checking its declared schema.
pub fn read<T: DeserializeOwned, P: AsRef<Path>>(path: P, schema: u32) -> IoResult<Document<T>> {
    let path = path.as_ref();
    let format = format_of(path)?;
    let text = fs::read_to_string(path)?;

    let probe: SchemaProbe = decode(&text, format)?;
    match probe.schema {
        None => {
            return Err(IoError::MissingSchema {
                path: path.to_path_buf(),
            });
        }
        Some(found) if found != schema => {
            return Err(IoError::SchemaMismatch { expected: schema, found });
        }
        Some(_) => {}
    }

    let doc: Document<T> = decode(&text, format)?;
    debug!(path = %path.display(), schema, name = %doc.name, "Read document");
    Ok(doc)
}

/// Reads a legacy profile document.
pub fn read_legacy<P: AsRef<Path>>(path: P) -> IoResult<LegacyDocument> {
    read(path, LEGACY_SCHEMA)
}

/// Reads a current profile document.
pub fn read_profile<P: AsRef<Path>>(path: P) -> IoResult<ProfileDocument> {
    read(path, PROFILE_SCHEMA)
}

/// Writes a document, encoding by extension.
pub fn write<T: Serialize, P: AsRef<Path>>(path: P, doc: &Document<T>) -> IoResult<()> {
    let path = path.as_ref();
    let format = format_of(path)?;
    let text = encode(doc, format)?;
    fs::write(path, text)?;
    info!(path = %path.display(), schema = doc.schema, "Wrote document");
    Ok(())
}

/// Writes a current profile document.
pub fn write_profile<P: AsRef<Path>>(path: P, doc: &ProfileDocument) -> IoResult<()> {
    write(path, doc)
}

/// Returns `path` if nothing exists there, otherwise the first free
/// sibling named `"<stem> <n>.<ext>"` for n = 1, 2, ...
pub fn unique_path<P: AsRef<Path>>(path: P) -> PathBuf {
    unique_path_with(path, Path::exists)
}

/// Like [`unique_path`], with `is_taken` deciding which names are in use.
///
/// Batch writers pass a predicate that also rejects names already handed
/// out in the same run, before any of those files exist on disk.
pub fn unique_path_with<P, F>(path: P, is_taken: F) -> PathBuf
where
    P: AsRef<Path>,
    F: Fn(&Path) -> bool,
{
    let path = path.as_ref();
    if !is_taken(path) {
        return path.to_path_buf();
    }
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = path.extension().map(|e| e.to_string_lossy().into_owned());

    let mut n: u64 = 1;
    loop {
        let name = match &ext {
            Some(ext) => format!("{stem} {n}.{ext}"),
            None => format!("{stem} {n}"),
        };
        let candidate = path.with_file_name(name);
        if !is_taken(&candidate) {
            return candidate;
        }
        n += 1;
    }
}
