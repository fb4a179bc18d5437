//! File loading for overlay data: format detection and deserialization
//! helpers shared by the accounts and build-order files.
//!
//! Each data file is looked up by base name with one of three supported
//! extensions. TOML cannot represent a top-level array, so list files
//! store their rows under a named key there and as a plain array in RON
//! and JSON.

use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

// ===========================================================================
// Errors
// ===========================================================================

/// Errors that can occur while loading a data file.
#[derive(Debug, thiserror::Error)]
pub enum DataLoadError {
    /// No file with the base name and a supported extension exists.
    #[error("no '{base}' data file (.ron/.toml/.json) in {dir}")]
    Missing { base: String, dir: PathBuf },

    /// The file has an extension we don't support.
    #[error("unsupported format: {file}")]
    UnsupportedFormat { file: PathBuf },

    /// The same base name exists in more than one format.
    #[error("conflicting formats: {a} and {b}")]
    ConflictingFormats { a: PathBuf, b: PathBuf },

    /// A deserialization error occurred.
    #[error("parse error in {file}: {detail}")]
    Parse { file: PathBuf, detail: String },

    /// An I/O error occurred.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

// ===========================================================================
// Format detection
// ===========================================================================

/// Supported data file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Ron,
    Toml,
    Json,
}

impl Format {
    const EXTENSIONS: [(&'static str, Format); 3] = [
        ("ron", Format::Ron),
        ("toml", Format::Toml),
        ("json", Format::Json),
    ];
}

/// Detect the format of a file from its extension.
pub fn detect_format(path: &Path) -> Result<Format, DataLoadError> {
    let extension = path.extension().and_then(|e| e.to_str());
    Format::EXTENSIONS
        .iter()
        .find(|(ext, _)| Some(*ext) == extension)
        .map(|(_, format)| *format)
        .ok_or_else(|| DataLoadError::UnsupportedFormat {
            file: path.to_path_buf(),
        })
}

// ===========================================================================
// File discovery
// ===========================================================================

/// Find the data file for `base` in `dir`, trying every supported
/// extension. `Ok(None)` if no candidate exists; an error if more than
/// one format is present at once.
pub fn locate(dir: &Path, base: &str) -> Result<Option<PathBuf>, DataLoadError> {
    let mut found: Option<PathBuf> = None;
    for (ext, _) in Format::EXTENSIONS {
        let candidate = dir.join(format!("{base}.{ext}"));
        if candidate.exists() {
            if let Some(existing) = found {
                return Err(DataLoadError::ConflictingFormats {
                    a: existing,
                    b: candidate,
                });
            }
            found = Some(candidate);
        }
    }
    Ok(found)
}

/// Like [`locate`], but a missing file is an error.
pub fn require(dir: &Path, base: &str) -> Result<PathBuf, DataLoadError> {
    locate(dir, base)?.ok_or_else(|| DataLoadError::Missing {
        base: base.to_string(),
        dir: dir.to_path_buf(),
    })
}

// ===========================================================================
// Deserialization
// ===========================================================================

fn parse_error(path: &Path, detail: impl ToString) -> DataLoadError {
    DataLoadError::Parse {
        file: path.to_path_buf(),
        detail: detail.to_string(),
    }
}

/// Read a file and deserialize it according to its detected format.
pub fn read_value<T: DeserializeOwned>(path: &Path) -> Result<T, DataLoadError> {
    let format = detect_format(path)?;
    let content = std::fs::read_to_string(path)?;
    match format {
        Format::Ron => ron::from_str(&content).map_err(|e| parse_error(path, e)),
        Format::Json => serde_json::from_str(&content).map_err(|e| parse_error(path, e)),
        Format::Toml => toml::from_str(&content).map_err(|e| parse_error(path, e)),
    }
}

/// Read a list file. RON and JSON files hold a plain array; TOML files
/// hold the array under `toml_key` in a top-level table.
pub fn read_list<T: DeserializeOwned>(path: &Path, toml_key: &str) -> Result<Vec<T>, DataLoadError> {
    let format = detect_format(path)?;
    let content = std::fs::read_to_string(path)?;
    match format {
        Format::Ron => ron::from_str(&content).map_err(|e| parse_error(path, e)),
        Format::Json => serde_json::from_str(&content).map_err(|e| parse_error(path, e)),
        Format::Toml => {
            let table: toml::Value = toml::from_str(&content).map_err(|e| parse_error(path, e))?;
            let rows = table
                .get(toml_key)
                .ok_or_else(|| parse_error(path, format!("missing key '{toml_key}'")))?
                .clone();
            rows.try_into()
                .map_err(|e: toml::de::Error| parse_error(path, e))
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
