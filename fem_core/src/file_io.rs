//! # File I/O Module
//!
//! Reads and writes case files: JSON documents holding report settings and a
//! list of fixed-end moment cases.
//!
//! - **Atomic saves**: Write to .tmp, sync, rename to prevent corruption
//! - **Version validation**: Major schema version must match
//!
//! ## File Format
//!
//! ```json
//! {
//!   "version": "0.1.0",
//!   "settings": { "units": "metric", "decimals": 4 },
//!   "cases": [
//!     { "label": "G-1", "load": 10.0, "span": 6.0, "position": 3.0 },
//!     { "label": "G-2", "load": 10.0, "span": 6.0, "position": 2.0 }
//!   ]
//! }
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use fem_core::file_io::{load_case_file, save_case_file, CaseFile};
//! use std::path::Path;
//!
//! let file = CaseFile::default();
//! save_case_file(&file, Path::new("cases.json"))?;
//! let loaded = load_case_file(Path::new("cases.json"))?;
//! assert!(loaded.cases.is_empty());
//! # Ok::<(), fem_core::errors::CalcError>(())
//! ```

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::calculations::fixed_end_moment::FixedEndMomentInput;
use crate::errors::{CalcError, CalcResult};
use crate::settings::ReportSettings;

/// Current schema version for case files
pub const SCHEMA_VERSION: &str = "0.1.0";

fn schema_version() -> String {
    SCHEMA_VERSION.to_string()
}

/// Root container of a case file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseFile {
    /// Schema version the file was written with
    #[serde(default = "schema_version")]
    pub version: String,

    #[serde(default)]
    pub settings: ReportSettings,

    #[serde(default)]
    pub cases: Vec<FixedEndMomentInput>,
}

impl Default for CaseFile {
    fn default() -> Self {
        Self {
            version: schema_version(),
            settings: ReportSettings::default(),
            cases: Vec::new(),
        }
    }
}

impl CaseFile {
    pub fn with_case(mut self, case: FixedEndMomentInput) -> Self {
        self.cases.push(case);
        self
    }
}

/// Save a case file with atomic write semantics.
///
/// 1. Serialize to JSON
/// 2. Write to a temporary file (.tmp)
/// 3. Sync to disk
/// 4. Rename over the target
pub fn save_case_file(file: &CaseFile, path: &Path) -> CalcResult<()> {
    let json = serde_json::to_string_pretty(file).map_err(|e| CalcError::SerializationError {
        reason: e.to_string(),
    })?;

    let tmp_path = path.with_extension("json.tmp");

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        CalcError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(json.as_bytes()).map_err(|e| {
        CalcError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        CalcError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        CalcError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    info!("saved {} case(s) to {}", file.cases.len(), path.display());
    Ok(())
}

/// Load a case file.
///
/// # Returns
///
/// * `Err(CalcError::VersionMismatch)` - Major version differs
/// * `Err(CalcError::SerializationError)` - Invalid JSON
/// * `Err(CalcError::FileError)` - I/O error
pub fn load_case_file(path: &Path) -> CalcResult<CaseFile> {
    let contents = fs::read_to_string(path)
        .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;

    let file: CaseFile = serde_json::from_str(&contents).map_err(|e| CalcError::SerializationError {
        reason: format!("Invalid JSON in {}: {}", path.display(), e),
    })?;

    validate_version(&file.version)?;

    info!("loaded {} case(s) from {}", file.cases.len(), path.display());
    Ok(file)
}

fn major(version: &str) -> Option<u32> {
    version.split('.').next().and_then(|p| p.trim().parse().ok())
}

/// Validate that a file version is compatible with the current schema.
fn validate_version(file_version: &str) -> CalcResult<()> {
    let mismatch = || CalcError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    match (major(file_version), major(SCHEMA_VERSION)) {
        (Some(file), Some(current)) if file == current => {
            if file_version != SCHEMA_VERSION {
                warn!(
                    "case file version {} differs from {}; reading anyway",
                    file_version, SCHEMA_VERSION
                );
            }
            Ok(())
        }
        _ => Err(mismatch()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::UnitSystem;
    use tempfile::tempdir;

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cases.json");

        let mut file = CaseFile::default()
            .with_case(FixedEndMomentInput::new("G-1", 10.0, 6.0, 3.0))
            .with_case(FixedEndMomentInput::new("G-2", 10.0, 6.0, 2.0));
        file.settings.units = UnitSystem::Imperial;

        save_case_file(&file, &path).unwrap();
        assert!(!path.with_extension("json.tmp").exists());

        let loaded = load_case_file(&path).unwrap();
        assert_eq!(loaded, file);
    }

    #[test]
    fn test_minimal_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("min.json");
        fs::write(&path, r#"{"cases": [{"load": 5.0, "span": 4.0, "position": 1.0}]}"#).unwrap();

        let loaded = load_case_file(&path).unwrap();
        assert_eq!(loaded.version, SCHEMA_VERSION);
        assert_eq!(loaded.settings, ReportSettings::default());
        assert_eq!(loaded.cases.len(), 1);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let err = load_case_file(&dir.path().join("nope.json")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{ not json").unwrap();
        let err = load_case_file(&path).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_version_validation() {
        assert!(validate_version("0.1.0").is_ok());
        assert!(validate_version("0.9.3").is_ok());
        assert!(matches!(validate_version("1.0.0"), Err(CalcError::VersionMismatch { .. })));
        assert!(validate_version("garbage").is_err());
    }
}
