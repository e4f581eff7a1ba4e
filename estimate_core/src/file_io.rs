//! # File I/O Module
//!
//! Handles job file operations with safety features:
//! - **Atomic saves**: Write to .tmp, sync, rename to prevent corruption
//! - **Version validation**: Ensure schema compatibility on load
//!
//! ## File Format
//!
//! Jobs are saved as `.dwj` (drywall job) files containing JSON.
//!
//! ## Example
//!
//! ```rust,no_run
//! use estimate_core::file_io::{save_job, load_job};
//! use estimate_core::job::Job;
//! use std::path::Path;
//!
//! let job = Job::new("Pat Estimator", "26-104", "Northview Homes");
//! let path = Path::new("northview.dwj");
//!
//! save_job(&job, path)?;
//! let loaded = load_job(path)?;
//! # Ok::<(), estimate_core::errors::EstimateError>(())
//! ```

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

use crate::errors::{EstimateError, EstimateResult};
use crate::job::{Job, SCHEMA_VERSION};

/// Save a job to a file with atomic write semantics.
///
/// The save process:
/// 1. Serialize job to JSON
/// 2. Write to a temporary file (.tmp)
/// 3. Sync to disk (fsync)
/// 4. Rename .tmp to .dwj (atomic on most filesystems)
///
/// This prevents corruption if the process is interrupted during write.
pub fn save_job(job: &Job, path: &Path) -> EstimateResult<()> {
    let json = serde_json::to_string_pretty(job).map_err(|e| EstimateError::SerializationError {
        reason: e.to_string(),
    })?;

    let tmp_path = path.with_extension("dwj.tmp");

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        EstimateError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(json.as_bytes()).map_err(|e| {
        EstimateError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        EstimateError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        // Clean up temp file if rename fails
        let _ = fs::remove_file(&tmp_path);
        EstimateError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    Ok(())
}

/// Load a job from a file.
///
/// # Returns
///
/// * `Ok(Job)` - Successfully loaded and validated job
/// * `Err(EstimateError::VersionMismatch)` - File version is incompatible
/// * `Err(EstimateError::SerializationError)` - Invalid JSON
/// * `Err(EstimateError::InvalidInput)` - Out-of-range inputs in the file
/// * `Err(EstimateError::FileError)` - I/O error
pub fn load_job(path: &Path) -> EstimateResult<Job> {
    let mut file = File::open(path)
        .map_err(|e| EstimateError::file_error("open", path.display().to_string(), e.to_string()))?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|e| EstimateError::file_error("read", path.display().to_string(), e.to_string()))?;

    let job: Job =
        serde_json::from_str(&contents).map_err(|e| EstimateError::SerializationError {
            reason: format!("Invalid JSON in {}: {}", path.display(), e),
        })?;

    validate_version(&job.meta.version)?;
    job.validate()?;

    Ok(job)
}

/// Write an export string (CSV or TXT) to a file.
pub fn write_text(contents: &str, path: &Path) -> EstimateResult<()> {
    fs::write(path, contents).map_err(|e| {
        EstimateError::file_error("write", path.display().to_string(), e.to_string())
    })
}

/// Validate that a file version is compatible with the current schema.
fn validate_version(file_version: &str) -> EstimateResult<()> {
    let file_parts: Vec<u32> = file_version
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();
    let current_parts: Vec<u32> = SCHEMA_VERSION
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();

    if file_parts.is_empty() || current_parts.is_empty() {
        return Err(EstimateError::VersionMismatch {
            file_version: file_version.to_string(),
            expected_version: SCHEMA_VERSION.to_string(),
        });
    }

    // Major version must match
    if file_parts[0] != current_parts[0] {
        return Err(EstimateError::VersionMismatch {
            file_version: file_version.to_string(),
            expected_version: SCHEMA_VERSION.to_string(),
        });
    }

    // For 0.x versions, a newer minor version is a breaking change
    if current_parts[0] == 0
        && file_parts.len() > 1
        && current_parts.len() > 1
        && file_parts[1] > current_parts[1]
    {
        return Err(EstimateError::VersionMismatch {
            file_version: file_version.to_string(),
            expected_version: SCHEMA_VERSION.to_string(),
        });
    }

    Ok(())
}
