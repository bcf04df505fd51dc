//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::{FsError, GishError};

/// Map domain/service errors to a string for CLI output.
pub fn map_error(e: &GishError) -> String {
    match e {
        GishError::Fs(FsError::NotFound { path, .. }) => {
            format!("gish: {}: No such file or directory", path)
        }
        GishError::Fs(FsError::BadPath { path, reason }) => {
            format!("gish: {}: {}", path, reason)
        }
        other => format!("gish: {}", other),
    }
}
