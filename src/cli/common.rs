//! Shared error type and helpers for CLI commands.

use crate::error::GenerateError;
use anyhow::Context;
use std::path::Path;
use thiserror::Error;

/// Process exit codes used by every command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Inputs were rejected or the keymap could not be resolved
    ValidationError = 1,
    /// A file could not be read or written
    IoError = 2,
}

impl ExitCode {
    /// Numeric process exit code.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error returned by a CLI command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid input or generation failure
    #[error("{0}")]
    Validation(String),
    /// Filesystem failure
    #[error("{0}")]
    Io(String),
}

impl CliError {
    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates an I/O error.
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io(message.into())
    }

    /// Exit code to terminate the process with.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        match self {
            Self::Validation(_) => ExitCode::ValidationError,
            Self::Io(_) => ExitCode::IoError,
        }
    }
}

impl From<GenerateError> for CliError {
    fn from(err: GenerateError) -> Self {
        Self::validation(format!("Keymap generation failed: {err}"))
    }
}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Writes `content` to a sibling temp file, then renames it over `path`.
pub fn atomic_write(path: &Path, content: &str) -> anyhow::Result<()> {
    let mut temp_name = path.file_name().unwrap_or_default().to_os_string();
    temp_name.push(".tmp");
    let temp_path = path.with_file_name(temp_name);

    std::fs::write(&temp_path, content)
        .with_context(|| format!("Failed to write to temporary file: {}", temp_path.display()))?;

    std::fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to rename temporary file to: {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::validation("bad").exit_code().code(), 1);
        assert_eq!(CliError::io("disk").exit_code().code(), 2);
        assert_eq!(ExitCode::Success.code(), 0);
    }

    #[test]
    fn test_generate_error_is_validation() {
        let err: CliError = GenerateError::MissingBaseLayer.into();
        assert_eq!(err.exit_code(), ExitCode::ValidationError);
    }

    #[test]
    fn test_atomic_write_replaces_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("keymap.c");
        std::fs::write(&path, "old").unwrap();

        atomic_write(&path, "new").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
        assert!(!temp_dir.path().join("keymap.c.tmp").exists());
    }

    #[test]
    fn test_atomic_write_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("keymap.c");
        assert!(atomic_write(&path, "x").is_err());
    }
}
