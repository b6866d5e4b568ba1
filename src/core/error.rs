//! Error types for the defender-bridge library.
//!
//! This module provides structured, typed errors for all failure scenarios.
//! The library never panics; all errors are returned as `Result` values.

use thiserror::Error;

/// The main error type for Defender operations.
///
/// Validation and privilege errors are always raised before a subprocess is
/// spawned; `ToolExecution` carries everything the tool reported so callers
/// can inspect its output even on failure.
#[derive(Debug, Error)]
pub enum DefenderError {
    /// An argument failed shape or range validation.
    #[error("invalid argument: {message}")]
    Validation {
        /// Description of what is wrong with the argument.
        message: String,
    },

    /// The operation requires an elevated (administrator) process.
    #[error("administrator privileges are required for this operation")]
    PrivilegeRequired,

    /// The Defender command-line tool could not be located on this system.
    #[error("the Windows Defender command-line tool was not found")]
    NotInstalled,

    /// The tool exited with a non-zero status that is not a parseable report.
    #[error("defender tool exited with code {exit_code}")]
    ToolExecution {
        /// The process exit code.
        exit_code: i32,
        /// Captured standard output, available for diagnosis.
        stdout: String,
    },

    /// Tool output did not match the expected report structure.
    ///
    /// This signals a violated assumption about the tool's text format and
    /// is never silently swallowed; the offending fragment is preserved.
    #[error("unexpected tool output: {reason}")]
    Parse {
        /// What the parser expected and did not find.
        reason: String,
        /// The line or block that failed to match.
        fragment: String,
    },

    /// An I/O error occurred while spawning or resolving paths.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl DefenderError {
    /// Creates a `Validation` error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Creates a `Parse` error carrying the offending fragment.
    pub fn parse(reason: impl Into<String>, fragment: impl Into<String>) -> Self {
        Self::Parse {
            reason: reason.into(),
            fragment: fragment.into(),
        }
    }

    /// Returns the tool exit code if this error carries one.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Self::ToolExecution { exit_code, .. } => Some(*exit_code),
            _ => None,
        }
    }

    /// Returns the captured tool output if this error carries it.
    pub fn stdout(&self) -> Option<&str> {
        match self {
            Self::ToolExecution { stdout, .. } => Some(stdout),
            _ => None,
        }
    }

    /// Returns `true` if this error was raised before any subprocess spawned.
    pub fn is_pre_spawn(&self) -> bool {
        matches!(
            self,
            Self::Validation { .. } | Self::PrivilegeRequired | Self::NotInstalled
        )
    }
}

/// A specialized `Result` type for Defender operations.
pub type DefenderResult<T> = Result<T, DefenderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_accessor() {
        let err = DefenderError::ToolExecution {
            exit_code: 2,
            stdout: "report".into(),
        };
        assert_eq!(err.exit_code(), Some(2));
        assert_eq!(err.stdout(), Some("report"));

        let err = DefenderError::validation("bad timeout");
        assert_eq!(err.exit_code(), None);
        assert_eq!(err.stdout(), None);
    }

    #[test]
    fn test_pre_spawn_classification() {
        assert!(DefenderError::validation("x").is_pre_spawn());
        assert!(DefenderError::PrivilegeRequired.is_pre_spawn());
        assert!(DefenderError::NotInstalled.is_pre_spawn());
        assert!(!DefenderError::ToolExecution {
            exit_code: 1,
            stdout: String::new()
        }
        .is_pre_spawn());
    }

    #[test]
    fn test_parse_error_display() {
        let err = DefenderError::parse("threat block has no file entries", "Threat: X");
        assert!(err.to_string().contains("no file entries"));
    }
}
