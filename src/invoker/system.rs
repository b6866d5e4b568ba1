//! Invoker backed by a real subprocess.

use crate::core::error::{DefenderError, DefenderResult};
use crate::invoker::{ToolInvoker, ToolOutput};

use async_trait::async_trait;
use std::path::Path;
use tokio::process::Command;

/// Runs the tool as a child process via [`tokio::process::Command`].
///
/// Standard output is captured and decoded lossily; the tool occasionally
/// emits locale-encoded bytes in paths and a lossy decode keeps the report
/// parseable around them.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemInvoker;

impl SystemInvoker {
    /// Creates a new system invoker.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ToolInvoker for SystemInvoker {
    async fn execute(&self, program: &Path, args: &[String]) -> DefenderResult<ToolOutput> {
        tracing::debug!(program = %program.display(), ?args, "invoking defender tool");

        let output = Command::new(program).args(args).output().await?;
        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        // None means the process died to a signal; keep a sentinel the
        // exit-code contract can never mistake for a report.
        let exit_code = output.status.code().unwrap_or(-1);

        if output.status.success() {
            Ok(ToolOutput { stdout, exit_code })
        } else {
            tracing::debug!(exit_code, "defender tool exited non-zero");
            Err(DefenderError::ToolExecution { exit_code, stdout })
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::path::Path;

    #[tokio::test]
    async fn test_captures_stdout_on_success() {
        let invoker = SystemInvoker::new();
        let output = invoker
            .execute(Path::new("/bin/echo"), &["hello".to_string()])
            .await
            .unwrap();
        assert_eq!(output.exit_code, 0);
        assert_eq!(output.stdout.trim(), "hello");
    }

    #[tokio::test]
    async fn test_nonzero_exit_carries_code() {
        let invoker = SystemInvoker::new();
        let err = invoker
            .execute(Path::new("/bin/false"), &[])
            .await
            .unwrap_err();
        assert_eq!(err.exit_code(), Some(1));
    }

    #[tokio::test]
    async fn test_missing_program_is_io_error() {
        let invoker = SystemInvoker::new();
        let err = invoker
            .execute(Path::new("/nonexistent/mpcmdrun"), &[])
            .await
            .unwrap_err();
        assert!(matches!(err, DefenderError::Io(_)));
    }
}
