//! The process-invoker seam.
//!
//! Every operation runs the tool exactly once through a [`ToolInvoker`],
//! awaits completion, and returns; there is no retry, no shared state, and
//! no wrapper-level deadline beyond the `-Timeout` value passed to the tool.

mod mock;
mod system;

pub use mock::{Invocation, MockInvoker};
pub use system::SystemInvoker;

use crate::core::error::DefenderError;

use async_trait::async_trait;
use std::fmt::Debug;
use std::path::Path;

/// Captured result of a completed tool invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolOutput {
    /// Captured standard output.
    pub stdout: String,
    /// Process exit code.
    pub exit_code: i32,
}

impl ToolOutput {
    /// Creates a successful output with the given stdout.
    pub fn success(stdout: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            exit_code: 0,
        }
    }
}

/// Executes the external tool and captures its output.
///
/// Implementations must return [`DefenderError::ToolExecution`] on any
/// non-zero exit, carrying both the captured stdout and the exit code so
/// the facade can reclassify the "threats found" sentinel into a parseable
/// report.
#[async_trait]
pub trait ToolInvoker: Send + Sync + Debug {
    /// Runs `program` with `args` and waits for it to finish.
    async fn execute(&self, program: &Path, args: &[String]) -> Result<ToolOutput, DefenderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_output_success() {
        let output = ToolOutput::success("done");
        assert_eq!(output.exit_code, 0);
        assert_eq!(output.stdout, "done");
    }
}
