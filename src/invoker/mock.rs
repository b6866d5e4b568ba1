//! Mock invoker for testing.
//!
//! Plays back a scripted queue of responses and records every invocation so
//! tests can assert on the exact argument lists the facade builds, without
//! spawning anything.

use crate::core::error::{DefenderError, DefenderResult};
use crate::invoker::{ToolInvoker, ToolOutput};

use async_trait::async_trait;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// A scripted invoker for tests.
///
/// Responses are consumed front-to-back, one per invocation; once the queue
/// is empty every further invocation succeeds with empty output.
///
/// # Examples
///
/// ```rust
/// use defender_bridge::invoker::MockInvoker;
///
/// let invoker = MockInvoker::new()
///     .with_failure(2, "Scan starting...")
///     .with_success("");
/// ```
#[derive(Debug, Default)]
pub struct MockInvoker {
    responses: Mutex<VecDeque<Response>>,
    invocations: Mutex<Vec<Invocation>>,
}

/// One recorded call to [`MockInvoker::execute`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// The program path the facade asked to run.
    pub program: PathBuf,
    /// The argument list it built.
    pub args: Vec<String>,
}

#[derive(Debug)]
enum Response {
    Success(String),
    Failure { exit_code: i32, stdout: String },
}

impl MockInvoker {
    /// Creates a mock invoker with an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful invocation producing the given stdout.
    pub fn with_success(self, stdout: impl Into<String>) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Response::Success(stdout.into()));
        self
    }

    /// Queues a failed invocation with the given exit code and stdout.
    pub fn with_failure(self, exit_code: i32, stdout: impl Into<String>) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Response::Failure {
                exit_code,
                stdout: stdout.into(),
            });
        self
    }

    /// Returns all invocations recorded so far.
    pub fn invocations(&self) -> Vec<Invocation> {
        self.invocations.lock().unwrap().clone()
    }

    /// Returns the argument list of the most recent invocation, if any.
    pub fn last_args(&self) -> Option<Vec<String>> {
        self.invocations
            .lock()
            .unwrap()
            .last()
            .map(|call| call.args.clone())
    }

    /// Returns how many times the invoker was called.
    pub fn call_count(&self) -> usize {
        self.invocations.lock().unwrap().len()
    }
}

#[async_trait]
impl ToolInvoker for MockInvoker {
    async fn execute(&self, program: &Path, args: &[String]) -> DefenderResult<ToolOutput> {
        self.invocations.lock().unwrap().push(Invocation {
            program: program.to_path_buf(),
            args: args.to_vec(),
        });

        match self.responses.lock().unwrap().pop_front() {
            None => Ok(ToolOutput::success("")),
            Some(Response::Success(stdout)) => Ok(ToolOutput {
                stdout,
                exit_code: 0,
            }),
            Some(Response::Failure { exit_code, stdout }) => {
                Err(DefenderError::ToolExecution { exit_code, stdout })
            }
        }
    }
}
