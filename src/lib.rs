//! # defender-bridge
//!
//! A typed async wrapper around the Windows Defender command-line tool
//! (`MpCmdRun.exe`).
//!
//! ## Overview
//!
//! The library builds argument lists for Defender operations, runs the tool
//! as a subprocess, and parses its line-oriented text output into structured
//! records, allowing you to:
//!
//! - Run quick, full, and targeted scans and get typed threat reports
//! - Update, remove, and revert definition sets and dynamic signatures
//! - List and restore quarantined files
//! - Check whether a path is excluded from scanning
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use defender_bridge::{DefenderClient, ScanOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = DefenderClient::new()?;
//!
//!     let threats = client.scan("C:\\Downloads", &ScanOptions::default()).await?;
//!     if threats.is_empty() {
//!         println!("No threats found.");
//!     }
//!     for threat in threats {
//!         println!("{}: {} file(s)", threat.name, threat.files.len());
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! The library is organized into several layers:
//!
//! - **Core**: Record types, scan options, and error handling
//! - **Args**: Pure construction of tool argument lists
//! - **Parser**: Threat-report and quarantine-listing parsers
//! - **Invoker**: The subprocess seam, with a scripted mock for tests
//! - **Platform**: Privilege checks, path resolution, and tool discovery
//! - **Client**: The per-operation facade
//!
//! Every operation is a single request/response subprocess call: validate,
//! build arguments, invoke once, parse. Nothing is retried and no state is
//! cached from the tool.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod args;
pub mod client;
pub mod core;
pub mod invoker;
pub mod parser;
pub mod platform;

// Re-export commonly used types at the crate root
pub use crate::client::{DefenderClient, DefenderClientBuilder};
pub use crate::core::{
    DefenderError, DefenderResult, DefinitionsScope, QuarantinedFile, QuarantinedThreat,
    RestoreTarget, ScanKind, ScanOptions, Threat, UpdateSource,
};
pub use crate::invoker::{SystemInvoker, ToolInvoker, ToolOutput};
pub use crate::platform::{locate_defender, PathResolver, PrivilegeChecker};

/// Prelude module for convenient imports.
///
/// ```rust
/// use defender_bridge::prelude::*;
/// ```
pub mod prelude {
    pub use crate::client::{DefenderClient, DefenderClientBuilder};
    pub use crate::core::{
        DefenderError, DefenderResult, DefinitionsScope, QuarantinedFile, QuarantinedThreat,
        RestoreTarget, ScanKind, ScanOptions, Threat, UpdateSource,
    };
    pub use crate::invoker::{ToolInvoker, ToolOutput};
}
