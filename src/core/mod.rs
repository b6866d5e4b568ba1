//! Core types, options, and error handling for defender-bridge.

pub mod error;
pub mod options;
pub mod types;

pub use error::{DefenderError, DefenderResult};
pub use options::{
    validate_full_scan_timeout, validate_scan_timeout, ScanOptions, DEFAULT_FULL_SCAN_TIMEOUT,
    DEFAULT_SCAN_TIMEOUT, FULL_SCAN_TIMEOUT_RANGE, SCAN_TIMEOUT_RANGE,
};
pub use types::{
    DefinitionsScope, QuarantinedFile, QuarantinedThreat, RestoreTarget, ScanKind, Threat,
    UpdateSource,
};
