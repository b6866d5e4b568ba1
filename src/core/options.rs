//! Scan options and their validation.
//!
//! Validation always happens before a subprocess is spawned; invalid values
//! fail fast with a [`DefenderError::Validation`].

use crate::core::error::{DefenderError, DefenderResult};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Accepted `-Timeout` range (in days) for quick and custom scans.
pub const SCAN_TIMEOUT_RANGE: RangeInclusive<u32> = 1..=30;

/// Accepted `-Timeout` range (in days) for full scans.
///
/// The upper bound is one day tighter than for the other scan kinds; this
/// mirrors the tool wrapper's documented behavior for full scans.
pub const FULL_SCAN_TIMEOUT_RANGE: RangeInclusive<u32> = 1..=29;

/// Default timeout for quick and custom scans.
pub const DEFAULT_SCAN_TIMEOUT: u32 = 1;

/// Default timeout for full scans.
pub const DEFAULT_FULL_SCAN_TIMEOUT: u32 = 7;

/// Validates a timeout for quick and custom scans.
pub fn validate_scan_timeout(timeout: u32) -> DefenderResult<()> {
    if SCAN_TIMEOUT_RANGE.contains(&timeout) {
        Ok(())
    } else {
        Err(DefenderError::validation(format!(
            "scan timeout must be between {} and {} days, got {}",
            SCAN_TIMEOUT_RANGE.start(),
            SCAN_TIMEOUT_RANGE.end(),
            timeout
        )))
    }
}

/// Validates a timeout for full scans.
pub fn validate_full_scan_timeout(timeout: u32) -> DefenderResult<()> {
    if FULL_SCAN_TIMEOUT_RANGE.contains(&timeout) {
        Ok(())
    } else {
        Err(DefenderError::validation(format!(
            "full scan timeout must be between {} and {} days, got {}",
            FULL_SCAN_TIMEOUT_RANGE.start(),
            FULL_SCAN_TIMEOUT_RANGE.end(),
            timeout
        )))
    }
}

/// Options for a custom (targeted) scan.
///
/// # Examples
///
/// ```rust
/// use defender_bridge::core::ScanOptions;
///
/// let options = ScanOptions::new()
///     .with_boot_sector_scan(true)
///     .with_timeout(3);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanOptions {
    /// Also scan the boot sector (`-BootSectorScan`).
    pub scan_boot_sector: bool,

    /// Let the tool remediate findings. When `false` (the default) the scan
    /// is report-only (`-DisableRemediation`).
    pub remediate: bool,

    /// Days before the tool abandons the scan (`-Timeout`).
    pub timeout: u32,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            scan_boot_sector: false,
            remediate: false,
            timeout: DEFAULT_SCAN_TIMEOUT,
        }
    }
}

impl ScanOptions {
    /// Creates options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables the boot sector scan.
    pub fn with_boot_sector_scan(mut self, enabled: bool) -> Self {
        self.scan_boot_sector = enabled;
        self
    }

    /// Enables or disables remediation.
    pub fn with_remediation(mut self, enabled: bool) -> Self {
        self.remediate = enabled;
        self
    }

    /// Sets the scan timeout in days.
    pub fn with_timeout(mut self, timeout: u32) -> Self {
        self.timeout = timeout;
        self
    }

    /// Validates these options, checking the timeout range.
    pub fn validate(&self) -> DefenderResult<()> {
        validate_scan_timeout(self.timeout)
    }
}
