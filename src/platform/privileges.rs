//! Privilege-elevation checking.

use std::fmt::Debug;

/// A predicate for whether the current process runs elevated.
pub trait PrivilegeChecker: Send + Sync + Debug {
    /// Returns `true` if the process has administrator privileges.
    fn is_elevated(&self) -> bool;
}

/// System-backed privilege check.
///
/// On Windows this probes by running `fltmc.exe`, which succeeds only from
/// an elevated process. On other platforms the tool itself is unavailable,
/// so the check always reports `false`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemPrivileges;

impl SystemPrivileges {
    /// Creates a new system privilege checker.
    pub fn new() -> Self {
        Self
    }
}

impl PrivilegeChecker for SystemPrivileges {
    #[cfg(windows)]
    fn is_elevated(&self) -> bool {
        use std::process::{Command, Stdio};

        Command::new("fltmc.exe")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or(false)
    }

    #[cfg(not(windows))]
    fn is_elevated(&self) -> bool {
        false
    }
}

/// A privilege checker with a fixed answer, for tests and embedding.
#[derive(Debug, Clone, Copy)]
pub struct FixedPrivileges(pub bool);

impl PrivilegeChecker for FixedPrivileges {
    fn is_elevated(&self) -> bool {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_privileges() {
        assert!(FixedPrivileges(true).is_elevated());
        assert!(!FixedPrivileges(false).is_elevated());
    }
}
