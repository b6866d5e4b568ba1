//! Discovery of the Defender command-line tool.
//!
//! Probes the stock install directories and the platform-update layout,
//! which places versioned copies of the tool under `ProgramData`. Newer
//! platform versions are preferred over the static install location.

use crate::core::error::{DefenderError, DefenderResult};

use std::path::{Path, PathBuf};

const TOOL_EXECUTABLE: &str = "MpCmdRun.exe";

/// Locates `MpCmdRun.exe` on this system.
///
/// # Errors
///
/// Returns [`DefenderError::NotInstalled`] when no candidate location holds
/// the executable, which includes every non-Windows host.
pub fn locate_defender() -> DefenderResult<PathBuf> {
    candidate_paths()
        .into_iter()
        .find(|candidate| candidate.is_file())
        .ok_or(DefenderError::NotInstalled)
}

fn candidate_paths() -> Vec<PathBuf> {
    let mut candidates = platform_update_candidates();
    for var in ["ProgramFiles", "ProgramW6432", "ProgramFiles(x86)"] {
        if let Some(root) = std::env::var_os(var) {
            candidates.push(
                Path::new(&root)
                    .join("Windows Defender")
                    .join(TOOL_EXECUTABLE),
            );
        }
    }
    candidates
}

/// Versioned tool copies under the platform-update directory, newest first.
fn platform_update_candidates() -> Vec<PathBuf> {
    let Some(data) = std::env::var_os("ProgramData") else {
        return Vec::new();
    };
    let platform = Path::new(&data)
        .join("Microsoft")
        .join("Windows Defender")
        .join("Platform");
    let Ok(entries) = std::fs::read_dir(&platform) else {
        return Vec::new();
    };

    let mut versions: Vec<PathBuf> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .collect();
    versions.sort();
    versions
        .into_iter()
        .rev()
        .map(|dir| dir.join(TOOL_EXECUTABLE))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(not(windows))]
    fn test_absent_tool_is_not_installed() {
        assert!(matches!(
            locate_defender(),
            Err(DefenderError::NotInstalled)
        ));
    }
}
