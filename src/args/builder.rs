//! Pure construction of `MpCmdRun.exe` argument lists.
//!
//! Every function here is deterministic and side-effect free: the same
//! inputs always produce the same token sequence, with a fixed flag order
//! (operation flag, then target flags, then optional modifiers). Validation
//! happens in the facade before these functions are called.

use crate::core::options::ScanOptions;
use crate::core::types::{DefinitionsScope, RestoreTarget, ScanKind, UpdateSource};
use std::path::Path;

fn path_token(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Builds arguments for a quick or full scan: `-Scan -ScanType <n> -Timeout <t>`.
pub fn scan(kind: ScanKind, timeout: u32) -> Vec<String> {
    vec![
        "-Scan".into(),
        "-ScanType".into(),
        kind.flag_value().into(),
        "-Timeout".into(),
        timeout.to_string(),
    ]
}

/// Builds arguments to cancel an in-progress scan of the given kind.
pub fn cancel_scan(kind: ScanKind) -> Vec<String> {
    vec![
        "-Scan".into(),
        "-ScanType".into(),
        kind.flag_value().into(),
        "-Cancel".into(),
    ]
}

/// Builds arguments for a custom scan of `target`.
///
/// Modifier order is fixed: timeout, then `-BootSectorScan`, then
/// `-DisableRemediation`. The tool tolerates other orders but this is the
/// conventional one.
pub fn custom_scan(target: &Path, options: &ScanOptions) -> Vec<String> {
    let mut args = vec![
        "-Scan".into(),
        "-ScanType".into(),
        ScanKind::Custom.flag_value().into(),
        "-File".into(),
        path_token(target),
        "-Timeout".into(),
        options.timeout.to_string(),
    ];

    if options.scan_boot_sector {
        args.push("-BootSectorScan".into());
    }
    if !options.remediate {
        args.push("-DisableRemediation".into());
    }

    args
}

/// Builds arguments for a definitions update from the given source.
pub fn signature_update(source: &UpdateSource) -> Vec<String> {
    match source {
        UpdateSource::Mmpc => vec!["-SignatureUpdate".into(), "-MMPC".into()],
        UpdateSource::Unc(path) => {
            vec!["-SignatureUpdate".into(), "-UNC".into(), path.clone()]
        }
    }
}

/// Builds arguments for `-RemoveDefinitions` with the given scope.
pub fn remove_definitions(scope: DefinitionsScope) -> Vec<String> {
    let mut args = vec!["-RemoveDefinitions".into()];
    if let Some(flag) = scope.flag() {
        args.push(flag.into());
    }
    args
}

/// Builds arguments to install a dynamic signature from a file.
pub fn add_dynamic_signature(path: &str) -> Vec<String> {
    vec![
        "-AddDynamicSignature".into(),
        "-Path".into(),
        path.to_string(),
    ]
}

/// Builds arguments to remove one dynamic signature set by ID.
pub fn remove_dynamic_signature(id: &str) -> Vec<String> {
    vec![
        "-RemoveDynamicSignature".into(),
        "-SignatureSetID".into(),
        id.to_string(),
    ]
}

/// Builds arguments to check whether a path is excluded from scanning.
pub fn check_exclusion(path: &Path) -> Vec<String> {
    vec!["-CheckExclusion".into(), "-Path".into(), path_token(path)]
}

/// Builds arguments for a `-Restore` operation.
///
/// `destination`, when given, adds `-FilePath <dir>` to restore files
/// somewhere other than their original location.
pub fn restore(target: &RestoreTarget, destination: Option<&Path>) -> Vec<String> {
    let mut args = vec!["-Restore".into()];
    match target {
        RestoreTarget::ListAll => args.push("-ListAll".into()),
        RestoreTarget::All => args.push("-All".into()),
        RestoreTarget::Path(path) => {
            args.push("-Path".into());
            args.push(path_token(path));
        }
        RestoreTarget::Name(name) => {
            args.push("-Name".into());
            args.push(name.clone());
        }
    }
    if let Some(dir) = destination {
        args.push("-FilePath".into());
        args.push(path_token(dir));
    }
    args
}
