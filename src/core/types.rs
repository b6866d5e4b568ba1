//! Core types used throughout the defender-bridge library.
//!
//! This module defines the data structures for representing detected and
//! quarantined threats, plus the typed vocabulary of tool operations:
//! scan kinds, definition-update sources, definition-removal scopes, and
//! quarantine-restore targets.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// A threat detected by a targeted scan.
///
/// Produced only from a scan whose exit status is the tool's
/// "threats found" sentinel. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Threat {
    /// Signature name of the threat (e.g., "Virus:DOS/EICAR_Test_File").
    pub name: String,

    /// Absolute paths of the files the threat was found in, in report order.
    pub files: Vec<String>,
}

impl Threat {
    /// Creates a new `Threat`.
    pub fn new(name: impl Into<String>, files: Vec<String>) -> Self {
        Self {
            name: name.into(),
            files,
        }
    }
}

/// A single file entry in a quarantine listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuarantinedFile {
    /// Original path of the quarantined file.
    pub path: String,

    /// Timestamp as formatted by the tool, preserved verbatim.
    ///
    /// The tool renders this in the local, locale-dependent format, so it is
    /// kept as text rather than parsed into a date type.
    pub quarantined_at: String,
}

/// A threat in the tool's quarantine store, with its isolated files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuarantinedThreat {
    /// Signature name of the threat.
    pub name: String,

    /// Quarantined files attributed to this threat, in listing order.
    pub files: Vec<QuarantinedFile>,
}

impl QuarantinedThreat {
    /// Creates a new `QuarantinedThreat`.
    pub fn new(name: impl Into<String>, files: Vec<QuarantinedFile>) -> Self {
        Self {
            name: name.into(),
            files,
        }
    }
}

/// The kind of scan the tool should run, mapped to `-ScanType` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanKind {
    /// Default scan as configured in the tool (`-ScanType 0`).
    Default,
    /// Quick scan of common infection points (`-ScanType 1`).
    Quick,
    /// Full system scan (`-ScanType 2`).
    Full,
    /// Custom scan restricted to a file or directory (`-ScanType 3`).
    Custom,
}

impl ScanKind {
    /// Returns the `-ScanType` flag value for this kind.
    pub fn flag_value(&self) -> &'static str {
        match self {
            Self::Default => "0",
            Self::Quick => "1",
            Self::Full => "2",
            Self::Custom => "3",
        }
    }
}

impl fmt::Display for ScanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => write!(f, "default"),
            Self::Quick => write!(f, "quick"),
            Self::Full => write!(f, "full"),
            Self::Custom => write!(f, "custom"),
        }
    }
}

/// Where a definitions update should be fetched from.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UpdateSource {
    /// The Microsoft Malware Protection Center (`-MMPC`).
    #[default]
    Mmpc,
    /// A UNC share holding definition packages (`-UNC <path>`).
    Unc(String),
}

/// Which definitions `-RemoveDefinitions` should discard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefinitionsScope {
    /// Revert to the previous definition set (no modifier flag).
    LastUpdate,
    /// Remove all definitions (`-All`).
    All,
    /// Revert the scan engine to its previous version (`-Engine`).
    Engine,
    /// Remove dynamically downloaded signatures (`-DynamicSignatures`).
    DynamicSignatures,
}

impl DefinitionsScope {
    /// Returns the modifier flag for this scope, if any.
    pub fn flag(&self) -> Option<&'static str> {
        match self {
            Self::LastUpdate => None,
            Self::All => Some("-All"),
            Self::Engine => Some("-Engine"),
            Self::DynamicSignatures => Some("-DynamicSignatures"),
        }
    }
}

/// What a `-Restore` invocation should act on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RestoreTarget {
    /// List all quarantined items (`-ListAll`).
    ListAll,
    /// Restore everything in quarantine (`-All`).
    All,
    /// Restore the item quarantined from this path (`-Path <path>`).
    Path(PathBuf),
    /// Restore all items detected under this threat name (`-Name <name>`).
    Name(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_kind_flag_values() {
        assert_eq!(ScanKind::Default.flag_value(), "0");
        assert_eq!(ScanKind::Quick.flag_value(), "1");
        assert_eq!(ScanKind::Full.flag_value(), "2");
        assert_eq!(ScanKind::Custom.flag_value(), "3");
    }

    #[test]
    fn test_definitions_scope_flags() {
        assert_eq!(DefinitionsScope::LastUpdate.flag(), None);
        assert_eq!(DefinitionsScope::All.flag(), Some("-All"));
        assert_eq!(DefinitionsScope::Engine.flag(), Some("-Engine"));
        assert_eq!(
            DefinitionsScope::DynamicSignatures.flag(),
            Some("-DynamicSignatures")
        );
    }

    #[test]
    fn test_update_source_default() {
        assert_eq!(UpdateSource::default(), UpdateSource::Mmpc);
    }

    #[test]
    fn test_threat_serialization() {
        let threat = Threat::new(
            "Virus:DOS/EICAR_Test_File",
            vec!["C:\\samples\\eicar.com.txt".into()],
        );
        let json = serde_json::to_string(&threat).unwrap();
        let back: Threat = serde_json::from_str(&json).unwrap();
        assert_eq!(back, threat);
    }
}
