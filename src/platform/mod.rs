//! Platform collaborators: privilege checking, path resolution, and
//! locating the Defender command-line tool.
//!
//! Each collaborator is a trait with a system-backed default so the facade
//! can be exercised in tests without touching the host.

mod locate;
mod paths;
mod privileges;

pub use locate::locate_defender;
pub use paths::{PathResolver, SystemPaths};
pub use privileges::{FixedPrivileges, PrivilegeChecker, SystemPrivileges};
