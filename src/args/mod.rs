//! Argument construction for the Defender command-line tool.

mod builder;

pub use builder::{
    add_dynamic_signature, cancel_scan, check_exclusion, custom_scan, remove_definitions,
    remove_dynamic_signature, restore, scan, signature_update,
};
