//! Parsers for the tool's line-oriented text output.
//!
//! Two independent pipelines: the threat report emitted by a custom scan,
//! and the quarantine listing emitted by `-Restore -ListAll`. Both are
//! strict: any line or block that fails to match the expected structure is a
//! [`DefenderError::Parse`] carrying the offending fragment, never a silently
//! dropped or substituted record.
//!
//! [`DefenderError::Parse`]: crate::core::DefenderError::Parse

mod quarantine;
mod threats;

pub use quarantine::{parse_quarantine_listing, QUARANTINE_HEADER_LINES};
pub use threats::{
    is_crash_banner, parse_threat_report, CRASH_MARKER, REPORT_FOOTER_LINES, REPORT_HEADER_LINES,
};

/// The line terminator the tool uses in its output.
pub const TOOL_LINE_ENDING: &str = "\r\n";

/// Exit code the tool uses to signal "scan completed, threats found".
///
/// Only this code carries a parseable report on stdout; any other non-zero
/// exit is an opaque failure.
pub const THREATS_FOUND_EXIT_CODE: i32 = 2;

/// Extracts the value of a `label : value` line.
///
/// Matches a line whose (leading-whitespace-trimmed) text starts with
/// `label`, followed by optional spaces, a colon, and a non-empty value,
/// which is returned trimmed. Used for the `Threat` and `file` labels of
/// the threat report.
pub(crate) fn label_value<'a>(line: &'a str, label: &str) -> Option<&'a str> {
    let rest = line.trim_start().strip_prefix(label)?;
    let rest = rest.trim_start_matches(' ');
    let value = rest.strip_prefix(':')?.trim();
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
