//! Parser for the quarantine listing of `-Restore -ListAll`.
//!
//! After a fixed two-line header, the listing is a sequence of chunks, each
//! introduced by a `ThreatName = <name>` line and followed by indented
//! `<path> quarantined at <timestamp>` lines. The anchor line belongs to the
//! chunk it introduces; a threat with no remaining files lists zero entries.

use crate::core::error::{DefenderError, DefenderResult};
use crate::core::types::{QuarantinedFile, QuarantinedThreat};
use crate::parser::TOOL_LINE_ENDING;

/// Number of banner lines before the listing body.
pub const QUARANTINE_HEADER_LINES: usize = 2;

/// Prefix of the anchor line that starts each per-threat chunk.
const ANCHOR_PREFIX: &str = "ThreatName = ";

/// Separator between a file path and its quarantine timestamp.
const TIME_SEPARATOR: &str = " quarantined at ";

/// Parses the stdout of a quarantine listing.
///
/// Yields one [`QuarantinedThreat`] per `ThreatName = <name>` anchor line,
/// in listing order. A listing with no anchors (an empty quarantine store)
/// yields an empty list.
///
/// # Errors
///
/// Returns [`DefenderError::Parse`] when non-blank content precedes the
/// first anchor, a file line is not indented, or a file line does not carry
/// the `quarantined at` timestamp separator.
pub fn parse_quarantine_listing(stdout: &str) -> DefenderResult<Vec<QuarantinedThreat>> {
    let mut threats: Vec<QuarantinedThreat> = Vec::new();
    let mut current: Option<QuarantinedThreat> = None;

    let body = stdout
        .split(TOOL_LINE_ENDING)
        .skip(QUARANTINE_HEADER_LINES)
        .filter(|line| !line.is_empty());

    for line in body {
        if let Some(name) = line.strip_prefix(ANCHOR_PREFIX) {
            let name = name.trim();
            if name.is_empty() {
                return Err(DefenderError::parse(
                    "quarantine entry has an empty threat name",
                    line,
                ));
            }
            if let Some(done) = current.take() {
                threats.push(done);
            }
            current = Some(QuarantinedThreat::new(name, Vec::new()));
        } else {
            let Some(threat) = current.as_mut() else {
                return Err(DefenderError::parse(
                    "quarantine listing has content before the first ThreatName line",
                    line,
                ));
            };
            threat.files.push(parse_file_line(line)?);
        }
    }
    if let Some(done) = current.take() {
        threats.push(done);
    }

    Ok(threats)
}

fn parse_file_line(line: &str) -> DefenderResult<QuarantinedFile> {
    if !line.starts_with(' ') {
        return Err(DefenderError::parse(
            "quarantined file entries must be indented",
            line,
        ));
    }
    let entry = line.trim();
    // The path may itself contain the separator text; the timestamp follows
    // the last occurrence.
    let at = entry.rfind(TIME_SEPARATOR).ok_or_else(|| {
        DefenderError::parse("quarantined file entry is missing its timestamp", line)
    })?;
    let (path, rest) = entry.split_at(at);
    let time = &rest[TIME_SEPARATOR.len()..];
    if path.is_empty() || time.is_empty() {
        return Err(DefenderError::parse(
            "quarantined file entry is missing its path or timestamp",
            line,
        ));
    }

    Ok(QuarantinedFile {
        path: path.to_string(),
        quarantined_at: time.to_string(),
    })
}
