//! Parser for the threat report of a custom scan.
//!
//! The report has a fixed five-line header banner and a single trailing
//! footer line, with per-threat blocks in between delimited by lines of
//! repeated `-` characters. Within a block, a `Threat : <name>` line names
//! the signature and each `file : <path>` line names an affected file.

use crate::core::error::{DefenderError, DefenderResult};
use crate::core::types::Threat;
use crate::parser::{label_value, TOOL_LINE_ENDING};

/// Number of banner lines before the report body.
pub const REPORT_HEADER_LINES: usize = 5;

/// Number of trailing lines after the report body.
pub const REPORT_FOOTER_LINES: usize = 1;

/// Prefix the tool prints when it crashed internally instead of reporting.
///
/// A stdout beginning with this marker is a genuine tool failure even when
/// the exit code matches the "threats found" sentinel, and must be
/// propagated as the original execution error rather than parsed.
pub const CRASH_MARKER: &str = "CmdTool";

/// Returns `true` if this output is the tool's internal-error banner.
pub fn is_crash_banner(stdout: &str) -> bool {
    stdout.starts_with(CRASH_MARKER)
}

/// A block separator is a line consisting solely of `-` characters.
fn is_block_separator(line: &str) -> bool {
    !line.is_empty() && line.bytes().all(|b| b == b'-')
}

/// Parses the stdout of a custom scan that reported threats.
///
/// Yields exactly one [`Threat`] per report block, each with a non-empty
/// signature name and at least one file path.
///
/// # Errors
///
/// Returns [`DefenderError::Parse`] when the report is shorter than its
/// fixed header and footer, does not end with a block separator, or contains
/// a block without a `Threat` line or without any `file` lines.
pub fn parse_threat_report(stdout: &str) -> DefenderResult<Vec<Threat>> {
    let lines: Vec<&str> = stdout.split(TOOL_LINE_ENDING).collect();
    if lines.len() <= REPORT_HEADER_LINES + REPORT_FOOTER_LINES {
        return Err(DefenderError::parse(
            "threat report is shorter than its fixed header and footer",
            stdout,
        ));
    }
    let body = &lines[REPORT_HEADER_LINES..lines.len() - REPORT_FOOTER_LINES];

    let mut threats = Vec::new();
    let mut block: Vec<&str> = Vec::new();
    for line in body {
        if is_block_separator(line) {
            threats.push(parse_block(&block)?);
            block.clear();
        } else {
            block.push(line);
        }
    }
    // The final separator leaves only blank trailing content behind; anything
    // else means the report was truncated mid-block.
    if block.iter().any(|line| !line.trim().is_empty()) {
        return Err(DefenderError::parse(
            "threat report does not end with a block separator",
            block.join("\n"),
        ));
    }

    Ok(threats)
}

fn parse_block(block: &[&str]) -> DefenderResult<Threat> {
    let mut name: Option<&str> = None;
    let mut files: Vec<String> = Vec::new();

    for line in block {
        if let Some(value) = label_value(line, "Threat") {
            name.get_or_insert(value);
        } else if let Some(value) = label_value(line, "file") {
            files.push(value.to_string());
        }
    }

    let name = name.ok_or_else(|| {
        DefenderError::parse("threat block is missing a Threat line", block.join("\n"))
    })?;
    if files.is_empty() {
        return Err(DefenderError::parse(
            "threat block has no file entries",
            block.join("\n"),
        ));
    }

    Ok(Threat::new(name, files))
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: [&str; 5] = [
        "Scan starting...",
        "Scan finished.",
        "Scanning C:\\samples found 3 threats.",
        "",
        "<===========================LIST OF DETECTED THREATS==========================>",
    ];

    /// Assembles a CRLF report from raw block line groups, each followed by
    /// a separator, plus the trailing footer line.
    fn report(blocks: &[&[&str]]) -> String {
        let mut lines: Vec<&str> = HEADER.to_vec();
        for block in blocks {
            lines.extend_from_slice(block);
            lines.push("-------------------------------------------------------------------------------");
        }
        lines.push("");
        lines.join("\r\n")
    }

    #[test]
    fn test_two_block_report() {
        let text = report(&[
            &[
                "----------------------------- Threat information ------------------------------",
                "Threat                  : Virus:DOS/EICAR_Test_File",
                "Resources               : 2 total",
                "    file                : C:\\f\\eicar.com.txt",
                "    file                : C:\\f\\eicar.com copy.txt",
            ],
            &[
                "Threat                  : Trojan:Win32/Woreflint.A!cl",
                "Resources               : 1 total",
                "    file                : C:\\f\\edac70a2.bin",
            ],
        ]);

        let threats = parse_threat_report(&text).unwrap();
        assert_eq!(threats.len(), 2);
        assert_eq!(threats[0].name, "Virus:DOS/EICAR_Test_File");
        assert_eq!(
            threats[0].files,
            vec!["C:\\f\\eicar.com.txt", "C:\\f\\eicar.com copy.txt"]
        );
        assert_eq!(threats[1].name, "Trojan:Win32/Woreflint.A!cl");
        assert_eq!(threats[1].files, vec!["C:\\f\\edac70a2.bin"]);
    }

    #[test]
    fn test_block_count_matches_record_count() {
        for n in 1..=4 {
            let block: &[&str] = &[
                "Threat                  : Test:Win32/Sample",
                "    file                : C:\\f\\sample.bin",
            ];
            let blocks: Vec<&[&str]> = (0..n).map(|_| block).collect();
            let threats = parse_threat_report(&report(&blocks)).unwrap();
            assert_eq!(threats.len(), n);
        }
    }

    #[test]
    fn test_block_without_files_is_an_error() {
        let text = report(&[&["Threat                  : Virus:DOS/EICAR_Test_File"]]);
        let err = parse_threat_report(&text).unwrap_err();
        assert!(matches!(err, DefenderError::Parse { .. }));
        assert!(err.to_string().contains("no file entries"));
    }

    #[test]
    fn test_block_without_threat_line_is_an_error() {
        let text = report(&[&["    file                : C:\\f\\orphan.bin"]]);
        let err = parse_threat_report(&text).unwrap_err();
        assert!(matches!(err, DefenderError::Parse { .. }));
        assert!(err.to_string().contains("missing a Threat line"));
    }

    #[test]
    fn test_truncated_report_is_an_error() {
        // No separator after the block.
        let mut lines: Vec<&str> = HEADER.to_vec();
        lines.push("Threat                  : Virus:DOS/EICAR_Test_File");
        lines.push("");
        let err = parse_threat_report(&lines.join("\r\n")).unwrap_err();
        assert!(err.to_string().contains("block separator"));
    }

    #[test]
    fn test_short_output_is_an_error() {
        let err = parse_threat_report("Scan starting...\r\n").unwrap_err();
        assert!(matches!(err, DefenderError::Parse { .. }));
    }

    #[test]
    fn test_crash_banner_detection() {
        assert!(is_crash_banner("CmdTool: Failed with hr = 0x80508023"));
        assert!(!is_crash_banner("Scan starting..."));
    }

    #[test]
    fn test_separator_must_be_hyphens_only() {
        assert!(is_block_separator("---"));
        assert!(!is_block_separator(""));
        assert!(!is_block_separator(
            "----------------------------- Threat information ---------"
        ));
    }
}
