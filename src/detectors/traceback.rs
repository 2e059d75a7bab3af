//! Traceback parsing, probable-cause classification, and snippet windows
//! for the bug-analysis pipeline.
//!
//! Parsing never fails: a traceback with no recognizable error line degrades
//! to `UnknownError` with the full text as the message, and lines that do not
//! look like a `<file>.<ext>:<line>` frame are simply dropped.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::api::results::{Frame, TracebackInfo};

// Frames are restricted to js/ts/py sources. `[^/]+` strips directory
// components from pathed references, but greedily absorbs any other leading
// text on the line ("at foo.js:12" captures "at foo.js"). Inherited
// behavior, kept verbatim.
static FRAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([^/]+\.(js|ts|py)):(\d+)").unwrap());

/// Default error type when no `Error:`/`Exception:` line is present.
pub const UNKNOWN_ERROR: &str = "UnknownError";

/// Parse a raw traceback string into its structured form.
pub fn parse_traceback(traceback: &str) -> TracebackInfo {
    let lines: Vec<&str> = traceback.split('\n').collect();

    let error_line = lines
        .iter()
        .find(|line| line.contains("Error:") || line.contains("Exception:"));

    let (error_type, message) = match error_line {
        Some(line) => {
            let mut parts = line.splitn(2, ':');
            let error_type = parts.next().unwrap_or_default().to_string();
            let message = parts.next().unwrap_or_default().trim().to_string();
            (error_type, message)
        }
        None => (UNKNOWN_ERROR.to_string(), traceback.to_string()),
    };

    let frames = lines
        .iter()
        .filter_map(|line| {
            let caps = FRAME_PATTERN.captures(line)?;
            let line_number = caps[3].parse::<usize>().ok()?;
            Some(Frame {
                file: caps[1].to_string(),
                line: line_number,
            })
        })
        .collect();

    TracebackInfo {
        error_type,
        message,
        frames,
    }
}

/// A probable-cause / suggested-fix pair keyed by an error-type substring.
pub struct CauseRule {
    /// Lowercased substring matched against the error type
    pub keyword: &'static str,
    /// Probable cause sentence
    pub cause: &'static str,
    /// Suggested fix sentence
    pub fix: &'static str,
}

/// Ordered cause table; the first keyword found in the lowercased error type
/// wins. The lookup inspects the error *type*, never the message.
pub static CAUSE_RULES: &[CauseRule] = &[
    CauseRule {
        keyword: "undefined",
        cause: "Variable or property is not defined or has not been initialized",
        fix: "Add null checks: if (variable !== undefined) { ... } or use optional chaining: object?.property",
    },
    CauseRule {
        keyword: "null",
        cause: "Attempting to access properties or methods on null value",
        fix: "Add null checks: if (variable !== null) { ... } or initialize with default values",
    },
    CauseRule {
        keyword: "type",
        cause: "Type mismatch - value is not the expected type",
        fix: "Verify data types: use typeof checks or TypeScript for type safety",
    },
    CauseRule {
        keyword: "reference",
        cause: "Variable is referenced before declaration or is out of scope",
        fix: "Ensure variable is declared before use or check scope/import statements",
    },
    CauseRule {
        keyword: "syntax",
        cause: "Code contains syntax errors - check brackets, semicolons, quotes",
        fix: "Review syntax: check matching brackets, proper semicolons, correct quotes",
    },
];

const FALLBACK_CAUSE: &str = "Error analysis requires deeper investigation of the code context";
const FALLBACK_FIX: &str = "Review the code context and error message for specific debugging steps";

/// Map an error type to its probable-cause / suggested-fix pair.
pub fn classify_cause(error_type: &str) -> (&'static str, &'static str) {
    let lowered = error_type.to_lowercase();
    for rule in CAUSE_RULES {
        if lowered.contains(rule.keyword) {
            return (rule.cause, rule.fix);
        }
    }
    (FALLBACK_CAUSE, FALLBACK_FIX)
}

/// Extract the context window around a 1-based target line: the slice
/// `[max(0, line - before), min(len, line + after))` of the file's lines,
/// joined with newlines. The default window is `before = 3`, `after = 2`.
pub fn extract_window(text: &str, line: usize, before: usize, after: usize) -> String {
    let lines: Vec<&str> = text.split('\n').collect();
    let start = line.saturating_sub(before);
    let end = (line + after).min(lines.len());
    if start >= end {
        return String::new();
    }
    lines[start..end].join("\n")
}
