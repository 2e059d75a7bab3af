//! Per-line lint rules for the code-analysis pipeline.
//!
//! The scanner walks physical lines and evaluates a fixed, ordered rule
//! table against each one. Rules are independent: several can fire on the
//! same line, and emission order follows table order. There is no
//! suppression, fix-up, or cross-line state.

use crate::api::results::{Issue, IssueKind};

/// Everything a rule may look at for one line.
pub struct LineContext<'a> {
    /// The raw physical line
    pub line: &'a str,
    /// The line with surrounding whitespace removed
    pub trimmed: &'a str,
    /// Language tag of the file
    pub language: &'a str,
    /// The complete file text (for containment heuristics)
    pub file_text: &'a str,
}

/// One entry in the ordered rule table. A rule returns a message when it
/// fires, `None` otherwise.
pub struct IssueRule {
    /// Stable rule identifier
    pub rule: &'static str,
    /// Classification of findings from this rule
    pub kind: IssueKind,
    /// Predicate plus message builder
    pub check: fn(&LineContext) -> Option<String>,
}

/// The lint rule table, evaluated top to bottom per line.
pub static ISSUE_RULES: &[IssueRule] = &[
    IssueRule {
        rule: "line-length",
        kind: IssueKind::Warning,
        check: check_line_length,
    },
    IssueRule {
        rule: "todo-comment",
        kind: IssueKind::Info,
        check: check_todo_comment,
    },
    IssueRule {
        rule: "no-console",
        kind: IssueKind::Warning,
        check: check_console_log,
    },
    IssueRule {
        rule: "unused-variable",
        kind: IssueKind::Warning,
        check: check_unused_variable,
    },
];

/// Scan a file's text and return all lint findings in line order.
pub fn find_issues(text: &str, language: &str) -> Vec<Issue> {
    let mut issues = Vec::new();

    for (index, line) in text.split('\n').enumerate() {
        let ctx = LineContext {
            line,
            trimmed: line.trim(),
            language,
            file_text: text,
        };

        for rule in ISSUE_RULES {
            if let Some(message) = (rule.check)(&ctx) {
                issues.push(Issue {
                    kind: rule.kind,
                    line: index + 1,
                    message,
                    rule: rule.rule.to_string(),
                });
            }
        }
    }

    issues
}

fn check_line_length(ctx: &LineContext) -> Option<String> {
    if ctx.line.chars().count() > 120 {
        Some("Line too long (>120 characters)".to_string())
    } else {
        None
    }
}

fn check_todo_comment(ctx: &LineContext) -> Option<String> {
    if ctx.trimmed.contains("TODO") || ctx.trimmed.contains("FIXME") {
        Some("TODO/FIXME comment found".to_string())
    } else {
        None
    }
}

fn check_console_log(ctx: &LineContext) -> Option<String> {
    let is_js = ctx.language == "javascript" || ctx.language == "typescript";
    if is_js && ctx.trimmed.contains("console.log") {
        Some("Console.log statement found - consider removing for production".to_string())
    } else {
        None
    }
}

/// Crude unused-variable containment check.
///
/// The declared identifier is the second space-delimited token with `=`, `:`
/// and `,` stripped. The heuristic then asks whether the identifier *minus
/// its final character* appears anywhere else in the file. The truncation is
/// inherited behavior and is preserved verbatim; it both over- and
/// under-reports, which the tests below pin down as the contract.
fn check_unused_variable(ctx: &LineContext) -> Option<String> {
    let starts_declaration = ctx.trimmed.starts_with("const ")
        || ctx.trimmed.starts_with("let ")
        || ctx.trimmed.starts_with("var ");
    if !starts_declaration {
        return None;
    }

    let name: String = ctx
        .trimmed
        .split(' ')
        .nth(1)?
        .chars()
        .filter(|c| !matches!(c, '=' | ':' | ','))
        .collect();
    if name.is_empty() {
        return None;
    }

    let prefix: String = {
        let mut chars: Vec<char> = name.chars().collect();
        chars.pop();
        chars.into_iter().collect()
    };

    // `contains("")` is always true, so single-character names never fire.
    if !ctx.file_text.contains(prefix.as_str()) {
        Some(format!("Variable '{name}' might be unused"))
    } else {
        None
    }
}
