//! Section segmentation, overview generation, and dependency extraction for
//! the code-explanation pipeline.
//!
//! Segmentation is keyword-driven: concept tags come from substring presence
//! (`import`, `function`, `if`, `for`, ...), and section boundaries are blank
//! lines or lines containing `function`. The emitted sections cover the
//! requested range contiguously, in order, without overlap.

use std::path::Path;

use indexmap::IndexSet;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::api::results::CodeSection;

static CONSTRUCT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"function|const.*=.*=>|def |class ").unwrap());

static IMPORT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"import.*from ['"`]([^'"`]+)['"`]"#).unwrap());

static IMPORT_SPEC_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"from ['"`]([^'"`]+)['"`]"#).unwrap());

static REQUIRE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"require\(['"`]([^'"`]+)['"`]\)"#).unwrap());

static RELATIVE_IMPORT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"from ['"`]\./([^'"`]+)['"`]"#).unwrap());

/// Split a line range into labeled sections with per-section concept tags.
///
/// `start_line` is the 1-based number of the first element of `lines`. A
/// boundary is forced by a blank line, a line containing `function`, or a
/// line whose predecessor was blank; the accumulated section is emitted only
/// when it spans more than one line, and the next section starts *after* the
/// boundary line. The trailing partial section is always emitted.
pub fn break_into_sections(lines: &[&str], start_line: usize) -> Vec<CodeSection> {
    let mut sections = Vec::new();

    let mut current_start = start_line;
    let mut current_lines: Vec<&str> = Vec::new();
    let mut current_concepts: IndexSet<&'static str> = IndexSet::new();

    for (index, line) in lines.iter().enumerate() {
        let line_number = start_line + index;
        current_lines.push(line);

        if line.contains("import") || line.contains("require") {
            current_concepts.insert("imports");
        }
        if line.contains("function") || line.contains("=>") {
            current_concepts.insert("function-definition");
        }
        if line.contains("if") || line.contains("else") {
            current_concepts.insert("conditional-logic");
        }
        if line.contains("for") || line.contains("while") || line.contains("forEach") {
            current_concepts.insert("loops");
        }

        let after_blank = index > 0 && lines[index - 1].trim().is_empty();
        if line.trim().is_empty() || line.contains("function") || after_blank {
            if current_lines.len() > 1 {
                sections.push(CodeSection {
                    start_line: current_start,
                    end_line: line_number - 1,
                    explanation: explain_section(&current_lines),
                    concepts: current_concepts.iter().map(|c| c.to_string()).collect(),
                });
            }
            current_start = line_number + 1;
            current_lines.clear();
            current_concepts.clear();
        }
    }

    if !current_lines.is_empty() {
        sections.push(CodeSection {
            start_line: current_start,
            end_line: start_line + lines.len() - 1,
            explanation: explain_section(&current_lines),
            concepts: current_concepts.iter().map(|c| c.to_string()).collect(),
        });
    }

    sections
}

/// Fixed explanation sentence for a section, first match wins.
fn explain_section(lines: &[&str]) -> String {
    let content = lines.join("\n");

    let explanation = if content.contains("import") || content.contains("require") {
        "This section imports dependencies and modules needed for the code to function"
    } else if content.contains("function") || content.contains("=>") {
        "This section defines a function that encapsulates specific functionality"
    } else if content.contains("if") || content.contains("else") {
        "This section contains conditional logic that executes different code paths"
    } else if content.contains("for") || content.contains("while") {
        "This section contains loop logic for iterating over data or repeating operations"
    } else if content.contains("return") {
        "This section returns a value or result from the function"
    } else {
        "This section contains core logic and operations for the module"
    };

    explanation.to_string()
}

/// One-paragraph summary of a file: size, construct count, inferred purpose.
pub fn generate_overview(text: &str, language: &str) -> String {
    let lines = text.split('\n').count();
    let constructs = CONSTRUCT_PATTERN.find_iter(text).count();

    format!(
        "This {language} file contains {lines} lines of code with {constructs} \
         functions/classes. It appears to be {}.",
        infer_purpose(text)
    )
}

/// Keyword-presence purpose inference, first match wins. Knowingly
/// approximate; kept verbatim rather than replaced with parsing.
fn infer_purpose(text: &str) -> &'static str {
    if text.contains("import React") || text.contains("from 'react'") {
        "a React component"
    } else if text.contains("express") || text.contains("app.listen") {
        "an Express.js server"
    } else if text.contains("class") && text.contains("constructor") {
        "a class definition"
    } else if text.contains("function") || text.contains("=>") {
        "a utility module with functions"
    } else {
        "a general purpose module"
    }
}

/// Extract module specifiers from `import ... from '<spec>'` and
/// `require('<spec>')` occurrences, deduplicated in first-seen order.
pub fn find_dependencies(text: &str) -> Vec<String> {
    let mut dependencies: IndexSet<String> = IndexSet::new();

    // Two-step extraction: the inner pattern re-scans each outer match, so a
    // line with several imports resolves the way the original did.
    for outer in IMPORT_PATTERN.find_iter(text) {
        if let Some(caps) = IMPORT_SPEC_PATTERN.captures(outer.as_str()) {
            dependencies.insert(caps[1].to_string());
        }
    }

    for caps in REQUIRE_PATTERN.captures_iter(text) {
        dependencies.insert(caps[1].to_string());
    }

    dependencies.into_iter().collect()
}

/// Resolve `from './<rel>'` relative-import targets against the source
/// file's directory. Existence is not verified.
pub fn find_related_files(file_path: &str, text: &str) -> Vec<String> {
    let dir = Path::new(file_path).parent().unwrap_or_else(|| Path::new(""));

    RELATIVE_IMPORT_PATTERN
        .captures_iter(text)
        .map(|caps| dir.join(&caps[1]).to_string_lossy().into_owned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_cover_the_range_in_order() {
        let lines = vec![
            "import { api } from './api';",
            "import fs from 'fs';",
            "",
            "const handler = (req) => {",
            "  if (req.ok) {",
            "    return 1;",
            "  }",
            "};",
        ];
        let sections = break_into_sections(&lines, 1);
        assert!(!sections.is_empty());
        for window in sections.windows(2) {
            assert!(window[0].end_line < window[1].start_line);
        }
        assert_eq!(sections[0].start_line, 1);
        assert!(sections[0].concepts.contains(&"imports".to_string()));
    }

    #[test]
    fn single_line_runs_are_swallowed_by_boundaries() {
        // A lone line between blanks never reaches the two-line minimum, so
        // it is dropped from the emitted sections.
        let lines = vec!["", "const x = 1;", ""];
        let sections = break_into_sections(&lines, 10);
        assert!(sections.is_empty());
    }

    #[test]
    fn trailing_partial_section_is_always_emitted() {
        let lines = vec!["const a = 1;"];
        let sections = break_into_sections(&lines, 5);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].start_line, 5);
        assert_eq!(sections[0].end_line, 5);
    }

    #[test]
    fn explanation_priority_prefers_imports() {
        let lines = vec!["import x from 'y';", "if (x) { use(x); }"];
        let sections = break_into_sections(&lines, 1);
        assert!(sections[0].explanation.contains("imports dependencies"));
    }

    #[test]
    fn concept_tags_accumulate_per_section() {
        let lines = vec!["if (ready) {", "  for (const item of items) {", "  }", "}"];
        let sections = break_into_sections(&lines, 1);
        assert_eq!(sections.len(), 1);
        assert_eq!(
            sections[0].concepts,
            vec!["conditional-logic".to_string(), "loops".to_string()]
        );
    }

    #[test]
    fn overview_names_language_and_purpose() {
        let text = "import React from 'react';\nexport const App = () => <div/>;\n";
        let overview = generate_overview(text, "javascript");
        assert!(overview.contains("This javascript file"));
        assert!(overview.contains("a React component"));
    }

    #[test]
    fn purpose_falls_through_to_general() {
        assert_eq!(infer_purpose("SELECT 1;"), "a general purpose module");
        assert_eq!(infer_purpose("const f = () => 1;"), "a utility module with functions");
        assert_eq!(
            infer_purpose("class A { constructor() {} }"),
            "a class definition"
        );
    }

    #[test]
    fn dependencies_are_deduplicated_in_first_seen_order() {
        let text = "import a from 'alpha';\nconst b = require('beta');\nimport c from 'alpha';\n";
        assert_eq!(find_dependencies(text), vec!["alpha", "beta"]);
    }

    #[test]
    fn related_files_join_against_the_source_directory() {
        let text = "import { helper } from './utils/helper';\n";
        let related = find_related_files("src/components/App.jsx", text);
        assert_eq!(related, vec!["src/components/utils/helper".to_string()]);
    }

    #[test]
    fn bare_package_imports_are_not_related_files() {
        let text = "import express from 'express';\n";
        assert!(find_related_files("src/server.js", text).is_empty());
    }
}
