//! Extension-based language classification.
//!
//! Classification is a fixed extension table, nothing more: the engine never
//! inspects file content to decide a language. Unmapped extensions map to
//! `"unknown"` rather than failing, so classification is total.

use std::path::Path;

/// Keyword family used when counting branching keywords for complexity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordFamily {
    /// C-style languages: `if`/`else`/`switch`/`case`/`catch`/`&&`/`||`
    CLike,
    /// Python-style languages: `if`/`elif`/`except`/`and`/`or`
    PythonLike,
}

/// Metadata for one recognized language.
#[derive(Debug, Clone, Copy)]
pub struct LanguageInfo {
    /// Canonical language tag as it appears in reports (e.g. "javascript").
    pub tag: &'static str,
    /// File extensions mapped to this tag (without leading dots).
    pub extensions: &'static [&'static str],
    /// Keyword family driving the complexity pattern.
    pub family: KeywordFamily,
}

const REGISTERED_LANGUAGES: &[LanguageInfo] = &[
    LanguageInfo {
        tag: "javascript",
        extensions: &["js", "jsx"],
        family: KeywordFamily::CLike,
    },
    LanguageInfo {
        tag: "typescript",
        extensions: &["ts", "tsx"],
        family: KeywordFamily::CLike,
    },
    LanguageInfo {
        tag: "python",
        extensions: &["py"],
        family: KeywordFamily::PythonLike,
    },
    LanguageInfo {
        tag: "java",
        extensions: &["java"],
        family: KeywordFamily::CLike,
    },
    LanguageInfo {
        tag: "cpp",
        extensions: &["cpp"],
        family: KeywordFamily::CLike,
    },
    LanguageInfo {
        tag: "c",
        extensions: &["c"],
        family: KeywordFamily::CLike,
    },
    LanguageInfo {
        tag: "csharp",
        extensions: &["cs"],
        family: KeywordFamily::CLike,
    },
    LanguageInfo {
        tag: "php",
        extensions: &["php"],
        family: KeywordFamily::CLike,
    },
    LanguageInfo {
        tag: "ruby",
        extensions: &["rb"],
        family: KeywordFamily::CLike,
    },
    LanguageInfo {
        tag: "go",
        extensions: &["go"],
        family: KeywordFamily::CLike,
    },
    LanguageInfo {
        tag: "rust",
        extensions: &["rs"],
        family: KeywordFamily::CLike,
    },
];

/// Return the languages known to this build.
pub fn registered_languages() -> &'static [LanguageInfo] {
    REGISTERED_LANGUAGES
}

/// Map a file extension (with or without leading dot, any case) to a
/// language tag. Unmapped extensions yield `"unknown"`.
pub fn detect_language(extension: &str) -> &'static str {
    let normalized = extension.trim_start_matches('.').to_ascii_lowercase();
    find_language_by_extension(&normalized)
        .map(|info| info.tag)
        .unwrap_or("unknown")
}

/// Map a file path to a language tag via its extension.
pub fn language_for_path<P: AsRef<Path>>(path: P) -> &'static str {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .map(detect_language)
        .unwrap_or("unknown")
}

/// Keyword family for a language tag. Unknown languages fall back to the
/// C-family pattern, matching the original engine's behavior.
pub fn keyword_family(language: &str) -> KeywordFamily {
    registered_languages()
        .iter()
        .find(|info| info.tag == language)
        .map(|info| info.family)
        .unwrap_or(KeywordFamily::CLike)
}

fn find_language_by_extension(ext: &str) -> Option<&'static LanguageInfo> {
    registered_languages()
        .iter()
        .find(|info| info.extensions.iter().any(|candidate| *candidate == ext))
}
