//! Configuration types and management for codesight.
//!
//! The engine itself reads no environment and opens no files; configuration
//! is handed in by the caller (CLI, embedding application) and validated
//! once at engine construction.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::errors::{CodesightError, Result};

/// Main configuration for the codesight engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodesightConfig {
    /// Code-analysis pipeline settings
    #[serde(default)]
    pub analysis: AnalysisSettings,

    /// Bug-analysis pipeline settings
    #[serde(default)]
    pub bug: BugSettings,

    /// Git-insight pipeline settings
    #[serde(default)]
    pub git: GitSettings,
}

/// Settings for the code-analysis pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisSettings {
    /// Compute lines-of-code / complexity / maintainability metrics
    pub include_metrics: bool,

    /// Run the security scanner and attach `security_issues` to the report
    pub include_security: bool,
}

/// Settings for the bug-analysis pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BugSettings {
    /// Cap on the relevant-files list (context files plus traceback frames)
    pub max_relevant_files: usize,

    /// Lines of context extracted before the failing line
    pub snippet_lines_before: usize,

    /// Lines of context extracted after the failing line
    pub snippet_lines_after: usize,
}

/// Settings for the git-insight pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitSettings {
    /// Maximum number of commits returned by a history query
    pub max_results: usize,

    /// Fetch the changed-file list for each commit
    pub include_files: bool,
}

impl Default for CodesightConfig {
    fn default() -> Self {
        Self {
            analysis: AnalysisSettings::default(),
            bug: BugSettings::default(),
            git: GitSettings::default(),
        }
    }
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            include_metrics: true,
            include_security: false,
        }
    }
}

impl Default for BugSettings {
    fn default() -> Self {
        Self {
            max_relevant_files: 5,
            snippet_lines_before: 3,
            snippet_lines_after: 2,
        }
    }
}

impl Default for GitSettings {
    fn default() -> Self {
        Self {
            max_results: 10,
            include_files: true,
        }
    }
}

impl CodesightConfig {
    /// Load configuration from a YAML file.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            CodesightError::io(format!("Failed to read config file: {}", path.display()), e)
        })?;
        let config: Self = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the configuration to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.bug.max_relevant_files == 0 {
            return Err(CodesightError::config_field(
                "max_relevant_files must be at least 1",
                "bug.max_relevant_files",
            ));
        }

        if self.git.max_results == 0 {
            return Err(CodesightError::config_field(
                "max_results must be at least 1",
                "git.max_results",
            ));
        }

        Ok(())
    }
}
