//! Validation settings shared by the per-file and directory passes.

use std::path::Path;

use nndata_core::STATE_SIZE;

/// Default episode file extension, without the leading dot.
pub const DEFAULT_EXTENSION: &str = "jsonl";

/// Knobs for a validation run. `Default` gives the fixed episode contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationConfig {
    /// Required length of every decision's `state` vector.
    pub state_size: usize,
    /// File extension that marks an episode file, without the leading dot.
    pub extension: String,
    /// Also check the optional recorder fields.
    pub strict: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            state_size: STATE_SIZE,
            extension: DEFAULT_EXTENSION.to_string(),
            strict: false,
        }
    }
}

impl ValidationConfig {
    /// Set the episode file extension. A leading dot is accepted and dropped.
    pub fn with_extension(mut self, extension: &str) -> Self {
        self.extension = extension.trim_start_matches('.').to_string();
        self
    }

    /// Enable or disable the recorder-field checks.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Override the required `state` length.
    pub fn with_state_size(mut self, state_size: usize) -> Self {
        self.state_size = state_size;
        self
    }

    /// Whether `path` names an episode file under this config.
    ///
    /// Hidden files (leading `.`) never match.
    pub fn matches(&self, path: &Path) -> bool {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        if name.starts_with('.') {
            return false;
        }
        name.strip_suffix(self.extension.as_str())
            .is_some_and(|stem| stem.ends_with('.'))
    }
}
