use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Knobs for a compile session, loadable from a YAML document.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct CompilerOptions {
    /// Collapse literal-only binary and minus expressions while building them.
    pub constant_folding: bool,
    /// Line number of the first source line.
    pub first_line: usize,
}

impl Default for CompilerOptions {
    fn default() -> Self {
        Self {
            constant_folding: true,
            first_line: 1,
        }
    }
}

impl CompilerOptions {
    pub fn from_yaml(source: &str) -> Result<Self> {
        serde_yaml::from_str(source).context("Parsing compiler options")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw =
            fs::read_to_string(path).with_context(|| format!("Reading {}", path.display()))?;
        Self::from_yaml(&raw).with_context(|| format!("Loading {}", path.display()))
    }
}
