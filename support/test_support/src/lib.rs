use std::fs;
use std::path::Path;

use anyhow::{Context, Result, ensure};
use serde::Deserialize;

/// Literal operand or result as written in a fixture file.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(untagged)]
pub enum Literal {
    Int(i64),
    Double(f64),
    Boolean(bool),
}

#[derive(Debug, Deserialize, Clone)]
pub struct BinaryCase {
    pub name: String,
    pub op: String,
    pub left: Literal,
    pub right: Literal,
    /// Folded result; absent when the expression must stay unfolded.
    #[serde(default)]
    pub expected: Option<Literal>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct NegateCase {
    pub name: String,
    pub operand: Literal,
    #[serde(default)]
    pub expected: Option<Literal>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FoldSuite {
    #[serde(default)]
    pub binary: Vec<BinaryCase>,
    #[serde(default)]
    pub negate: Vec<NegateCase>,
}

impl FoldSuite {
    pub fn len(&self) -> usize {
        self.binary.len() + self.negate.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub fn load_suite(path: &Path) -> Result<FoldSuite> {
    let raw = fs::read_to_string(path).with_context(|| format!("Reading {}", path.display()))?;
    let suite: FoldSuite =
        serde_yaml::from_str(&raw).with_context(|| format!("Parsing {}", path.display()))?;

    ensure!(!suite.is_empty(), "No fold cases found in {}", path.display());
    let mut names = suite
        .binary
        .iter()
        .map(|case| case.name.as_str())
        .chain(suite.negate.iter().map(|case| case.name.as_str()))
        .collect::<Vec<_>>();
    names.sort_unstable();
    if let Some(pair) = names.windows(2).find(|pair| pair[0] == pair[1]) {
        anyhow::bail!("Duplicate fold case '{}' in {}", pair[0], path.display());
    }
    Ok(suite)
}
