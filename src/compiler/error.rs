use thiserror::Error;

/// Diagnostics reported while building the tree.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CompileError {
    #[error("Function '{name}' is already defined (line {line})")]
    DuplicateFunction { name: String, line: usize },
}

/// Every diagnostic collected by a session that failed to compile.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Compilation failed with {} error(s)", .errors.len())]
pub struct CompileErrors {
    errors: Vec<CompileError>,
}

impl CompileErrors {
    pub(super) fn new(errors: Vec<CompileError>) -> Self {
        Self { errors }
    }

    pub fn errors(&self) -> &[CompileError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<CompileError> {
        self.errors
    }
}
