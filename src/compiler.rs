//! Compile session handed to every grammar action.
//!
//! A [`Compiler`] owns what a parse accumulates: the current source line, the
//! function table and the diagnostics reported so far. Sessions share nothing,
//! so independent parses can run side by side in one process.

mod create;
mod error;
mod functions;
mod options;

pub use error::{CompileError, CompileErrors};
pub use functions::{FunctionDefinition, FunctionKind, FunctionTable, NativeFunction};
pub use options::CompilerOptions;

#[derive(Debug)]
pub struct Compiler {
    options: CompilerOptions,
    current_line: usize,
    functions: FunctionTable,
    diagnostics: Vec<CompileError>,
}

impl Compiler {
    pub fn new() -> Self {
        Self::with_options(CompilerOptions::default())
    }

    pub fn with_options(options: CompilerOptions) -> Self {
        Self {
            current_line: options.first_line,
            options,
            functions: FunctionTable::new(),
            diagnostics: Vec::new(),
        }
    }

    pub fn options(&self) -> &CompilerOptions {
        &self.options
    }

    /// Line of the token currently being reduced.
    pub fn current_line(&self) -> usize {
        self.current_line
    }

    pub fn set_line(&mut self, line: usize) {
        self.current_line = line;
    }

    pub fn advance_line(&mut self) {
        self.current_line += 1;
    }

    pub fn lookup_function(&self, name: &str) -> Option<&FunctionDefinition> {
        self.functions.lookup(name)
    }

    pub fn functions(&self) -> &FunctionTable {
        &self.functions
    }

    pub fn diagnostics(&self) -> &[CompileError] {
        &self.diagnostics
    }

    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Records a diagnostic; construction carries on after it.
    pub fn report(&mut self, error: CompileError) {
        tracing::warn!(line = self.current_line, "{error}");
        self.diagnostics.push(error);
    }

    /// Ends the session, yielding the function table if nothing was reported.
    pub fn finish(self) -> Result<FunctionTable, CompileErrors> {
        if self.diagnostics.is_empty() {
            Ok(self.functions)
        } else {
            Err(CompileErrors::new(self.diagnostics))
        }
    }
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new()
    }
}
