use rustc_hash::FxHashMap;

use crate::ast::{Block, ParameterList};
use crate::eval::{EvalError, Value};

use super::{CompileError, Compiler};

/// Host function callable from scripts.
pub type NativeFunction = fn(&[Value]) -> Result<Value, EvalError>;

#[derive(Debug, Clone)]
pub enum FunctionKind {
    UserDefined {
        parameters: Option<ParameterList>,
        block: Block,
    },
    Native(NativeFunction),
}

#[derive(Debug, Clone)]
pub struct FunctionDefinition {
    pub name: String,
    /// Line of the definition; 0 for native functions.
    pub line: usize,
    pub kind: FunctionKind,
}

impl FunctionDefinition {
    pub fn is_user_defined(&self) -> bool {
        matches!(self.kind, FunctionKind::UserDefined { .. })
    }

    pub fn parameter_names(&self) -> Vec<&str> {
        match &self.kind {
            FunctionKind::UserDefined {
                parameters: Some(parameters),
                ..
            } => parameters.iter().map(String::as_str).collect(),
            FunctionKind::UserDefined {
                parameters: None, ..
            }
            | FunctionKind::Native(_) => Vec::new(),
        }
    }
}

/// Functions known to a compile session, keyed by unique name.
///
/// Iteration yields the most recently registered definition first.
#[derive(Debug, Default)]
pub struct FunctionTable {
    definitions: Vec<FunctionDefinition>,
    index: FxHashMap<String, usize>,
}

impl FunctionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lookup(&self, name: &str) -> Option<&FunctionDefinition> {
        self.index.get(name).map(|&slot| &self.definitions[slot])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Inserts `definition` unless its name is taken, in which case the
    /// rejected definition is handed back and the table is left untouched.
    pub fn register(&mut self, definition: FunctionDefinition) -> Result<(), FunctionDefinition> {
        if self.contains(&definition.name) {
            return Err(definition);
        }
        self.index
            .insert(definition.name.clone(), self.definitions.len());
        self.definitions.push(definition);
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &FunctionDefinition> {
        self.definitions.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl Compiler {
    /// Registers a user-defined function.
    ///
    /// A name that is already taken, by a user or a native function, is
    /// reported as [`CompileError::DuplicateFunction`] and the new definition
    /// is dropped. The call itself always returns so the parse can go on.
    pub fn define_function(
        &mut self,
        name: impl Into<String>,
        parameters: Option<ParameterList>,
        block: Block,
    ) {
        let definition = FunctionDefinition {
            name: name.into(),
            line: self.current_line(),
            kind: FunctionKind::UserDefined { parameters, block },
        };
        self.insert_function(definition);
    }

    /// Registers a host function under `name`, with the same uniqueness rule
    /// as [`Compiler::define_function`].
    pub fn register_native_function(&mut self, name: impl Into<String>, function: NativeFunction) {
        let definition = FunctionDefinition {
            name: name.into(),
            line: 0,
            kind: FunctionKind::Native(function),
        };
        self.insert_function(definition);
    }

    fn insert_function(&mut self, definition: FunctionDefinition) {
        if let Err(rejected) = self.functions.register(definition) {
            self.report(CompileError::DuplicateFunction {
                name: rejected.name,
                line: self.current_line(),
            });
        }
    }
}
