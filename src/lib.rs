pub mod ast;
pub mod chain;
pub mod compiler;
pub mod eval;

pub use compiler::Compiler;
