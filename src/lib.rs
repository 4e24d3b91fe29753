//! Crate root: wires together the compilation pipeline.
//!
//! The stages are intentionally small and composable so they can be evolved
//! independently:
//! - `tokenizer` performs lexical analysis and produces a flat token stream.
//! - `stream` owns the cursor and the four primitives everything else uses
//!   to read tokens.
//! - `codegen` drives the cursor through the expression grammar and emits
//!   Intel-syntax x86-64 assembly, one instruction per operator.
//! - `error` centralises reporting utilities shared by the other modules.

pub mod error;
pub mod stream;
pub mod tokenizer;

mod codegen;

pub use error::{CompileError, CompileResult};

/// Compile a `+`/`-` integer expression into Intel-syntax assembly.
pub fn generate_assembly(expr: &str) -> CompileResult<String> {
  let tokens = tokenizer::tokenize(expr)?;
  codegen::generate(tokens, expr)
}
