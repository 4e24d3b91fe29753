//! Fused recognition and emission over `NUMBER (('+'|'-') NUMBER)*`.
//!
//! There is no AST: the grammar is a flat left-associative chain, so the
//! driver walks the cursor and appends one Intel-syntax instruction per
//! recognised construct. `rax` is the accumulator; instruction order must
//! mirror token order, since each `add`/`sub` depends on the value the
//! previous instruction left behind. The whole program is built in memory
//! and returned only on success, so a failing run emits nothing.

use crate::error::CompileResult;
use crate::stream::TokenStream;
use crate::tokenizer::Token;

/// Emit an assembly program computing the expression, returning it whole.
pub fn generate(tokens: Vec<Token>, source: &str) -> CompileResult<String> {
  let mut stream = TokenStream::new(tokens, source);

  let mut asm = String::new();
  asm.push_str(".intel_syntax noprefix\n");
  asm.push_str(".global main\n");
  asm.push_str("main:\n");

  let first = stream.expect_number()?;
  asm.push_str(&format!("  mov rax, {first}\n"));

  while !stream.at_eof() {
    if stream.consume('+') {
      let value = stream.expect_number()?;
      asm.push_str(&format!("  add rax, {value}\n"));
      continue;
    }

    // by grammar the only other valid token here is '-'
    stream.expect('-')?;
    let value = stream.expect_number()?;
    asm.push_str(&format!("  sub rax, {value}\n"));
  }

  asm.push_str("  ret\n");
  Ok(asm)
}
