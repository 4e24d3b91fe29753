//! Cursor over the token vector.
//!
//! `TokenStream` is the only way the rest of the crate reads tokens: it
//! owns the vector produced by the tokenizer, borrows the source string for
//! diagnostics, and keeps a single forward-moving position. The four
//! primitives mirror the classic chibicc quartet: `consume`, `expect`,
//! `expect_number` and `at_eof`.

use crate::error::{CompileError, CompileResult};
use crate::tokenizer::{Token, TokenKind, describe_token, token_text};

pub struct TokenStream<'a> {
  tokens: Vec<Token>,
  source: &'a str,
  pos: usize,
}

impl<'a> TokenStream<'a> {
  /// Take ownership of the token stream; callers advance `pos` only through
  /// the primitives below.
  pub fn new(tokens: Vec<Token>, source: &'a str) -> Self {
    Self {
      tokens,
      source,
      pos: 0,
    }
  }

  fn peek(&self) -> Option<&Token> {
    self.tokens.get(self.pos)
  }

  /// Consume the current token if it is the given operator. Returns false
  /// without moving the cursor otherwise.
  pub fn consume(&mut self, op: char) -> bool {
    if let Some(token) = self.peek()
      && token.kind == TokenKind::Op
      && token.len == 1
      && token_text(token, self.source).starts_with(op)
    {
      self.pos += 1;
      return true;
    }
    false
  }

  /// Like `consume`, but a mismatch is a syntax error naming the operator
  /// we were looking for.
  pub fn expect(&mut self, op: char) -> CompileResult<()> {
    if self.consume(op) {
      Ok(())
    } else {
      let (loc, got) = match self.peek() {
        Some(token) => (token.loc, describe_token(Some(token), self.source)),
        None => (self.source.len(), "EOF".to_string()),
      };
      Err(CompileError::syntax_at(
        self.source,
        loc,
        format!("expected '{op}', but got \"{got}\""),
      ))
    }
  }

  /// Return the current numeric literal's value and advance, or report a
  /// syntax error at the cursor.
  pub fn expect_number(&mut self) -> CompileResult<i64> {
    if let Some(token) = self.peek()
      && token.kind == TokenKind::Num
    {
      let value = token.value.ok_or_else(|| {
        CompileError::syntax_at(
          self.source,
          token.loc,
          "internal error: numeric token missing value",
        )
      })?;
      self.pos += 1;
      return Ok(value);
    }

    let (loc, got) = match self.peek() {
      Some(token) => (token.loc, describe_token(Some(token), self.source)),
      None => (self.source.len(), "EOF".to_string()),
    };
    Err(CompileError::syntax_at(
      self.source,
      loc,
      format!("expected a number, but got \"{got}\""),
    ))
  }

  /// True iff the cursor sits on the end-of-input marker. Never advances.
  pub fn at_eof(&self) -> bool {
    matches!(self.peek().map(|token| token.kind), Some(TokenKind::Eof))
  }
}
