//! Shared error utilities used across the compilation pipeline.
//!
//! Diagnostics are kept lightweight on purpose – these routines format
//! messages in a style reminiscent of chibicc, pointing at the offending
//! byte with a caret. Each variant corresponds to one failure class so
//! callers (and tests) can tell a scanner error from a cursor error.

use snafu::Snafu;

pub type CompileResult<T> = Result<T, CompileError>;

#[derive(Debug, Snafu)]
pub enum CompileError {
  /// The scanner hit a byte it cannot classify.
  #[snafu(display("{expr_line}\n{marker} {message}"))]
  Lex {
    expr_line: String,
    marker: String,
    message: String,
    loc: usize,
  },

  /// A cursor primitive found the wrong token kind or operator.
  #[snafu(display("{expr_line}\n{marker} {message}"))]
  Syntax {
    expr_line: String,
    marker: String,
    message: String,
    loc: usize,
  },

  /// A digit run does not fit the target integer width.
  #[snafu(display("{expr_line}\n{marker} {message}"))]
  Overflow {
    expr_line: String,
    marker: String,
    message: String,
    loc: usize,
  },
}

impl CompileError {
  pub fn lex_at(expr: &str, loc: usize, message: impl Into<String>) -> Self {
    let (expr_line, marker) = render_caret(expr, loc);
    Self::Lex {
      expr_line,
      marker,
      message: message.into(),
      loc,
    }
  }

  pub fn syntax_at(expr: &str, loc: usize, message: impl Into<String>) -> Self {
    let (expr_line, marker) = render_caret(expr, loc);
    Self::Syntax {
      expr_line,
      marker,
      message: message.into(),
      loc,
    }
  }

  pub fn overflow_at(expr: &str, loc: usize, message: impl Into<String>) -> Self {
    let (expr_line, marker) = render_caret(expr, loc);
    Self::Overflow {
      expr_line,
      marker,
      message: message.into(),
      loc,
    }
  }

  /// Byte offset into the source the diagnostic points at.
  pub fn location(&self) -> usize {
    match self {
      Self::Lex { loc, .. } | Self::Syntax { loc, .. } | Self::Overflow { loc, .. } => *loc,
    }
  }
}

/// Quote the source line and build a marker line whose caret sits under the
/// byte at `loc`.
fn render_caret(expr: &str, loc: usize) -> (String, String) {
  let expr_line = format!("'{expr}'");
  let safe_loc = loc.min(expr.len());
  let char_offset = expr[..safe_loc].chars().count() + 1; // account for opening quote
  let marker = format!("{}^", " ".repeat(char_offset));
  (expr_line, marker)
}
