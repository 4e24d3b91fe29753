//! Lexical analysis: turns the raw input string into a vector of tokens.
//!
//! The scanner is intentionally tiny – it recognises exactly the three
//! token shapes the expression grammar needs: the `+` and `-` operators,
//! decimal integer literals, and the end-of-input marker. It walks the
//! input once, never backtracking, and elides whitespace as it goes.

use crate::error::{CompileError, CompileResult};

/// Kinds of tokens recognised by the front-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
  Op,
  Num,
  Eof,
}

/// Thin wrapper for lexical information needed by later stages.
#[derive(Debug, Clone)]
pub struct Token {
  pub kind: TokenKind,
  pub value: Option<i64>,
  pub loc: usize,
  pub len: usize,
}

impl Token {
  /// Convenience constructor to keep the `tokenize` loop readable.
  pub fn new(kind: TokenKind, loc: usize, len: usize, value: Option<i64>) -> Self {
    Self {
      kind,
      value,
      loc,
      len,
    }
  }
}

/// Lex the input into a flat vector of tokens terminated by an `Eof` marker.
pub fn tokenize(input: &str) -> CompileResult<Vec<Token>> {
  let mut tokens = Vec::new();
  let bytes = input.as_bytes();
  let mut i = 0;

  while i < bytes.len() {
    let c = bytes[i];
    if c.is_ascii_whitespace() {
      i += 1;
      continue;
    }

    if c.is_ascii_digit() {
      let start = i;
      i += 1;
      while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
      }
      let text = &input[start..i];
      // strtol-style silent truncation would be undefined here; an
      // out-of-range literal is reported instead.
      let value = text.parse::<i64>().map_err(|_| {
        CompileError::overflow_at(input, start, format!("number literal out of range: {text}"))
      })?;
      tokens.push(Token::new(TokenKind::Num, start, i - start, Some(value)));
      continue;
    }

    if c == b'+' || c == b'-' {
      tokens.push(Token::new(TokenKind::Op, i, 1, None));
      i += 1;
      continue;
    }

    let invalid_char = input[i..].chars().next().unwrap_or('\0');
    return Err(CompileError::lex_at(
      input,
      i,
      format!("invalid token: '{invalid_char}'"),
    ));
  }

  tokens.push(Token::new(TokenKind::Eof, input.len(), 0, None));
  Ok(tokens)
}

/// Return the slice from the source that produced this token.
pub fn token_text<'a>(token: &Token, source: &'a str) -> &'a str {
  let end = token.loc + token.len;
  &source[token.loc..end]
}

/// Human-friendly description used in diagnostics.
pub fn describe_token(token: Option<&Token>, source: &str) -> String {
  match token {
    Some(t) => match t.kind {
      TokenKind::Eof => "EOF".to_string(),
      _ => token_text(t, source).to_string(),
    },
    None => "EOF".to_string(),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::error::CompileError;

  fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
    tokens.iter().map(|t| t.kind).collect()
  }

  #[test]
  fn scans_numbers_and_operators_in_order() {
    let source = "5+20-4";
    let tokens = tokenize(source).unwrap();
    assert_eq!(
      kinds(&tokens),
      vec![
        TokenKind::Num,
        TokenKind::Op,
        TokenKind::Num,
        TokenKind::Op,
        TokenKind::Num,
        TokenKind::Eof,
      ]
    );
    assert_eq!(tokens[0].value, Some(5));
    assert_eq!(tokens[2].value, Some(20));
    assert_eq!(tokens[4].value, Some(4));
    assert_eq!(token_text(&tokens[1], source), "+");
    assert_eq!(token_text(&tokens[3], source), "-");
  }

  #[test]
  fn whitespace_is_fully_elided() {
    let spaced = tokenize("1 - 3 + 10").unwrap();
    let dense = tokenize("1-3+10").unwrap();
    assert_eq!(kinds(&spaced), kinds(&dense));
    let values = |tokens: &[Token]| tokens.iter().map(|t| t.value).collect::<Vec<_>>();
    assert_eq!(values(&spaced), values(&dense));
  }

  #[test]
  fn maximal_digit_run_is_one_token() {
    let tokens = tokenize("1234567890").unwrap();
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].value, Some(1_234_567_890));
    assert_eq!(tokens[0].len, 10);
  }

  #[test]
  fn empty_input_yields_lone_eof() {
    let tokens = tokenize("   ").unwrap();
    assert_eq!(kinds(&tokens), vec![TokenKind::Eof]);
    assert_eq!(tokens[0].loc, 3);
  }

  #[test]
  fn unrecognised_byte_is_a_lex_error() {
    let err = tokenize("1*2").unwrap_err();
    assert!(matches!(err, CompileError::Lex { .. }));
    assert_eq!(err.location(), 1);
  }

  #[test]
  fn oversized_literal_is_an_overflow_error() {
    let err = tokenize("2+99999999999999999999").unwrap_err();
    assert!(matches!(err, CompileError::Overflow { .. }));
    assert_eq!(err.location(), 2);
  }

  #[test]
  fn token_offsets_point_into_the_source() {
    let source = " 12 + 7";
    let tokens = tokenize(source).unwrap();
    assert_eq!(tokens[0].loc, 1);
    assert_eq!(tokens[1].loc, 4);
    assert_eq!(tokens[2].loc, 6);
    assert_eq!(tokens[3].loc, source.len());
  }
}
