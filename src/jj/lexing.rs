//! Lexer
//!
//! Turns grammar source text into a [TokenStream].
//!
//! Structure:
//!     The raw tokenization is done through the logos lexer library (see [lexemes]). This
//!     module then walks the lexemes once and:
//!     - classifies words into keywords or identifiers,
//!     - computes 1-based line and column positions from byte offsets,
//!     - attaches line breaks, form feeds and comments as special tokens to the primary
//!       token that follows them, in source order,
//!     - closes the stream with an end-of-stream token holding the trailing specials.
//!
//!     Blanks (spaces and tabs) are skipped by the lexer itself. The formatter derives all
//!     horizontal layout from the token kinds, so nothing is lost by dropping them.
//!
//!     This is a lexer only: it knows nothing about the grammar structure and never
//!     rejects a file for being syntactically wrong, only for containing characters no
//!     token can start with (or an unterminated literal or comment).

pub mod lexemes;

use crate::jj::token::{Keyword, SpecialToken, Token, TokenKind, TokenStream};
use lexemes::Lexeme;
use logos::Logos;
use std::fmt;

/// Error that can occur during tokenization
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// No lexeme matches the input at this position
    UnexpectedInput {
        line: usize,
        column: usize,
        text: String,
    },
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexError::UnexpectedInput { line, column, text } => {
                write!(f, "unexpected input {text:?} at line {line}, column {column}")
            }
        }
    }
}

impl std::error::Error for LexError {}

/// Tokenize grammar source text into a token stream
pub fn tokenize(source: &str) -> Result<TokenStream, LexError> {
    let lines = LineIndex::new(source);
    let mut lexer = Lexeme::lexer(source);
    let mut tokens = Vec::new();
    let mut specials = Vec::new();

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let slice = lexer.slice();
        let (begin_line, begin_column) = lines.position(source, span.start);

        let lexeme = match result {
            Ok(lexeme) => lexeme,
            Err(()) => {
                return Err(LexError::UnexpectedInput {
                    line: begin_line,
                    column: begin_column,
                    text: slice.to_string(),
                })
            }
        };

        // The last char decides the end position; for line breaks that is the break itself.
        let last_char_start = span.start + slice.char_indices().last().map(|(i, _)| i).unwrap_or(0);
        let (end_line, end_column) = match lexeme {
            Lexeme::LineBreak => (begin_line, begin_column),
            _ => lines.position(source, last_char_start),
        };

        if let Some(kind) = lexeme.special_kind() {
            specials.push(SpecialToken::new(kind, slice, begin_line, end_line));
            continue;
        }

        tokens.push(Token {
            kind: classify(lexeme, slice),
            image: slice.to_string(),
            begin_line,
            begin_column,
            end_line,
            end_column,
            specials: std::mem::take(&mut specials),
        });
    }

    let (eof_line, eof_column) = lines.position(source, source.len());
    tokens.push(Token::eof(eof_line, eof_column).with_specials(specials));
    log::debug!("tokenized {} bytes into {} tokens", source.len(), tokens.len());
    Ok(TokenStream::from_tokens(tokens))
}

fn classify(lexeme: Lexeme, slice: &str) -> TokenKind {
    match lexeme {
        Lexeme::Word => Keyword::from_word(slice)
            .map(TokenKind::Keyword)
            .unwrap_or(TokenKind::Identifier),
        other => other.token_kind(),
    }
}

/// Byte offset of every line start, for offset to (line, column) conversion
struct LineIndex {
    starts: Vec<usize>,
}

impl LineIndex {
    fn new(source: &str) -> Self {
        let bytes = source.as_bytes();
        let mut starts = vec![0];
        let mut i = 0;
        while i < bytes.len() {
            match bytes[i] {
                b'\n' => starts.push(i + 1),
                b'\r' if bytes.get(i + 1) == Some(&b'\n') => {
                    starts.push(i + 2);
                    i += 1;
                }
                b'\r' => starts.push(i + 1),
                _ => {}
            }
            i += 1;
        }
        LineIndex { starts }
    }

    /// 1-based line and character column of a byte offset
    fn position(&self, source: &str, offset: usize) -> (usize, usize) {
        let line = match self.starts.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert - 1,
        };
        let start = self.starts[line];
        let column = source[start..offset].chars().count() + 1;
        (line + 1, column)
    }
}
