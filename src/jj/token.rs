//! Token types shared by the lexer, the formatter and the tooling.
//!
//! Token Layers
//!
//!     Primary Tokens:
//!         Everything the grammar itself is made of: identifiers, keywords, literals,
//!         punctuation and operators. See [kind](kind) for the complete list.
//!
//!     Special Tokens:
//!         Material between primary tokens that the grammar ignores: line breaks, form feeds
//!         and comments. Each primary token owns the specials that precede it, kept in source
//!         order, so walking them never needs a rewind. Plain blanks (spaces, tabs) are not
//!         kept at all since the formatter re-derives them.
//!
//!     End of Stream:
//!         Every [TokenStream] ends with exactly one [TokenKind::Eof] token. It has an empty
//!         image and collects the specials trailing the last real token.

pub mod keyword;
pub mod kind;
pub mod stream;

pub use keyword::Keyword;
pub use kind::TokenKind;
pub use stream::TokenStream;

use serde::Serialize;

/// Kinds of non-grammar material attached in front of a primary token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SpecialKind {
    /// `\n`, `\r\n` or a lone `\r`
    LineBreak,
    FormFeed,
    /// `// ...` up to, not including, the line terminator
    SingleLineComment,
    /// `/* ... */`
    MultiLineComment,
    /// `/** ... */`
    FormalComment,
}

impl SpecialKind {
    /// Line breaks and form feeds, the raw layout the formatter re-derives
    pub fn is_line_break(&self) -> bool {
        matches!(self, SpecialKind::LineBreak | SpecialKind::FormFeed)
    }

    pub fn is_comment(&self) -> bool {
        !self.is_line_break()
    }
}

/// A special token: raw inter-token material
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpecialToken {
    pub kind: SpecialKind,
    pub image: String,
    pub begin_line: usize,
    pub end_line: usize,
}

impl SpecialToken {
    pub fn new(kind: SpecialKind, image: impl Into<String>, begin_line: usize, end_line: usize) -> Self {
        SpecialToken {
            kind,
            image: image.into(),
            begin_line,
            end_line,
        }
    }
}

/// A primary token with its source position and preceding specials
///
/// Lines and columns are 1-based; columns count characters, not bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub image: String,
    pub begin_line: usize,
    pub begin_column: usize,
    pub end_line: usize,
    pub end_column: usize,
    pub specials: Vec<SpecialToken>,
}

impl Token {
    pub fn new(kind: TokenKind, image: impl Into<String>, begin_line: usize, begin_column: usize) -> Self {
        let image = image.into();
        let end_column = begin_column + image.chars().count().saturating_sub(1);
        Token {
            kind,
            image,
            begin_line,
            begin_column,
            end_line: begin_line,
            end_column,
            specials: Vec::new(),
        }
    }

    /// The end-of-stream marker, placed at the given position
    pub fn eof(line: usize, column: usize) -> Self {
        Token {
            kind: TokenKind::Eof,
            image: String::new(),
            begin_line: line,
            begin_column: column,
            end_line: line,
            end_column: column,
            specials: Vec::new(),
        }
    }

    pub fn with_specials(mut self, specials: Vec<SpecialToken>) -> Self {
        self.specials = specials;
        self
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}
