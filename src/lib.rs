//! # jjformat
//!
//! A formatter for JavaCC, JJTree and JTB grammar files.
//!
//! File Layout
//!
//! src/jj
//!   ├── token        Token kinds, keywords and the token arena consumed by the formatter
//!   ├── lexing       Source text to token stream (logos based)
//!   ├── formatting   The token stream reformatter
//!   └── testing      Sample grammars and stream factories shared by the tests
//!
//! The formatter only needs a [`TokenStream`](jj::token::TokenStream). Callers that already
//! own a tokenizer can build one directly; everybody else goes through
//! [`format_source`](jj::formatting::format_source).

pub mod jj;

pub use jj::formatting::{format, format_source, FormatError, FormatOptions, LineRange};
pub use jj::lexing::{tokenize, LexError};
pub use jj::token::{Keyword, SpecialKind, SpecialToken, Token, TokenKind, TokenStream};
