//! Grammar formatter
//!
//! Re-derives all whitespace of a grammar file from its token stream in a single forward
//! pass. Spaces, line breaks and indentation in the source are not kept, with two
//! exceptions: comments are copied verbatim, and a line break in the source survives as a
//! single line break when no rule asks for one already.
//!
//! Structure:
//!     - [context]: where the current token sits (header or body, lookahead constraints,
//!       for headers, JJTree node annotations, brace depth, grammar blocks, angle groups)
//!     - [layout]: the line break, indent and spacing rules for a token pair
//!     - [output]: line range gating of the result
//!     - [session]: the pass itself, tying the above together
//!     - [scan]: forward scans used by context and layout
//!
//! Line Ranges
//!
//!     A caller replacing part of a document asks for a [LineRange]. The pass still starts
//!     at the first token so the context is right when the range begins; only the output
//!     is restricted to tokens and comments lying entirely inside the range.

mod context;
mod layout;
mod output;
pub mod scan;
mod session;

use crate::jj::lexing::{tokenize, LexError};
use crate::jj::token::TokenStream;
use session::Session;
use std::fmt;

/// Options of a format call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    /// Written for every line break
    pub line_delimiter: String,
    /// One level of indentation
    pub indent_unit: String,
}

impl FormatOptions {
    pub fn new(line_delimiter: impl Into<String>, indent_unit: impl Into<String>) -> Self {
        FormatOptions {
            line_delimiter: line_delimiter.into(),
            indent_unit: indent_unit.into(),
        }
    }
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions::new("\n", "\t")
    }
}

/// An inclusive, 1-based range of source lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRange {
    pub first: usize,
    pub last: usize,
}

impl LineRange {
    /// `first` is raised to 1 and `last` to `first` when out of order
    pub fn new(first: usize, last: usize) -> Self {
        let first = first.max(1);
        LineRange {
            first,
            last: last.max(first),
        }
    }

    /// The whole document
    pub fn all() -> Self {
        LineRange {
            first: 1,
            last: usize::MAX,
        }
    }

    /// Whether the span `begin..=end` lies inside the range
    pub fn contains(&self, begin: usize, end: usize) -> bool {
        begin >= self.first && end <= self.last
    }
}

impl Default for LineRange {
    fn default() -> Self {
        Self::all()
    }
}

/// Error that can occur during formatting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The stream holds no token at all
    NoFirstToken,
    /// The source could not be tokenized
    Lex(LexError),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::NoFirstToken => write!(f, "nothing to format: no first token"),
            FormatError::Lex(err) => write!(f, "cannot tokenize: {err}"),
        }
    }
}

impl std::error::Error for FormatError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FormatError::NoFirstToken => None,
            FormatError::Lex(err) => Some(err),
        }
    }
}

impl From<LexError> for FormatError {
    fn from(err: LexError) -> Self {
        FormatError::Lex(err)
    }
}

/// Format a token stream, returning the text for the lines in `range`
pub fn format(
    stream: &TokenStream,
    options: &FormatOptions,
    range: LineRange,
) -> Result<String, FormatError> {
    if stream.first().is_none() {
        return Err(FormatError::NoFirstToken);
    }
    log::debug!(
        "formatting {} tokens, lines {}..={}",
        stream.len(),
        range.first,
        range.last
    );
    Ok(Session::new(stream, options, range).run())
}

/// Tokenize and format grammar source text
pub fn format_source(
    source: &str,
    options: &FormatOptions,
    range: LineRange,
) -> Result<String, FormatError> {
    let stream = tokenize(source)?;
    format(&stream, options, range)
}
