//! Testing utilities
//!
//! Sample grammars
//!
//!     Tests that need a realistic grammar file should use one of the curated
//!     [GrammarSample]s instead of writing grammar text inline. The samples live in
//!     `docs/samples/` and cover the header sections, token sections with lexical states,
//!     JJTree annotations, lookahead constraints and embedded Java. They are compiled into
//!     the crate so tests never depend on the working directory.
//!
//! Token factories
//!
//!     [mk_token] and [mk_stream] build token streams by hand, for tests that exercise the
//!     formatter without going through the lexer.

use crate::jj::lexing::{tokenize, LexError};
use crate::jj::token::{SpecialKind, SpecialToken, Token, TokenKind, TokenStream};

/// Curated grammar files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrammarSample {
    /// JavaCC grammar with every header section, choices, quantifiers and a lookahead
    Calculator,
    /// JJTree grammar with node annotations
    Nodes,
    /// Lexical states, token manager declarations, `JAVACODE` and semantic lookahead
    LexerStates,
}

impl GrammarSample {
    pub const ALL: [GrammarSample; 3] = [
        GrammarSample::Calculator,
        GrammarSample::Nodes,
        GrammarSample::LexerStates,
    ];

    pub fn file_name(&self) -> &'static str {
        match self {
            GrammarSample::Calculator => "calculator.jj",
            GrammarSample::Nodes => "nodes.jjt",
            GrammarSample::LexerStates => "lexer_states.jj",
        }
    }

    pub fn source(&self) -> &'static str {
        match self {
            GrammarSample::Calculator => include_str!("../../docs/samples/calculator.jj"),
            GrammarSample::Nodes => include_str!("../../docs/samples/nodes.jjt"),
            GrammarSample::LexerStates => include_str!("../../docs/samples/lexer_states.jj"),
        }
    }

    pub fn tokens(&self) -> Result<TokenStream, LexError> {
        tokenize(self.source())
    }
}

/// Make a primary token without specials
pub fn mk_token(kind: TokenKind, image: &str, line: usize, column: usize) -> Token {
    Token::new(kind, image, line, column)
}

/// Make a line comment special on `line`
pub fn mk_line_comment(image: &str, line: usize) -> SpecialToken {
    SpecialToken::new(SpecialKind::SingleLineComment, image, line, line)
}

/// Make a stream from `(kind, image, line)` triples; columns follow from the images,
/// separated by one blank
pub fn mk_stream(specs: &[(TokenKind, &str, usize)]) -> TokenStream {
    let mut tokens = Vec::with_capacity(specs.len());
    let mut column = 1;
    let mut current_line = 0;
    for &(kind, image, line) in specs {
        if line != current_line {
            current_line = line;
            column = 1;
        }
        tokens.push(mk_token(kind, image, line, column));
        column += image.chars().count() + 1;
    }
    TokenStream::from_tokens(tokens)
}
