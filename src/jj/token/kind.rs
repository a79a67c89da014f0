//! Lexical categories of primary tokens

use super::keyword::Keyword;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    Identifier,
    Keyword(Keyword),

    // Literals
    IntegerLiteral,
    FloatingLiteral,
    CharacterLiteral,
    StringLiteral,

    // Separators
    LBrace,
    RBrace,
    LParen,
    RParen,
    LBracket,
    RBracket,
    Semicolon,
    Comma,
    Dot,
    At,
    Ellipsis,
    DoubleColon,
    /// `#`, JJTree node annotations and private regular expression labels
    Hash,

    // Operators
    Assign,
    Lt,
    Gt,
    Bang,
    Tilde,
    Question,
    Colon,
    Eq,
    Le,
    Ge,
    Ne,
    OrOr,
    AndAnd,
    Incr,
    Decr,
    Plus,
    Minus,
    Star,
    Slash,
    BitAnd,
    BitOr,
    Xor,
    Rem,
    LShift,
    RShift,
    URShift,
    Arrow,
    /// `+=`, `-=`, `<<=`, `>>>=` and the rest of the compound assignments
    CompoundAssign,

    Eof,
}

impl TokenKind {
    /// Expansion quantifiers, plus the `>` that can close a regular expression right after
    /// a parenthesized unit
    pub fn is_quantifier(&self) -> bool {
        matches!(self, TokenKind::Star | TokenKind::Question | TokenKind::Plus | TokenKind::Gt)
    }

    /// Tokens after which `(` opens an argument list rather than an expansion unit
    pub fn is_call_like(&self) -> bool {
        match self {
            TokenKind::Identifier => true,
            TokenKind::Keyword(keyword) => keyword.is_call_like(),
            _ => false,
        }
    }

    pub fn is_opening(&self) -> bool {
        matches!(self, TokenKind::LParen | TokenKind::LBracket)
    }

    pub fn is_closing(&self) -> bool {
        matches!(self, TokenKind::RParen | TokenKind::RBracket)
    }

    pub fn keyword(&self) -> Option<Keyword> {
        match self {
            TokenKind::Keyword(keyword) => Some(*keyword),
            _ => None,
        }
    }
}
