//! Lexeme definitions for grammar files
//!
//! The lexemes are defined using the logos derive macro. Words are matched as one lexeme
//! and told apart from keywords afterwards, which keeps the keyword table in one place
//! ([Keyword](crate::jj::token::Keyword)).
use crate::jj::token::{SpecialKind, TokenKind};
use logos::Logos;

/// Everything the grammar lexer can recognize, primary and special
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t]+")]
pub enum Lexeme {
    // Specials
    #[regex(r"\r\n|\n|\r")]
    LineBreak,
    #[token("\x0C")]
    FormFeed,
    #[regex(r"//[^\r\n]*")]
    SingleLineComment,
    /// `/* ... */` or `/** ... */`, told apart by [block_comment]
    #[token("/*", block_comment)]
    BlockComment(SpecialKind),

    // Words and literals
    #[regex(r"[\p{L}_$][\p{L}\p{N}_$]*")]
    Word,
    #[regex(r"[0-9][0-9_]*[lL]?")]
    #[regex(r"0[xX][0-9a-fA-F_]+[lL]?")]
    #[regex(r"0[bB][01_]+[lL]?")]
    IntegerLiteral,
    #[regex(r"[0-9][0-9_]*\.[0-9_]*([eE][+-]?[0-9]+)?[fFdD]?")]
    #[regex(r"\.[0-9][0-9_]*([eE][+-]?[0-9]+)?[fFdD]?")]
    #[regex(r"[0-9][0-9_]*[eE][+-]?[0-9]+[fFdD]?")]
    #[regex(r"[0-9][0-9_]*[fFdD]")]
    FloatingLiteral,
    #[regex(r"'([^'\\\r\n]|\\[^\r\n'][0-9a-fA-F]*|\\')'")]
    CharacterLiteral,
    #[regex(r#""([^"\\\r\n]|\\[^\r\n])*""#)]
    StringLiteral,

    // Separators
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(";")]
    Semicolon,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token("@")]
    At,
    #[token("...")]
    Ellipsis,
    #[token("::")]
    DoubleColon,
    #[token("#")]
    Hash,

    // Operators
    #[token("=")]
    Assign,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("!")]
    Bang,
    #[token("~")]
    Tilde,
    #[token("?")]
    Question,
    #[token(":")]
    Colon,
    #[token("==")]
    Eq,
    #[token("<=")]
    Le,
    #[token(">=")]
    Ge,
    #[token("!=")]
    Ne,
    #[token("||")]
    OrOr,
    #[token("&&")]
    AndAnd,
    #[token("++")]
    Incr,
    #[token("--")]
    Decr,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("&")]
    BitAnd,
    #[token("|")]
    BitOr,
    #[token("^")]
    Xor,
    #[token("%")]
    Rem,
    #[token("<<")]
    LShift,
    #[token(">>")]
    RShift,
    #[token(">>>")]
    URShift,
    #[token("->")]
    Arrow,
    #[token("+=")]
    #[token("-=")]
    #[token("*=")]
    #[token("/=")]
    #[token("&=")]
    #[token("|=")]
    #[token("^=")]
    #[token("%=")]
    #[token("<<=")]
    #[token(">>=")]
    #[token(">>>=")]
    CompoundAssign,
}

impl Lexeme {
    /// The special kind of this lexeme, `None` for primary lexemes
    pub fn special_kind(&self) -> Option<SpecialKind> {
        match self {
            Lexeme::LineBreak => Some(SpecialKind::LineBreak),
            Lexeme::FormFeed => Some(SpecialKind::FormFeed),
            Lexeme::SingleLineComment => Some(SpecialKind::SingleLineComment),
            Lexeme::BlockComment(kind) => Some(*kind),
            _ => None,
        }
    }

    /// Token kind of a primary lexeme. Words map to [TokenKind::Identifier]; keyword
    /// classification happens in the caller, which has the matched text.
    pub fn token_kind(&self) -> TokenKind {
        match self {
            Lexeme::Word => TokenKind::Identifier,
            Lexeme::IntegerLiteral => TokenKind::IntegerLiteral,
            Lexeme::FloatingLiteral => TokenKind::FloatingLiteral,
            Lexeme::CharacterLiteral => TokenKind::CharacterLiteral,
            Lexeme::StringLiteral => TokenKind::StringLiteral,
            Lexeme::LBrace => TokenKind::LBrace,
            Lexeme::RBrace => TokenKind::RBrace,
            Lexeme::LParen => TokenKind::LParen,
            Lexeme::RParen => TokenKind::RParen,
            Lexeme::LBracket => TokenKind::LBracket,
            Lexeme::RBracket => TokenKind::RBracket,
            Lexeme::Semicolon => TokenKind::Semicolon,
            Lexeme::Comma => TokenKind::Comma,
            Lexeme::Dot => TokenKind::Dot,
            Lexeme::At => TokenKind::At,
            Lexeme::Ellipsis => TokenKind::Ellipsis,
            Lexeme::DoubleColon => TokenKind::DoubleColon,
            Lexeme::Hash => TokenKind::Hash,
            Lexeme::Assign => TokenKind::Assign,
            Lexeme::Lt => TokenKind::Lt,
            Lexeme::Gt => TokenKind::Gt,
            Lexeme::Bang => TokenKind::Bang,
            Lexeme::Tilde => TokenKind::Tilde,
            Lexeme::Question => TokenKind::Question,
            Lexeme::Colon => TokenKind::Colon,
            Lexeme::Eq => TokenKind::Eq,
            Lexeme::Le => TokenKind::Le,
            Lexeme::Ge => TokenKind::Ge,
            Lexeme::Ne => TokenKind::Ne,
            Lexeme::OrOr => TokenKind::OrOr,
            Lexeme::AndAnd => TokenKind::AndAnd,
            Lexeme::Incr => TokenKind::Incr,
            Lexeme::Decr => TokenKind::Decr,
            Lexeme::Plus => TokenKind::Plus,
            Lexeme::Minus => TokenKind::Minus,
            Lexeme::Star => TokenKind::Star,
            Lexeme::Slash => TokenKind::Slash,
            Lexeme::BitAnd => TokenKind::BitAnd,
            Lexeme::BitOr => TokenKind::BitOr,
            Lexeme::Xor => TokenKind::Xor,
            Lexeme::Rem => TokenKind::Rem,
            Lexeme::LShift => TokenKind::LShift,
            Lexeme::RShift => TokenKind::RShift,
            Lexeme::URShift => TokenKind::URShift,
            Lexeme::Arrow => TokenKind::Arrow,
            Lexeme::CompoundAssign => TokenKind::CompoundAssign,
            // Specials never reach the token stream as primary tokens
            Lexeme::LineBreak
            | Lexeme::FormFeed
            | Lexeme::SingleLineComment
            | Lexeme::BlockComment(_) => TokenKind::Eof,
        }
    }
}

/// Scan to the `*/` closing a block comment whose `/*` was just matched
///
/// `/**` starts a documentation comment, except for the empty comment `/**/`. An
/// unterminated comment is a lexing error.
fn block_comment(lex: &mut logos::Lexer<Lexeme>) -> Option<SpecialKind> {
    let rest = lex.remainder();
    let end = rest.find("*/")?;
    lex.bump(end + 2);
    if rest.starts_with('*') && end > 0 {
        Some(SpecialKind::FormalComment)
    } else {
        Some(SpecialKind::MultiLineComment)
    }
}
