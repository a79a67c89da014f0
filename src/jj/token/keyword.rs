//! Reserved words of grammar files
//!
//! A grammar file mixes JavaCC's own reserved words with embedded Java, so both sets are
//! recognized. The lexer matches every word as an identifier first and then looks it up
//! here.

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Keyword {
    // JavaCC / JJTree
    Options,
    Lookahead,
    IgnoreCase,
    ParserBegin,
    ParserEnd,
    Javacode,
    Token,
    SpecialToken,
    More,
    Skip,
    TokenMgrDecls,
    Eof,

    // Java
    Abstract,
    Assert,
    Boolean,
    Break,
    Byte,
    Case,
    Catch,
    Char,
    Class,
    Const,
    Continue,
    Default,
    Do,
    Double,
    Else,
    Enum,
    Extends,
    False,
    Final,
    Finally,
    Float,
    For,
    Goto,
    If,
    Implements,
    Import,
    Instanceof,
    Int,
    Interface,
    Long,
    Native,
    New,
    Null,
    Package,
    Private,
    Protected,
    Public,
    Return,
    Short,
    Static,
    Strictfp,
    Super,
    Switch,
    Synchronized,
    This,
    Throw,
    Throws,
    Transient,
    True,
    Try,
    Void,
    Volatile,
    While,
}

const KEYWORDS: &[(&str, Keyword)] = &[
    ("options", Keyword::Options),
    ("LOOKAHEAD", Keyword::Lookahead),
    ("IGNORE_CASE", Keyword::IgnoreCase),
    ("PARSER_BEGIN", Keyword::ParserBegin),
    ("PARSER_END", Keyword::ParserEnd),
    ("JAVACODE", Keyword::Javacode),
    ("TOKEN", Keyword::Token),
    ("SPECIAL_TOKEN", Keyword::SpecialToken),
    ("MORE", Keyword::More),
    ("SKIP", Keyword::Skip),
    ("TOKEN_MGR_DECLS", Keyword::TokenMgrDecls),
    ("EOF", Keyword::Eof),
    ("abstract", Keyword::Abstract),
    ("assert", Keyword::Assert),
    ("boolean", Keyword::Boolean),
    ("break", Keyword::Break),
    ("byte", Keyword::Byte),
    ("case", Keyword::Case),
    ("catch", Keyword::Catch),
    ("char", Keyword::Char),
    ("class", Keyword::Class),
    ("const", Keyword::Const),
    ("continue", Keyword::Continue),
    ("default", Keyword::Default),
    ("do", Keyword::Do),
    ("double", Keyword::Double),
    ("else", Keyword::Else),
    ("enum", Keyword::Enum),
    ("extends", Keyword::Extends),
    ("false", Keyword::False),
    ("final", Keyword::Final),
    ("finally", Keyword::Finally),
    ("float", Keyword::Float),
    ("for", Keyword::For),
    ("goto", Keyword::Goto),
    ("if", Keyword::If),
    ("implements", Keyword::Implements),
    ("import", Keyword::Import),
    ("instanceof", Keyword::Instanceof),
    ("int", Keyword::Int),
    ("interface", Keyword::Interface),
    ("long", Keyword::Long),
    ("native", Keyword::Native),
    ("new", Keyword::New),
    ("null", Keyword::Null),
    ("package", Keyword::Package),
    ("private", Keyword::Private),
    ("protected", Keyword::Protected),
    ("public", Keyword::Public),
    ("return", Keyword::Return),
    ("short", Keyword::Short),
    ("static", Keyword::Static),
    ("strictfp", Keyword::Strictfp),
    ("super", Keyword::Super),
    ("switch", Keyword::Switch),
    ("synchronized", Keyword::Synchronized),
    ("this", Keyword::This),
    ("throw", Keyword::Throw),
    ("throws", Keyword::Throws),
    ("transient", Keyword::Transient),
    ("true", Keyword::True),
    ("try", Keyword::Try),
    ("void", Keyword::Void),
    ("volatile", Keyword::Volatile),
    ("while", Keyword::While),
];

static BY_WORD: Lazy<HashMap<&'static str, Keyword>> =
    Lazy::new(|| KEYWORDS.iter().copied().collect());

impl Keyword {
    /// Look up a word. Matching is case sensitive, as in JavaCC.
    pub fn from_word(word: &str) -> Option<Keyword> {
        BY_WORD.get(word).copied()
    }

    /// Words that open a Java member declaration; they get a blank line in front of them
    /// when they follow the end of a previous statement or block.
    pub fn is_declaration(&self) -> bool {
        matches!(
            self,
            Keyword::Class
                | Keyword::Public
                | Keyword::Private
                | Keyword::Protected
                | Keyword::Static
                | Keyword::Void
                | Keyword::Synchronized
                | Keyword::Abstract
        )
    }

    /// Keywords that take a parenthesized argument the way a method call does
    pub fn is_call_like(&self) -> bool {
        matches!(
            self,
            Keyword::Lookahead | Keyword::ParserBegin | Keyword::ParserEnd | Keyword::This | Keyword::Super
        )
    }

    /// Java primitive types, which can be followed by array brackets (`int[]`)
    pub fn is_primitive(&self) -> bool {
        matches!(
            self,
            Keyword::Boolean
                | Keyword::Byte
                | Keyword::Char
                | Keyword::Short
                | Keyword::Int
                | Keyword::Long
                | Keyword::Float
                | Keyword::Double
        )
    }

    /// Keywords that open a regular expression section in the grammar body
    pub fn is_regex_section(&self) -> bool {
        matches!(
            self,
            Keyword::Token | Keyword::SpecialToken | Keyword::Skip | Keyword::More
        )
    }

    /// Keywords that open a section whose block is plain Java
    pub fn is_java_section(&self) -> bool {
        matches!(self, Keyword::TokenMgrDecls | Keyword::Javacode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_word_is_case_sensitive() {
        assert_eq!(Keyword::from_word("LOOKAHEAD"), Some(Keyword::Lookahead));
        assert_eq!(Keyword::from_word("lookahead"), None);
        assert_eq!(Keyword::from_word("options"), Some(Keyword::Options));
        assert_eq!(Keyword::from_word("OPTIONS"), None);
    }

    #[test]
    fn test_every_keyword_is_found() {
        for (word, keyword) in KEYWORDS {
            assert_eq!(Keyword::from_word(word), Some(*keyword));
        }
    }

    #[test]
    fn test_declaration_keywords() {
        assert!(Keyword::Public.is_declaration());
        assert!(Keyword::Void.is_declaration());
        assert!(!Keyword::Final.is_declaration());
        assert!(!Keyword::Lookahead.is_declaration());
    }

    #[test]
    fn test_primitive_keywords() {
        assert!(Keyword::Int.is_primitive());
        assert!(Keyword::Boolean.is_primitive());
        assert!(!Keyword::Void.is_primitive());
        assert!(!Keyword::Class.is_primitive());
    }
}
