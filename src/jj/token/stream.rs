//! The token arena
//!
//! Tokens are stored by position, and every piece of code that needs to look ahead does so
//! by index. The last token is always [TokenKind::Eof].

use super::{Token, TokenKind};
use serde::Serialize;
use std::ops::Index;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenStream {
    tokens: Vec<Token>,
}

impl TokenStream {
    /// Wrap a token vector, appending an end-of-stream marker when it is missing
    pub fn from_tokens(mut tokens: Vec<Token>) -> Self {
        if !tokens.last().is_some_and(Token::is_eof) {
            let (line, column) = tokens
                .last()
                .map(|last| (last.end_line, last.end_column + 1))
                .unwrap_or((1, 1));
            tokens.push(Token::eof(line, column));
        }
        TokenStream { tokens }
    }

    /// The first primary token, or `None` when the stream holds nothing but the
    /// end-of-stream marker
    pub fn first(&self) -> Option<&Token> {
        self.tokens.first().filter(|token| !token.is_eof())
    }

    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// Kind of the token at `index`; past the end this is [TokenKind::Eof]
    pub fn kind(&self, index: usize) -> TokenKind {
        self.tokens.get(index).map(|token| token.kind).unwrap_or(TokenKind::Eof)
    }

    /// Number of tokens, end-of-stream marker included
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.first().is_none()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }
}

impl Index<usize> for TokenStream {
    type Output = Token;

    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenStream {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
