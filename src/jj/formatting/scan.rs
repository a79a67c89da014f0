//! Forward scans over the token arena
//!
//! The formatter decides some layouts only once it knows what a group contains: whether a
//! parenthesized expansion has alternatives, or whether a regular expression declaration
//! spans several choices. These helpers look ahead from an opening token without touching
//! the formatter state.

use crate::jj::token::{TokenKind, TokenStream};

/// Index of the `)` or `]` closing the group opened at `open`
///
/// Parens and brackets are counted together; the grammar is assumed well formed.
pub fn matching_close(tokens: &TokenStream, open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (index, token) in tokens.iter().enumerate().skip(open) {
        match token.kind {
            TokenKind::LParen | TokenKind::LBracket => depth += 1,
            TokenKind::RParen | TokenKind::RBracket => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(index);
                }
            }
            TokenKind::Eof => return None,
            _ => {}
        }
    }
    None
}

/// Index of the `>` closing the angle group that `from` sits in
///
/// `from` is either the `<` itself or a token inside the group. The scan gives up at
/// braces, semicolons and the end of stream, where an angle group can never extend.
pub fn matching_angle(tokens: &TokenStream, from: usize) -> Option<usize> {
    let mut depth: usize = if tokens.kind(from) == TokenKind::Lt { 0 } else { 1 };
    for (index, token) in tokens.iter().enumerate().skip(from) {
        match token.kind {
            TokenKind::Lt => depth += 1,
            TokenKind::Gt => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(index);
                }
            }
            TokenKind::LBrace | TokenKind::RBrace | TokenKind::Semicolon | TokenKind::Eof => {
                return None
            }
            _ => {}
        }
    }
    None
}

/// Whether the angle group opened at `open` declares a regular expression
///
/// Declarations carry a label and a `:` at their own level (`< ID : ... >`, `< #DIGIT :
/// ... >`); references (`<ID>`, `<EOF>`) and lexical state lists (`<DEFAULT, IN_X>`)
/// do not.
pub fn angle_is_declaration(tokens: &TokenStream, open: usize, close: usize) -> bool {
    let mut angles = 0usize;
    let mut parens = 0usize;
    for index in open + 1..close {
        match tokens.kind(index) {
            TokenKind::Lt => angles += 1,
            TokenKind::Gt => angles = angles.saturating_sub(1),
            TokenKind::LParen | TokenKind::LBracket => parens += 1,
            TokenKind::RParen | TokenKind::RBracket => parens = parens.saturating_sub(1),
            TokenKind::Colon if angles == 0 && parens == 0 => return true,
            _ => {}
        }
    }
    false
}

/// Whether the tokens strictly between `from` and `to` hold a choice (`|`) or an opening
/// paren, the marks of a regular expression that needs more than one line
pub fn has_choice_or_group(tokens: &TokenStream, from: usize, to: usize) -> bool {
    (from + 1..to).any(|index| matches!(tokens.kind(index), TokenKind::BitOr | TokenKind::LParen))
}

/// Closing index of the expansion unit opened at `open` when the unit holds alternatives
/// or nested units; `None` for a unit that fits on one line
///
/// Parens that follow a call-like token are argument lists, not units, both for `open`
/// itself (checked by the caller) and for the nested groups looked at here. Java blocks
/// inside the unit are skipped.
pub fn multi_choice(tokens: &TokenStream, open: usize) -> Option<usize> {
    let close = matching_close(tokens, open)?;
    let mut braces = 0usize;
    for index in open + 1..close {
        match tokens.kind(index) {
            TokenKind::LBrace => braces += 1,
            TokenKind::RBrace => braces = braces.saturating_sub(1),
            _ if braces > 0 => {}
            TokenKind::BitOr | TokenKind::LBracket => return Some(close),
            TokenKind::LParen if !tokens.kind(index - 1).is_call_like() => return Some(close),
            _ => {}
        }
    }
    None
}
