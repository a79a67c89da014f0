//! Gap decisions
//!
//!     After every primary token the formatter decides what goes between it and its
//!     successor: a number of line breaks (0, 1 or 2), an indent change, and whether the
//!     two share a line with or without a space. [Layout::decide] makes that decision from
//!     the token pair and the [Context] that already accounts for the current token.
//!
//! Rule Groups
//!
//!     - deferred requests: `PARSER_BEGIN(...)` and `PARSER_END(...)` ask for line breaks
//!       that only apply once their closing `)` is reached.
//!     - general rules: braces, semicolons and declaration starts. They apply everywhere
//!       except inside a lookahead constraint.
//!     - grammar rules: production and section headers, multi-line regular expressions,
//!       expansion units with alternatives, choices and closers. They apply in grammar
//!       context only.
//!     - spacing: decides space or no space when no line break is wanted.
//!
//!     Line break counts from different rules merge by maximum. Indent changes add up.
//!
//! Closers
//!
//!     A group laid out over several lines (a multi-choice unit, or a regular expression
//!     declaration with choices) records the index of its closing token. The closer gets
//!     its own line at the outer indent, and the line after it is broken too, except that a
//!     quantifier directly behind it stays attached and the break moves past it.

use super::context::Context;
use super::scan;
use crate::jj::lexing::lexemes::Lexeme;
use crate::jj::token::{Keyword, TokenKind, TokenStream};
use logos::Logos;

/// What separates a token from its successor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Gap {
    pub newlines: usize,
    pub indent: i32,
    pub space: bool,
}

impl Gap {
    fn newlines(&mut self, count: usize) {
        self.newlines = self.newlines.max(count);
    }
}

/// A line break request waiting for the `)` at `paren_depth`
#[derive(Debug, Clone, Copy)]
struct Deferred {
    newlines: usize,
    paren_depth: usize,
}

/// Rule state carried from one gap decision to the next
#[derive(Debug, Default)]
pub struct Layout {
    closers: Vec<usize>,
    closed: Option<usize>,
    postponed: bool,
    deferred: Option<Deferred>,
}

impl Layout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decide the gap between the token at `index` and its successor
    pub fn decide(&mut self, tokens: &TokenStream, index: usize, context: &Context) -> Gap {
        let mut gap = Gap::default();
        self.deferred_request(tokens, index, context, &mut gap);

        if !context.in_lookahead() {
            general_rules(tokens, index, context, &mut gap);
            self.quantifier_rules(tokens, index, &mut gap);
            if context.in_grammar() {
                self.grammar_rules(tokens, index, context, &mut gap);
            }
            self.closer_rules(index, &mut gap);
        }

        gap.space = gap.newlines == 0 && spaced(tokens, index, context);
        log::trace!("gap after {:?} at {}: {:?}", tokens.kind(index), index, gap);
        gap
    }

    fn deferred_request(&mut self, tokens: &TokenStream, index: usize, context: &Context, gap: &mut Gap) {
        match tokens.kind(index) {
            TokenKind::Keyword(Keyword::ParserBegin) => {
                self.deferred = Some(Deferred {
                    newlines: 1,
                    paren_depth: context.paren_depth,
                })
            }
            TokenKind::Keyword(Keyword::ParserEnd) => {
                self.deferred = Some(Deferred {
                    newlines: 2,
                    paren_depth: context.paren_depth,
                })
            }
            TokenKind::RParen => {
                if let Some(deferred) = self.deferred {
                    if deferred.paren_depth == context.paren_depth {
                        gap.newlines(deferred.newlines);
                        self.deferred = None;
                    }
                }
            }
            _ => {}
        }
    }

    /// Line breaks behind a multi-line unit, held back over a directly following
    /// quantifier
    fn quantifier_rules(&mut self, tokens: &TokenStream, index: usize, gap: &mut Gap) {
        let current = tokens.kind(index);
        let next = tokens.kind(index + 1);

        if std::mem::take(&mut self.postponed) && current.is_quantifier() {
            gap.newlines(1);
        }

        if self.closed == Some(index) {
            self.closed = None;
            if current.is_closing() {
                if next.is_quantifier() {
                    self.postponed = true;
                } else {
                    gap.newlines(1);
                }
            }
        }
    }

    fn grammar_rules(&mut self, tokens: &TokenStream, index: usize, context: &Context, gap: &mut Gap) {
        let current = tokens.kind(index);
        let next = tokens.kind(index + 1);
        let previous = index.checked_sub(1).map(|i| tokens.kind(i)).unwrap_or(TokenKind::Eof);

        if current == TokenKind::Colon {
            // production and section headers
            if context.brace_depth == 0 {
                gap.newlines(1);
            }
            // a regular expression declaration with choices or groups
            if let Some(angle) = context.top_angle() {
                if angle.declaration && angle.paren_depth == context.paren_depth {
                    if let Some(close) = scan::matching_angle(tokens, index) {
                        if scan::has_choice_or_group(tokens, index, close) {
                            gap.newlines(1);
                            gap.indent += 1;
                            self.closers.push(close);
                        }
                    }
                }
            }
        }

        if next.is_opening()
            && current != TokenKind::BitOr
            && !current.is_call_like()
            && scan::multi_choice(tokens, index + 1).is_some()
        {
            gap.newlines(1);
        }

        if current.is_opening() && !previous.is_call_like() {
            if let Some(close) = scan::multi_choice(tokens, index) {
                gap.newlines(1);
                gap.indent += 1;
                self.closers.push(close);
            }
        }

        if next == TokenKind::BitOr {
            gap.newlines(1);
            gap.indent -= 1;
        }
        if current == TokenKind::BitOr {
            gap.indent += 1;
        }
    }

    fn closer_rules(&mut self, index: usize, gap: &mut Gap) {
        let next = index + 1;
        while self.closers.last().is_some_and(|&close| close < next) {
            self.closers.pop();
        }
        if self.closers.last() == Some(&next) {
            self.closers.pop();
            gap.newlines(1);
            gap.indent -= 1;
            self.closed = Some(next);
        }
    }
}

fn general_rules(tokens: &TokenStream, index: usize, context: &Context, gap: &mut Gap) {
    use TokenKind::*;

    let current = tokens.kind(index);
    let next = tokens.kind(index + 1);

    if matches!(current, Semicolon | RBrace) && next.keyword().is_some_and(|k| k.is_declaration()) {
        gap.newlines(2);
    }

    if current == LBrace && next != RBrace {
        gap.newlines(1);
        gap.indent += 1;
    }

    if next == RBrace && current != LBrace {
        gap.newlines(1);
        gap.indent -= 1;
    }

    if current == RBrace && !matches!(next, Semicolon | Comma | RParen | Eof) {
        if context.brace_depth == 0 && next != LBrace {
            gap.newlines(2);
        } else {
            gap.newlines(1);
        }
    }

    if current == Semicolon && !context.in_for_header() {
        gap.newlines(1);
    }

    if context.body && next == LBrace && !matches!(current, LBrace | Assign | Comma | LParen) {
        gap.newlines(1);
    }
}

/// Whether a token and its successor on the same line are separated by a space
pub fn spaced(tokens: &TokenStream, index: usize, context: &Context) -> bool {
    if !joined(tokens, index, context) {
        return true;
    }
    match (tokens.get(index), tokens.get(index + 1)) {
        (Some(current), Some(next)) => !splits_cleanly(&current.image, &next.image),
        _ => true,
    }
}

fn joined(tokens: &TokenStream, index: usize, context: &Context) -> bool {
    use TokenKind::*;

    let current = tokens.kind(index);
    let next = tokens.kind(index + 1);
    let grammar = context.in_grammar();

    // three joined dots would lex as `...`
    if current == Dot && next == Dot {
        return false;
    }
    if matches!((current, next), (LBrace, RBrace) | (LBracket, RBracket)) {
        return true;
    }
    if matches!(current, LParen | Dot | Bang | Tilde | At) {
        return true;
    }
    if matches!(next, RParen | Semicolon | Comma | Dot) {
        return true;
    }
    if !grammar && (current == LBracket || next == RBracket) {
        return true;
    }
    if (matches!(current, Incr | Decr) && next == Identifier) || (current == Identifier && matches!(next, Incr | Decr)) {
        return true;
    }
    if next == LParen && current.is_call_like() {
        return true;
    }
    if next == LBracket {
        let typed = current == Identifier || current.keyword().is_some_and(|k| k.is_primitive());
        if typed || (!grammar && matches!(current, RParen | RBracket)) {
            return true;
        }
    }

    if grammar {
        if matches!(current, Hash | Xor) {
            return true;
        }
        if current.is_closing() && matches!(next, Star | Question | Plus) {
            return true;
        }
        if context.in_angle() && (current == Minus || next == Minus) {
            return true;
        }
        if let Some(angle) = context.top_angle() {
            if !angle.declaration {
                if current == Lt && angle.open == index {
                    return true;
                }
                if next == Gt && angle.paren_depth == context.paren_depth {
                    return true;
                }
            }
        }
    }

    false
}

/// Whether `left` followed directly by `right` still lexes as the same two tokens
fn splits_cleanly(left: &str, right: &str) -> bool {
    let joined = format!("{left}{right}");
    let mut lexer = Lexeme::lexer(&joined);
    matches!(lexer.next(), Some(Ok(_))) && lexer.span().end == left.len()
}
