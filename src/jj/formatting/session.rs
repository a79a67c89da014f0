//! The formatting pass
//!
//! A [Session] owns all state of one `format` call and walks the token stream once. For
//! every primary token it:
//!
//! 1. re-emits the specials in front of it (comments verbatim, line break runs as at most
//!    one forced break),
//! 2. moves the line indent one unit toward the target indent,
//! 3. writes the pending separator and the token,
//! 4. updates the [Context] and asks the [Layout] for the next gap.

use super::context::Context;
use super::layout::{Gap, Layout};
use super::output::Output;
use super::{FormatOptions, LineRange};
use crate::jj::token::{SpecialKind, Token, TokenStream};

pub struct Session<'a> {
    tokens: &'a TokenStream,
    unit: &'a str,
    context: Context,
    layout: Layout,
    output: Output<'a>,
    pending: usize,
    space: bool,
    at_line_start: bool,
    /// Indent written in front of the current line
    line_indent: String,
    /// Indent the line indent converges to
    indent: String,
}

impl<'a> Session<'a> {
    pub fn new(tokens: &'a TokenStream, options: &'a FormatOptions, range: LineRange) -> Self {
        Session {
            tokens,
            unit: &options.indent_unit,
            context: Context::new(),
            layout: Layout::new(),
            output: Output::new(range, &options.line_delimiter),
            pending: 0,
            space: false,
            at_line_start: true,
            line_indent: String::new(),
            indent: String::new(),
        }
    }

    pub fn run(mut self) -> String {
        let tokens = self.tokens;
        for (index, token) in tokens.iter().enumerate() {
            self.specials(token);
            if token.is_eof() {
                break;
            }

            self.converge();
            self.separate();
            self.emit(&token.image, token.begin_line, token.end_line);

            self.context.advance(tokens, index);
            let gap = self.layout.decide(tokens, index, &self.context);
            self.apply(gap);
        }
        self.output.finish()
    }

    fn specials(&mut self, token: &Token) {
        let mut in_break_run = false;
        for special in &token.specials {
            if special.kind.is_line_break() {
                if !in_break_run {
                    if self.pending > 0 {
                        let pending = std::mem::take(&mut self.pending);
                        self.newlines(pending);
                    } else if !self.at_line_start {
                        self.newlines(1);
                    }
                }
                in_break_run = true;
                continue;
            }

            in_break_run = false;
            if !self.at_line_start {
                self.output.space();
            }
            self.emit(&special.image, special.begin_line, special.end_line);

            if special.kind == SpecialKind::SingleLineComment {
                self.newlines(1);
                self.pending = self.pending.saturating_sub(1);
            } else {
                self.space = true;
            }
        }
    }

    fn converge(&mut self) {
        if self.unit.is_empty() {
            return;
        }
        if self.line_indent.len() < self.indent.len() {
            self.line_indent.push_str(self.unit);
        } else if self.line_indent.len() > self.indent.len() {
            self.line_indent.truncate(self.line_indent.len() - self.unit.len());
        }
    }

    fn separate(&mut self) {
        if self.pending > 0 {
            let pending = std::mem::take(&mut self.pending);
            self.newlines(pending);
        } else if !self.at_line_start && self.space {
            self.output.space();
        }
    }

    fn emit(&mut self, text: &str, begin_line: usize, end_line: usize) {
        if self.at_line_start && !self.line_indent.is_empty() {
            let piece = format!("{}{}", self.line_indent, text);
            self.output.piece(&piece, begin_line, end_line);
        } else {
            self.output.piece(text, begin_line, end_line);
        }
        self.at_line_start = false;
    }

    fn newlines(&mut self, count: usize) {
        self.output.newlines(count);
        self.at_line_start = true;
    }

    fn apply(&mut self, gap: Gap) {
        self.pending = gap.newlines;
        self.space = gap.space;
        for _ in 0..gap.indent.max(0) {
            self.indent.push_str(self.unit);
        }
        for _ in 0..(-gap.indent).max(0) {
            let len = self.indent.len().saturating_sub(self.unit.len());
            self.indent.truncate(len);
        }
    }
}
