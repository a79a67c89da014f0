//! Phase and nesting tracking
//!
//!     The layout of a token depends on where it sits in the grammar file. [Context] follows
//!     the token stream one token at a time and answers those questions for the layout
//!     rules.
//!
//! Phase
//!
//!     Everything before `PARSER_END` (the `options` block and the Java compilation unit
//!     between `PARSER_BEGIN` and `PARSER_END`) is the header. From `PARSER_END` on, the
//!     file holds token sections and productions: the body. The flip is one way.
//!
//! Counters
//!
//!     Three of the paren counters share a convention: -1 means "outside", 0 means
//!     "entered but no paren opened yet", and returning to 0 after the matching `)` exits
//!     straight back to -1.
//!
//!     - lookahead: `LOOKAHEAD(...)` constraints. Braces inside them (semantic lookahead)
//!       are not counted, and no newline rule fires inside.
//!     - for loops: `;` inside a `for (...)` header does not end a line.
//!     - node annotations: JJTree `#Name` / `#Name(...)`. A `:` right after the name
//!       means this was a private regular expression label instead (`< #DIGIT : ... >`).
//!       A `#` inside an annotation is not a new annotation.
//!
//! Grammar Context
//!
//!     Expansions and regular expressions follow their own layout rules. They live in the
//!     body, at brace depth 0 (section and production headers) or directly inside a grammar
//!     block: the block of a token section, or the second block of a production. Java
//!     blocks (production declarations, actions, `TOKEN_MGR_DECLS`, `JAVACODE`) use the
//!     plain Java rules.

use super::scan;
use crate::jj::token::{Keyword, TokenKind, TokenStream};

/// What the current top-level construct of the body is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Production,
    Regex,
    Java,
}

/// Kind of the block at brace depth 1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block {
    Java,
    Grammar,
}

/// An open `<...>` in grammar context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AngleGroup {
    pub open: usize,
    pub declaration: bool,
    pub paren_depth: usize,
}

#[derive(Debug, Clone)]
pub struct Context {
    pub body: bool,
    pub lookahead_depth: i32,
    pub for_depth: i32,
    pub node_depth: i32,
    pub brace_depth: usize,
    pub paren_depth: usize,
    pub section: Section,
    pub block: Block,
    pub angles: Vec<AngleGroup>,
}

impl Context {
    pub fn new() -> Self {
        Context {
            body: false,
            lookahead_depth: -1,
            for_depth: -1,
            node_depth: -1,
            brace_depth: 0,
            paren_depth: 0,
            section: Section::Production,
            block: Block::Java,
            angles: Vec::new(),
        }
    }

    /// Inside the parens of a lookahead constraint
    pub fn in_lookahead(&self) -> bool {
        self.lookahead_depth > 0
    }

    /// Inside the parens of a `for` header
    pub fn in_for_header(&self) -> bool {
        self.for_depth > 0
    }

    pub fn in_grammar(&self) -> bool {
        self.body
            && self.lookahead_depth <= 0
            && self.node_depth <= 0
            && (self.brace_depth == 0 || (self.brace_depth == 1 && self.block == Block::Grammar))
    }

    pub fn in_angle(&self) -> bool {
        !self.angles.is_empty()
    }

    pub fn top_angle(&self) -> Option<&AngleGroup> {
        self.angles.last()
    }

    /// Account for the token at `index`
    pub fn advance(&mut self, tokens: &TokenStream, index: usize) {
        let kind = tokens.kind(index);
        let next = tokens.kind(index + 1);
        let previous = index.checked_sub(1).map(|i| tokens.kind(i)).unwrap_or(TokenKind::Eof);
        let grammar = self.in_grammar();

        if self.node_depth == 0
            && !matches!(kind, TokenKind::Hash | TokenKind::Identifier | TokenKind::LParen | TokenKind::Colon)
        {
            self.node_depth = -1;
        }

        match kind {
            TokenKind::Keyword(Keyword::ParserEnd) if !self.body => {
                self.body = true;
                log::debug!("body starts at line {}", tokens[index].begin_line);
            }
            TokenKind::Keyword(Keyword::Lookahead) => {
                if self.lookahead_depth < 0 && next == TokenKind::LParen {
                    self.lookahead_depth = 0;
                }
            }
            TokenKind::Keyword(Keyword::For) => {
                if self.for_depth < 0 {
                    self.for_depth = 0;
                }
            }
            TokenKind::Keyword(keyword) if self.body && self.brace_depth == 0 => {
                if keyword.is_regex_section() {
                    self.section = Section::Regex;
                } else if keyword.is_java_section() {
                    self.section = Section::Java;
                }
            }
            TokenKind::Hash => {
                if self.node_depth < 0 {
                    self.node_depth = 0;
                }
            }
            TokenKind::Identifier => {
                if self.node_depth == 0 && next != TokenKind::LParen {
                    self.node_depth = -1;
                }
            }
            TokenKind::Colon => {
                if self.node_depth == 0 {
                    self.node_depth = -1;
                }
            }
            TokenKind::LParen => {
                self.paren_depth += 1;
                for depth in [&mut self.lookahead_depth, &mut self.for_depth, &mut self.node_depth] {
                    if *depth >= 0 {
                        *depth += 1;
                    }
                }
            }
            TokenKind::RParen => {
                self.paren_depth = self.paren_depth.saturating_sub(1);
                for depth in [&mut self.lookahead_depth, &mut self.for_depth, &mut self.node_depth] {
                    if *depth > 0 {
                        *depth -= 1;
                        if *depth == 0 {
                            *depth = -1;
                        }
                    }
                }
            }
            TokenKind::LBrace if self.lookahead_depth <= 0 => {
                if self.body && self.brace_depth == 0 {
                    self.block = self.block_for(previous);
                }
                self.brace_depth += 1;
            }
            TokenKind::RBrace if self.lookahead_depth <= 0 => {
                self.brace_depth = self.brace_depth.saturating_sub(1);
                if self.brace_depth == 0 && next != TokenKind::LBrace {
                    self.section = Section::Production;
                }
            }
            TokenKind::Lt if grammar => {
                if let Some(close) = scan::matching_angle(tokens, index) {
                    self.angles.push(AngleGroup {
                        open: index,
                        declaration: scan::angle_is_declaration(tokens, index, close),
                        paren_depth: self.paren_depth,
                    });
                }
            }
            TokenKind::Gt if grammar => {
                if self.top_angle().is_some_and(|top| top.paren_depth == self.paren_depth) {
                    self.angles.pop();
                }
            }
            _ => {}
        }
    }

    fn block_for(&self, previous: TokenKind) -> Block {
        match self.section {
            Section::Regex => Block::Grammar,
            Section::Java => Block::Java,
            Section::Production if previous == TokenKind::RBrace => Block::Grammar,
            Section::Production => Block::Java,
        }
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jj::lexing::tokenize;

    /// Run the context over `source` and return it as it stands after the token with
    /// the given image (first occurrence after `skip` earlier ones)
    fn context_after(source: &str, image: &str, skip: usize) -> Context {
        let tokens = tokenize(source).unwrap();
        let stop = tokens
            .iter()
            .enumerate()
            .filter(|(_, token)| token.image == image)
            .nth(skip)
            .map(|(index, _)| index)
            .expect("token to exist");
        let mut context = Context::new();
        for index in 0..=stop {
            context.advance(&tokens, index);
        }
        context
    }

    #[test]
    fn test_parser_end_flips_phase() {
        let context = context_after("PARSER_BEGIN(P) class P {} PARSER_END(P)", "PARSER_BEGIN", 0);
        assert!(!context.body);
        let context = context_after("PARSER_BEGIN(P) class P {} PARSER_END(P)", "PARSER_END", 0);
        assert!(context.body);
    }

    #[test]
    fn test_lookahead_option_does_not_arm() {
        let context = context_after("options { LOOKAHEAD = 2; }", "LOOKAHEAD", 0);
        assert_eq!(context.lookahead_depth, -1);
    }

    #[test]
    fn test_lookahead_constraint_depth() {
        let source = "LOOKAHEAD( { f(1) } ) x";
        assert_eq!(context_after(source, "LOOKAHEAD", 0).lookahead_depth, 0);
        assert_eq!(context_after(source, "(", 0).lookahead_depth, 1);
        assert_eq!(context_after(source, "(", 1).lookahead_depth, 2);
        assert_eq!(context_after(source, ")", 0).lookahead_depth, 1);
        assert_eq!(context_after(source, ")", 1).lookahead_depth, -1);
        // semantic lookahead braces are not counted
        assert_eq!(context_after(source, "{", 0).brace_depth, 0);
    }

    #[test]
    fn test_for_header() {
        let source = "for (i = 0; i < n; i++) { x; }";
        assert!(context_after(source, ";", 0).in_for_header());
        assert!(!context_after(source, ")", 0).in_for_header());
        assert!(!context_after(source, ";", 2).in_for_header());
    }

    #[test]
    fn test_node_annotation_with_arguments() {
        let source = "A() #Add(2) B()";
        assert_eq!(context_after(source, "#", 0).node_depth, 0);
        assert_eq!(context_after(source, "Add", 0).node_depth, 0);
        assert_eq!(context_after(source, "2", 0).node_depth, 1);
        assert_eq!(context_after(source, ")", 1).node_depth, -1);
    }

    #[test]
    fn test_node_annotation_without_arguments() {
        assert_eq!(context_after("A() #Leaf B()", "Leaf", 0).node_depth, -1);
    }

    #[test]
    fn test_private_label_aborts_node_annotation() {
        assert_eq!(context_after("< #DIGIT : [\"0\"-\"9\"] >", ":", 0).node_depth, -1);
    }

    #[test]
    fn test_node_annotation_is_not_reentrant() {
        let context = context_after("#A( #B(1) )", "#", 1);
        assert_eq!(context.node_depth, 1);
    }

    #[test]
    fn test_grammar_blocks() {
        let source = "PARSER_END(P) void A() : { int x; } { B() } TOKEN : { < C : \"c\" > }";
        let declarations = context_after(source, "int", 0);
        assert!(!declarations.in_grammar());
        let expansion = context_after(source, "B", 0);
        assert!(expansion.in_grammar());
        let regex = context_after(source, "C", 0);
        assert!(regex.in_grammar());
        assert_eq!(regex.section, Section::Regex);
        assert!(regex.top_angle().is_some_and(|angle| angle.declaration));
    }

    #[test]
    fn test_action_blocks_leave_grammar_context() {
        let source = "PARSER_END(P) void A() : {} { B() { x = 1; } }";
        assert!(!context_after(source, "x", 0).in_grammar());
        assert!(context_after(source, "}", 2).in_grammar());
    }

    #[test]
    fn test_section_resets_after_top_level_block() {
        let source = "PARSER_END(P) TOKEN : { < A : \"a\" > } void B() : {} {}";
        assert_eq!(context_after(source, "void", 0).section, Section::Production);
    }
}
