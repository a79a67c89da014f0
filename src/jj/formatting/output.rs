//! Range-gated output
//!
//! The session always walks the whole stream so its state is right at every line, but only
//! the pieces (tokens and comments) whose source lines lie inside the requested range reach
//! the result. Separators are held back until the next written piece, which keeps them out
//! of the result in front of the first piece and behind the last one.

use super::LineRange;

#[derive(Debug)]
pub struct Output<'a> {
    range: LineRange,
    delimiter: &'a str,
    text: String,
    newlines: usize,
    space: bool,
    started: bool,
}

impl<'a> Output<'a> {
    pub fn new(range: LineRange, delimiter: &'a str) -> Self {
        Output {
            range,
            delimiter,
            text: String::new(),
            newlines: 0,
            space: false,
            started: false,
        }
    }

    pub fn newlines(&mut self, count: usize) {
        self.newlines += count;
    }

    /// Request a space; it only counts when no line break is pending
    pub fn space(&mut self) {
        self.space = true;
    }

    /// Write a piece spanning the source lines `begin..=end`, preceded by the pending
    /// separator. Pieces outside the range drop the separator instead.
    pub fn piece(&mut self, text: &str, begin_line: usize, end_line: usize) {
        if !self.range.contains(begin_line, end_line) {
            self.clear();
            return;
        }

        if self.started {
            if self.newlines > 0 {
                for _ in 0..self.newlines {
                    self.text.push_str(self.delimiter);
                }
            } else if self.space {
                self.text.push(' ');
            }
        } else {
            self.started = true;
            log::debug!("first piece in range at line {begin_line}");
        }

        self.clear();
        self.text.push_str(text);
    }

    /// The written text, without trailing line delimiters
    pub fn finish(self) -> String {
        let mut text = self.text;
        if !self.delimiter.is_empty() {
            while text.ends_with(self.delimiter) {
                text.truncate(text.len() - self.delimiter.len());
            }
        }
        text
    }

    fn clear(&mut self) {
        self.newlines = 0;
        self.space = false;
    }
}
