//! Character cursor over roster input
//!
//! Mirrors the three ways records are read: whitespace-delimited tokens, the
//! remainder of the current line, and text up to a delimiter character.

/// Read position within an input string
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Start reading at the beginning of `input`
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Unread portion of the input
    #[must_use]
    pub fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// Whether only whitespace (or nothing) is left
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.remaining().trim_start().is_empty()
    }

    /// Skip any run of whitespace, newlines included
    pub fn skip_whitespace(&mut self) {
        let rest = self.remaining();
        self.pos += rest.len() - rest.trim_start().len();
    }

    /// Skip leading whitespace and return the next run of non-whitespace
    /// characters, or `None` at end of input
    pub fn next_token(&mut self) -> Option<&'a str> {
        self.skip_whitespace();
        let rest = self.remaining();
        if rest.is_empty() {
            return None;
        }
        let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        self.pos += end;
        Some(&rest[..end])
    }

    /// Return everything up to the end of the current line and move past the
    /// newline. A trailing carriage return is not included.
    pub fn rest_of_line(&mut self) -> &'a str {
        let line = self.read_until('\n');
        line.strip_suffix('\r').unwrap_or(line)
    }

    /// Discard the rest of the current line
    pub fn skip_line(&mut self) {
        let _ = self.read_until('\n');
    }

    /// Return the text before the next `delim` and move past the delimiter.
    /// Without a matching delimiter the rest of the input is returned.
    pub fn read_until(&mut self, delim: char) -> &'a str {
        let rest = self.remaining();
        match rest.find(delim) {
            Some(idx) => {
                self.pos += idx + delim.len_utf8();
                &rest[..idx]
            }
            None => {
                self.pos = self.input.len();
                rest
            }
        }
    }
}
