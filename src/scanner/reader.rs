use std::str::Chars;

use crate::common::LOOKAHEAD_MAX_COUNT;

/// Character source for the scanner.
///
/// Decoded characters that were peeked at wait in a two-slot ring until they
/// are read, so `peek` and `peek_second` never change what `read` returns.
pub struct Reader<'source> {
    chars: Chars<'source>,
    lookahead: [char; LOOKAHEAD_MAX_COUNT],
    head: usize,
    buffered: usize,
    consumed: usize,
    length: usize,
    line: usize,
    column: usize,
}

impl<'source> Reader<'source> {
    pub fn new(source: &'source str) -> Self {
        Self {
            chars: source.chars(),
            lookahead: ['\0'; LOOKAHEAD_MAX_COUNT],
            head: 0,
            buffered: 0,
            consumed: 0,
            length: source.len(),
            line: 1,
            column: 1,
        }
    }

    pub fn read(&mut self) -> Option<char> {
        let next = match self.buffered {
            0 => self.chars.next()?,
            _ => {
                let next = self.lookahead[self.head];
                self.head = (self.head + 1) % LOOKAHEAD_MAX_COUNT;
                self.buffered -= 1;
                next
            }
        };
        self.consumed += next.len_utf8();
        match next {
            '\n' => {
                self.line += 1;
                self.column = 1;
            }
            _ => self.column += 1,
        }
        Some(next)
    }

    pub fn peek(&mut self) -> Option<char> {
        self.fill(1)?;
        Some(self.lookahead[self.head])
    }

    pub fn peek_second(&mut self) -> Option<char> {
        self.fill(2)?;
        Some(self.lookahead[(self.head + 1) % LOOKAHEAD_MAX_COUNT])
    }

    /// Consumes the next character only if it equals `expected`.
    pub fn read_if(&mut self, expected: char) -> bool {
        if self.peek() != Some(expected) {
            return false;
        }
        self.read();
        true
    }

    /// Consumes characters while `predicate` holds for the next one.
    pub fn read_while(&mut self, predicate: impl Fn(char) -> bool) {
        while self.peek().is_some_and(&predicate) {
            self.read();
        }
    }

    fn fill(&mut self, count: usize) -> Option<()> {
        while self.buffered < count {
            let next = self.chars.next()?;
            let tail = (self.head + self.buffered) % LOOKAHEAD_MAX_COUNT;
            self.lookahead[tail] = next;
            self.buffered += 1;
        }
        Some(())
    }

    /// Byte offset of the next unread character.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    pub fn is_at_end(&self) -> bool {
        self.consumed >= self.length
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }
}
