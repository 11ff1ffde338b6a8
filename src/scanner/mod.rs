use ahash::AHashMap;
use tracing::{debug, trace};

use crate::error::{LexError, LexResult};
use reader::Reader;
pub use token::{Token, TokenKind};

mod reader;
pub mod token;

pub struct Scanner<'source> {
    keywords: AHashMap<&'static str, TokenKind>,
    source: &'source str,
    reader: Reader<'source>,
    start: usize,
    line: usize,
    column: usize,
}

impl<'source> Scanner<'source> {
    pub fn new(source: &'source str) -> Self {
        Self {
            keywords: token::keywords(),
            source,
            reader: Reader::new(source),
            start: 0,
            line: 1,
            column: 1,
        }
    }

    pub fn scan_token(&mut self) -> Token<'source> {
        self.start = self.reader.consumed();
        self.line = self.reader.line();
        self.column = self.reader.column();
        let Some(next) = self.reader.read() else {
            return self.make_token(TokenKind::Eof);
        };
        match next {
            '(' => self.make_token(TokenKind::LeftParen),
            ')' => self.make_token(TokenKind::RightParen),
            '{' => self.make_token(TokenKind::LeftBrace),
            '}' => self.make_token(TokenKind::RightBrace),
            ',' => self.make_token(TokenKind::Comma),
            '.' => self.make_token(TokenKind::Dot),
            '-' => self.make_token(TokenKind::Minus),
            '+' => self.make_token(TokenKind::Plus),
            ';' => self.make_token(TokenKind::Semicolon),
            '*' => self.make_token(TokenKind::Star),
            '!' => match self.reader.read_if('=') {
                true => self.make_token(TokenKind::BangEqual),
                false => self.make_token(TokenKind::Bang),
            },
            '=' => match self.reader.read_if('=') {
                true => self.make_token(TokenKind::EqualEqual),
                false => self.make_token(TokenKind::Equal),
            },
            '<' => match self.reader.read_if('=') {
                true => self.make_token(TokenKind::LessEqual),
                false => self.make_token(TokenKind::Less),
            },
            '>' => match self.reader.read_if('=') {
                true => self.make_token(TokenKind::GreaterEqual),
                false => self.make_token(TokenKind::Greater),
            },
            '/' => match self.reader.read_if('/') {
                true => self.make_comment_token(),
                false => self.make_token(TokenKind::Slash),
            },
            ' ' | '\t' | '\r' => self.make_whitespace_token(),
            '\n' => self.make_token(TokenKind::Newline),
            '"' => self.make_string_token(),
            c if c.is_ascii_digit() => self.make_number_token(),
            c if is_alpha(c) => self.make_identifier_token(),
            _ => self.make_lexeme_token(TokenKind::Illegal, self.lexeme()),
        }
    }

    fn lexeme(&self) -> &'source str {
        &self.source[self.start..self.reader.consumed()]
    }

    fn make_token(&self, kind: TokenKind) -> Token<'source> {
        self.make_lexeme_token(kind, "")
    }

    fn make_lexeme_token(&self, kind: TokenKind, lexeme: &'source str) -> Token<'source> {
        Token::new(kind, lexeme, self.line, self.column)
    }

    fn make_comment_token(&mut self) -> Token<'source> {
        self.reader.read_while(|next| next != '\n');
        let body = &self.lexeme()["//".len()..];
        self.make_lexeme_token(TokenKind::LineComment, body)
    }

    fn make_whitespace_token(&mut self) -> Token<'source> {
        self.reader.read_while(is_whitespace);
        self.make_lexeme_token(TokenKind::Whitespace, self.lexeme())
    }

    fn make_string_token(&mut self) -> Token<'source> {
        self.reader.read_while(|next| next != '"');
        if self.reader.is_at_end() {
            return self.make_lexeme_token(TokenKind::Illegal, self.lexeme());
        }
        self.reader.read();
        let lexeme = self.lexeme();
        self.make_lexeme_token(TokenKind::String, &lexeme[1..lexeme.len() - 1])
    }

    fn make_number_token(&mut self) -> Token<'source> {
        self.reader.read_while(|next| next.is_ascii_digit());
        let is_fraction = self.reader.peek() == Some('.')
            && self
                .reader
                .peek_second()
                .is_some_and(|next| next.is_ascii_digit());
        if is_fraction {
            self.reader.read();
            self.reader.read_while(|next| next.is_ascii_digit());
        }
        self.make_lexeme_token(TokenKind::Number, self.lexeme())
    }

    fn make_identifier_token(&mut self) -> Token<'source> {
        self.reader
            .read_while(|next| next.is_alphanumeric() || next == '_');
        let lexeme = self.lexeme();
        let kind = match self.keywords.get(lexeme) {
            Some(kind) => *kind,
            None => TokenKind::Identifier,
        };
        self.make_lexeme_token(kind, lexeme)
    }
}

/// Yields every token up to, but not including, `Eof`.
impl<'source> Iterator for Scanner<'source> {
    type Item = Token<'source>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.scan_token();
        match token.kind {
            TokenKind::Eof => None,
            _ => Some(token),
        }
    }
}

/// Scans the whole of `source`. The first illegal token aborts the scan and
/// no tokens are returned.
#[tracing::instrument(level = "debug", skip_all, fields(length = source.len()))]
pub fn lex(source: &str) -> LexResult<Vec<Token<'_>>> {
    let mut tokens = Vec::new();
    for token in Scanner::new(source) {
        if token.kind == TokenKind::Illegal {
            let error = LexError::from_illegal(&token);
            debug!(line = token.line, column = token.column, %error, "illegal token");
            return Err(error);
        }
        trace!(%token, "token");
        tokens.push(token);
    }
    debug!(count = tokens.len(), "scanned");
    Ok(tokens)
}

pub fn lex_bytes(source: &[u8]) -> LexResult<Vec<Token<'_>>> {
    let source = std::str::from_utf8(source).map_err(|error| LexError::InvalidEncoding {
        offset: error.valid_up_to(),
    })?;
    lex(source)
}

fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r')
}

fn is_alpha(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}
