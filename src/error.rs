use thiserror::Error;

use crate::scanner::{Token, TokenKind};

pub type LexResult<T> = std::result::Result<T, LexError>;

#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum LexError {
    #[error("[line {line}:{column}] Error: Unexpected character '{character}'.")]
    UnexpectedCharacter {
        character: char,
        line: usize,
        column: usize,
    },
    #[error("[line {line}:{column}] Error: Unterminated string.")]
    UnterminatedString { line: usize, column: usize },
    #[error("Error: Invalid UTF-8 at byte {offset}.")]
    InvalidEncoding { offset: usize },
}

impl LexError {
    /// Describes why the scanner produced an illegal token. A lone `"` is
    /// always a valid start, so an illegal lexeme opening with one can only
    /// be a string that ran into the end of input.
    pub fn from_illegal(token: &Token<'_>) -> Self {
        debug_assert_eq!(token.kind, TokenKind::Illegal);
        let (line, column) = (token.line, token.column);
        match token.lexeme.chars().next() {
            Some('"') => LexError::UnterminatedString { line, column },
            Some(character) => LexError::UnexpectedCharacter {
                character,
                line,
                column,
            },
            None => LexError::UnexpectedCharacter {
                character: char::REPLACEMENT_CHARACTER,
                line,
                column,
            },
        }
    }
}
