use std::fmt;

use ahash::AHashMap;

use crate::common::KEYWORDS_COUNT;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TokenKind {
    // Control.
    Illegal,
    Eof,
    // Trivia.
    LineComment,
    Whitespace,
    Newline,
    // Single-character tokens.
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Comma,
    Dot,
    Minus,
    Plus,
    Semicolon,
    Slash,
    Star,
    // One or two character tokens.
    Bang,
    BangEqual,
    Equal,
    EqualEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,
    // Literals.
    Identifier,
    String,
    Number,
    // Keywords.
    And,
    Class,
    Else,
    False,
    For,
    Fun,
    If,
    Nil,
    Or,
    Print,
    Return,
    Super,
    This,
    True,
    Var,
    While,
}

impl TokenKind {
    /// Human readable name, only meant for diagnostics and the token listing.
    pub fn label(self) -> &'static str {
        match self {
            TokenKind::Illegal => "illegal",
            TokenKind::Eof => "EOF",
            TokenKind::LineComment => "line comment",
            TokenKind::Whitespace => "whitespace",
            TokenKind::Newline => "new line",
            TokenKind::LeftParen => "left parentheses",
            TokenKind::RightParen => "right parentheses",
            TokenKind::LeftBrace => "left brackets",
            TokenKind::RightBrace => "right brackets",
            TokenKind::Comma => "comma",
            TokenKind::Dot => "dot",
            TokenKind::Minus => "minus",
            TokenKind::Plus => "plus",
            TokenKind::Semicolon => "semicolon",
            TokenKind::Slash => "slash",
            TokenKind::Star => "star",
            TokenKind::Bang => "not",
            TokenKind::BangEqual => "not equal",
            TokenKind::Equal => "equal",
            TokenKind::EqualEqual => "equal equal",
            TokenKind::Greater => "greater",
            TokenKind::GreaterEqual => "greater equal",
            TokenKind::Less => "less",
            TokenKind::LessEqual => "less equal",
            TokenKind::Identifier => "identifier",
            TokenKind::String => "string",
            TokenKind::Number => "number",
            TokenKind::And => "and",
            TokenKind::Class => "class",
            TokenKind::Else => "else",
            TokenKind::False => "false",
            TokenKind::For => "for",
            TokenKind::Fun => "function",
            TokenKind::If => "if",
            TokenKind::Nil => "nil",
            TokenKind::Or => "or",
            TokenKind::Print => "print",
            TokenKind::Return => "return",
            TokenKind::Super => "super",
            TokenKind::This => "this",
            TokenKind::True => "true",
            TokenKind::Var => "var",
            TokenKind::While => "while",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub fn keywords() -> AHashMap<&'static str, TokenKind> {
    let mut keywords = AHashMap::with_capacity(KEYWORDS_COUNT);
    keywords.insert("and", TokenKind::And);
    keywords.insert("class", TokenKind::Class);
    keywords.insert("else", TokenKind::Else);
    keywords.insert("false", TokenKind::False);
    keywords.insert("for", TokenKind::For);
    keywords.insert("fun", TokenKind::Fun);
    keywords.insert("if", TokenKind::If);
    keywords.insert("nil", TokenKind::Nil);
    keywords.insert("or", TokenKind::Or);
    keywords.insert("print", TokenKind::Print);
    keywords.insert("return", TokenKind::Return);
    keywords.insert("super", TokenKind::Super);
    keywords.insert("this", TokenKind::This);
    keywords.insert("true", TokenKind::True);
    keywords.insert("var", TokenKind::Var);
    keywords.insert("while", TokenKind::While);
    keywords
}

/// A lexeme is empty for kinds whose text is fixed (punctuation, operators,
/// newlines). Lines and columns are 1-based and point at the first character.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Token<'source> {
    pub kind: TokenKind,
    pub lexeme: &'source str,
    pub line: usize,
    pub column: usize,
}

impl<'source> Token<'source> {
    pub fn new(kind: TokenKind, lexeme: &'source str, line: usize, column: usize) -> Self {
        Self {
            kind,
            lexeme,
            line,
            column,
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Token({}, content: {}, line: {})",
            self.kind, self.lexeme, self.line
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn keyword_table_is_complete() {
        let keywords = keywords();
        assert_eq!(keywords.len(), KEYWORDS_COUNT);
        for (text, kind) in &keywords {
            match kind {
                TokenKind::Fun => assert_eq!(kind.label(), "function"),
                _ => assert_eq!(kind.label(), *text),
            }
        }
    }

    #[test]
    fn display_matches_listing_format() {
        let token = Token::new(TokenKind::Number, "123.12", 3, 1);
        assert_eq!(token.to_string(), "Token(number, content: 123.12, line: 3)");

        let token = Token::new(TokenKind::LeftBrace, "", 1, 1);
        assert_eq!(token.to_string(), "Token(left brackets, content: , line: 1)");
    }
}
