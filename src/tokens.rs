//! Token kinds for syntax highlighting
//!
//! This module defines the display categories a scanned line is broken
//! into, and the token spans the tokenizer produces.

use super::style::{Color, Style};

/// Display categories recognized in BTM source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Comments (// or /* */)
    Comment,
    /// String literals ("..." or '...')
    String,
    /// Numeric literals (integers, decimals, exponents)
    Number,
    /// Opening brackets ([, (, {)
    OpenBracket,
    /// Closing brackets (], ), })
    CloseBracket,
    /// Reserved words of the language
    Keyword,
    /// Default/plain text (no special highlighting)
    Text,
}

impl TokenKind {
    /// Get the default style for this token kind
    pub fn default_style(&self) -> Style {
        match self {
            TokenKind::Comment => Style::fg(Color::BrightBlack).with_italic(),
            TokenKind::String => Style::fg(Color::Green),
            TokenKind::Number => Style::fg(Color::Cyan),
            TokenKind::OpenBracket => Style::default(),
            TokenKind::CloseBracket => Style::default(),
            TokenKind::Keyword => Style::fg(Color::Magenta).with_bold(),
            TokenKind::Text => Style::default(),
        }
    }

    /// Get the stable name for this token kind (used in theme files)
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Comment => "comment",
            TokenKind::String => "string",
            TokenKind::Number => "number",
            TokenKind::OpenBracket => "open-bracket",
            TokenKind::CloseBracket => "close-bracket",
            TokenKind::Keyword => "keyword",
            TokenKind::Text => "text",
        }
    }

    /// Parse a token kind from its name (for theme loading)
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "comment" => Some(TokenKind::Comment),
            "string" => Some(TokenKind::String),
            "number" => Some(TokenKind::Number),
            "open-bracket" => Some(TokenKind::OpenBracket),
            "close-bracket" => Some(TokenKind::CloseBracket),
            "keyword" => Some(TokenKind::Keyword),
            "text" => Some(TokenKind::Text),
            _ => None,
        }
    }

    /// All kinds, in a fixed order (used when building themes)
    pub fn all() -> [TokenKind; 7] {
        [
            TokenKind::Comment,
            TokenKind::String,
            TokenKind::Number,
            TokenKind::OpenBracket,
            TokenKind::CloseBracket,
            TokenKind::Keyword,
            TokenKind::Text,
        ]
    }
}

/// A classified span of text within one line
///
/// Offsets are byte positions into the line, start inclusive and end
/// exclusive. Tokens for a line are non-overlapping, in left-to-right
/// order, and cover every byte of the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    /// Display category of the span
    pub kind: TokenKind,
    /// Byte offset where this token starts (inclusive)
    pub start: usize,
    /// Byte offset where this token ends (exclusive)
    pub end: usize,
}

impl Token {
    /// Create a new token
    pub fn new(kind: TokenKind, start: usize, end: usize) -> Self {
        Self { kind, start, end }
    }

    /// The matched substring of `line`
    pub fn text<'a>(&self, line: &'a str) -> &'a str {
        &line[self.start..self.end]
    }

    /// Get the length of this token in bytes
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check if the token is empty
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_styles() {
        assert!(!TokenKind::Comment.default_style().is_default());
        assert!(!TokenKind::String.default_style().is_default());
        assert!(!TokenKind::Keyword.default_style().is_default());
        // Brackets and plain text render unstyled by default
        assert!(TokenKind::OpenBracket.default_style().is_default());
        assert!(TokenKind::Text.default_style().is_default());
    }

    #[test]
    fn test_from_name_roundtrip() {
        for kind in TokenKind::all() {
            assert_eq!(TokenKind::from_name(kind.name()), Some(kind));
        }
    }

    #[test]
    fn test_from_name_invalid() {
        assert_eq!(TokenKind::from_name("Comment"), None);
        assert_eq!(TokenKind::from_name(""), None);
    }

    #[test]
    fn test_token_text() {
        let token = Token::new(TokenKind::Keyword, 4, 7);
        assert_eq!(token.text("let fun x"), "fun");
        assert_eq!(token.len(), 3);
        assert!(!token.is_empty());
    }
}
