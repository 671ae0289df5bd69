//! Pattern rules for the line tokenizer
//!
//! This module defines the rule types tried, in priority order, at each
//! scan position, and the lexical state carried from one line to the next.

use regex::Regex;

use super::tokens::{Token, TokenKind};

/// A single-line pattern rule
///
/// Matches a regex pattern and assigns a token kind to the match.
/// Rules are tried in priority order (highest first).
pub struct PatternRule {
    /// Name for debugging
    pub name: String,
    /// Compiled regex pattern
    pub pattern: Regex,
    /// Token kind to assign to matches
    pub kind: TokenKind,
    /// Priority (higher = matched first on ties)
    pub priority: i32,
}

impl PatternRule {
    /// Create a new pattern rule
    pub fn new(name: &str, pattern: &str, kind: TokenKind, priority: i32) -> Option<Self> {
        Regex::new(pattern).ok().map(|regex| Self {
            name: name.to_string(),
            pattern: regex,
            kind,
            priority,
        })
    }

    /// Find the first match at or after `start`
    ///
    /// Searches with `find_at` rather than slicing so word-boundary
    /// assertions see the characters before `start`.
    pub fn find_at(&self, text: &str, start: usize) -> Option<(usize, usize)> {
        if start >= text.len() {
            return None;
        }
        self.pattern.find_at(text, start).map(|m| (m.start(), m.end()))
    }
}

/// The block construct rule (/* ... */ comments)
///
/// The only construct that can span lines; while it is open the tokenizer
/// is in `LineState::InBlockComment` and scans for the close pattern.
pub struct BlockRule {
    /// Name for debugging
    pub name: String,
    /// Pattern that opens the construct
    pub open: Regex,
    /// Pattern that closes the construct
    pub close: Regex,
    /// Token kind for the whole construct
    pub kind: TokenKind,
    /// Priority relative to the pattern rules
    pub priority: i32,
}

impl BlockRule {
    /// Create a new block rule
    pub fn new(
        name: &str,
        open_pattern: &str,
        close_pattern: &str,
        kind: TokenKind,
        priority: i32,
    ) -> Option<Self> {
        let open = Regex::new(open_pattern).ok()?;
        let close = Regex::new(close_pattern).ok()?;
        Some(Self {
            name: name.to_string(),
            open,
            close,
            kind,
            priority,
        })
    }

    /// Find where the construct opens, at or after `start`
    pub fn find_open(&self, text: &str, start: usize) -> Option<(usize, usize)> {
        if start >= text.len() {
            return None;
        }
        self.open.find_at(text, start).map(|m| (m.start(), m.end()))
    }

    /// Find the end of the close pattern, at or after `start`
    pub fn find_close(&self, text: &str, start: usize) -> Option<usize> {
        if start >= text.len() {
            return None;
        }
        self.close.find_at(text, start).map(|m| m.end())
    }
}

/// Lexical state carried between successive lines
///
/// Created once per document (as `Default`) and threaded forward by the
/// host: the state returned for line N is the entry state for line N+1.
/// The tokenizer holds no state of its own between calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LineState {
    /// Normal code; the state every fresh document starts in
    #[default]
    Normal,
    /// Inside a /* ... */ comment that has not closed yet
    InBlockComment,
}

impl LineState {
    /// Check if we're in normal code
    pub fn is_normal(&self) -> bool {
        matches!(self, LineState::Normal)
    }

    /// Check if we're inside an open block comment
    pub fn in_block_comment(&self) -> bool {
        matches!(self, LineState::InBlockComment)
    }
}

/// Result of tokenizing a single line
#[derive(Debug)]
pub struct TokenizedLine {
    /// Tokens covering the line, in order
    pub tokens: Vec<Token>,
    /// State at end of line (entry state for the next line)
    pub end_state: LineState,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_rule() {
        let rule = PatternRule::new("number", r"\d+", TokenKind::Number, 50).unwrap();
        assert_eq!(rule.find_at("abc 123 def", 0), Some((4, 7)));
        assert_eq!(rule.find_at("abc 123 def", 5), Some((5, 7)));
        assert_eq!(rule.find_at("no numbers", 0), None);
    }

    #[test]
    fn test_pattern_rule_bad_regex() {
        assert!(PatternRule::new("broken", r"(", TokenKind::Text, 0).is_none());
    }

    #[test]
    fn test_find_at_keeps_word_boundaries() {
        // Searching from inside a word must not invent a boundary there
        let rule = PatternRule::new("kw", r"\bfun\b", TokenKind::Keyword, 50).unwrap();
        assert_eq!(rule.find_at("refund fun", 2), Some((7, 10)));
        assert_eq!(rule.find_at("refund", 2), None);
    }

    #[test]
    fn test_block_rule() {
        let rule = BlockRule::new("block_comment", r"/\*", r"\*/", TokenKind::Comment, 95).unwrap();
        assert_eq!(rule.find_open("x /* comment */", 0), Some((2, 4)));
        assert_eq!(rule.find_close("x /* comment */", 4), Some(15));
        assert_eq!(rule.find_close("no close here", 0), None);
    }

    #[test]
    fn test_line_state() {
        let normal = LineState::default();
        assert!(normal.is_normal());
        assert!(!normal.in_block_comment());

        let inside = LineState::InBlockComment;
        assert!(!inside.is_normal());
        assert!(inside.in_block_comment());
    }
}
