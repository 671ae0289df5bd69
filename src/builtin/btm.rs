//! BTM language definition
//!
//! The rule table for the BTM transaction modeling language (.btm files):
//! C-style comments, single- and double-quoted strings, signed decimal
//! numbers with optional fraction and exponent, brackets, and the fixed
//! reserved-word set. Rules are listed in match priority order.

use crate::mode::ModeDefinition;
use crate::rules::{BlockRule, PatternRule};
use crate::tokens::TokenKind;

/// Reserved words, case-sensitive, matched on whole words only
const KEYWORDS: &str = "AIAO|AINO|AISO|BTC|SIAO|SINO|SISO|_|after|assert|between|block|blocks|\
bool|boolean|date|days|else|false|from|fun|hash|hash160|hash256|hours|if|import|input|int|\
key|mainnet|max|min|minutes|network|output|package|participant|private|public|put|receive|\
ripemd160|send|serial|sha256|sig|signature|size|string|testnet|then|to|transaction|true|\
versig|when";

/// Create the BTM mode definition
pub fn btm_mode() -> ModeDefinition {
    let mut mode = ModeDefinition::new("btm", "BTM");
    mode.add_extension("btm");

    // Block comments; the only construct that carries state across lines
    if let Some(rule) = BlockRule::new("block_comment", r"/\*", r"\*/", TokenKind::Comment, 95) {
        mode.set_block(rule);
    }

    // Line comments
    if let Some(rule) = PatternRule::new("line_comment", r"//.*$", TokenKind::Comment, 100) {
        mode.add_pattern(rule);
    }

    // Strings; an unterminated literal still tokenizes through end of line
    if let Some(rule) = PatternRule::new(
        "string_double",
        r#""(?:\\.|[^"\\])*(?:"|$)"#,
        TokenKind::String,
        90,
    ) {
        mode.add_pattern(rule);
    }
    if let Some(rule) = PatternRule::new(
        "string_single",
        r#"'(?:\\.|[^'\\])*(?:'|$)"#,
        TokenKind::String,
        89,
    ) {
        mode.add_pattern(rule);
    }

    // Numbers: optional sign, digits, optional fraction and exponent.
    // An unsigned run must start at a word boundary so identifier tails
    // like "transaction1" stay plain text.
    if let Some(rule) = PatternRule::new(
        "number",
        r"(?:[+-]|\b)\d+(?:(?:\.\d*)?(?:[eE][+-]?\d+)?)?\b",
        TokenKind::Number,
        80,
    ) {
        mode.add_pattern(rule);
    }

    // Brackets
    if let Some(rule) = PatternRule::new("open_bracket", r"[\[({]", TokenKind::OpenBracket, 70) {
        mode.add_pattern(rule);
    }
    if let Some(rule) = PatternRule::new("close_bracket", r"[\])}]", TokenKind::CloseBracket, 69) {
        mode.add_pattern(rule);
    }

    // Keywords
    let keyword_pattern = format!(r"\b(?:{})\b", KEYWORDS);
    if let Some(rule) = PatternRule::new("keyword", &keyword_pattern, TokenKind::Keyword, 60) {
        mode.add_pattern(rule);
    }

    mode
}
