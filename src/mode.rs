//! Mode definitions
//!
//! A `ModeDefinition` bundles the rule set for one language: the ordered
//! single-line patterns, the block-comment rule, and the file extensions
//! the mode claims. Its `tokenize_line` operation is the scanning engine.

use super::rules::{BlockRule, LineState, PatternRule, TokenizedLine};
use super::tokens::{Token, TokenKind};

/// A completion candidate surfaced to the host editor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    /// Text shown in the completion list
    pub label: String,
    /// Text inserted when the candidate is accepted
    pub insert: String,
}

/// A complete mode definition for one language
pub struct ModeDefinition {
    /// Fixed identifier the mode registers under (e.g. "btm")
    pub id: String,
    /// Human-readable language name
    pub name: String,
    /// File extensions claimed by this mode
    pub extensions: Vec<String>,
    /// Single-line pattern rules, sorted by priority (highest first)
    pub patterns: Vec<PatternRule>,
    /// The block-comment rule, if the language has one
    pub block: Option<BlockRule>,
}

/// What acting on a rule match does
enum Action<'a> {
    /// Emit one token of this kind
    Emit(TokenKind),
    /// Enter the block construct (emits one token through its close)
    OpenBlock(&'a BlockRule),
}

/// A rule match competing for the current scan position
struct Candidate<'a> {
    start: usize,
    end: usize,
    priority: i32,
    action: Action<'a>,
}

/// Pick the better of two candidates: earliest start wins, ties go to
/// the higher-priority rule
fn prefer<'a>(best: Option<Candidate<'a>>, cand: Candidate<'a>) -> Option<Candidate<'a>> {
    match best {
        None => Some(cand),
        Some(b) if cand.start < b.start || (cand.start == b.start && cand.priority > b.priority) => {
            Some(cand)
        }
        Some(b) => Some(b),
    }
}

impl ModeDefinition {
    /// Create a new empty mode definition
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            extensions: Vec::new(),
            patterns: Vec::new(),
            block: None,
        }
    }

    /// Add a file extension
    pub fn add_extension(&mut self, ext: &str) {
        self.extensions.push(ext.to_string());
    }

    /// Add a pattern rule
    pub fn add_pattern(&mut self, rule: PatternRule) {
        self.patterns.push(rule);
        // Keep sorted by priority (highest first)
        self.patterns.sort_by(|a, b| b.priority.cmp(&a.priority));
    }

    /// Set the block-comment rule
    pub fn set_block(&mut self, rule: BlockRule) {
        self.block = Some(rule);
    }

    /// Tokenize a single line of text
    ///
    /// Takes the line and the state carried from the previous line;
    /// returns the tokens covering the line and the state for the next
    /// line. Total over all inputs: malformed constructs degrade to
    /// well-defined tokens, never errors. Concatenating the token spans
    /// in order reproduces the line exactly.
    pub fn tokenize_line(&self, text: &str, state: LineState) -> TokenizedLine {
        let mut tokens = Vec::new();
        let mut pos = 0;
        let mut state = state;

        while pos < text.len() {
            if state.in_block_comment() {
                let Some(block) = self.block.as_ref() else {
                    // Stale carried state for a mode with no block construct
                    state = LineState::Normal;
                    continue;
                };
                match block.find_close(text, pos) {
                    Some(end) => {
                        tokens.push(Token::new(block.kind, pos, end));
                        pos = end;
                        state = LineState::Normal;
                    }
                    None => {
                        // Comment stays open past this line
                        tokens.push(Token::new(block.kind, pos, text.len()));
                        return TokenizedLine { tokens, end_state: state };
                    }
                }
                continue;
            }

            let Some(cand) = self.next_candidate(text, pos) else {
                // Nothing matches anywhere ahead: rest of line is plain text
                tokens.push(Token::new(TokenKind::Text, pos, text.len()));
                break;
            };

            if cand.start > pos {
                // Unmatched input up to the match becomes one plain-text token
                tokens.push(Token::new(TokenKind::Text, pos, cand.start));
            }

            match cand.action {
                Action::Emit(kind) => {
                    tokens.push(Token::new(kind, cand.start, cand.end));
                    pos = cand.end;
                }
                Action::OpenBlock(block) => match block.find_close(text, cand.end) {
                    Some(end) => {
                        tokens.push(Token::new(block.kind, cand.start, end));
                        pos = end;
                    }
                    None => {
                        tokens.push(Token::new(block.kind, cand.start, text.len()));
                        return TokenizedLine {
                            tokens,
                            end_state: LineState::InBlockComment,
                        };
                    }
                },
            }
        }

        TokenizedLine {
            tokens,
            end_state: state,
        }
    }

    /// Find the earliest rule match at or after `pos`
    fn next_candidate(&self, text: &str, pos: usize) -> Option<Candidate<'_>> {
        let mut best: Option<Candidate> = None;

        if let Some(block) = self.block.as_ref() {
            if let Some((start, end)) = block.find_open(text, pos) {
                best = prefer(
                    best,
                    Candidate {
                        start,
                        end,
                        priority: block.priority,
                        action: Action::OpenBlock(block),
                    },
                );
            }
        }

        for rule in &self.patterns {
            if let Some((start, end)) = rule.find_at(text, pos) {
                // A zero-length match cannot advance the scan
                if end == start {
                    continue;
                }
                let at_pos = start == pos;
                best = prefer(
                    best,
                    Candidate {
                        start,
                        end,
                        priority: rule.priority,
                        action: Action::Emit(rule.kind),
                    },
                );
                if at_pos {
                    // Patterns are priority-sorted; no later rule can win
                    break;
                }
            }
        }

        best
    }

    /// Completion hook for host editors
    ///
    /// Reserved extension point; the built-in modes offer no candidates.
    pub fn completions(&self, _state: LineState, _prefix: &str) -> Vec<Completion> {
        Vec::new()
    }
}
