//! Syntax highlighting for the BTM transaction modeling language
//!
//! The core is a finite-state line tokenizer: `tokenize_line` turns one
//! line of source plus the lexical state carried from the previous line
//! into an ordered, gap-free token sequence and the state for the next
//! line. A host editor threads the state forward line by line and renders
//! the tokens; the tokenizer itself is pure and never fails.
//!
//! ```
//! use btm_syntax::{LineState, ModeRegistry, TokenKind};
//!
//! let registry = ModeRegistry::new();
//! let mode = registry.get_mode("btm").unwrap();
//! let result = mode.tokenize_line("transaction T { /* pending", LineState::default());
//! assert_eq!(result.tokens[0].kind, TokenKind::Keyword);
//! assert!(result.end_state.in_block_comment());
//! ```

mod builtin;
mod error;
mod mode;
mod registry;
mod render;
mod rules;
mod style;
mod theme;
mod tokens;

pub use error::{HighlightError, Result};
pub use mode::{Completion, ModeDefinition};
pub use registry::{HighlightCache, ModeRegistry};
pub use render::{gutter_width, Renderer};
pub use rules::{BlockRule, LineState, PatternRule, TokenizedLine};
pub use style::{Color, Style};
pub use theme::Theme;
pub use tokens::{Token, TokenKind};
