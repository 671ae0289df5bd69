//! Mode registry
//!
//! This module provides the registry a host editor selects modes from,
//! plus per-document caching of line states and tokens so edits only
//! retokenize downstream lines.

use std::collections::HashMap;
use std::path::Path;

use super::builtin;
use super::mode::ModeDefinition;
use super::rules::LineState;
use super::tokens::Token;

/// Per-document highlighting cache
///
/// Lines must be highlighted in order the first time through: each line's
/// entry state is the previous line's cached end state.
pub struct HighlightCache {
    /// Mode id for this document (None if no highlighting)
    pub mode: Option<String>,
    /// Per-line end states (carried construct tracking)
    pub line_states: Vec<LineState>,
    /// Cached tokens per line (None = not computed)
    pub line_tokens: Vec<Option<Vec<Token>>>,
}

impl HighlightCache {
    /// Create a new empty cache
    pub fn new() -> Self {
        Self {
            mode: None,
            line_states: Vec::new(),
            line_tokens: Vec::new(),
        }
    }

    /// Set the mode for this document
    pub fn set_mode(&mut self, mode: Option<String>) {
        self.mode = mode;
        self.invalidate_all();
    }

    /// Invalidate cache from a specific line onwards (after an edit)
    pub fn invalidate_from(&mut self, line: usize) {
        for i in line..self.line_tokens.len() {
            self.line_tokens[i] = None;
        }
    }

    /// Invalidate entire cache
    pub fn invalidate_all(&mut self) {
        self.line_states.clear();
        self.line_tokens.clear();
    }

    /// Ensure cache vectors are large enough
    pub fn ensure_size(&mut self, line_count: usize) {
        if self.line_states.len() < line_count {
            self.line_states.resize(line_count, LineState::default());
        }
        if self.line_tokens.len() < line_count {
            self.line_tokens.resize(line_count, None);
        }
    }
}

impl Default for HighlightCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Registry of mode definitions and per-document caches
pub struct ModeRegistry {
    /// Registered modes by id
    modes: HashMap<String, ModeDefinition>,
    /// Extension to mode id mapping
    extension_map: HashMap<String, String>,
    /// Per-document caches (document index -> cache)
    caches: HashMap<usize, HighlightCache>,
    /// Whether syntax highlighting is enabled
    pub enabled: bool,
}

impl ModeRegistry {
    /// Create a new registry with the built-in modes
    pub fn new() -> Self {
        let mut registry = Self {
            modes: HashMap::new(),
            extension_map: HashMap::new(),
            caches: HashMap::new(),
            enabled: true,
        };

        for mode in builtin::all_modes() {
            registry.add_mode(mode);
        }

        registry
    }

    /// Register a mode definition
    pub fn add_mode(&mut self, mode: ModeDefinition) {
        let id = mode.id.clone();
        for ext in &mode.extensions {
            self.extension_map.insert(ext.to_lowercase(), id.clone());
        }
        self.modes.insert(id, mode);
    }

    /// Detect the mode for a file name, by extension
    pub fn detect_mode(&self, filename: &Path) -> Option<&str> {
        let ext = filename.extension()?.to_str()?.to_lowercase();
        self.extension_map.get(&ext).map(|s| s.as_str())
    }

    /// Get a mode definition by id
    pub fn get_mode(&self, id: &str) -> Option<&ModeDefinition> {
        self.modes.get(id)
    }

    /// Get or create a cache for a document
    pub fn get_cache(&mut self, doc: usize) -> &mut HighlightCache {
        self.caches.entry(doc).or_default()
    }

    /// Remove the cache for a document (when it is closed)
    pub fn remove_cache(&mut self, doc: usize) {
        self.caches.remove(&doc);
    }

    /// Set the mode for a document based on its file name
    pub fn set_document_mode(&mut self, doc: usize, filename: Option<&Path>) {
        let mode = filename
            .and_then(|f| self.detect_mode(f))
            .map(|s| s.to_string());
        self.get_cache(doc).set_mode(mode);
    }

    /// Invalidate a document's cache from a line onwards
    pub fn invalidate_from(&mut self, doc: usize, line: usize) {
        if let Some(cache) = self.caches.get_mut(&doc) {
            cache.invalidate_from(line);
        }
    }

    /// Tokenize one line of a document, using the cache when possible
    ///
    /// The entry state is line `line_idx - 1`'s cached end state, so the
    /// host must feed lines in order the first time through and after
    /// invalidation. Returns an empty vec when highlighting is disabled
    /// or the document has no mode.
    pub fn highlight_line(
        &mut self,
        doc: usize,
        line_idx: usize,
        text: &str,
        line_count: usize,
    ) -> Vec<Token> {
        if !self.enabled {
            return Vec::new();
        }

        let cache = self.caches.entry(doc).or_default();
        cache.ensure_size(line_count);

        let Some(mode_id) = cache.mode.clone() else {
            return Vec::new();
        };

        if let Some(tokens) = cache.line_tokens.get(line_idx).and_then(|t| t.as_ref()) {
            return tokens.clone();
        }

        let entry_state = if line_idx == 0 {
            LineState::default()
        } else {
            cache
                .line_states
                .get(line_idx - 1)
                .copied()
                .unwrap_or_default()
        };

        let Some(mode) = self.modes.get(&mode_id) else {
            return Vec::new();
        };
        let result = mode.tokenize_line(text, entry_state);

        let cache = self.caches.entry(doc).or_default();
        if line_idx < cache.line_states.len() {
            // A changed end state invalidates everything downstream
            if cache.line_states[line_idx] != result.end_state {
                cache.invalidate_from(line_idx + 1);
            }
            cache.line_states[line_idx] = result.end_state;
        }
        if line_idx < cache.line_tokens.len() {
            cache.line_tokens[line_idx] = Some(result.tokens.clone());
        }

        result.tokens
    }

    /// List registered mode ids
    pub fn list_modes(&self) -> Vec<&str> {
        let mut ids: Vec<_> = self.modes.keys().map(|s| s.as_str()).collect();
        ids.sort();
        ids
    }

    /// Toggle syntax highlighting on/off
    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
    }
}

impl Default for ModeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::TokenKind;

    #[test]
    fn test_detect_mode() {
        let registry = ModeRegistry::new();

        assert_eq!(registry.detect_mode(Path::new("escrow.btm")), Some("btm"));
        assert_eq!(registry.detect_mode(Path::new("ESCROW.BTM")), Some("btm"));
        assert_eq!(registry.detect_mode(Path::new("main.rs")), None);
        assert_eq!(registry.detect_mode(Path::new("no_extension")), None);
    }

    #[test]
    fn test_list_modes() {
        let registry = ModeRegistry::new();
        assert_eq!(registry.list_modes(), vec!["btm"]);
    }

    #[test]
    fn test_highlight_line() {
        let mut registry = ModeRegistry::new();
        registry.set_document_mode(0, Some(Path::new("test.btm")));

        let tokens = registry.highlight_line(0, 0, "transaction T {", 1);
        assert_eq!(tokens[0].kind, TokenKind::Keyword);
    }

    #[test]
    fn test_state_threads_across_lines() {
        let mut registry = ModeRegistry::new();
        registry.set_document_mode(0, Some(Path::new("test.btm")));

        let first = registry.highlight_line(0, 0, "/* open", 2);
        assert_eq!(first[0].kind, TokenKind::Comment);

        // Line 1 starts inside the comment opened on line 0
        let second = registry.highlight_line(0, 1, "transaction", 2);
        assert_eq!(second.len(), 1);
        assert_eq!(second[0].kind, TokenKind::Comment);
    }

    #[test]
    fn test_cache_invalidation() {
        let mut registry = ModeRegistry::new();
        registry.set_document_mode(0, Some(Path::new("test.btm")));

        let before = registry.highlight_line(0, 0, "put 1", 1);
        assert!(!before.is_empty());

        registry.invalidate_from(0, 0);
        let after = registry.highlight_line(0, 0, "put 2", 1);
        assert!(!after.is_empty());
        assert_eq!(after.len(), before.len());
    }

    #[test]
    fn test_no_mode_returns_nothing() {
        let mut registry = ModeRegistry::new();
        let tokens = registry.highlight_line(0, 0, "some text", 1);
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_disabled_returns_nothing() {
        let mut registry = ModeRegistry::new();
        registry.set_document_mode(0, Some(Path::new("test.btm")));
        registry.toggle();

        let tokens = registry.highlight_line(0, 0, "transaction", 1);
        assert!(tokens.is_empty());
        assert!(!registry.enabled);
    }

    #[test]
    fn test_remove_cache() {
        let mut registry = ModeRegistry::new();
        registry.set_document_mode(0, Some(Path::new("test.btm")));
        registry.remove_cache(0);

        // Document 0 no longer has a mode assigned
        let tokens = registry.highlight_line(0, 0, "transaction", 1);
        assert!(tokens.is_empty());
    }
}
