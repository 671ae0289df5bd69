//! Theme files
//!
//! A theme overrides the default style of any token kind. Themes are TOML
//! files with a `[tokens]` table; each entry names a kind and gives color
//! and attribute overrides:
//!
//! ```toml
//! [tokens]
//! keyword = { fg = "magenta", bold = true }
//! comment = { fg = "bright-black", italic = true }
//! string = { fg = "green" }
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use toml::Value;

use super::error::{HighlightError, Result};
use super::style::{Color, Style};
use super::tokens::TokenKind;

/// Styles for each token kind
#[derive(Debug, Clone)]
pub struct Theme {
    styles: HashMap<TokenKind, Style>,
}

impl Theme {
    /// Create a theme with the default style for every kind
    pub fn new() -> Self {
        let mut styles = HashMap::new();
        for kind in TokenKind::all() {
            styles.insert(kind, kind.default_style());
        }
        Self { styles }
    }

    /// Get the style for a token kind
    pub fn style(&self, kind: TokenKind) -> Style {
        self.styles
            .get(&kind)
            .copied()
            .unwrap_or_else(|| kind.default_style())
    }

    /// Override the style for a token kind
    pub fn set(&mut self, kind: TokenKind, style: Style) {
        self.styles.insert(kind, style);
    }

    /// Load a theme file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse theme file contents
    ///
    /// Entries merge onto the kind's default style, so a theme only
    /// names what it changes.
    pub fn parse(contents: &str) -> Result<Self> {
        let table: toml::Table = contents.parse()?;
        let mut theme = Self::new();

        let Some(tokens) = table.get("tokens") else {
            return Ok(theme);
        };
        let Some(tokens) = tokens.as_table() else {
            return Ok(theme);
        };

        for (name, value) in tokens {
            let kind = TokenKind::from_name(name)
                .ok_or_else(|| HighlightError::UnknownToken(name.clone()))?;
            let mut style = kind.default_style();
            apply_overrides(&mut style, value)?;
            theme.set(kind, style);
        }

        Ok(theme)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

/// Apply one theme entry's overrides to a style
fn apply_overrides(style: &mut Style, value: &Value) -> Result<()> {
    let Some(entry) = value.as_table() else {
        return Ok(());
    };

    if let Some(name) = entry.get("fg").and_then(|v| v.as_str()) {
        style.fg =
            Color::from_name(name).ok_or_else(|| HighlightError::UnknownColor(name.to_string()))?;
    }
    if let Some(name) = entry.get("bg").and_then(|v| v.as_str()) {
        style.bg =
            Color::from_name(name).ok_or_else(|| HighlightError::UnknownColor(name.to_string()))?;
    }
    if let Some(flag) = entry.get("bold").and_then(|v| v.as_bool()) {
        style.bold = flag;
    }
    if let Some(flag) = entry.get("italic").and_then(|v| v.as_bool()) {
        style.italic = flag;
    }
    if let Some(flag) = entry.get("underline").and_then(|v| v.as_bool()) {
        style.underline = flag;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme() {
        let theme = Theme::new();
        assert_eq!(
            theme.style(TokenKind::Keyword),
            TokenKind::Keyword.default_style()
        );
        assert!(theme.style(TokenKind::Text).is_default());
    }

    #[test]
    fn test_parse_overrides() {
        let theme = Theme::parse(
            r#"
[tokens]
keyword = { fg = "yellow", bold = false }
string = { underline = true }
"#,
        )
        .unwrap();

        let keyword = theme.style(TokenKind::Keyword);
        assert_eq!(keyword.fg, Color::Yellow);
        assert!(!keyword.bold);

        // Unnamed fields keep the default
        let string = theme.style(TokenKind::String);
        assert_eq!(string.fg, Color::Green);
        assert!(string.underline);

        // Unnamed kinds keep their defaults entirely
        assert_eq!(
            theme.style(TokenKind::Comment),
            TokenKind::Comment.default_style()
        );
    }

    #[test]
    fn test_parse_empty() {
        let theme = Theme::parse("").unwrap();
        assert_eq!(
            theme.style(TokenKind::Number),
            TokenKind::Number.default_style()
        );
    }

    #[test]
    fn test_unknown_token_name() {
        let result = Theme::parse("[tokens]\nmacro = { fg = \"red\" }\n");
        assert!(matches!(result, Err(HighlightError::UnknownToken(_))));
    }

    #[test]
    fn test_unknown_color_name() {
        let result = Theme::parse("[tokens]\nkeyword = { fg = \"chartreuse\" }\n");
        assert!(matches!(result, Err(HighlightError::UnknownColor(_))));
    }

    #[test]
    fn test_invalid_toml() {
        let result = Theme::parse("[tokens\n");
        assert!(matches!(result, Err(HighlightError::ThemeParse(_))));
    }
}
