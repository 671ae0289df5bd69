//! Terminal rendering of tokenized lines
//!
//! Translates token styles to crossterm commands and writes highlighted
//! lines to any output. Tabs are expanded to fixed stops using display
//! widths so multi-column characters keep the expansion aligned.

use std::io::Write;

use crossterm::{
    queue,
    style::{Attribute, Print, SetAttribute, SetBackgroundColor, SetForegroundColor},
};

use super::error::Result;
use super::style::{Color, Style};
use super::theme::Theme;
use super::tokens::Token;

/// Map a palette color to the crossterm ANSI color
fn term_color(color: Color) -> crossterm::style::Color {
    use crossterm::style::Color as Term;
    match color {
        Color::Default => Term::Reset,
        Color::Black => Term::Black,
        Color::Red => Term::DarkRed,
        Color::Green => Term::DarkGreen,
        Color::Yellow => Term::DarkYellow,
        Color::Blue => Term::DarkBlue,
        Color::Magenta => Term::DarkMagenta,
        Color::Cyan => Term::DarkCyan,
        Color::White => Term::Grey,
        Color::BrightBlack => Term::DarkGrey,
        Color::BrightRed => Term::Red,
        Color::BrightGreen => Term::Green,
        Color::BrightYellow => Term::Yellow,
        Color::BrightBlue => Term::Blue,
        Color::BrightMagenta => Term::Magenta,
        Color::BrightCyan => Term::Cyan,
        Color::BrightWhite => Term::White,
    }
}

/// Calculate the width of a line-number gutter (including separator)
pub fn gutter_width(line_count: usize) -> usize {
    let mut digits = 1;
    let mut n = line_count;
    while n >= 10 {
        digits += 1;
        n /= 10;
    }
    digits.max(3) + 1
}

/// Writes highlighted lines to a terminal or plain sink
pub struct Renderer {
    theme: Theme,
    /// Emit ANSI styling; off for plain text output
    color: bool,
    /// Tab stop width for display
    tab_width: usize,
}

impl Renderer {
    /// Create a renderer with ANSI styling enabled
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            color: true,
            tab_width: 8,
        }
    }

    /// Builder: enable or disable ANSI styling
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Builder: set the tab stop width
    pub fn with_tab_width(mut self, width: usize) -> Self {
        self.tab_width = width.clamp(1, 16);
        self
    }

    /// Write one line's tokens, styled, without a trailing newline
    pub fn render_line<W: Write>(&self, out: &mut W, line: &str, tokens: &[Token]) -> Result<()> {
        let mut col = 0;
        for token in tokens {
            let text = self.expand_tabs(token.text(line), &mut col);
            let style = self.theme.style(token.kind);
            if self.color && !style.is_default() {
                self.queue_style(out, style)?;
                queue!(out, Print(&text))?;
                queue!(out, SetAttribute(Attribute::Reset))?;
            } else {
                queue!(out, Print(&text))?;
            }
        }
        Ok(())
    }

    /// Write a line-number gutter cell
    pub fn render_gutter<W: Write>(&self, out: &mut W, line_no: usize, width: usize) -> Result<()> {
        let cell = format!("{:>digits$} ", line_no, digits = width.saturating_sub(1));
        if self.color {
            queue!(out, SetAttribute(Attribute::Dim))?;
            queue!(out, Print(&cell))?;
            queue!(out, SetAttribute(Attribute::Reset))?;
        } else {
            queue!(out, Print(&cell))?;
        }
        Ok(())
    }

    /// Expand tabs to the next stop, tracking the display column
    fn expand_tabs(&self, text: &str, col: &mut usize) -> String {
        let mut out = String::with_capacity(text.len());
        for ch in text.chars() {
            if ch == '\t' {
                let next = (*col / self.tab_width + 1) * self.tab_width;
                while *col < next {
                    out.push(' ');
                    *col += 1;
                }
            } else {
                out.push(ch);
                *col += unicode_width::UnicodeWidthChar::width(ch).unwrap_or(1);
            }
        }
        out
    }

    fn queue_style<W: Write>(&self, out: &mut W, style: Style) -> Result<()> {
        if style.fg != Color::Default {
            queue!(out, SetForegroundColor(term_color(style.fg)))?;
        }
        if style.bg != Color::Default {
            queue!(out, SetBackgroundColor(term_color(style.bg)))?;
        }
        if style.bold {
            queue!(out, SetAttribute(Attribute::Bold))?;
        }
        if style.italic {
            queue!(out, SetAttribute(Attribute::Italic))?;
        }
        if style.underline {
            queue!(out, SetAttribute(Attribute::Underlined))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::TokenKind;

    fn render_plain(line: &str, tokens: &[Token]) -> String {
        let renderer = Renderer::new(Theme::new()).with_color(false);
        let mut out = Vec::new();
        renderer.render_line(&mut out, line, tokens).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_gutter_width() {
        assert_eq!(gutter_width(0), 4);
        assert_eq!(gutter_width(99), 4);
        assert_eq!(gutter_width(1000), 5);
        assert_eq!(gutter_width(43210), 6);
    }

    #[test]
    fn test_plain_render_reproduces_line() {
        let line = "put 42";
        let tokens = [
            Token::new(TokenKind::Keyword, 0, 3),
            Token::new(TokenKind::Text, 3, 4),
            Token::new(TokenKind::Number, 4, 6),
        ];
        assert_eq!(render_plain(line, &tokens), "put 42");
    }

    #[test]
    fn test_tab_expansion() {
        let line = "a\tb";
        let tokens = [Token::new(TokenKind::Text, 0, 3)];
        assert_eq!(render_plain(line, &tokens), "a       b");
    }

    #[test]
    fn test_styled_render_emits_escapes() {
        let renderer = Renderer::new(Theme::new());
        let line = "put";
        let tokens = [Token::new(TokenKind::Keyword, 0, 3)];
        let mut out = Vec::new();
        renderer.render_line(&mut out, line, &tokens).unwrap();
        let rendered = String::from_utf8(out).unwrap();
        assert!(rendered.contains("put"));
        assert!(rendered.contains('\x1b'));
    }

    #[test]
    fn test_default_style_tokens_stay_plain() {
        let renderer = Renderer::new(Theme::new());
        let line = "plain";
        let tokens = [Token::new(TokenKind::Text, 0, 5)];
        let mut out = Vec::new();
        renderer.render_line(&mut out, line, &tokens).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "plain");
    }
}
