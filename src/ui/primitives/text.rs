use std::fmt;

use crossterm::style::Stylize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemanticColor {
    Error,
    Warning,
    Dim,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColoredText {
    text: String,
    color: Option<SemanticColor>,
    bold: bool,
}

impl ColoredText {
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: Some(SemanticColor::Error),
            bold: false,
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: Some(SemanticColor::Warning),
            bold: false,
        }
    }

    pub fn dim(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: Some(SemanticColor::Dim),
            bold: false,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn render(&self, supports_color: bool) -> String {
        if !supports_color {
            return self.text.clone();
        }

        let Some(color) = self.color else {
            if self.bold {
                return format!("{}", self.text.as_str().bold());
            }
            return self.text.clone();
        };

        let mut styled = match color {
            SemanticColor::Error => self.text.as_str().with(theme::colors::ERROR),
            SemanticColor::Warning => self.text.as_str().with(theme::colors::WARNING),
            SemanticColor::Dim => self.text.as_str().with(theme::colors::DIM),
        };

        if self.bold {
            styled = styled.bold();
        }

        format!("{}", styled)
    }
}

impl fmt::Display for ColoredText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Cut `text` to at most `max_width` display columns, ending with `…`.
pub fn truncate_end(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}
