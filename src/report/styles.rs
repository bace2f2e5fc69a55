use crossterm::style::{Attribute, Color, ContentStyle};

use crate::model::FileStatus;

// Base colors
pub const FG_PRIMARY: Color = Color::White;
pub const FG_SECONDARY: Color = Color::Grey;
pub const FG_DIM: Color = Color::DarkGrey;

// Diff colors
pub const DIFF_ADD: Color = Color::Green;
pub const DIFF_DEL: Color = Color::Red;
pub const DIFF_HUNK_HEADER: Color = Color::Cyan;

// File status colors
pub const FILE_ADDED: Color = Color::Green;
pub const FILE_MODIFIED: Color = Color::Yellow;
pub const FILE_DELETED: Color = Color::Red;
pub const FILE_RENAMED: Color = Color::Magenta;

pub const ERROR: Color = Color::Red;
pub const SHA: Color = Color::Yellow;

fn fg(color: Color) -> ContentStyle {
    ContentStyle {
        foreground_color: Some(color),
        ..ContentStyle::default()
    }
}

fn bold(mut style: ContentStyle) -> ContentStyle {
    style.attributes.set(Attribute::Bold);
    style
}

// Styles
pub fn header_style() -> ContentStyle {
    bold(fg(FG_PRIMARY))
}

pub fn dim_style() -> ContentStyle {
    fg(FG_DIM)
}

pub fn sha_style() -> ContentStyle {
    fg(SHA)
}

pub fn error_style() -> ContentStyle {
    bold(fg(ERROR))
}

pub fn diff_add_style() -> ContentStyle {
    fg(DIFF_ADD)
}

pub fn diff_del_style() -> ContentStyle {
    fg(DIFF_DEL)
}

pub fn diff_hunk_header_style() -> ContentStyle {
    bold(fg(DIFF_HUNK_HEADER))
}

pub fn file_header_style() -> ContentStyle {
    bold(fg(FG_PRIMARY))
}

pub fn file_status_style(status: FileStatus) -> ContentStyle {
    let color = match status.as_char() {
        'A' => FILE_ADDED,
        'M' => FILE_MODIFIED,
        'D' => FILE_DELETED,
        'R' | 'C' => FILE_RENAMED,
        _ => FG_SECONDARY,
    };
    fg(color)
}

/// Style for a single line of a unified diff, keyed on its first byte.
pub fn diff_line_style(line: &str) -> Option<ContentStyle> {
    if line.starts_with("@@") {
        Some(diff_hunk_header_style())
    } else if line.starts_with('+') {
        Some(diff_add_style())
    } else if line.starts_with('-') {
        Some(diff_del_style())
    } else {
        None
    }
}

/// Applies styles only when colour output is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn plain() -> Self {
        Self { enabled: false }
    }

    pub fn colored() -> Self {
        Self { enabled: true }
    }

    pub fn paint(&self, style: ContentStyle, text: &str) -> String {
        if self.enabled {
            style.apply(text).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn paint_patch(&self, patch: &str) -> String {
        if !self.enabled {
            return patch.to_string();
        }
        patch
            .split('\n')
            .map(|line| match diff_line_style(line) {
                Some(style) => style.apply(line).to_string(),
                None => line.to_string(),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
