#![forbid(unsafe_code)]

//! Caption measurement: Unicode-aware word wrap against monospace metrics.
//!
//! The overlay needs one thing from text: given a caption and a maximum
//! width, the tight size of the wrapped block (the auto-sizing facility the
//! host label would otherwise provide). Widths are measured in cells
//! (CJK counts double), then scaled by [`FontMetrics`] into points.
//!
//! # Example
//! ```
//! use coachlight_scene::text::{FontMetrics, measure_wrapped, wrap_text};
//!
//! let lines = wrap_text("Hello world foo bar", 10);
//! assert_eq!(lines, vec!["Hello", "world foo", "bar"]);
//!
//! let size = measure_wrapped("Hello", FontMetrics::new(8.0, 18.0), 230.0);
//! assert_eq!((size.width, size.height), (40.0, 18.0));
//! ```

use coachlight_core::geometry::Size;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Monospace glyph metrics: horizontal advance per cell and line height,
/// both in points.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FontMetrics {
    pub advance: f32,
    pub line_height: f32,
}

impl FontMetrics {
    pub const fn new(advance: f32, line_height: f32) -> Self {
        Self {
            advance,
            line_height,
        }
    }
}

impl Default for FontMetrics {
    /// A 15-point-class UI font on a point grid.
    fn default() -> Self {
        Self::new(8.0, 18.0)
    }
}

/// Horizontal text alignment within a laid-out box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Display width of text in cells.
#[inline]
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Word-wrap text to a cell budget.
///
/// Explicit newlines are honored. A word wider than the whole budget gets a
/// line of its own rather than being broken mid-word.
///
/// A budget of zero disables wrapping.
pub fn wrap_text(text: &str, max_cols: usize) -> Vec<String> {
    if max_cols == 0 {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    for raw in text.split('\n') {
        let paragraph = raw.strip_suffix('\r').unwrap_or(raw);
        wrap_paragraph(paragraph, max_cols, &mut lines);
    }
    lines
}

fn wrap_paragraph(text: &str, max_cols: usize, lines: &mut Vec<String>) {
    let mut current = String::new();
    let mut width = 0usize;
    let len_before = lines.len();

    for word in text.split_word_bounds() {
        let word_width = display_width(word);

        // Never begin a line with inter-word whitespace.
        if current.is_empty() && word.trim().is_empty() {
            continue;
        }

        if width + word_width <= max_cols {
            current.push_str(word);
            width += word_width;
            continue;
        }

        if !current.is_empty() {
            lines.push(current.trim_end().to_string());
            current.clear();
            width = 0;
            // Whitespace that forced the wrap is the break itself.
            if word.trim().is_empty() {
                continue;
            }
        }

        if word_width > max_cols {
            lines.push(word.to_string());
            continue;
        }

        current.push_str(word);
        width += word_width;
    }

    if !current.is_empty() || lines.len() == len_before {
        lines.push(current.trim_end().to_string());
    }
}

/// Tight size of `text` wrapped to `max_width` points.
///
/// The width is the widest produced line, not the budget, matching a label
/// that shrinks to its content after wrapping.
pub fn measure_wrapped(text: &str, metrics: FontMetrics, max_width: f32) -> Size {
    let cols = if metrics.advance > 0.0 {
        ((max_width / metrics.advance).floor() as usize).max(1)
    } else {
        0
    };
    let lines = wrap_text(text, cols);
    let widest = lines.iter().map(|l| display_width(l)).max().unwrap_or(0);
    Size::new(
        widest as f32 * metrics.advance,
        lines.len() as f32 * metrics.line_height,
    )
}
