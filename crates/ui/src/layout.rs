//! Sizing helpers shared by every screen.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span, Text};

use crate::theme::MAX_CONTENT_WIDTH;

/// Width of the left and right bottom-bar cells.
const BAR_SIDE_WIDTH: usize = 10;

/// Frame width for a terminal `terminal_width` columns wide.
#[must_use]
pub fn content_width(terminal_width: u16) -> u16 {
    terminal_width.min(MAX_CONTENT_WIDTH)
}

/// A `width` x `height` rectangle centered in `area`, shrunk to fit.
#[must_use]
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Rows `text` occupies when wrapped at `width` columns.
#[must_use]
pub fn wrapped_height(text: &Text<'_>, width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let rows: usize = text
        .lines
        .iter()
        .map(|line| line.width().div_ceil(width).max(1))
        .sum();
    u16::try_from(rows).unwrap_or(u16::MAX)
}

/// Three-cell status bar: left-aligned, centered and right-aligned text.
#[must_use]
pub fn bottom_bar(width: u16, left: String, center: String, right: String) -> Line<'static> {
    let inner = usize::from(width.saturating_sub(4));
    let side = BAR_SIDE_WIDTH.min(inner / 2);
    let middle = inner.saturating_sub(side * 2);

    let left_width = Span::raw(left.as_str()).width();
    let center_width = Span::raw(center.as_str()).width();
    let right_width = Span::raw(right.as_str()).width();

    let center_gap = middle.saturating_sub(center_width);
    let center_lead = center_gap / 2;

    Line::from(vec![
        Span::raw(left),
        Span::raw(" ".repeat(side.saturating_sub(left_width) + center_lead)),
        Span::raw(center),
        Span::raw(" ".repeat(center_gap - center_lead + side.saturating_sub(right_width))),
        Span::raw(right),
    ])
}

/// Shorten `path` from the left so it fits `max_width` columns.
#[must_use]
pub fn truncate_left(path: &str, max_width: usize) -> String {
    let chars: Vec<char> = path.chars().collect();
    if chars.len() <= max_width {
        return path.to_owned();
    }
    let keep = max_width.saturating_sub(3);
    let tail: String = chars[chars.len() - keep..].iter().collect();
    format!("...{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_width_is_capped() {
        assert_eq!(content_width(200), MAX_CONTENT_WIDTH);
        assert_eq!(content_width(40), 40);
    }

    #[test]
    fn centered_fits_inside_area() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(centered(area, 80, 10), Rect::new(10, 15, 80, 10));
        assert_eq!(centered(area, 120, 50), area);
    }

    #[test]
    fn wrapped_height_counts_wrapped_rows() {
        let text = Text::from(vec![Line::from("abcdefghij"), Line::from("")]);
        assert_eq!(wrapped_height(&text, 4), 4);
        assert_eq!(wrapped_height(&text, 20), 2);
    }

    #[test]
    fn bottom_bar_spans_inner_width() {
        let line = bottom_bar(80, "L".into(), "1/2".into(), "R".into());
        assert_eq!(line.width(), 76);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.starts_with('L'));
        assert!(text.ends_with('R'));
        assert!(text.contains("1/2"));
    }

    #[test]
    fn long_paths_keep_their_tail() {
        assert_eq!(truncate_left("short.md", 20), "short.md");
        assert_eq!(truncate_left("a/very/long/path/notes.md", 12), ".../notes.md");
    }
}
