use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph};

use crate::file_selector::FileSelector;
use crate::layout::{centered, content_width, truncate_left, wrapped_height};
use crate::theme;

pub const SELECTOR_TITLE: &str = "Welcome 👋 please select file(s) to get started!";
pub const SELECTOR_HELP: &str = "↑/↓: Navigate • Space: Toggle • Enter: Confirm • q: Quit";

const MIN_PATH_WIDTH: usize = 20;

/// Draw the file picker.
pub fn draw(frame: &mut Frame, selector: &FileSelector) {
    let area = frame.area();
    let width = content_width(area.width);
    let inner_width = width.saturating_sub(6);

    let title = Paragraph::new(Line::styled(SELECTOR_TITLE, theme::title()))
        .alignment(Alignment::Center);
    let text = selector_text(selector, width);
    let list_height = wrapped_height(&text, inner_width).saturating_add(4);
    let outer = centered(area, width, list_height.saturating_add(4));
    let [title_area, list_area, help_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(outer);

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(theme::border())
        .padding(Padding::new(2, 2, 1, 1));

    frame.render_widget(title.block(Block::new().padding(Padding::vertical(1))), title_area);
    frame.render_widget(Paragraph::new(text).block(block), list_area);
    frame.render_widget(
        Paragraph::new(Line::styled(SELECTOR_HELP, theme::info())).alignment(Alignment::Center),
        help_area,
    );
}

fn selector_text(selector: &FileSelector, width: u16) -> Text<'static> {
    let max_path = usize::from(width).saturating_sub(10).max(MIN_PATH_WIDTH);
    let mut lines: Vec<Line<'static>> = Vec::new();

    let rows = selector.visible_rows();
    for index in rows.clone() {
        let Some(label) = selector.entry(index) else {
            continue;
        };
        let cursor = if index == selector.cursor() {
            Span::styled("❯", theme::cursor())
        } else {
            Span::raw(" ")
        };
        let (checkbox, style) = if selector.is_checked(index) {
            (Span::styled("☑", theme::checked()), theme::selected())
        } else {
            (Span::styled("☐", theme::unselected()), theme::unselected())
        };
        lines.push(Line::from(vec![
            cursor,
            Span::raw(" "),
            checkbox,
            Span::raw(" "),
            Span::styled(truncate_left(label, max_path), style),
        ]));
    }

    let total = selector.entry_count();
    if total > selector.max_visible() {
        lines.push(Line::default());
        lines.push(Line::styled(
            format!("(Showing {}-{} of {total} files)", rows.start + 1, rows.end),
            theme::info(),
        ));
    }

    let selected = selector.selected_files().len();
    if selected > 0 {
        lines.push(Line::default());
        lines.push(Line::styled(
            format!("Selected: {selected} file(s)"),
            theme::success(),
        ));
    }

    Text::from(lines)
}
