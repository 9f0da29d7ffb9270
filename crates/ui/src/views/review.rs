use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Wrap};

use crate::layout::{bottom_bar, centered, content_width, wrapped_height};
use crate::theme;
use crate::vm::{ReviewScreen, ReviewVm, progress_bar};

pub const REVIEW_HELP: &str = "Enter: Confirm • q: Quit";
pub const JUDGE_PROMPT: &str = "Was your answer correct? [c]orrect / [i]ncorrect";
pub const REVISIT_PROMPT: &str = "Revisit in (days): [1]  [3]  [7]  [9]";
pub const GOODBYE: &str = "Goodbye!";

/// Draw the review screen for `vm`.
pub fn draw(frame: &mut Frame, vm: &ReviewVm) {
    let area = frame.area();
    if matches!(vm.screen, ReviewScreen::Goodbye) {
        frame.render_widget(Paragraph::new(GOODBYE), area);
        return;
    }

    let width = content_width(area.width);
    let inner_width = width.saturating_sub(4);
    let text = review_text(vm, width);
    let card_height = wrapped_height(&text, inner_width).saturating_add(4);
    let outer = centered(area, width, card_height.saturating_add(1));
    let [card_area, help_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(outer);

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(theme::border())
        .padding(Padding::uniform(1));
    frame.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false })
            .block(block),
        card_area,
    );
    frame.render_widget(
        Paragraph::new(Line::styled(REVIEW_HELP, theme::info())).alignment(Alignment::Center),
        help_area,
    );
}

fn push_body(lines: &mut Vec<Line<'static>>, body: &str) {
    lines.extend(body.lines().map(|l| Line::from(l.to_owned())));
}

fn review_text(vm: &ReviewVm, width: u16) -> Text<'static> {
    let inner_width = width.saturating_sub(4);
    let mut lines: Vec<Line<'static>> = Vec::new();

    match &vm.screen {
        ReviewScreen::Question {
            text,
            progress,
            remaining_secs,
        } => {
            lines.push(Line::styled("Question:", theme::question()));
            lines.push(Line::default());
            push_body(&mut lines, text);
            lines.push(Line::default());
            let clock = format!(" {remaining_secs:>2}s");
            let bar_width = inner_width.saturating_sub(u16::try_from(clock.len()).unwrap_or(0));
            let (filled, empty) = progress_bar(*progress, bar_width);
            lines.push(Line::from(vec![
                Span::styled(filled, theme::progress()),
                Span::styled(empty, theme::unselected()),
                Span::styled(clock, theme::info()),
            ]));
        }
        ReviewScreen::Answer { text } => {
            lines.push(Line::styled("Answer:", theme::answer()));
            lines.push(Line::default());
            push_body(&mut lines, text);
            lines.push(Line::default());
            lines.push(Line::styled(JUDGE_PROMPT, theme::info()));
        }
        ReviewScreen::RevisitChoice { status } => {
            lines.push(Line::default());
            lines.push(Line::styled(REVISIT_PROMPT, theme::info()));
            if let Some(status) = status {
                lines.push(Line::from(status.clone()));
            }
        }
        ReviewScreen::Done { message, status } => {
            lines.push(Line::default());
            lines.push(Line::styled(message.clone(), theme::success()));
            if let Some(status) = status {
                lines.push(Line::styled(status.clone(), theme::info()));
            }
        }
        ReviewScreen::Goodbye => {}
    }

    lines.push(Line::default());
    lines.push(bottom_bar(
        width,
        vm.bar.left(),
        vm.bar.center(),
        vm.bar.right(),
    ));
    Text::from(lines)
}
