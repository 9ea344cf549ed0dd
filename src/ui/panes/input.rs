//! Input line rendering

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const PROMPT: &str = "> ";

/// Terminal column for the cursor, kept inside the border.
fn cursor_x(area: Rect, cursor: usize) -> u16 {
    let max_x = area.x.saturating_add(area.width.saturating_sub(2));
    let x = usize::from(area.x) + 1 + PROMPT.chars().count() + cursor;
    u16::try_from(x).map_or(max_x, |x| x.min(max_x))
}

/// Render the input line and place the terminal cursor at `cursor` (in chars).
pub fn render_input_line(frame: &mut Frame, area: Rect, input: &str, cursor: usize) {
    let block = Block::default()
        .title(" Expression ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.primary));

    let line = Line::from(vec![
        Span::styled(
            PROMPT,
            Style::default()
                .fg(DEFAULT_THEME.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(input.to_string(), Style::default().fg(DEFAULT_THEME.fg)),
    ]);

    frame.render_widget(Paragraph::new(line).block(block), area);

    // Inside the border, after the prompt
    frame.set_cursor_position(Position::new(cursor_x(area, cursor), area.y.saturating_add(1)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_after_prompt() {
        let area = Rect::new(0, 10, 40, 3);
        assert_eq!(cursor_x(area, 0), 3);
        assert_eq!(cursor_x(area, 5), 8);
    }

    #[test]
    fn test_cursor_clamped_to_border() {
        let area = Rect::new(4, 0, 40, 3);
        assert_eq!(cursor_x(area, 1_000), 42);
        assert_eq!(cursor_x(area, usize::from(u16::MAX) + 7), 42);
    }
}
