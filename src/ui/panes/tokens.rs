//! Token pane rendering
//!
//! Dumps the tokens of the most recent line, one per row, with their kind
//! and constant value. When parsing failed at a specific token, that row is
//! marked.

use super::{border_style, clamp_scroll};
use crate::error::Error;
use crate::parser::{Token, TokenKind};
use crate::session::Analysis;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

/// Token index where the latest parse failed, if it names one.
fn failure_position(analysis: &Analysis) -> Option<usize> {
    match &analysis.outcome {
        Err(Error::Parse(err)) => err.position(),
        _ => None,
    }
}

fn kind_style(kind: TokenKind) -> Style {
    match kind {
        TokenKind::True | TokenKind::False => Style::default().fg(DEFAULT_THEME.constant),
        TokenKind::Variable => Style::default().fg(DEFAULT_THEME.variable),
        TokenKind::LeftParen | TokenKind::RightParen => {
            Style::default().fg(DEFAULT_THEME.comment)
        }
        _ => Style::default().fg(DEFAULT_THEME.connective),
    }
}

fn token_line(index: usize, token: &Token, is_failure: bool) -> Line<'static> {
    let marker = if is_failure { "▶" } else { " " };
    let value = match token.value() {
        Some(value) => value.to_string(),
        None => String::new(),
    };

    let line = Line::from(vec![
        Span::styled(
            format!("{}{:>3} ", marker, index),
            Style::default().fg(DEFAULT_THEME.comment),
        ),
        Span::styled(format!("{:<8}", token.text()), kind_style(token.kind())),
        Span::styled(
            format!("{:<11}", format!("{:?}", token.kind())),
            Style::default().fg(DEFAULT_THEME.fg),
        ),
        Span::styled(value, Style::default().fg(DEFAULT_THEME.constant)),
    ]);

    if is_failure {
        line.style(
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        line
    }
}

/// Render the token pane for the latest analysis
pub fn render_tokens_pane(
    frame: &mut Frame,
    area: Rect,
    latest: Option<&Analysis>,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(" Tokens ")
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let Some(analysis) = latest else {
        let paragraph = Paragraph::new("(no tokens)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    };

    let Some(stream) = &analysis.tokens else {
        // Lexing failed; the history pane carries the message
        let paragraph = Paragraph::new("(lexical analysis failed)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.error));
        frame.render_widget(paragraph, area);
        return;
    };

    let failure = failure_position(analysis);
    let block = block.padding(Padding::new(1, 0, 0, 0));
    let all_items: Vec<ListItem> = stream
        .tokens()
        .iter()
        .enumerate()
        .map(|(i, token)| ListItem::new(token_line(i, token, failure == Some(i))))
        .collect();

    let total_items = all_items.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    clamp_scroll(scroll_offset, total_items, visible_height);

    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    frame.render_widget(List::new(visible_items).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{analyze, Strategy};

    #[test]
    fn test_failure_position() {
        assert_eq!(failure_position(&analyze("P Q ∧", Strategy::Auto)), None);
        assert_eq!(
            failure_position(&analyze("P ∧", Strategy::Postfix)),
            Some(1)
        );
        assert_eq!(failure_position(&analyze("P And Q", Strategy::Auto)), None);
    }

    #[test]
    fn test_token_line_columns() {
        let token = Token::new("T", TokenKind::True, 1);
        let text: String = token_line(0, &token, false)
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect();
        assert_eq!(text, "   0 T       True       true");
    }
}
