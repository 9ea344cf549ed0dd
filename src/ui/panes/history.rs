//! History pane rendering
//!
//! Shows every submitted line, newest last. A recognized line is followed
//! by the notation that accepted it, its three renderings with connective
//! highlighting, and the variables it mentions. A rejected line is followed
//! by its error.

use super::{border_style, clamp_scroll};
use crate::session::Analysis;
use crate::ui::theme::DEFAULT_THEME;
use crate::Notation;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

/// Style for one word of printer output.
fn word_style(word: &str) -> Style {
    match word {
        "∧" | "∨" | "¬" | "->" | "<->" => Style::default()
            .fg(DEFAULT_THEME.connective)
            .add_modifier(Modifier::BOLD),
        "true" | "false" => Style::default().fg(DEFAULT_THEME.constant),
        "(" | ")" => Style::default().fg(DEFAULT_THEME.comment),
        _ => Style::default().fg(DEFAULT_THEME.variable),
    }
}

/// Highlight a rendering produced by the printer.
fn highlight_rendering(text: &str) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    for (i, word) in text.split_whitespace().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(word.to_string(), word_style(word)));
    }
    spans
}

fn label(text: &str) -> Span<'static> {
    Span::styled(
        format!("    {:<10}", text),
        Style::default().fg(DEFAULT_THEME.comment),
    )
}

/// Lines shown for one analyzed input.
fn analysis_lines(analysis: &Analysis) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(vec![
        Span::styled(
            "> ",
            Style::default()
                .fg(DEFAULT_THEME.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(analysis.input.clone(), Style::default().fg(DEFAULT_THEME.fg)),
        Span::styled(
            format!("  [{}]", analysis.strategy),
            Style::default().fg(DEFAULT_THEME.comment),
        ),
    ])];

    match &analysis.outcome {
        Ok(parsed) => {
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(
                    format!("✓ {} expression", parsed.notation),
                    Style::default().fg(DEFAULT_THEME.success),
                ),
            ]));
            for notation in Notation::ALL {
                let mut spans = vec![label(&format!("{}:", notation))];
                spans.extend(highlight_rendering(parsed.rendering(notation)));
                lines.push(Line::from(spans));
            }
            let variables = if parsed.variables.is_empty() {
                "(none)".to_string()
            } else {
                parsed.variables.join(", ")
            };
            lines.push(Line::from(vec![
                label("Variables:"),
                Span::styled(variables, Style::default().fg(DEFAULT_THEME.variable)),
            ]));
        }
        Err(err) => {
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(
                    format!("✗ {}", err),
                    Style::default().fg(DEFAULT_THEME.error),
                ),
            ]));
        }
    }

    lines.push(Line::default());
    lines
}

/// Render the history pane
pub fn render_history_pane(
    frame: &mut Frame,
    area: Rect,
    history: &[Analysis],
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(" History ")
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    if history.is_empty() {
        let paragraph = Paragraph::new("(no expressions yet)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let all_items: Vec<ListItem> = history
        .iter()
        .flat_map(analysis_lines)
        .map(ListItem::new)
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
