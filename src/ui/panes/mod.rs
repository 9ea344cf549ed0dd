//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`history`]: Every submitted line with its renderings or error
//! - [`tokens`]: Token dump of the most recent line
//! - [`input`]: The editable input line
//! - [`status`]: Status bar with keybindings and the active strategy
//!
//! Each pane exports a stateless `render_*` function. Scroll offsets live in
//! [`crate::ui::App`] and are clamped while rendering.

pub mod history;
pub mod input;
pub mod status;
pub mod tokens;

pub use history::render_history_pane;
pub use input::render_input_line;
pub use status::render_status_bar;
pub use tokens::render_tokens_pane;

use crate::ui::theme::DEFAULT_THEME;
use ratatui::style::{Modifier, Style};

/// Border style for a pane, highlighted when focused.
fn border_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    }
}

/// Clamp `scroll_offset` so the last page stays full.
fn clamp_scroll(scroll_offset: &mut usize, total_items: usize, visible_height: usize) {
    if total_items > visible_height {
        let max_scroll = total_items - visible_height;
        *scroll_offset = (*scroll_offset).min(max_scroll);
    } else {
        *scroll_offset = 0;
    }
}
