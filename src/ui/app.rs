//! Main TUI application state and logic

use crate::session::{Analysis, Session};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;

/// Which pane is currently focused for scrolling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    History,
    Tokens,
}

impl FocusedPane {
    pub fn next(self) -> Self {
        match self {
            FocusedPane::History => FocusedPane::Tokens,
            FocusedPane::Tokens => FocusedPane::History,
        }
    }
}

/// The main application state
pub struct App {
    /// The analysis session behind the REPL
    pub session: Session,

    /// Text typed on the input line
    pub input: String,

    /// Cursor position in the input line, in characters
    pub cursor: usize,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub history_scroll: usize,
    pub tokens_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    pub fn new(session: Session) -> Self {
        App {
            session,
            input: String::new(),
            cursor: 0,
            focused_pane: FocusedPane::History,
            history_scroll: 0,
            tokens_scroll: 0,
            should_quit: false,
            status_message: String::from("Enter a logical expression (infix, prefix or postfix)"),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key_event(key);
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Panes on top, then the input line and the status bar
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(main_chunks[0]);

        super::panes::render_history_pane(
            frame,
            columns[0],
            self.session.history(),
            self.focused_pane == FocusedPane::History,
            &mut self.history_scroll,
        );

        super::panes::render_tokens_pane(
            frame,
            columns[1],
            self.session.latest(),
            self.focused_pane == FocusedPane::Tokens,
            &mut self.tokens_scroll,
        );

        super::panes::render_input_line(frame, main_chunks[1], &self.input, self.cursor);

        super::panes::render_status_bar(
            frame,
            main_chunks[2],
            &self.status_message,
            self.session.strategy(),
            self.session.history().len(),
            self.session.latest().map(Analysis::is_ok),
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.session.clear();
                self.history_scroll = 0;
                self.tokens_scroll = 0;
                self.status_message = "History cleared".to_string();
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Tab => {
                let strategy = self.session.cycle_strategy();
                self.status_message = format!("Strategy: {}", strategy);
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::History => {
                    self.history_scroll = self.history_scroll.saturating_sub(1);
                }
                FocusedPane::Tokens => {
                    self.tokens_scroll = self.tokens_scroll.saturating_sub(1);
                }
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::History => {
                    self.history_scroll = self.history_scroll.saturating_add(1);
                }
                FocusedPane::Tokens => {
                    self.tokens_scroll = self.tokens_scroll.saturating_add(1);
                }
            },
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(self.input.chars().count());
            }
            KeyCode::Home => {
                self.cursor = 0;
            }
            KeyCode::End => {
                self.cursor = self.input.chars().count();
            }
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    let at = self.byte_index();
                    self.input.remove(at);
                }
            }
            KeyCode::Delete => {
                if self.cursor < self.input.chars().count() {
                    let at = self.byte_index();
                    self.input.remove(at);
                }
            }
            KeyCode::Char(c) => {
                let at = self.byte_index();
                self.input.insert(at, c);
                self.cursor += 1;
            }
            _ => {}
        }
    }

    /// Byte offset of the cursor in `input`
    fn byte_index(&self) -> usize {
        self.input
            .char_indices()
            .nth(self.cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.input.len())
    }

    /// Analyze the input line and record it in the session
    fn submit(&mut self) {
        if self.input.trim().is_empty() {
            self.status_message = "Nothing to parse".to_string();
            return;
        }

        let analysis = self.session.submit(&self.input);
        self.status_message = match &analysis.outcome {
            Ok(parsed) => format!("Parsed as {} expression", parsed.notation),
            Err(err) => err.to_string(),
        };

        self.input.clear();
        self.cursor = 0;
        // Auto-scroll history to bottom; clamped when rendering
        self.history_scroll = usize::MAX;
        self.tokens_scroll = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Strategy;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_submit_records_analysis() {
        let mut app = App::new(Session::new(Strategy::Auto));
        type_str(&mut app, "P And Q");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.session.history().len(), 1);
        assert!(app.input.is_empty());
        assert_eq!(app.status_message, "Parsed as Infix expression");
    }

    #[test]
    fn test_blank_input_is_not_submitted() {
        let mut app = App::new(Session::new(Strategy::Auto));
        type_str(&mut app, "   ");
        press(&mut app, KeyCode::Enter);
        assert!(app.session.history().is_empty());
    }

    #[test]
    fn test_line_editing_with_glyphs() {
        let mut app = App::new(Session::new(Strategy::Auto));
        type_str(&mut app, "P ∧ Q");
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.input, "P  Q");

        press(&mut app, KeyCode::Home);
        press(&mut app, KeyCode::Delete);
        type_str(&mut app, "R");
        assert_eq!(app.input, "R  Q");
    }

    #[test]
    fn test_ctrl_l_clears_history() {
        let mut app = App::new(Session::new(Strategy::Auto));
        type_str(&mut app, "P Or Q");
        press(&mut app, KeyCode::Enter);
        type_str(&mut app, "R");

        app.handle_key_event(KeyEvent::new(KeyCode::Char('l'), KeyModifiers::CONTROL));

        assert!(app.session.latest().is_none());
        assert_eq!(app.input, "R");
        assert_eq!(app.session.strategy(), Strategy::Auto);
        assert_eq!(app.status_message, "History cleared");
    }

    #[test]
    fn test_tab_cycles_strategy() {
        let mut app = App::new(Session::new(Strategy::Auto));
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.session.strategy(), Strategy::Infix);
        assert_eq!(app.status_message, "Strategy: Infix");
    }

    #[test]
    fn test_escape_quits() {
        let mut app = App::new(Session::default());
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }
}
