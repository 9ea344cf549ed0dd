// logix: propositional logic expression recognizer

use std::fs::File;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;
use std::sync::Mutex;

use clap::{Parser, ValueEnum};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use logix::{analyze, ui::App, Notation, Session, Strategy};

const DEFAULT_DIRECTIVE: &str = "logix=info";
const PROMPT: &str = "Enter logical expression (infix or prefix)> ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum StrategyArg {
    Auto,
    Infix,
    Prefix,
    Postfix,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Auto => Strategy::Auto,
            StrategyArg::Infix => Strategy::Infix,
            StrategyArg::Prefix => Strategy::Prefix,
            StrategyArg::Postfix => Strategy::Postfix,
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "logix",
    version,
    about = "Recognize propositional logic expressions and print them in infix, prefix and postfix notation"
)]
struct Args {
    /// Parser to apply to each line (auto tries infix, then prefix)
    #[arg(short, long, value_enum, default_value_t = StrategyArg::Auto)]
    strategy: StrategyArg,

    /// Read lines from stdin and print results instead of starting the TUI
    #[arg(short, long)]
    batch: bool,

    /// In batch mode, print the token stream of each line
    #[arg(short, long)]
    tokens: bool,

    /// Write logs to this file (the TUI logs nowhere otherwise)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Install the tracing subscriber for the selected mode.
fn init_logging(args: &Args) -> io::Result<()> {
    if let Some(path) = &args.log_file {
        let file = File::create(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(env_filter())
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    } else if args.batch {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter())
            .with_writer(io::stderr)
            .init();
    }
    // TUI without a log file: no subscriber, the alternate screen owns the terminal
    Ok(())
}

/// Line loop over `input`, stopping at the first empty line or EOF.
fn run_batch<R: BufRead, W: Write>(
    input: R,
    output: &mut W,
    strategy: Strategy,
    show_tokens: bool,
    prompt: bool,
) -> io::Result<()> {
    let mut lines = input.lines();

    loop {
        if prompt {
            write!(output, "{}", PROMPT)?;
            output.flush()?;
        }

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        if line.is_empty() {
            break;
        }

        let analysis = analyze(&line, strategy);

        if show_tokens {
            if let Some(stream) = &analysis.tokens {
                writeln!(output, "Tokens: {}", stream)?;
            }
        }

        match &analysis.outcome {
            Ok(parsed) => {
                for notation in Notation::ALL {
                    writeln!(
                        output,
                        "{} Expression: {}",
                        notation,
                        parsed.rendering(notation)
                    )?;
                }
            }
            Err(logix::Error::Lex(err)) => {
                writeln!(output, "Lexical analysis failed: {}", err)?;
            }
            Err(logix::Error::Parse(err)) => {
                writeln!(output, "Parse failed: {}", err)?;
            }
        }
    }

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(&args)?;

    let strategy = Strategy::from(args.strategy);

    if args.batch {
        let stdin = io::stdin();
        let prompt = stdin.is_terminal();
        let mut stdout = io::stdout().lock();
        run_batch(stdin.lock(), &mut stdout, strategy, args.tokens, prompt)?;
        return Ok(());
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(Session::new(strategy));
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn batch(input: &str, strategy: Strategy, show_tokens: bool) -> String {
        let mut out = Vec::new();
        run_batch(Cursor::new(input), &mut out, strategy, show_tokens, false).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_batch_prints_all_notations() {
        assert_eq!(
            batch("P And Q\n", Strategy::Auto, false),
            "Infix Expression: ( P ∧ Q ) \n\
             Prefix Expression: ∧ P Q\n\
             Postfix Expression: P Q ∧ \n"
        );
    }

    #[test]
    fn test_batch_stops_at_empty_line() {
        let out = batch("T\n\nF\n", Strategy::Auto, false);
        assert!(out.contains("true"));
        assert!(!out.contains("false"));
    }

    #[test]
    fn test_batch_reports_failures() {
        let out = batch("P # Q\nP And\n", Strategy::Auto, false);
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].starts_with("Lexical analysis failed: invalid character '#'"));
        assert!(lines[1].starts_with("Parse failed: "));
    }

    #[test]
    fn test_batch_token_dump() {
        let out = batch("P Q Or\n", Strategy::Postfix, true);
        assert!(out.starts_with("Tokens: P Q Or \n"));
        assert!(out.contains("Infix Expression: ( P ∨ Q ) "));
    }

    #[test]
    fn test_strategy_arg_conversion() {
        assert_eq!(Strategy::from(StrategyArg::Postfix), Strategy::Postfix);
        assert_eq!(Strategy::from(StrategyArg::Auto), Strategy::default());
    }
}
