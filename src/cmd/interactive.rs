//! Interactive command implementation
//!
//! Prompts for pairs of values until the user quits, keeping a [`Session`]
//! between prompts so `clear` behaves like the reset button of a form.

use anyhow::{Context, Result};
use console::style;
use std::env;
use std::io::{self, BufRead, Write};

use crate::calculator::Outcome;
use crate::config::{ConfigFile, ConfigLoader};
use crate::error::DeltaCalcError;
use crate::fmt::{icon, CROSSMARK, DELTA, INFO};
use crate::input::InputError;
use crate::report::Report;
use crate::session::{Session, Slot};

/// Keywords accepted at either prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Keyword {
    Quit,
    Help,
    Clear,
}

impl Keyword {
    fn parse(line: &str) -> Option<Self> {
        match line.trim().to_ascii_lowercase().as_str() {
            "q" | "quit" | "exit" => Some(Self::Quit),
            "h" | "help" | "?" => Some(Self::Help),
            "c" | "clear" => Some(Self::Clear),
            _ => None,
        }
    }
}

/// What the loop should do after reading one prompt
enum Step {
    Value(String),
    Restart,
    Stop,
}

/// Run the interactive prompt on stdin/stdout
///
/// # Examples
///
/// ```no_run
/// use delta_calc::cmd::interactive::cmd_interactive;
///
/// cmd_interactive()?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn cmd_interactive() -> Result<()> {
    let cwd = env::current_dir().context("Failed to determine current directory")?;
    let config = ConfigLoader::load(&cwd)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_interactive(&mut stdin.lock(), &mut stdout.lock(), &config)
}

/// Prompt loop over arbitrary reader/writer
///
/// Ends on `q` or end of input.
pub fn run_interactive<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    config: &ConfigFile,
) -> Result<()> {
    let mut session = Session::new(config.limits());

    writeln!(
        out,
        "{} {} - Enter 'q' to quit, 'h' for help, 'c' to clear",
        icon(DELTA),
        style("Δ% Calculator").bold()
    )?;
    Report::idle().write_to(out)?;

    loop {
        let first = match read_step(input, out, "First value: ", &mut session)? {
            Step::Value(line) => line,
            Step::Restart => continue,
            Step::Stop => break,
        };
        if let Err(e) = session.set(Slot::First, &first) {
            show_invalid(out, &e, config)?;
            continue;
        }

        let second = match read_step(input, out, "Second value: ", &mut session)? {
            Step::Value(line) => line,
            Step::Restart => continue,
            Step::Stop => break,
        };
        match session.set(Slot::Second, &second) {
            Ok(outcome) => Report::from_outcome(&outcome, &config.display).write_to(out)?,
            Err(e) => show_invalid(out, &e, config)?,
        }
    }

    writeln!(out)?;
    writeln!(out, "Goodbye!")?;
    Ok(())
}

fn read_step<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
    session: &mut Session,
) -> Result<Step> {
    writeln!(out)?;
    write!(out, "{}", prompt)?;
    out.flush()?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .map_err(|source| DeltaCalcError::Io {
            context: "reading from stdin".to_string(),
            source,
        })?;
    if read == 0 {
        return Ok(Step::Stop);
    }

    Ok(match Keyword::parse(&line) {
        Some(Keyword::Quit) => Step::Stop,
        Some(Keyword::Help) => {
            write_help(out)?;
            Step::Restart
        }
        Some(Keyword::Clear) => {
            session.clear();
            writeln!(out, "{} Values cleared", icon(INFO))?;
            Report::idle().write_to(out)?;
            Step::Restart
        }
        None => Step::Value(line),
    })
}

fn show_invalid<W: Write>(out: &mut W, error: &InputError, config: &ConfigFile) -> Result<()> {
    writeln!(
        out,
        "{} {} {}",
        icon(CROSSMARK),
        style("Error:").red().bold(),
        error
    )?;
    Report::from_outcome(&Outcome::InvalidInput, &config.display).write_to(out)?;
    Ok(())
}

/// Usage text shared with `h`
pub fn write_help<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", style("Δ% Calculator Usage:").bold())?;
    writeln!(out, "  Interactive mode: delta-calc")?;
    writeln!(out, "  Command line mode: delta-calc calc <VALUE1> <VALUE2>")?;
    writeln!(out)?;
    writeln!(out, "Commands (interactive mode):")?;
    writeln!(out, "  h, help  - Show this help")?;
    writeln!(out, "  c, clear - Reset both values")?;
    writeln!(out, "  q, quit  - Quit the program")?;
    writeln!(out)?;
    writeln!(out, "Formula: Δ% = (1 - smaller/larger) × 100")?;
    writeln!(
        out,
        "Example: 3.58 vs 4.23 → Δ% = (1 - 3.58/4.23) × 100 = 15.37%"
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(script: &str) -> String {
        console::set_colors_enabled(false);
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut out = Vec::new();
        run_interactive(&mut input, &mut out, &ConfigFile::default()).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_keyword_parse() {
        assert_eq!(Keyword::parse("q\n"), Some(Keyword::Quit));
        assert_eq!(Keyword::parse(" Q "), Some(Keyword::Quit));
        assert_eq!(Keyword::parse("help"), Some(Keyword::Help));
        assert_eq!(Keyword::parse("c"), Some(Keyword::Clear));
        assert_eq!(Keyword::parse("12"), None);
    }

    #[test]
    fn test_single_pair_then_quit() {
        let text = run("3.58\n4.23\nq\n");
        assert!(text.contains("Enter values to calculate Δ%"));
        assert!(text.contains("Δ% = 15.37%"));
        assert!(text.contains("Goodbye!"));
    }

    #[test]
    fn test_end_of_input_stops_loop() {
        let text = run("100\n");
        assert!(text.contains("Second value: "));
        assert!(text.trim_end().ends_with("Goodbye!"));
        assert!(!text.contains("Larger value"));
    }

    #[test]
    fn test_invalid_value_reprompts_for_pair() {
        let text = run("abc\n100\n50\n");
        assert!(text.contains("'abc' is not a valid number"));
        assert!(text.contains("Invalid input"));
        assert!(text.contains("Δ% = 50.00%"));
        assert_eq!(text.matches("First value: ").count(), 3);
    }

    #[test]
    fn test_help_and_clear_keywords() {
        let text = run("h\n10\nc\n0\n0\nq\n");
        assert!(text.contains("Δ% Calculator Usage:"));
        assert!(text.contains("Values cleared"));
        assert!(text.contains("Both values are zero"));
    }

    #[test]
    fn test_quit_at_second_prompt() {
        let text = run("10\nquit\n");
        assert!(text.contains("Goodbye!"));
        assert!(!text.contains("Larger value"));
    }
}
