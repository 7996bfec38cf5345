//! Interactive shell.
//!
//! Reads one action per line and applies it to a single controller, so the
//! pending role, login surface and browse query carry over between lines.

use std::io::{BufRead, Write};

use clap::{Parser, Subcommand};

use rentzy_dashboard::Controller;
use rentzy_dashboard::notify::RecordingSink;

use super::Action;
use crate::output::{self, OutputError};

#[derive(Parser)]
#[command(name = "rentzy", no_binary_name = true, disable_version_flag = true)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Subcommand)]
enum ShellCommand {
    #[command(flatten)]
    Action(Action),
    /// Leave the shell
    #[command(alias = "quit")]
    Exit,
}

/// Run the shell until `exit` or end of input.
///
/// # Errors
///
/// Returns `OutputError` if reading input or writing output fails.
pub fn run(
    controller: &mut Controller,
    sink: &RecordingSink,
    input: impl BufRead,
    mut out: impl Write,
    json: bool,
) -> Result<(), OutputError> {
    output::print_frame(&mut out, &sink.drain(), &controller.snapshot(), json)?;

    for line in input.lines() {
        let line = line?;
        let words = match split_words(&line) {
            Ok(words) if words.is_empty() => continue,
            Ok(words) => words,
            Err(e) => {
                writeln!(out, "error: {e}")?;
                continue;
            }
        };

        let command = match ShellLine::try_parse_from(words) {
            Ok(parsed) => parsed.command,
            Err(e) => {
                write!(out, "{}", e.render())?;
                continue;
            }
        };

        match command {
            ShellCommand::Exit => break,
            ShellCommand::Action(action) => {
                if let Err(e) = action.apply(controller) {
                    tracing::debug!(error = %e, "Action failed");
                    if matches!(e, super::ActionError::Category(_)) {
                        writeln!(out, "error: {e}")?;
                    }
                }
                output::print_frame(&mut out, &sink.drain(), &controller.snapshot(), json)?;
            }
        }
    }

    Ok(())
}

/// Split a line into words. Single or double quotes group words with spaces.
fn split_words(line: &str) -> Result<Vec<String>, String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;

    for c in line.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                in_word = true;
            }
            None if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            None => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if let Some(q) = quote {
        return Err(format!("unterminated {q} quote"));
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use rentzy_core::Role;
    use rentzy_dashboard::providers::Providers;
    use rentzy_dashboard::store::MemoryStore;

    fn run_script(script: &str) -> (Controller, String) {
        let sink = RecordingSink::new();
        let mut controller = Controller::new(MemoryStore::new(), Providers::mock(), sink.clone());
        let mut out = Vec::new();
        run(&mut controller, &sink, Cursor::new(script), &mut out, false).unwrap();
        (controller, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_split_words() {
        assert_eq!(
            split_words(r#"signup --name "Asha Rao" --pan 'abcde1234f'"#).unwrap(),
            ["signup", "--name", "Asha Rao", "--pan", "abcde1234f"]
        );
        assert_eq!(
            split_words(r#"login -e a@b.co -p """#).unwrap(),
            ["login", "-e", "a@b.co", "-p", ""]
        );
        assert!(split_words("   ").unwrap().is_empty());
        assert!(split_words("search \"open").is_err());
    }

    #[test]
    fn test_pending_role_carries_between_lines() {
        let (controller, out) = run_script("open owner\nlogin -e a@b.co -p secret\n");
        assert_eq!(controller.session().unwrap().role(), Role::Owner);
        assert!(out.contains("Login as Owner"));
        assert!(out.contains("Login successful!"));
        assert!(out.contains("Welcome, John Doe"));
    }

    #[test]
    fn test_exit_stops_reading() {
        let (controller, _) = run_script("exit\ngoogle\n");
        assert!(controller.session().is_none());
    }

    #[test]
    fn test_bad_command_keeps_going() {
        let (controller, out) = run_script("fly away\nsection nowhere\ngoogle\n");
        assert!(controller.session().is_some());
        assert!(out.contains("error"));
    }

    #[test]
    fn test_rejection_is_printed_as_notification() {
        let (_, out) = run_script("switch-role\n");
        assert!(out.contains("Please log in first"));
    }
}
