//! Console input and colour control.
//!
//! Colours follow the NO_COLOR standard (https://no-color.org/) and the
//! CLICOLOR conventions:
//! - `NO_COLOR` set to anything disables colour
//! - `CLICOLOR_FORCE` set to non-zero forces colour even when piped
//! - `CLICOLOR=0` disables colour
//! - otherwise colour is used only when stdout is a terminal

use crate::error::Result;
use colored::Colorize;
use colored::control;
use std::io::{self, BufRead, Write};

/// Decide whether output is coloured. Call once, early in `main`.
pub fn init_colors() {
    let var = |name: &str| std::env::var(name).ok();
    control::set_override(color_enabled(
        var("NO_COLOR").as_deref(),
        var("CLICOLOR").as_deref(),
        var("CLICOLOR_FORCE").as_deref(),
        io::IsTerminal::is_terminal(&io::stdout()),
    ));
}

fn color_enabled(
    no_color: Option<&str>,
    clicolor: Option<&str>,
    clicolor_force: Option<&str>,
    is_tty: bool,
) -> bool {
    if no_color.is_some() {
        return false;
    }
    if clicolor_force.is_some_and(|v| v != "0") {
        return true;
    }
    if clicolor == Some("0") {
        return false;
    }
    is_tty
}

/// Source of answers to menu questions.
pub trait Prompter {
    /// Show `question` and read one line. `None` at end of input.
    fn ask(&mut self, question: &str) -> Result<Option<String>>;
}

/// Reads answers from any buffered reader, normally standard input.
pub struct LinePrompter<R> {
    input: R,
}

impl LinePrompter<io::StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> LinePrompter<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }
}

impl<R: BufRead> Prompter for LinePrompter<R> {
    fn ask(&mut self, question: &str) -> Result<Option<String>> {
        print!("{}", question.bold());
        io::stdout().flush()?;

        // Undecodable bytes become U+FFFD and parse as an invalid token
        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            // Keep the next message off the prompt line
            println!();
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&line);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
