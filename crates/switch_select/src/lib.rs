use std::io::{self, BufRead, IsTerminal};

use console::Term;
use dialoguer::Input;
use dialoguer::theme::ColorfulTheme;
use switch_services::{Confirm, is_affirmative};

/// Terminal-backed confirmation prompt.
///
/// Uses a dialoguer prompt when attached to a terminal and falls back to
/// reading one line from stdin otherwise, so answers can be piped in.
#[derive(Debug, Default, Clone, Copy)]
pub struct SwitchSelect;

impl SwitchSelect {
    pub fn new() -> Self {
        Self
    }
}

impl Confirm for SwitchSelect {
    fn confirm(&self, message: &str) -> anyhow::Result<bool> {
        let prompt = format!("{message} [y/N]");
        let answer = if io::stdin().is_terminal() && Term::stderr().is_term() {
            Input::<String>::with_theme(&ColorfulTheme::default())
                .with_prompt(prompt)
                .allow_empty(true)
                .interact_text()?
        } else {
            eprint!("{prompt} ");
            read_answer(io::stdin().lock())?
        };
        Ok(is_affirmative(&answer))
    }
}

/// Reads a single answer line. End of input counts as an empty answer.
fn read_answer(mut reader: impl BufRead) -> io::Result<String> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(line)
}
