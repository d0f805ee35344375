//! Interactive user prompting components
//!
//! This module provides reusable components for user interaction,
//! separating CLI prompting logic from business logic.
//!
//! Destructive actions (assign, resolve, close) must be confirmed: either
//! interactively, or up-front with `--yes`. When stdin is not a terminal and
//! `--yes` was not given, the action aborts before any network call.

use std::io::{self, Read, Write};

use crate::error::{FrontdeskError, Result};

/// Whether stdin is an interactive terminal.
pub fn stdin_is_tty() -> bool {
    atty::is(atty::Stream::Stdin)
}

/// Prompt user for yes/no confirmation
///
/// # Returns
/// * `true` if user confirms with 'y' or 'Y'
/// * `false` otherwise
pub fn confirm(prompt: &str) -> Result<bool> {
    print!("{}? [y/N] ", prompt);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().eq_ignore_ascii_case("y"))
}

/// Gate a destructive action behind confirmation.
///
/// `--yes` skips the prompt. A declined prompt and a non-interactive stdin
/// both abort with `ConfirmationRequired`, before anything is submitted.
pub fn require_confirmation(prompt: &str, yes: bool) -> Result<()> {
    if yes {
        return Ok(());
    }
    if !stdin_is_tty() {
        return Err(FrontdeskError::ConfirmationRequired(format!(
            "{prompt}: stdin is not a terminal; pass --yes to confirm"
        )));
    }
    if confirm(prompt)? {
        Ok(())
    } else {
        Err(FrontdeskError::ConfirmationRequired(format!(
            "{prompt}: aborted"
        )))
    }
}

/// Prompt user to select from a list of options
///
/// # Returns
/// * Index of selected option
pub fn select_option(prompt: &str, options: &[String]) -> Result<usize> {
    for (idx, option) in options.iter().enumerate() {
        println!("  {idx}: {option}");
    }

    loop {
        print!("{} [0-{}]: ", prompt, options.len() - 1);
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        let input = input.trim();
        if let Ok(idx) = input.parse::<usize>()
            && idx < options.len()
        {
            return Ok(idx);
        }

        println!(
            "Invalid input. Please enter a number between 0 and {}.",
            options.len() - 1
        );
    }
}

/// Comment text from the argument, or from stdin when none was given.
///
/// Interactive terminals get a one-line prompt; pipes are read to EOF.
pub fn comment_text(arg: Option<String>) -> Result<String> {
    if let Some(text) = arg {
        return Ok(text);
    }

    if stdin_is_tty() {
        print!("Comment: ");
        io::stdout().flush()?;
        let mut line = String::new();
        io::stdin().read_line(&mut line)?;
        Ok(line.trim().to_string())
    } else {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer.trim().to_string())
    }
}
