use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};

/// Asks the operator before anything destructive happens.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> Result<bool>;
}

/// Reads a single answer line from stdin.
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        print!("{} ", prompt);
        io::stdout().flush().context("Failed to flush prompt")?;

        let mut answer = String::new();
        io::stdin()
            .lock()
            .read_line(&mut answer)
            .context("Failed to read confirmation")?;

        Ok(is_affirmative(&answer))
    }
}

/// Only an explicit yes counts; anything else, including EOF, is a no.
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
