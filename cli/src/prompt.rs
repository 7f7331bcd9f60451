//! `Prompt` over a line-oriented terminal.

use std::io::{self, BufRead, Write};

use inventory_core::Prompt;

pub struct TerminalPrompt<R, W> {
    input: R,
    output: W,
    assume_yes: bool,
}

impl<R: BufRead, W: Write> TerminalPrompt<R, W> {
    pub fn new(input: R, output: W, assume_yes: bool) -> Self {
        Self {
            input,
            output,
            assume_yes,
        }
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl TerminalPrompt<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio(assume_yes: bool) -> Self {
        Self::new(io::stdin().lock(), io::stdout(), assume_yes)
    }
}

impl<R: BufRead, W: Write> Prompt for TerminalPrompt<R, W> {
    /// Anything but `y`/`yes` declines, including a closed input.
    fn confirm(&mut self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        if write!(self.output, "{message} [y/N] ")
            .and_then(|_| self.output.flush())
            .is_err()
        {
            return false;
        }
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => false,
            Ok(_) => matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
        }
    }

    fn notify(&mut self, message: &str) {
        if let Err(e) = writeln!(self.output, "{message}") {
            tracing::warn!(error = %e, "failed to write notification");
        }
    }
}
