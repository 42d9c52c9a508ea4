use crate::domain::ports::UserPrompt;
use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

/// Line-based prompt over any reader/writer pair.
pub struct TerminalPrompt<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl TerminalPrompt<BufReader<Stdin>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalPrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl<R: BufRead, W: Write> UserPrompt for TerminalPrompt<R, W> {
    fn notify(&mut self, message: &str) {
        if let Err(e) = writeln!(self.output, "{}", message).and_then(|_| self.output.flush()) {
            tracing::warn!("Failed to display message: {}", e);
        }
    }

    fn confirm(&mut self, message: &str) -> bool {
        if let Err(e) = write!(self.output, "{} [y/N] ", message).and_then(|_| self.output.flush()) {
            tracing::warn!("Failed to display confirmation: {}", e);
            return false;
        }

        let mut answer = String::new();
        match self.input.read_line(&mut answer) {
            Ok(0) => {
                tracing::debug!("No answer before end of input, treating as no");
                false
            }
            Ok(_) => matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
            Err(e) => {
                tracing::warn!("Failed to read confirmation: {}", e);
                false
            }
        }
    }
}

/// Forwards messages to the wrapped prompt and agrees to every confirmation.
pub struct AssumeYes<P: UserPrompt> {
    inner: P,
}

impl<P: UserPrompt> AssumeYes<P> {
    pub fn new(inner: P) -> Self {
        Self { inner }
    }
}

impl<P: UserPrompt> UserPrompt for AssumeYes<P> {
    fn notify(&mut self, message: &str) {
        self.inner.notify(message);
    }

    fn confirm(&mut self, message: &str) -> bool {
        tracing::debug!("Auto-confirming: {}", message);
        true
    }
}
