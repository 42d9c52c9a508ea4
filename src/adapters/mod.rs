// Adapters layer: concrete implementations of the domain ports.

pub mod prompt;

pub use prompt::{AssumeYes, TerminalPrompt};
