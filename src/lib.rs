pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{AssumeYes, TerminalPrompt};
pub use crate::core::validator::FormValidator;
pub use domain::model::{FieldSet, ValidationOutcome};
pub use domain::ports::UserPrompt;
pub use utils::error::{FormError, Result};
