pub mod validator;

pub use crate::domain::model::{FieldSet, ValidationOutcome};
pub use crate::domain::ports::UserPrompt;
pub use crate::utils::error::Result;
