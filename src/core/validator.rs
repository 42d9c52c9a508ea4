use crate::core::{FieldSet, UserPrompt, ValidationOutcome};
use crate::utils::validation::Validate;

pub const CONFIRM_MESSAGE: &str = "Do you want to submit the form?";

pub struct FormValidator<P: UserPrompt> {
    prompt: P,
}

impl<P: UserPrompt> FormValidator<P> {
    pub fn new(prompt: P) -> Self {
        Self { prompt }
    }

    /// Checks the fields and, when they pass, asks the user to confirm.
    /// A failed rule is shown through `notify`; a declined confirmation is silent.
    pub fn validate(&mut self, fields: &FieldSet) -> ValidationOutcome {
        tracing::debug!("Validating form submission");

        if let Err(e) = fields.validate() {
            tracing::info!(field = e.field().unwrap_or("unknown"), "Form rejected");
            self.prompt.notify(&e.to_string());
            return ValidationOutcome::Rejected(e);
        }

        if self.prompt.confirm(CONFIRM_MESSAGE) {
            tracing::info!("Form submission confirmed");
            ValidationOutcome::Submitted
        } else {
            tracing::info!("Form submission declined by user");
            ValidationOutcome::Declined
        }
    }

    pub fn into_prompt(self) -> P {
        self.prompt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::validation::{INVALID_IFSC, NAME_REQUIRED};

    #[derive(Default)]
    struct Scripted {
        answer: bool,
        notified: Vec<String>,
        asked: Vec<String>,
    }

    impl UserPrompt for Scripted {
        fn notify(&mut self, message: &str) {
            self.notified.push(message.to_string());
        }

        fn confirm(&mut self, message: &str) -> bool {
            self.asked.push(message.to_string());
            self.answer
        }
    }

    fn valid_fields() -> FieldSet {
        FieldSet::new("Alice", "9876543210", "alice@example.com", "ABCD1234567")
    }

    #[test]
    fn test_confirmed_submission() {
        let mut validator = FormValidator::new(Scripted {
            answer: true,
            ..Default::default()
        });
        let outcome = validator.validate(&valid_fields());
        assert!(outcome.allows_submission());

        let prompt = validator.into_prompt();
        assert_eq!(prompt.asked, vec![CONFIRM_MESSAGE.to_string()]);
        assert!(prompt.notified.is_empty());
    }

    #[test]
    fn test_declined_submission_is_silent() {
        let mut validator = FormValidator::new(Scripted::default());
        let outcome = validator.validate(&valid_fields());
        assert!(matches!(outcome, ValidationOutcome::Declined));
        assert!(validator.into_prompt().notified.is_empty());
    }

    #[test]
    fn test_rejection_skips_confirmation() {
        let mut prompt = Scripted {
            answer: true,
            ..Default::default()
        };
        let mut fields = valid_fields();
        fields.name = "   ".to_string();
        fields.routing_code = "bad".to_string();

        let outcome = FormValidator::new(&mut prompt).validate(&fields);
        assert!(!outcome.allows_submission());
        assert_eq!(outcome.message().as_deref(), Some(NAME_REQUIRED));
        assert_eq!(prompt.notified, vec![NAME_REQUIRED.to_string()]);
        assert!(prompt.asked.is_empty());
    }

    #[test]
    fn test_rejected_routing_code_reports_message() {
        let mut prompt = Scripted {
            answer: true,
            ..Default::default()
        };
        let mut fields = valid_fields();
        fields.routing_code = "AB1234567".to_string();

        let outcome = FormValidator::new(&mut prompt).validate(&fields);
        assert_eq!(outcome.message().as_deref(), Some(INVALID_IFSC));
        assert_eq!(prompt.notified, vec![INVALID_IFSC.to_string()]);
        assert!(prompt.asked.is_empty());
    }
}
