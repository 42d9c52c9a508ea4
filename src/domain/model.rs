use crate::utils::error::{FormError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Raw values of one form submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSet {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, rename = "ifsc", alias = "routing_code")]
    pub routing_code: String,
}

impl FieldSet {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
        routing_code: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
            routing_code: routing_code.into(),
        }
    }

    /// Builds a field set from form values keyed by element id.
    /// A missing id reads as an empty value.
    pub fn from_fields(fields: &HashMap<String, String>) -> Self {
        let get = |id: &str| fields.get(id).cloned().unwrap_or_default();
        Self {
            name: get("name"),
            phone: get("phone"),
            email: get("email"),
            routing_code: get("ifsc"),
        }
    }
}

impl Validate for FieldSet {
    /// Runs the rules in form order and stops at the first failure.
    fn validate(&self) -> Result<()> {
        validation::validate_name(&self.name)?;
        validation::validate_phone(&self.phone)?;
        validation::validate_email(&self.email)?;
        validation::validate_routing_code(&self.routing_code)?;
        Ok(())
    }
}

#[derive(Debug)]
pub enum ValidationOutcome {
    /// All rules passed and the user confirmed.
    Submitted,
    /// All rules passed but the user declined.
    Declined,
    Rejected(FormError),
}

impl ValidationOutcome {
    pub fn allows_submission(&self) -> bool {
        matches!(self, ValidationOutcome::Submitted)
    }

    pub fn message(&self) -> Option<String> {
        match self {
            ValidationOutcome::Rejected(e) => Some(e.to_string()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::validation::{INVALID_EMAIL, INVALID_PHONE, NAME_REQUIRED};

    #[test]
    fn test_from_fields_reads_ifsc_id() {
        let mut fields = HashMap::new();
        fields.insert("name".to_string(), "Alice".to_string());
        fields.insert("ifsc".to_string(), "ABCD1234567".to_string());

        let set = FieldSet::from_fields(&fields);
        assert_eq!(set.name, "Alice");
        assert_eq!(set.routing_code, "ABCD1234567");
        assert_eq!(set.phone, "");
    }

    #[test]
    fn test_first_failure_wins() {
        let set = FieldSet::new("  ", "123", "bad", "bad");
        assert_eq!(set.validate().unwrap_err().to_string(), NAME_REQUIRED);

        let set = FieldSet::new("Alice", "123", "bad", "bad");
        assert_eq!(set.validate().unwrap_err().to_string(), INVALID_PHONE);

        let set = FieldSet::new("Alice", "9876543210", "bad", "bad");
        assert_eq!(set.validate().unwrap_err().to_string(), INVALID_EMAIL);
    }

    #[test]
    fn test_deserialize_accepts_routing_code_alias() {
        let json = r#"{"name":"A","phone":"1","email":"e","routing_code":"X"}"#;
        let set: FieldSet = serde_json::from_str(json).unwrap();
        assert_eq!(set.routing_code, "X");
    }

    #[test]
    fn test_outcome_message() {
        assert!(ValidationOutcome::Submitted.allows_submission());
        assert!(!ValidationOutcome::Declined.allows_submission());
        assert!(ValidationOutcome::Declined.message().is_none());

        let rejected = ValidationOutcome::Rejected(FormError::invalid_field("name", NAME_REQUIRED));
        assert!(!rejected.allows_submission());
        assert_eq!(rejected.message().as_deref(), Some(NAME_REQUIRED));
    }
}
