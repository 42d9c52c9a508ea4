use crate::utils::error::{FormError, Result};
use lazy_static::lazy_static;
use regex::Regex;

pub const NAME_REQUIRED: &str = "Name is required.";
pub const INVALID_PHONE: &str = "Please enter a valid 10-digit phone number.";
pub const INVALID_EMAIL: &str = "Please enter a valid email address.";
pub const INVALID_IFSC: &str = "Please enter a valid IFSC code (e.g., ABCD1234567).";

lazy_static! {
    // ASCII digits only; `\d` in the regex crate is Unicode-aware.
    static ref PHONE_REGEX: Regex = Regex::new(r"^[0-9]{10}$").unwrap();
    static ref EMAIL_REGEX: Regex = Regex::new(&format!(
        r"^{part}+@{part}+\.{part}+$",
        part = r"[^\t\x0B\x0C \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}\n\r@]"
    ))
    .unwrap();
    static ref IFSC_REGEX: Regex = Regex::new(r"^[A-Za-z]{4}[0-9]{7}$").unwrap();
}

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Whitespace as browsers trim it: includes U+FEFF, excludes U+0085.
pub fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\u{0B}'
            | '\u{0C}'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
            | '\n'
            | '\r'
    )
}

pub fn validate_non_empty_string(field_name: &str, value: &str, message: &str) -> Result<()> {
    if value.trim_matches(is_js_whitespace).is_empty() {
        return Err(FormError::invalid_field(field_name, message));
    }
    Ok(())
}

fn validate_pattern(field_name: &str, value: &str, pattern: &Regex, message: &str) -> Result<()> {
    if !pattern.is_match(value.trim_matches(is_js_whitespace)) {
        return Err(FormError::invalid_field(field_name, message));
    }
    Ok(())
}

pub fn validate_name(value: &str) -> Result<()> {
    validate_non_empty_string("name", value, NAME_REQUIRED)
}

/// Exactly ten digits: no separators, no country code.
pub fn validate_phone(value: &str) -> Result<()> {
    validate_pattern("phone", value, &PHONE_REGEX, INVALID_PHONE)
}

/// Loose `local@domain.tld` shape check, not RFC 5322.
pub fn validate_email(value: &str) -> Result<()> {
    validate_pattern("email", value, &EMAIL_REGEX, INVALID_EMAIL)
}

/// Four letters (either case) followed by seven digits.
pub fn validate_routing_code(value: &str) -> Result<()> {
    validate_pattern("ifsc", value, &IFSC_REGEX, INVALID_IFSC)
}
