//! Form Validation
//!
//! Client-side checks run before any request is sent. Lengths are counted
//! in characters, not bytes.

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

use crate::messages;

pub const TITLE_MAX: usize = 255;
pub const DESCRIPTION_MAX: usize = 1000;
pub const NOTE_MAX: usize = 500;
pub const DEFAULT_CATEGORY: &str = "General";

/// Form field a validation error points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Link,
    Price,
    Description,
    Note,
    Phone,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("title is required")]
    TitleRequired,
    #[error("title exceeds 255 characters")]
    TitleTooLong,
    #[error("link is not a valid URL")]
    InvalidLink,
    #[error("price is negative")]
    NegativePrice,
    #[error("description exceeds 1000 characters")]
    DescriptionTooLong,
    #[error("note exceeds 500 characters")]
    NoteTooLong,
    #[error("phone is required")]
    PhoneRequired,
    #[error("phone must be + followed by 10-15 digits")]
    InvalidPhone,
    #[error("import URL is required")]
    ImportUrlRequired,
}

impl ValidationError {
    pub fn field(&self) -> Field {
        match self {
            Self::TitleRequired | Self::TitleTooLong => Field::Title,
            Self::InvalidLink => Field::Link,
            Self::NegativePrice => Field::Price,
            Self::DescriptionTooLong => Field::Description,
            Self::NoteTooLong => Field::Note,
            Self::PhoneRequired | Self::InvalidPhone => Field::Phone,
            // the import form has a single URL field
            Self::ImportUrlRequired => Field::Link,
        }
    }

    /// Field hint shown under the input
    pub fn hint(&self) -> &'static str {
        match self {
            Self::TitleRequired => messages::TITLE_REQUIRED,
            Self::TitleTooLong => messages::TITLE_INVALID,
            Self::InvalidLink => messages::LINK_INVALID,
            Self::NegativePrice => messages::PRICE_INVALID,
            Self::DescriptionTooLong => messages::DESCRIPTION_INVALID,
            Self::NoteTooLong => messages::NOTE_INVALID,
            Self::PhoneRequired => messages::PHONE_REQUIRED,
            Self::InvalidPhone => messages::FRIEND_PHONE_INVALID,
            Self::ImportUrlRequired => messages::IMPORT_URL_REQUIRED,
        }
    }
}

/// Errors collected from one form submission
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<ValidationError>);

impl FieldErrors {
    pub fn push(&mut self, error: ValidationError) {
        self.0.push(error);
    }

    /// Record the error of a check, if any
    pub fn check(&mut self, result: Result<(), ValidationError>) {
        if let Err(error) = result {
            self.push(error);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: Field) -> Option<&ValidationError> {
        self.0.iter().find(|e| e.field() == field)
    }

    pub fn has(&self, field: Field) -> bool {
        self.get(field).is_some()
    }

    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

// ========================
// Patterns
// ========================

static SCHEME_RE: OnceLock<Regex> = OnceLock::new();
static HOST_RE: OnceLock<Regex> = OnceLock::new();
static PHONE_RE: OnceLock<Regex> = OnceLock::new();
static NUMBER_PREFIX_RE: OnceLock<Regex> = OnceLock::new();

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|error| panic!("regex {pattern} failed to compile: {error}"))
}

fn scheme_regex() -> &'static Regex {
    SCHEME_RE.get_or_init(|| compile(r"(?i)^https?://"))
}

/// Host label followed by a dot and at least two non-space characters
fn host_regex() -> &'static Regex {
    HOST_RE.get_or_init(|| compile(r"(?i)^(?:[a-z0-9][a-z0-9-]+[a-z0-9]|[a-z0-9]+)\.\S{2,}$"))
}

fn phone_regex() -> &'static Regex {
    PHONE_RE.get_or_init(|| compile(r"^\+[0-9]{10,15}$"))
}

fn number_prefix_regex() -> &'static Regex {
    NUMBER_PREFIX_RE.get_or_init(|| compile(r"^[+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?"))
}

fn starts_with_ignore_case(s: &str, prefix: &str) -> bool {
    s.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

// ========================
// Checks
// ========================

/// 1..=255 characters after trimming
pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    let len = title.trim().chars().count();
    if len == 0 {
        Err(ValidationError::TitleRequired)
    } else if len > TITLE_MAX {
        Err(ValidationError::TitleTooLong)
    } else {
        Ok(())
    }
}

/// Empty is valid. Otherwise `http(s)://host.tld...` or `www.host.tld...`;
/// a schemed URL whose host starts with `www` must continue with `www.`.
pub fn validate_link(link: &str) -> bool {
    if link.is_empty() {
        return true;
    }
    match scheme_regex().find(link) {
        Some(scheme) => {
            let rest = &link[scheme.end()..];
            if starts_with_ignore_case(rest, "www.") {
                host_regex().is_match(&rest[4..])
            } else if starts_with_ignore_case(rest, "www") {
                false
            } else {
                host_regex().is_match(rest)
            }
        }
        None => starts_with_ignore_case(link, "www.") && host_regex().is_match(&link[4..]),
    }
}

pub fn check_link(link: &str) -> Result<(), ValidationError> {
    if validate_link(link) { Ok(()) } else { Err(ValidationError::InvalidLink) }
}

pub fn validate_description(description: &str) -> Result<(), ValidationError> {
    if description.chars().count() > DESCRIPTION_MAX {
        Err(ValidationError::DescriptionTooLong)
    } else {
        Ok(())
    }
}

pub fn validate_note(note: &str) -> Result<(), ValidationError> {
    if note.chars().count() > NOTE_MAX {
        Err(ValidationError::NoteTooLong)
    } else {
        Ok(())
    }
}

pub fn validate_price(price: f64) -> Result<(), ValidationError> {
    if price < 0.0 { Err(ValidationError::NegativePrice) } else { Ok(()) }
}

/// `+` followed by 10 to 15 digits, nothing else
pub fn validate_phone(phone: &str) -> bool {
    phone_regex().is_match(phone)
}

/// Leading numeric prefix of the input, or 0 when there is none
pub fn parse_price(raw: &str) -> f64 {
    number_prefix_regex()
        .find(raw.trim())
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|p| p.is_finite())
        .unwrap_or(0.0)
}

/// Keep digits and `+`, and make sure the result starts with `+`
pub fn normalize_phone(raw: &str) -> String {
    let kept: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    if kept.starts_with('+') {
        kept
    } else {
        format!("+{}", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_bounds() {
        assert_eq!(validate_title(""), Err(ValidationError::TitleRequired));
        assert_eq!(validate_title("   "), Err(ValidationError::TitleRequired));
        assert_eq!(validate_title("Book"), Ok(()));
        assert_eq!(validate_title(&"a".repeat(255)), Ok(()));
        assert_eq!(validate_title(&"a".repeat(256)), Err(ValidationError::TitleTooLong));
        // surrounding whitespace does not count
        assert_eq!(validate_title(&format!("  {}  ", "a".repeat(255))), Ok(()));
        // characters, not bytes
        assert_eq!(validate_title(&"ж".repeat(255)), Ok(()));
    }

    #[test]
    fn test_valid_links() {
        for link in [
            "",
            "https://example.com",
            "http://example.com/path?q=1",
            "https://www.example.com",
            "www.example.com",
            "HTTPS://Shop.Example.org/item/42",
            "https://my-shop.co.uk",
            "https://a.io",
        ] {
            assert!(validate_link(link), "{link} should be valid");
        }
    }

    #[test]
    fn test_invalid_links() {
        for link in [
            "example.com",
            "ftp://example.com",
            "https://localhost",
            "https://wwwexample.com",
            "https://www.com",
            "https://example.c",
            "not a url",
            "https://exa mple.com",
        ] {
            assert!(!validate_link(link), "{link} should be invalid");
        }
    }

    #[test]
    fn test_phone() {
        assert!(validate_phone("+1234567890"));
        assert!(validate_phone("+123456789012345"));
        assert!(!validate_phone("+123456789"));
        assert!(!validate_phone("+1234567890123456"));
        assert!(!validate_phone("1234567890"));
        assert!(!validate_phone("+1234 567890"));
        assert!(!validate_phone("+1234567890a"));
    }

    #[test]
    fn test_normalize_phone() {
        assert_eq!(normalize_phone("1234567890"), "+1234567890");
        assert_eq!(normalize_phone("+1 (234) 567-890"), "+1234567890");
        assert_eq!(normalize_phone("+1234567890"), "+1234567890");
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("19.99"), 19.99);
        assert_eq!(parse_price(""), 0.0);
        assert_eq!(parse_price("abc"), 0.0);
        assert_eq!(parse_price(" 12abc"), 12.0);
        assert_eq!(parse_price("-5"), -5.0);
        assert_eq!(validate_price(parse_price("-5")), Err(ValidationError::NegativePrice));
        assert_eq!(validate_price(0.0), Ok(()));
    }

    #[test]
    fn test_text_lengths() {
        assert!(validate_description(&"d".repeat(1000)).is_ok());
        assert_eq!(validate_description(&"d".repeat(1001)), Err(ValidationError::DescriptionTooLong));
        assert!(validate_note(&"n".repeat(500)).is_ok());
        assert_eq!(validate_note(&"n".repeat(501)), Err(ValidationError::NoteTooLong));
    }

    #[test]
    fn test_field_errors() {
        let mut errors = FieldErrors::default();
        errors.check(validate_title(""));
        errors.check(check_link("https://example.com"));
        assert!(errors.has(Field::Title));
        assert!(!errors.has(Field::Link));
        assert_eq!(errors.get(Field::Title).map(|e| e.hint()), Some(messages::TITLE_REQUIRED));
        assert!(errors.into_result().is_err());
    }
}
