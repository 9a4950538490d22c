// Submission record validation
//
// Checks run in a fixed order and stop at the first failure: required
// fields first, then email shape, then phone shape.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

use crate::forms::types::{field_label, SubmissionRecord, ValidatedRecord, REQUIRED_FIELDS};

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[()\s\-+0-9]{10,}$").expect("phone pattern compiles"));

/// Reasons a record is rejected. `Display` yields the message shown to the visitor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Por favor, preencha o campo {0}.")]
    MissingField(String),
    #[error("Por favor, insira um e-mail válido.")]
    InvalidEmail,
    #[error("Por favor, insira um telefone válido.")]
    InvalidPhone,
}

/// Validate a record collected from an entry point.
///
/// Returns the first applicable error; never aggregates. Has no side effects.
pub fn validate(record: &SubmissionRecord) -> Result<ValidatedRecord, ValidationError> {
    for field in REQUIRED_FIELDS {
        if record.filled(field).is_none() {
            return Err(ValidationError::MissingField(field_label(field).to_string()));
        }
    }

    if !is_valid_email(record.get("email").unwrap_or_default()) {
        return Err(ValidationError::InvalidEmail);
    }

    if !is_valid_phone(record.get("phone").unwrap_or_default()) {
        return Err(ValidationError::InvalidPhone);
    }

    Ok(ValidatedRecord::new(record.clone()))
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Whitespace is stripped before matching, so "(11) 9 1234-5678" counts
/// the same as "(11)91234-5678".
pub fn is_valid_phone(phone: &str) -> bool {
    let compact: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    PHONE_PATTERN.is_match(&compact)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_record() -> SubmissionRecord {
        SubmissionRecord::new()
            .with("name", "Ana")
            .with("phone", "(11) 91234-5678")
            .with("email", "ana@example.com")
    }

    #[test]
    fn test_complete_record_is_valid() {
        let validated = validate(&complete_record()).unwrap();
        assert_eq!(validated.record(), &complete_record());
    }

    #[test]
    fn test_missing_fields_reported_in_fixed_order() {
        let empty = SubmissionRecord::new();
        assert_eq!(
            validate(&empty),
            Err(ValidationError::MissingField("Nome".to_string()))
        );

        let no_phone = SubmissionRecord::new()
            .with("name", "Ana")
            .with("email", "ana@example.com");
        assert_eq!(
            validate(&no_phone),
            Err(ValidationError::MissingField("Telefone".to_string()))
        );

        let no_email = SubmissionRecord::new()
            .with("name", "Ana")
            .with("phone", "11912345678");
        assert_eq!(
            validate(&no_email),
            Err(ValidationError::MissingField("E-mail".to_string()))
        );
    }

    #[test]
    fn test_whitespace_only_counts_as_missing() {
        let record = complete_record().with("phone", " \t ");
        assert_eq!(
            validate(&record),
            Err(ValidationError::MissingField("Telefone".to_string()))
        );
    }

    #[test]
    fn test_missing_field_wins_over_bad_format() {
        let record = SubmissionRecord::new()
            .with("phone", "123")
            .with("email", "not-an-email");
        assert_eq!(
            validate(&record),
            Err(ValidationError::MissingField("Nome".to_string()))
        );
    }

    #[test]
    fn test_invalid_email() {
        let record = complete_record().with("email", "not-an-email");
        assert_eq!(validate(&record), Err(ValidationError::InvalidEmail));

        assert!(!is_valid_email("ana@example"));
        assert!(!is_valid_email("ana@@example.com"));
        assert!(!is_valid_email("ana maria@example.com"));
        assert!(is_valid_email("ana.maria@mail.example.com.br"));
    }

    #[test]
    fn test_email_checked_before_phone() {
        let record = complete_record()
            .with("email", "not-an-email")
            .with("phone", "123");
        assert_eq!(validate(&record), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn test_short_phone_is_invalid() {
        let record = complete_record().with("phone", "123");
        assert_eq!(validate(&record), Err(ValidationError::InvalidPhone));
    }

    #[test]
    fn test_phone_with_letters_is_invalid() {
        let record = complete_record().with("phone", "abc-defg-hijk");
        assert_eq!(validate(&record), Err(ValidationError::InvalidPhone));
    }

    #[test]
    fn test_phone_length_counted_without_whitespace() {
        // 9 characters once spaces are stripped
        assert!(!is_valid_phone("1 2 3 4 5 6 7 8 9"));
        assert!(is_valid_phone("+55 11 91234 5678"));
        assert!(is_valid_phone("(11)1234-5678"));
    }

    #[test]
    fn test_phone_digits_must_be_ascii() {
        // Arabic-Indic digits
        let record = complete_record().with("phone", "١١٩١٢٣٤٥٦٧٨");
        assert_eq!(validate(&record), Err(ValidationError::InvalidPhone));
        assert!(!is_valid_phone("１１９１２３４５６７８"));
    }

    #[test]
    fn test_validation_is_idempotent() {
        let bad = complete_record().with("phone", "123");
        assert_eq!(validate(&bad), validate(&bad));

        let good = complete_record();
        assert_eq!(validate(&good), validate(&good));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ValidationError::MissingField("Nome".to_string()).to_string(),
            "Por favor, preencha o campo Nome."
        );
        assert_eq!(
            ValidationError::InvalidEmail.to_string(),
            "Por favor, insira um e-mail válido."
        );
        assert_eq!(
            ValidationError::InvalidPhone.to_string(),
            "Por favor, insira um telefone válido."
        );
    }
}
