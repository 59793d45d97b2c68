use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationErrors;

lazy_static! {
    /// Regex for phone fields: ASCII digits only, no sign, spaces or separators
    /// - Valid: "13800138000", "0"
    /// - Invalid: "+8613800138000", "138 0013 8000", "138-0013-8000", ""
    pub static ref PHONE_DIGITS_REGEX: Regex = Regex::new(r"^[0-9]+$").unwrap();
}

/// A required text field is missing when absent or empty
pub fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(str::is_empty)
}

/// Message of the first failing field. Fields listed in `field_order` are
/// checked in that order; any others follow alphabetically.
pub fn first_error_message(errors: &ValidationErrors, field_order: &[&str]) -> String {
    let rank = |field: &str| {
        field_order
            .iter()
            .position(|f| *f == field)
            .unwrap_or(field_order.len())
    };

    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|(a, _), (b, _)| rank(a).cmp(&rank(b)).then_with(|| a.cmp(b)));

    fields
        .into_iter()
        .find_map(|(field, field_errors)| {
            field_errors.first().map(|e| match &e.message {
                Some(message) => message.to_string(),
                None => format!("{} is invalid", field),
            })
        })
        .unwrap_or_else(|| errors.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Limits {
        #[validate(length(max = 1, message = "address too long"))]
        address: String,
        #[validate(length(max = 1, message = "name too long"))]
        name: String,
        #[validate(length(max = 1, message = "zone too long"))]
        zone: String,
    }

    fn all_too_long() -> Limits {
        Limits {
            address: "ab".to_string(),
            name: "ab".to_string(),
            zone: "ab".to_string(),
        }
    }

    #[test]
    fn test_first_error_message_follows_field_order() {
        let errors = all_too_long().validate().unwrap_err();
        assert_eq!(
            first_error_message(&errors, &["name", "address"]),
            "name too long"
        );
        assert_eq!(
            first_error_message(&errors, &["zone", "name"]),
            "zone too long"
        );
    }

    #[test]
    fn test_first_error_message_unlisted_fields_alphabetical() {
        let errors = all_too_long().validate().unwrap_err();
        assert_eq!(first_error_message(&errors, &[]), "address too long");
    }

    #[test]
    fn test_phone_regex_valid() {
        assert!(PHONE_DIGITS_REGEX.is_match("13800138000"));
        assert!(PHONE_DIGITS_REGEX.is_match("1234"));
        assert!(PHONE_DIGITS_REGEX.is_match("0"));
    }

    #[test]
    fn test_phone_regex_invalid() {
        assert!(!PHONE_DIGITS_REGEX.is_match("+8613800138000")); // leading plus
        assert!(!PHONE_DIGITS_REGEX.is_match("138 0013 8000")); // spaces
        assert!(!PHONE_DIGITS_REGEX.is_match("138-0013-8000")); // hyphens
        assert!(!PHONE_DIGITS_REGEX.is_match("1380013800a")); // letter
        assert!(!PHONE_DIGITS_REGEX.is_match("１３８００１３８０００")); // full-width digits
        assert!(!PHONE_DIGITS_REGEX.is_match("")); // empty
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(None));
        assert!(is_blank(Some("")));
        assert!(!is_blank(Some(" ")));
        assert!(!is_blank(Some("A")));
    }
}
