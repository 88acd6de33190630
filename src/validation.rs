//! Merged validation passes over the form values
//!
//! Two independent passes run on every change: an ad-hoc regex check for the
//! email shape and the declarative schema derived on [`FormValues`]. Their
//! results merge into one [`ErrorMap`], recomputed wholesale each pass.

use crate::state::FormValues;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

/// Full mapping of field paths (e.g. `lastName`, `pets.0.name`) to messages
pub type ErrorMap = BTreeMap<String, String>;

// local@domain.tld with a 2-4 letter suffix, case-insensitive
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,4}$").expect("valid regex")
});

/// Run both validation passes and merge the results.
///
/// The passes are independent: a schema failure never short-circuits the
/// email check and vice versa.
pub fn validate(values: &FormValues) -> ErrorMap {
    let mut errors = schema_errors(values);
    if !EMAIL_RE.is_match(&values.email) {
        errors.insert("email".to_string(), "Invalid Email".to_string());
    }
    errors
}

/// Flatten the derive-based schema result into path-keyed messages
fn schema_errors(values: &FormValues) -> ErrorMap {
    let mut map = ErrorMap::new();
    if let Err(errors) = values.validate() {
        flatten_into(&mut map, "", &errors);
    }
    map
}

fn flatten_into(map: &mut ErrorMap, prefix: &str, errors: &ValidationErrors) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            camel_case(field)
        } else {
            format!("{prefix}.{}", camel_case(field))
        };
        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                if let Some(error) = field_errors.first() {
                    let message = error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("invalid value ({})", error.code));
                    map.insert(path, message);
                }
            }
            ValidationErrorsKind::Struct(nested) => flatten_into(map, &path, nested),
            ValidationErrorsKind::List(entries) => {
                for (index, nested) in entries {
                    flatten_into(map, &format!("{path}.{index}"), nested);
                }
            }
        }
    }
}

/// Map a schema field name onto its serialized camelCase path segment
fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;
    for ch in field.chars() {
        if ch == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{PetEntry, PetType};
    use pretty_assertions::assert_eq;

    fn valid_values() -> FormValues {
        FormValues {
            last_name: "Doe".to_string(),
            email: "a@b.com".to_string(),
            ..FormValues::default()
        }
    }

    fn pet(name: &str) -> PetEntry {
        PetEntry {
            id: "fixed-token".to_string(),
            name: name.to_string(),
            pet_type: PetType::Frog,
        }
    }

    #[test]
    fn test_valid_values_produce_empty_map() {
        assert_eq!(validate(&valid_values()), ErrorMap::new());
    }

    #[test]
    fn test_email_without_at_sign_is_invalid() {
        let mut values = valid_values();
        values.email = "bad".to_string();
        assert_eq!(validate(&values).get("email").map(String::as_str), Some("Invalid Email"));
    }

    #[test]
    fn test_email_with_short_suffix_is_invalid() {
        let mut values = valid_values();
        values.email = "a@b.c".to_string();
        assert!(validate(&values).contains_key("email"));
    }

    #[test]
    fn test_email_with_long_suffix_is_invalid() {
        let mut values = valid_values();
        values.email = "a@b.abcde".to_string();
        assert!(validate(&values).contains_key("email"));
    }

    #[test]
    fn test_email_check_is_case_insensitive() {
        let mut values = valid_values();
        values.email = "USER+tag@EXAMPLE.ORG".to_string();
        assert!(!validate(&values).contains_key("email"));
    }

    #[test]
    fn test_empty_last_name_is_invalid() {
        let mut values = valid_values();
        values.last_name.clear();
        assert!(validate(&values).contains_key("lastName"));
    }

    #[test]
    fn test_one_char_last_name_is_invalid() {
        let mut values = valid_values();
        values.last_name = "D".to_string();
        assert!(validate(&values).contains_key("lastName"));
    }

    #[test]
    fn test_two_char_last_name_passes() {
        let mut values = valid_values();
        values.last_name = "Do".to_string();
        assert!(!validate(&values).contains_key("lastName"));
    }

    #[test]
    fn test_empty_pet_name_reports_nested_path() {
        let mut values = valid_values();
        values.pets = vec![pet("Rex"), pet("")];
        let errors = validate(&values);
        assert!(!errors.contains_key("pets.0.name"));
        assert!(errors.contains_key("pets.1.name"));
    }

    #[test]
    fn test_passes_merge_without_short_circuit() {
        let values = FormValues {
            email: "bad".to_string(),
            pets: vec![pet("")],
            ..FormValues::default()
        };
        let errors = validate(&values);
        assert!(errors.contains_key("email"));
        assert!(errors.contains_key("lastName"));
        assert!(errors.contains_key("pets.0.name"));
    }

    #[test]
    fn test_unvalidated_fields_accept_anything() {
        let mut values = valid_values();
        values.first_name.clear();
        values.pass.clear();
        assert!(validate(&values).is_empty());
    }

    // Worked example: fixing lastName and email empties the map
    #[test]
    fn test_correcting_input_clears_errors() {
        let mut values = FormValues {
            email: "bad".to_string(),
            ..FormValues::default()
        };
        let errors = validate(&values);
        assert!(errors.contains_key("lastName"));
        assert!(errors.contains_key("email"));

        values.last_name = "Doe".to_string();
        values.email = "a@b.com".to_string();
        assert_eq!(validate(&values), ErrorMap::new());
    }

    #[test]
    fn test_camel_case_paths() {
        assert_eq!(camel_case("last_name"), "lastName");
        assert_eq!(camel_case("pets"), "pets");
        assert_eq!(camel_case("name"), "name");
    }
}
