use crate::validate_fields;
use models::{Diagnostic, JsonKind, UserRecord, ValidationResult, USER_FIELDS};
use serde_json::Value;

/// Validates one list element as a user record.
///
/// On success the element is returned untouched, extra keys included.
pub fn validate_record(index: usize, item: &Value) -> Result<UserRecord, ValidationResult> {
    match item.as_object() {
        Some(object) => {
            let result = validate_fields(index, object, &USER_FIELDS);
            if result.is_valid {
                Ok(UserRecord::from_validated(object.clone()))
            } else {
                Err(result)
            }
        }
        None => {
            let mut result = ValidationResult::new();
            result.add_issue(Diagnostic::NotAnObject {
                index,
                got: JsonKind::of(item),
            });
            Err(result)
        }
    }
}
