use models::{Diagnostic, FieldSpec, JsonKind, ValidationResult};
use serde_json::{Map, Value};

/// Checks `fields` against one object, in order, collecting every failure.
pub fn validate_fields(
    index: usize,
    object: &Map<String, Value>,
    fields: &[FieldSpec],
) -> ValidationResult {
    let mut result = ValidationResult::new();

    for field in fields {
        match object.get(field.name) {
            None => {
                result.add_issue(Diagnostic::MissingField {
                    index,
                    field: field.name.to_string(),
                });
            }
            Some(value) => {
                let got = JsonKind::of(value);
                if got != field.kind {
                    result.add_issue(Diagnostic::WrongType {
                        index,
                        field: field.name.to_string(),
                        got,
                        expected: field.kind,
                    });
                }
            }
        }
    }

    result
}
