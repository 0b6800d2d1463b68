use serde_json::Value;
use std::fmt;

/// Runtime kind of a JSON value, labelled with the tokens that appear in
/// the error log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonKind {
    Null,
    Bool,
    Int,
    Float,
    Str,
    List,
    Dict,
}

impl JsonKind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => JsonKind::Null,
            Value::Bool(_) => JsonKind::Bool,
            // Anything that does not fit in 64 bits was already parsed as f64
            Value::Number(n) if n.is_i64() || n.is_u64() => JsonKind::Int,
            Value::Number(_) => JsonKind::Float,
            Value::String(_) => JsonKind::Str,
            Value::Array(_) => JsonKind::List,
            Value::Object(_) => JsonKind::Dict,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            JsonKind::Null => "NoneType",
            JsonKind::Bool => "bool",
            JsonKind::Int => "int",
            JsonKind::Float => "float",
            JsonKind::Str => "str",
            JsonKind::List => "list",
            JsonKind::Dict => "dict",
        }
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A required key and the kind its value must have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: JsonKind,
}

/// Required user fields, in the order they are checked.
pub const USER_FIELDS: [FieldSpec; 3] = [
    FieldSpec {
        name: "id",
        kind: JsonKind::Int,
    },
    FieldSpec {
        name: "name",
        kind: JsonKind::Str,
    },
    FieldSpec {
        name: "email",
        kind: JsonKind::Str,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_labels_for_every_kind() {
        let cases = [
            (json!(null), "NoneType"),
            (json!(true), "bool"),
            (json!(7), "int"),
            (json!(-7), "int"),
            (json!(18446744073709551615u64), "int"),
            (json!(1.5), "float"),
            (json!("x"), "str"),
            (json!([1, 2]), "list"),
            (json!({"a": 1}), "dict"),
        ];

        for (value, label) in cases {
            assert_eq!(JsonKind::of(&value).label(), label, "value: {}", value);
        }
    }

    #[test]
    fn test_bool_is_not_int() {
        assert_ne!(JsonKind::of(&json!(false)), JsonKind::Int);
    }

    #[test]
    fn test_integral_float_literal_is_float() {
        let value: Value = serde_json::from_str("1.0").unwrap();
        assert_eq!(JsonKind::of(&value), JsonKind::Float);
    }

    #[test]
    fn test_user_fields_order() {
        let names: Vec<_> = USER_FIELDS.iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["id", "name", "email"]);
    }
}
