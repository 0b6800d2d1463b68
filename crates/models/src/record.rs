use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A list element that passed every field check.
///
/// The original object is kept as-is, including keys beyond `id`, `name`
/// and `email`, in their original order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserRecord(Map<String, Value>);

impl UserRecord {
    /// Wraps an object the caller has already validated.
    pub fn from_validated(map: Map<String, Value>) -> Self {
        UserRecord(map)
    }

    /// Covers every integer the validator accepts, `i64` and `u64` alike.
    pub fn id(&self) -> Option<i128> {
        let id = self.0.get("id")?;
        id.as_i64()
            .map(i128::from)
            .or_else(|| id.as_u64().map(i128::from))
    }

    pub fn name(&self) -> Option<&str> {
        self.0.get("name").and_then(Value::as_str)
    }

    pub fn email(&self) -> Option<&str> {
        self.0.get("email").and_then(Value::as_str)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }
}

impl From<UserRecord> for Value {
    fn from(record: UserRecord) -> Self {
        Value::Object(record.0)
    }
}
