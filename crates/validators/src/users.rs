use crate::validate_record;
use logging::LogSink;
use models::{Diagnostic, UserRecord};
use serde_json::Value;
use std::io;

/// Validates a parsed document and writes every failure to `sink`.
///
/// Content problems never surface as errors; only a failing sink does.
pub fn validate_users(document: &Value, sink: &mut dyn LogSink) -> io::Result<Vec<UserRecord>> {
    let items = match document.as_array() {
        Some(items) => items,
        None => {
            sink.record(&Diagnostic::RootNotList)?;
            return Ok(Vec::new());
        }
    };

    let mut valid = Vec::new();
    for (idx, item) in items.iter().enumerate() {
        match validate_record(idx, item) {
            Ok(record) => valid.push(record),
            Err(result) => {
                for issue in &result.issues {
                    sink.record(issue)?;
                }
            }
        }
    }

    logging::debug(&format!(
        "Checked {} item(s), {} valid",
        items.len(),
        valid.len()
    ));

    Ok(valid)
}

/// Parses `text` as JSON, then validates it like [`validate_users`].
pub fn validate_users_str(text: &str, sink: &mut dyn LogSink) -> io::Result<Vec<UserRecord>> {
    match serde_json::from_str::<Value>(text) {
        Ok(document) => validate_users(&document, sink),
        Err(e) => {
            logging::debug(&format!("JSON parse failed: {}", e));
            sink.record(&Diagnostic::InvalidJson)?;
            Ok(Vec::new())
        }
    }
}
