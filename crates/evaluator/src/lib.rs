// evaluator crate

use logging::{FileSink, LogSink, SinkError};
use models::{Diagnostic, UserRecord};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name used for diagnostics when no log path is given.
pub const DEFAULT_LOG_FILE: &str = "errors.log";

#[derive(Error, Debug)]
pub enum EvaluatorError {
    #[error(transparent)]
    Sink(#[from] SinkError),

    #[error("Failed to write diagnostics to {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
}

/// `errors.log` next to the input file.
pub fn default_log_path(json_path: &Path) -> PathBuf {
    match json_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.join(DEFAULT_LOG_FILE),
        _ => PathBuf::from(DEFAULT_LOG_FILE),
    }
}

/// Reads a JSON list of users and returns the well-formed ones.
///
/// Every problem with the file's content is appended to the log as one
/// line and the offending data is left out of the result. Errors are only
/// returned when the log itself cannot be created or written.
pub fn load_valid_users(
    json_path: &Path,
    log_path: Option<&Path>,
) -> Result<Vec<UserRecord>, EvaluatorError> {
    let log_path = log_path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_log_path(json_path));

    let mut sink = FileSink::open(&log_path)?;
    let outcome = evaluate_into(json_path, &mut sink);

    match outcome {
        Ok(users) => {
            sink.finish()?;
            logging::info(&format!(
                "{}: {} valid user(s)",
                json_path.display(),
                users.len()
            ));
            Ok(users)
        }
        // Dropping the sink flushes and closes it
        Err(source) => Err(EvaluatorError::Write {
            path: log_path,
            source,
        }),
    }
}

fn evaluate_into(json_path: &Path, sink: &mut dyn LogSink) -> io::Result<Vec<UserRecord>> {
    let content = match fs::read_to_string(json_path) {
        Ok(content) => content,
        Err(e) => {
            logging::debug(&format!(
                "Failed to read {}: {}",
                json_path.display(),
                e
            ));
            sink.record(&Diagnostic::InvalidJson)?;
            return Ok(Vec::new());
        }
    };

    validators::validate_users_str(&content, sink)
}
