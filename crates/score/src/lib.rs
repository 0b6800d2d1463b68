// score crate
//
// Turns a captured test-run summary plus two manual grades into a bench
// score out of ten.

mod digits;

pub use digits::parse_grade;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Expected size of the test suite; one point per passed test.
pub const TOTAL_TESTS: u32 = 5;
pub const MAX_CODE_QUALITY: u32 = 3;
pub const MAX_IO_RELIABILITY: u32 = 2;

pub const DEFAULT_OUTPUT_PATH: &str = "pytest_output.txt";
pub const DEFAULT_CODE_QUALITY: i64 = 3;
pub const DEFAULT_IO_RELIABILITY: i64 = 2;
pub const RESULT_FILE: &str = "score.json";

static PASSED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\s+passed").expect("valid passed-count pattern"));

#[derive(Error, Debug)]
pub enum ScoreError {
    #[error("Failed to read test output {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("Failed to write score file {path}: {source}")]
    Write { path: PathBuf, source: io::Error },

    #[error("Failed to serialize score: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreCard {
    /// Passed tests, capped at [`TOTAL_TESTS`].
    pub correctness: u32,
    pub code_quality: u32,
    /// Accuracy of error messages and log formats.
    pub io_reliability: u32,
    pub total: u32,
}

impl ScoreCard {
    /// Clamps every component into its range and sums them.
    pub fn compute(passed: u64, code_quality: i64, io_reliability: i64) -> Self {
        let correctness = passed.min(u64::from(TOTAL_TESTS)) as u32;
        let code_quality = clamp(code_quality, MAX_CODE_QUALITY);
        let io_reliability = clamp(io_reliability, MAX_IO_RELIABILITY);

        ScoreCard {
            correctness,
            code_quality,
            io_reliability,
            total: correctness + code_quality + io_reliability,
        }
    }

    /// Single-line JSON, as printed to stdout.
    pub fn to_compact_json(&self) -> Result<String, ScoreError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_pretty_json(&self) -> Result<String, ScoreError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn clamp(value: i64, max: u32) -> u32 {
    value.clamp(0, i64::from(max)) as u32
}

/// Number of passed tests in a summary such as `3 passed, 2 failed`.
///
/// Only the first match counts; text without one scores zero. Digits from
/// any script are read by value, and counts too large for `u64` saturate.
pub fn parse_passed(text: &str) -> u64 {
    PASSED_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| digits::decimal_value(m.as_str()))
        .unwrap_or(0)
}

/// Reads captured test output. A missing file reads as empty text.
pub fn read_output(path: &Path) -> Result<String, ScoreError> {
    match fs::read(path) {
        Ok(bytes) => Ok(String::from_utf8_lossy(&bytes).into_owned()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            logging::debug(&format!(
                "{} not found, treating as empty output",
                path.display()
            ));
            Ok(String::new())
        }
        Err(source) => Err(ScoreError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Scores the output at `output_path` without touching disk otherwise.
pub fn score_output(
    output_path: &Path,
    code_quality: i64,
    io_reliability: i64,
) -> Result<ScoreCard, ScoreError> {
    let text = read_output(output_path)?;
    let passed = parse_passed(&text);
    logging::debug(&format!("Found {} passed test(s)", passed));
    Ok(ScoreCard::compute(passed, code_quality, io_reliability))
}

/// Writes `card` as indented JSON to `result_path`.
pub fn write_score(card: &ScoreCard, result_path: &Path) -> Result<(), ScoreError> {
    let body = card.to_pretty_json()?;
    fs::write(result_path, body).map_err(|source| ScoreError::Write {
        path: result_path.to_path_buf(),
        source,
    })
}

/// Scores `output_path` and stores the card at `result_path`.
pub fn score_file(
    output_path: &Path,
    code_quality: i64,
    io_reliability: i64,
    result_path: &Path,
) -> Result<ScoreCard, ScoreError> {
    let card = score_output(output_path, code_quality, io_reliability)?;
    write_score(&card, result_path)?;
    Ok(card)
}
