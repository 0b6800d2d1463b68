mod diagnostic;
mod kind;
mod record;

pub use diagnostic::Diagnostic;
pub use kind::{FieldSpec, JsonKind, USER_FIELDS};
pub use record::UserRecord;

/// Outcome of checking a single list element.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub issues: Vec<Diagnostic>,
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationResult {
    pub fn new() -> Self {
        ValidationResult {
            is_valid: true,
            issues: Vec::new(),
        }
    }

    pub fn add_issue(&mut self, issue: Diagnostic) {
        self.is_valid = false;
        self.issues.push(issue);
    }
}
