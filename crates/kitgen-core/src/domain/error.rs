use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: &'static str },

    #[error("Unknown {field} '{value}'")]
    UnknownOption { field: &'static str, value: String },

    // ========================================================================
    // Content Errors
    // ========================================================================
    #[error("Package manifest is not valid JSON: {reason}")]
    MalformedManifest { reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidProjectName { name, reason } => vec![
                format!("Project name '{}' is invalid: {}", name, reason),
                "Use letters, digits, hyphens, and underscores".into(),
                "Examples: my-app, helper_app, shop2".into(),
            ],
            Self::UnknownOption { field, .. } => vec![
                format!("Pick one of the listed {} values", field),
            ],
            Self::MalformedManifest { .. } => vec![
                "Fix package.json in the template directory".into(),
                "The manifest must be a JSON object".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidProjectName { .. } | Self::UnknownOption { .. } => {
                ErrorCategory::Validation
            }
            Self::MalformedManifest { .. } => ErrorCategory::Content,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Content,
}
