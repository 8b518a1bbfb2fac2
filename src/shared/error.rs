use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - query answered, nothing blocking
    Success = 0,
    /// Dependents were found with `--fail-on-dependents`, or `show` found nothing
    CheckFailed = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (scope read error, malformed object, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::CheckFailed => write!(f, "Check Failed (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for graph loading and querying.
///
/// Uses thiserror to derive Display and Error traits automatically.
/// Errors are raised as `GraphError` and propagated as `anyhow::Error`.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("Scope index not found: {path}\n\n💡 Hint: {suggestion}")]
    ScopeNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse scope index: {path}\nDetails: {details}\n\n💡 Hint: Please verify that scope.toml lists components as [[components]] tables")]
    ScopeParseError { path: PathBuf, details: String },

    #[error("Failed to parse version object: {path}\nDetails: {details}\n\n💡 Hint: The object may be corrupted; re-export the component version")]
    ObjectParseError { path: PathBuf, details: String },

    #[error("Failed to list components\nDetails: {details}")]
    ComponentListError { details: String },

    #[error("Failed to load {component}@{version}\nDetails: {details}")]
    VersionFetchError {
        component: String,
        version: String,
        details: String,
    },

    #[error("Invalid component identifier: '{id}'\nDetails: {details}\n\n💡 Hint: Use the form scope/name or scope/name@1.0.0")]
    InvalidComponentId { id: String, details: String },

    #[error("Version node {version} has no registered parent component {parent}")]
    MissingParent { version: String, parent: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid scope path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a valid scope directory")]
    InvalidScopePath { path: PathBuf, reason: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::CheckFailed.as_i32(), 1);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(format!("{}", ExitCode::CheckFailed), "Check Failed (1)");
        assert_eq!(
            format!("{}", ExitCode::InvalidArguments),
            "Invalid Arguments (2)"
        );
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    #[test]
    fn test_scope_not_found_display() {
        let error = GraphError::ScopeNotFound {
            path: PathBuf::from("/test/scope/scope.toml"),
            suggestion: "Test suggestion".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Scope index not found"));
        assert!(display.contains("/test/scope/scope.toml"));
        assert!(display.contains("💡 Hint:"));
        assert!(display.contains("Test suggestion"));
    }

    #[test]
    fn test_version_fetch_error_display() {
        let error = GraphError::VersionFetchError {
            component: "scope/a".to_string(),
            version: "1.0.0".to_string(),
            details: "connection reset".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to load scope/a@1.0.0"));
        assert!(display.contains("connection reset"));
    }

    #[test]
    fn test_invalid_component_id_display() {
        let error = GraphError::InvalidComponentId {
            id: "@@".to_string(),
            details: "Component name cannot be empty".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Invalid component identifier: '@@'"));
        assert!(display.contains("scope/name@1.0.0"));
    }

    #[test]
    fn test_missing_parent_display() {
        let error = GraphError::MissingParent {
            version: "scope/a@1.0.0".to_string(),
            parent: "scope/a".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Version node scope/a@1.0.0 has no registered parent component scope/a"
        );
    }

    #[test]
    fn test_security_error_display() {
        let error = GraphError::SecurityError {
            path: PathBuf::from("/test/symlink"),
            reason: "Symbolic links are not allowed".to_string(),
            hint: "Use a regular file instead".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Security violation"));
        assert!(display.contains("/test/symlink"));
        assert!(display.contains("Use a regular file instead"));
    }
}
