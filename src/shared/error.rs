use crate::build_planning::domain::{BuildId, Category, ComponentId};
use crate::build_planning::services::Violation;
use std::fmt;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts and CI systems to distinguish between a build
/// that was rejected by the rules and a failure of the tool itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the build validated, or the candidate is compatible
    Success = 0,
    /// The build (or candidate component) was rejected by a rule
    BuildRejected = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (catalog not readable, config invalid, etc.)
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
            ExitCode::BuildRejected => write!(f, "Build Rejected (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for build planning.
///
/// Every variant is recoverable and user-facing: callers surface these as a
/// rejected result carrying the reason, never as a process-fatal failure.
#[derive(Debug, Error)]
pub enum ForgeError {
    #[error("No components were provided for the build")]
    EmptyParts,

    #[error("Missing required components: {}", join_categories(categories))]
    MissingRequired { categories: Vec<Category> },

    #[error("A build may contain at most one {category} component")]
    DuplicateCategory { category: Category },

    #[error(transparent)]
    Incompatible(#[from] Violation),

    #[error("Component not found: {id}")]
    ComponentNotFound { id: ComponentId },

    #[error("Build not found: {id}")]
    BuildNotFound { id: BuildId },

    #[error("Insufficient stock for \"{name}\": requested {requested}, available {available}")]
    InsufficientStock {
        name: String,
        requested: i64,
        available: i64,
    },

    #[error("Validation error: {message}")]
    Validation { message: String },
}

fn join_categories(categories: &[Category]) -> String {
    categories
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::BuildRejected.as_i32(), 1);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(format!("{}", ExitCode::BuildRejected), "Build Rejected (1)");
    }

    #[test]
    fn test_missing_required_names_every_gap() {
        let error = ForgeError::MissingRequired {
            categories: vec![Category::Cpu, Category::Psu, Category::Case],
        };
        let display = format!("{}", error);
        assert!(display.contains("Missing required components"));
        assert!(display.contains("CPU"));
        assert!(display.contains("PSU"));
        assert!(display.contains("Case"));
    }

    #[test]
    fn test_component_not_found_display() {
        let error = ForgeError::ComponentNotFound {
            id: ComponentId(42),
        };
        assert_eq!(format!("{}", error), "Component not found: 42");
    }

    #[test]
    fn test_insufficient_stock_display() {
        let error = ForgeError::InsufficientStock {
            name: "Ryzen 7 5800X".to_string(),
            requested: 3,
            available: 1,
        };
        let display = format!("{}", error);
        assert!(display.contains("Ryzen 7 5800X"));
        assert!(display.contains("requested 3"));
        assert!(display.contains("available 1"));
    }
}
