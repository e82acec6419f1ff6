//! Error types for the Labor Cost Quotation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while building a quotation.

use thiserror::Error;

/// The main error type for the Labor Cost Quotation Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use quote_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The salary field contained characters other than digits and commas.
    #[error("Salary must contain only digits and commas: '{input}'")]
    SalaryNotNumeric {
        /// The raw salary text that failed to parse.
        input: String,
    },

    /// The salary parsed to a value that is zero or negative.
    #[error("Salary must be greater than zero, got {salary}")]
    SalaryNotPositive {
        /// The parsed salary value.
        salary: i64,
    },

    /// Writing the export file failed.
    #[error("Export failed: {message}")]
    ExportError {
        /// A description of the export failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/file.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/file.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_salary_not_numeric_displays_input() {
        let error = EngineError::SalaryNotNumeric {
            input: "abc".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Salary must contain only digits and commas: 'abc'"
        );
    }

    #[test]
    fn test_salary_not_positive_displays_value() {
        let error = EngineError::SalaryNotPositive { salary: 0 };
        assert_eq!(error.to_string(), "Salary must be greater than zero, got 0");
    }

    #[test]
    fn test_salary_errors_are_distinct_messages() {
        let not_numeric = EngineError::SalaryNotNumeric {
            input: "0".to_string(),
        };
        let not_positive = EngineError::SalaryNotPositive { salary: 0 };
        assert_ne!(not_numeric.to_string(), not_positive.to_string());
    }

    #[test]
    fn test_export_error_displays_message() {
        let error = EngineError::ExportError {
            message: "write failed".to_string(),
        };
        assert_eq!(error.to_string(), "Export failed: write failed");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_config_not_found() -> EngineResult<()> {
            Err(EngineError::ConfigNotFound {
                path: "/test".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_config_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
