//! Error types for the alibi CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for alibi operations.
///
/// Each variant maps to a specific exit code. Render fallback is deliberately
/// absent from this taxonomy: a template referencing an undefined placeholder
/// is recovered silently by emitting the raw template text.
#[derive(Error, Debug)]
pub enum AlibiError {
    /// User provided invalid arguments or configuration.
    #[error("{0}")]
    UserError(String),

    /// The template catalog violates the "every resolved category has at
    /// least one template" invariant. Fatal at generator construction.
    #[error("Catalog error: {0}")]
    CatalogError(String),

    /// History directory creation or log file I/O failed during persist.
    #[error("Persistence failed: {0}")]
    PersistError(String),
}

impl AlibiError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            AlibiError::UserError(_) => exit_codes::USER_ERROR,
            AlibiError::CatalogError(_) => exit_codes::CATALOG_FAILURE,
            AlibiError::PersistError(_) => exit_codes::PERSIST_FAILURE,
        }
    }
}

/// Result type alias for alibi operations.
pub type Result<T> = std::result::Result<T, AlibiError>;
