//! Form misuse error types.

use thiserror::Error;

/// Errors raised by the coordinator's registration and lookup API.
///
/// Evaluation itself never fails: malformed declarations, unknown rules and
/// unparsable parameters all degrade to diagnostics or failed verdicts. These
/// errors only cover host programming mistakes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// A field with this name is already registered on the form.
    #[error("field '{0}' is already registered")]
    DuplicateField(String),

    /// No field with this name is registered on the form.
    #[error("field '{0}' is not registered")]
    UnknownField(String),
}
