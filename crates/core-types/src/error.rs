use thiserror::Error;

/// Rejection for a creation payload that fails the required-field check.
///
/// The rendered message is the exact text API clients see in the 400
/// response body; it does not name the offending field.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required fields")]
    MissingRequiredFields,
}
