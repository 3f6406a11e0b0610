//! Package search errors

use super::PinError;

/// Creates a package not found error for the given nesting level
pub fn not_found(
    reference: impl Into<String>,
    remote: impl Into<String>,
    level: &'static str,
) -> PinError {
    PinError::PackageNotFound {
        reference: reference.into(),
        remote: remote.into(),
        level,
    }
}

/// Creates a search result parse error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> PinError {
    PinError::SearchResultParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
