//! File system errors

use super::PinError;

/// Creates a file read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> PinError {
    PinError::FileReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a file write failed error
pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> PinError {
    PinError::FileWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
