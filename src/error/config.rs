//! Configuration errors

use super::PinError;

/// Creates an override parse error for an `-o` option
pub fn option_parse_failed(input: impl Into<String>) -> PinError {
    PinError::OverrideParseFailed {
        kind: "option",
        input: input.into(),
    }
}

/// Creates an override parse error for an `-s` setting
pub fn setting_parse_failed(input: impl Into<String>) -> PinError {
    PinError::OverrideParseFailed {
        kind: "setting",
        input: input.into(),
    }
}

/// Creates a profile read failed error
pub fn profile_read_failed(path: impl Into<String>, reason: impl Into<String>) -> PinError {
    PinError::ProfileReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
