//! Conan package references
//!
//! A package reference (`name/version@user/channel`) names a recipe revision
//! without a binary. Appending `:<package_id>` selects one binary variant.

use std::fmt;
use std::str::FromStr;

use crate::error::PinError;

/// `name/version@user/channel`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageReference(String);

impl PackageReference {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Qualify this reference with a binary package identifier
    pub fn with_package_id(&self, package_id: impl Into<String>) -> FullReference {
        FullReference {
            reference: self.clone(),
            package_id: package_id.into(),
        }
    }
}

impl FromStr for PackageReference {
    type Err = PinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let reason = if s.is_empty() {
            Some("reference is empty")
        } else if s.chars().any(char::is_whitespace) {
            Some("reference must not contain whitespace")
        } else if s.contains(':') {
            Some("reference must not include a package ID")
        } else if !s.contains('/') {
            Some("expected name/version@user/channel")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(PinError::InvalidReference {
                reference: s.to_string(),
                reason: reason.to_string(),
            }),
            None => Ok(Self(s.to_string())),
        }
    }
}

impl fmt::Display for PackageReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// `name/version@user/channel:package_id`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullReference {
    reference: PackageReference,
    package_id: String,
}

impl FullReference {
    pub fn reference(&self) -> &PackageReference {
        &self.reference
    }

    pub fn package_id(&self) -> &str {
        &self.package_id
    }
}

impl fmt::Display for FullReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.reference, self.package_id)
    }
}
