//! Caller identity issued by the external identity provider.
//!
//! # Invariants
//! - A `UserId` is never blank and never the anonymous principal.
//! - Identity text is kept verbatim apart from surrounding whitespace.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Principal text the identity provider hands to unauthenticated callers.
pub const ANONYMOUS_PRINCIPAL: &str = "2vxsx-fae";

/// Opaque authenticated principal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

/// Identity rejected at the façade boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentityError {
    Blank,
    Anonymous,
}

impl Display for IdentityError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Blank => write!(f, "caller identity is empty"),
            Self::Anonymous => write!(f, "caller identity is anonymous"),
        }
    }
}

impl Error for IdentityError {}

impl UserId {
    /// Parses raw principal text into an authenticated identity.
    pub fn parse(raw: &str) -> Result<Self, IdentityError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(IdentityError::Blank);
        }
        if trimmed == ANONYMOUS_PRINCIPAL {
            return Err(IdentityError::Anonymous);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::{IdentityError, UserId, ANONYMOUS_PRINCIPAL};

    #[test]
    fn parse_trims_and_keeps_principal_text() {
        let user = UserId::parse("  alice  ").expect("alice should parse");
        assert_eq!(user.as_str(), "alice");
    }

    #[test]
    fn parse_rejects_blank_and_anonymous() {
        assert_eq!(UserId::parse(" \t").unwrap_err(), IdentityError::Blank);
        assert_eq!(
            UserId::parse(ANONYMOUS_PRINCIPAL).unwrap_err(),
            IdentityError::Anonymous
        );
    }
}
