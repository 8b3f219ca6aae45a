//! # Domain Value Objects
//!
//! Immutable types shared by every ledger component.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Timestamp in seconds since UNIX epoch.
pub type Timestamp = u64;

/// Raw 20-byte address backing an [`Identity`].
pub type Address = [u8; 20];

/// Opaque caller identifier (address-equivalent).
///
/// Equality is exact byte equality. The textual form is `0x` followed by 40
/// lowercase hex digits; parsing accepts the prefix in either case and
/// mixed-case digits but never normalizes the underlying bytes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Identity(Address);

impl Identity {
    /// Wrap raw address bytes.
    pub const fn from_bytes(bytes: Address) -> Self {
        Self(bytes)
    }

    /// Borrow the raw address bytes.
    pub fn as_bytes(&self) -> &Address {
        &self.0
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Identity({})", self)
    }
}

/// Failure to parse an [`Identity`] from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid identity {input:?}: {reason}")]
pub struct IdentityParseError {
    /// Text that failed to parse
    pub input: String,
    /// Decoder message
    pub reason: String,
}

impl FromStr for Identity {
    type Err = IdentityParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);

        let mut bytes = [0u8; 20];
        hex::decode_to_slice(digits, &mut bytes).map_err(|e| IdentityParseError {
            input: s.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self(bytes))
    }
}

impl From<Identity> for String {
    fn from(identity: Identity) -> Self {
        identity.to_string()
    }
}

impl TryFrom<String> for Identity {
    type Error = IdentityParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Address> for Identity {
    fn from(bytes: Address) -> Self {
        Self(bytes)
    }
}
