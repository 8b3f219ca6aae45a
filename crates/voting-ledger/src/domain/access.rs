//! # Access Control
//!
//! Single-owner gate for mutating operations.

use serde::{Deserialize, Serialize};

use super::errors::VotingError;
use super::value_objects::Identity;

/// Holds the owner fixed at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessControl {
    owner: Identity,
}

impl AccessControl {
    /// Make `owner` the only identity allowed through [`require_owner`](Self::require_owner).
    pub fn new(owner: Identity) -> Self {
        Self { owner }
    }

    /// Succeeds silently for the owner, fails with `AccessDenied` otherwise.
    pub fn require_owner(&self, caller: Identity) -> Result<(), VotingError> {
        if caller != self.owner {
            return Err(VotingError::AccessDenied { caller });
        }
        Ok(())
    }

    /// The owner identity.
    pub fn owner(&self) -> Identity {
        self.owner
    }
}
