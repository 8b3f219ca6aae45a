//! # Vote Ledger
//!
//! Tracks which identities have voted and applies accepted votes to the
//! candidate registry.
//!
//! ## Check Order
//!
//! ```text
//! window open? ──no──→ VotingClosed
//!      │yes
//! candidate exists? ──no──→ CandidateNotFound
//!      │yes
//! already voted? ──yes──→ VoteAlreadyGiven
//!      │no
//! increment tally + mark voter (single step)
//! ```

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::entities::CandidateRegistry;
use super::errors::VotingError;
use super::invariants::{invariant_candidate_exists, invariant_single_vote};
use super::value_objects::{Identity, Timestamp};
use super::window::VotingWindow;

/// Set of identities with a recorded vote. Membership is permanent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteLedger {
    voters: BTreeSet<Identity>,
}

impl VoteLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `identity` has voted. False for unseen identities.
    pub fn has_voted(&self, identity: &Identity) -> bool {
        self.voters.contains(identity)
    }

    /// Number of identities that have voted.
    pub fn voter_count(&self) -> usize {
        self.voters.len()
    }

    /// Record a vote by `voter` for the candidate at `index`.
    ///
    /// All checks run before any mutation, so a failed call leaves both the
    /// ledger and the registry untouched.
    pub fn record_vote(
        &mut self,
        voter: Identity,
        index: usize,
        registry: &mut CandidateRegistry,
        window: &VotingWindow,
        now: Timestamp,
    ) -> Result<(), VotingError> {
        window.require_open(now)?;
        invariant_candidate_exists(index, registry.len())?;
        invariant_single_vote(voter, self.has_voted(&voter))?;

        registry.increment_vote(index)?;
        self.voters.insert(voter);
        Ok(())
    }
}
