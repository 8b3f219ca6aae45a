//! # Ledger State
//!
//! The aggregate owned by a voting service: owner, candidates, voters and
//! window. Every operation is a single transition that either commits fully
//! or returns an error with no effect.

use serde::{Deserialize, Serialize};

use super::access::AccessControl;
use super::entities::{Candidate, CandidateRegistry};
use super::errors::VotingError;
use super::ledger::VoteLedger;
use super::value_objects::{Identity, Timestamp};
use super::window::VotingWindow;

/// Complete ledger state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerState {
    access: AccessControl,
    registry: CandidateRegistry,
    votes: VoteLedger,
    window: VotingWindow,
}

impl LedgerState {
    /// Build the initial state.
    ///
    /// `owner` becomes the sole candidate manager, the window opens at `now`
    /// and lasts `duration_minutes`, and `names` are registered in order.
    pub fn new<I, S>(
        names: I,
        duration_minutes: u64,
        owner: Identity,
        now: Timestamp,
    ) -> Result<Self, VotingError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let window = VotingWindow::new(now, duration_minutes)?;
        Ok(Self {
            access: AccessControl::new(owner),
            registry: names.into_iter().collect(),
            votes: VoteLedger::new(),
            window,
        })
    }

    /// Owner-only append. No window restriction applies.
    pub fn add_candidate(
        &mut self,
        caller: Identity,
        name: impl Into<String>,
    ) -> Result<usize, VotingError> {
        self.access.require_owner(caller)?;
        Ok(self.registry.append(name))
    }

    /// Cast `caller`'s single vote for the candidate at `index`.
    pub fn vote(
        &mut self,
        caller: Identity,
        index: usize,
        now: Timestamp,
    ) -> Result<(), VotingError> {
        self.votes
            .record_vote(caller, index, &mut self.registry, &self.window, now)
    }

    /// Ordered candidates with live tallies.
    pub fn candidates(&self) -> &[Candidate] {
        self.registry.all()
    }

    /// Candidate at `index`.
    pub fn candidate(&self, index: usize) -> Result<&Candidate, VotingError> {
        self.registry.get(index)
    }

    /// Current leader, lowest index on ties.
    pub fn leader(&self) -> Option<(usize, &Candidate)> {
        self.registry.leader()
    }

    /// The owner identity.
    pub fn owner(&self) -> Identity {
        self.access.owner()
    }

    /// The voting window.
    pub fn window(&self) -> &VotingWindow {
        &self.window
    }

    /// Whether `identity` has voted.
    pub fn has_voted(&self, identity: &Identity) -> bool {
        self.votes.has_voted(identity)
    }

    /// Number of identities that have voted.
    pub fn voter_count(&self) -> usize {
        self.votes.voter_count()
    }

    /// Read-only projection at `now`.
    pub fn snapshot(&self, now: Timestamp) -> LedgerSnapshot {
        LedgerSnapshot {
            owner: self.owner(),
            voting_start: self.window.start(),
            voting_end: self.window.end(),
            voting_open: self.window.is_open(now),
            remaining_secs: self.window.remaining(now),
            candidates: self.registry.all().to_vec(),
            voter_count: self.votes.voter_count(),
            taken_at: now,
        }
    }
}

/// Serializable view of the ledger at a point in time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    /// Owner identity.
    pub owner: Identity,
    /// Window start.
    pub voting_start: Timestamp,
    /// Window end (exclusive).
    pub voting_end: Timestamp,
    /// Whether votes are accepted at `taken_at`.
    pub voting_open: bool,
    /// Seconds left at `taken_at`.
    pub remaining_secs: u64,
    /// Candidates in index order.
    pub candidates: Vec<Candidate>,
    /// Number of identities that have voted.
    pub voter_count: usize,
    /// Clock reading the snapshot was taken at.
    pub taken_at: Timestamp,
}
