//! # Domain Errors
//!
//! Failure conditions of the voting ledger. Every variant is terminal for the
//! inputs that produced it and is raised before any state is touched.

use thiserror::Error;

use super::value_objects::{Identity, Timestamp};

/// Voting ledger error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VotingError {
    /// Caller attempted an owner-only operation.
    #[error("Access denied: {caller} is not the owner")]
    AccessDenied {
        /// Identity that made the call
        caller: Identity,
    },

    /// Candidate index is outside the registry bounds.
    #[error("Candidate not found: index {index} (registry has {count} candidates)")]
    CandidateNotFound {
        /// Requested index
        index: usize,
        /// Registry length at the time of the call
        count: usize,
    },

    /// Identity already has a recorded vote.
    #[error("Vote already given by {voter}")]
    VoteAlreadyGiven {
        /// Identity that tried to vote again
        voter: Identity,
    },

    /// Vote submitted outside `[start, end)`.
    #[error("Voting closed at {now}: window is [{start}, {end})")]
    VotingClosed {
        /// Clock reading of the rejected call
        now: Timestamp,
        /// Window start
        start: Timestamp,
        /// Window end (exclusive)
        end: Timestamp,
    },

    /// Duration would produce an empty or overflowing window.
    #[error("Invalid voting duration: {minutes} minutes from start {start}")]
    InvalidDuration {
        /// Requested duration in minutes
        minutes: u64,
        /// Intended window start
        start: Timestamp,
    },
}

impl VotingError {
    /// Stable variant name for reports and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::AccessDenied { .. } => "AccessDenied",
            Self::CandidateNotFound { .. } => "CandidateNotFound",
            Self::VoteAlreadyGiven { .. } => "VoteAlreadyGiven",
            Self::VotingClosed { .. } => "VotingClosed",
            Self::InvalidDuration { .. } => "InvalidDuration",
        }
    }
}
