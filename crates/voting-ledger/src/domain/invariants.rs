//! # Domain Invariants
//!
//! Rules that must hold for every committed ledger state.
//!
//! | Invariant | Enforced by |
//! |-----------|-------------|
//! | `end > start`, both fixed at construction | [`invariant_window_bounds`] |
//! | Votes target an existing candidate | [`invariant_candidate_exists`] |
//! | One vote per identity, never reset | [`invariant_single_vote`] |

use super::errors::VotingError;
use super::value_objects::{Identity, Timestamp};

/// Seconds in one minute of voting duration.
pub const SECONDS_PER_MINUTE: u64 = 60;

/// Candidates registered by a default deployment.
pub const DEFAULT_CANDIDATES: [&str; 3] = ["Faizan", "Ali", "Malik"];

/// Voting duration of a default deployment, in minutes.
pub const DEFAULT_VOTING_DURATION_MINUTES: u64 = 200;

/// Window length in seconds for `minutes`, or `None` when it is zero or
/// does not fit in a `u64`.
pub fn window_duration_secs(minutes: u64) -> Option<u64> {
    minutes
        .checked_mul(SECONDS_PER_MINUTE)
        .filter(|secs| *secs > 0)
}

/// Invariant: the window is non-empty and representable.
///
/// Returns the exclusive end timestamp `start + minutes * 60`.
pub fn invariant_window_bounds(start: Timestamp, minutes: u64) -> Result<Timestamp, VotingError> {
    window_duration_secs(minutes)
        .and_then(|secs| start.checked_add(secs))
        .ok_or(VotingError::InvalidDuration { minutes, start })
}

/// Invariant: `index` lies within `[0, count)`.
pub fn invariant_candidate_exists(index: usize, count: usize) -> Result<(), VotingError> {
    if index >= count {
        return Err(VotingError::CandidateNotFound { index, count });
    }
    Ok(())
}

/// Invariant: an identity never votes twice.
pub fn invariant_single_vote(voter: Identity, has_voted: bool) -> Result<(), VotingError> {
    if has_voted {
        return Err(VotingError::VoteAlreadyGiven { voter });
    }
    Ok(())
}
