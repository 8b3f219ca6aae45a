//! # Inbound Port - VotingApi
//!
//! Driving port exposed to callers. Every mutating method takes the caller
//! identity explicitly; time comes from the service's [`TimeSource`].
//!
//! | Method | Authorized Caller | Failure |
//! |--------|-------------------|---------|
//! | `add_candidate` | Owner | `AccessDenied` |
//! | `vote` | Anyone, once, while open | `VotingClosed`, `CandidateNotFound`, `VoteAlreadyGiven` |
//! | queries | Anyone | none |
//!
//! [`TimeSource`]: super::outbound::TimeSource

use crate::domain::{Candidate, Identity, Timestamp, VotingError};

/// Primary API of the voting ledger.
///
/// # Example
///
/// ```rust
/// use voting_ledger::{Identity, ManualTimeSource, VotingApi, VotingService};
///
/// let owner = Identity::from_bytes([1; 20]);
/// let voter = Identity::from_bytes([2; 20]);
/// let mut service = VotingService::new(
///     ["Faizan", "Ali", "Malik"],
///     200,
///     owner,
///     ManualTimeSource::new(1_700_000_000),
/// )
/// .unwrap();
///
/// service.vote(voter, 1).unwrap();
/// assert!(service.voters(&voter));
/// assert_eq!(service.get_all_votes()[1].vote_count, 1);
/// ```
pub trait VotingApi: Send + Sync {
    /// Append a candidate. Owner only; allowed whether or not voting is open.
    ///
    /// # Errors
    /// - `AccessDenied`: caller is not the owner
    fn add_candidate(&mut self, caller: Identity, name: String) -> Result<usize, VotingError>;

    /// Cast the caller's single vote.
    ///
    /// # Errors
    /// - `VotingClosed`: outside `[start, end)`
    /// - `CandidateNotFound`: index out of bounds
    /// - `VoteAlreadyGiven`: caller has voted before
    fn vote(&mut self, caller: Identity, index: usize) -> Result<(), VotingError>;

    /// All candidates with live tallies, in index order.
    fn get_all_votes(&self) -> &[Candidate];

    /// The owner identity.
    fn get_owner(&self) -> Identity;

    /// Window start.
    fn voting_start(&self) -> Timestamp;

    /// Window end (exclusive).
    fn voting_end(&self) -> Timestamp;

    /// Whether votes are accepted right now.
    fn get_voting_status(&self) -> bool;

    /// Seconds until the window ends, 0 once ended.
    fn get_remaining_time(&self) -> u64;

    /// Whether `identity` has voted.
    fn voters(&self, identity: &Identity) -> bool;
}
