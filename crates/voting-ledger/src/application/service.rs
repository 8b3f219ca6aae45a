//! # Voting Service
//!
//! Application service wrapping the ledger state and its clock. Each call
//! reads the time source once and hands that reading to the domain.

use tracing::{debug, info, warn};

use crate::config::VotingConfig;
use crate::domain::{Candidate, Identity, LedgerSnapshot, LedgerState, Timestamp, VotingError};
use crate::ports::{TimeSource, VotingApi};

/// Voting Service - single owner of a [`LedgerState`].
pub struct VotingService<T: TimeSource> {
    /// Ledger state.
    state: LedgerState,
    /// Clock consulted for window checks.
    time_source: T,
}

impl<T: TimeSource> VotingService<T> {
    /// Construct the ledger. `owner` is the deploying identity and the window
    /// opens at the time source's current reading.
    pub fn new<I, S>(
        names: I,
        duration_minutes: u64,
        owner: Identity,
        time_source: T,
    ) -> Result<Self, VotingError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let now = time_source.now();
        let state = LedgerState::new(names, duration_minutes, owner, now)?;

        info!(
            owner = %owner,
            candidates = state.candidates().len(),
            voting_start = state.window().start(),
            voting_end = state.window().end(),
            "Voting ledger constructed"
        );

        Ok(Self { state, time_source })
    }

    /// Construct from a deployment config.
    pub fn from_config(
        config: &VotingConfig,
        owner: Identity,
        time_source: T,
    ) -> Result<Self, VotingError> {
        Self::new(
            config.candidates.iter().cloned(),
            config.voting_duration_minutes,
            owner,
            time_source,
        )
    }

    /// Underlying ledger state.
    pub fn state(&self) -> &LedgerState {
        &self.state
    }

    /// The injected clock.
    pub fn time_source(&self) -> &T {
        &self.time_source
    }

    /// Current clock reading.
    pub fn now(&self) -> Timestamp {
        self.time_source.now()
    }

    /// Candidate at `index`.
    pub fn candidate(&self, index: usize) -> Result<&Candidate, VotingError> {
        self.state.candidate(index)
    }

    /// Number of registered candidates.
    pub fn candidate_count(&self) -> usize {
        self.state.candidates().len()
    }

    /// Number of identities that have voted.
    pub fn voter_count(&self) -> usize {
        self.state.voter_count()
    }

    /// Current leader (index, candidate); `None` before the first vote.
    pub fn leader(&self) -> Option<(usize, &Candidate)> {
        self.state.leader()
    }

    /// Snapshot at the current clock reading.
    pub fn snapshot(&self) -> LedgerSnapshot {
        self.state.snapshot(self.now())
    }
}

impl<T: TimeSource> VotingApi for VotingService<T> {
    fn add_candidate(&mut self, caller: Identity, name: String) -> Result<usize, VotingError> {
        match self.state.add_candidate(caller, name) {
            Ok(index) => {
                info!(caller = %caller, index, "Candidate added");
                Ok(index)
            }
            Err(e) => {
                warn!(caller = %caller, "Rejected candidate addition: {}", e);
                Err(e)
            }
        }
    }

    fn vote(&mut self, caller: Identity, index: usize) -> Result<(), VotingError> {
        let now = self.time_source.now();
        match self.state.vote(caller, index, now) {
            Ok(()) => {
                debug!(
                    caller = %caller,
                    index,
                    now,
                    vote_count = self.state.candidates()[index].vote_count,
                    "Vote accepted"
                );
                Ok(())
            }
            Err(e) => {
                warn!(caller = %caller, index, now, "Rejected vote: {}", e);
                Err(e)
            }
        }
    }

    fn get_all_votes(&self) -> &[Candidate] {
        self.state.candidates()
    }

    fn get_owner(&self) -> Identity {
        self.state.owner()
    }

    fn voting_start(&self) -> Timestamp {
        self.state.window().start()
    }

    fn voting_end(&self) -> Timestamp {
        self.state.window().end()
    }

    fn get_voting_status(&self) -> bool {
        self.state.window().is_open(self.now())
    }

    fn get_remaining_time(&self) -> u64 {
        self.state.window().remaining(self.now())
    }

    fn voters(&self, identity: &Identity) -> bool {
        self.state.has_voted(identity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::ManualTimeSource;
    use std::sync::Arc;

    const START: Timestamp = 1_700_000_000;

    fn owner() -> Identity {
        Identity::from_bytes([0x11; 20])
    }

    fn create_test_service() -> (VotingService<Arc<ManualTimeSource>>, Arc<ManualTimeSource>) {
        let clock = Arc::new(ManualTimeSource::new(START));
        let service = VotingService::from_config(
            &VotingConfig::default(),
            owner(),
            Arc::clone(&clock),
        )
        .unwrap();
        (service, clock)
    }

    #[test]
    fn test_service_creation() {
        let (service, _) = create_test_service();
        assert_eq!(service.candidate_count(), 3);
        assert_eq!(service.voter_count(), 0);
        assert_eq!(service.get_owner(), owner());
        assert_eq!(service.voting_start(), START);
        assert_eq!(service.voting_end(), START + 200 * 60);
        assert!(service.leader().is_none());
    }

    #[test]
    fn test_service_invalid_duration() {
        let result = VotingService::new(["a"], 0, owner(), ManualTimeSource::new(START));
        assert!(matches!(result, Err(VotingError::InvalidDuration { .. })));
    }

    #[test]
    fn test_service_vote_reads_clock() {
        let (mut service, clock) = create_test_service();
        let voter = Identity::from_bytes([0x22; 20]);

        clock.advance(200 * 60);
        assert!(!service.get_voting_status());
        assert!(matches!(
            service.vote(voter, 0),
            Err(VotingError::VotingClosed { .. })
        ));
        assert!(!service.voters(&voter));
    }

    #[test]
    fn test_service_status_and_remaining() {
        let (service, clock) = create_test_service();
        assert!(service.get_voting_status());
        assert_eq!(service.get_remaining_time(), 200 * 60);

        clock.advance(1);
        assert_eq!(service.get_remaining_time(), 200 * 60 - 1);

        clock.set(service.voting_end() + 1);
        assert_eq!(service.get_remaining_time(), 0);
    }

    #[test]
    fn test_service_snapshot() {
        let (mut service, _) = create_test_service();
        service.vote(Identity::from_bytes([0x22; 20]), 2).unwrap();

        let snap = service.snapshot();
        assert_eq!(snap.owner, owner());
        assert_eq!(snap.voter_count, 1);
        assert_eq!(snap.candidates[2].vote_count, 1);
        assert_eq!(service.leader().map(|(i, _)| i), Some(2));
    }
}
