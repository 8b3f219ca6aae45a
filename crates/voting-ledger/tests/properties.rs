//! Property tests for construction, access control, voting and the window.

use proptest::prelude::*;

use voting_ledger::{Identity, LedgerState, VotingError};

const START: u64 = 1_000_000;

fn identity() -> impl Strategy<Value = Identity> {
    any::<[u8; 20]>().prop_map(Identity::from_bytes)
}

fn names() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[A-Za-z]{1,8}", 0..8)
}

proptest! {
    #[test]
    fn construction_registers_every_name(
        names in names(),
        minutes in 1u64..100_000,
        owner in identity(),
    ) {
        let state = LedgerState::new(names.clone(), minutes, owner, START).unwrap();

        prop_assert_eq!(state.candidates().len(), names.len());
        for (candidate, name) in state.candidates().iter().zip(&names) {
            prop_assert_eq!(&candidate.name, name);
            prop_assert_eq!(candidate.vote_count, 0);
        }
        prop_assert_eq!(state.window().end() - state.window().start(), minutes * 60);
        prop_assert_eq!(state.owner(), owner);
    }

    #[test]
    fn non_owner_cannot_add(
        owner in identity(),
        caller in identity(),
        name in "[a-z]{1,6}",
    ) {
        prop_assume!(owner != caller);
        let mut state = LedgerState::new(["a", "b"], 10, owner, START).unwrap();

        prop_assert_eq!(
            state.add_candidate(caller, name),
            Err(VotingError::AccessDenied { caller })
        );
        prop_assert_eq!(state.candidates().len(), 2);
    }

    #[test]
    fn owner_append_lands_last(
        owner in identity(),
        existing in names(),
        name in "[a-z]{1,6}",
    ) {
        let mut state = LedgerState::new(existing.clone(), 10, owner, START).unwrap();
        let index = state.add_candidate(owner, name.clone()).unwrap();

        prop_assert_eq!(index, existing.len());
        let last = state.candidates().last().unwrap();
        prop_assert_eq!(&last.name, &name);
        prop_assert_eq!(last.vote_count, 0);
    }

    #[test]
    fn out_of_range_vote_is_not_found(
        voter in identity(),
        count in 0usize..6,
        excess in 0usize..100,
    ) {
        let names: Vec<String> = (0..count).map(|i| format!("c{i}")).collect();
        let mut state = LedgerState::new(names, 10, voter, START).unwrap();

        prop_assert_eq!(
            state.vote(voter, count + excess, START),
            Err(VotingError::CandidateNotFound { index: count + excess, count })
        );
        prop_assert!(!state.has_voted(&voter));
    }

    #[test]
    fn vote_increments_only_target(
        owner in identity(),
        voter in identity(),
        target in 0usize..4,
        second in 0usize..4,
        offset in 0u64..600,
    ) {
        let mut state = LedgerState::new(["a", "b", "c", "d"], 10, owner, START).unwrap();
        let now = START + offset;

        state.vote(voter, target, now).unwrap();
        prop_assert!(state.has_voted(&voter));
        for (i, c) in state.candidates().iter().enumerate() {
            prop_assert_eq!(c.vote_count, u64::from(i == target));
        }

        prop_assert_eq!(
            state.vote(voter, second, now),
            Err(VotingError::VoteAlreadyGiven { voter })
        );
        for (i, c) in state.candidates().iter().enumerate() {
            prop_assert_eq!(c.vote_count, u64::from(i == target));
        }
    }

    #[test]
    fn window_status_and_remaining(
        minutes in 1u64..10_000,
        now in 0u64..(2 * START),
    ) {
        let state = LedgerState::new(["a"], minutes, Identity::from_bytes([0; 20]), START).unwrap();
        let window = state.window();
        let end = START + minutes * 60;

        prop_assert_eq!(window.is_open(now), START <= now && now < end);
        if now >= end {
            prop_assert_eq!(window.remaining(now), 0);
        } else {
            prop_assert_eq!(window.remaining(now), end - now);
        }
    }
}
