//! # Domain Entities
//!
//! Candidates and the append-only registry that holds them.

use serde::{Deserialize, Serialize};

use super::errors::VotingError;
use super::invariants::invariant_candidate_exists;

/// A named candidate and its running tally.
///
/// Identified by its registry index; `vote_count` only ever grows by one per
/// accepted vote.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// Display name (duplicates permitted).
    pub name: String,
    /// Accepted votes.
    pub vote_count: u64,
}

impl Candidate {
    /// Create a candidate with no votes.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            vote_count: 0,
        }
    }
}

/// Ordered, append-only candidate collection.
///
/// Insertion order is index order. Entries are never removed or reordered,
/// so an index handed out by [`append`](Self::append) stays valid forever.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateRegistry {
    candidates: Vec<Candidate>,
}

impl CandidateRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a candidate with zero votes and return its index.
    pub fn append(&mut self, name: impl Into<String>) -> usize {
        self.candidates.push(Candidate::new(name));
        self.candidates.len() - 1
    }

    /// Look up a candidate by index.
    pub fn get(&self, index: usize) -> Result<&Candidate, VotingError> {
        self.candidates
            .get(index)
            .ok_or(VotingError::CandidateNotFound {
                index,
                count: self.candidates.len(),
            })
    }

    /// Ordered view of every candidate.
    pub fn all(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Add one vote to the candidate at `index`.
    pub fn increment_vote(&mut self, index: usize) -> Result<(), VotingError> {
        invariant_candidate_exists(index, self.candidates.len())?;
        self.candidates[index].vote_count += 1;
        Ok(())
    }

    /// Number of registered candidates.
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// True when no candidate has been registered.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Index and entry of the candidate with the most votes.
    ///
    /// Ties go to the lowest index. `None` until at least one vote is cast.
    pub fn leader(&self) -> Option<(usize, &Candidate)> {
        self.candidates
            .iter()
            .enumerate()
            .filter(|(_, c)| c.vote_count > 0)
            .fold(None, |best, (i, c)| match best {
                Some((_, b)) if b.vote_count >= c.vote_count => best,
                _ => Some((i, c)),
            })
    }
}

impl<S: Into<String>> FromIterator<S> for CandidateRegistry {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut registry = Self::new();
        for name in iter {
            registry.append(name);
        }
        registry
    }
}
