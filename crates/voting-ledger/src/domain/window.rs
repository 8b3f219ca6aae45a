//! # Voting Window
//!
//! The half-open interval `[start, end)` during which votes are accepted.
//! Both answers are pure functions of the bounds and the supplied `now`.

use serde::{Deserialize, Serialize};

use super::errors::VotingError;
use super::invariants::{invariant_window_bounds, SECONDS_PER_MINUTE};
use super::value_objects::Timestamp;

/// Fixed voting period.
///
/// Deserialized windows go through the same bounds check as [`new`](Self::new).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawWindow")]
pub struct VotingWindow {
    start: Timestamp,
    end: Timestamp,
}

/// Unchecked wire form of a [`VotingWindow`].
#[derive(Deserialize)]
struct RawWindow {
    start: Timestamp,
    end: Timestamp,
}

impl TryFrom<RawWindow> for VotingWindow {
    type Error = VotingError;

    fn try_from(raw: RawWindow) -> Result<Self, Self::Error> {
        let minutes = raw.end.saturating_sub(raw.start) / SECONDS_PER_MINUTE;
        let window = Self::new(raw.start, minutes)?;
        if window.end != raw.end {
            return Err(VotingError::InvalidDuration {
                minutes,
                start: raw.start,
            });
        }
        Ok(window)
    }
}

impl VotingWindow {
    /// Open a window of `duration_minutes` starting at `start`.
    pub fn new(start: Timestamp, duration_minutes: u64) -> Result<Self, VotingError> {
        let end = invariant_window_bounds(start, duration_minutes)?;
        Ok(Self { start, end })
    }

    /// Inclusive start.
    pub fn start(&self) -> Timestamp {
        self.start
    }

    /// Exclusive end.
    pub fn end(&self) -> Timestamp {
        self.end
    }

    /// Length of the window in seconds.
    pub fn duration(&self) -> u64 {
        self.end.saturating_sub(self.start)
    }

    /// True iff `start <= now < end`.
    pub fn is_open(&self, now: Timestamp) -> bool {
        self.start <= now && now < self.end
    }

    /// Seconds until `end`, or 0 once the window has ended.
    ///
    /// Before `start` this is larger than [`duration`](Self::duration).
    pub fn remaining(&self, now: Timestamp) -> u64 {
        self.end.saturating_sub(now)
    }

    /// Fail with `VotingClosed` unless the window is open at `now`.
    pub fn require_open(&self, now: Timestamp) -> Result<(), VotingError> {
        if !self.is_open(now) {
            return Err(VotingError::VotingClosed {
                now,
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }
}
