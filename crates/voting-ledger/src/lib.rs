//! # Voting Ledger
//!
//! Owner-gated candidate registry with one vote per identity inside a fixed
//! time window.
//!
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! Records candidates, restricts additions to a single owner fixed at
//! construction, accepts at most one vote per identity, and only while the
//! window `[start, end)` is open. Tallies are always readable live.
//!
//! ## Domain Invariants
//!
//! | Invariant | Enforcement Location |
//! |-----------|---------------------|
//! | Single immutable owner | `domain/access.rs` - `require_owner()` |
//! | Append-only registry, stable indices | `domain/entities.rs` - `append()` |
//! | One vote per identity, never reset | `domain/ledger.rs` - `record_vote()` |
//! | Tally grows by exactly 1 per accepted vote | `domain/entities.rs` - `increment_vote()` |
//! | `end > start`, fixed at construction | `domain/invariants.rs` - `invariant_window_bounds()` |
//! | No partial effect on failure | `domain/ledger.rs` - checks before mutation |
//!
//! ## Vote Check Order
//!
//! | Step | Check | Error |
//! |------|-------|-------|
//! | 1 | `start <= now < end` | `VotingClosed` |
//! | 2 | `index < candidates.len()` | `CandidateNotFound` |
//! | 3 | caller has not voted | `VoteAlreadyGiven` |
//!
//! ## Outbound Dependencies
//!
//! | Trait | Purpose |
//! |-------|---------|
//! | `TimeSource` | Current timestamp for window checks |
//!
//! ## Module Structure
//!
//! ```text
//! voting-ledger/
//! ├── domain/          # Identity, Candidate, registry, window, ledger, errors
//! ├── ports/           # VotingApi (inbound) + TimeSource (outbound)
//! ├── application/     # VotingService orchestrating everything
//! └── config.rs        # VotingConfig
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

// Re-exports
pub use application::VotingService;
pub use config::{ConfigError, VotingConfig};
pub use domain::{
    AccessControl, Address, Candidate, CandidateRegistry, Identity, IdentityParseError,
    LedgerSnapshot, LedgerState, Timestamp, VoteLedger, VotingError, VotingWindow,
    DEFAULT_CANDIDATES, DEFAULT_VOTING_DURATION_MINUTES, SECONDS_PER_MINUTE,
};
pub use ports::{ManualTimeSource, SystemTimeSource, TimeSource, VotingApi};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
