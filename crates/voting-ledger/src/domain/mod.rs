//! # Domain Module
//!
//! Pure ledger logic. Nothing here reads a clock or logs; `now` and the
//! caller identity always arrive as arguments.
//!
//! ## Components
//!
//! - `value_objects`: Identity, Timestamp
//! - `entities`: Candidate, CandidateRegistry
//! - `access`: AccessControl (single owner)
//! - `window`: VotingWindow (`[start, end)`)
//! - `ledger`: VoteLedger (one vote per identity)
//! - `state`: LedgerState aggregate, LedgerSnapshot
//! - `invariants`: window, candidate and single-vote rules
//! - `errors`: VotingError

pub mod access;
pub mod entities;
pub mod errors;
pub mod invariants;
pub mod ledger;
pub mod state;
pub mod value_objects;
pub mod window;

pub use access::*;
pub use entities::*;
pub use errors::*;
pub use invariants::*;
pub use ledger::*;
pub use state::*;
pub use value_objects::*;
pub use window::*;
