//! # Voting CLI
//!
//! Boundary layer around the voting ledger: logging setup, deployment from
//! configuration, and scripted sessions against a simulated clock.
//!
//! ## Module Structure
//!
//! ```text
//! voting-cli/
//! ├── logging.rs   # LogConfig + tracing-subscriber setup
//! ├── script.rs    # JSON step scripts and the session runner
//! └── main.rs      # clap entry point (deploy, run)
//! ```

#![warn(missing_docs)]

pub mod logging;
pub mod script;

pub use logging::{init_logging, LogConfig, LoggingError};
pub use script::{run_session, Outcome, Script, SessionError, SessionReport, Step, StepReport};
