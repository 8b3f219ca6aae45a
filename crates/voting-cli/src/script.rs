//! # Scripted Sessions
//!
//! Replays a JSON list of steps against a ledger driven by a manual clock,
//! the same way a test harness advances block time between calls.
//!
//! ```json
//! {
//!   "steps": [
//!     { "op": "add_candidate", "caller": "0x…", "name": "Rana" },
//!     { "op": "vote", "caller": "0x…", "index": 1 },
//!     { "op": "advance_time", "secs": 12001 },
//!     { "op": "status" }
//!   ]
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use voting_ledger::{
    Identity, LedgerSnapshot, ManualTimeSource, Timestamp, VotingApi, VotingError, VotingService,
};

/// Session failures.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Script file could not be read.
    #[error("Failed to read script {path}: {source}")]
    Io {
        /// Script path
        path: String,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Script file is not valid JSON for [`Script`].
    #[error("Failed to parse script: {0}")]
    Parse(#[from] serde_json::Error),

    /// A step was rejected in strict mode.
    #[error("Step {step} rejected: {source}")]
    StepRejected {
        /// Zero-based step number
        step: usize,
        /// Ledger error
        #[source]
        source: VotingError,
    },
}

/// One scripted operation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    /// Append a candidate as `caller`.
    AddCandidate {
        /// Calling identity
        caller: Identity,
        /// Candidate name
        name: String,
    },
    /// Vote as `caller` for the candidate at `index`.
    Vote {
        /// Calling identity
        caller: Identity,
        /// Candidate index
        index: usize,
    },
    /// Move the clock forward.
    AdvanceTime {
        /// Seconds to advance
        secs: u64,
    },
    /// Record the window status.
    Status,
}

/// A parsed script.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    /// Steps in execution order.
    pub steps: Vec<Step>,
}

impl Script {
    /// Load a script from a JSON file.
    pub fn load(path: &Path) -> Result<Self, SessionError> {
        let raw = std::fs::read_to_string(path).map_err(|source| SessionError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&raw)
    }

    /// Parse a script from JSON text.
    pub fn parse(raw: &str) -> Result<Self, SessionError> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// What a step did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum Outcome {
    /// Candidate appended at `index`.
    Added {
        /// New index
        index: usize,
    },
    /// Vote accepted; `vote_count` is the candidate's new tally.
    Voted {
        /// Candidate index
        index: usize,
        /// Tally after the vote
        vote_count: u64,
    },
    /// Clock moved to `now`.
    Advanced {
        /// New clock reading
        now: Timestamp,
    },
    /// Window status at the step's time.
    Status {
        /// Whether votes are accepted
        open: bool,
        /// Seconds remaining
        remaining_secs: u64,
    },
    /// Ledger rejected the step.
    Rejected {
        /// Error variant name
        kind: &'static str,
        /// Human-readable message
        message: String,
    },
}

/// Outcome of one step.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StepReport {
    /// Zero-based step number.
    pub step: usize,
    /// Clock reading when the step ran.
    pub at: Timestamp,
    /// Result.
    #[serde(flatten)]
    pub outcome: Outcome,
}

/// Full session result.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SessionReport {
    /// Per-step outcomes.
    pub steps: Vec<StepReport>,
    /// Ledger state after the last step.
    pub final_state: LedgerSnapshot,
}

impl SessionReport {
    /// Number of rejected steps.
    pub fn rejected(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| matches!(s.outcome, Outcome::Rejected { .. }))
            .count()
    }
}

/// Run `script` against `service`.
///
/// Rejected steps are recorded and the session continues, unless `strict` is
/// set, in which case the first rejection aborts the run.
pub fn run_session(
    service: &mut VotingService<ManualTimeSource>,
    script: &Script,
    strict: bool,
) -> Result<SessionReport, SessionError> {
    let mut steps = Vec::with_capacity(script.steps.len());

    for (step, op) in script.steps.iter().enumerate() {
        let at = service.now();
        let result = apply_step(service, op);

        let outcome = match result {
            Ok(outcome) => outcome,
            Err(source) if strict => {
                return Err(SessionError::StepRejected { step, source });
            }
            Err(e) => {
                warn!(step, kind = e.kind(), "Step rejected: {}", e);
                Outcome::Rejected {
                    kind: e.kind(),
                    message: e.to_string(),
                }
            }
        };

        steps.push(StepReport { step, at, outcome });
    }

    let report = SessionReport {
        steps,
        final_state: service.snapshot(),
    };
    info!(
        steps = report.steps.len(),
        rejected = report.rejected(),
        "Session complete"
    );
    Ok(report)
}

fn apply_step(
    service: &mut VotingService<ManualTimeSource>,
    step: &Step,
) -> Result<Outcome, VotingError> {
    match step {
        Step::AddCandidate { caller, name } => {
            let index = service.add_candidate(*caller, name.clone())?;
            Ok(Outcome::Added { index })
        }
        Step::Vote { caller, index } => {
            service.vote(*caller, *index)?;
            let vote_count = service.candidate(*index)?.vote_count;
            Ok(Outcome::Voted {
                index: *index,
                vote_count,
            })
        }
        Step::AdvanceTime { secs } => {
            service.time_source().advance(*secs);
            Ok(Outcome::Advanced { now: service.now() })
        }
        Step::Status => Ok(Outcome::Status {
            open: service.get_voting_status(),
            remaining_secs: service.get_remaining_time(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use voting_ledger::VotingConfig;

    const START: Timestamp = 1_000;

    fn owner() -> Identity {
        Identity::from_bytes([0x01; 20])
    }

    fn voter() -> Identity {
        Identity::from_bytes([0x02; 20])
    }

    fn service() -> VotingService<ManualTimeSource> {
        VotingService::from_config(&VotingConfig::default(), owner(), ManualTimeSource::new(START))
            .unwrap()
    }

    #[test]
    fn test_parse_script() {
        let raw = format!(
            r#"{{"steps": [
                {{"op": "add_candidate", "caller": "{owner}", "name": "Rana"}},
                {{"op": "vote", "caller": "{voter}", "index": 3}},
                {{"op": "advance_time", "secs": 60}},
                {{"op": "status"}}
            ]}}"#,
            owner = owner(),
            voter = voter(),
        );
        let script = Script::parse(&raw).unwrap();
        assert_eq!(script.steps.len(), 4);
        assert_eq!(
            script.steps[1],
            Step::Vote {
                caller: voter(),
                index: 3
            }
        );
        assert_eq!(script.steps[3], Step::Status);
    }

    #[test]
    fn test_parse_rejects_bad_identity() {
        let raw = r#"{"steps": [{"op": "vote", "caller": "0x12", "index": 0}]}"#;
        assert!(matches!(Script::parse(raw), Err(SessionError::Parse(_))));
    }

    #[test]
    fn test_run_session() {
        let script = Script {
            steps: vec![
                Step::AddCandidate {
                    caller: owner(),
                    name: "Rana".to_string(),
                },
                Step::Vote {
                    caller: voter(),
                    index: 3,
                },
                Step::Vote {
                    caller: voter(),
                    index: 1,
                },
                Step::AdvanceTime { secs: 200 * 60 },
                Step::Status,
            ],
        };

        let mut service = service();
        let report = run_session(&mut service, &script, false).unwrap();

        assert_eq!(report.steps[0].outcome, Outcome::Added { index: 3 });
        assert_eq!(
            report.steps[1].outcome,
            Outcome::Voted {
                index: 3,
                vote_count: 1
            }
        );
        assert!(matches!(
            report.steps[2].outcome,
            Outcome::Rejected {
                kind: "VoteAlreadyGiven",
                ..
            }
        ));
        assert_eq!(
            report.steps[3].outcome,
            Outcome::Advanced {
                now: START + 200 * 60
            }
        );
        assert_eq!(
            report.steps[4].outcome,
            Outcome::Status {
                open: false,
                remaining_secs: 0
            }
        );
        assert_eq!(report.rejected(), 1);
        assert_eq!(report.final_state.candidates[3].vote_count, 1);
    }

    #[test]
    fn test_run_session_strict() {
        let script = Script {
            steps: vec![
                Step::AddCandidate {
                    caller: voter(),
                    name: "Sneaky".to_string(),
                },
                Step::Status,
            ],
        };

        let mut service = service();
        let result = run_session(&mut service, &script, true);
        assert!(matches!(
            result,
            Err(SessionError::StepRejected {
                step: 0,
                source: VotingError::AccessDenied { .. }
            })
        ));
        assert_eq!(service.candidate_count(), 3);
    }

    #[test]
    fn test_huge_advance_keeps_window_closed() {
        let script = Script {
            steps: vec![
                Step::AdvanceTime { secs: 200 * 60 + 100 },
                Step::AdvanceTime { secs: u64::MAX },
                Step::Vote {
                    caller: voter(),
                    index: 0,
                },
                Step::Status,
            ],
        };

        let mut service = service();
        let report = run_session(&mut service, &script, false).unwrap();

        assert_eq!(report.steps[1].outcome, Outcome::Advanced { now: u64::MAX });
        assert!(report
            .steps
            .windows(2)
            .all(|pair| pair[0].at <= pair[1].at));
        assert!(matches!(
            report.steps[2].outcome,
            Outcome::Rejected {
                kind: "VotingClosed",
                ..
            }
        ));
        assert_eq!(
            report.steps[3].outcome,
            Outcome::Status {
                open: false,
                remaining_secs: 0
            }
        );
        assert_eq!(service.voter_count(), 0);
    }

    #[test]
    fn test_report_serializes() {
        let script = Script {
            steps: vec![Step::Status],
        };
        let mut service = service();
        let report = run_session(&mut service, &script, false).unwrap();

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["steps"][0]["result"], "status");
        assert_eq!(json["steps"][0]["open"], true);
        assert_eq!(json["steps"][0]["at"], START);
        assert_eq!(json["final_state"]["candidates"][0]["name"], "Faizan");
    }
}
