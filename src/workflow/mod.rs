//! Breach triage workflow
//!
//! Coordinates the operator-facing flow around the external risk-check and
//! termination services: run a check, review results, open the termination
//! modal for one breach, confirm or cancel, refresh.


use crate::error::{DeskError, Result};
use crate::types::{Breach, BreachReport, TerminationReason, TerminationRequest};
use async_trait::async_trait;

/// External breach-check and termination services
#[async_trait]
pub trait BreachService: Send + Sync {
    /// Run a breach check across all live accounts
    async fn run_breach_check(&self) -> Result<BreachReport>;

    /// Terminate one challenge
    async fn terminate(&self, request: &TerminationRequest) -> Result<()>;
}

/// Termination modal contents while it is open
#[derive(Debug, Clone)]
pub struct TerminationModal {
    report: BreachReport,
    selected: usize,
    /// Pre-populated from the breach type; `None` when unrecognized
    pub reason: Option<TerminationReason>,
    /// Message from the last failed terminate attempt, if any
    pub last_error: Option<String>,
}

impl TerminationModal {
    /// The breach this modal was opened for
    pub fn breach(&self) -> &Breach {
        &self.report.breaches[self.selected]
    }
}

/// Workflow state for one triage session
#[derive(Debug, Clone)]
pub enum TriageState {
    Idle,
    Checking,
    Results(BreachReport),
    TerminationModal(TerminationModal),
    Terminating(TerminationModal),
    Error(String),
}

impl TriageState {
    fn name(&self) -> &'static str {
        match self {
            TriageState::Idle => "Idle",
            TriageState::Checking => "Checking",
            TriageState::Results(_) => "Results",
            TriageState::TerminationModal(_) => "TerminationModal",
            TriageState::Terminating(_) => "Terminating",
            TriageState::Error(_) => "Error",
        }
    }
}

/// Drives the breach triage state machine against an external service.
///
/// Single-session: state is owned exclusively by the coordinator and only
/// mutated in response to completed calls. At most one check or termination
/// is in flight at a time; a second trigger is rejected, not queued.
pub struct BreachWorkflowCoordinator<S: BreachService> {
    service: S,
    state: TriageState,
}

impl<S: BreachService> BreachWorkflowCoordinator<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            state: TriageState::Idle,
        }
    }

    pub fn state(&self) -> &TriageState {
        &self.state
    }

    /// Breach list when results are on screen
    pub fn breaches(&self) -> Option<&[Breach]> {
        match &self.state {
            TriageState::Results(report) => Some(&report.breaches),
            _ => None,
        }
    }

    /// Run a breach check. Allowed from `Idle`, `Results` and `Error`.
    ///
    /// On success the coordinator holds the returned report; on business or
    /// transport failure it enters `Error` with the message and the operator
    /// retries manually. No automatic retry.
    pub async fn run_check(&mut self) -> Result<()> {
        match self.state {
            TriageState::Idle | TriageState::Results(_) | TriageState::Error(_) => {}
            ref other => {
                return Err(DeskError::InvalidTransition(format!(
                    "Cannot start a breach check from {}",
                    other.name()
                )));
            }
        }

        self.state = TriageState::Checking;
        match self.service.run_breach_check().await {
            Ok(report) => {
                tracing::info!("Breach check found {} breach(es)", report.breaches_found);
                self.state = TriageState::Results(report);
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Breach check failed: {}", e);
                self.state = TriageState::Error(e.to_string());
                Err(e)
            }
        }
    }

    /// Open the termination modal for one breach from the results list
    pub fn select_breach(&mut self, index: usize) -> Result<()> {
        let report = match &self.state {
            TriageState::Results(report) => report,
            other => {
                return Err(DeskError::InvalidTransition(format!(
                    "No breach results to select from in {}",
                    other.name()
                )));
            }
        };

        let breach = report.breaches.get(index).ok_or_else(|| {
            DeskError::Validation(format!("No breach at index {}", index))
        })?;
        let reason = TerminationReason::from_breach_type(&breach.breach_type);

        let report = report.clone();
        self.state = TriageState::TerminationModal(TerminationModal {
            report,
            selected: index,
            reason,
            last_error: None,
        });
        Ok(())
    }

    /// Change the reason in the open modal
    pub fn set_reason(&mut self, reason: TerminationReason) -> Result<()> {
        match &mut self.state {
            TriageState::TerminationModal(modal) => {
                modal.reason = Some(reason);
                Ok(())
            }
            other => Err(DeskError::InvalidTransition(format!(
                "No termination modal open in {}",
                other.name()
            ))),
        }
    }

    /// Close the modal and return to the results list. No side effects.
    pub fn cancel(&mut self) -> Result<()> {
        match std::mem::replace(&mut self.state, TriageState::Idle) {
            TriageState::TerminationModal(modal) => {
                self.state = TriageState::Results(modal.report);
                Ok(())
            }
            other => {
                let name = other.name();
                self.state = other;
                Err(DeskError::InvalidTransition(format!(
                    "No termination modal open in {}",
                    name
                )))
            }
        }
    }

    /// Confirm the termination in the open modal.
    ///
    /// Rejected without a network call when no reason is set. On success the
    /// modal closes and a fresh breach check runs; on failure the modal
    /// stays open holding the error message so the operator can retry.
    pub async fn confirm(&mut self) -> Result<()> {
        let modal = match &self.state {
            TriageState::TerminationModal(modal) => modal,
            other => {
                return Err(DeskError::InvalidTransition(format!(
                    "No termination modal open in {}",
                    other.name()
                )));
            }
        };

        let reason = modal.reason.ok_or_else(|| {
            DeskError::Validation("A termination reason is required".to_string())
        })?;
        let request = TerminationRequest::new(modal.breach(), reason);

        let modal = match std::mem::replace(&mut self.state, TriageState::Idle) {
            TriageState::TerminationModal(modal) => modal,
            _ => unreachable!("state checked above"),
        };
        self.state = TriageState::Terminating(modal);

        match self.service.terminate(&request).await {
            Ok(()) => {
                tracing::info!(
                    "Terminated challenge {} ({})",
                    request.challenge_id,
                    request.reason
                );
                // Refresh the breach list now that one account is gone
                self.state = TriageState::Idle;
                self.run_check().await
            }
            Err(e) => {
                tracing::warn!("Termination failed: {}", e);
                let mut modal = match std::mem::replace(&mut self.state, TriageState::Idle) {
                    TriageState::Terminating(modal) => modal,
                    _ => unreachable!("state set above"),
                };
                modal.last_error = Some(e.to_string());
                self.state = TriageState::TerminationModal(modal);
                Err(e)
            }
        }
    }
}
