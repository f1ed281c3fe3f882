//! Wizard state store
//!
//! Holds the three step drafts and the current step. There is exactly one
//! store per session; it is owned by the application and lent to whichever
//! controller is active. Every operation is synchronous and replaces state
//! wholesale, so a reader never observes a half-applied change.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::step::Step;
use crate::models::{AddressDraft, CompanyDraft, ServicesDraft};

/// Everything the wizard has collected so far
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardState {
    pub step1: CompanyDraft,
    pub step2: AddressDraft,
    pub step3: ServicesDraft,
    pub current_step: Step,
}

/// Data for one step slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepDraft {
    Company(CompanyDraft),
    Address(AddressDraft),
    Services(ServicesDraft),
}

impl StepDraft {
    /// Slot this draft belongs to
    pub fn step(&self) -> Step {
        match self {
            Self::Company(_) => Step::Company,
            Self::Address(_) => Step::Address,
            Self::Services(_) => Step::Services,
        }
    }
}

/// Owner of the session's [`WizardState`]
#[derive(Debug, Default)]
pub struct WizardStore {
    state: WizardState,
}

impl WizardStore {
    /// Fresh store on step 1 with empty drafts
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow the current state
    pub fn state(&self) -> &WizardState {
        &self.state
    }

    /// Owned copy of the current state
    pub fn snapshot(&self) -> WizardState {
        self.state.clone()
    }

    pub fn current_step(&self) -> Step {
        self.state.current_step
    }

    /// Replace one step's slot wholesale
    pub fn set_step_data(&mut self, draft: StepDraft) {
        debug!(step = draft.step().index(), "step data replaced");
        match draft {
            StepDraft::Company(d) => self.state.step1 = d,
            StepDraft::Address(d) => self.state.step2 = d,
            StepDraft::Services(d) => self.state.step3 = d,
        }
    }

    /// Move forward one step (no-op on the last step)
    pub fn advance(&mut self) -> Step {
        self.state.current_step = self.state.current_step.next();
        debug!(step = self.state.current_step.index(), "advanced");
        self.state.current_step
    }

    /// Move back one step (no-op on the first step)
    pub fn retreat(&mut self) -> Step {
        self.state.current_step = self.state.current_step.prev();
        debug!(step = self.state.current_step.index(), "retreated");
        self.state.current_step
    }

    /// Restore the initial state
    pub fn reset(&mut self) {
        self.state = WizardState::default();
        debug!("wizard reset");
    }
}
