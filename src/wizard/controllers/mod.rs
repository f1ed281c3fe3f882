//! Step controllers
//!
//! One controller per step. A controller loads its defaults from the store
//! on entry, owns the draft while the step is on screen and decides whether
//! a submit may leave the step. Rejected submits never touch the store.

pub mod address;
pub mod company;
pub mod services;

pub use address::AddressController;
pub use company::CompanyController;
pub use services::ServicesController;

use super::step::Step;
use crate::storage::PendingWrite;
use crate::submission::Submission;

/// Lifecycle of a controller while its step is mounted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControllerState {
    #[default]
    Editing,
    Submitting,
    /// The store has moved on; the controller is about to be replaced
    Transitioned,
}

/// Result of pressing Next or Submit
#[derive(Debug)]
pub enum StepOutcome {
    /// Validation failed; field errors are on the controller
    Invalid,
    /// Draft saved and the wizard moved to `to`
    Advanced {
        to: Step,
        /// Attachment write started by this transition, if any
        pending_write: Option<PendingWrite>,
    },
    /// Final step accepted and the wizard reset
    Submitted(Submission),
}

impl StepOutcome {
    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid)
    }
}
