//! The three-step onboarding wizard
//!
//! [`WizardStore`] owns the session state, one controller per step edits
//! it, and [`Shell`] keeps the controller for the current step mounted.

pub mod controllers;
pub mod shell;
pub mod step;
pub mod store;

pub use controllers::{
    AddressController, CompanyController, ControllerState, ServicesController, StepOutcome,
};
pub use shell::{Screen, Shell};
pub use step::Step;
pub use store::{StepDraft, WizardState, WizardStore};
