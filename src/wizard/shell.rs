//! Maps the store's current step to the screen that edits it

use tracing::debug;

use super::controllers::{AddressController, CompanyController, ServicesController};
use super::step::Step;
use super::store::WizardStore;
use crate::error::OnboardResult;
use crate::storage::BlobStore;

/// The mounted step controller
#[derive(Debug)]
pub enum Screen {
    Company(CompanyController),
    Address(AddressController),
    Services(ServicesController),
}

impl Screen {
    /// Mount the controller for `step`, loading its defaults
    pub fn enter(step: Step, store: &WizardStore, blobs: &dyn BlobStore) -> Self {
        match step {
            Step::Company => Self::Company(CompanyController::enter(store, blobs)),
            Step::Address => Self::Address(AddressController::enter(store)),
            Step::Services => Self::Services(ServicesController::enter(store)),
        }
    }

    /// Mount by 1-based index; anything outside 1..=3 is a configuration error
    pub fn enter_index(index: u8, store: &WizardStore, blobs: &dyn BlobStore) -> OnboardResult<Self> {
        let step = Step::try_from(index)?;
        Ok(Self::enter(step, store, blobs))
    }

    pub fn step(&self) -> Step {
        match self {
            Self::Company(_) => Step::Company,
            Self::Address(_) => Step::Address,
            Self::Services(_) => Step::Services,
        }
    }
}

/// Keeps exactly one screen mounted, matching the store
#[derive(Debug)]
pub struct Shell {
    screen: Screen,
}

impl Shell {
    pub fn new(store: &WizardStore, blobs: &dyn BlobStore) -> Self {
        Self {
            screen: Screen::enter(store.current_step(), store, blobs),
        }
    }

    /// Remount if the store has moved to a different step; returns whether it did
    pub fn sync(&mut self, store: &WizardStore, blobs: &dyn BlobStore) -> bool {
        let step = store.current_step();
        if step == self.screen.step() {
            return false;
        }
        debug!(from = self.screen.step().index(), to = step.index(), "screen changed");
        self.screen = Screen::enter(step, store, blobs);
        true
    }

    pub fn step(&self) -> Step {
        self.screen.step()
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn screen_mut(&mut self) -> &mut Screen {
        &mut self.screen
    }
}
