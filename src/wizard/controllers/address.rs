//! Step 2 controller

use tracing::debug;

use super::{ControllerState, StepOutcome};
use crate::models::AddressDraft;
use crate::validation::{validate_address, FieldErrors};
use crate::wizard::step::Step;
use crate::wizard::store::{StepDraft, WizardStore};

#[derive(Debug)]
pub struct AddressController {
    draft: AddressDraft,
    errors: FieldErrors,
    state: ControllerState,
}

impl AddressController {
    pub fn enter(store: &WizardStore) -> Self {
        Self {
            draft: store.state().step2.clone(),
            errors: FieldErrors::new(),
            state: ControllerState::Editing,
        }
    }

    pub fn draft(&self) -> &AddressDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut AddressDraft {
        &mut self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    /// States selectable for the chosen country
    pub fn state_options(&self) -> &'static [&'static str] {
        self.draft.state_options()
    }

    pub fn select_country(&mut self, country: Option<String>) {
        self.draft.set_country(country);
    }

    /// Validate, save and advance
    pub fn submit(&mut self, store: &mut WizardStore) -> StepOutcome {
        self.state = ControllerState::Submitting;

        match validate_address(&self.draft) {
            Ok(details) => {
                self.errors = FieldErrors::new();
                store.set_step_data(StepDraft::Address(details.into()));
                let to = store.advance();
                self.state = ControllerState::Transitioned;
                StepOutcome::Advanced {
                    to,
                    pending_write: None,
                }
            }
            Err(errors) => {
                debug!(fields = %errors, "address step rejected");
                self.errors = errors;
                self.state = ControllerState::Editing;
                StepOutcome::Invalid
            }
        }
    }

    /// Save the draft as typed and go back
    pub fn previous(&mut self, store: &mut WizardStore) -> Step {
        store.set_step_data(StepDraft::Address(self.draft.clone()));
        self.state = ControllerState::Transitioned;
        store.retreat()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn on_address_step() -> WizardStore {
        let mut store = WizardStore::new();
        store.advance();
        store
    }

    #[test]
    fn test_country_drives_state_options() {
        let store = on_address_step();
        let mut controller = AddressController::enter(&store);
        assert!(controller.state_options().is_empty());

        controller.select_country(Some("India".into()));
        assert_eq!(
            controller.state_options(),
            &["Gujarat", "Maharashtra", "Rajasthan"]
        );

        controller.draft_mut().state = Some("Gujarat".into());
        controller.select_country(Some("USA".into()));
        assert_eq!(controller.state_options(), &["California", "Texas", "New York"]);
        assert_eq!(controller.draft().state, None);
    }

    #[test]
    fn test_invalid_zip_stays_on_step() {
        let mut store = on_address_step();
        let mut controller = AddressController::enter(&store);
        let draft = controller.draft_mut();
        draft.address = Some("1 Rd".into());
        draft.country = Some("India".into());
        draft.zip_code = Some("0".into());
        draft.bank_name = Some("X".into());

        assert!(controller.submit(&mut store).is_invalid());
        assert_eq!(controller.errors().get("zipCode"), Some("ZIP / PIN is required"));
        assert_eq!(store.current_step(), Step::Address);
        assert_eq!(store.state().step2, AddressDraft::default());
    }

    #[test]
    fn test_valid_submit_advances() {
        let mut store = on_address_step();
        let mut controller = AddressController::enter(&store);
        let draft = controller.draft_mut();
        draft.address = Some("1 Rd".into());
        draft.country = Some("India".into());
        draft.zip_code = Some("100".into());
        draft.bank_name = Some("X".into());

        match controller.submit(&mut store) {
            StepOutcome::Advanced { to, pending_write } => {
                assert_eq!(to, Step::Services);
                assert!(pending_write.is_none());
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert_eq!(store.state().step2.zip_code.as_deref(), Some("100"));
    }

    #[test]
    fn test_previous_saves_unvalidated_draft() {
        let mut store = on_address_step();
        let mut controller = AddressController::enter(&store);
        controller.draft_mut().zip_code = Some("abc".into());

        assert_eq!(controller.previous(&mut store), Step::Company);
        assert_eq!(store.state().step2.zip_code.as_deref(), Some("abc"));
        assert_eq!(controller.state(), ControllerState::Transitioned);
    }
}
