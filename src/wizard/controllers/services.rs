//! Step 3 controller

use tracing::{debug, error, info};

use super::{ControllerState, StepOutcome};
use crate::error::OnboardResult;
use crate::models::{AttachmentRef, Service, ServicesDraft};
use crate::submission::{Submission, SubmissionSink};
use crate::validation::{validate_services, FieldErrors};
use crate::wizard::step::Step;
use crate::wizard::store::{StepDraft, WizardStore};

#[derive(Debug)]
pub struct ServicesController {
    draft: ServicesDraft,
    errors: FieldErrors,
    state: ControllerState,
}

impl ServicesController {
    pub fn enter(store: &WizardStore) -> Self {
        Self {
            draft: store.state().step3.clone(),
            errors: FieldErrors::new(),
            state: ControllerState::Editing,
        }
    }

    pub fn draft(&self) -> &ServicesDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut ServicesDraft {
        &mut self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn toggle_service(&mut self, service: Service) {
        self.draft.toggle_service(service);
    }

    /// Attach the final document by path; blank input removes it
    pub fn attach_document(&mut self, input: &str) {
        self.draft.final_doc = AttachmentRef::from_input(input);
    }

    /// Validate, save, hand the combined record to `sink` and reset the wizard
    ///
    /// If the sink refuses the record the saved step 3 draft is kept, the
    /// wizard is not reset and the error is returned.
    pub fn submit(
        &mut self,
        store: &mut WizardStore,
        sink: &dyn SubmissionSink,
    ) -> OnboardResult<StepOutcome> {
        self.state = ControllerState::Submitting;

        let details = match validate_services(&self.draft) {
            Ok(details) => details,
            Err(errors) => {
                debug!(fields = %errors, "services step rejected");
                self.errors = errors;
                self.state = ControllerState::Editing;
                return Ok(StepOutcome::Invalid);
            }
        };

        self.errors = FieldErrors::new();
        store.set_step_data(StepDraft::Services(details.clone().into()));

        let delivered = Submission::collect(store.state(), details)
            .and_then(|submission| sink.submit(&submission).map(|()| submission));

        match delivered {
            Ok(submission) => {
                store.reset();
                self.state = ControllerState::Transitioned;
                info!(company = %submission.step1.company_name, "onboarding submitted");
                Ok(StepOutcome::Submitted(submission))
            }
            Err(e) => {
                error!(error = %e, "submission failed");
                self.state = ControllerState::Editing;
                Err(e)
            }
        }
    }

    /// Save the draft as typed and go back
    pub fn previous(&mut self, store: &mut WizardStore) -> Step {
        store.set_step_data(StepDraft::Services(self.draft.clone()));
        self.state = ControllerState::Transitioned;
        store.retreat()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OnboardError;
    use crate::submission::tests::{valid_address, valid_company};
    use crate::wizard::WizardState;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingSink {
        received: RefCell<Vec<Submission>>,
        fail: bool,
    }

    impl SubmissionSink for RecordingSink {
        fn submit(&self, submission: &Submission) -> OnboardResult<()> {
            if self.fail {
                return Err(OnboardError::Submission("sink offline".into()));
            }
            self.received.borrow_mut().push(submission.clone());
            Ok(())
        }
    }

    fn on_services_step() -> WizardStore {
        let mut store = WizardStore::new();
        store.set_step_data(StepDraft::Company(valid_company()));
        store.set_step_data(StepDraft::Address(valid_address()));
        store.advance();
        store.advance();
        store
    }

    fn fill(controller: &mut ServicesController) {
        controller.toggle_service(Service::Consulting);
        controller.draft_mut().pricing_model = Some("Subscription".into());
        controller.draft_mut().declaration = Some(true);
    }

    #[test]
    fn test_declaration_required() {
        let mut store = on_services_step();
        let sink = RecordingSink::default();
        let mut controller = ServicesController::enter(&store);
        fill(&mut controller);
        controller.draft_mut().declaration = Some(false);

        let outcome = controller.submit(&mut store, &sink).unwrap();

        assert!(outcome.is_invalid());
        assert_eq!(
            controller.errors().get("declaration"),
            Some("You must agree to proceed")
        );
        assert!(sink.received.borrow().is_empty());
        assert_eq!(store.current_step(), Step::Services);
    }

    #[test]
    fn test_submit_hands_off_and_resets() {
        let mut store = on_services_step();
        let sink = RecordingSink::default();
        let mut controller = ServicesController::enter(&store);
        fill(&mut controller);

        let submission = match controller.submit(&mut store, &sink).unwrap() {
            StepOutcome::Submitted(submission) => submission,
            other => panic!("unexpected outcome: {:?}", other),
        };

        assert_eq!(submission.step1.company_name, "Acme");
        assert_eq!(submission.step3.services, vec![Service::Consulting]);
        assert_eq!(sink.received.borrow().len(), 1);
        assert_eq!(store.snapshot(), WizardState::default());
        assert_eq!(controller.state(), ControllerState::Transitioned);
    }

    #[test]
    fn test_sink_failure_keeps_draft() {
        let mut store = on_services_step();
        let sink = RecordingSink {
            fail: true,
            ..RecordingSink::default()
        };
        let mut controller = ServicesController::enter(&store);
        fill(&mut controller);

        let err = controller.submit(&mut store, &sink).unwrap_err();

        assert!(matches!(err, OnboardError::Submission(_)));
        assert_eq!(controller.state(), ControllerState::Editing);
        assert_eq!(store.current_step(), Step::Services);
        assert_eq!(store.state().step3.services, vec!["Consulting".to_string()]);
        assert_eq!(store.state().step1, valid_company());
    }

    #[test]
    fn test_previous_saves_unvalidated_draft() {
        let mut store = on_services_step();
        let mut controller = ServicesController::enter(&store);
        controller.toggle_service(Service::Training);
        controller.attach_document("  terms.pdf ");

        assert_eq!(controller.previous(&mut store), Step::Address);
        assert_eq!(store.state().step3.services, vec!["Training".to_string()]);
        assert_eq!(
            store.state().step3.final_doc,
            Some(AttachmentRef::File("terms.pdf".into()))
        );
    }
}
