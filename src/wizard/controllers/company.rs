//! Step 1 controller

use tracing::{debug, warn};

use super::{ControllerState, StepOutcome};
use crate::models::{AttachmentRef, CompanyDraft};
use crate::storage::{BlobStore, BlobWriter, COMPANY_LOGO_KEY};
use crate::validation::{validate_company, FieldErrors};
use crate::wizard::store::{StepDraft, WizardStore};

#[derive(Debug)]
pub struct CompanyController {
    draft: CompanyDraft,
    errors: FieldErrors,
    state: ControllerState,
    /// Set when a new logo file was picked while this step was mounted
    logo_attached: bool,
}

impl CompanyController {
    /// Load defaults from the store; a logo already in the blob store wins
    pub fn enter(store: &WizardStore, blobs: &dyn BlobStore) -> Self {
        let mut draft = store.state().step1.clone();

        match blobs.get(COMPANY_LOGO_KEY) {
            Ok(Some(bytes)) => {
                debug!(bytes = bytes.len(), "restored stored logo");
                draft.company_logo = Some(AttachmentRef::Stored(COMPANY_LOGO_KEY.to_string()));
            }
            Ok(None) => {}
            Err(e) => warn!(error = %e, "could not read stored logo"),
        }

        Self {
            draft,
            errors: FieldErrors::new(),
            state: ControllerState::Editing,
            logo_attached: false,
        }
    }

    pub fn draft(&self) -> &CompanyDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut CompanyDraft {
        &mut self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    /// Pick a logo file by path; blank input removes the logo
    pub fn attach_logo(&mut self, input: &str) {
        self.draft.company_logo = AttachmentRef::from_input(input);
        self.logo_attached = self
            .draft
            .company_logo
            .as_ref()
            .is_some_and(|logo| logo.file_path().is_some());
    }

    /// Validate, save, advance and persist a newly attached logo
    ///
    /// The logo write starts only after the store has advanced and is
    /// returned to the caller rather than awaited.
    pub fn submit(&mut self, store: &mut WizardStore, writer: &BlobWriter) -> StepOutcome {
        self.state = ControllerState::Submitting;

        let details = match validate_company(&self.draft) {
            Ok(details) => details,
            Err(errors) => {
                debug!(fields = %errors, "company step rejected");
                self.errors = errors;
                self.state = ControllerState::Editing;
                return StepOutcome::Invalid;
            }
        };

        let new_logo = details
            .company_logo
            .as_ref()
            .and_then(|logo| logo.file_path())
            .filter(|_| self.logo_attached)
            .map(|path| path.to_path_buf());

        self.errors = FieldErrors::new();
        store.set_step_data(StepDraft::Company(details.into()));
        let to = store.advance();
        self.state = ControllerState::Transitioned;

        let pending_write = new_logo.map(|path| writer.spawn_put(COMPANY_LOGO_KEY, path));

        StepOutcome::Advanced { to, pending_write }
    }
}
