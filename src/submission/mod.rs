//! Final submission payload and its hand-off
//!
//! When step 3 is accepted the three steps are combined into one
//! [`Submission`] and handed to a [`SubmissionSink`]. Transmission beyond
//! the local machine is not this crate's concern; the provided sinks save
//! the payload to disk or write it to the log.

pub mod json;

pub use json::{JsonFileSink, SubmissionEnvelope};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{OnboardError, OnboardResult};
use crate::models::{AddressDetails, CompanyDetails, ServiceDetails};
use crate::validation::{validate_address, validate_company};
use crate::wizard::WizardState;

/// Combined record of all three steps
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub step1: CompanyDetails,
    pub step2: AddressDetails,
    pub step3: ServiceDetails,
}

impl Submission {
    /// Combine the stored step 1 and 2 data with freshly validated step 3 data
    ///
    /// Steps 1 and 2 were validated when the user left them; they are checked
    /// again so a payload can never carry unvalidated data.
    pub fn collect(state: &WizardState, step3: ServiceDetails) -> OnboardResult<Self> {
        let step1 = validate_company(&state.step1).map_err(OnboardError::Validation)?;
        let step2 = validate_address(&state.step2).map_err(OnboardError::Validation)?;
        Ok(Self { step1, step2, step3 })
    }
}

/// Receives accepted submissions
pub trait SubmissionSink {
    fn submit(&self, submission: &Submission) -> OnboardResult<()>;
}

/// Sink that only records the payload in the log
#[derive(Debug, Default)]
pub struct LogSink;

impl SubmissionSink for LogSink {
    fn submit(&self, submission: &Submission) -> OnboardResult<()> {
        let payload = serde_json::to_string(submission)?;
        info!(company = %submission.step1.company_name, %payload, "final form data");
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::{AddressDraft, CompanyDraft, PricingModel, Service};
    use crate::wizard::{StepDraft, WizardStore};

    pub(crate) fn valid_company() -> CompanyDraft {
        CompanyDraft {
            company_name: Some("Acme".into()),
            company_type: Some("Private Limited".into()),
            contact_name: Some("Jo".into()),
            contact_email: Some("jo@x.com".into()),
            contact_phone: Some("123456".into()),
            ..CompanyDraft::default()
        }
    }

    pub(crate) fn valid_address() -> AddressDraft {
        AddressDraft {
            address: Some("1 Rd".into()),
            country: Some("India".into()),
            zip_code: Some("100".into()),
            bank_name: Some("X".into()),
            ..AddressDraft::default()
        }
    }

    pub(crate) fn service_details() -> ServiceDetails {
        ServiceDetails {
            services: vec![Service::Consulting],
            pricing_model: PricingModel::Subscription,
            currency: None,
            declaration: true,
            notes: None,
            final_doc: None,
        }
    }

    #[test]
    fn test_collect_combines_steps() {
        let mut store = WizardStore::new();
        store.set_step_data(StepDraft::Company(valid_company()));
        store.set_step_data(StepDraft::Address(valid_address()));

        let submission = Submission::collect(store.state(), service_details()).unwrap();
        assert_eq!(submission.step1.company_name, "Acme");
        assert_eq!(submission.step2.zip_code, 100);
        assert_eq!(submission.step3.services, vec![Service::Consulting]);
    }

    #[test]
    fn test_collect_refuses_unvalidated_steps() {
        let store = WizardStore::new();
        let err = Submission::collect(store.state(), service_details()).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_payload_shape() {
        let mut store = WizardStore::new();
        store.set_step_data(StepDraft::Company(valid_company()));
        store.set_step_data(StepDraft::Address(valid_address()));
        let submission = Submission::collect(store.state(), service_details()).unwrap();

        let value = serde_json::to_value(&submission).unwrap();
        assert_eq!(value["step1"]["companyName"], "Acme");
        assert_eq!(value["step2"]["zipCode"], 100);
        assert_eq!(value["step3"]["pricingModel"], "Subscription");
        assert_eq!(value["step3"]["declaration"], true);
    }

    #[test]
    fn test_log_sink_accepts() {
        let mut store = WizardStore::new();
        store.set_step_data(StepDraft::Company(valid_company()));
        store.set_step_data(StepDraft::Address(valid_address()));
        let submission = Submission::collect(store.state(), service_details()).unwrap();

        assert!(LogSink.submit(&submission).is_ok());
    }
}
