//! Step 3: services, pricing and declaration

use serde::{Deserialize, Serialize};

use super::attachment::AttachmentRef;
use super::options::{Currency, PricingModel, Service};

/// Raw services form values, possibly partial
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServicesDraft {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub services: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pricing_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub declaration: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_doc: Option<AttachmentRef>,
}

impl ServicesDraft {
    /// Whether a service label is currently selected
    pub fn has_service(&self, service: Service) -> bool {
        self.services.iter().any(|s| s == service.label())
    }

    /// Select or deselect a service
    pub fn toggle_service(&mut self, service: Service) {
        if self.has_service(service) {
            self.services.retain(|s| s != service.label());
        } else {
            self.services.push(service.label().to_string());
        }
    }
}

/// Validated services and declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDetails {
    /// Distinct services, in the order they were selected
    pub services: Vec<Service>,
    pub pricing_model: PricingModel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    /// Always true once validated
    pub declaration: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_doc: Option<AttachmentRef>,
}

impl From<ServiceDetails> for ServicesDraft {
    fn from(details: ServiceDetails) -> Self {
        Self {
            services: details
                .services
                .iter()
                .map(|s| s.label().to_string())
                .collect(),
            pricing_model: Some(details.pricing_model.label().to_string()),
            currency: details.currency.map(|c| c.code().to_string()),
            declaration: Some(details.declaration),
            notes: details.notes,
            final_doc: details.final_doc,
        }
    }
}
