//! Core data models for the onboarding wizard
//!
//! Each step has a *draft* (raw, possibly partial form values as the user
//! typed them) and a *details* type (the typed result of validating that
//! draft). The wizard state only ever stores drafts.

pub mod address;
pub mod attachment;
pub mod company;
pub mod options;
pub mod services;

pub use address::{AddressDetails, AddressDraft};
pub use attachment::AttachmentRef;
pub use company::{CompanyDetails, CompanyDraft};
pub use options::{states_for_country, CompanyType, Country, Currency, PricingModel, Service};
pub use services::{ServiceDetails, ServicesDraft};

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Accept a JSON string or number for fields the form keeps as text
pub(crate) fn text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}
