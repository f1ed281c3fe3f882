//! Step 1: company identity and contact person

use serde::{Deserialize, Serialize};

use super::attachment::AttachmentRef;
use super::text_or_number;

/// Raw company form values, possibly partial
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompanyDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub established_date: Option<String>,
    /// Kept as entered; validation coerces it to a number
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "text_or_number"
    )]
    pub employee_count: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_logo: Option<AttachmentRef>,
}

/// Validated company information
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyDetails {
    pub company_name: String,
    pub company_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub established_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_count: Option<u32>,
    pub contact_name: String,
    pub contact_email: String,
    pub contact_phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_logo: Option<AttachmentRef>,
}

impl From<CompanyDetails> for CompanyDraft {
    fn from(details: CompanyDetails) -> Self {
        Self {
            company_name: Some(details.company_name),
            company_type: Some(details.company_type),
            registration_number: details.registration_number,
            established_date: details.established_date,
            employee_count: details.employee_count.map(|n| n.to_string()),
            contact_name: Some(details.contact_name),
            contact_email: Some(details.contact_email),
            contact_phone: Some(details.contact_phone),
            company_logo: details.company_logo,
        }
    }
}
