//! Step 2: registered address and bank

use serde::{Deserialize, Serialize};

use super::options::states_for_country;
use super::text_or_number;

/// Raw address form values, possibly partial
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddressDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "text_or_number"
    )]
    pub zip_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,
}

impl AddressDraft {
    /// States selectable for the currently chosen country
    pub fn state_options(&self) -> &'static [&'static str] {
        states_for_country(self.country.as_deref())
    }

    /// Change the country, dropping a state the new country does not offer
    pub fn set_country(&mut self, country: Option<String>) {
        self.country = country;
        let options = self.state_options();
        if let Some(state) = &self.state {
            if !options.contains(&state.as_str()) {
                self.state = None;
            }
        }
    }
}

/// Validated address and bank details
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressDetails {
    pub address: String,
    pub country: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    pub zip_code: u32,
    pub bank_name: String,
}

impl From<AddressDetails> for AddressDraft {
    fn from(details: AddressDetails) -> Self {
        Self {
            address: Some(details.address),
            country: Some(details.country),
            state: details.state,
            zip_code: Some(details.zip_code.to_string()),
            bank_name: Some(details.bank_name),
        }
    }
}
