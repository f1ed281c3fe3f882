//! Address and bank schema (step 2)

use super::{optional, parse_number, present, required, FieldErrors};
use crate::models::{AddressDetails, AddressDraft};

const ZIP_NOT_A_NUMBER: &str = "ZIP / PIN must be a number";

/// Validate the address step
pub fn validate(draft: &AddressDraft) -> Result<AddressDetails, FieldErrors> {
    let mut errors = FieldErrors::new();

    let address = required(&mut errors, "address", &draft.address, "Address is required");
    let country = required(&mut errors, "country", &draft.country, "Country is required");

    let zip_code = match present(&draft.zip_code).and_then(parse_number) {
        None => {
            errors.add("zipCode", ZIP_NOT_A_NUMBER);
            0
        }
        Some(n) if n < 1.0 => {
            errors.add("zipCode", "ZIP / PIN is required");
            0
        }
        Some(n) if n.fract() != 0.0 => {
            errors.add("zipCode", "ZIP / PIN must be a whole number");
            0
        }
        Some(n) if n > f64::from(u32::MAX) => {
            errors.add("zipCode", ZIP_NOT_A_NUMBER);
            0
        }
        Some(n) => n as u32,
    };

    let bank_name = required(&mut errors, "bankName", &draft.bank_name, "Bank Name is required");

    errors.into_result(AddressDetails {
        address,
        country,
        state: optional(&draft.state),
        zip_code,
        bank_name,
    })
}
