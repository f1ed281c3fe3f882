//! Validate a saved draft against one step's schema

use std::path::Path;

use serde::Serialize;

use crate::error::OnboardResult;
use crate::models::{AddressDraft, CompanyDraft, ServicesDraft};
use crate::storage::read_json;
use crate::validation::{validate_address, validate_company, validate_services, FieldErrors};
use crate::wizard::Step;

/// Validate the JSON draft in `file` as step `step`
///
/// Prints the typed result or the field errors and returns whether the
/// draft was accepted. A step outside 1..=3 is a configuration error.
pub fn handle_validate_command(step: u8, file: &Path) -> OnboardResult<bool> {
    let step = Step::try_from(step)?;

    match step {
        Step::Company => report(step, validate_company(&read_json::<CompanyDraft, _>(file)?)),
        Step::Address => report(step, validate_address(&read_json::<AddressDraft, _>(file)?)),
        Step::Services => report(step, validate_services(&read_json::<ServicesDraft, _>(file)?)),
    }
}

fn report<T: Serialize>(step: Step, result: Result<T, FieldErrors>) -> OnboardResult<bool> {
    match result {
        Ok(details) => {
            println!("{}: valid", step);
            println!("{}", serde_json::to_string_pretty(&details)?);
            Ok(true)
        }
        Err(errors) => {
            println!("{}: {} field error(s)", step, errors.len());
            for (field, message) in errors.iter() {
                println!("  {}: {}", field, message);
            }
            Ok(false)
        }
    }
}
