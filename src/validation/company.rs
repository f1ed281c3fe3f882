//! Company information schema (step 1)

use regex::Regex;
use std::sync::OnceLock;

use super::{optional, parse_number, present, required, FieldErrors};
use crate::models::{CompanyDetails, CompanyDraft};

const MIN_PHONE_LEN: usize = 6;

static EMAIL_PATTERN: OnceLock<Regex> = OnceLock::new();

fn email_pattern() -> &'static Regex {
    EMAIL_PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
            .expect("email pattern compiles")
    })
}

/// Whether `candidate` looks like a deliverable email address
pub fn is_valid_email(candidate: &str) -> bool {
    !candidate.starts_with('.') && !candidate.contains("..") && email_pattern().is_match(candidate)
}

/// Validate the company step
pub fn validate(draft: &CompanyDraft) -> Result<CompanyDetails, FieldErrors> {
    let mut errors = FieldErrors::new();

    let company_name = required(
        &mut errors,
        "companyName",
        &draft.company_name,
        "Company name is required",
    );
    let company_type = required(
        &mut errors,
        "companyType",
        &draft.company_type,
        "Company type is required",
    );

    let employee_count = match present(&draft.employee_count) {
        None => None,
        Some(raw) => match parse_number(raw) {
            Some(n) if n >= 0.0 && n.fract() == 0.0 && n <= f64::from(u32::MAX) => Some(n as u32),
            _ => {
                errors.add("employeeCount", "Employee count must be a number");
                None
            }
        },
    };

    let contact_name = required(
        &mut errors,
        "contactName",
        &draft.contact_name,
        "Contact person name is required",
    );

    let contact_email = present(&draft.contact_email).unwrap_or_default().to_string();
    if !is_valid_email(&contact_email) {
        errors.add("contactEmail", "Invalid email format");
    }

    // Length counts the value as typed, surrounding spaces included
    let contact_phone = draft.contact_phone.clone().unwrap_or_default();
    if contact_phone.chars().count() < MIN_PHONE_LEN {
        errors.add("contactPhone", "Phone number must be at least 6 digits");
    }

    errors.into_result(CompanyDetails {
        company_name,
        company_type,
        registration_number: optional(&draft.registration_number),
        established_date: optional(&draft.established_date),
        employee_count,
        contact_name,
        contact_email,
        contact_phone,
        company_logo: draft.company_logo.clone(),
    })
}
