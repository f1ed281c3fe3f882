//! Services and declaration schema (step 3)

use super::{optional, present, FieldErrors};
use crate::models::{Currency, PricingModel, Service, ServiceDetails, ServicesDraft};

/// Validate the services step
pub fn validate(draft: &ServicesDraft) -> Result<ServiceDetails, FieldErrors> {
    let mut errors = FieldErrors::new();

    let mut services = Vec::new();
    if draft.services.is_empty() {
        errors.add("services", "At least one service must be selected");
    }
    for raw in &draft.services {
        match Service::parse(raw) {
            Some(service) if !services.contains(&service) => services.push(service),
            Some(_) => {}
            None => errors.add("services", format!("Unknown service: {}", raw)),
        }
    }

    let pricing_model = draft.pricing_model.as_deref().and_then(PricingModel::parse);
    if pricing_model.is_none() {
        errors.add("pricingModel", "Pricing model is required");
    }

    let currency = match present(&draft.currency) {
        None => None,
        Some(code) => {
            let parsed = Currency::parse(code);
            if parsed.is_none() {
                errors.add("currency", "Currency must be one of INR, USD, EUR");
            }
            parsed
        }
    };

    if draft.declaration != Some(true) {
        errors.add("declaration", "You must agree to proceed");
    }

    match pricing_model {
        Some(pricing_model) if errors.is_empty() => Ok(ServiceDetails {
            services,
            pricing_model,
            currency,
            declaration: true,
            notes: optional(&draft.notes),
            final_doc: draft.final_doc.clone(),
        }),
        _ => Err(errors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(services: &[&str], declaration: Option<bool>) -> ServicesDraft {
        ServicesDraft {
            services: services.iter().map(|s| s.to_string()).collect(),
            pricing_model: Some("Subscription".into()),
            declaration,
            ..ServicesDraft::default()
        }
    }

    #[test]
    fn test_empty_services_rejected() {
        let errors = validate(&draft(&[], Some(true))).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get("services"),
            Some("At least one service must be selected")
        );
    }

    #[test]
    fn test_declaration_must_be_true() {
        let errors = validate(&draft(&["Consulting"], Some(false))).unwrap_err();
        assert_eq!(errors.get("declaration"), Some("You must agree to proceed"));

        let errors = validate(&draft(&["Consulting"], None)).unwrap_err();
        assert_eq!(errors.get("declaration"), Some("You must agree to proceed"));
    }

    #[test]
    fn test_valid_services() {
        let details = validate(&draft(&["Consulting"], Some(true))).unwrap();
        assert_eq!(details.services, vec![Service::Consulting]);
        assert_eq!(details.pricing_model, PricingModel::Subscription);
        assert!(details.declaration);
        assert_eq!(details.currency, None);
    }

    #[test]
    fn test_duplicates_collapse() {
        let details = validate(&draft(&["Support", "Training", "Support"], Some(true))).unwrap();
        assert_eq!(details.services, vec![Service::Support, Service::Training]);
    }

    #[test]
    fn test_unknown_service() {
        let errors = validate(&draft(&["Consulting", "Catering"], Some(true))).unwrap_err();
        assert_eq!(errors.get("services"), Some("Unknown service: Catering"));
    }

    #[test]
    fn test_pricing_model_required_and_exact() {
        let mut d = draft(&["Training"], Some(true));
        d.pricing_model = None;
        assert_eq!(
            validate(&d).unwrap_err().get("pricingModel"),
            Some("Pricing model is required")
        );

        d.pricing_model = Some("Freemium".into());
        assert!(validate(&d).unwrap_err().contains("pricingModel"));
    }

    #[test]
    fn test_currency() {
        let mut d = draft(&["Training"], Some(true));
        d.currency = Some("EUR".into());
        assert_eq!(validate(&d).unwrap().currency, Some(Currency::Eur));

        d.currency = Some(String::new());
        assert_eq!(validate(&d).unwrap().currency, None);

        d.currency = Some("GBP".into());
        assert_eq!(
            validate(&d).unwrap_err().get("currency"),
            Some("Currency must be one of INR, USD, EUR")
        );
    }
}
