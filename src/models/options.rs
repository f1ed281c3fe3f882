//! Enumerated option lists offered by the wizard
//!
//! Company types, countries (with their states), pricing models, currencies
//! and services. Labels are the exact strings shown to the user and written
//! into drafts and submissions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Legal form of the company
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompanyType {
    #[serde(rename = "Private Limited")]
    PrivateLimited,
    #[serde(rename = "Public Limited")]
    PublicLimited,
    #[serde(rename = "Partnership")]
    Partnership,
    #[serde(rename = "Sole Proprietorship")]
    SoleProprietorship,
}

impl CompanyType {
    pub const ALL: [Self; 4] = [
        Self::PrivateLimited,
        Self::PublicLimited,
        Self::Partnership,
        Self::SoleProprietorship,
    ];

    /// Display label
    pub fn label(self) -> &'static str {
        match self {
            Self::PrivateLimited => "Private Limited",
            Self::PublicLimited => "Public Limited",
            Self::Partnership => "Partnership",
            Self::SoleProprietorship => "Sole Proprietorship",
        }
    }

    /// Parse from the display label
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.label() == s.trim())
    }
}

/// Countries with a known state list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Country {
    India,
    #[serde(rename = "USA")]
    Usa,
    Canada,
}

impl Country {
    pub const ALL: [Self; 3] = [Self::India, Self::Usa, Self::Canada];

    /// Display label
    pub fn label(self) -> &'static str {
        match self {
            Self::India => "India",
            Self::Usa => "USA",
            Self::Canada => "Canada",
        }
    }

    /// Parse from the display label
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == s.trim())
    }

    /// States selectable for this country
    pub fn states(self) -> &'static [&'static str] {
        match self {
            Self::India => &["Gujarat", "Maharashtra", "Rajasthan"],
            Self::Usa => &["California", "Texas", "New York"],
            Self::Canada => &["Ontario", "Quebec", "British Columbia"],
        }
    }
}

/// State options for a country label; empty for unknown or missing countries
pub fn states_for_country(country: Option<&str>) -> &'static [&'static str] {
    country
        .and_then(Country::parse)
        .map(Country::states)
        .unwrap_or(&[])
}

/// How the company charges for its services
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PricingModel {
    Subscription,
    #[serde(rename = "One-time")]
    OneTime,
    #[serde(rename = "Pay-per-use")]
    PayPerUse,
}

impl PricingModel {
    pub const ALL: [Self; 3] = [Self::Subscription, Self::OneTime, Self::PayPerUse];

    pub fn label(self) -> &'static str {
        match self {
            Self::Subscription => "Subscription",
            Self::OneTime => "One-time",
            Self::PayPerUse => "Pay-per-use",
        }
    }

    /// Parse from the exact label (no case folding)
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.label() == s)
    }
}

/// Preferred billing currency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    #[serde(rename = "INR")]
    Inr,
    #[serde(rename = "USD")]
    Usd,
    #[serde(rename = "EUR")]
    Eur,
}

impl Currency {
    pub const ALL: [Self; 3] = [Self::Inr, Self::Usd, Self::Eur];

    pub fn code(self) -> &'static str {
        match self {
            Self::Inr => "INR",
            Self::Usd => "USD",
            Self::Eur => "EUR",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.code() == s)
    }
}

/// Services the company can offer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Service {
    Consulting,
    #[serde(rename = "Software Development")]
    SoftwareDevelopment,
    Support,
    Training,
}

impl Service {
    pub const ALL: [Self; 4] = [
        Self::Consulting,
        Self::SoftwareDevelopment,
        Self::Support,
        Self::Training,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Consulting => "Consulting",
            Self::SoftwareDevelopment => "Software Development",
            Self::Support => "Support",
            Self::Training => "Training",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|svc| svc.label() == s)
    }
}

macro_rules! display_via {
    ($ty:ty, $method:ident) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.$method())
            }
        }
    };
}

display_via!(CompanyType, label);
display_via!(Country, label);
display_via!(PricingModel, label);
display_via!(Currency, code);
display_via!(Service, label);
