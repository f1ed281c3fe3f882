//! Wizard step index

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::OnboardError;

/// One of the three wizard steps; serialized as 1, 2 or 3
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Step {
    /// Company information
    #[default]
    Company,
    /// Address and bank details
    Address,
    /// Services, pricing and declaration
    Services,
}

impl Step {
    pub const ALL: [Self; 3] = [Self::Company, Self::Address, Self::Services];

    /// 1-based position
    pub fn index(self) -> u8 {
        match self {
            Self::Company => 1,
            Self::Address => 2,
            Self::Services => 3,
        }
    }

    /// Following step, staying put on the last one
    pub fn next(self) -> Self {
        match self {
            Self::Company => Self::Address,
            Self::Address | Self::Services => Self::Services,
        }
    }

    /// Preceding step, staying put on the first one
    pub fn prev(self) -> Self {
        match self {
            Self::Company | Self::Address => Self::Company,
            Self::Services => Self::Address,
        }
    }

    /// Screen heading
    pub fn title(self) -> &'static str {
        match self {
            Self::Company => "Company Information",
            Self::Address => "Address & Bank Info",
            Self::Services => "Services & Final Document",
        }
    }
}

impl TryFrom<u8> for Step {
    type Error = OnboardError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        match index {
            1 => Ok(Self::Company),
            2 => Ok(Self::Address),
            3 => Ok(Self::Services),
            other => Err(OnboardError::step_out_of_range(other)),
        }
    }
}

impl From<Step> for u8 {
    fn from(step: Step) -> Self {
        step.index()
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Step {} - {}", self.index(), self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_clamps_at_last() {
        assert_eq!(Step::Company.next(), Step::Address);
        assert_eq!(Step::Address.next(), Step::Services);
        assert_eq!(Step::Services.next(), Step::Services);
    }

    #[test]
    fn test_prev_clamps_at_first() {
        assert_eq!(Step::Services.prev(), Step::Address);
        assert_eq!(Step::Address.prev(), Step::Company);
        assert_eq!(Step::Company.prev(), Step::Company);
    }

    #[test]
    fn test_index_round_trip() {
        for step in Step::ALL {
            assert_eq!(Step::try_from(step.index()).unwrap(), step);
        }
    }

    #[test]
    fn test_out_of_range_is_configuration_error() {
        for bad in [0u8, 4, 255] {
            let err = Step::try_from(bad).unwrap_err();
            assert!(matches!(err, OnboardError::Configuration(_)));
        }
    }

    #[test]
    fn test_serde_as_number() {
        assert_eq!(serde_json::to_string(&Step::Address).unwrap(), "2");
        assert_eq!(serde_json::from_str::<Step>("3").unwrap(), Step::Services);
        assert!(serde_json::from_str::<Step>("4").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Step::Company.to_string(), "Step 1 - Company Information");
    }
}
