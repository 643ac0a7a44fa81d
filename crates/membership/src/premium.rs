use core::str::FromStr;

use serde::{Deserialize, Serialize};

use gymfee_core::DomainError;

/// Premium tier chosen on top of the plan.
///
/// The surcharge for each tier comes from [`crate::PricingRules`]; adding a tier
/// means adding a variant and a rate, not a new branch in the pipeline.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PremiumTier {
    #[default]
    None,
    ExclusiveFacilities,
    SpecializedTraining,
}

impl PremiumTier {
    pub const ALL: [PremiumTier; 3] = [
        PremiumTier::None,
        PremiumTier::ExclusiveFacilities,
        PremiumTier::SpecializedTraining,
    ];

    /// Human-readable label used in summaries.
    pub fn label(self) -> &'static str {
        match self {
            PremiumTier::None => "None",
            PremiumTier::ExclusiveFacilities => "Exclusive Facilities",
            PremiumTier::SpecializedTraining => "Specialized Training",
        }
    }

    pub fn is_premium(self) -> bool {
        self != PremiumTier::None
    }
}

impl core::fmt::Display for PremiumTier {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PremiumTier {
    type Err = DomainError;

    /// Accepts the label, snake_case or kebab-case form, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', '_'], " ");
        PremiumTier::ALL
            .into_iter()
            .find(|tier| tier.label().to_ascii_lowercase() == normalized)
            .ok_or_else(|| DomainError::invalid_input(format!("unknown premium tier '{s}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_labels_and_identifiers() {
        assert_eq!("none".parse::<PremiumTier>().unwrap(), PremiumTier::None);
        assert_eq!(
            "Exclusive Facilities".parse::<PremiumTier>().unwrap(),
            PremiumTier::ExclusiveFacilities
        );
        assert_eq!(
            "specialized-training".parse::<PremiumTier>().unwrap(),
            PremiumTier::SpecializedTraining
        );
        assert_eq!(
            "EXCLUSIVE_FACILITIES".parse::<PremiumTier>().unwrap(),
            PremiumTier::ExclusiveFacilities
        );
    }

    #[test]
    fn rejects_unknown_tier() {
        let err = "gold".parse::<PremiumTier>().unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
    }

    #[test]
    fn only_none_is_not_premium() {
        assert!(!PremiumTier::None.is_premium());
        assert!(PremiumTier::ExclusiveFacilities.is_premium());
        assert!(PremiumTier::SpecializedTraining.is_premium());
        assert_eq!(PremiumTier::default(), PremiumTier::None);
    }

    #[test]
    fn serializes_as_snake_case() {
        let json = serde_json::to_string(&PremiumTier::SpecializedTraining).unwrap();
        assert_eq!(json, "\"specialized_training\"");
    }
}
