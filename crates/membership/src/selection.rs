use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use gymfee_core::{DomainError, DomainResult, ValueObject};

use crate::premium::PremiumTier;
use crate::rules::PricingRules;
use crate::validation::{too_few_members, too_many_members};

/// What a member asked for: plan, add-ons, group size and premium tier.
///
/// Feature order is preserved and duplicates are priced once per occurrence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub plan: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default = "one_member")]
    pub member_count: u32,
    #[serde(default)]
    pub premium_tier: PremiumTier,
}

impl ValueObject for Selection {}

fn one_member() -> u32 {
    1
}

impl Selection {
    pub fn new(plan: impl Into<String>) -> Self {
        Self {
            plan: plan.into(),
            features: Vec::new(),
            member_count: 1,
            premium_tier: PremiumTier::None,
        }
    }

    pub fn with_feature(mut self, feature: impl Into<String>) -> Self {
        self.features.push(feature.into());
        self
    }

    pub fn with_members(mut self, member_count: u32) -> Self {
        self.member_count = member_count;
        self
    }

    pub fn with_premium(mut self, premium_tier: PremiumTier) -> Self {
        self.premium_tier = premium_tier;
        self
    }

    /// Decode a selection from untyped JSON.
    ///
    /// Shape errors map to `InvalidInput` with the same messages the validators
    /// use. An integer member count that does not fit a `u32` is `OutOfRange`
    /// against `rules`; in-range bounds and catalog membership are left to
    /// validation.
    pub fn from_json(json: &str, rules: &PricingRules) -> DomainResult<Self> {
        let value: JsonValue = serde_json::from_str(json)
            .map_err(|e| DomainError::invalid_input(format!("invalid selection: {e}")))?;

        let JsonValue::Object(map) = value else {
            return Err(DomainError::invalid_input("Selection must be a JSON object."));
        };

        let plan = match map.get("plan") {
            Some(JsonValue::String(s)) => s.clone(),
            _ => return Err(DomainError::invalid_input("Membership plan must be a string.")),
        };

        let features = match map.get("features") {
            None | Some(JsonValue::Null) => Vec::new(),
            Some(JsonValue::Array(items)) => items
                .iter()
                .map(|item| match item {
                    JsonValue::String(s) => Ok(s.clone()),
                    _ => Err(DomainError::invalid_input("Feature names must be strings.")),
                })
                .collect::<DomainResult<Vec<_>>>()?,
            Some(_) => return Err(DomainError::invalid_input("Features must be provided as a list.")),
        };

        let member_count = match map.get("member_count") {
            None | Some(JsonValue::Null) => 1,
            Some(JsonValue::Number(n)) => match (n.as_i64(), n.as_u64()) {
                (Some(n), _) => u32::try_from(n).map_err(|_| {
                    if n < 0 {
                        too_few_members(rules)
                    } else {
                        too_many_members(rules)
                    }
                })?,
                (None, Some(_)) => return Err(too_many_members(rules)),
                (None, None) => {
                    return Err(DomainError::invalid_input("Number of members must be an integer."));
                }
            },
            Some(_) => return Err(DomainError::invalid_input("Number of members must be an integer.")),
        };

        let premium_tier = match map.get("premium_tier") {
            None | Some(JsonValue::Null) => PremiumTier::None,
            Some(JsonValue::String(s)) => s.parse()?,
            Some(_) => return Err(DomainError::invalid_input("Premium tier must be a string.")),
        };

        Ok(Self {
            plan,
            features,
            member_count,
            premium_tier,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gymfee_core::ValidationErrorKind;

    #[test]
    fn decodes_full_selection() {
        let json = r#"{
            "plan": "Family",
            "features": ["Personal Training", "Personal Training"],
            "member_count": 3,
            "premium_tier": "specialized_training"
        }"#;

        let selection = Selection::from_json(json, &PricingRules::default()).unwrap();
        assert_eq!(
            selection,
            Selection::new("Family")
                .with_feature("Personal Training")
                .with_feature("Personal Training")
                .with_members(3)
                .with_premium(PremiumTier::SpecializedTraining)
        );
    }

    #[test]
    fn missing_fields_take_defaults() {
        let selection = Selection::from_json(r#"{ "plan": "Basic" }"#, &PricingRules::default()).unwrap();
        assert_eq!(selection, Selection::new("Basic"));
    }

    #[test]
    fn non_list_features_are_invalid_input() {
        let json = r#"{ "plan": "Basic", "features": "Group Classes" }"#;
        let err = Selection::from_json(json, &PricingRules::default()).unwrap_err();
        assert_eq!(err, DomainError::invalid_input("Features must be provided as a list."));
    }

    #[test]
    fn non_integer_member_count_is_invalid_input() {
        for json in [
            r#"{ "plan": "Basic", "member_count": 2.5 }"#,
            r#"{ "plan": "Basic", "member_count": "2" }"#,
        ] {
            let err = Selection::from_json(json, &PricingRules::default()).unwrap_err();
            assert_eq!(err.kind(), ValidationErrorKind::InvalidInput, "{json}");
        }
    }

    #[test]
    fn negative_member_count_is_out_of_range() {
        let json = r#"{ "plan": "Basic", "member_count": -1 }"#;
        let err = Selection::from_json(json, &PricingRules::default()).unwrap_err();
        assert_eq!(err.kind(), ValidationErrorKind::OutOfRange);
        assert_eq!(err.message(), "Number of members must be at least 1.");
    }

    #[test]
    fn oversized_member_count_exceeds_the_upper_bound() {
        for json in [
            r#"{ "plan": "Basic", "member_count": 4294967296 }"#,
            r#"{ "plan": "Basic", "member_count": 18446744073709551615 }"#,
        ] {
            let err = Selection::from_json(json, &PricingRules::default()).unwrap_err();
            assert_eq!(err.kind(), ValidationErrorKind::OutOfRange, "{json}");
            assert_eq!(err.message(), "Number of members cannot exceed 10.", "{json}");
        }
    }

    #[test]
    fn in_range_u32_member_count_is_left_to_validation() {
        let json = r#"{ "plan": "Basic", "member_count": 50 }"#;
        let selection = Selection::from_json(json, &PricingRules::default()).unwrap();
        assert_eq!(selection.member_count, 50);
    }

    #[test]
    fn malformed_documents_are_invalid_input() {
        for json in ["[]", "{", r#"{ "features": [] }"#, r#"{ "plan": "Basic", "premium_tier": "gold" }"#] {
            let err = Selection::from_json(json, &PricingRules::default()).unwrap_err();
            assert_eq!(err.kind(), ValidationErrorKind::InvalidInput, "{json}");
        }
    }
}
