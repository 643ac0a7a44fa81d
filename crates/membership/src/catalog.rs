use serde::{Deserialize, Serialize};

use gymfee_core::{DomainError, DomainResult, Entity};

/// A membership plan: a named tier with a base price and a list of benefits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    name: String,
    base_cost: f64,
    benefits: Vec<String>,
    #[serde(default = "available_by_default")]
    available: bool,
}

impl Plan {
    pub fn new<I, S>(name: impl Into<String>, base_cost: f64, benefits: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            base_cost,
            benefits: benefits.into_iter().map(Into::into).collect(),
            available: true,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn base_cost(&self) -> f64 {
        self.base_cost
    }

    pub fn benefits(&self) -> &[String] {
        &self.benefits
    }
}

impl Entity for Plan {
    type Id = str;

    fn id(&self) -> &str {
        &self.name
    }

    fn is_available(&self) -> bool {
        self.available
    }
}

impl core::fmt::Display for Plan {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} (${:.2}) - Benefits: {}",
            self.name,
            self.base_cost,
            self.benefits.join(", ")
        )
    }
}

/// An optional add-on priced on top of the plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    name: String,
    cost: f64,
    #[serde(default = "available_by_default")]
    available: bool,
}

impl Feature {
    pub fn new(name: impl Into<String>, cost: f64) -> Self {
        Self {
            name: name.into(),
            cost,
            available: true,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }
}

impl Entity for Feature {
    type Id = str;

    fn id(&self) -> &str {
        &self.name
    }

    fn is_available(&self) -> bool {
        self.available
    }
}

impl core::fmt::Display for Feature {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} (${:.2})", self.name, self.cost)
    }
}

fn available_by_default() -> bool {
    true
}

/// Plans and features keyed by name, in insertion order.
///
/// Entries are never removed; they can only be marked unavailable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CatalogDocument")]
pub struct Catalog {
    plans: Vec<Plan>,
    features: Vec<Feature>,
}

#[derive(Deserialize)]
struct CatalogDocument {
    plans: Vec<Plan>,
    #[serde(default)]
    features: Vec<Feature>,
}

impl TryFrom<CatalogDocument> for Catalog {
    type Error = DomainError;

    fn try_from(doc: CatalogDocument) -> Result<Self, Self::Error> {
        Catalog::new(doc.plans, doc.features)
    }
}

impl Catalog {
    /// Build a catalog, rejecting duplicate names and negative or non-finite prices.
    pub fn new(plans: Vec<Plan>, features: Vec<Feature>) -> DomainResult<Self> {
        for (i, plan) in plans.iter().enumerate() {
            ensure_price("plan", &plan.name, plan.base_cost)?;
            if find_by_id(&plans[..i], plan.id()).is_some() {
                return Err(DomainError::invalid_input(format!(
                    "duplicate plan name '{}'",
                    plan.name
                )));
            }
        }

        for (i, feature) in features.iter().enumerate() {
            ensure_price("feature", &feature.name, feature.cost)?;
            if find_by_id(&features[..i], feature.id()).is_some() {
                return Err(DomainError::invalid_input(format!(
                    "duplicate feature name '{}'",
                    feature.name
                )));
            }
        }

        Ok(Self { plans, features })
    }

    /// The seed catalog: three plans and three add-on features.
    pub fn standard() -> Self {
        Self {
            plans: vec![
                Plan::new(
                    "Basic",
                    29.99,
                    ["Access to gym equipment", "Basic locker room access"],
                ),
                Plan::new(
                    "Premium",
                    59.99,
                    ["Access to gym equipment", "Premium locker room", "Sauna access"],
                ),
                Plan::new(
                    "Family",
                    99.99,
                    [
                        "Up to 4 family members",
                        "All Premium benefits",
                        "Family lounge access",
                    ],
                ),
            ],
            features: vec![
                Feature::new("Personal Training", 50.00),
                Feature::new("Group Classes", 30.00),
                Feature::new("Nutritional Consulting", 40.00),
            ],
        }
    }

    /// Parse a catalog from its JSON form.
    pub fn from_json(json: &str) -> DomainResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| DomainError::invalid_input(format!("invalid catalog: {e}")))
    }

    pub fn plan(&self, name: &str) -> Option<&Plan> {
        find_by_id(&self.plans, name)
    }

    pub fn feature(&self, name: &str) -> Option<&Feature> {
        find_by_id(&self.features, name)
    }

    pub fn plans(&self) -> &[Plan] {
        &self.plans
    }

    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    pub fn available_plans(&self) -> impl Iterator<Item = &Plan> {
        self.plans.iter().filter(|p| p.is_available())
    }

    pub fn available_features(&self) -> impl Iterator<Item = &Feature> {
        self.features.iter().filter(|f| f.is_available())
    }

    pub fn set_plan_available(&mut self, name: &str, available: bool) -> DomainResult<()> {
        let plan = find_by_id_mut(&mut self.plans, name)
            .ok_or_else(|| DomainError::not_found(format!("Membership plan '{name}' does not exist.")))?;
        plan.available = available;
        Ok(())
    }

    pub fn set_feature_available(&mut self, name: &str, available: bool) -> DomainResult<()> {
        let feature = find_by_id_mut(&mut self.features, name).ok_or_else(|| {
            DomainError::not_found(format!("Additional feature '{name}' does not exist."))
        })?;
        feature.available = available;
        Ok(())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

/// Catalog entries are keyed by their entity id.
fn find_by_id<'a, E: Entity<Id = str>>(entries: &'a [E], id: &str) -> Option<&'a E> {
    entries.iter().find(|e| e.id() == id)
}

fn find_by_id_mut<'a, E: Entity<Id = str>>(entries: &'a mut [E], id: &str) -> Option<&'a mut E> {
    entries.iter_mut().find(|e| e.id() == id)
}

fn ensure_price(kind: &str, name: &str, amount: f64) -> DomainResult<()> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(DomainError::invalid_input(format!(
            "{kind} '{name}' must have a non-negative price"
        )));
    }
    Ok(())
}
