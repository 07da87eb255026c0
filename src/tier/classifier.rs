use serde::{Deserialize, Serialize};

use crate::foundation::error::{SponsorboardError, SponsorboardResult};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// One row of the tier table: amounts at or above `min_dollars` get `label`.
pub struct TierRule {
    /// Inclusive lower bound in dollars per month.
    pub min_dollars: f64,
    /// Label shown in table rows.
    pub label: String,
}

impl TierRule {
    /// Build a rule.
    pub fn new(min_dollars: f64, label: impl Into<String>) -> Self {
        Self {
            min_dollars,
            label: label.into(),
        }
    }
}

/// The built-in tier table, highest threshold first.
pub fn default_tier_rules() -> Vec<TierRule> {
    vec![
        TierRule::new(500.0, "Platinum"),
        TierRule::new(100.0, "Gold"),
        TierRule::new(50.0, "Silver"),
        TierRule::new(25.0, "Bronze"),
        TierRule::new(10.0, "Member"),
        TierRule::new(0.0, "Backer"),
    ]
}

#[derive(Clone, Debug, PartialEq)]
/// Maps a monthly amount to a descriptive tier label.
///
/// Rules are kept sorted by descending threshold; the lowest rule also catches
/// everything below it, so classification is total.
pub struct TierClassifier {
    rules: Vec<TierRule>,
}

impl TierClassifier {
    /// Build from an arbitrary rule list. Rejects empty lists and non-finite thresholds.
    pub fn new(mut rules: Vec<TierRule>) -> SponsorboardResult<Self> {
        if rules.is_empty() {
            return Err(SponsorboardError::validation(
                "tier table must contain at least one rule",
            ));
        }
        if let Some(bad) = rules.iter().find(|r| !r.min_dollars.is_finite()) {
            return Err(SponsorboardError::validation(format!(
                "tier '{}' has a non-finite threshold",
                bad.label
            )));
        }
        rules.sort_by(|a, b| b.min_dollars.total_cmp(&a.min_dollars));
        Ok(Self { rules })
    }

    /// Rules in evaluation order.
    pub fn rules(&self) -> &[TierRule] {
        &self.rules
    }

    /// Label for `monthly_dollars`; first rule whose threshold is met wins.
    pub fn classify(&self, monthly_dollars: f64) -> &str {
        self.rules
            .iter()
            .find(|r| monthly_dollars >= r.min_dollars)
            .or_else(|| self.rules.last())
            .map(|r| r.label.as_str())
            .unwrap_or_default()
    }
}

impl Default for TierClassifier {
    fn default() -> Self {
        Self {
            rules: default_tier_rules(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tier/classifier.rs"]
mod tests;
