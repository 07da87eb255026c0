use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::{
    foundation::text::parse_timestamp,
    identity::resolver::{IdentityKey, resolve},
    model::sponsorship::{Sponsor, Sponsorship},
};

static TIER_AMOUNT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\s*(\d+(?:\.\d+)?)").expect("tier amount pattern is a valid regex")
});

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
/// All records of one real-world sponsor folded together.
pub struct AggregatedSponsor {
    /// Canonical identity the records were merged under.
    pub key: IdentityKey,
    /// Display identity, preferring one with a resolvable link.
    pub sponsor: Sponsor,
    /// `true` when every merged record is private.
    pub is_private: bool,
    /// Earliest known join date.
    pub created_at: Option<String>,
    /// Sum of each record's contribution amount.
    pub total_amount: f64,
    /// Highest positive monthly rate observed.
    pub highest_monthly_dollars: f64,
    /// Any merged record is currently active.
    pub is_active: bool,
}

impl AggregatedSponsor {
    fn seed(key: IdentityKey, record: &Sponsorship) -> Self {
        Self {
            key,
            sponsor: record.sponsor.clone(),
            is_private: record.is_private(),
            created_at: record.created_at.clone(),
            total_amount: contribution_amount(record),
            highest_monthly_dollars: record.monthly_dollars.max(0.0),
            is_active: record.is_active(),
        }
    }

    fn absorb(&mut self, record: &Sponsorship) {
        self.total_amount += contribution_amount(record);
        self.highest_monthly_dollars = self
            .highest_monthly_dollars
            .max(record.monthly_dollars.max(0.0));
        self.is_active |= record.is_active();
        self.is_private &= record.is_private();

        if let Some(incoming) = record.created_at.as_deref() {
            self.merge_created_at(incoming);
        }

        if self.sponsor.link().is_none() && record.sponsor.link().is_some() {
            self.sponsor = record.sponsor.clone();
        }
    }

    fn merge_created_at(&mut self, incoming: &str) {
        let Some(incoming_ts) = parse_timestamp(incoming) else {
            if self.created_at.is_none() {
                self.created_at = Some(incoming.to_owned());
            }
            return;
        };
        let current_ts = self.created_at.as_deref().and_then(parse_timestamp);
        match current_ts {
            Some(current) if current <= incoming_ts => {}
            _ => self.created_at = Some(incoming.to_owned()),
        }
    }

    /// Name shown in tables; fully private aggregates show the placeholder.
    pub fn display_name(&self) -> &str {
        if self.is_private {
            crate::foundation::text::PRIVATE_SPONSOR_NAME
        } else {
            self.sponsor.display_name()
        }
    }

    /// Link target for the rendered name.
    pub fn link(&self) -> Option<&str> {
        if self.is_private {
            None
        } else {
            self.sponsor.link()
        }
    }
}

/// Dollar amount embedded in a tier label such as `"$25/mo"`.
pub fn parse_tier_amount(tier_name: &str) -> Option<f64> {
    TIER_AMOUNT
        .captures(tier_name)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

/// What one record adds to a sponsor's lifetime total.
///
/// Reported total, else active monthly rate, else the amount in the tier label, else 0.
pub fn contribution_amount(record: &Sponsorship) -> f64 {
    if let Some(total) = record.total_dollars.filter(|t| *t > 0.0) {
        return total;
    }
    if record.monthly_dollars > 0.0 {
        return record.monthly_dollars;
    }
    record
        .tier_name
        .as_deref()
        .and_then(parse_tier_amount)
        .unwrap_or(0.0)
}

/// Fold records sharing an [`IdentityKey`] into one [`AggregatedSponsor`] each.
///
/// Output follows first-seen key order; views apply their own sort.
#[tracing::instrument(skip(records), fields(records = records.len()))]
pub fn aggregate(records: &[Sponsorship]) -> Vec<AggregatedSponsor> {
    let mut index = HashMap::<IdentityKey, usize>::with_capacity(records.len());
    let mut out = Vec::<AggregatedSponsor>::with_capacity(records.len());

    for record in records {
        if let Some(raw) = record.created_at.as_deref()
            && parse_timestamp(raw).is_none()
        {
            tracing::warn!(provider = %record.provider, created_at = raw, "unparseable createdAt");
        }

        let key = resolve(record);
        match index.get(&key) {
            Some(&i) => out[i].absorb(record),
            None => {
                index.insert(key.clone(), out.len());
                out.push(AggregatedSponsor::seed(key, record));
            }
        }
    }

    tracing::debug!(aggregates = out.len(), "aggregated sponsors");
    out
}

#[cfg(test)]
#[path = "../../tests/unit/aggregate/aggregator.rs"]
mod tests;
