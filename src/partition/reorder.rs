use crate::{
    compose::ops::Composer,
    foundation::error::SponsorboardResult,
    model::sponsorship::Sponsorship,
    partition::strategy::{BadgeTier, TierStrategy},
};

/// Title of the partition holding lapsed sponsors.
pub const PAST_MEMBERS: &str = "Past Members";
/// Title of the partition the past members are placed after.
pub const MEMBERS: &str = "Members";

#[derive(Debug)]
/// The sponsors that fell into one badge tier.
pub struct Partition<'t> {
    pub tier: &'t BadgeTier,
    pub sponsors: Vec<Sponsorship>,
}

impl Partition<'_> {
    pub fn title(&self) -> &str {
        &self.tier.title
    }
}

/// Group records by badge tier.
///
/// Tiers are ordered by ascending threshold (absent = 0). Each record joins the
/// highest tier whose threshold it meets, or the lowest tier when it meets none.
/// One partition per tier is returned, empty ones included, in tier order.
pub fn partition_sponsors<'t>(records: &[Sponsorship], tiers: &'t [BadgeTier]) -> Vec<Partition<'t>> {
    let mut ordered: Vec<&BadgeTier> = tiers.iter().collect();
    ordered.sort_by(|a, b| a.threshold().total_cmp(&b.threshold()));

    let mut partitions: Vec<Partition<'t>> = ordered
        .into_iter()
        .map(|tier| Partition {
            tier,
            sponsors: Vec::new(),
        })
        .collect();
    if partitions.is_empty() {
        return partitions;
    }

    for record in records {
        let idx = partitions
            .iter()
            .rposition(|p| record.monthly_dollars >= p.tier.threshold())
            .unwrap_or(0);
        partitions[idx].sponsors.push(record.clone());
    }
    partitions
}

/// Move the "Past Members" partition to just after "Members" (or to the end).
///
/// Badge order lists past members first; reading order wants them after the
/// active tiers. Input without a "Past Members" partition is left untouched.
pub fn reorder_partitions(partitions: &mut Vec<Partition<'_>>) {
    let Some(past_idx) = partitions.iter().position(|p| p.title() == PAST_MEMBERS) else {
        return;
    };
    let past = partitions.remove(past_idx);
    match partitions.iter().position(|p| p.title() == MEMBERS) {
        Some(members_idx) => partitions.insert(members_idx + 1, past),
        None => partitions.push(past),
    }
}

/// Render each non-empty partition with its tier's strategy, or `fallback` when it has none.
pub fn render_partitions(
    composer: &mut dyn Composer,
    partitions: &[Partition<'_>],
    fallback: &dyn TierStrategy,
) -> SponsorboardResult<()> {
    for partition in partitions {
        if partition.sponsors.is_empty() {
            tracing::debug!(tier = partition.title(), "empty tier skipped");
            continue;
        }
        let strategy: &dyn TierStrategy = match partition.tier.strategy.as_deref() {
            Some(own) => own,
            None => fallback,
        };
        strategy.compose(composer, partition)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/partition/reorder.rs"]
mod tests;
