use std::cmp::Ordering;

use crate::{
    aggregate::aggregator::{AggregatedSponsor, aggregate},
    compose::ops::{Composer, DrawOp, FontWeight, Markup, Point, TextAnchor, TextOp},
    foundation::text::{DASH, format_amount, format_since},
    layout::table::{Cell, Column, Table, Tone, render_table},
    layout::theme::Palette,
    model::sponsorship::Sponsorship,
    tier::classifier::TierClassifier,
};

const RANK_WIDTH: f64 = 56.0;
const TIER_WIDTH: f64 = 110.0;
const DATE_WIDTH: f64 = 100.0;
const AMOUNT_WIDTH: f64 = 100.0;
const STATUS_WIDTH: f64 = 90.0;

const SUMMARY_HEIGHT: f64 = 36.0;
const SUMMARY_BASELINE: f64 = 22.0;
const SUMMARY_FONT_SIZE: f64 = 15.0;

const STATUS_ACTIVE: &str = "Active";
const STATUS_PAST: &str = "Past";

/// Case-insensitive name order with a byte-wise tie-break so equal-looking names stay stable.
fn cmp_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// The views a [`TableRenderer`] can draw.
pub enum TableView {
    Summary,
    Leaderboard,
    AllTime,
    Past,
}

#[derive(Clone, Debug, PartialEq)]
/// Renders the table views with a fixed width, palette and tier table.
///
/// Everything a view needs is captured at construction, so independent
/// renderers never share state.
pub struct TableRenderer {
    width: f64,
    palette: Palette,
    classifier: TierClassifier,
}

impl TableRenderer {
    pub fn new(width: f64, palette: Palette, classifier: TierClassifier) -> Self {
        Self {
            width,
            palette,
            classifier,
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Draw `view` over raw records; the all-time view aggregates them first.
    pub fn render(&self, view: TableView, composer: &mut dyn Composer, sponsors: &[Sponsorship]) {
        match view {
            TableView::Summary => self.summary(composer, sponsors),
            TableView::Leaderboard => self.current_leaderboard(composer, sponsors),
            TableView::AllTime => self.all_time(composer, &aggregate(sponsors)),
            TableView::Past => self.past_sponsors(composer, sponsors),
        }
    }

    /// Active sponsors by monthly rate: rank, name, tier, since, $/month.
    #[tracing::instrument(skip_all, fields(records = sponsors.len()))]
    pub fn current_leaderboard(&self, composer: &mut dyn Composer, sponsors: &[Sponsorship]) {
        let mut active: Vec<&Sponsorship> = sponsors.iter().filter(|s| s.is_active()).collect();
        active.sort_by(|a, b| b.monthly_dollars.total_cmp(&a.monthly_dollars));

        let rows = active
            .iter()
            .enumerate()
            .map(|(idx, s)| {
                vec![
                    Cell::Rank(idx),
                    Cell::name(s.display_name(), s.link()),
                    Cell::text(self.classifier.classify(s.monthly_dollars), Tone::Accent),
                    Cell::text(format_since(s.created_at.as_deref()), Tone::SubText),
                    Cell::text(format_amount(s.monthly_dollars), Tone::Text),
                ]
            })
            .collect();

        self.emit(
            composer,
            "leaderboard",
            Table {
                columns: vec![
                    Column::fixed("#", RANK_WIDTH, TextAnchor::Middle),
                    Column::fill("Sponsor"),
                    Column::fixed("Tier", TIER_WIDTH, TextAnchor::Start),
                    Column::fixed("Since", DATE_WIDTH, TextAnchor::Start),
                    Column::fixed("$/month", AMOUNT_WIDTH, TextAnchor::End),
                ],
                rows,
            },
        );
    }

    /// Lapsed sponsors in name order: rank, name, joined, status.
    #[tracing::instrument(skip_all, fields(records = sponsors.len()))]
    pub fn past_sponsors(&self, composer: &mut dyn Composer, sponsors: &[Sponsorship]) {
        let mut past: Vec<&Sponsorship> = sponsors.iter().filter(|s| !s.is_active()).collect();
        past.sort_by(|a, b| cmp_names(a.display_name(), b.display_name()));

        let rows = past
            .iter()
            .enumerate()
            .map(|(idx, s)| {
                vec![
                    Cell::Rank(idx),
                    Cell::name(s.display_name(), s.link()),
                    Cell::text(format_since(s.created_at.as_deref()), Tone::SubText),
                    Cell::text(STATUS_PAST, Tone::Inactive),
                ]
            })
            .collect();

        self.emit(
            composer,
            "past",
            Table {
                columns: vec![
                    Column::fixed("#", RANK_WIDTH, TextAnchor::Middle),
                    Column::fill("Sponsor"),
                    Column::fixed("Joined", DATE_WIDTH, TextAnchor::Start),
                    Column::fixed("Status", STATUS_WIDTH, TextAnchor::Start),
                ],
                rows,
            },
        );
    }

    /// Every aggregated sponsor by lifetime total.
    ///
    /// Ties fall back to the earlier `createdAt` string (plain string order, missing last),
    /// then to the name.
    #[tracing::instrument(skip_all, fields(aggregates = sponsors.len()))]
    pub fn all_time(&self, composer: &mut dyn Composer, sponsors: &[AggregatedSponsor]) {
        let mut sorted: Vec<&AggregatedSponsor> = sponsors.iter().collect();
        sorted.sort_by(|a, b| {
            b.total_amount
                .total_cmp(&a.total_amount)
                .then_with(|| match (&a.created_at, &b.created_at) {
                    (Some(x), Some(y)) => x.cmp(y),
                    (Some(_), None) => Ordering::Less,
                    (None, Some(_)) => Ordering::Greater,
                    (None, None) => Ordering::Equal,
                })
                .then_with(|| cmp_names(a.display_name(), b.display_name()))
        });

        let rows = sorted
            .iter()
            .enumerate()
            .map(|(idx, s)| {
                let tier = if s.highest_monthly_dollars > 0.0 {
                    self.classifier.classify(s.highest_monthly_dollars)
                } else {
                    DASH
                };
                let (status, tone) = if s.is_active {
                    (STATUS_ACTIVE, Tone::Active)
                } else {
                    (STATUS_PAST, Tone::Inactive)
                };
                vec![
                    Cell::Rank(idx),
                    Cell::name(s.display_name(), s.link()),
                    Cell::text(tier, Tone::Accent),
                    Cell::text(format_since(s.created_at.as_deref()), Tone::SubText),
                    Cell::text(format_amount(s.total_amount), Tone::Text),
                    Cell::text(status, tone),
                ]
            })
            .collect();

        self.emit(
            composer,
            "all_time",
            Table {
                columns: vec![
                    Column::fixed("#", RANK_WIDTH, TextAnchor::Middle),
                    Column::fill("Sponsor"),
                    Column::fixed("Tier", TIER_WIDTH, TextAnchor::Start),
                    Column::fixed("Since", DATE_WIDTH, TextAnchor::Start),
                    Column::fixed("Total", AMOUNT_WIDTH, TextAnchor::End),
                    Column::fixed("Status", STATUS_WIDTH, TextAnchor::Start),
                ],
                rows,
            },
        );
    }

    /// One centered line: active count, private count when nonzero, monthly total.
    #[tracing::instrument(skip_all, fields(records = sponsors.len()))]
    pub fn summary(&self, composer: &mut dyn Composer, sponsors: &[Sponsorship]) {
        let stats = SponsorStats::collect(sponsors);
        if stats.active == 0 && stats.private == 0 {
            tracing::debug!("no current sponsors; summary suppressed");
            return;
        }

        let top = composer.height();
        composer.push(DrawOp::Text(TextOp {
            origin: Point::new(self.width * 0.5, top + SUMMARY_BASELINE),
            anchor: TextAnchor::Middle,
            size: SUMMARY_FONT_SIZE,
            weight: FontWeight::Normal,
            fill: self.palette.sub_text,
            content: Markup::escape(&stats.line()),
        }));
        composer.add_space(SUMMARY_HEIGHT);
    }

    fn emit(&self, composer: &mut dyn Composer, view: &'static str, table: Table) {
        if table.rows.is_empty() {
            tracing::debug!(view, "no eligible sponsors; view suppressed");
            return;
        }
        tracing::debug!(view, rows = table.rows.len(), "rendering table");
        render_table(composer, &table, self.width, &self.palette);
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
/// Counts behind the summary line.
pub struct SponsorStats {
    /// Active public sponsors.
    pub active: usize,
    /// Active private sponsors.
    pub private: usize,
    /// Monthly dollars across all active sponsors, private included.
    pub monthly_total: f64,
}

impl SponsorStats {
    pub fn collect(sponsors: &[Sponsorship]) -> Self {
        sponsors
            .iter()
            .filter(|s| s.is_active())
            .fold(Self::default(), |mut acc, s| {
                if s.is_private() {
                    acc.private += 1;
                } else {
                    acc.active += 1;
                }
                acc.monthly_total += s.monthly_dollars;
                acc
            })
    }

    /// e.g. `12 active sponsors (+3 private) · $340/month`.
    pub fn line(&self) -> String {
        let noun = if self.active == 1 { "sponsor" } else { "sponsors" };
        let private = if self.private > 0 {
            format!(" (+{} private)", self.private)
        } else {
            String::new()
        };
        format!(
            "{} active {noun}{private} · {}/month",
            self.active,
            format_amount(self.monthly_total)
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/views.rs"]
mod tests;
