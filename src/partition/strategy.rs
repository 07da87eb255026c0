use std::fmt;

use crate::{
    compose::ops::{Composer, DrawOp, FontWeight, Markup, Point, TextAnchor, TextOp},
    foundation::error::SponsorboardResult,
    layout::views::{TableRenderer, TableView},
    partition::reorder::Partition,
};

/// How one badge tier is drawn.
pub trait TierStrategy {
    fn compose(&self, composer: &mut dyn Composer, partition: &Partition<'_>) -> SponsorboardResult<()>;
}

/// A badge tier: sponsors at or above `monthly_dollars` land here.
pub struct BadgeTier {
    pub title: String,
    /// Inclusive threshold; `None` counts as 0.
    pub monthly_dollars: Option<f64>,
    /// Custom renderer; `None` defers to the caller's fallback.
    pub strategy: Option<Box<dyn TierStrategy>>,
}

impl BadgeTier {
    pub fn new(title: impl Into<String>, monthly_dollars: Option<f64>) -> Self {
        Self {
            title: title.into(),
            monthly_dollars,
            strategy: None,
        }
    }

    pub fn with_strategy(mut self, strategy: impl TierStrategy + 'static) -> Self {
        self.strategy = Some(Box::new(strategy));
        self
    }

    pub(crate) fn threshold(&self) -> f64 {
        self.monthly_dollars.unwrap_or(0.0)
    }
}

impl fmt::Debug for BadgeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BadgeTier")
            .field("title", &self.title)
            .field("monthly_dollars", &self.monthly_dollars)
            .field("custom_strategy", &self.strategy.is_some())
            .finish()
    }
}

/// Draws a tier's sponsors as one of the table views.
#[derive(Clone, Debug)]
pub struct TableStrategy {
    renderer: TableRenderer,
    view: TableView,
}

impl TableStrategy {
    pub fn new(renderer: TableRenderer, view: TableView) -> Self {
        Self { renderer, view }
    }
}

impl TierStrategy for TableStrategy {
    fn compose(&self, composer: &mut dyn Composer, partition: &Partition<'_>) -> SponsorboardResult<()> {
        self.renderer
            .render(self.view, composer, &partition.sponsors);
        Ok(())
    }
}

const HEADING_HEIGHT: f64 = 44.0;
const HEADING_BASELINE: f64 = 28.0;
const HEADING_FONT_SIZE: f64 = 18.0;

/// A centered `Title (count)` heading followed by the tier's all-time table.
#[derive(Clone, Debug)]
pub struct HeadingStrategy {
    renderer: TableRenderer,
}

impl HeadingStrategy {
    pub fn new(renderer: TableRenderer) -> Self {
        Self { renderer }
    }
}

impl TierStrategy for HeadingStrategy {
    fn compose(&self, composer: &mut dyn Composer, partition: &Partition<'_>) -> SponsorboardResult<()> {
        let top = composer.height();
        composer.push(DrawOp::Text(TextOp {
            origin: Point::new(self.renderer.width() * 0.5, top + HEADING_BASELINE),
            anchor: TextAnchor::Middle,
            size: HEADING_FONT_SIZE,
            weight: FontWeight::Bold,
            fill: self.renderer.palette().text,
            content: Markup::escape(&format!(
                "{} ({})",
                partition.title(),
                partition.sponsors.len()
            )),
        }));
        composer.add_space(HEADING_HEIGHT);
        self.renderer
            .render(TableView::AllTime, composer, &partition.sponsors);
        Ok(())
    }
}

/// The stock badge tiers, lowest threshold first.
pub fn default_badge_tiers() -> Vec<BadgeTier> {
    vec![
        BadgeTier::new(crate::partition::reorder::PAST_MEMBERS, Some(-1.0)),
        BadgeTier::new("Backers", None),
        BadgeTier::new(crate::partition::reorder::MEMBERS, Some(10.0)),
        BadgeTier::new("Silver Members", Some(50.0)),
        BadgeTier::new("Gold Members", Some(100.0)),
        BadgeTier::new("Platinum Sponsors", Some(500.0)),
    ]
}
