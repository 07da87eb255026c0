use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    foundation::error::{SponsorboardError, SponsorboardResult},
    layout::{
        theme::{Palette, Theme},
        views::{TableRenderer, TableView},
    },
    partition::strategy::{BadgeTier, TableStrategy, default_badge_tiers},
    tier::classifier::{TierClassifier, TierRule, default_tier_rules},
};

/// Narrowest document the fixed-width columns fit into.
pub const MIN_WIDTH: f64 = 600.0;
pub const DEFAULT_WIDTH: f64 = 800.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// One block of the rendered document.
pub enum Section {
    Summary,
    Leaderboard,
    AllTime,
    Past,
    /// Badge tier partitions.
    Tiers,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgeTierConfig {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_dollars: Option<f64>,
    /// Render this tier as a table view instead of the fallback.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view: Option<TableView>,
}

fn default_width() -> f64 {
    DEFAULT_WIDTH
}

fn default_sections() -> Vec<Section> {
    vec![
        Section::Summary,
        Section::Leaderboard,
        Section::AllTime,
        Section::Past,
    ]
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
/// Render settings, loaded from JSON. Every field has a default.
pub struct RenderConfig {
    #[serde(default = "default_width")]
    pub width: f64,
    #[serde(default)]
    pub theme: Theme,
    /// Replaces the theme palette wholesale when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub palette: Option<Palette>,
    /// Classifier rules; `None` means [`default_tier_rules`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tiers: Option<Vec<TierRule>>,
    #[serde(default = "default_sections")]
    pub sections: Vec<Section>,
    /// Badge tiers; `None` means [`default_badge_tiers`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge_tiers: Option<Vec<BadgeTierConfig>>,
    #[serde(default)]
    pub background: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            theme: Theme::default(),
            palette: None,
            tiers: None,
            sections: default_sections(),
            badge_tiers: None,
            background: false,
        }
    }
}

impl RenderConfig {
    pub fn from_reader<R: std::io::Read>(r: R) -> SponsorboardResult<Self> {
        let config: Self = serde_json::from_reader(r)
            .map_err(|e| SponsorboardError::validation(format!("parse render config JSON: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> SponsorboardResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            SponsorboardError::validation(format!("open render config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn validate(&self) -> SponsorboardResult<()> {
        if !self.width.is_finite() || self.width < MIN_WIDTH {
            return Err(SponsorboardError::validation(format!(
                "width must be finite and >= {MIN_WIDTH}, got {}",
                self.width
            )));
        }
        if let Some(rules) = &self.tiers {
            // Same checks the classifier makes, surfaced before rendering starts.
            TierClassifier::new(rules.clone())?;
        }
        if let Some(badges) = &self.badge_tiers {
            if badges.is_empty() {
                return Err(SponsorboardError::validation("badgeTiers must not be empty"));
            }
            for badge in badges {
                if let Some(v) = badge.monthly_dollars
                    && !v.is_finite()
                {
                    return Err(SponsorboardError::validation(format!(
                        "badge tier '{}' monthlyDollars must be finite",
                        badge.title
                    )));
                }
            }
        }
        Ok(())
    }

    pub fn palette(&self) -> Palette {
        self.palette
            .clone()
            .unwrap_or_else(|| Palette::for_theme(self.theme))
    }

    pub fn classifier(&self) -> SponsorboardResult<TierClassifier> {
        match &self.tiers {
            Some(rules) => TierClassifier::new(rules.clone()),
            None => TierClassifier::new(default_tier_rules()),
        }
    }

    /// Build the renderer every view of this config draws with.
    pub fn table_renderer(&self) -> SponsorboardResult<TableRenderer> {
        self.validate()?;
        Ok(TableRenderer::new(
            self.width,
            self.palette(),
            self.classifier()?,
        ))
    }

    /// Badge tiers with their configured table views attached.
    pub fn badge_tiers(&self, renderer: &TableRenderer) -> Vec<BadgeTier> {
        let Some(configured) = &self.badge_tiers else {
            return default_badge_tiers();
        };
        configured
            .iter()
            .map(|c| {
                let tier = BadgeTier::new(c.title.clone(), c.monthly_dollars);
                match c.view {
                    Some(view) => tier.with_strategy(TableStrategy::new(renderer.clone(), view)),
                    None => tier,
                }
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
