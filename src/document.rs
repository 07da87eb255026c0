//! Full-document rendering: every configured section into one SVG string.

use crate::{
    compose::{
        ops::Composer,
        postprocess::{harden_links, inject_background},
        svg::SvgComposer,
    },
    config::{RenderConfig, Section},
    foundation::error::SponsorboardResult,
    layout::views::{TableRenderer, TableView},
    model::sponsorship::Sponsorship,
    partition::{
        reorder::{partition_sponsors, render_partitions, reorder_partitions},
        strategy::{HeadingStrategy, TierStrategy},
    },
};

/// Render `records` with `config` using the stock tier fallback.
pub fn render_document(records: &[Sponsorship], config: &RenderConfig) -> SponsorboardResult<String> {
    let renderer = config.table_renderer()?;
    let fallback = HeadingStrategy::new(renderer.clone());
    render_with(records, config, &renderer, &fallback)
}

/// Render `records` with `config`; tiers without a view of their own use `fallback`.
pub fn render_document_with(
    records: &[Sponsorship],
    config: &RenderConfig,
    fallback: &dyn TierStrategy,
) -> SponsorboardResult<String> {
    let renderer = config.table_renderer()?;
    render_with(records, config, &renderer, fallback)
}

#[tracing::instrument(skip_all, fields(records = records.len(), sections = config.sections.len()))]
fn render_with(
    records: &[Sponsorship],
    config: &RenderConfig,
    renderer: &TableRenderer,
    fallback: &dyn TierStrategy,
) -> SponsorboardResult<String> {
    let mut composer = SvgComposer::new(renderer.width());
    for section in &config.sections {
        render_section(&mut composer, *section, records, config, renderer, fallback)?;
    }
    tracing::debug!(height = composer.height(), ops = composer.ops().len(), "document composed");

    let svg = harden_links(&composer.to_svg()?);
    if config.background {
        inject_background(&svg, renderer.palette().background)
    } else {
        Ok(svg)
    }
}

fn render_section(
    composer: &mut dyn Composer,
    section: Section,
    records: &[Sponsorship],
    config: &RenderConfig,
    renderer: &TableRenderer,
    fallback: &dyn TierStrategy,
) -> SponsorboardResult<()> {
    let view = match section {
        Section::Summary => TableView::Summary,
        Section::Leaderboard => TableView::Leaderboard,
        Section::AllTime => TableView::AllTime,
        Section::Past => TableView::Past,
        Section::Tiers => {
            let tiers = config.badge_tiers(renderer);
            let mut partitions = partition_sponsors(records, &tiers);
            reorder_partitions(&mut partitions);
            return render_partitions(composer, &partitions, fallback);
        }
    };
    renderer.render(view, composer, records);
    Ok(())
}
