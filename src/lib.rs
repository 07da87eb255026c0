//! Sponsorboard turns raw sponsorship records into deterministic SVG sponsor tables.
//!
//! Records from any number of providers are merged into one row per real-world
//! sponsor, classified into tiers, and laid out as fixed-geometry tables:
//!
//! 1. **Resolve**: each record gets an [`IdentityKey`] (social logins, URL, login, name).
//! 2. **Aggregate**: records sharing a key fold into an [`AggregatedSponsor`].
//! 3. **Classify**: monthly amounts map to tier labels via a [`TierClassifier`].
//! 4. **Lay out**: [`TableRenderer`] views push [`DrawOp`]s into a [`Composer`].
//! 5. **Serialize**: [`SvgComposer`] emits the document; PNG/WebP via [`rasterize`].
//!
//! Only the edges fail: config validation, serialization and rasterization.
//! The same input always produces byte-identical markup.
#![forbid(unsafe_code)]

mod aggregate;
mod compose;
mod config;
mod document;
mod foundation;
mod identity;
mod layout;
mod model;
mod partition;
mod raster;
mod tier;

pub use aggregate::aggregator::{
    AggregatedSponsor, aggregate, contribution_amount, parse_tier_amount,
};
pub use compose::ops::{
    BezPath, Composer, DrawOp, FontWeight, Markup, Point, Rect, TextAnchor, TextOp,
};
pub use compose::postprocess::{harden_links, inject_background};
pub use compose::svg::SvgComposer;
pub use config::{BadgeTierConfig, DEFAULT_WIDTH, MIN_WIDTH, RenderConfig, Section};
pub use document::{render_document, render_document_with};
pub use foundation::color::Color;
pub use foundation::error::{SponsorboardError, SponsorboardResult};
pub use foundation::text::{
    DASH, PRIVATE_SPONSOR_NAME, escape_xml, format_amount, format_since, parse_timestamp,
    truncate_name,
};
pub use identity::resolver::{IdentityKey, resolve};
pub use layout::table::{
    CORNER_RADIUS, Cell, Column, ColumnWidth, HEADER_HEIGHT, NAME_MAX_CHARS, ROW_HEIGHT,
    SECTION_PADDING, TABLE_MARGIN, Table, Tone, column_spans, render_table,
};
pub use layout::theme::{Palette, Theme};
pub use layout::views::{SponsorStats, TableRenderer, TableView};
pub use model::sponsorship::{PrivacyLevel, Sponsor, Sponsorship};
pub use partition::reorder::{
    MEMBERS, PAST_MEMBERS, Partition, partition_sponsors, render_partitions, reorder_partitions,
};
pub use partition::strategy::{
    BadgeTier, HeadingStrategy, TableStrategy, TierStrategy, default_badge_tiers,
};
pub use raster::{Bitmap, RasterFormat, rasterize, rasterize_svg};
pub use tier::classifier::{TierClassifier, TierRule, default_tier_rules};
