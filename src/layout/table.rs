use kurbo::{RoundedRect, RoundedRectRadii, Shape};

use crate::{
    compose::ops::{Composer, DrawOp, FontWeight, Markup, Point, Rect, TextAnchor, TextOp},
    foundation::{color::Color, text::truncate_name},
    layout::theme::Palette,
};

/// Horizontal inset of the table from both document edges.
pub const TABLE_MARGIN: f64 = 30.0;
pub const HEADER_HEIGHT: f64 = 40.0;
pub const ROW_HEIGHT: f64 = 36.0;
/// Radius of the bottom corners of the last row.
pub const CORNER_RADIUS: f64 = 6.0;
/// Vertical space emitted before and after each table.
pub const SECTION_PADDING: f64 = 20.0;
/// Names longer than this many characters are cut with an ellipsis.
pub const NAME_MAX_CHARS: usize = 20;

const SEPARATOR_HEIGHT: f64 = 1.0;
const SEPARATOR_OPACITY: f64 = 0.5;
const CELL_PADDING: f64 = 12.0;
const FONT_SIZE: f64 = 14.0;
const HEADER_FONT_SIZE: f64 = 13.0;
// Offset from row center to text baseline for FONT_SIZE text.
const BASELINE_SHIFT: f64 = 5.0;
const MEDALS: [&str; 3] = ["🥇", "🥈", "🥉"];
const PATH_TOLERANCE: f64 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ColumnWidth {
    Fixed(f64),
    /// Takes whatever the fixed columns leave over.
    Fill,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Column {
    pub title: &'static str,
    pub width: ColumnWidth,
    pub anchor: TextAnchor,
}

impl Column {
    pub fn fixed(title: &'static str, width: f64, anchor: TextAnchor) -> Self {
        Self {
            title,
            width: ColumnWidth::Fixed(width),
            anchor,
        }
    }

    pub fn fill(title: &'static str) -> Self {
        Self {
            title,
            width: ColumnWidth::Fill,
            anchor: TextAnchor::Start,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Palette role of a text cell.
pub enum Tone {
    Text,
    SubText,
    Accent,
    Active,
    Inactive,
}

impl Tone {
    fn color(self, palette: &Palette) -> Color {
        match self {
            Self::Text => palette.text,
            Self::SubText => palette.sub_text,
            Self::Accent => palette.accent,
            Self::Active => palette.active,
            Self::Inactive => palette.inactive,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    /// Zero-based rank; medals for the first three.
    Rank(usize),
    /// Sponsor name, linked when `href` is set.
    Name { name: String, href: Option<String> },
    Text { text: String, tone: Tone },
}

impl Cell {
    pub fn text(text: impl Into<String>, tone: Tone) -> Self {
        Self::Text {
            text: text.into(),
            tone,
        }
    }

    pub fn name(name: &str, href: Option<&str>) -> Self {
        Self::Name {
            name: name.to_owned(),
            href: href.map(str::to_owned),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
/// Columns plus rows of cells; each row has one cell per column.
pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<Cell>>,
}

/// `(x, width)` of every column for a document `width` wide.
///
/// Fill columns share the table width left after the fixed columns.
pub fn column_spans(columns: &[Column], width: f64) -> Vec<(f64, f64)> {
    let table_width = (width - 2.0 * TABLE_MARGIN).max(0.0);
    let fixed: f64 = columns
        .iter()
        .map(|c| match c.width {
            ColumnWidth::Fixed(w) => w,
            ColumnWidth::Fill => 0.0,
        })
        .sum();
    let fill_count = columns
        .iter()
        .filter(|c| c.width == ColumnWidth::Fill)
        .count();
    let fill_width = if fill_count == 0 {
        0.0
    } else {
        ((table_width - fixed) / fill_count as f64).max(0.0)
    };

    let mut x = TABLE_MARGIN;
    columns
        .iter()
        .map(|c| {
            let w = match c.width {
                ColumnWidth::Fixed(w) => w,
                ColumnWidth::Fill => fill_width,
            };
            let span = (x, w);
            x += w;
            span
        })
        .collect()
}

fn anchor_x(anchor: TextAnchor, x: f64, w: f64) -> f64 {
    match anchor {
        TextAnchor::Start => x + CELL_PADDING,
        TextAnchor::Middle => x + w * 0.5,
        TextAnchor::End => x + w - CELL_PADDING,
    }
}

/// Draw `table` at the composer's cursor and advance past it.
///
/// A table with no rows draws nothing and does not move the cursor.
pub fn render_table(composer: &mut dyn Composer, table: &Table, width: f64, palette: &Palette) {
    if table.rows.is_empty() {
        return;
    }

    let spans = column_spans(&table.columns, width);
    let (left, right) = (TABLE_MARGIN, (width - TABLE_MARGIN).max(TABLE_MARGIN));

    composer.add_space(SECTION_PADDING);

    let top = composer.height();
    composer.push(DrawOp::Rect {
        rect: Rect::new(left, top, right, top + HEADER_HEIGHT),
        fill: palette.header_bg,
        opacity: 1.0,
    });
    push_separator(composer, left, right, top + HEADER_HEIGHT, palette);
    let baseline = top + HEADER_HEIGHT * 0.5 + BASELINE_SHIFT;
    for (column, &(x, w)) in table.columns.iter().zip(&spans) {
        composer.push(DrawOp::Text(TextOp {
            origin: Point::new(anchor_x(column.anchor, x, w), baseline),
            anchor: column.anchor,
            size: HEADER_FONT_SIZE,
            weight: FontWeight::Bold,
            fill: palette.sub_text,
            content: Markup::trusted(column.title),
        }));
    }
    composer.add_space(HEADER_HEIGHT);

    let last = table.rows.len() - 1;
    for (idx, row) in table.rows.iter().enumerate() {
        let top = composer.height();
        let bottom = top + ROW_HEIGHT;
        let fill = if idx % 2 == 0 {
            palette.row_bg
        } else {
            palette.row_bg_alt
        };
        let rect = Rect::new(left, top, right, bottom);

        if idx == last {
            let radii = RoundedRectRadii::new(0.0, 0.0, CORNER_RADIUS, CORNER_RADIUS);
            composer.push(DrawOp::Path {
                path: RoundedRect::from_rect(rect, radii).to_path(PATH_TOLERANCE),
                fill,
                opacity: 1.0,
            });
        } else {
            composer.push(DrawOp::Rect {
                rect,
                fill,
                opacity: 1.0,
            });
            push_separator(composer, left, right, bottom, palette);
        }

        let baseline = top + ROW_HEIGHT * 0.5 + BASELINE_SHIFT;
        for ((column, &(x, w)), cell) in table.columns.iter().zip(&spans).zip(row) {
            let origin = Point::new(anchor_x(column.anchor, x, w), baseline);
            composer.push(cell_op(cell, origin, column.anchor, palette));
        }
        composer.add_space(ROW_HEIGHT);
    }

    composer.add_space(SECTION_PADDING);
}

fn push_separator(composer: &mut dyn Composer, left: f64, right: f64, y: f64, palette: &Palette) {
    composer.push(DrawOp::Rect {
        rect: Rect::new(left, y - SEPARATOR_HEIGHT, right, y),
        fill: palette.border,
        opacity: SEPARATOR_OPACITY,
    });
}

fn cell_op(cell: &Cell, origin: Point, anchor: TextAnchor, palette: &Palette) -> DrawOp {
    let text = |content: Markup, fill: Color, weight: FontWeight| TextOp {
        origin,
        anchor,
        size: FONT_SIZE,
        weight,
        fill,
        content,
    };

    match cell {
        Cell::Rank(idx) => {
            let content = match MEDALS.get(*idx) {
                Some(medal) => Markup::trusted(*medal),
                None => Markup::escape(&(idx + 1).to_string()),
            };
            DrawOp::Text(text(content, palette.sub_text, FontWeight::Bold))
        }
        Cell::Name { name, href } => {
            let label = text(
                Markup::escape(&truncate_name(name, NAME_MAX_CHARS)),
                palette.text,
                FontWeight::Normal,
            );
            match href {
                Some(href) => DrawOp::Link {
                    href: Markup::escape(href),
                    text: label,
                },
                None => DrawOp::Text(label),
            }
        }
        Cell::Text { text: raw, tone } => DrawOp::Text(text(
            Markup::escape(raw),
            tone.color(palette),
            FontWeight::Normal,
        )),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/table.rs"]
mod tests;
