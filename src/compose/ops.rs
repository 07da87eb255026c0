use std::fmt;

use crate::foundation::{color::Color, text::escape_xml};

pub use kurbo::{BezPath, Point, Rect};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
/// Text that is safe to splice into SVG markup.
///
/// Built either by escaping untrusted input or from a trusted literal.
pub struct Markup(String);

impl Markup {
    /// Escape untrusted text.
    pub fn escape(raw: &str) -> Self {
        Self(escape_xml(raw))
    }

    /// Wrap a literal known to contain no markup characters.
    pub fn trusted(literal: &'static str) -> Self {
        Self(literal.to_owned())
    }

    /// Borrow the escaped text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Horizontal text alignment relative to the text origin.
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

impl TextAnchor {
    pub(crate) fn as_svg(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

#[derive(Clone, Debug, PartialEq)]
/// A positioned run of text.
pub struct TextOp {
    /// Baseline origin.
    pub origin: Point,
    pub anchor: TextAnchor,
    /// Font size in px.
    pub size: f64,
    pub weight: FontWeight,
    pub fill: Color,
    pub content: Markup,
}

#[derive(Clone, Debug, PartialEq)]
/// Draw operation emitted by the table layout engine.
pub enum DrawOp {
    /// Axis-aligned filled rectangle.
    Rect {
        rect: Rect,
        fill: Color,
        opacity: f64,
    },
    /// Filled outline, used for rows with rounded corners.
    Path {
        path: BezPath,
        fill: Color,
        opacity: f64,
    },
    Text(TextOp),
    /// Text wrapped in a hyperlink.
    Link { href: Markup, text: TextOp },
}

/// Drawing surface with a running vertical cursor.
///
/// Views read [`Composer::height`] to place content and advance it with
/// [`Composer::add_space`]; ops themselves carry absolute coordinates.
pub trait Composer {
    /// Current cursor position from the top of the document.
    fn height(&self) -> f64;
    /// Move the cursor down by `dy`.
    fn add_space(&mut self, dy: f64);
    /// Append one draw operation.
    fn push(&mut self, op: DrawOp);
}
