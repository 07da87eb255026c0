use serde::{Deserialize, Serialize};

use crate::foundation::color::Color;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Built-in color scheme selector.
pub enum Theme {
    #[default]
    Dark,
    Light,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Every color a table view uses.
pub struct Palette {
    /// Document background, used by background injection.
    pub background: Color,
    /// Primary text (names, amounts).
    pub text: Color,
    /// Secondary text (headers, ranks, dates).
    pub sub_text: Color,
    /// Header band fill.
    pub header_bg: Color,
    /// Fill for even rows.
    pub row_bg: Color,
    /// Fill for odd rows.
    pub row_bg_alt: Color,
    /// Separator lines.
    pub border: Color,
    /// Highlights such as tier labels.
    pub accent: Color,
    /// `Active` status.
    pub active: Color,
    /// `Past` status.
    pub inactive: Color,
}

impl Palette {
    pub fn dark() -> Self {
        Self {
            background: Color::rgb(0x0d, 0x11, 0x17),
            text: Color::rgb(0xe6, 0xed, 0xf3),
            sub_text: Color::rgb(0x8b, 0x94, 0x9e),
            header_bg: Color::rgb(0x21, 0x26, 0x2d),
            row_bg: Color::rgb(0x0d, 0x11, 0x17),
            row_bg_alt: Color::rgb(0x16, 0x1b, 0x22),
            border: Color::rgb(0x30, 0x36, 0x3d),
            accent: Color::rgb(0xe3, 0xb3, 0x41),
            active: Color::rgb(0x3f, 0xb9, 0x50),
            inactive: Color::rgb(0x8b, 0x94, 0x9e),
        }
    }

    pub fn light() -> Self {
        Self {
            background: Color::rgb(0xff, 0xff, 0xff),
            text: Color::rgb(0x1f, 0x23, 0x28),
            sub_text: Color::rgb(0x65, 0x6d, 0x76),
            header_bg: Color::rgb(0xea, 0xee, 0xf2),
            row_bg: Color::rgb(0xff, 0xff, 0xff),
            row_bg_alt: Color::rgb(0xf6, 0xf8, 0xfa),
            border: Color::rgb(0xd0, 0xd7, 0xde),
            accent: Color::rgb(0x9a, 0x67, 0x00),
            active: Color::rgb(0x1a, 0x7f, 0x37),
            inactive: Color::rgb(0x65, 0x6d, 0x76),
        }
    }

    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self::dark(),
            Theme::Light => Self::light(),
        }
    }
}
