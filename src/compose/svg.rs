use std::fmt::Write as _;

use crate::{
    compose::ops::{Composer, DrawOp, FontWeight, TextOp},
    foundation::error::{SponsorboardError, SponsorboardResult},
};

const FONT_STYLE: &str = "<style>text { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Helvetica, Arial, sans-serif; }</style>";

/// Records draw ops and serializes them into a standalone SVG document.
#[derive(Clone, Debug)]
pub struct SvgComposer {
    width: f64,
    height: f64,
    ops: Vec<DrawOp>,
}

impl SvgComposer {
    pub fn new(width: f64) -> Self {
        Self {
            width,
            height: 0.0,
            ops: Vec::new(),
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    /// Everything pushed so far, in order.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Serialize to an SVG document sized `width x height`.
    pub fn to_svg(&self) -> SponsorboardResult<String> {
        if !(self.width.is_finite() && self.width > 0.0) {
            return Err(SponsorboardError::render(format!(
                "svg width must be positive, got {}",
                self.width
            )));
        }

        let w = num(self.width);
        let h = num(self.height.max(0.0));
        let mut out = String::with_capacity(256 + self.ops.len() * 128);
        let _ = write!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
        );
        out.push('\n');
        out.push_str(FONT_STYLE);
        out.push('\n');
        for op in &self.ops {
            write_op(&mut out, op);
            out.push('\n');
        }
        out.push_str("</svg>\n");
        Ok(out)
    }
}

impl Composer for SvgComposer {
    fn height(&self) -> f64 {
        self.height
    }

    fn add_space(&mut self, dy: f64) {
        self.height += dy;
    }

    fn push(&mut self, op: DrawOp) {
        self.ops.push(op);
    }
}

/// Shortest stable rendering of a coordinate: integers bare, else up to 2 decimals.
fn num(v: f64) -> String {
    if v.fract() == 0.0 {
        return format!("{v:.0}");
    }
    let fixed = format!("{v:.2}");
    fixed
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_owned()
}

fn opacity_attr(attr: &str, opacity: f64) -> String {
    if opacity >= 1.0 {
        String::new()
    } else {
        format!(r#" {attr}="{}""#, num(opacity.max(0.0)))
    }
}

fn write_op(out: &mut String, op: &DrawOp) {
    match op {
        DrawOp::Rect {
            rect,
            fill,
            opacity,
        } => {
            let _ = write!(
                out,
                r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"{}/>"#,
                num(rect.x0),
                num(rect.y0),
                num(rect.width()),
                num(rect.height()),
                fill.hex(),
                opacity_attr("opacity", opacity * fill.opacity()),
            );
        }
        DrawOp::Path {
            path,
            fill,
            opacity,
        } => {
            let _ = write!(
                out,
                r#"<path d="{}" fill="{}"{}/>"#,
                path.to_svg(),
                fill.hex(),
                opacity_attr("opacity", opacity * fill.opacity()),
            );
        }
        DrawOp::Text(text) => write_text(out, text),
        DrawOp::Link { href, text } => {
            let _ = write!(out, r#"<a href="{href}">"#);
            write_text(out, text);
            out.push_str("</a>");
        }
    }
}

fn write_text(out: &mut String, text: &TextOp) {
    let weight = match text.weight {
        FontWeight::Normal => "",
        FontWeight::Bold => r#" font-weight="bold""#,
    };
    let _ = write!(
        out,
        r#"<text x="{}" y="{}" text-anchor="{}" font-size="{}"{} fill="{}"{}>{}</text>"#,
        num(text.origin.x),
        num(text.origin.y),
        text.anchor.as_svg(),
        num(text.size),
        weight,
        text.fill.hex(),
        opacity_attr("fill-opacity", text.fill.opacity()),
        text.content,
    );
}

#[cfg(test)]
#[path = "../../tests/unit/compose/svg.rs"]
mod tests;
