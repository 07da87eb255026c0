//! Textual rewrites applied to finished SVG documents.
//!
//! These work on the serialized string, not on draw ops, so they also apply to
//! markup that other composers appended.

use crate::foundation::{
    color::Color,
    error::{SponsorboardError, SponsorboardResult},
};

const LINK_OPEN: &str = "<a ";
const SAFE_LINK_OPEN: &str = r#"<a target="_blank" rel="noopener noreferrer" "#;

/// Open every link in a new tab without leaking the opener.
pub fn harden_links(svg: &str) -> String {
    svg.replace(LINK_OPEN, SAFE_LINK_OPEN)
}

/// Insert a full-size background rectangle as the first child of the root `<svg>`.
pub fn inject_background(svg: &str, color: Color) -> SponsorboardResult<String> {
    let start = svg
        .find("<svg")
        .ok_or_else(|| SponsorboardError::render("document has no <svg> element"))?;
    let open_end = svg[start..]
        .find('>')
        .map(|i| start + i + 1)
        .ok_or_else(|| SponsorboardError::render("unterminated <svg> tag"))?;

    let mut out = String::with_capacity(svg.len() + 64);
    out.push_str(&svg[..open_end]);
    out.push_str(&format!(
        r#"<rect width="100%" height="100%" fill="{}"/>"#,
        color.hex()
    ));
    out.push_str(&svg[open_end..]);
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/compose/postprocess.rs"]
mod tests;
