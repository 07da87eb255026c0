use super::*;
use crate::compose::ops::{Markup, Point, Rect, TextAnchor};
use crate::foundation::color::Color;

fn label(content: Markup) -> TextOp {
    TextOp {
        origin: Point::new(10.0, 20.5),
        anchor: TextAnchor::Middle,
        size: 14.0,
        weight: FontWeight::Bold,
        fill: Color::rgb(255, 255, 255),
        content,
    }
}

#[test]
fn empty_document_has_zero_height() {
    let svg = SvgComposer::new(800.0).to_svg().unwrap();
    assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
    assert!(svg.contains(r#"width="800" height="0" viewBox="0 0 800 0""#));
    assert!(svg.trim_end().ends_with("</svg>"));
}

#[test]
fn serializes_rects_text_and_links() {
    let mut c = SvgComposer::new(400.0);
    c.add_space(12.5);
    c.push(DrawOp::Rect {
        rect: Rect::new(30.0, 0.0, 370.0, 1.0),
        fill: Color::rgb(0x30, 0x36, 0x3d),
        opacity: 0.5,
    });
    c.push(DrawOp::Text(label(Markup::escape("A & B"))));
    c.push(DrawOp::Link {
        href: Markup::escape("https://x.dev/?a=1&b=2"),
        text: label(Markup::trusted("x")),
    });

    let svg = c.to_svg().unwrap();
    assert!(svg.contains(r#"height="12.5""#));
    assert!(svg.contains(r##"<rect x="30" y="0" width="340" height="1" fill="#30363d" opacity="0.5"/>"##));
    assert!(svg.contains(
        r##"<text x="10" y="20.5" text-anchor="middle" font-size="14" font-weight="bold" fill="#ffffff">A &amp; B</text>"##
    ));
    assert!(svg.contains(r#"<a href="https://x.dev/?a=1&amp;b=2"><text"#));
    assert_eq!(c.ops().len(), 3);
}

#[test]
fn translucent_fill_becomes_fill_opacity() {
    let mut c = SvgComposer::new(100.0);
    let mut text = label(Markup::trusted("x"));
    text.fill = Color::rgba(0, 0, 0, 128);
    c.push(DrawOp::Text(text));
    let svg = c.to_svg().unwrap();
    assert!(svg.contains(r#"fill-opacity="0.5""#));
}

#[test]
fn rejects_non_positive_width() {
    assert!(SvgComposer::new(0.0).to_svg().is_err());
    assert!(SvgComposer::new(f64::NAN).to_svg().is_err());
}

#[test]
fn emitted_markup_parses_with_usvg() {
    let mut c = SvgComposer::new(200.0);
    c.add_space(40.0);
    c.push(DrawOp::Link {
        href: Markup::escape("https://example.com"),
        text: label(Markup::escape("<Sponsor>")),
    });
    let svg = c.to_svg().unwrap();
    usvg::Tree::from_str(&svg, &usvg::Options::default()).unwrap();
}
