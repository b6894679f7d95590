use crate::foundation::core::{Canvas, Rgba};
use crate::scene::frame::StrokeItem;

/// Writes a standalone SVG document: a background rect, then one unfilled `<path>` per item.
pub fn write_svg_document(canvas: Canvas, background: [u8; 4], items: &[StrokeItem]) -> String {
    let Canvas { width, height } = canvas;
    let [r, g, b, a] = background;
    let mut out = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" \
         viewBox=\"0 0 {width} {height}\">\n"
    );
    out.push_str(&format!(
        "  <rect width=\"{width}\" height=\"{height}\" fill=\"{}\"/>\n",
        css_rgba(Rgba::new(
            f64::from(r) / 255.0,
            f64::from(g) / 255.0,
            f64::from(b) / 255.0,
            f64::from(a) / 255.0,
        ))
    ));
    for item in items {
        out.push_str(&format!(
            "  <path d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\"/>\n",
            item.path.to_svg(),
            css_rgba(item.stroke),
            item.width
        ));
    }
    out.push_str("</svg>\n");
    out
}

fn css_rgba(c: Rgba) -> String {
    let [r, g, b, _] = c.to_rgba8();
    let a = (c.a.clamp(0.0, 1.0) * 1000.0).round() / 1000.0;
    format!("rgba({r},{g},{b},{a})")
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
