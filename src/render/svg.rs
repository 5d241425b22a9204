use std::fmt::Write as _;

use kurbo::{BezPath, ParamCurveArclen as _, Shape as _};

use crate::{
    foundation::color::Color,
    foundation::core::Point,
    visual::frame::{Frame, FrameNode},
    visual::model::Geometry,
};

/// Output settings for SVG serialization.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderSettings {
    /// Output pixels per view box unit.
    pub scale: f64,
    /// Canvas fill behind all elements, if any.
    pub background: Option<Color>,
    /// CSS font family for text elements.
    pub font_family: String,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            scale: 1.0,
            background: Some(Color::rgb(0x0f, 0x17, 0x2a)),
            font_family: "sans-serif".to_string(),
        }
    }
}

const ARCLEN_ACCURACY: f64 = 1e-3;

/// Serialize a resolved frame as a standalone SVG document.
///
/// Fully transparent nodes and strokes with nothing drawn yet are omitted.
pub fn to_svg(frame: &Frame, settings: &RenderSettings) -> String {
    let w = frame.view_box.width;
    let h = frame.view_box.height;
    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        num(w * settings.scale),
        num(h * settings.scale),
        num(w),
        num(h),
    );
    if let Some(bg) = settings.background {
        let _ = writeln!(
            out,
            r#"  <rect x="0" y="0" width="{}" height="{}" fill="{}"{}/>"#,
            num(w),
            num(h),
            bg.to_svg_hex(),
            alpha_attr("fill-opacity", bg),
        );
    }
    for node in &frame.nodes {
        write_node(&mut out, node, settings);
    }
    out.push_str("</svg>\n");
    out
}

fn write_node(out: &mut String, node: &FrameNode, settings: &RenderSettings) {
    let state = &node.state;
    if state.opacity <= 0.0 || state.path_length <= 0.0 {
        return;
    }

    let mut attrs = format!(r#" id="{}""#, escape(&node.id));
    if state.opacity < 1.0 {
        let _ = write!(attrs, r#" opacity="{}""#, num(state.opacity));
    }

    match &state.geometry {
        Geometry::Line { from, to } => {
            push_stroke(&mut attrs, node);
            let length = kurbo::Line::new(*from, *to).arclen(ARCLEN_ACCURACY);
            push_dash(&mut attrs, length, state.path_length);
            let _ = writeln!(
                out,
                r#"  <line x1="{}" y1="{}" x2="{}" y2="{}"{attrs}/>"#,
                num(from.x),
                num(from.y),
                num(to.x),
                num(to.y),
            );
        }
        Geometry::Rect {
            origin,
            size,
            corner_radius,
        } => {
            push_stroke(&mut attrs, node);
            push_fill(&mut attrs, node);
            let r = corner_radius
                .min(size.width / 2.0)
                .min(size.height / 2.0)
                .max(0.0);
            let _ = writeln!(
                out,
                r#"  <rect x="{}" y="{}" width="{}" height="{}" rx="{}" ry="{}"{attrs}/>"#,
                num(origin.x),
                num(origin.y),
                num(size.width),
                num(size.height),
                num(r),
                num(r),
            );
        }
        Geometry::Polyline { points } => {
            let path = polyline_path(points);
            push_stroke(&mut attrs, node);
            push_fill(&mut attrs, node);
            push_dash(&mut attrs, path.perimeter(ARCLEN_ACCURACY), state.path_length);
            let _ = writeln!(out, r#"  <path d="{}"{attrs}/>"#, path.to_svg());
        }
        Geometry::Text { origin, content } => {
            push_fill(&mut attrs, node);
            let _ = writeln!(
                out,
                r#"  <text x="{}" y="{}" font-size="{}" font-family="{}"{attrs}>{}</text>"#,
                num(origin.x),
                num(origin.y),
                num(node.paint.font_size),
                escape(&settings.font_family),
                escape(content),
            );
        }
    }
}

fn polyline_path(points: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    let mut iter = points.iter();
    if let Some(first) = iter.next() {
        path.move_to(*first);
        for p in iter {
            path.line_to(*p);
        }
    }
    path
}

fn push_stroke(attrs: &mut String, node: &FrameNode) {
    match node.paint.stroke {
        Some(c) => {
            let _ = write!(
                attrs,
                r#" stroke="{}" stroke-width="{}"{}"#,
                c.to_svg_hex(),
                num(node.paint.stroke_width),
                alpha_attr("stroke-opacity", c),
            );
        }
        None => attrs.push_str(r#" stroke="none""#),
    }
}

fn push_fill(attrs: &mut String, node: &FrameNode) {
    match node.paint.fill {
        Some(c) => {
            let _ = write!(
                attrs,
                r#" fill="{}"{}"#,
                c.to_svg_hex(),
                alpha_attr("fill-opacity", c)
            );
        }
        None => attrs.push_str(r#" fill="none""#),
    }
}

// Partially drawn strokes are a single dash of the drawn length.
fn push_dash(attrs: &mut String, length: f64, path_length: f64) {
    if path_length >= 1.0 || length <= 0.0 {
        return;
    }
    let _ = write!(
        attrs,
        r#" stroke-dasharray="{} {}""#,
        num(length * path_length),
        num(length)
    );
}

fn alpha_attr(name: &str, c: Color) -> String {
    if c.a == 255 {
        String::new()
    } else {
        format!(r#" {name}="{}""#, num(c.alpha()))
    }
}

fn num(v: f64) -> String {
    let v = (v * 1000.0).round() / 1000.0;
    // Avoid "-0" in output.
    if v == 0.0 {
        return "0".to_string();
    }
    format!("{v}")
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
