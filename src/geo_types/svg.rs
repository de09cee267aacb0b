use geo_types::MultiLineString;
use svg::node::element::path::Data;
use svg::node::element::{Path, Rectangle};
use svg::Document;

use crate::render::Viewport;

/// How the line work gets painted.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgStyle {
    pub background: String,
    pub stroke: String,
    pub stroke_width: f64,
}

impl Default for SvgStyle {
    fn default() -> Self {
        SvgStyle {
            background: "black".to_string(),
            stroke: "white".to_string(),
            stroke_width: 1.0,
        }
    }
}

/// Convert the lines into an SVG PathData item, one move_to per linestring.
pub fn to_path_data(lines: &MultiLineString<f64>) -> Data {
    let mut svg_data = Data::new();
    for tline in lines {
        for point in tline.points().take(1) {
            svg_data = svg_data.move_to((point.x(), point.y()));
        }
        for point in tline.points().skip(1) {
            svg_data = svg_data.line_to((point.x(), point.y()));
        }
    }
    svg_data
}

/// Builds a document the size of the viewport. The lines are expected to be
/// in viewport coordinates already (see [`crate::render::render`]).
pub fn to_document(lines: &MultiLineString<f64>, viewport: &Viewport, style: &SvgStyle) -> Document {
    let background = Rectangle::new()
        .set("x", 0)
        .set("y", 0)
        .set("width", viewport.width)
        .set("height", viewport.height)
        .set("fill", style.background.as_str());
    let path = Path::new()
        .set("fill", "none")
        .set("stroke", style.stroke.as_str())
        .set("stroke-width", style.stroke_width)
        .set("stroke-linecap", "round")
        .set("d", to_path_data(lines));
    Document::new()
        .set("viewBox", (0.0, 0.0, viewport.width, viewport.height))
        .set("width", viewport.width)
        .set("height", viewport.height)
        .add(background)
        .add(path)
}

#[cfg(test)]
mod test {
    use super::*;
    use geo_types::{coord, LineString};

    #[test]
    fn test_document() {
        let mls = MultiLineString::new(vec![
            LineString::new(vec![
                coord! {x: 0.0f64, y: 0.0f64},
                coord! {x: 0.0f64, y: 100.0f64},
                coord! {x: 100.0f64, y: 100.0f64},
            ]),
            LineString::new(vec![coord! {x: 5.0, y: 5.0}, coord! {x: 6.0, y: 6.0}]),
        ]);
        let doc = to_document(&mls, &Viewport::new(200.0, 150.0), &SvgStyle::default()).to_string();
        assert!(doc.contains("viewBox=\"0 0 200 150\""));
        assert!(doc.contains("stroke=\"white\""));
        assert!(doc.contains("fill=\"black\""));
        assert!(doc.contains("M0,0 L0,100 L100,100 M5,5 L6,6"));
    }

    #[test]
    fn test_empty_path() {
        let doc = to_document(
            &MultiLineString::new(vec![]),
            &Viewport::new(10.0, 10.0),
            &SvgStyle::default(),
        );
        assert!(doc.to_string().contains("<path"));
    }
}
