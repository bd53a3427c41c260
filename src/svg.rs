//! Typed SVG drawing operations and their serializer.
//!
//! Element renderers build trees of [`Node`] values; turning them into
//! markup happens in one place, at the end, so the geometry and renderer
//! code stays free of string plumbing. All attribute values and text
//! content are XML-escaped during serialization.

use std::fmt::Write as _;

#[derive(Debug, Clone)]
pub enum Node {
    Path(Path),
    Circle(Circle),
    Label(Label),
    Group(Group),
}

#[derive(Debug, Clone, Default)]
pub struct Path {
    pub d: String,
    pub fill: String,
    pub fill_opacity: Option<f64>,
    pub stroke: Option<String>,
    pub stroke_width: Option<f64>,
    pub transform: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct Circle {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
    pub fill: String,
    pub fill_opacity: Option<f64>,
    pub stroke: Option<String>,
    pub stroke_width: Option<f64>,
}

#[derive(Debug, Clone, Default)]
pub struct Label {
    pub x: f64,
    pub y: f64,
    pub class: Option<String>,
    pub font_size: f64,
    pub font_weight: Option<String>,
    pub content: String,
}

#[derive(Debug, Clone, Default)]
pub struct Group {
    pub class: String,
    /// Extra attributes (`data-*` metadata), emitted in insertion order.
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Node {
    fn write(&self, out: &mut String, depth: usize) {
        let pad = "  ".repeat(depth);
        match self {
            Node::Path(path) => {
                let _ = write!(out, "{pad}<path d=\"{}\" fill=\"{}\"", escape_xml(&path.d), escape_xml(&path.fill));
                if let Some(opacity) = path.fill_opacity {
                    let _ = write!(out, " fill-opacity=\"{opacity}\"");
                }
                if let Some(stroke) = &path.stroke {
                    let _ = write!(out, " stroke=\"{}\"", escape_xml(stroke));
                }
                if let Some(width) = path.stroke_width {
                    let _ = write!(out, " stroke-width=\"{width}\"");
                }
                if let Some(transform) = &path.transform {
                    let _ = write!(out, " transform=\"{}\"", escape_xml(transform));
                }
                out.push_str("/>\n");
            }
            Node::Circle(circle) => {
                let _ = write!(
                    out,
                    "{pad}<circle cx=\"{:.1}\" cy=\"{:.1}\" r=\"{:.1}\" fill=\"{}\"",
                    circle.cx,
                    circle.cy,
                    circle.r,
                    escape_xml(&circle.fill)
                );
                if let Some(opacity) = circle.fill_opacity {
                    let _ = write!(out, " fill-opacity=\"{opacity}\"");
                }
                if let Some(stroke) = &circle.stroke {
                    let _ = write!(out, " stroke=\"{}\"", escape_xml(stroke));
                }
                if let Some(width) = circle.stroke_width {
                    let _ = write!(out, " stroke-width=\"{width}\"");
                }
                out.push_str("/>\n");
            }
            Node::Label(label) => {
                let _ = write!(out, "{pad}<text x=\"{:.1}\" y=\"{:.1}\"", label.x, label.y);
                if let Some(class) = &label.class {
                    let _ = write!(out, " class=\"{}\"", escape_xml(class));
                }
                let _ = write!(out, " font-size=\"{}\"", label.font_size);
                if let Some(weight) = &label.font_weight {
                    let _ = write!(out, " font-weight=\"{}\"", escape_xml(weight));
                }
                let _ = write!(out, ">{}</text>\n", escape_xml(&label.content));
            }
            Node::Group(group) => {
                let _ = write!(out, "{pad}<g class=\"{}\"", escape_xml(&group.class));
                for (name, value) in &group.attrs {
                    let _ = write!(out, " {name}=\"{}\"", escape_xml(value));
                }
                out.push_str(">\n");
                for child in &group.children {
                    child.write(out, depth + 1);
                }
                let _ = write!(out, "{pad}</g>\n");
            }
        }
    }
}

/// A complete vector document: explicit dimensions with a matching viewBox,
/// a fixed background, one shared style block, then the drawing nodes.
#[derive(Debug, Clone, Default)]
pub struct Document {
    pub width: f64,
    pub height: f64,
    pub background: String,
    pub style: String,
    pub nodes: Vec<Node>,
}

impl Document {
    pub fn to_svg(&self) -> String {
        let mut out = String::new();
        let _ = write!(
            out,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {w} {h}\" width=\"{w}\" height=\"{h}\" style=\"background:{bg}\">\n",
            w = self.width,
            h = self.height,
            bg = escape_xml(&self.background)
        );
        let _ = write!(
            out,
            "<defs><style type=\"text/css\">{}</style></defs>\n",
            self.style
        );
        for node in &self.nodes {
            node.write(&mut out, 0);
        }
        out.push_str("</svg>");
        out
    }
}

pub(crate) fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            escape_xml(r#"<a & "b">"#),
            "&lt;a &amp; &quot;b&quot;&gt;"
        );
    }

    #[test]
    fn path_emits_only_present_attributes() {
        let mut out = String::new();
        Node::Path(Path {
            d: "M 0.00 0.00 Z".to_string(),
            fill: "#abc".to_string(),
            ..Default::default()
        })
        .write(&mut out, 0);
        assert_eq!(out, "<path d=\"M 0.00 0.00 Z\" fill=\"#abc\"/>\n");
    }

    #[test]
    fn circle_uses_one_decimal_coordinates() {
        let mut out = String::new();
        Node::Circle(Circle {
            cx: 1.25,
            cy: 2.0,
            r: 40.0,
            fill: "#6b8e23".to_string(),
            fill_opacity: Some(0.3),
            stroke: Some("none".to_string()),
            ..Default::default()
        })
        .write(&mut out, 0);
        assert_eq!(
            out,
            "<circle cx=\"1.2\" cy=\"2.0\" r=\"40.0\" fill=\"#6b8e23\" fill-opacity=\"0.3\" stroke=\"none\"/>\n"
        );
    }

    #[test]
    fn group_nests_children_with_indentation() {
        let mut out = String::new();
        Node::Group(Group {
            class: "landmark".to_string(),
            attrs: vec![("data-name".to_string(), "Shed & Co".to_string())],
            children: vec![Node::Label(Label {
                x: 5.0,
                y: 6.0,
                class: Some("text-label".to_string()),
                font_size: 14.0,
                font_weight: Some("bold".to_string()),
                content: "hi".to_string(),
            })],
        })
        .write(&mut out, 0);
        assert_eq!(
            out,
            "<g class=\"landmark\" data-name=\"Shed &amp; Co\">\n  <text x=\"5.0\" y=\"6.0\" class=\"text-label\" font-size=\"14\" font-weight=\"bold\">hi</text>\n</g>\n"
        );
    }

    #[test]
    fn document_envelope_carries_matching_viewbox() {
        let doc = Document {
            width: 800.0,
            height: 600.0,
            background: "#f5f0e8".to_string(),
            style: ".x { fill: red; }".to_string(),
            nodes: Vec::new(),
        };
        let svg = doc.to_svg();
        assert!(svg.starts_with(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 800 600\" width=\"800\" height=\"600\" style=\"background:#f5f0e8\">"
        ));
        assert!(svg.contains("<style type=\"text/css\">.x { fill: red; }</style>"));
        assert!(svg.ends_with("</svg>"));
    }
}
