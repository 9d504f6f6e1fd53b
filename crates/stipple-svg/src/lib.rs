//! stipple can write its scenes as plain SVG files. The output sticks to
//! widely supported elements, so it should display nearly everywhere.

#![warn(clippy::pedantic)]

use std::io::{self, Write};

use stipple_figure::{
    Anchor, DotsItem, Item, LineStyle, Marker, PolygonItem, PolylineItem, Position, Scene,
    TextItem,
};

/// The SVG format writer.
#[derive(Debug)]
pub struct Svg<W: Write> {
    /// Writer stream
    writer: W,
}

impl<W: Write> Svg<W> {
    /// Write the scene as an SVG document.
    ///
    /// # Errors
    /// Any I/O error of the underlying writer.
    pub fn draw(scene: &Scene, writer: W) -> io::Result<()> {
        let mut svg = Self { writer };

        svg.begin(scene)?;

        for item in &scene.items {
            match item {
                Item::Dots(dots) => svg.draw_dots(dots)?,
                Item::Polyline(line) => svg.draw_polyline(line)?,
                Item::Polygon(polygon) => svg.draw_polygon(polygon)?,
                Item::Text(text) => svg.draw_text(text)?,
            }
        }

        svg.end()
    }

    /// The dash-array attribute for a [`LineStyle`].
    fn get_style_dashing(style: LineStyle) -> &'static str {
        match style {
            LineStyle::Dotted => "0.8,1",
            LineStyle::Dashed => "4,4",
            LineStyle::Solid => "1,0",
        }
    }

    fn get_anchor(anchor: Anchor) -> &'static str {
        match anchor {
            Anchor::Start => "start",
            Anchor::Middle => "middle",
            Anchor::End => "end",
        }
    }

    fn begin(&mut self, scene: &Scene) -> io::Result<()> {
        write!(
            &mut self.writer,
            r#"<svg height="{}" width="{}" xmlns="http://www.w3.org/2000/svg">
<rect width="100%" height="100%" fill="{}"/>
"#,
            scene.height, scene.width, scene.background,
        )
    }

    fn draw_dots(&mut self, dots: &DotsItem) -> io::Result<()> {
        for p in &dots.positions {
            self.draw_marker(*p, dots.size, &dots.color, dots.marker)?;
        }

        Ok(())
    }

    fn draw_marker(&mut self, p: Position, r: f64, color: &str, marker: Marker) -> io::Result<()> {
        match marker {
            Marker::Circle => write!(
                &mut self.writer,
                r#"<circle cx="{:.2}" cy="{:.2}" r="{r}" fill="{color}"/>"#,
                p.x, p.y
            ),
            Marker::Square => write!(
                &mut self.writer,
                r#"<rect x="{:.2}" y="{:.2}" width="{}" height="{}" fill="{color}"/>"#,
                p.x - r,
                p.y - r,
                2.0 * r,
                2.0 * r
            ),
            Marker::Diamond => self.draw_polygon_marker(
                &[
                    (p.x, p.y - r),
                    (p.x + r, p.y),
                    (p.x, p.y + r),
                    (p.x - r, p.y),
                ],
                color,
            ),
            Marker::TriangleUp => self.draw_polygon_marker(
                &[(p.x, p.y - r), (p.x + r, p.y + r), (p.x - r, p.y + r)],
                color,
            ),
            Marker::TriangleDown => self.draw_polygon_marker(
                &[(p.x, p.y + r), (p.x + r, p.y - r), (p.x - r, p.y - r)],
                color,
            ),
            Marker::Plus => write!(
                &mut self.writer,
                r#"<path d="M {} {} h {} M {} {} v {}" stroke="{color}" stroke-width="{}"/>"#,
                p.x - r,
                p.y,
                2.0 * r,
                p.x,
                p.y - r,
                2.0 * r,
                r / 2.0
            ),
            Marker::Cross => write!(
                &mut self.writer,
                r#"<path d="M {} {} L {} {} M {} {} L {} {}" stroke="{color}" stroke-width="{}"/>"#,
                p.x - r,
                p.y - r,
                p.x + r,
                p.y + r,
                p.x - r,
                p.y + r,
                p.x + r,
                p.y - r,
                r / 2.0
            ),
        }?;

        writeln!(&mut self.writer)
    }

    fn draw_polygon_marker(&mut self, corners: &[(f64, f64)], color: &str) -> io::Result<()> {
        write!(&mut self.writer, r#"<polygon points=""#)?;
        for (x, y) in corners {
            write!(&mut self.writer, "{x:.2},{y:.2} ")?;
        }
        write!(&mut self.writer, r#"" fill="{color}"/>"#)
    }

    fn draw_polyline(&mut self, line: &PolylineItem) -> io::Result<()> {
        write!(&mut self.writer, r#"<polyline points=""#)?;
        for p in &line.points {
            write!(&mut self.writer, "{:.2},{:.2} ", p.x, p.y)?;
        }
        writeln!(
            &mut self.writer,
            r#"" fill="none" stroke="{}" stroke-width="{}" stroke-dasharray="{}"/>"#,
            line.color,
            line.width,
            Self::get_style_dashing(line.style),
        )
    }

    fn draw_polygon(&mut self, polygon: &PolygonItem) -> io::Result<()> {
        write!(&mut self.writer, r#"<polygon points=""#)?;
        for p in &polygon.points {
            write!(&mut self.writer, "{:.2},{:.2} ", p.x, p.y)?;
        }
        writeln!(
            &mut self.writer,
            r#"" fill="{}" fill-opacity="{}"/>"#,
            polygon.color, polygon.opacity,
        )
    }

    fn draw_text(&mut self, text: &TextItem) -> io::Result<()> {
        writeln!(
            &mut self.writer,
            r#"<text x="{:.2}" y="{:.2}" text-anchor="{}" dominant-baseline="middle" font-size="{}px" font-weight="{}" fill="{}">{}</text>"#,
            text.position.x,
            text.position.y,
            Self::get_anchor(text.anchor),
            text.size,
            if text.bold { "bold" } else { "normal" },
            text.color,
            escape(&text.content),
        )
    }

    fn end(&mut self) -> io::Result<()> {
        writeln!(&mut self.writer, "</svg>")
    }
}

/// Escape the XML special characters of a text node.
fn escape(content: &str) -> String {
    content
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::Svg;
    use stipple_figure::{
        Anchor, DotsItem, Item, LineStyle, Marker, PolylineItem, Position, Scene, TextItem,
    };

    fn sample_scene() -> Scene {
        let mut scene = Scene::new(200.0, 100.0, "#ffffff".to_string());
        scene.items.push(Item::Dots(DotsItem {
            positions: vec![Position::new(10.0, 20.0)],
            size: 2.5,
            color: "#d52753".to_string(),
            marker: Marker::Circle,
        }));
        scene.items.push(Item::Polyline(PolylineItem {
            points: vec![Position::new(0.0, 0.0), Position::new(50.0, 50.0)],
            width: 1.0,
            color: "#5794de".to_string(),
            style: LineStyle::Dashed,
        }));
        scene.items.push(Item::Text(TextItem {
            position: Position::new(100.0, 10.0),
            content: "(Area = 4.00)".to_string(),
            size: 10.0,
            color: "#26272d".to_string(),
            anchor: Anchor::Middle,
            bold: true,
        }));
        scene
    }

    fn render(scene: &Scene) -> String {
        let mut buffer = Vec::new();
        Svg::draw(scene, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn document_has_dimensions_and_background() {
        let out = render(&sample_scene());

        assert!(out.starts_with("<svg height=\"100\" width=\"200\""));
        assert!(out.contains(r##"<rect width="100%" height="100%" fill="#ffffff"/>"##));
        assert!(out.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn items_become_svg_elements() {
        let out = render(&sample_scene());

        assert!(out.contains(r##"<circle cx="10.00" cy="20.00" r="2.5" fill="#d52753"/>"##));
        assert!(out.contains(r#"stroke-dasharray="4,4""#));
        assert!(out.contains(">(Area = 4.00)</text>"));
    }

    #[test]
    fn text_content_is_escaped() {
        let mut scene = Scene::new(10.0, 10.0, "#fff".to_string());
        scene.items.push(Item::Text(TextItem {
            position: Position::new(0.0, 0.0),
            content: "a < b & c".to_string(),
            size: 10.0,
            color: "#000".to_string(),
            anchor: Anchor::Start,
            bold: false,
        }));

        let out = render(&scene);
        assert!(out.contains("a &lt; b &amp; c"));
    }

    #[test]
    fn square_marker_is_centered_on_its_dot() {
        let mut scene = Scene::new(10.0, 10.0, "#fff".to_string());
        scene.items.push(Item::Dots(DotsItem {
            positions: vec![Position::new(5.0, 5.0)],
            size: 2.0,
            color: "#000".to_string(),
            marker: Marker::Square,
        }));

        let out = render(&scene);
        assert!(out.contains(r##"<rect x="3.00" y="3.00" width="4" height="4" fill="#000"/>"##));
    }
}
