//! stipple can dump its scenes in a plaintext, human-readable format.
//! Mostly useful for quick inspection and tests.

#![warn(clippy::pedantic)]

use std::io::{self, Write};

use stipple_figure::{DotsItem, Item, LineStyle, PolygonItem, PolylineItem, Scene, TextItem};

/// The plaintext format writer.
#[derive(Debug)]
pub struct Plaintext<W: Write> {
    /// The write stream
    writer: W,
}

impl<W: Write> Plaintext<W> {
    /// Write the scene in plaintext format.
    ///
    /// # Errors
    /// Any I/O error of the underlying writer.
    pub fn draw(scene: &Scene, writer: W) -> io::Result<()> {
        let mut plain = Self { writer };

        writeln!(
            &mut plain.writer,
            "scene {}x{} on {}",
            scene.width, scene.height, scene.background
        )?;

        for item in &scene.items {
            match item {
                Item::Dots(dots) => plain.draw_dots(dots)?,
                Item::Polyline(line) => plain.draw_polyline(line)?,
                Item::Polygon(polygon) => plain.draw_polygon(polygon)?,
                Item::Text(text) => plain.draw_text(text)?,
            }
        }

        Ok(())
    }

    /// The human readable name of the requested [`LineStyle`]
    fn get_style_name(style: LineStyle) -> &'static str {
        match style {
            LineStyle::Dotted => "dotted",
            LineStyle::Dashed => "dashed",
            LineStyle::Solid => "solid",
        }
    }

    fn draw_dots(&mut self, dots: &DotsItem) -> io::Result<()> {
        writeln!(
            &mut self.writer,
            "{} dots of size {} in {}",
            dots.positions.len(),
            dots.size,
            dots.color
        )?;

        for p in &dots.positions {
            writeln!(&mut self.writer, "  dot at ({:.3}, {:.3})", p.x, p.y)?;
        }

        Ok(())
    }

    fn draw_polyline(&mut self, line: &PolylineItem) -> io::Result<()> {
        let (Some(first), Some(last)) = (line.points.first(), line.points.last()) else {
            return Ok(());
        };

        writeln!(
            &mut self.writer,
            "{} line of {} points from ({:.3}, {:.3}) to ({:.3}, {:.3}) in {}",
            Self::get_style_name(line.style),
            line.points.len(),
            first.x,
            first.y,
            last.x,
            last.y,
            line.color
        )
    }

    fn draw_polygon(&mut self, polygon: &PolygonItem) -> io::Result<()> {
        writeln!(
            &mut self.writer,
            "filled polygon of {} corners in {} at opacity {:.2}",
            polygon.points.len(),
            polygon.color,
            polygon.opacity
        )
    }

    fn draw_text(&mut self, text: &TextItem) -> io::Result<()> {
        writeln!(
            &mut self.writer,
            "text \"{}\" at ({:.3}, {:.3})",
            text.content, text.position.x, text.position.y
        )
    }
}

#[cfg(test)]
mod tests {
    use super::Plaintext;
    use stipple_figure::{
        Anchor, DotsItem, Item, Marker, Position, Scene, TextItem,
    };

    #[test]
    fn scene_items_are_listed_line_by_line() {
        let mut scene = Scene::new(500.0, 500.0, "#f9f9f9".to_string());
        scene.items.push(Item::Dots(DotsItem {
            positions: vec![Position::new(1.0, 2.0), Position::new(3.0, 4.0)],
            size: 2.5,
            color: "#d52753".to_string(),
            marker: Marker::Circle,
        }));
        scene.items.push(Item::Text(TextItem {
            position: Position::new(250.0, 20.0),
            content: "(0.00, 0.00)".to_string(),
            size: 10.0,
            color: "#26272d".to_string(),
            anchor: Anchor::Middle,
            bold: true,
        }));

        let mut buffer = Vec::new();
        Plaintext::draw(&scene, &mut buffer).unwrap();
        let out = String::from_utf8(buffer).unwrap();

        assert!(out.starts_with("scene 500x500 on #f9f9f9"));
        assert!(out.contains("2 dots of size 2.5 in #d52753"));
        assert!(out.contains("  dot at (1.000, 2.000)"));
        assert!(out.contains("text \"(0.00, 0.00)\" at (250.000, 20.000)"));
    }
}
