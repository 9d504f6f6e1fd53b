//! The rendered-scene data model of stipple. A [`Scene`] is what the canvas
//! produces after laying out and projecting its figures, and it is the only
//! thing the format writers ever see. Everything here is plain data and fully
//! serializable.

#![warn(clippy::pedantic)]

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// A position in scene (screen) coordinates. The origin is the top-left
/// corner of the canvas, y grows downwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}

/// An RGB color in `#rrggbb` notation.
pub type Color = String;

/// Dash pattern of a stroked path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

/// Marker glyph used when scattering the dots of a figure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Marker {
    #[default]
    Circle,
    Square,
    Diamond,
    TriangleUp,
    TriangleDown,
    Plus,
    Cross,
}

/// Horizontal anchoring of a text item relative to its position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Anchor {
    Start,
    #[default]
    Middle,
    End,
}

/// A scattered set of dots sharing one marker, size and color.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DotsItem {
    pub positions: Vec<Position>,
    /// Marker radius in scene units.
    pub size: f64,
    pub color: Color,
    pub marker: Marker,
}

/// An open stroked path through the listed positions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolylineItem {
    pub points: Vec<Position>,
    pub width: f64,
    pub color: Color,
    pub style: LineStyle,
}

/// A filled polygon. Writers must close the path themselves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolygonItem {
    pub points: Vec<Position>,
    pub color: Color,
    /// Fill opacity in `[0, 1]`.
    pub opacity: f64,
}

/// A text annotation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextItem {
    pub position: Position,
    pub content: String,
    /// Font size in scene units.
    pub size: f64,
    pub color: Color,
    pub anchor: Anchor,
    pub bold: bool,
}

/// A single drawable of the scene. Items are listed back to front:
/// a writer drawing them in order produces the intended stacking.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
#[serde(rename_all = "snake_case")]
pub enum Item {
    Dots(DotsItem),
    Polyline(PolylineItem),
    Polygon(PolygonItem),
    Text(TextItem),
}

/// A laid-out scene, ready to be handed to a format writer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    /// Canvas width in scene units.
    pub width: f64,
    /// Canvas height in scene units.
    pub height: f64,
    /// Background fill of the whole canvas.
    pub background: Color,
    pub items: Vec<Item>,
}

impl Scene {
    /// An empty scene of the given dimensions.
    #[must_use]
    pub fn new(width: f64, height: f64, background: Color) -> Self {
        Self {
            width,
            height,
            background,
            items: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scene_roundtrips_through_json() {
        let mut scene = Scene::new(500.0, 500.0, "#f9f9f9".to_string());
        scene.items.push(Item::Dots(DotsItem {
            positions: vec![Position::new(1.0, 2.0), Position::new(3.0, 4.5)],
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

        let json = serde_json::to_string(&scene).unwrap();
        let back: Scene = serde_json::from_str(&json).unwrap();

        assert_eq!(back.items.len(), 2);
        match &back.items[0] {
            Item::Dots(dots) => {
                assert_eq!(dots.positions, vec![Position::new(1.0, 2.0), Position::new(3.0, 4.5)]);
                assert_eq!(dots.marker, Marker::Circle);
            }
            other => panic!("expected dots, got {other:?}"),
        }
    }

    #[test]
    fn item_tags_are_snake_case() {
        let item = Item::Polyline(PolylineItem {
            points: vec![Position::default()],
            width: 1.0,
            color: "#000000".to_string(),
            style: LineStyle::Dashed,
        });

        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains(r#""type":"polyline""#));
        assert!(json.contains(r#""style":"dashed""#));
    }
}
