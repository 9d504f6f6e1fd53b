//! stipple can write its scenes as JSON for machine consumption. The
//! document mirrors the scene model one to one.

#![warn(clippy::pedantic)]

use stipple_figure::Scene;

/// The JSON format writer.
#[derive(Default)]
pub struct Json;

impl Json {
    /// Output the scene as JSON.
    ///
    /// # Panics
    /// Panicking is a bug.
    #[must_use]
    pub fn draw(scene: &Scene) -> String {
        serde_json::to_string(scene).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::Json;
    use stipple_figure::{DotsItem, Item, Marker, Position, Scene};

    #[test]
    fn output_parses_back_into_a_scene() {
        let mut scene = Scene::new(500.0, 500.0, "#f9f9f9".to_string());
        scene.items.push(Item::Dots(DotsItem {
            positions: vec![Position::new(1.0, 2.0)],
            size: 2.5,
            color: "#d52753".to_string(),
            marker: Marker::Diamond,
        }));

        let json = Json::draw(&scene);
        let back: Scene = serde_json::from_str(&json).unwrap();

        assert_eq!(back.width, 500.0);
        assert_eq!(back.items.len(), 1);
        assert!(json.contains(r#""type":"dots""#));
    }
}
