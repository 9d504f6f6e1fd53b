//! The parametric shape catalog. Every generator validates its parameters
//! on construction and produces a [`Figure`] through the [`Shape`] trait.

use crate::figure::{Figure, Outline};
use crate::point::Point;

pub mod curve;
pub mod line;
pub mod ornament;
pub mod polygon;
pub mod round;
pub mod scatter;

/// A parametric generator of dot figures.
///
/// Implementors compute the base coordinate set from their parameters;
/// `build` packages it into a [`Figure`] ready for transformation and
/// display.
pub trait Shape {
    /// The shape-family name, used for labels and diagnostics.
    fn kind(&self) -> &str;

    /// The untransformed coordinate set.
    fn base_points(&self) -> Vec<Point>;

    /// How the dots connect into an outline.
    fn outline(&self) -> Outline {
        Outline::Auto
    }

    /// Whether the generated figure encloses an area.
    fn planar(&self) -> bool {
        true
    }

    /// Generate the figure.
    fn build(&self) -> Figure {
        Figure::new(self.kind(), self.base_points(), self.outline(), self.planar())
    }
}
