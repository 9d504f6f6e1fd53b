//! Circles, arcs and ellipses.

use super::Shape;
use crate::figure::Outline;
use crate::point::Point;
use crate::util::{full_turn, linspace};
use crate::ParamError;
use num_traits::FloatConst;

/// A circle of dots around the origin.
#[derive(Debug, Clone)]
pub struct Circle {
    radius: f64,
    dots: usize,
}

impl Circle {
    /// # Errors
    /// Needs at least three dots to trace the border.
    pub fn new(radius: f64, dots: usize) -> Result<Self, ParamError> {
        if dots < 3 {
            return Err(ParamError::DotCount {
                kind: "Circle",
                min: 3,
            });
        }

        Ok(Self { radius, dots })
    }
}

impl Shape for Circle {
    fn kind(&self) -> &str {
        "Circle"
    }

    fn base_points(&self) -> Vec<Point> {
        full_turn(self.dots)
            .into_iter()
            .map(|theta| Point::polar(self.radius, theta))
            .collect()
    }

    fn outline(&self) -> Outline {
        Outline::ring(self.dots)
    }
}

/// A circular arc spanning `angle` radians from the positive x-axis.
#[derive(Debug, Clone)]
pub struct Arc {
    radius: f64,
    dots: usize,
    angle: f64,
}

impl Arc {
    /// The span is clamped to one full turn.
    ///
    /// # Errors
    /// Needs at least two dots.
    pub fn new(radius: f64, dots: usize, angle: f64) -> Result<Self, ParamError> {
        if dots < 2 {
            return Err(ParamError::DotCount { kind: "Arc", min: 2 });
        }

        Ok(Self {
            radius,
            dots,
            angle,
        })
    }
}

impl Shape for Arc {
    fn kind(&self) -> &str {
        "Arc"
    }

    fn base_points(&self) -> Vec<Point> {
        linspace(0.0, self.angle.min(f64::TAU()), self.dots)
            .into_iter()
            .map(|theta| Point::polar(self.radius, theta))
            .collect()
    }

    fn outline(&self) -> Outline {
        Outline::chain(self.dots)
    }

    fn planar(&self) -> bool {
        false
    }
}

/// An ellipse described by the lengths of its two axes.
#[derive(Debug, Clone)]
pub struct Ellipse {
    height: f64,
    width: f64,
    dots: usize,
}

impl Ellipse {
    /// `width` and `height` are the full major/minor axis lengths.
    ///
    /// # Errors
    /// Needs at least three dots to trace the border.
    pub fn new(height: f64, width: f64, dots: usize) -> Result<Self, ParamError> {
        if dots < 3 {
            return Err(ParamError::DotCount {
                kind: "Ellipse",
                min: 3,
            });
        }

        Ok(Self {
            height,
            width,
            dots,
        })
    }
}

impl Shape for Ellipse {
    fn kind(&self) -> &str {
        "Ellipse"
    }

    fn base_points(&self) -> Vec<Point> {
        full_turn(self.dots)
            .into_iter()
            .map(|theta| {
                Point::new(
                    self.width * theta.cos() / 2.0,
                    -self.height * theta.sin() / 2.0,
                )
            })
            .collect()
    }

    fn outline(&self) -> Outline {
        Outline::ring(self.dots)
    }
}
