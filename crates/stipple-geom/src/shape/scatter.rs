//! Discrete point sets: clouds, single dots and lattices.

use super::Shape;
use crate::point::Point;
use crate::util::linspace;
use crate::ParamError;

/// An arbitrary set of dots, supplied by the caller.
#[derive(Debug, Clone)]
pub struct PointCloud {
    points: Vec<Point>,
    kind: String,
}

impl PointCloud {
    /// # Errors
    /// Needs at least one dot.
    pub fn new(points: Vec<Point>) -> Result<Self, ParamError> {
        Self::with_kind(points, "PointCloud")
    }

    /// A cloud with a custom kind label, for callers wrapping their own
    /// data.
    ///
    /// # Errors
    /// Needs at least one dot.
    pub fn with_kind(points: Vec<Point>, kind: impl Into<String>) -> Result<Self, ParamError> {
        if points.is_empty() {
            return Err(ParamError::DotCount {
                kind: "PointCloud",
                min: 1,
            });
        }

        Ok(Self {
            points,
            kind: kind.into(),
        })
    }
}

impl Shape for PointCloud {
    fn kind(&self) -> &str {
        &self.kind
    }

    fn base_points(&self) -> Vec<Point> {
        self.points.clone()
    }

    fn planar(&self) -> bool {
        false
    }
}

/// A single dot.
#[derive(Debug, Clone, Copy)]
pub struct Dot {
    x: f64,
    y: f64,
}

impl Dot {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Shape for Dot {
    fn kind(&self) -> &str {
        "Dot"
    }

    fn base_points(&self) -> Vec<Point> {
        vec![Point::new(self.x, self.y)]
    }

    fn planar(&self) -> bool {
        false
    }
}

/// A rectangular lattice of dots.
#[derive(Debug, Clone)]
pub struct Grid {
    height: f64,
    width: f64,
    rows: usize,
    cols: usize,
}

impl Grid {
    /// A square-count lattice.
    ///
    /// # Errors
    /// Needs at least two rows and columns.
    pub fn new(height: f64, width: f64, dots: usize) -> Result<Self, ParamError> {
        Self::with_dots(height, width, dots, dots)
    }

    /// A lattice with `rows` x `cols` dots.
    ///
    /// # Errors
    /// Needs at least two rows and columns.
    pub fn with_dots(height: f64, width: f64, rows: usize, cols: usize) -> Result<Self, ParamError> {
        if rows < 2 || cols < 2 {
            return Err(ParamError::DotCount {
                kind: "Grid",
                min: 2,
            });
        }

        Ok(Self {
            height,
            width,
            rows,
            cols,
        })
    }
}

impl Shape for Grid {
    fn kind(&self) -> &str {
        "Grid"
    }

    fn base_points(&self) -> Vec<Point> {
        let xs = linspace(-self.width / 2.0, self.width / 2.0, self.cols);
        let ys = linspace(-self.height / 2.0, self.height / 2.0, self.rows);

        let mut points = Vec::with_capacity(self.rows * self.cols);
        for &y in &ys {
            for &x in &xs {
                points.push(Point::new(x, y));
            }
        }

        points
    }

    fn planar(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::Shape;

    #[test]
    fn cloud_keeps_its_dots_and_label() {
        let cloud = PointCloud::with_kind(vec![Point::new(1.0, 2.0)], "Imported")
            .unwrap()
            .build();

        assert_eq!(cloud.kind(), "Imported");
        assert_eq!(cloud.points(), &[Point::new(1.0, 2.0)]);
        assert!(cloud.area().is_none());
    }

    #[test]
    fn empty_cloud_is_rejected() {
        assert!(PointCloud::new(Vec::new()).is_err());
    }

    #[test]
    fn grid_covers_rows_times_cols() {
        let grid = Grid::with_dots(2.0, 4.0, 3, 5).unwrap().build();

        assert_eq!(grid.len(), 15);
        assert_eq!(grid.points()[0], Point::new(-2.0, -1.0));
        assert_eq!(grid.points()[14], Point::new(2.0, 1.0));
    }

    #[test]
    fn dot_is_a_one_point_figure() {
        let dot = Dot::new(3.0, -1.0).build();
        assert_eq!(dot.len(), 1);
    }
}
