//! Infinitely long straight lines. A line has no finite coordinate set, so
//! it is not a [`Figure`](crate::Figure); the canvas clips it to the view
//! box at draw time.

use crate::metrics::Bounds;
use crate::point::Point;
use crate::ParamError;

/// An infinite straight line through a point, with a direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    anchor: Point,
    /// Unit direction vector.
    direction: Point,
}

impl Line {
    /// The line through two distinct points.
    ///
    /// # Errors
    /// The points must not coincide.
    pub fn through(p1: Point, p2: Point) -> Result<Self, ParamError> {
        let d = p2 - p1;
        let len = d.norm();

        if len == 0.0 {
            return Err(ParamError::Range {
                kind: "Line",
                param: "p2",
                expected: "distinct from p1",
            });
        }

        Ok(Self {
            anchor: p1,
            direction: d * (1.0 / len),
        })
    }

    /// The line through `p` with the given slope.
    #[must_use]
    pub fn with_slope(p: Point, slope: f64) -> Self {
        let d = Point::new(1.0, slope);
        Self {
            anchor: p,
            direction: d * (1.0 / d.norm()),
        }
    }

    /// A vertical line through `p`.
    #[must_use]
    pub fn vertical(p: Point) -> Self {
        Self {
            anchor: p,
            direction: Point::new(0.0, 1.0),
        }
    }

    #[must_use]
    pub fn anchor(&self) -> Point {
        self.anchor
    }

    #[must_use]
    pub fn direction(&self) -> Point {
        self.direction
    }

    /// Slope of the line; infinite for vertical lines.
    #[must_use]
    pub fn slope(&self) -> f64 {
        self.direction.y / self.direction.x
    }

    /// The foot of the perpendicular from `p` onto the line.
    #[must_use]
    pub fn orthogonal_point(&self, p: Point) -> Point {
        let t = (p - self.anchor).dot(self.direction);
        self.anchor + self.direction * t
    }

    /// The chord of the line inside the given box, or `None` if the line
    /// misses it.
    #[must_use]
    pub fn clip_to(&self, bounds: &Bounds) -> Option<(Point, Point)> {
        let mut t_min = f64::NEG_INFINITY;
        let mut t_max = f64::INFINITY;

        for (anchor, dir, low, high) in [
            (self.anchor.x, self.direction.x, bounds.min_x, bounds.max_x),
            (self.anchor.y, self.direction.y, bounds.min_y, bounds.max_y),
        ] {
            if dir == 0.0 {
                if anchor < low || anchor > high {
                    return None;
                }
            } else {
                let t1 = (low - anchor) / dir;
                let t2 = (high - anchor) / dir;
                t_min = t_min.max(t1.min(t2));
                t_max = t_max.min(t1.max(t2));
            }
        }

        if t_min > t_max {
            return None;
        }

        Some((
            self.anchor + self.direction * t_min,
            self.anchor + self.direction * t_max,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::Line;
    use crate::metrics::Bounds;
    use crate::point::Point;

    #[test]
    fn coincident_points_are_rejected() {
        let p = Point::new(1.0, 1.0);
        assert!(Line::through(p, p).is_err());
    }

    #[test]
    fn slope_matches_the_defining_points() {
        let line = Line::through(Point::new(0.0, 0.0), Point::new(2.0, 1.0)).unwrap();
        assert!((line.slope() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn orthogonal_point_projects_perpendicular() {
        let line = Line::with_slope(Point::new(0.0, 0.0), 0.0);
        let foot = line.orthogonal_point(Point::new(3.0, 4.0));

        assert!(foot.dist(Point::new(3.0, 0.0)) < 1e-12);
    }

    #[test]
    fn clipping_a_diagonal_through_a_box() {
        let line = Line::through(Point::new(0.0, 0.0), Point::new(1.0, 1.0)).unwrap();
        let bounds = Bounds {
            min_x: -2.0,
            min_y: -2.0,
            max_x: 2.0,
            max_y: 2.0,
        };

        let (a, b) = line.clip_to(&bounds).unwrap();
        assert!(a.dist(Point::new(-2.0, -2.0)) < 1e-9);
        assert!(b.dist(Point::new(2.0, 2.0)) < 1e-9);
    }

    #[test]
    fn missing_the_box_returns_none() {
        let line = Line::with_slope(Point::new(0.0, 10.0), 0.0);
        let bounds = Bounds {
            min_x: -1.0,
            min_y: -1.0,
            max_x: 1.0,
            max_y: 1.0,
        };

        assert!(line.clip_to(&bounds).is_none());
    }

    #[test]
    fn vertical_line_clips_top_to_bottom() {
        let line = Line::vertical(Point::new(0.5, 0.0));
        let bounds = Bounds {
            min_x: 0.0,
            min_y: -3.0,
            max_x: 1.0,
            max_y: 3.0,
        };

        let (a, b) = line.clip_to(&bounds).unwrap();
        assert!((a.y - (-3.0)).abs() < 1e-9);
        assert!((b.y - 3.0).abs() < 1e-9);
    }
}
