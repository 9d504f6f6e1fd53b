//! Derived measurements of a coordinate set.

use crate::point::Point;

/// Axis-aligned bounding box of a point set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    /// The smallest box enclosing all given points. `None` for an empty set.
    #[must_use]
    pub fn of(points: &[Point]) -> Option<Self> {
        let first = points.first()?;
        let mut bounds = Self {
            min_x: first.x,
            min_y: first.y,
            max_x: first.x,
            max_y: first.y,
        };

        for p in &points[1..] {
            bounds.min_x = bounds.min_x.min(p.x);
            bounds.min_y = bounds.min_y.min(p.y);
            bounds.max_x = bounds.max_x.max(p.x);
            bounds.max_y = bounds.max_y.max(p.y);
        }

        Some(bounds)
    }

    /// Grow the box just enough to also contain `p`.
    pub fn include(&mut self, p: Point) {
        self.min_x = self.min_x.min(p.x);
        self.min_y = self.min_y.min(p.y);
        self.max_x = self.max_x.max(p.x);
        self.max_y = self.max_y.max(p.y);
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Half the diagonal, the radius of the enclosing figure.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.width().hypot(self.height()) / 2.0
    }

    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }
}

/// Arithmetic mean of the point set. `None` for an empty set.
#[must_use]
pub fn centroid(points: &[Point]) -> Option<Point> {
    if points.is_empty() {
        return None;
    }

    let sum = points
        .iter()
        .fold(Point::default(), |acc, p| acc + *p);

    Some(sum * (1.0 / points.len() as f64))
}

/// Area of the simple polygon traced by `ring`, by the shoelace formula.
/// The ring is treated as closed.
#[must_use]
pub fn ring_area(ring: &[Point]) -> f64 {
    if ring.len() < 3 {
        return 0.0;
    }

    let mut twice = 0.0;
    for i in 0..ring.len() {
        let p = ring[i];
        let q = ring[(i + 1) % ring.len()];
        twice += p.x * q.y - q.x * p.y;
    }

    twice.abs() / 2.0
}

#[cfg(test)]
mod tests {
    use super::{centroid, ring_area, Bounds};
    use crate::point::Point;

    fn unit_square() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ]
    }

    #[test]
    fn bounds_of_empty_set_is_none() {
        assert!(Bounds::of(&[]).is_none());
    }

    #[test]
    fn bounds_enclose_the_set() {
        let bounds = Bounds::of(&unit_square()).unwrap();

        assert_eq!(bounds.min_x, 0.0);
        assert_eq!(bounds.max_y, 1.0);
        assert_eq!(bounds.width(), 1.0);
        assert_eq!(bounds.center(), Point::new(0.5, 0.5));
    }

    #[test]
    fn centroid_of_square_is_its_middle() {
        let c = centroid(&unit_square()).unwrap();
        assert!(c.dist(Point::new(0.5, 0.5)) < 1e-12);
    }

    #[test]
    fn shoelace_area_of_unit_square() {
        assert!((ring_area(&unit_square()) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn shoelace_ignores_orientation() {
        let mut reversed = unit_square();
        reversed.reverse();
        assert!((ring_area(&reversed) - 1.0).abs() < 1e-12);
    }
}
