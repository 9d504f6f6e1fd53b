//! [`Figure`] is the value every shape generator produces: a coordinate set
//! with an outline description and the whole transformation vocabulary.

use crate::hull::concave_hull;
use crate::metrics::{centroid, ring_area, Bounds};
use crate::point::Point;
use crate::transform::{self, Lens};
use crate::ParamError;

/// Default alpha used when an outline has to be recovered from the dots.
const OUTLINE_ALPHA: f64 = 0.9;

/// How the dots of a figure connect into an outline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Outline {
    /// No intrinsic outline. Derived from the dot set on demand.
    #[default]
    Auto,
    /// Open chains through the listed dot indices, such as a spiral arm.
    Open(Vec<Vec<usize>>),
    /// Closed rings: outer boundaries and interior holes. The closing
    /// segment from the last index back to the first is implied.
    Closed {
        outers: Vec<Vec<usize>>,
        inners: Vec<Vec<usize>>,
    },
}

impl Outline {
    /// A single closed ring over the first `n` dots.
    #[must_use]
    pub fn ring(n: usize) -> Self {
        Self::Closed {
            outers: vec![(0..n).collect()],
            inners: Vec::new(),
        }
    }

    /// A single open chain over the first `n` dots.
    #[must_use]
    pub fn chain(n: usize) -> Self {
        Self::Open(vec![(0..n).collect()])
    }
}

/// A geometric figure: an ordered set of dots plus outline information.
///
/// Transformations mutate the figure in place and can be chained. Cloning
/// yields a fully independent copy.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    kind: String,
    points: Vec<Point>,
    outline: Outline,
    planar: bool,
}

impl Figure {
    #[must_use]
    pub fn new(kind: impl Into<String>, points: Vec<Point>, outline: Outline, planar: bool) -> Self {
        Self {
            kind: kind.into(),
            points,
            outline,
            planar,
        }
    }

    /// The shape-family name this figure was generated from.
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[must_use]
    pub fn outline(&self) -> &Outline {
        &self.outline
    }

    /// Whether the figure encloses an area, making fill and area display
    /// meaningful.
    #[must_use]
    pub fn planar(&self) -> bool {
        self.planar
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The coordinate set as plain tuples, for handing to external
    /// computational-geometry code.
    #[must_use]
    pub fn coord_set(&self) -> Vec<(f64, f64)> {
        self.points.iter().map(|p| (p.x, p.y)).collect()
    }

    /// X coordinates of all dots.
    #[must_use]
    pub fn xs(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.x).collect()
    }

    /// Y coordinates of all dots.
    #[must_use]
    pub fn ys(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.y).collect()
    }

    /// Bounding box of the dot set. `None` when the figure is empty.
    #[must_use]
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::of(&self.points)
    }

    /// Centroid of the dot set.
    #[must_use]
    pub fn center(&self) -> Option<Point> {
        centroid(&self.points)
    }

    /// Width and height of the bounding box.
    #[must_use]
    pub fn dim(&self) -> Option<(f64, f64)> {
        self.bounds().map(|b| (b.width(), b.height()))
    }

    /// Radius of the figure: half the bounding-box diagonal.
    #[must_use]
    pub fn rad(&self) -> Option<f64> {
        self.bounds().map(|b| b.radius())
    }

    /// The outline resolved to concrete rings: outer rings and holes, each
    /// a list of dots in drawing order. Open chains have no rings and come
    /// back as `None`; ring-less figures get a concave-hull ring.
    #[must_use]
    pub fn outline_rings(&self) -> Option<(Vec<Vec<Point>>, Vec<Vec<Point>>)> {
        match &self.outline {
            Outline::Closed { outers, inners } => Some((
                outers.iter().map(|r| self.gather(r)).collect(),
                inners.iter().map(|r| self.gather(r)).collect(),
            )),
            Outline::Auto => {
                let ring = concave_hull(&self.points, OUTLINE_ALPHA);
                if ring.len() < 3 {
                    None
                } else {
                    Some((vec![self.gather(&ring)], Vec::new()))
                }
            }
            Outline::Open(_) => None,
        }
    }

    /// The open chains of the outline, if any.
    #[must_use]
    pub fn outline_chains(&self) -> Option<Vec<Vec<Point>>> {
        match &self.outline {
            Outline::Open(chains) => Some(chains.iter().map(|c| self.gather(c)).collect()),
            _ => None,
        }
    }

    fn gather(&self, indices: &[usize]) -> Vec<Point> {
        indices.iter().map(|&i| self.points[i]).collect()
    }

    /// Enclosed area of the figure. `None` for non-planar figures and
    /// figures whose outline cannot be recovered.
    #[must_use]
    pub fn area(&self) -> Option<f64> {
        if !self.planar {
            return None;
        }

        let (outers, inners) = self.outline_rings()?;
        let outer: f64 = outers.iter().map(|r| ring_area(r)).sum();
        let inner: f64 = inners.iter().map(|r| ring_area(r)).sum();

        Some(outer - inner)
    }

    /// Merge another figure's dots into this one. The outline degrades to
    /// [`Outline::Auto`] since the combined boundary is no longer known;
    /// coincident dots are dropped.
    pub fn merge(&mut self, other: &Figure) {
        self.points.extend_from_slice(&other.points);
        transform::dedup_points(&mut self.points);
        self.outline = Outline::Auto;
        self.planar = self.planar || other.planar;
    }

    // Transformations. Each one mutates in place and returns `&mut Self`
    // so pipelines read naturally.

    pub fn translate(&mut self, dx: f64, dy: f64) -> &mut Self {
        transform::translate(&mut self.points, dx, dy);
        self
    }

    pub fn translate_x(&mut self, dx: f64) -> &mut Self {
        transform::translate_x(&mut self.points, dx);
        self
    }

    pub fn translate_y(&mut self, dy: f64) -> &mut Self {
        transform::translate_y(&mut self.points, dy);
        self
    }

    pub fn scale(&mut self, factor: f64) -> &mut Self {
        transform::scale(&mut self.points, factor);
        self
    }

    pub fn scale_xy(&mut self, sx: f64, sy: f64) -> &mut Self {
        transform::scale_xy(&mut self.points, sx, sy);
        self
    }

    pub fn scale_x(&mut self, sx: f64) -> &mut Self {
        transform::scale_x(&mut self.points, sx);
        self
    }

    pub fn scale_y(&mut self, sy: f64) -> &mut Self {
        transform::scale_y(&mut self.points, sy);
        self
    }

    pub fn rotate(&mut self, angle: f64) -> &mut Self {
        transform::rotate(&mut self.points, angle);
        self
    }

    pub fn rotate_x(&mut self, angle: f64) -> &mut Self {
        transform::rotate_x(&mut self.points, angle);
        self
    }

    pub fn rotate_y(&mut self, angle: f64) -> &mut Self {
        transform::rotate_y(&mut self.points, angle);
        self
    }

    pub fn rotate_3d(&mut self, yaw: f64, pitch: f64, roll: f64) -> &mut Self {
        transform::rotate_3d(&mut self.points, yaw, pitch, roll);
        self
    }

    pub fn skew(&mut self, ax: f64, ay: f64) -> &mut Self {
        transform::skew(&mut self.points, ax, ay);
        self
    }

    pub fn skew_x(&mut self, angle: f64) -> &mut Self {
        transform::skew_x(&mut self.points, angle);
        self
    }

    pub fn skew_y(&mut self, angle: f64) -> &mut Self {
        transform::skew_y(&mut self.points, angle);
        self
    }

    pub fn flip(&mut self, pivot: Point) -> &mut Self {
        transform::flip(&mut self.points, pivot);
        self
    }

    pub fn flip_x(&mut self) -> &mut Self {
        transform::flip_x(&mut self.points);
        self
    }

    pub fn flip_y(&mut self) -> &mut Self {
        transform::flip_y(&mut self.points);
        self
    }

    pub fn flip_origin(&mut self) -> &mut Self {
        transform::flip_origin(&mut self.points);
        self
    }

    pub fn flip_diagonal(&mut self) -> &mut Self {
        transform::flip_diagonal(&mut self.points);
        self
    }

    /// Multiply the coordinate set by a 2x2 matrix.
    pub fn apply(&mut self, m: [[f64; 2]; 2]) -> &mut Self {
        transform::apply(&mut self.points, m);
        self
    }

    fn reflected(&mut self, points: Vec<Point>) -> &mut Self {
        self.points = points;
        self.outline = Outline::Auto;
        self
    }

    /// Mirror through `pivot` and merge with the original dots.
    pub fn reflect(&mut self, pivot: Point) -> &mut Self {
        let merged = transform::reflect(&self.points, pivot);
        self.reflected(merged)
    }

    /// Mirror about the x-axis and merge with the original dots.
    pub fn reflect_x(&mut self) -> &mut Self {
        let merged = transform::reflect_x(&self.points);
        self.reflected(merged)
    }

    /// Mirror about the y-axis and merge with the original dots.
    pub fn reflect_y(&mut self) -> &mut Self {
        let merged = transform::reflect_y(&self.points);
        self.reflected(merged)
    }

    /// Mirror through the origin and merge with the original dots.
    pub fn reflect_origin(&mut self) -> &mut Self {
        let merged = transform::reflect_origin(&self.points);
        self.reflected(merged)
    }

    /// Mirror about `y = x` and merge with the original dots.
    pub fn reflect_diagonal(&mut self) -> &mut Self {
        let merged = transform::reflect_diagonal(&self.points);
        self.reflected(merged)
    }

    /// Radial lens distortion around the centroid.
    ///
    /// # Errors
    /// Pincushion distortion requires `rate < 1`.
    pub fn distort(&mut self, lens: Lens, rate: f64) -> Result<&mut Self, ParamError> {
        transform::distort(&mut self.points, lens, rate)?;
        Ok(self)
    }

    /// Pull the dots towards `pivot`.
    pub fn focus(&mut self, pivot: Point, rate: f64) -> &mut Self {
        transform::focus(&mut self.points, pivot, rate);
        self
    }

    /// Repel the dots away from `pivot`.
    pub fn shatter(&mut self, pivot: Point, rate: f64) -> &mut Self {
        transform::shatter(&mut self.points, pivot, rate);
        self
    }
}

/// Dots of both figures combined into one figure, duplicates removed.
#[must_use]
pub fn union(a: &Figure, b: &Figure) -> Figure {
    let mut merged = a.clone();
    merged.merge(b);
    merged
}

/// Dots of `a` that lie farther than `tol` from every dot of `b`.
#[must_use]
pub fn subtract(a: &Figure, b: &Figure, tol: f64) -> Figure {
    let points = a
        .points()
        .iter()
        .copied()
        .filter(|p| b.points().iter().all(|q| p.dist(*q) > tol))
        .collect();

    Figure::new(a.kind(), points, Outline::Auto, a.planar())
}

#[cfg(test)]
mod tests {
    use super::{subtract, union, Figure, Outline};
    use crate::point::Point;

    fn square_figure() -> Figure {
        Figure::new(
            "Square",
            vec![
                Point::new(0.0, 0.0),
                Point::new(2.0, 0.0),
                Point::new(2.0, 2.0),
                Point::new(0.0, 2.0),
            ],
            Outline::ring(4),
            true,
        )
    }

    #[test]
    fn clone_then_mutate_leaves_original_untouched() {
        let original = square_figure();
        let mut copy = original.clone();
        copy.rotate(1.0).translate(5.0, 5.0);

        assert_eq!(original.points()[0], Point::new(0.0, 0.0));
        assert_ne!(copy.points()[0], original.points()[0]);
    }

    #[test]
    fn coord_set_produces_tuples() {
        let fig = square_figure();
        let coords = fig.coord_set();

        assert_eq!(coords.len(), 4);
        assert_eq!(coords[2], (2.0, 2.0));
    }

    #[test]
    fn area_of_square_is_exact() {
        let fig = square_figure();
        assert!((fig.area().unwrap() - 4.0).abs() < 1e-12);
    }

    #[test]
    fn area_of_open_figure_is_none() {
        let fig = Figure::new(
            "Chain",
            vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)],
            Outline::chain(2),
            false,
        );

        assert!(fig.area().is_none());
    }

    #[test]
    fn chained_transforms_apply_in_order() {
        let mut fig = square_figure();
        fig.translate(-1.0, -1.0).scale(2.0);

        assert_eq!(fig.points()[0], Point::new(-2.0, -2.0));
        assert_eq!(fig.points()[2], Point::new(2.0, 2.0));
    }

    #[test]
    fn reflect_degrades_outline_to_auto() {
        let mut fig = square_figure();
        fig.translate(1.0, 0.0);
        fig.reflect_y();

        assert_eq!(*fig.outline(), Outline::Auto);
        assert_eq!(fig.len(), 8);
    }

    #[test]
    fn union_dedups_shared_corners() {
        let a = square_figure();
        let mut shifted = square_figure();
        shifted.translate(2.0, 0.0);

        let merged = union(&a, &shifted);
        // The two squares share the corners (2, 0) and (2, 2).
        assert_eq!(merged.len(), 6);
    }

    #[test]
    fn subtract_drops_dots_near_the_other_figure() {
        let a = square_figure();
        let mut shifted = square_figure();
        shifted.translate(2.0, 0.0);

        let pruned = subtract(&a, &shifted, 0.1);
        // The right edge of `a` coincides with `shifted`'s left edge.
        assert_eq!(pruned.len(), 2);
        assert!(pruned.points().iter().all(|p| p.x < 1.0));
    }

    #[test]
    fn dim_and_rad_follow_the_bounding_box() {
        let fig = square_figure();
        let (w, h) = fig.dim().unwrap();

        assert_eq!((w, h), (2.0, 2.0));
        assert!((fig.rad().unwrap() - 2.0_f64.sqrt()).abs() < 1e-12);
    }
}
