//! Polygonal generators: figures whose dots lie on straight edges.

use super::Shape;
use crate::figure::{union, Outline};
use crate::point::Point;
use crate::util::linspace;
use crate::ParamError;
use num_traits::FloatConst;

/// Join sampled edge chains into one ring, dropping each chain's last dot
/// so shared corners appear only once.
#[must_use]
pub fn connect_edges(chains: &[Vec<Point>]) -> Vec<Point> {
    let mut ring = Vec::new();

    for chain in chains {
        if let Some((_, rest)) = chain.split_last() {
            ring.extend_from_slice(rest);
        }
    }

    ring
}

/// Sample the closed polygon with corners `corners`, placing `dots[i]` dots
/// on the edge leaving corner `i` (endpoints included). Corners are shared
/// between neighboring edges and emitted once.
fn sample_ring(corners: &[Point], dots: &[usize]) -> Vec<Point> {
    let chains: Vec<Vec<Point>> = corners
        .iter()
        .enumerate()
        .map(|(i, &a)| {
            let b = corners[(i + 1) % corners.len()];
            sample_edge(a, b, dots[i])
        })
        .collect();

    connect_edges(&chains)
}

fn sample_edge(a: Point, b: Point, dots: usize) -> Vec<Point> {
    linspace(0.0, 1.0, dots)
        .into_iter()
        .map(|t| a.lerp(b, t))
        .collect()
}

/// A polygon given by its explicit vertices.
#[derive(Debug, Clone)]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    /// # Errors
    /// Needs at least two vertices.
    pub fn new(vertices: Vec<Point>) -> Result<Self, ParamError> {
        if vertices.len() < 2 {
            return Err(ParamError::VertexCount {
                kind: "Polygon",
                min: 2,
            });
        }

        Ok(Self { vertices })
    }
}

impl Shape for Polygon {
    fn kind(&self) -> &str {
        "Polygon"
    }

    fn base_points(&self) -> Vec<Point> {
        self.vertices.clone()
    }

    fn outline(&self) -> Outline {
        Outline::ring(self.vertices.len())
    }

    fn planar(&self) -> bool {
        self.vertices.len() >= 3
    }
}

#[derive(Debug, Clone, Copy)]
enum SegmentForm {
    /// Centered on the origin, described by length and slope angle.
    Sloped { length: f64, slope: f64 },
    /// Between two explicit endpoints.
    Ends { p1: Point, p2: Point },
}

/// A straight line segment sampled with a fixed number of dots.
#[derive(Debug, Clone)]
pub struct Segment {
    dots: usize,
    form: SegmentForm,
}

impl Segment {
    /// A segment of the given `length` through the origin, at angle
    /// `slope` (radians).
    ///
    /// # Errors
    /// Needs at least two dots.
    pub fn new(dots: usize, length: f64, slope: f64) -> Result<Self, ParamError> {
        Self::with_form(dots, SegmentForm::Sloped { length, slope })
    }

    /// The segment from `p1` to `p2`.
    ///
    /// # Errors
    /// Needs at least two dots.
    pub fn between(dots: usize, p1: Point, p2: Point) -> Result<Self, ParamError> {
        Self::with_form(dots, SegmentForm::Ends { p1, p2 })
    }

    fn with_form(dots: usize, form: SegmentForm) -> Result<Self, ParamError> {
        if dots < 2 {
            return Err(ParamError::DotCount {
                kind: "Segment",
                min: 2,
            });
        }

        Ok(Self { dots, form })
    }
}

impl Shape for Segment {
    fn kind(&self) -> &str {
        "Segment"
    }

    fn base_points(&self) -> Vec<Point> {
        let (p1, p2) = match self.form {
            SegmentForm::Sloped { length, slope } => {
                let half = Point::polar(length / 2.0, slope);
                (-half, half)
            }
            SegmentForm::Ends { p1, p2 } => (p1, p2),
        };

        sample_edge(p1, p2, self.dots)
    }

    fn outline(&self) -> Outline {
        Outline::chain(self.dots)
    }

    fn planar(&self) -> bool {
        false
    }
}

/// A polygon with all sides and interior angles equal.
#[derive(Debug, Clone)]
pub struct RegularPolygon {
    side: f64,
    dots: usize,
    vertices: usize,
}

impl RegularPolygon {
    /// `side` is the length of each edge, `dots` the dot count per edge.
    ///
    /// # Errors
    /// Needs at least three vertices and two dots per edge.
    pub fn new(side: f64, dots: usize, vertices: usize) -> Result<Self, ParamError> {
        if vertices < 3 {
            return Err(ParamError::VertexCount {
                kind: "RegularPolygon",
                min: 3,
            });
        }
        if dots < 2 {
            return Err(ParamError::DotCount {
                kind: "RegularPolygon",
                min: 2,
            });
        }

        Ok(Self {
            side,
            dots,
            vertices,
        })
    }
}

impl Shape for RegularPolygon {
    fn kind(&self) -> &str {
        "RegularPolygon"
    }

    fn base_points(&self) -> Vec<Point> {
        let n = (self.dots - 1) as f64;
        let apothem = -self.side / (2.0 * (f64::PI() / self.vertices as f64).tan());
        let mut points = Vec::with_capacity(self.vertices * (self.dots - 1));

        for v in 0..self.vertices {
            let angle = 2.0 * f64::PI() * v as f64 / self.vertices as f64;

            // Walk the edge from its far corner towards the near one,
            // leaving the near corner to the next edge.
            for e in (1..self.dots).rev() {
                let along = -self.side / 2.0 + self.side * e as f64 / n;
                points.push(Point::new(along, apothem).rotated(angle));
            }
        }

        points
    }

    fn outline(&self) -> Outline {
        Outline::ring(self.vertices * (self.dots - 1))
    }
}

/// A quadrilateral with two pairs of parallel sides.
#[derive(Debug, Clone)]
pub struct Parallelogram {
    height: f64,
    width: f64,
    y_dots: usize,
    x_dots: usize,
    angle: f64,
}

impl Parallelogram {
    /// `angle` is the interior angle at the base, in radians.
    ///
    /// # Errors
    /// Every side needs at least two dots.
    pub fn new(
        height: f64,
        width: f64,
        y_dots: usize,
        x_dots: usize,
        angle: f64,
    ) -> Result<Self, ParamError> {
        if y_dots < 2 || x_dots < 2 {
            return Err(ParamError::DotCount {
                kind: "Parallelogram",
                min: 2,
            });
        }

        Ok(Self {
            height,
            width,
            y_dots,
            x_dots,
            angle,
        })
    }
}

impl Shape for Parallelogram {
    fn kind(&self) -> &str {
        "Parallelogram"
    }

    fn base_points(&self) -> Vec<Point> {
        let (h, w) = (self.height, self.width);
        let (sin, cos) = self.angle.sin_cos();
        let corners = [
            Point::new((-w + h * cos) / 2.0, h * sin / 2.0),
            Point::new((w + h * cos) / 2.0, h * sin / 2.0),
            Point::new((w - h * cos) / 2.0, -h * sin / 2.0),
            Point::new((-w - h * cos) / 2.0, -h * sin / 2.0),
        ];

        sample_ring(&corners, &[self.x_dots, self.y_dots, self.x_dots, self.y_dots])
    }

    fn outline(&self) -> Outline {
        Outline::ring(2 * (self.x_dots + self.y_dots - 2))
    }
}

/// A quadrilateral whose four sides all have the same length, described by
/// its diagonals.
#[derive(Debug, Clone)]
pub struct Rhombus {
    height: f64,
    width: f64,
    dots: usize,
}

impl Rhombus {
    /// # Errors
    /// Every side needs at least two dots.
    pub fn new(height: f64, width: f64, dots: usize) -> Result<Self, ParamError> {
        if dots < 2 {
            return Err(ParamError::DotCount {
                kind: "Rhombus",
                min: 2,
            });
        }

        Ok(Self {
            height,
            width,
            dots,
        })
    }
}

impl Shape for Rhombus {
    fn kind(&self) -> &str {
        "Rhombus"
    }

    fn base_points(&self) -> Vec<Point> {
        let corners = [
            Point::new(0.0, self.height / 2.0),
            Point::new(self.width / 2.0, 0.0),
            Point::new(0.0, -self.height / 2.0),
            Point::new(-self.width / 2.0, 0.0),
        ];

        sample_ring(&corners, &[self.dots; 4])
    }

    fn outline(&self) -> Outline {
        Outline::ring(4 * (self.dots - 1))
    }
}

/// A quadrilateral with one pair of parallel sides.
#[derive(Debug, Clone)]
pub struct Trapezoid {
    height: f64,
    width_top: f64,
    width_bottom: f64,
    top_dots: usize,
    bottom_dots: usize,
    side_dots: usize,
    shift: f64,
}

impl Trapezoid {
    /// A trapezoid with the same dot count on every side.
    ///
    /// # Errors
    /// Every side needs at least two dots.
    pub fn new(
        height: f64,
        width_top: f64,
        width_bottom: f64,
        dots: usize,
    ) -> Result<Self, ParamError> {
        Self::with_dots(height, width_top, width_bottom, [dots; 3])
    }

    /// A trapezoid with per-side dot counts `[top, bottom, side]`.
    ///
    /// # Errors
    /// Every side needs at least two dots.
    pub fn with_dots(
        height: f64,
        width_top: f64,
        width_bottom: f64,
        dots: [usize; 3],
    ) -> Result<Self, ParamError> {
        if dots.iter().any(|&d| d < 2) {
            return Err(ParamError::DotCount {
                kind: "Trapezoid",
                min: 2,
            });
        }

        Ok(Self {
            height,
            width_top,
            width_bottom,
            top_dots: dots[0],
            bottom_dots: dots[1],
            side_dots: dots[2],
            shift: 0.0,
        })
    }

    /// A right trapezoid: the top side shifted so the left side stands
    /// perpendicular to the bases.
    ///
    /// # Errors
    /// Every side needs at least two dots.
    pub fn right(
        height: f64,
        width_top: f64,
        width_bottom: f64,
        dots: usize,
    ) -> Result<Self, ParamError> {
        let mut t = Self::new(height, width_top, width_bottom, dots)?;
        t.shift = (width_top - width_bottom) / 2.0;
        Ok(t)
    }

    /// Offset the top side horizontally from its centered position.
    #[must_use]
    pub fn shifted(mut self, shift: f64) -> Self {
        self.shift = shift;
        self
    }
}

impl Shape for Trapezoid {
    fn kind(&self) -> &str {
        "Trapezoid"
    }

    fn base_points(&self) -> Vec<Point> {
        let corners = [
            Point::new(-self.width_top / 2.0 + self.shift, self.height / 2.0),
            Point::new(self.width_top / 2.0 + self.shift, self.height / 2.0),
            Point::new(self.width_bottom / 2.0, -self.height / 2.0),
            Point::new(-self.width_bottom / 2.0, -self.height / 2.0),
        ];

        sample_ring(
            &corners,
            &[self.top_dots, self.side_dots, self.bottom_dots, self.side_dots],
        )
    }

    fn outline(&self) -> Outline {
        Outline::ring(self.top_dots + self.bottom_dots + 2 * self.side_dots - 4)
    }
}

/// A four-sided polygon with four right angles.
#[derive(Debug, Clone)]
pub struct Rectangle {
    height: f64,
    width: f64,
    x_dots: usize,
    y_dots: usize,
}

impl Rectangle {
    /// A rectangle with the same dot count on every side.
    ///
    /// # Errors
    /// Every side needs at least two dots.
    pub fn new(height: f64, width: f64, dots: usize) -> Result<Self, ParamError> {
        Self::with_dots(height, width, dots, dots)
    }

    /// A rectangle with `x_dots` on the horizontal and `y_dots` on the
    /// vertical sides.
    ///
    /// # Errors
    /// Every side needs at least two dots.
    pub fn with_dots(
        height: f64,
        width: f64,
        x_dots: usize,
        y_dots: usize,
    ) -> Result<Self, ParamError> {
        if x_dots < 2 || y_dots < 2 {
            return Err(ParamError::DotCount {
                kind: "Rectangle",
                min: 2,
            });
        }

        Ok(Self {
            height,
            width,
            x_dots,
            y_dots,
        })
    }
}

impl Shape for Rectangle {
    fn kind(&self) -> &str {
        "Rectangle"
    }

    fn base_points(&self) -> Vec<Point> {
        let corners = [
            Point::new(-self.width / 2.0, self.height / 2.0),
            Point::new(self.width / 2.0, self.height / 2.0),
            Point::new(self.width / 2.0, -self.height / 2.0),
            Point::new(-self.width / 2.0, -self.height / 2.0),
        ];

        sample_ring(&corners, &[self.x_dots, self.y_dots, self.x_dots, self.y_dots])
    }

    fn outline(&self) -> Outline {
        Outline::ring(2 * (self.x_dots + self.y_dots - 2))
    }
}

/// A quadrilateral with reflection symmetry across its vertical diagonal.
#[derive(Debug, Clone)]
pub struct Kite {
    a: f64,
    b: f64,
    dots: usize,
}

impl Kite {
    /// `a` and `b` are the lengths of the upper and lower side pairs.
    ///
    /// # Errors
    /// Every side needs at least two dots.
    pub fn new(a: f64, b: f64, dots: usize) -> Result<Self, ParamError> {
        if dots < 2 {
            return Err(ParamError::DotCount {
                kind: "Kite",
                min: 2,
            });
        }

        Ok(Self { a, b, dots })
    }
}

impl Shape for Kite {
    fn kind(&self) -> &str {
        "Kite"
    }

    fn base_points(&self) -> Vec<Point> {
        let hyp = self.a.hypot(self.b);
        let (na, nb) = (self.a / hyp, self.b / hyp);
        let corners = [
            Point::new(0.0, self.a * na),
            Point::new(self.a * nb, 0.0),
            Point::new(0.0, -self.b * nb),
            Point::new(-self.a * nb, 0.0),
        ];

        sample_ring(&corners, &[self.dots; 4])
    }

    fn outline(&self) -> Outline {
        Outline::ring(4 * (self.dots - 1))
    }
}

/// Dots of the zig-zag border of a star with `vertices` spikes. Used by
/// both star generators; `trim_inner` leaves out the dot nearest each
/// inner corner, which [`Star`] fills with its inner polygon instead.
fn star_border(size: f64, dots: usize, vertices: usize, trim_inner: bool) -> Vec<Point> {
    let n = (dots - 1) as f64;
    let ang = f64::PI() / vertices as f64;
    let outer = size * ang.tan();
    let step = 2.0 * f64::PI() / vertices as f64;

    let inner_end = if trim_inner { dots - 1 } else { dots };
    let mut points = Vec::new();

    for v in 0..vertices {
        let spin = step * v as f64;

        for e in (0..dots - 1).rev() {
            let t = e as f64 / n;
            let p = Point::new(size - outer * step.sin() * t, -outer * step.cos() * t);
            points.push(p.rotated(spin));
        }
        for e in 1..inner_end {
            let t = e as f64 / n;
            let p = Point::new(size - outer * step.sin() * t, outer * step.cos() * t);
            points.push(p.rotated(spin));
        }
    }

    points
}

/// A star polygon without intersecting edges: just the spiky border.
#[derive(Debug, Clone)]
pub struct ConcaveStar {
    size: f64,
    dots: usize,
    vertices: usize,
}

impl ConcaveStar {
    /// `size` is the distance from the centroid to a spike tip.
    ///
    /// # Errors
    /// Needs at least three vertices and two dots per edge.
    pub fn new(size: f64, dots: usize, vertices: usize) -> Result<Self, ParamError> {
        star_params("ConcaveStar", dots, vertices)?;
        Ok(Self {
            size,
            dots,
            vertices,
        })
    }
}

impl Shape for ConcaveStar {
    fn kind(&self) -> &str {
        "ConcaveStar"
    }

    fn base_points(&self) -> Vec<Point> {
        star_border(self.size, self.dots, self.vertices, false)
    }

    fn outline(&self) -> Outline {
        Outline::ring(self.vertices * (2 * self.dots - 2))
    }
}

/// A star with its border backed by an inner polygon ring.
#[derive(Debug, Clone)]
pub struct Star {
    size: f64,
    dots: usize,
    vertices: usize,
}

impl Star {
    /// `size` is the distance from the centroid to a spike tip.
    ///
    /// # Errors
    /// Needs at least three vertices and two dots per edge.
    pub fn new(size: f64, dots: usize, vertices: usize) -> Result<Self, ParamError> {
        star_params("Star", dots, vertices)?;
        Ok(Self {
            size,
            dots,
            vertices,
        })
    }

    fn border_len(&self) -> usize {
        self.vertices * (2 * self.dots - 3)
    }
}

impl Shape for Star {
    fn kind(&self) -> &str {
        "Star"
    }

    fn base_points(&self) -> Vec<Point> {
        let ang = f64::PI() / self.vertices as f64;
        let inner = self.size / (ang.cos() + ang.sin() * (2.0 * ang).tan());

        let mut points = star_border(self.size, self.dots, self.vertices, true);

        let polygon = RegularPolygon::new(inner, self.dots, self.vertices)
            .expect("parameters already validated");
        let mut ring = polygon.base_points();
        crate::transform::rotate(&mut ring, ang);
        points.extend(ring);

        points
    }

    fn outline(&self) -> Outline {
        Outline::Closed {
            outers: vec![(0..self.border_len()).collect()],
            inners: Vec::new(),
        }
    }
}

fn star_params(kind: &'static str, dots: usize, vertices: usize) -> Result<(), ParamError> {
    if vertices < 3 {
        return Err(ParamError::VertexCount { kind, min: 3 });
    }
    if dots < 2 {
        return Err(ParamError::DotCount { kind, min: 2 });
    }
    Ok(())
}

/// A central polygon surrounded by rotated copies of itself, one per edge.
#[derive(Debug, Clone)]
pub struct PolygonTile {
    size: f64,
    dots: usize,
    vertices: usize,
}

impl PolygonTile {
    /// `size` is the overall tile radius.
    ///
    /// # Errors
    /// Needs at least three vertices and two dots per edge.
    pub fn new(size: f64, dots: usize, vertices: usize) -> Result<Self, ParamError> {
        star_params("PolygonTile", dots, vertices)?;
        Ok(Self {
            size,
            dots,
            vertices,
        })
    }
}

impl Shape for PolygonTile {
    fn kind(&self) -> &str {
        "PolygonTile"
    }

    fn base_points(&self) -> Vec<Point> {
        let ang = f64::PI() / self.vertices as f64;
        let side = 2.0 * ang.tan() * self.size / (2.0 + 1.0 / ang.cos());

        let center = RegularPolygon::new(side, self.dots, self.vertices)
            .expect("parameters already validated")
            .build();
        let mut tile = center.clone();

        for i in 0..self.vertices {
            let spin = 2.0 * ang * i as f64;
            let offset = Point::new(0.0, side / ang.tan()).rotated(spin);

            let mut copy = center.clone();
            copy.rotate(spin + f64::PI()).translate(offset.x, offset.y);
            tile = union(&tile, &copy);
        }

        tile.points().to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::Bounds;

    #[test]
    fn regular_polygon_dot_count_is_closed_form() {
        let fig = RegularPolygon::new(2.0, 8, 5).unwrap().build();
        assert_eq!(fig.len(), 5 * 7);
    }

    #[test]
    fn regular_polygon_rejects_degenerate_parameters() {
        assert!(RegularPolygon::new(2.0, 8, 2).is_err());
        assert!(RegularPolygon::new(2.0, 1, 5).is_err());
    }

    #[test]
    fn regular_polygon_dots_are_equidistant_from_center() {
        // A square's corner dots sit on a common circle; check the corners.
        let fig = RegularPolygon::new(2.0, 2, 4).unwrap().build();
        let radius = 2.0_f64.sqrt();

        for p in fig.points() {
            assert!((p.norm() - radius).abs() < 1e-9);
        }
    }

    #[test]
    fn segment_between_hits_both_endpoints() {
        let fig = Segment::between(5, Point::new(0.0, 0.0), Point::new(4.0, 8.0))
            .unwrap()
            .build();

        assert_eq!(fig.len(), 5);
        assert!(fig.points()[0].dist(Point::new(0.0, 0.0)) < 1e-12);
        assert!(fig.points()[4].dist(Point::new(4.0, 8.0)) < 1e-12);
    }

    #[test]
    fn sloped_segment_is_centered() {
        let fig = Segment::new(3, 10.0, 0.0).unwrap().build();

        assert!(fig.points()[0].dist(Point::new(-5.0, 0.0)) < 1e-12);
        assert!(fig.points()[1].norm() < 1e-12);
        assert!(fig.points()[2].dist(Point::new(5.0, 0.0)) < 1e-12);
    }

    #[test]
    fn rectangle_counts_and_bounds() {
        let fig = Rectangle::with_dots(2.0, 6.0, 7, 3).unwrap().build();

        assert_eq!(fig.len(), 2 * (7 + 3 - 2));

        let bounds = Bounds::of(fig.points()).unwrap();
        assert!((bounds.width() - 6.0).abs() < 1e-12);
        assert!((bounds.height() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn rectangle_area_is_width_times_height() {
        let fig = Rectangle::new(2.0, 6.0, 4).unwrap().build();
        assert!((fig.area().unwrap() - 12.0).abs() < 1e-9);
    }

    #[test]
    fn trapezoid_dot_count_mixes_side_counts() {
        let fig = Trapezoid::with_dots(2.0, 2.0, 4.0, [2, 4, 5]).unwrap().build();
        assert_eq!(fig.len(), 2 + 4 + 2 * 5 - 4);
    }

    #[test]
    fn right_trapezoid_has_a_vertical_left_side() {
        let fig = Trapezoid::right(2.0, 6.0, 4.0, 2).unwrap().build();
        let bounds = Bounds::of(fig.points()).unwrap();

        // Top and bottom now share their left x-coordinate.
        assert!((bounds.min_x - (-2.0)).abs() < 1e-12);
    }

    #[test]
    fn rhombus_and_kite_counts() {
        assert_eq!(Rhombus::new(4.0, 2.0, 5).unwrap().build().len(), 16);
        assert_eq!(Kite::new(3.0, 4.0, 5).unwrap().build().len(), 16);
    }

    #[test]
    fn parallelogram_with_right_angle_matches_rectangle_bounds() {
        use num_traits::FloatConst;

        let fig = Parallelogram::new(2.0, 4.0, 3, 3, f64::FRAC_PI_2()).unwrap().build();
        let bounds = Bounds::of(fig.points()).unwrap();

        assert!((bounds.width() - 4.0).abs() < 1e-9);
        assert!((bounds.height() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn concave_star_count_is_closed_form() {
        let fig = ConcaveStar::new(5.0, 4, 5).unwrap().build();
        assert_eq!(fig.len(), 5 * (2 * 4 - 2));
    }

    #[test]
    fn star_adds_an_inner_polygon_ring() {
        let fig = Star::new(5.0, 4, 5).unwrap().build();
        assert_eq!(fig.len(), 5 * (3 * 4 - 4));
    }

    #[test]
    fn star_tips_sit_at_size_radius() {
        let fig = ConcaveStar::new(5.0, 3, 6).unwrap().build();
        let max = fig.points().iter().map(|p| p.norm()).fold(0.0, f64::max);

        assert!((max - 5.0).abs() < 1e-9);
    }

    #[test]
    fn polygon_tile_merges_center_and_satellites() {
        let fig = PolygonTile::new(6.0, 3, 4).unwrap().build();

        // Center plus four satellites, minus dots deduplicated on shared
        // edges; just check it grew well beyond a single polygon.
        let single = RegularPolygon::new(6.0, 3, 4).unwrap().build().len();
        assert!(fig.len() > 3 * single);
    }

    #[test]
    fn connect_edges_drops_shared_corners() {
        let top = vec![Point::new(0.0, 1.0), Point::new(1.0, 1.0)];
        let right = vec![Point::new(1.0, 1.0), Point::new(1.0, 0.0)];

        let ring = connect_edges(&[top, right]);
        assert_eq!(ring, vec![Point::new(0.0, 1.0), Point::new(1.0, 1.0)]);
    }
}
