//! Parametric curves: spirals, cycloids and oscillating traces.

use super::Shape;
use crate::figure::Outline;
use crate::point::Point;
use crate::util::{full_turn, linspace};
use crate::ParamError;
use num_traits::FloatConst;

/// The radius law of a [`Spiral`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpiralKind {
    /// Radius grows linearly with the angle.
    Archimedean,
    /// Pitch angle increases with distance from the center.
    Hyperbolic,
    /// Fermat's spiral: both branches of `r^2 = a^2 * theta`.
    Fermat,
    /// Angle inversely proportional to the squared radius.
    Lituus,
    /// Equiangular growth spiral.
    Logarithmic,
}

/// A curve winding around the origin at a continuously changing radius.
#[derive(Debug, Clone)]
pub struct Spiral {
    radius: f64,
    dots: usize,
    angle: f64,
    kind: SpiralKind,
}

impl Spiral {
    /// A spiral reaching `radius` after sweeping `angle` radians.
    ///
    /// # Errors
    /// Needs at least two dots and a positive sweep angle.
    pub fn new(radius: f64, dots: usize, angle: f64, kind: SpiralKind) -> Result<Self, ParamError> {
        if dots < 2 {
            return Err(ParamError::DotCount {
                kind: "Spiral",
                min: 2,
            });
        }
        if angle <= 0.0 {
            return Err(ParamError::Range {
                kind: "Spiral",
                param: "angle",
                expected: "a positive sweep",
            });
        }

        Ok(Self {
            radius,
            dots,
            angle,
            kind,
        })
    }

    /// # Errors
    /// See [`Spiral::new`].
    pub fn archimedean(radius: f64, dots: usize, angle: f64) -> Result<Self, ParamError> {
        Self::new(radius, dots, angle, SpiralKind::Archimedean)
    }

    /// # Errors
    /// See [`Spiral::new`].
    pub fn hyperbolic(radius: f64, dots: usize, angle: f64) -> Result<Self, ParamError> {
        Self::new(radius, dots, angle, SpiralKind::Hyperbolic)
    }

    /// # Errors
    /// See [`Spiral::new`].
    pub fn fermat(radius: f64, dots: usize, angle: f64) -> Result<Self, ParamError> {
        Self::new(radius, dots, angle, SpiralKind::Fermat)
    }

    /// # Errors
    /// See [`Spiral::new`].
    pub fn lituus(radius: f64, dots: usize, angle: f64) -> Result<Self, ParamError> {
        Self::new(radius, dots, angle, SpiralKind::Lituus)
    }

    /// # Errors
    /// See [`Spiral::new`].
    pub fn logarithmic(radius: f64, dots: usize, angle: f64) -> Result<Self, ParamError> {
        Self::new(radius, dots, angle, SpiralKind::Logarithmic)
    }

    /// Sweep angles, skipping zero so the inverse laws stay finite.
    fn angles(&self) -> Vec<f64> {
        let mut theta = linspace(0.0, self.angle, self.dots + 1);
        theta.remove(0);
        theta
    }
}

impl Shape for Spiral {
    fn kind(&self) -> &str {
        match self.kind {
            SpiralKind::Archimedean => "Spiral",
            SpiralKind::Hyperbolic => "HyperbolicSpiral",
            SpiralKind::Fermat => "FermatSpiral",
            SpiralKind::Lituus => "LituusSpiral",
            SpiralKind::Logarithmic => "LogarithmicSpiral",
        }
    }

    fn base_points(&self) -> Vec<Point> {
        let theta = self.angles();

        match self.kind {
            SpiralKind::Archimedean => theta
                .iter()
                .map(|&t| Point::polar(self.radius * t / self.angle, t))
                .collect(),
            SpiralKind::Hyperbolic => {
                let t0 = theta[0];
                theta
                    .iter()
                    .map(|&t| Point::polar(self.radius * t0 / t, t))
                    .collect()
            }
            SpiralKind::Fermat => {
                let root: Vec<f64> = theta.iter().map(|&t| t.sqrt()).collect();
                let last = root[root.len() - 1];

                // One branch spirals out, the mirrored branch comes back
                // through the center, forming a single S-shaped trace.
                let positive: Vec<Point> = if root.len() % 2 == 0 {
                    theta
                        .iter()
                        .zip(&root)
                        .step_by(2)
                        .map(|(&t, &r)| Point::polar(self.radius * r / last, t))
                        .collect()
                } else {
                    theta
                        .iter()
                        .zip(&root)
                        .skip(1)
                        .step_by(2)
                        .map(|(&t, &r)| Point::polar(self.radius * r / last, t))
                        .collect()
                };
                let negative = theta
                    .iter()
                    .zip(&root)
                    .step_by(2)
                    .map(|(&t, &r)| Point::polar(-self.radius * r / last, t));

                positive.into_iter().rev().chain(negative).collect()
            }
            SpiralKind::Lituus => {
                let inv0 = theta[0].powf(-0.5);
                theta
                    .iter()
                    .map(|&t| Point::polar(self.radius * inv0 / t.powf(-0.5), t))
                    .collect()
            }
            SpiralKind::Logarithmic => {
                let scale = self.angle.exp();
                theta
                    .iter()
                    .map(|&t| Point::polar(self.radius * t.exp() / scale, t))
                    .collect()
            }
        }
    }

    fn outline(&self) -> Outline {
        let n = match self.kind {
            // The Fermat construction halves each branch.
            SpiralKind::Fermat => self.dots / 2 + (self.dots + 1) / 2,
            _ => self.dots,
        };
        Outline::chain(n)
    }

    fn planar(&self) -> bool {
        false
    }
}

/// The curve traced by a point on a circle rolling along a line.
#[derive(Debug, Clone)]
pub struct Cycloid {
    radius: f64,
    dots: usize,
    angle: f64,
}

impl Cycloid {
    /// # Errors
    /// Needs at least two dots and a positive roll angle.
    pub fn new(radius: f64, dots: usize, angle: f64) -> Result<Self, ParamError> {
        if dots < 2 {
            return Err(ParamError::DotCount {
                kind: "Cycloid",
                min: 2,
            });
        }
        if angle <= 0.0 {
            return Err(ParamError::Range {
                kind: "Cycloid",
                param: "angle",
                expected: "a positive roll",
            });
        }

        Ok(Self {
            radius,
            dots,
            angle,
        })
    }
}

impl Shape for Cycloid {
    fn kind(&self) -> &str {
        "Cycloid"
    }

    fn base_points(&self) -> Vec<Point> {
        linspace(0.0, self.angle, self.dots)
            .into_iter()
            .map(|t| {
                Point::new(
                    self.radius * (t - t.sin()) / self.angle - self.radius / 2.0,
                    self.radius * (1.0 - t.cos()) / self.angle,
                )
            })
            .collect()
    }

    fn outline(&self) -> Outline {
        Outline::chain(self.dots)
    }

    fn planar(&self) -> bool {
        false
    }
}

fn cusp_params(kind: &'static str, p: u32, q: u32, dots: usize) -> Result<(), ParamError> {
    if p == 0 || q == 0 {
        return Err(ParamError::Range {
            kind,
            param: "p/q",
            expected: "a positive cusp ratio",
        });
    }
    if dots < 3 {
        return Err(ParamError::DotCount { kind, min: 3 });
    }
    Ok(())
}

/// The path of a point on a circle rolling around the outside of a fixed
/// circle. `p / q` is the cusp ratio.
#[derive(Debug, Clone)]
pub struct Epicycloid {
    p: u32,
    q: u32,
    radius: f64,
    dots: usize,
}

impl Epicycloid {
    /// # Errors
    /// Cusp numbers must be positive; needs at least three dots.
    pub fn new(p: u32, q: u32, radius: f64, dots: usize) -> Result<Self, ParamError> {
        cusp_params("Epicycloid", p, q, dots)?;
        Ok(Self { p, q, radius, dots })
    }
}

impl Shape for Epicycloid {
    fn kind(&self) -> &str {
        "Epicycloid"
    }

    fn base_points(&self) -> Vec<Point> {
        let k = f64::from(self.p) / f64::from(self.q);
        let turns = f64::from(self.q) * f64::TAU();

        let mut theta = linspace(0.0, turns, self.dots + 1);
        theta.pop();

        theta
            .into_iter()
            .map(|t| {
                Point::new(
                    self.radius * ((k + 1.0) * t.cos() - ((k + 1.0) * t).cos()),
                    self.radius * ((k + 1.0) * t.sin() - ((k + 1.0) * t).sin()),
                )
            })
            .collect()
    }

    fn outline(&self) -> Outline {
        Outline::ring(self.dots)
    }
}

/// The path of a point on a circle rolling inside a fixed circle.
#[derive(Debug, Clone)]
pub struct Hypocycloid {
    p: u32,
    q: u32,
    radius: f64,
    dots: usize,
}

impl Hypocycloid {
    /// # Errors
    /// Cusp numbers must be positive; needs at least three dots.
    pub fn new(p: u32, q: u32, radius: f64, dots: usize) -> Result<Self, ParamError> {
        cusp_params("Hypocycloid", p, q, dots)?;
        Ok(Self { p, q, radius, dots })
    }

    /// A polygon with inward-curved sides: the hypocycloid with `vertices`
    /// cusps.
    ///
    /// # Errors
    /// Needs at least three vertices and three dots.
    pub fn curved_polygon(size: f64, dots: usize, vertices: u32) -> Result<Self, ParamError> {
        if vertices < 3 {
            return Err(ParamError::VertexCount {
                kind: "CurvedPolygon",
                min: 3,
            });
        }

        Self::new(vertices, 1, size, dots)
    }
}

impl Shape for Hypocycloid {
    fn kind(&self) -> &str {
        "Hypocycloid"
    }

    fn base_points(&self) -> Vec<Point> {
        let k = f64::from(self.p) / f64::from(self.q);
        let turns = f64::from(self.q) * f64::TAU();

        let mut theta = linspace(0.0, turns, self.dots + 1);
        theta.pop();

        theta
            .into_iter()
            .map(|t| {
                Point::new(
                    self.radius * ((k - 1.0) * t.cos() + ((k - 1.0) * t).cos()),
                    self.radius * ((k - 1.0) * t.sin() - ((k - 1.0) * t).sin()),
                )
            })
            .collect()
    }

    fn outline(&self) -> Outline {
        Outline::ring(self.dots)
    }
}

/// The superposition of two perpendicular oscillations with frequencies
/// `a` and `b`.
#[derive(Debug, Clone)]
pub struct Lissajous {
    a: f64,
    b: f64,
    radius: f64,
    dots: usize,
}

impl Lissajous {
    /// # Errors
    /// Needs at least three dots.
    pub fn new(a: f64, b: f64, radius: f64, dots: usize) -> Result<Self, ParamError> {
        if dots < 3 {
            return Err(ParamError::DotCount {
                kind: "Lissajous",
                min: 3,
            });
        }

        Ok(Self {
            a,
            b,
            radius,
            dots,
        })
    }
}

impl Shape for Lissajous {
    fn kind(&self) -> &str {
        "Lissajous"
    }

    fn base_points(&self) -> Vec<Point> {
        full_turn(self.dots)
            .into_iter()
            .map(|t| {
                Point::new(
                    self.radius * (self.a * t).cos(),
                    self.radius * (self.b * t).sin(),
                )
            })
            .collect()
    }
}

/// A sine trace across a fixed horizontal span.
#[derive(Debug, Clone)]
pub struct Waveform {
    amplitude: f64,
    width: f64,
    period: f64,
    dots: usize,
}

impl Waveform {
    /// `period` is the horizontal length of one oscillation.
    ///
    /// # Errors
    /// Needs at least two dots and a period of at least one.
    pub fn new(amplitude: f64, width: f64, period: f64, dots: usize) -> Result<Self, ParamError> {
        if dots < 2 {
            return Err(ParamError::DotCount {
                kind: "Waveform",
                min: 2,
            });
        }
        if period < 1.0 {
            return Err(ParamError::Range {
                kind: "Waveform",
                param: "period",
                expected: "at least 1",
            });
        }

        Ok(Self {
            amplitude,
            width,
            period,
            dots,
        })
    }
}

impl Shape for Waveform {
    fn kind(&self) -> &str {
        "Waveform"
    }

    fn base_points(&self) -> Vec<Point> {
        let theta = linspace(0.0, f64::TAU(), self.dots);
        let xs = linspace(-self.width / 2.0, self.width / 2.0, self.dots);

        xs.into_iter()
            .zip(theta)
            .map(|(x, t)| Point::new(x, self.amplitude * (t * self.width / self.period).sin()))
            .collect()
    }

    fn outline(&self) -> Outline {
        Outline::chain(self.dots)
    }

    fn planar(&self) -> bool {
        false
    }
}

/// A parabolic arc opening upwards, centered on the y-axis.
#[derive(Debug, Clone)]
pub struct Parabola {
    width: f64,
    height: f64,
    dots: usize,
}

impl Parabola {
    /// # Errors
    /// Needs at least two dots.
    pub fn new(width: f64, height: f64, dots: usize) -> Result<Self, ParamError> {
        if dots < 2 {
            return Err(ParamError::DotCount {
                kind: "Parabola",
                min: 2,
            });
        }

        Ok(Self {
            width,
            height,
            dots,
        })
    }
}

impl Shape for Parabola {
    fn kind(&self) -> &str {
        "Parabola"
    }

    fn base_points(&self) -> Vec<Point> {
        linspace(-self.width / 2.0, self.width / 2.0, self.dots)
            .into_iter()
            .map(|x| {
                Point::new(
                    x,
                    4.0 * self.height * x * x / (self.width * self.width) - self.height / 2.0,
                )
            })
            .collect()
    }

    fn outline(&self) -> Outline {
        Outline::chain(self.dots)
    }

    fn planar(&self) -> bool {
        false
    }
}

/// A coil: circular motion superposed with steady vertical drop.
#[derive(Debug, Clone)]
pub struct Spring {
    radius: f64,
    dots: usize,
    turns: u32,
}

impl Spring {
    /// # Errors
    /// Needs at least two dots and one turn.
    pub fn new(radius: f64, dots: usize, turns: u32) -> Result<Self, ParamError> {
        if dots < 2 {
            return Err(ParamError::DotCount {
                kind: "Spring",
                min: 2,
            });
        }
        if turns == 0 {
            return Err(ParamError::Range {
                kind: "Spring",
                param: "turns",
                expected: "at least 1",
            });
        }

        Ok(Self {
            radius,
            dots,
            turns,
        })
    }
}

impl Shape for Spring {
    fn kind(&self) -> &str {
        "Spring"
    }

    fn base_points(&self) -> Vec<Point> {
        let sweep = f64::from(self.turns) * f64::TAU();
        let theta = linspace(0.0, sweep, self.dots);
        let drop = linspace(0.0, f64::from(self.turns), self.dots);

        theta
            .into_iter()
            .zip(drop)
            .map(|(t, h)| {
                Point::new(self.radius * t.cos(), -self.radius * (t.sin() + h))
            })
            .collect()
    }

    fn outline(&self) -> Outline {
        Outline::chain(self.dots)
    }

    fn planar(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::Bounds;
    use crate::shape::Shape;
    use num_traits::FloatConst;

    #[test]
    fn archimedean_radius_grows_monotonically() {
        let fig = Spiral::archimedean(5.0, 64, 4.0 * f64::TAU()).unwrap().build();

        let mut last = 0.0;
        for p in fig.points() {
            let r = p.norm();
            assert!(r >= last - 1e-9);
            last = r;
        }
        assert!((last - 5.0).abs() < 1e-9);
    }

    #[test]
    fn logarithmic_spiral_ends_at_full_radius() {
        let fig = Spiral::logarithmic(3.0, 32, 2.0 * f64::TAU()).unwrap().build();
        let last = fig.points().last().unwrap();

        assert!((last.norm() - 3.0).abs() < 1e-9);
    }

    #[test]
    fn fermat_spiral_keeps_the_requested_dot_count() {
        let even = Spiral::fermat(3.0, 32, f64::TAU()).unwrap().build();
        assert_eq!(even.len(), 32);

        let odd = Spiral::fermat(3.0, 33, f64::TAU()).unwrap().build();
        assert_eq!(odd.len(), 33);
    }

    #[test]
    fn spiral_rejects_a_zero_sweep() {
        assert!(Spiral::archimedean(5.0, 16, 0.0).is_err());
    }

    #[test]
    fn cycloid_starts_on_the_baseline() {
        let fig = Cycloid::new(2.0, 16, f64::TAU()).unwrap().build();

        assert!(fig.points()[0].dist(crate::Point::new(-1.0, 0.0)) < 1e-9);
        assert!(fig.points().iter().all(|p| p.y >= -1e-12));
    }

    #[test]
    fn epicycloid_dot_count_and_symmetry() {
        let fig = Epicycloid::new(5, 1, 2.0, 100).unwrap().build();

        assert_eq!(fig.len(), 100);
        // The outermost reach of a k-cusped epicycloid is (k + 2) * r.
        let max = fig.points().iter().map(|p| p.norm()).fold(0.0, f64::max);
        assert!(max <= 2.0 * (5.0 + 2.0) + 1e-9);
    }

    #[test]
    fn curved_polygon_is_a_unit_ratio_hypocycloid() {
        let fig = Hypocycloid::curved_polygon(2.0, 60, 3).unwrap().build();
        assert_eq!(fig.len(), 60);
        assert!(Hypocycloid::curved_polygon(2.0, 60, 2).is_err());
    }

    #[test]
    fn lissajous_stays_inside_its_radius_box() {
        let fig = Lissajous::new(3.0, 2.0, 1.5, 128).unwrap().build();
        let bounds = Bounds::of(fig.points()).unwrap();

        assert!(bounds.max_x <= 1.5 + 1e-9);
        assert!(bounds.min_y >= -1.5 - 1e-9);
    }

    #[test]
    fn waveform_spans_its_width() {
        let fig = Waveform::new(1.0, 8.0, 2.0, 33).unwrap().build();
        let bounds = Bounds::of(fig.points()).unwrap();

        assert!((bounds.width() - 8.0).abs() < 1e-9);
        assert!(bounds.max_y <= 1.0 + 1e-9);
    }

    #[test]
    fn parabola_is_symmetric_about_the_y_axis() {
        let fig = Parabola::new(4.0, 2.0, 9).unwrap().build();
        let points = fig.points();

        for i in 0..4 {
            assert!((points[i].y - points[8 - i].y).abs() < 1e-9);
        }
        assert!((points[4].y + 1.0).abs() < 1e-9);
    }

    #[test]
    fn spring_drops_one_unit_height_per_turn() {
        let fig = Spring::new(1.0, 61, 3).unwrap().build();
        let first = fig.points()[0];
        let last = fig.points()[60];

        assert!((first.y - 0.0).abs() < 1e-9);
        assert!((last.y + 3.0).abs() < 1e-9);
    }
}
