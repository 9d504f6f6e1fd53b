//! Ornamental figures: hearts, flowers, crosses, windmills and friends.
//! Most of these are polar traces with hand-tuned radius laws.

use super::curve::Epicycloid;
use super::Shape;
use crate::figure::Outline;
use crate::point::Point;
use crate::transform;
use crate::util::{full_turn, linspace};
use crate::ParamError;
use num_traits::FloatConst;

/// A heart curve.
#[derive(Debug, Clone)]
pub struct Heart {
    size: f64,
    dots: usize,
}

impl Heart {
    /// # Errors
    /// Needs at least three dots.
    pub fn new(size: f64, dots: usize) -> Result<Self, ParamError> {
        if dots < 3 {
            return Err(ParamError::DotCount {
                kind: "Heart",
                min: 3,
            });
        }

        Ok(Self { size, dots })
    }
}

impl Shape for Heart {
    fn kind(&self) -> &str {
        "Heart"
    }

    fn base_points(&self) -> Vec<Point> {
        full_turn(self.dots)
            .into_iter()
            .map(|t| {
                let lobe = 1.3 * t.sin() * t.cos().abs().powf(1.3).sqrt() / (t.sin() + 1.7);
                let rad = self.size
                    * (2.0 - 2.3 * t.sin() + 0.4 * (2.0 * t).cos() + lobe)
                    / 3.0;
                Point::polar(rad, t)
            })
            .collect()
    }

    fn outline(&self) -> Outline {
        Outline::ring(self.dots)
    }
}

/// A butterfly curve: two mirrored wings.
#[derive(Debug, Clone)]
pub struct Butterfly {
    size: f64,
    dots: usize,
}

impl Butterfly {
    /// # Errors
    /// Needs at least three dots.
    pub fn new(size: f64, dots: usize) -> Result<Self, ParamError> {
        if dots < 3 {
            return Err(ParamError::DotCount {
                kind: "Butterfly",
                min: 3,
            });
        }

        Ok(Self { size, dots })
    }
}

impl Shape for Butterfly {
    fn kind(&self) -> &str {
        "Butterfly"
    }

    fn base_points(&self) -> Vec<Point> {
        let third = f64::PI() / 3.0;

        full_turn(self.dots)
            .into_iter()
            .map(|t| {
                // The left wing mirrors the right one's radius law.
                let arg = if (f64::FRAC_PI_2()..=3.0 * f64::FRAC_PI_2()).contains(&t) {
                    2.0 * third - t
                } else {
                    t - third
                };
                let rad = self.size * (1.35 - arg.cos() * (3.0 * arg).sin());
                Point::polar(rad, t) * (1.0 / 1.35)
            })
            .collect()
    }

    fn outline(&self) -> Outline {
        Outline::ring(self.dots)
    }
}

/// A crescent: a circle folded over a vertical line.
#[derive(Debug, Clone)]
pub struct Moon {
    size: f64,
    dots: usize,
    breadth: f64,
}

impl Moon {
    /// `breadth` controls how slim the crescent is.
    ///
    /// # Errors
    /// Needs at least three dots and `breadth` strictly between 0 and 1.
    pub fn new(size: f64, dots: usize, breadth: f64) -> Result<Self, ParamError> {
        if dots < 3 {
            return Err(ParamError::DotCount {
                kind: "Moon",
                min: 3,
            });
        }
        if breadth <= 0.0 || breadth >= 1.0 {
            return Err(ParamError::Range {
                kind: "Moon",
                param: "breadth",
                expected: "strictly between 0 and 1",
            });
        }

        Ok(Self {
            size,
            dots,
            breadth,
        })
    }
}

impl Shape for Moon {
    fn kind(&self) -> &str {
        "Moon"
    }

    fn base_points(&self) -> Vec<Point> {
        let fold = -self.breadth * self.size / 2.0;

        full_turn(self.dots)
            .into_iter()
            .map(|t| {
                let mut p = Point::polar(self.size / 2.0, t);
                if p.x <= fold {
                    p.x = 2.0 * fold - p.x;
                }
                p
            })
            .collect()
    }

    fn outline(&self) -> Outline {
        Outline::ring(self.dots)
    }
}

/// The taegeuk symbol: a circle border with two interleaved swirls.
#[derive(Debug, Clone)]
pub struct Yinyang {
    size: f64,
    dots: usize,
}

impl Yinyang {
    /// # Errors
    /// Needs a dot count that is a positive multiple of six; the swirl
    /// sampling interleaves half- and third-strides.
    pub fn new(size: f64, dots: usize) -> Result<Self, ParamError> {
        if dots < 6 || dots % 6 != 0 {
            return Err(ParamError::Range {
                kind: "Yinyang",
                param: "dots",
                expected: "a positive multiple of 6",
            });
        }

        Ok(Self { size, dots })
    }
}

impl Shape for Yinyang {
    fn kind(&self) -> &str {
        "Yinyang"
    }

    fn base_points(&self) -> Vec<Point> {
        let theta = linspace(0.0, f64::TAU(), self.dots);
        let swirl = |t: f64| self.size * (-(t + t.sin()).cos() + 1.0) / 2.0;

        let mut points = Vec::new();
        for i in 0..self.dots {
            if i % 2 == 0 {
                points.push(Point::polar(self.size, theta[i / 2]));
                points.push(Point::polar(self.size, theta[i / 2 + self.dots / 2]));
            }
            if i % 3 == 0 {
                points.push(Point::polar(swirl(theta[i / 3]), theta[i / 3]));
                points.push(Point::polar(-swirl(theta[i / 3]), theta[i / 3]));
            }
        }

        points
    }

    fn planar(&self) -> bool {
        false
    }
}

/// A bent multi-wing blade traced in polar form.
#[derive(Debug, Clone)]
pub struct Boomerang {
    size: f64,
    dots: usize,
    wings: u32,
}

impl Boomerang {
    /// # Errors
    /// Needs at least three dots and two wings.
    pub fn new(size: f64, dots: usize, wings: u32) -> Result<Self, ParamError> {
        if dots < 3 {
            return Err(ParamError::DotCount {
                kind: "Boomerang",
                min: 3,
            });
        }
        if wings < 2 {
            return Err(ParamError::VertexCount {
                kind: "Boomerang",
                min: 2,
            });
        }

        Ok(Self { size, dots, wings })
    }
}

impl Shape for Boomerang {
    fn kind(&self) -> &str {
        "Boomerang"
    }

    fn base_points(&self) -> Vec<Point> {
        let w = f64::from(self.wings);

        full_turn(self.dots)
            .into_iter()
            .map(|t| {
                let rad = self.size
                    * ((w + 1.0) * (w * t).cos().cos() + (w * t).sin().sin())
                    / (w + 2.0);
                Point::polar(rad, t)
            })
            .collect()
    }

    fn outline(&self) -> Outline {
        Outline::ring(self.dots)
    }
}

/// A puffy cloud: an epicycloid with a unit rolling circle.
#[derive(Debug, Clone)]
pub struct Cotton {
    size: f64,
    dots: usize,
    clumps: u32,
}

impl Cotton {
    /// # Errors
    /// Needs at least three dots and three clumps.
    pub fn new(size: f64, dots: usize, clumps: u32) -> Result<Self, ParamError> {
        if clumps < 3 {
            return Err(ParamError::VertexCount {
                kind: "Cotton",
                min: 3,
            });
        }
        if dots < 3 {
            return Err(ParamError::DotCount {
                kind: "Cotton",
                min: 3,
            });
        }

        Ok(Self {
            size,
            dots,
            clumps,
        })
    }
}

impl Shape for Cotton {
    fn kind(&self) -> &str {
        "Cotton"
    }

    fn base_points(&self) -> Vec<Point> {
        Epicycloid::new(self.clumps, 1, self.size, self.dots)
            .expect("parameters already validated")
            .base_points()
    }

    fn outline(&self) -> Outline {
        Outline::ring(self.dots)
    }
}

/// A flower with smoothly bulging petals.
#[derive(Debug, Clone)]
pub struct FlowerA {
    size: f64,
    petals: u32,
    dots: usize,
}

impl FlowerA {
    /// # Errors
    /// Needs at least three dots and one petal.
    pub fn new(size: f64, petals: u32, dots: usize) -> Result<Self, ParamError> {
        if petals < 1 {
            return Err(ParamError::VertexCount {
                kind: "FlowerA",
                min: 1,
            });
        }
        if dots < 3 {
            return Err(ParamError::DotCount {
                kind: "FlowerA",
                min: 3,
            });
        }

        Ok(Self {
            size,
            petals,
            dots,
        })
    }
}

impl Shape for FlowerA {
    fn kind(&self) -> &str {
        "FlowerA"
    }

    fn base_points(&self) -> Vec<Point> {
        let k = f64::from(self.petals);

        full_turn(self.dots)
            .into_iter()
            .map(|t| {
                let rad = self.size * (2.0 - (k * t).sin().powi(3)) / 3.0;
                Point::polar(rad, t)
            })
            .collect()
    }

    fn outline(&self) -> Outline {
        Outline::ring(self.dots)
    }
}

/// A flower of separate sine-lobe petals arranged around the center.
#[derive(Debug, Clone)]
pub struct FlowerB {
    size: f64,
    petals: u32,
    dots: usize,
}

impl FlowerB {
    /// `dots` is the dot count of a single petal.
    ///
    /// # Errors
    /// Needs at least two petals and one dot per petal.
    pub fn new(size: f64, petals: u32, dots: usize) -> Result<Self, ParamError> {
        if petals < 2 {
            return Err(ParamError::VertexCount {
                kind: "FlowerB",
                min: 2,
            });
        }
        if dots < 1 {
            return Err(ParamError::DotCount {
                kind: "FlowerB",
                min: 1,
            });
        }

        Ok(Self {
            size,
            petals,
            dots,
        })
    }
}

impl Shape for FlowerB {
    fn kind(&self) -> &str {
        "FlowerB"
    }

    fn base_points(&self) -> Vec<Point> {
        let k = f64::from(self.petals);

        // Sample one petal strictly inside its angular slot, then spin
        // copies into place.
        let mut slot = linspace(0.0, f64::PI() / k, self.dots + 2);
        slot.pop();
        slot.remove(0);

        let petal: Vec<Point> = slot
            .into_iter()
            .map(|t| Point::polar(self.size * (k * t).sin(), t))
            .collect();

        let mut points = petal.clone();
        for i in 1..self.petals {
            let mut copy = petal.clone();
            transform::rotate(&mut copy, 2.0 * f64::from(i) * f64::PI() / k);
            points.extend(copy);
        }

        points
    }

    fn outline(&self) -> Outline {
        let per = self.dots;
        let outers = (0..self.petals as usize)
            .map(|i| (i * per..(i + 1) * per).collect())
            .collect();

        Outline::Closed {
            outers,
            inners: Vec::new(),
        }
    }
}

/// A flower whose petals overlap, traced over two full turns.
#[derive(Debug, Clone)]
pub struct FlowerC {
    size: f64,
    petals: u32,
    dots: usize,
}

impl FlowerC {
    /// # Errors
    /// Needs at least three dots; the petal count must be odd and at
    /// least three.
    pub fn new(size: f64, petals: u32, dots: usize) -> Result<Self, ParamError> {
        if petals < 3 || petals % 2 == 0 {
            return Err(ParamError::Range {
                kind: "FlowerC",
                param: "petals",
                expected: "an odd count of at least 3",
            });
        }
        if dots < 3 {
            return Err(ParamError::DotCount {
                kind: "FlowerC",
                min: 3,
            });
        }

        Ok(Self {
            size,
            petals,
            dots,
        })
    }
}

impl Shape for FlowerC {
    fn kind(&self) -> &str {
        "FlowerC"
    }

    fn base_points(&self) -> Vec<Point> {
        let k = f64::from(self.petals);
        let mut theta = linspace(0.0, 2.0 * f64::TAU(), self.dots + 1);
        theta.pop();

        theta
            .into_iter()
            .map(|t| {
                let rad = self.size * (2.0 + (k * t / 2.0).cos()) / 3.0;
                Point::polar(rad, t)
            })
            .collect()
    }

    fn outline(&self) -> Outline {
        Outline::ring(self.dots)
    }
}

/// A cosmos-like flower: petals cut from a rose curve.
#[derive(Debug, Clone)]
pub struct FlowerD {
    size: f64,
    dots: usize,
    petals: u32,
}

impl FlowerD {
    /// `dots` is the dot count of a single petal.
    ///
    /// # Errors
    /// Needs at least three dots per petal and one petal.
    pub fn new(size: f64, dots: usize, petals: u32) -> Result<Self, ParamError> {
        if dots < 3 {
            return Err(ParamError::DotCount {
                kind: "FlowerD",
                min: 3,
            });
        }
        if petals < 1 {
            return Err(ParamError::VertexCount {
                kind: "FlowerD",
                min: 1,
            });
        }

        Ok(Self {
            size,
            dots,
            petals,
        })
    }
}

impl Shape for FlowerD {
    fn kind(&self) -> &str {
        "FlowerD"
    }

    fn base_points(&self) -> Vec<Point> {
        let n = self.dots;

        // The rose curve r = cos(3 theta / 2) closes over two turns; a
        // petal is stitched from two windows of that trace.
        let samples = if n % 2 == 0 {
            12 * (n + 1) + 1
        } else {
            24 * (n / 2 + 1) + 1
        };

        let mut theta = linspace(0.0, 2.0 * f64::TAU(), samples);
        theta.pop();

        let trace: Vec<Point> = theta
            .into_iter()
            .map(|t| Point::polar(self.size * (3.0 * t / 2.0).cos(), t))
            .collect();

        let mut petal: Vec<Point> = Vec::with_capacity(n);
        petal.extend(&trace[n + 2..3 * n / 2 + 2]);
        petal.extend(&trace[9 * n / 2 + 5..5 * n + 5]);
        for p in &mut petal {
            *p = *p * f64::SQRT_2();
        }

        let mut points = petal.clone();
        for i in 1..self.petals {
            let mut copy = petal.clone();
            transform::rotate(
                &mut copy,
                f64::TAU() * f64::from(i) / f64::from(self.petals),
            );
            points.extend(copy);
        }

        points
    }
}

fn cross_points(size: f64, dots: usize, exponent: f64) -> Vec<Point> {
    full_turn(dots)
        .into_iter()
        .map(|t| {
            let rad = 15.0 / (16.0 * (2.0 * t).sin().abs());
            let rad = rad.powf(exponent);
            let rad = size * (rad / 1.5).min(1.0);
            Point::polar(rad, t)
        })
        .collect()
}

fn cross_params(kind: &'static str, dots: usize) -> Result<(), ParamError> {
    if dots < 3 {
        return Err(ParamError::DotCount { kind, min: 3 });
    }
    Ok(())
}

/// A cross with softly rounded arm junctions.
#[derive(Debug, Clone)]
pub struct RoundedCross {
    size: f64,
    dots: usize,
}

impl RoundedCross {
    /// # Errors
    /// Needs at least three dots.
    pub fn new(size: f64, dots: usize) -> Result<Self, ParamError> {
        cross_params("RoundedCross", dots)?;
        Ok(Self { size, dots })
    }
}

impl Shape for RoundedCross {
    fn kind(&self) -> &str {
        "RoundedCross"
    }

    fn base_points(&self) -> Vec<Point> {
        cross_points(self.size, self.dots, 0.5)
    }

    fn outline(&self) -> Outline {
        Outline::ring(self.dots)
    }
}

/// A cross with sharply pinched arm junctions.
#[derive(Debug, Clone)]
pub struct SharpCross {
    size: f64,
    dots: usize,
}

impl SharpCross {
    /// # Errors
    /// Needs at least three dots.
    pub fn new(size: f64, dots: usize) -> Result<Self, ParamError> {
        cross_params("SharpCross", dots)?;
        Ok(Self { size, dots })
    }
}

impl Shape for SharpCross {
    fn kind(&self) -> &str {
        "SharpCross"
    }

    fn base_points(&self) -> Vec<Point> {
        cross_points(self.size, self.dots, 2.5)
    }

    fn outline(&self) -> Outline {
        Outline::ring(self.dots)
    }
}

/// Road borders radiating from a central junction.
#[derive(Debug, Clone)]
pub struct Crossroad {
    size: f64,
    dots: usize,
    arms: u32,
    width_rate: f64,
}

impl Crossroad {
    /// `width_rate` narrows the roads as it decreases.
    ///
    /// # Errors
    /// Needs an even arm count of at least six, two dots per border and a
    /// positive width rate.
    pub fn new(size: f64, dots: usize, arms: u32, width_rate: f64) -> Result<Self, ParamError> {
        if arms < 6 || arms % 2 != 0 {
            return Err(ParamError::Range {
                kind: "Crossroad",
                param: "arms",
                expected: "an even count of at least 6",
            });
        }
        if dots < 2 {
            return Err(ParamError::DotCount {
                kind: "Crossroad",
                min: 2,
            });
        }
        if width_rate <= 0.0 {
            return Err(ParamError::Range {
                kind: "Crossroad",
                param: "width_rate",
                expected: "positive",
            });
        }

        Ok(Self {
            size,
            dots,
            arms,
            width_rate,
        })
    }
}

impl Shape for Crossroad {
    fn kind(&self) -> &str {
        "Crossroad"
    }

    fn base_points(&self) -> Vec<Point> {
        let arms = f64::from(self.arms);
        let wedge = f64::TAU() / arms;
        let narrow = 1.0 / self.width_rate;
        let squeeze = 1.0 / (narrow * (1.0 + wedge.tan() / 2.0));

        let mut points = Vec::with_capacity(2 * self.dots * self.arms as usize);

        for e in 0..self.dots {
            let reach =
                self.size * wedge.tan() / 2.0 + self.size * e as f64 / self.dots as f64;

            for v in 0..self.arms {
                let along = wedge * f64::from(v);
                let center = Point::polar(self.size / 2.0, along);

                for side in [-f64::FRAC_PI_2(), f64::FRAC_PI_2()] {
                    let p = center + Point::polar(narrow * reach, along + side);
                    points.push(p * squeeze);
                }
            }
        }

        points
    }

    fn planar(&self) -> bool {
        false
    }
}

/// Blades anchored to an inner wheel, swept backwards.
#[derive(Debug, Clone)]
pub struct Windmill {
    size: f64,
    dots: usize,
    blades: u32,
    wheel: f64,
}

impl Windmill {
    /// # Errors
    /// Needs at least three blades and two dots per blade.
    pub fn new(size: f64, dots: usize, blades: u32) -> Result<Self, ParamError> {
        Self::with_wheel(size, dots, blades, 1.25)
    }

    /// `wheel` scales the blade length.
    ///
    /// # Errors
    /// Needs at least three blades, two dots per blade and a positive
    /// wheel factor.
    pub fn with_wheel(size: f64, dots: usize, blades: u32, wheel: f64) -> Result<Self, ParamError> {
        mill_params("Windmill", dots, blades, wheel)?;
        Ok(Self {
            size,
            dots,
            blades,
            wheel,
        })
    }
}

impl Shape for Windmill {
    fn kind(&self) -> &str {
        "Windmill"
    }

    fn base_points(&self) -> Vec<Point> {
        let blades = f64::from(self.blades);
        let wedge = f64::TAU() / blades;
        let inner = self.size * wedge.cos() / (wedge / 2.0).cos();
        let sweep = self.size * wedge.sin() - inner * (wedge / 2.0).sin();

        let mut points = Vec::with_capacity(self.dots * self.blades as usize);

        for e in 1..=self.dots {
            let reach = self.wheel * sweep * e as f64 / self.dots as f64;

            for v in 0..self.blades {
                let hub = Point::polar(inner, wedge * f64::from(v));
                let tip = wedge.mul_add(f64::from(v), -wedge / 2.0) + f64::FRAC_PI_2();
                points.push(hub + Point::polar(reach, tip));
            }
        }

        points
    }

    fn planar(&self) -> bool {
        false
    }
}

/// A pinwheel: blades swept forwards from a shrunken hub.
#[derive(Debug, Clone)]
pub struct Pinwheel {
    size: f64,
    dots: usize,
    blades: u32,
    wheel: f64,
}

impl Pinwheel {
    /// # Errors
    /// Needs at least three blades and two dots per blade.
    pub fn new(size: f64, dots: usize, blades: u32) -> Result<Self, ParamError> {
        Self::with_wheel(size, dots, blades, 2.0)
    }

    /// `wheel` shrinks the hub as it grows.
    ///
    /// # Errors
    /// Needs at least three blades, two dots per blade and a positive
    /// wheel factor.
    pub fn with_wheel(size: f64, dots: usize, blades: u32, wheel: f64) -> Result<Self, ParamError> {
        mill_params("Pinwheel", dots, blades, wheel)?;
        Ok(Self {
            size,
            dots,
            blades,
            wheel,
        })
    }
}

impl Shape for Pinwheel {
    fn kind(&self) -> &str {
        "Pinwheel"
    }

    fn base_points(&self) -> Vec<Point> {
        let blades = f64::from(self.blades);
        let wedge = f64::TAU() / blades;
        let inner = self.size / (2.0 * (f64::FRAC_PI_2() - wedge / 2.0).cos());

        let mut points = Vec::with_capacity(self.dots * self.blades as usize);

        for e in 1..=self.dots {
            let reach = self.size * e as f64 / self.dots as f64;

            for v in 0..self.blades {
                let hub = Point::polar(inner / self.wheel, wedge * f64::from(v));
                let tip = wedge.mul_add(f64::from(v), wedge / 2.0) + f64::FRAC_PI_2();
                points.push(hub + Point::polar(reach, tip));
            }
        }

        points
    }

    fn planar(&self) -> bool {
        false
    }
}

fn mill_params(kind: &'static str, dots: usize, blades: u32, wheel: f64) -> Result<(), ParamError> {
    if blades < 3 {
        return Err(ParamError::VertexCount { kind, min: 3 });
    }
    if dots < 2 {
        return Err(ParamError::DotCount { kind, min: 2 });
    }
    if wheel <= 0.0 {
        return Err(ParamError::Range {
            kind,
            param: "wheel",
            expected: "positive",
        });
    }
    Ok(())
}

/// A four-pointed throwing star.
#[derive(Debug, Clone)]
pub struct Shuriken {
    long_side: f64,
    short_side: f64,
    dots: usize,
}

impl Shuriken {
    /// `long_side` is the tip radius, `short_side` the notch radius.
    ///
    /// # Errors
    /// Needs at least two dots per edge.
    pub fn new(long_side: f64, short_side: f64, dots: usize) -> Result<Self, ParamError> {
        if dots < 2 {
            return Err(ParamError::DotCount {
                kind: "Shuriken",
                min: 2,
            });
        }

        Ok(Self {
            long_side,
            short_side,
            dots,
        })
    }
}

impl Shape for Shuriken {
    fn kind(&self) -> &str {
        "Shuriken"
    }

    fn base_points(&self) -> Vec<Point> {
        let n = (self.dots - 1) as f64;
        let notch = self.short_side * f64::SQRT_2() / 2.0;

        // One quarter: tip-to-notch, then notch up towards the next tip.
        let mut quarter = Vec::with_capacity(2 * self.dots - 2);
        for i in 0..self.dots {
            let t = i as f64 / n;
            quarter.push(Point::new(
                self.long_side - (self.long_side - notch) * t,
                notch * t,
            ));
        }
        for j in (1..self.dots - 1).rev() {
            let t = j as f64 / n;
            quarter.push(Point::new(
                notch * t,
                self.long_side - (self.long_side - notch) * t,
            ));
        }

        let mut points = quarter.clone();
        for turn in 1..4 {
            let mut copy = quarter.clone();
            transform::rotate(&mut copy, f64::FRAC_PI_2() * f64::from(turn));
            points.extend(copy);
        }

        points
    }

    fn outline(&self) -> Outline {
        Outline::ring(8 * (self.dots - 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::Bounds;
    use crate::shape::Shape;

    #[test]
    fn heart_is_wider_than_it_is_deep_below_center() {
        let fig = Heart::new(3.0, 128).unwrap().build();
        let bounds = Bounds::of(fig.points()).unwrap();

        // The classic heart silhouette: roughly as wide as tall, dipping
        // further down than up.
        assert!(bounds.width() > 2.0);
        assert!(-bounds.min_y > bounds.max_y);
    }

    #[test]
    fn butterfly_wings_are_mirror_symmetric() {
        let fig = Butterfly::new(2.0, 180).unwrap().build();
        let bounds = Bounds::of(fig.points()).unwrap();

        assert!((bounds.max_x + bounds.min_x).abs() < 0.1);
    }

    #[test]
    fn moon_folds_dots_across_the_breadth_line() {
        let fig = Moon::new(4.0, 64, 0.5).unwrap().build();
        let fold = -0.5 * 4.0 / 2.0;

        for p in fig.points() {
            assert!(p.x >= fold - 1e-9);
        }
    }

    #[test]
    fn moon_breadth_is_validated() {
        assert!(Moon::new(4.0, 64, 0.0).is_err());
        assert!(Moon::new(4.0, 64, 1.0).is_err());
        assert!(Moon::new(4.0, 64, 0.3).is_ok());
    }

    #[test]
    fn yinyang_dot_count_must_be_a_multiple_of_six() {
        assert!(Yinyang::new(4.0, 10).is_err());
        assert!(Yinyang::new(4.0, 90).is_ok());
    }

    #[test]
    fn yinyang_border_dots_stay_on_the_circle() {
        let fig = Yinyang::new(4.0, 90).unwrap().build();

        // Swirl dots lie inside, border dots exactly on radius.
        let on_border = fig
            .points()
            .iter()
            .filter(|p| (p.norm() - 4.0).abs() < 1e-9)
            .count();
        assert!(on_border >= 90);
        assert!(fig.points().iter().all(|p| p.norm() <= 4.0 + 1e-9));
    }

    #[test]
    fn cotton_matches_the_epicycloid_trace() {
        let cotton = Cotton::new(2.0, 48, 6).unwrap().build();
        let epi = Epicycloid::new(6, 1, 2.0, 48).unwrap().build();

        assert_eq!(cotton.points(), epi.points());
        assert_eq!(cotton.kind(), "Cotton");
    }

    #[test]
    fn flower_b_produces_one_ring_per_petal() {
        let flower = FlowerB::new(3.0, 5, 9).unwrap();
        let fig = flower.build();

        assert_eq!(fig.len(), 5 * 9);
        match fig.outline() {
            crate::Outline::Closed { outers, inners } => {
                assert_eq!(outers.len(), 5);
                assert!(inners.is_empty());
            }
            other => panic!("expected closed outline, got {other:?}"),
        }
    }

    #[test]
    fn flower_c_rejects_even_petal_counts() {
        assert!(FlowerC::new(3.0, 4, 64).is_err());
        assert!(FlowerC::new(3.0, 5, 64).is_ok());
    }

    #[test]
    fn flower_d_petal_count_scales_with_petals() {
        let even = FlowerD::new(3.0, 8, 5).unwrap().build();
        assert_eq!(even.len(), 8 * 5);

        let odd = FlowerD::new(3.0, 7, 3).unwrap().build();
        assert_eq!(odd.len(), 7 * 3);
    }

    #[test]
    fn crosses_cap_their_arms_at_the_size_radius() {
        for fig in [
            RoundedCross::new(2.0, 128).unwrap().build(),
            SharpCross::new(2.0, 128).unwrap().build(),
        ] {
            let max = fig.points().iter().map(|p| p.norm()).fold(0.0, f64::max);
            assert!(max <= 2.0 + 1e-9);
        }
    }

    #[test]
    fn sharp_cross_pinches_deeper_at_the_diagonals() {
        // With 8 dots the second dot lands exactly on the 45 degree
        // diagonal, where the radius law bottoms out.
        let rounded = RoundedCross::new(2.0, 8).unwrap().build();
        let sharp = SharpCross::new(2.0, 8).unwrap().build();

        let shallow = rounded.points()[1].norm();
        let deep = sharp.points()[1].norm();

        assert!(deep < shallow);
        assert!(shallow < 2.0);
    }

    #[test]
    fn crossroad_dot_count_is_closed_form() {
        let fig = Crossroad::new(4.0, 8, 6, 1.0).unwrap().build();
        assert_eq!(fig.len(), 2 * 8 * 6);
        assert!(Crossroad::new(4.0, 8, 5, 1.0).is_err());
        assert!(Crossroad::new(4.0, 8, 4, 1.0).is_err());
    }

    #[test]
    fn windmill_and_pinwheel_counts() {
        assert_eq!(Windmill::new(4.0, 6, 6).unwrap().build().len(), 36);
        assert_eq!(Pinwheel::new(4.0, 8, 6).unwrap().build().len(), 48);
        assert!(Pinwheel::with_wheel(4.0, 8, 6, 0.0).is_err());
    }

    #[test]
    fn shuriken_has_fourfold_symmetry() {
        let fig = Shuriken::new(3.0, 1.5, 8).unwrap().build();

        assert_eq!(fig.len(), 8 * 7);

        // Rotating the whole figure a quarter turn maps it onto itself.
        let mut rotated = fig.clone();
        rotated.rotate(f64::FRAC_PI_2());
        let quarter = fig.len() / 4;

        for (p, q) in rotated.points().iter().zip(&fig.points()[quarter..]) {
            assert!(p.dist(*q) < 1e-9, "{p} != {q}");
        }
    }
}
