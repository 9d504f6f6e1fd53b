//! View-box and tick layout. The canvas span is snapped outwards to a
//! round multiple of a power of ten, so tick labels come out clean no
//! matter what the figures' extents are.

use stipple_figure::Position;
use stipple_geom::{Bounds, Point};

/// The world-to-screen mapping for one projection pass.
#[derive(Debug, Clone, Copy)]
pub struct Layout {
    /// World-units side length of the (square) view box.
    pub span: f64,
    /// World center of the view box.
    pub center: Point,
    /// Major tick spacing in world units.
    pub tick_unit: f64,
    /// Scene width in scene units.
    pub width: f64,
    /// Scene height in scene units.
    pub height: f64,
}

impl Layout {
    /// Compute the view box enclosing `bounds`, scaled by `scale`, mapped
    /// onto a `width` x `height` scene.
    #[must_use]
    pub fn fit(bounds: &Bounds, scale: f64, width: f64, height: f64) -> Self {
        let box_size = (bounds.width().max(bounds.height()) * scale).max(0.01);

        // Snap the span up to (v + 1) * 10^k so ticks land on round values.
        let unit = 10.0_f64.powf(box_size.log10().floor());
        #[allow(clippy::cast_possible_truncation)]
        let v = (box_size / unit).floor() as i32 + 1;
        let span = f64::from(v) * unit;
        let tick_unit = unit * f64::from(v / 2);

        Self {
            span,
            center: bounds.center(),
            tick_unit,
            width,
            height,
        }
    }

    /// World coordinate of the left view-box border.
    #[must_use]
    pub fn left(&self) -> f64 {
        self.center.x - self.span / 2.0
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.center.x + self.span / 2.0
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.center.y - self.span / 2.0
    }

    #[must_use]
    pub fn top(&self) -> f64 {
        self.center.y + self.span / 2.0
    }

    /// The visible world rectangle.
    #[must_use]
    pub fn view_bounds(&self) -> Bounds {
        Bounds {
            min_x: self.left(),
            min_y: self.bottom(),
            max_x: self.right(),
            max_y: self.top(),
        }
    }

    /// Map a world point into scene coordinates (y flipped downwards).
    #[must_use]
    pub fn project(&self, p: Point) -> Position {
        Position::new(
            (p.x - self.left()) / self.span * self.width,
            self.height - (p.y - self.bottom()) / self.span * self.height,
        )
    }

    /// A world length in scene units (using the horizontal scale).
    #[must_use]
    pub fn project_len(&self, len: f64) -> f64 {
        len / self.span * self.width
    }

    /// Positions of ticks with spacing `step` between `low` and `high`,
    /// on multiples of `step`.
    fn ticks_between(low: f64, high: f64, step: f64) -> Vec<f64> {
        if step <= 0.0 {
            return Vec::new();
        }

        let mut t = ((low / step).floor() + 1.0) * step;
        let mut ticks = Vec::new();
        while t <= high + 1e-9 {
            ticks.push(t);
            t += step;
        }

        ticks
    }

    /// World x positions of major vertical grid lines.
    #[must_use]
    pub fn major_x(&self) -> Vec<f64> {
        Self::ticks_between(self.left(), self.right(), self.tick_unit)
    }

    /// World y positions of major horizontal grid lines.
    #[must_use]
    pub fn major_y(&self) -> Vec<f64> {
        Self::ticks_between(self.bottom(), self.top(), self.tick_unit)
    }

    /// World x positions of minor vertical grid lines.
    #[must_use]
    pub fn minor_x(&self) -> Vec<f64> {
        Self::ticks_between(self.left(), self.right(), self.tick_unit / 2.0)
    }

    /// World y positions of minor horizontal grid lines.
    #[must_use]
    pub fn minor_y(&self) -> Vec<f64> {
        Self::ticks_between(self.bottom(), self.top(), self.tick_unit / 2.0)
    }
}

/// Format a tick value: whole numbers lose the decimal point.
#[must_use]
pub fn tick_label(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        format!("{}", value.round())
    } else {
        format!("{value:.2}")
    }
}
