//! The JSON figure-spec format. A spec file describes a list of figures
//! (shape constructor, transform pipeline, draw options), optional infinite
//! lines, and canvas settings; [`SceneSpec::to_canvas`] turns it into a
//! ready-to-project canvas.
//!
//! All angles in spec files are degrees. The library API itself works in
//! radians; degrees simply read better in hand-written JSON.

use std::fmt::{Display, Formatter};

use serde::Deserialize;
use stipple_canvas::{Canvas, CanvasError, CanvasOptions, DrawOptions, LineOptions};
use stipple_figure::{LineStyle, Marker};
use stipple_geom::shape::curve::{
    Cycloid, Epicycloid, Hypocycloid, Lissajous, Parabola, Spiral, Spring, Waveform,
};
use stipple_geom::shape::line::Line;
use stipple_geom::shape::ornament::{
    Boomerang, Butterfly, Cotton, Crossroad, FlowerA, FlowerB, FlowerC, FlowerD, Heart, Moon,
    Pinwheel, RoundedCross, SharpCross, Shuriken, Windmill, Yinyang,
};
use stipple_geom::shape::polygon::{
    ConcaveStar, Kite, Parallelogram, Polygon, PolygonTile, Rectangle, RegularPolygon, Rhombus,
    Segment, Star, Trapezoid,
};
use stipple_geom::shape::round::{Arc, Circle, Ellipse};
use stipple_geom::shape::scatter::{Dot, Grid, PointCloud};
use stipple_geom::shape::Shape;
use stipple_geom::{Figure, Lens, ParamError, Point};

/// A whole scene: canvas settings plus the figures and lines on it.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SceneSpec {
    /// Theme name; the CLI may override it.
    pub theme: Option<String>,
    /// Extra view-box scaling.
    pub scale: Option<f64>,
    /// Whether to draw the grid. Defaults to true.
    pub grid: Option<bool>,
    #[serde(default)]
    pub figures: Vec<FigureSpec>,
    #[serde(default)]
    pub lines: Vec<LineSpec>,
}

/// One figure: its shape, transform pipeline and draw options.
#[derive(Debug, Deserialize)]
pub struct FigureSpec {
    #[serde(flatten)]
    pub shape: ShapeSpec,
    #[serde(default)]
    pub transforms: Vec<TransformSpec>,
    #[serde(default)]
    pub draw: DrawSpec,
}

/// An infinite line, through two points or through one point with a slope.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LineSpec {
    pub point: [f64; 2],
    pub to: Option<[f64; 2]>,
    pub slope: Option<f64>,
    pub color: Option<String>,
    #[serde(default = "default_line_width")]
    pub width: f64,
    #[serde(default)]
    pub style: LineStyle,
    #[serde(default = "default_line_z")]
    pub zorder: i32,
}

fn default_line_width() -> f64 {
    2.0
}

fn default_line_z() -> i32 {
    1
}

/// A shape constructor, tagged by family name.
#[derive(Debug, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum ShapeSpec {
    Circle {
        radius: f64,
        dots: usize,
    },
    Arc {
        radius: f64,
        dots: usize,
        /// Degrees.
        angle: f64,
    },
    Ellipse {
        height: f64,
        width: f64,
        dots: usize,
    },
    Polygon {
        vertices: Vec<[f64; 2]>,
    },
    Segment {
        dots: usize,
        length: f64,
        /// Degrees.
        slope: f64,
    },
    SegmentBetween {
        dots: usize,
        from: [f64; 2],
        to: [f64; 2],
    },
    RegularPolygon {
        side: f64,
        dots: usize,
        vertices: usize,
    },
    Parallelogram {
        height: f64,
        width: f64,
        y_dots: usize,
        x_dots: usize,
        /// Degrees.
        angle: f64,
    },
    Rhombus {
        height: f64,
        width: f64,
        dots: usize,
    },
    Trapezoid {
        height: f64,
        width_top: f64,
        width_bottom: f64,
        dots: usize,
        shift: Option<f64>,
    },
    RightTrapezoid {
        height: f64,
        width_top: f64,
        width_bottom: f64,
        dots: usize,
    },
    Rectangle {
        height: f64,
        width: f64,
        x_dots: usize,
        y_dots: usize,
    },
    Kite {
        a: f64,
        b: f64,
        dots: usize,
    },
    ConcaveStar {
        size: f64,
        dots: usize,
        vertices: usize,
    },
    Star {
        size: f64,
        dots: usize,
        vertices: usize,
    },
    PolygonTile {
        size: f64,
        dots: usize,
        vertices: usize,
    },
    Spiral {
        radius: f64,
        dots: usize,
        /// Degrees of total sweep.
        angle: f64,
        #[serde(default)]
        kind: SpiralKindSpec,
    },
    Cycloid {
        radius: f64,
        dots: usize,
        /// Degrees of total roll.
        angle: f64,
    },
    Epicycloid {
        p: u32,
        q: u32,
        radius: f64,
        dots: usize,
    },
    Hypocycloid {
        p: u32,
        q: u32,
        radius: f64,
        dots: usize,
    },
    CurvedPolygon {
        size: f64,
        dots: usize,
        vertices: u32,
    },
    Lissajous {
        a: f64,
        b: f64,
        radius: f64,
        dots: usize,
    },
    Waveform {
        amplitude: f64,
        width: f64,
        period: f64,
        dots: usize,
    },
    Parabola {
        width: f64,
        height: f64,
        dots: usize,
    },
    Spring {
        radius: f64,
        dots: usize,
        turns: u32,
    },
    Heart {
        size: f64,
        dots: usize,
    },
    Butterfly {
        size: f64,
        dots: usize,
    },
    Moon {
        size: f64,
        dots: usize,
        breadth: f64,
    },
    Yinyang {
        size: f64,
        dots: usize,
    },
    Boomerang {
        size: f64,
        dots: usize,
        wings: u32,
    },
    Cotton {
        size: f64,
        dots: usize,
        clumps: u32,
    },
    FlowerA {
        size: f64,
        petals: u32,
        dots: usize,
    },
    FlowerB {
        size: f64,
        petals: u32,
        dots: usize,
    },
    FlowerC {
        size: f64,
        petals: u32,
        dots: usize,
    },
    FlowerD {
        size: f64,
        petals: u32,
        dots: usize,
    },
    RoundedCross {
        size: f64,
        dots: usize,
    },
    SharpCross {
        size: f64,
        dots: usize,
    },
    Crossroad {
        size: f64,
        dots: usize,
        arms: u32,
        #[serde(default = "default_width_rate")]
        width_rate: f64,
    },
    Windmill {
        size: f64,
        dots: usize,
        blades: u32,
        wheel: Option<f64>,
    },
    Pinwheel {
        size: f64,
        dots: usize,
        blades: u32,
        wheel: Option<f64>,
    },
    Shuriken {
        long_side: f64,
        short_side: f64,
        dots: usize,
    },
    PointCloud {
        points: Vec<[f64; 2]>,
    },
    Dot {
        x: f64,
        y: f64,
    },
    Grid {
        height: f64,
        width: f64,
        rows: usize,
        cols: usize,
    },
}

fn default_width_rate() -> f64 {
    1.0
}

/// Spiral radius law names for spec files.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpiralKindSpec {
    #[default]
    Archimedean,
    Hyperbolic,
    Fermat,
    Lituus,
    Logarithmic,
}

impl ShapeSpec {
    /// Build the figure this spec describes.
    ///
    /// # Errors
    /// Whatever the underlying shape constructor rejects.
    #[allow(clippy::too_many_lines)]
    pub fn build(&self) -> Result<Figure, ParamError> {
        let figure = match self {
            Self::Circle { radius, dots } => Circle::new(*radius, *dots)?.build(),
            Self::Arc {
                radius,
                dots,
                angle,
            } => Arc::new(*radius, *dots, angle.to_radians())?.build(),
            Self::Ellipse {
                height,
                width,
                dots,
            } => Ellipse::new(*height, *width, *dots)?.build(),
            Self::Polygon { vertices } => {
                Polygon::new(vertices.iter().map(|&[x, y]| Point::new(x, y)).collect())?.build()
            }
            Self::Segment {
                dots,
                length,
                slope,
            } => Segment::new(*dots, *length, slope.to_radians())?.build(),
            Self::SegmentBetween { dots, from, to } => Segment::between(
                *dots,
                Point::new(from[0], from[1]),
                Point::new(to[0], to[1]),
            )?
            .build(),
            Self::RegularPolygon {
                side,
                dots,
                vertices,
            } => RegularPolygon::new(*side, *dots, *vertices)?.build(),
            Self::Parallelogram {
                height,
                width,
                y_dots,
                x_dots,
                angle,
            } => Parallelogram::new(*height, *width, *y_dots, *x_dots, angle.to_radians())?.build(),
            Self::Rhombus {
                height,
                width,
                dots,
            } => Rhombus::new(*height, *width, *dots)?.build(),
            Self::Trapezoid {
                height,
                width_top,
                width_bottom,
                dots,
                shift,
            } => {
                let trapezoid = Trapezoid::new(*height, *width_top, *width_bottom, *dots)?;
                match shift {
                    Some(shift) => trapezoid.shifted(*shift).build(),
                    None => trapezoid.build(),
                }
            }
            Self::RightTrapezoid {
                height,
                width_top,
                width_bottom,
                dots,
            } => Trapezoid::right(*height, *width_top, *width_bottom, *dots)?.build(),
            Self::Rectangle {
                height,
                width,
                x_dots,
                y_dots,
            } => Rectangle::with_dots(*height, *width, *x_dots, *y_dots)?.build(),
            Self::Kite { a, b, dots } => Kite::new(*a, *b, *dots)?.build(),
            Self::ConcaveStar {
                size,
                dots,
                vertices,
            } => ConcaveStar::new(*size, *dots, *vertices)?.build(),
            Self::Star {
                size,
                dots,
                vertices,
            } => Star::new(*size, *dots, *vertices)?.build(),
            Self::PolygonTile {
                size,
                dots,
                vertices,
            } => PolygonTile::new(*size, *dots, *vertices)?.build(),
            Self::Spiral {
                radius,
                dots,
                angle,
                kind,
            } => {
                let angle = angle.to_radians();
                match kind {
                    SpiralKindSpec::Archimedean => Spiral::archimedean(*radius, *dots, angle),
                    SpiralKindSpec::Hyperbolic => Spiral::hyperbolic(*radius, *dots, angle),
                    SpiralKindSpec::Fermat => Spiral::fermat(*radius, *dots, angle),
                    SpiralKindSpec::Lituus => Spiral::lituus(*radius, *dots, angle),
                    SpiralKindSpec::Logarithmic => Spiral::logarithmic(*radius, *dots, angle),
                }?
                .build()
            }
            Self::Cycloid {
                radius,
                dots,
                angle,
            } => Cycloid::new(*radius, *dots, angle.to_radians())?.build(),
            Self::Epicycloid { p, q, radius, dots } => {
                Epicycloid::new(*p, *q, *radius, *dots)?.build()
            }
            Self::Hypocycloid { p, q, radius, dots } => {
                Hypocycloid::new(*p, *q, *radius, *dots)?.build()
            }
            Self::CurvedPolygon {
                size,
                dots,
                vertices,
            } => Hypocycloid::curved_polygon(*size, *dots, *vertices)?.build(),
            Self::Lissajous { a, b, radius, dots } => Lissajous::new(*a, *b, *radius, *dots)?.build(),
            Self::Waveform {
                amplitude,
                width,
                period,
                dots,
            } => Waveform::new(*amplitude, *width, *period, *dots)?.build(),
            Self::Parabola {
                width,
                height,
                dots,
            } => Parabola::new(*width, *height, *dots)?.build(),
            Self::Spring {
                radius,
                dots,
                turns,
            } => Spring::new(*radius, *dots, *turns)?.build(),
            Self::Heart { size, dots } => Heart::new(*size, *dots)?.build(),
            Self::Butterfly { size, dots } => Butterfly::new(*size, *dots)?.build(),
            Self::Moon {
                size,
                dots,
                breadth,
            } => Moon::new(*size, *dots, *breadth)?.build(),
            Self::Yinyang { size, dots } => Yinyang::new(*size, *dots)?.build(),
            Self::Boomerang { size, dots, wings } => Boomerang::new(*size, *dots, *wings)?.build(),
            Self::Cotton { size, dots, clumps } => Cotton::new(*size, *dots, *clumps)?.build(),
            Self::FlowerA { size, petals, dots } => FlowerA::new(*size, *petals, *dots)?.build(),
            Self::FlowerB { size, petals, dots } => FlowerB::new(*size, *petals, *dots)?.build(),
            Self::FlowerC { size, petals, dots } => FlowerC::new(*size, *petals, *dots)?.build(),
            Self::FlowerD { size, petals, dots } => FlowerD::new(*size, *dots, *petals)?.build(),
            Self::RoundedCross { size, dots } => RoundedCross::new(*size, *dots)?.build(),
            Self::SharpCross { size, dots } => SharpCross::new(*size, *dots)?.build(),
            Self::Crossroad {
                size,
                dots,
                arms,
                width_rate,
            } => Crossroad::new(*size, *dots, *arms, *width_rate)?.build(),
            Self::Windmill {
                size,
                dots,
                blades,
                wheel,
            } => match wheel {
                Some(wheel) => Windmill::with_wheel(*size, *dots, *blades, *wheel),
                None => Windmill::new(*size, *dots, *blades),
            }?
            .build(),
            Self::Pinwheel {
                size,
                dots,
                blades,
                wheel,
            } => match wheel {
                Some(wheel) => Pinwheel::with_wheel(*size, *dots, *blades, *wheel),
                None => Pinwheel::new(*size, *dots, *blades),
            }?
            .build(),
            Self::Shuriken {
                long_side,
                short_side,
                dots,
            } => Shuriken::new(*long_side, *short_side, *dots)?.build(),
            Self::PointCloud { points } => {
                PointCloud::new(points.iter().map(|&[x, y]| Point::new(x, y)).collect())?.build()
            }
            Self::Dot { x, y } => Dot::new(*x, *y).build(),
            Self::Grid {
                height,
                width,
                rows,
                cols,
            } => Grid::with_dots(*height, *width, *rows, *cols)?.build(),
        };

        Ok(figure)
    }
}

/// One step of a figure's transform pipeline.
#[derive(Debug, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum TransformSpec {
    Translate {
        #[serde(default)]
        dx: f64,
        #[serde(default)]
        dy: f64,
    },
    Scale {
        factor: f64,
    },
    ScaleXy {
        sx: f64,
        sy: f64,
    },
    /// Degrees, counterclockwise.
    Rotate {
        degrees: f64,
    },
    RotateX {
        degrees: f64,
    },
    RotateY {
        degrees: f64,
    },
    Rotate3d {
        yaw: f64,
        pitch: f64,
        roll: f64,
    },
    Skew {
        #[serde(default)]
        x: f64,
        #[serde(default)]
        y: f64,
    },
    Flip {
        axis: AxisSpec,
    },
    FlipPoint {
        x: f64,
        y: f64,
    },
    Reflect {
        axis: AxisSpec,
    },
    ReflectPoint {
        x: f64,
        y: f64,
    },
    Matrix {
        m: [[f64; 2]; 2],
    },
    Distort {
        lens: LensSpec,
        #[serde(default = "default_rate")]
        rate: f64,
    },
    Focus {
        x: f64,
        y: f64,
        #[serde(default = "default_rate")]
        rate: f64,
    },
    Shatter {
        x: f64,
        y: f64,
        #[serde(default = "default_rate")]
        rate: f64,
    },
}

fn default_rate() -> f64 {
    0.5
}

/// Mirror axis names for spec files.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisSpec {
    X,
    Y,
    Origin,
    Diagonal,
}

/// Lens names for spec files.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LensSpec {
    Barrel,
    Pincushion,
}

impl TransformSpec {
    /// Apply this step to a figure.
    ///
    /// # Errors
    /// Distortion parameters may be rejected.
    pub fn apply(&self, figure: &mut Figure) -> Result<(), ParamError> {
        match self {
            Self::Translate { dx, dy } => {
                figure.translate(*dx, *dy);
            }
            Self::Scale { factor } => {
                figure.scale(*factor);
            }
            Self::ScaleXy { sx, sy } => {
                figure.scale_xy(*sx, *sy);
            }
            Self::Rotate { degrees } => {
                figure.rotate(degrees.to_radians());
            }
            Self::RotateX { degrees } => {
                figure.rotate_x(degrees.to_radians());
            }
            Self::RotateY { degrees } => {
                figure.rotate_y(degrees.to_radians());
            }
            Self::Rotate3d { yaw, pitch, roll } => {
                figure.rotate_3d(yaw.to_radians(), pitch.to_radians(), roll.to_radians());
            }
            Self::Skew { x, y } => {
                figure.skew(x.to_radians(), y.to_radians());
            }
            Self::Flip { axis } => {
                match axis {
                    AxisSpec::X => figure.flip_x(),
                    AxisSpec::Y => figure.flip_y(),
                    AxisSpec::Origin => figure.flip_origin(),
                    AxisSpec::Diagonal => figure.flip_diagonal(),
                };
            }
            Self::FlipPoint { x, y } => {
                figure.flip(Point::new(*x, *y));
            }
            Self::Reflect { axis } => {
                match axis {
                    AxisSpec::X => figure.reflect_x(),
                    AxisSpec::Y => figure.reflect_y(),
                    AxisSpec::Origin => figure.reflect_origin(),
                    AxisSpec::Diagonal => figure.reflect_diagonal(),
                };
            }
            Self::ReflectPoint { x, y } => {
                figure.reflect(Point::new(*x, *y));
            }
            Self::Matrix { m } => {
                figure.apply(*m);
            }
            Self::Distort { lens, rate } => {
                let lens = match lens {
                    LensSpec::Barrel => Lens::Barrel,
                    LensSpec::Pincushion => Lens::Pincushion,
                };
                figure.distort(lens, *rate)?;
            }
            Self::Focus { x, y, rate } => {
                figure.focus(Point::new(*x, *y), *rate);
            }
            Self::Shatter { x, y, rate } => {
                figure.shatter(Point::new(*x, *y), *rate);
            }
        }

        Ok(())
    }
}

/// Draw options as they appear in spec files.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DrawSpec {
    pub color: Option<String>,
    pub dot_size: Option<f64>,
    #[serde(default)]
    pub marker: Marker,
    #[serde(default)]
    pub fill: bool,
    #[serde(default)]
    pub show_edges: bool,
    #[serde(default)]
    pub show_radius: bool,
    #[serde(default)]
    pub show_size: bool,
    #[serde(default)]
    pub show_center: bool,
    #[serde(default)]
    pub show_area: bool,
    #[serde(default)]
    pub show_class: bool,
    #[serde(default)]
    pub zorder: i32,
}

impl DrawSpec {
    fn to_options(&self) -> DrawOptions {
        let defaults = DrawOptions::default();

        DrawOptions {
            color: self.color.clone(),
            dot_size: self.dot_size.unwrap_or(defaults.dot_size),
            marker: self.marker,
            fill: self.fill,
            show_edges: self.show_edges,
            show_radius: self.show_radius,
            show_size: self.show_size,
            show_center: self.show_center,
            show_area: self.show_area,
            show_class: self.show_class,
            zorder: self.zorder,
        }
    }
}

/// An error encountered while turning a spec into a canvas.
#[derive(Debug)]
pub enum BuildError {
    /// A shape or transform parameter was rejected.
    Param(ParamError),
    /// The canvas setup was rejected.
    Canvas(CanvasError),
    /// A line spec must give either `to` or `slope`, not both.
    AmbiguousLine,
}

impl Display for BuildError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Param(e) => write!(f, "{e}"),
            Self::Canvas(e) => write!(f, "{e}"),
            Self::AmbiguousLine => {
                write!(f, "a line needs exactly one of `to` or `slope`")
            }
        }
    }
}

impl std::error::Error for BuildError {}

impl From<ParamError> for BuildError {
    fn from(e: ParamError) -> Self {
        Self::Param(e)
    }
}

impl From<CanvasError> for BuildError {
    fn from(e: CanvasError) -> Self {
        Self::Canvas(e)
    }
}

impl SceneSpec {
    /// Build every figure, apply its transforms, and assemble the canvas.
    ///
    /// `theme` overrides the spec's own theme when given.
    ///
    /// # Errors
    /// Any shape, transform or canvas parameter may be rejected.
    pub fn to_canvas(
        &self,
        width: f64,
        height: f64,
        theme: Option<&str>,
    ) -> Result<Canvas, BuildError> {
        let mut options = CanvasOptions {
            width,
            height,
            ..CanvasOptions::default()
        };

        if let Some(theme) = theme.or(self.theme.as_deref()) {
            options.theme = theme.to_string();
        }
        if let Some(scale) = self.scale {
            options.scale = scale;
        }
        if let Some(grid) = self.grid {
            options.draw_grid = grid;
        }

        let mut canvas = Canvas::new(options)?;

        for spec in &self.figures {
            let mut figure = spec.shape.build()?;
            for transform in &spec.transforms {
                transform.apply(&mut figure)?;
            }
            canvas.add(figure, spec.draw.to_options());
        }

        for spec in &self.lines {
            let anchor = Point::new(spec.point[0], spec.point[1]);
            let line = match (spec.to, spec.slope) {
                (Some(to), None) => Line::through(anchor, Point::new(to[0], to[1]))?,
                (None, Some(slope)) => Line::with_slope(anchor, slope),
                _ => return Err(BuildError::AmbiguousLine),
            };

            canvas.add_line(
                line,
                LineOptions {
                    color: spec.color.clone(),
                    width: spec.width,
                    style: spec.style,
                    zorder: spec.zorder,
                },
            );
        }

        Ok(canvas)
    }
}

#[cfg(test)]
mod tests {
    use super::{SceneSpec, ShapeSpec, TransformSpec};
    use stipple_geom::Point;

    #[test]
    fn a_minimal_spec_parses_and_builds() {
        let spec: SceneSpec = serde_json::from_str(
            r#"{
                "figures": [
                    {"shape": "circle", "radius": 3.0, "dots": 32}
                ]
            }"#,
        )
        .unwrap();

        let canvas = spec.to_canvas(500.0, 500.0, None).unwrap();
        assert_eq!(canvas.len(), 1);
    }

    #[test]
    fn transforms_apply_in_listed_order() {
        let spec: ShapeSpec = serde_json::from_str(
            r#"{"shape": "dot", "x": 1.0, "y": 0.0}"#,
        )
        .unwrap();
        let transforms: Vec<TransformSpec> = serde_json::from_str(
            r#"[
                {"op": "rotate", "degrees": 90},
                {"op": "translate", "dx": 1.0}
            ]"#,
        )
        .unwrap();

        let mut figure = spec.build().unwrap();
        for t in &transforms {
            t.apply(&mut figure).unwrap();
        }

        assert!(figure.points()[0].dist(Point::new(1.0, 1.0)) < 1e-9);
    }

    #[test]
    fn every_shape_arm_parses_and_builds() {
        let arms = [
            r#"{"shape": "circle", "radius": 3.0, "dots": 32}"#,
            r#"{"shape": "arc", "radius": 3.0, "dots": 16, "angle": 90.0}"#,
            r#"{"shape": "ellipse", "height": 2.0, "width": 4.0, "dots": 32}"#,
            r#"{"shape": "polygon", "vertices": [[0.0, 0.0], [1.0, 0.0], [0.5, 1.0]]}"#,
            r#"{"shape": "segment", "dots": 5, "length": 4.0, "slope": 30.0}"#,
            r#"{"shape": "segment_between", "dots": 5, "from": [0.0, 0.0], "to": [2.0, 2.0]}"#,
            r#"{"shape": "regular_polygon", "side": 2.0, "dots": 4, "vertices": 5}"#,
            r#"{"shape": "parallelogram", "height": 2.0, "width": 4.0, "y_dots": 3, "x_dots": 4, "angle": 60.0}"#,
            r#"{"shape": "rhombus", "height": 4.0, "width": 2.0, "dots": 4}"#,
            r#"{"shape": "trapezoid", "height": 2.0, "width_top": 2.0, "width_bottom": 4.0, "dots": 3}"#,
            r#"{"shape": "right_trapezoid", "height": 2.0, "width_top": 4.0, "width_bottom": 2.0, "dots": 3}"#,
            r#"{"shape": "rectangle", "height": 2.0, "width": 4.0, "x_dots": 4, "y_dots": 3}"#,
            r#"{"shape": "kite", "a": 3.0, "b": 4.0, "dots": 4}"#,
            r#"{"shape": "concave_star", "size": 4.0, "dots": 3, "vertices": 5}"#,
            r#"{"shape": "star", "size": 4.0, "dots": 3, "vertices": 5}"#,
            r#"{"shape": "polygon_tile", "size": 4.0, "dots": 3, "vertices": 4}"#,
            r#"{"shape": "spiral", "radius": 3.0, "dots": 32, "angle": 720.0}"#,
            r#"{"shape": "spiral", "radius": 3.0, "dots": 32, "angle": 720.0, "kind": "logarithmic"}"#,
            r#"{"shape": "cycloid", "radius": 2.0, "dots": 24, "angle": 360.0}"#,
            r#"{"shape": "epicycloid", "p": 5, "q": 1, "radius": 2.0, "dots": 64}"#,
            r#"{"shape": "hypocycloid", "p": 5, "q": 1, "radius": 2.0, "dots": 64}"#,
            r#"{"shape": "curved_polygon", "size": 2.0, "dots": 64, "vertices": 3}"#,
            r#"{"shape": "lissajous", "a": 3.0, "b": 2.0, "radius": 2.0, "dots": 64}"#,
            r#"{"shape": "waveform", "amplitude": 1.0, "width": 8.0, "period": 2.0, "dots": 32}"#,
            r#"{"shape": "parabola", "width": 4.0, "height": 2.0, "dots": 16}"#,
            r#"{"shape": "spring", "radius": 1.0, "dots": 48, "turns": 3}"#,
            r#"{"shape": "heart", "size": 3.0, "dots": 64}"#,
            r#"{"shape": "butterfly", "size": 3.0, "dots": 64}"#,
            r#"{"shape": "moon", "size": 3.0, "dots": 48, "breadth": 0.5}"#,
            r#"{"shape": "yinyang", "size": 3.0, "dots": 90}"#,
            r#"{"shape": "boomerang", "size": 3.0, "dots": 48, "wings": 3}"#,
            r#"{"shape": "cotton", "size": 3.0, "dots": 48, "clumps": 6}"#,
            r#"{"shape": "flower_a", "size": 3.0, "petals": 6, "dots": 48}"#,
            r#"{"shape": "flower_b", "size": 3.0, "petals": 5, "dots": 9}"#,
            r#"{"shape": "flower_c", "size": 3.0, "petals": 5, "dots": 64}"#,
            r#"{"shape": "flower_d", "size": 3.0, "petals": 5, "dots": 8}"#,
            r#"{"shape": "rounded_cross", "size": 2.0, "dots": 64}"#,
            r#"{"shape": "sharp_cross", "size": 2.0, "dots": 64}"#,
            r#"{"shape": "crossroad", "size": 4.0, "dots": 6, "arms": 6}"#,
            r#"{"shape": "windmill", "size": 4.0, "dots": 6, "blades": 6}"#,
            r#"{"shape": "pinwheel", "size": 4.0, "dots": 6, "blades": 6, "wheel": 1.5}"#,
            r#"{"shape": "shuriken", "long_side": 3.0, "short_side": 1.5, "dots": 6}"#,
            r#"{"shape": "point_cloud", "points": [[0.0, 0.0], [1.0, 2.0]]}"#,
            r#"{"shape": "dot", "x": 1.0, "y": 2.0}"#,
            r#"{"shape": "grid", "height": 2.0, "width": 4.0, "rows": 3, "cols": 5}"#,
        ];

        for arm in arms {
            let spec: ShapeSpec = serde_json::from_str(arm).unwrap();
            let figure = spec.build().unwrap_or_else(|e| panic!("{arm}: {e}"));
            assert!(!figure.is_empty(), "{arm} built an empty figure");
        }
    }

    #[test]
    fn unknown_shapes_are_rejected() {
        let parsed: Result<ShapeSpec, _> =
            serde_json::from_str(r#"{"shape": "dodecahedron", "size": 1.0}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn bad_parameters_surface_as_errors() {
        let spec: SceneSpec = serde_json::from_str(
            r#"{
                "figures": [
                    {"shape": "regular_polygon", "side": 2.0, "dots": 8, "vertices": 2}
                ]
            }"#,
        )
        .unwrap();

        assert!(spec.to_canvas(500.0, 500.0, None).is_err());
    }

    #[test]
    fn lines_need_exactly_one_form() {
        let spec: SceneSpec = serde_json::from_str(
            r#"{
                "figures": [{"shape": "dot", "x": 0.0, "y": 0.0}],
                "lines": [{"point": [0.0, 0.0], "to": [1.0, 1.0], "slope": 2.0}]
            }"#,
        )
        .unwrap();

        assert!(spec.to_canvas(500.0, 500.0, None).is_err());
    }

    #[test]
    fn draw_flags_round_trip() {
        let spec: SceneSpec = serde_json::from_str(
            r#"{
                "theme": "gruvbox",
                "figures": [
                    {
                        "shape": "heart", "size": 3.0, "dots": 64,
                        "draw": {"fill": true, "show_area": true, "marker": "diamond"}
                    }
                ]
            }"#,
        )
        .unwrap();

        let canvas = spec.to_canvas(400.0, 400.0, None).unwrap();
        assert_eq!(canvas.theme().name, "gruvbox");
    }

    #[test]
    fn cli_theme_override_wins() {
        let spec: SceneSpec = serde_json::from_str(
            r#"{
                "theme": "gruvbox",
                "figures": [{"shape": "dot", "x": 0.0, "y": 0.0}]
            }"#,
        )
        .unwrap();

        let canvas = spec.to_canvas(400.0, 400.0, Some("rose")).unwrap();
        assert_eq!(canvas.theme().name, "rose");
    }
}
