//! The canvas facade: collects figures together with their display options,
//! lays out a view box, and projects everything into a renderer-independent
//! [`Scene`] for the format writers.

#![warn(clippy::pedantic)]

use std::fmt::{Display, Formatter};

use stipple_figure::{
    Anchor, DotsItem, Item, LineStyle, Marker, PolygonItem, PolylineItem, Position, Scene,
    TextItem,
};
use stipple_geom::shape::line::Line;
use stipple_geom::{Bounds, Figure, Outline, Point};

pub mod layout;
pub mod theme;

use layout::{tick_label, Layout};
pub use theme::Theme;

/// Grid lines sit below everything; annotations float above everything.
const GRID_Z: i32 = i32::MIN;
const ANNOTATION_Z: i32 = i32::MAX;
const GRID_COLOR: &str = "#BDBDBD";

/// Canvas-wide settings.
#[derive(Debug, Clone)]
pub struct CanvasOptions {
    /// Name of the color theme.
    pub theme: String,
    /// Scene width in scene units.
    pub width: f64,
    /// Scene height in scene units.
    pub height: f64,
    /// Extra scaling of the view box around the figures.
    pub scale: f64,
    /// Draw the grid and tick labels at all.
    pub draw_grid: bool,
    /// Draw major grid lines and their labels.
    pub major_ticks: bool,
    /// Draw minor grid lines.
    pub minor_ticks: bool,
    /// Tick label font size.
    pub font_size: f64,
}

impl Default for CanvasOptions {
    fn default() -> Self {
        Self {
            theme: "light".to_string(),
            width: 500.0,
            height: 500.0,
            scale: 1.0,
            draw_grid: true,
            major_ticks: true,
            minor_ticks: true,
            font_size: 10.0,
        }
    }
}

/// Per-figure display options.
#[derive(Debug, Clone)]
pub struct DrawOptions {
    /// Dot color; taken from the theme's cycle when absent.
    pub color: Option<String>,
    /// Dot marker radius in scene units.
    pub dot_size: f64,
    /// Dot marker glyph.
    pub marker: Marker,
    /// Fill the interior of the figure.
    pub fill: bool,
    /// Draw the outline path enclosing the figure.
    pub show_edges: bool,
    /// Draw a radius vector and its length.
    pub show_radius: bool,
    /// Draw dimension brackets with width and height.
    pub show_size: bool,
    /// Mark the centroid and print its coordinates.
    pub show_center: bool,
    /// Print the enclosed area.
    pub show_area: bool,
    /// Print the shape-family name above the figure.
    pub show_class: bool,
    /// Stacking order; larger values draw later.
    pub zorder: i32,
}

impl Default for DrawOptions {
    fn default() -> Self {
        Self {
            color: None,
            dot_size: 2.5,
            marker: Marker::Circle,
            fill: false,
            show_edges: false,
            show_radius: false,
            show_size: false,
            show_center: false,
            show_area: false,
            show_class: false,
            zorder: 0,
        }
    }
}

/// Display options for an infinite line.
#[derive(Debug, Clone)]
pub struct LineOptions {
    /// Line color; taken from the theme's cycle when absent.
    pub color: Option<String>,
    pub width: f64,
    pub style: LineStyle,
    /// Stacking order; larger values draw later.
    pub zorder: i32,
}

impl Default for LineOptions {
    fn default() -> Self {
        Self {
            color: None,
            width: 2.0,
            style: LineStyle::Solid,
            zorder: 1,
        }
    }
}

/// Errors raised while assembling or projecting a canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanvasError {
    /// The requested theme name is not known.
    UnknownTheme(String),
    /// Nothing has been added to the canvas.
    Empty,
}

impl Display for CanvasError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownTheme(name) => write!(f, "no canvas theme named `{name}`"),
            Self::Empty => write!(f, "nothing to plot"),
        }
    }
}

impl std::error::Error for CanvasError {}

#[derive(Debug)]
enum Entry {
    Figure {
        figure: Figure,
        options: DrawOptions,
        color: String,
    },
    Line {
        line: Line,
        options: LineOptions,
        color: String,
    },
}

/// A canvas holding figures waiting to be projected.
#[derive(Debug)]
pub struct Canvas {
    options: CanvasOptions,
    theme: &'static Theme,
    entries: Vec<Entry>,
    cycle_at: usize,
}

impl Canvas {
    /// # Errors
    /// The theme name must be one of the built-in themes.
    pub fn new(options: CanvasOptions) -> Result<Self, CanvasError> {
        let theme = Theme::named(&options.theme)
            .ok_or_else(|| CanvasError::UnknownTheme(options.theme.clone()))?;

        Ok(Self {
            options,
            theme,
            entries: Vec::new(),
            cycle_at: 0,
        })
    }

    #[must_use]
    pub fn theme(&self) -> &'static Theme {
        self.theme
    }

    fn next_color(&mut self) -> String {
        let color = self.theme.cycle[self.cycle_at % self.theme.cycle.len()];
        self.cycle_at += 1;
        color.to_string()
    }

    /// Queue a figure for drawing.
    pub fn add(&mut self, figure: Figure, options: DrawOptions) {
        let color = match &options.color {
            Some(c) => c.clone(),
            None if figure.len() == 1 => self.theme.dot.to_string(),
            None => self.next_color(),
        };

        self.entries.push(Entry::Figure {
            figure,
            options,
            color,
        });
    }

    /// Queue an infinite line for drawing.
    pub fn add_line(&mut self, line: Line, options: LineOptions) {
        let color = match &options.color {
            Some(c) => c.clone(),
            None => self.next_color(),
        };

        self.entries.push(Entry::Line {
            line,
            options,
            color,
        });
    }

    /// Drop the entry at `index`. Returns whether anything was removed.
    pub fn remove(&mut self, index: usize) -> bool {
        if index < self.entries.len() {
            self.entries.remove(index);
            true
        } else {
            eprintln!("[WARN] Canvas: no entry at index {index}");
            false
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// World bounds across all entries. Infinite lines contribute their
    /// anchor point only.
    fn world_bounds(&self) -> Option<Bounds> {
        let mut bounds: Option<Bounds> = None;

        for entry in &self.entries {
            let entry_bounds = match entry {
                Entry::Figure { figure, .. } => figure.bounds(),
                Entry::Line { line, .. } => Bounds::of(&[line.anchor()]),
            };

            if let Some(eb) = entry_bounds {
                match &mut bounds {
                    Some(b) => {
                        b.include(Point::new(eb.min_x, eb.min_y));
                        b.include(Point::new(eb.max_x, eb.max_y));
                    }
                    None => bounds = Some(eb),
                }
            }
        }

        bounds
    }

    /// Lay out and project everything into a scene.
    ///
    /// # Errors
    /// The canvas must contain at least one entry.
    pub fn project(&self) -> Result<Scene, CanvasError> {
        let bounds = self.world_bounds().ok_or(CanvasError::Empty)?;
        let layout = Layout::fit(
            &bounds,
            self.options.scale,
            self.options.width,
            self.options.height,
        );

        let mut scene = Scene::new(
            self.options.width,
            self.options.height,
            self.theme.face.to_string(),
        );

        // Items are gathered with a z value, then stably sorted so equal
        // z keeps insertion order.
        let mut stacked: Vec<(i32, Item)> = Vec::new();

        if self.options.draw_grid {
            self.grid_items(&layout, &mut stacked);
        }

        for entry in &self.entries {
            match entry {
                Entry::Figure {
                    figure,
                    options,
                    color,
                } => self.figure_items(figure, options, color, &layout, &mut stacked),
                Entry::Line {
                    line,
                    options,
                    color,
                } => Self::line_items(line, options, color, &layout, &mut stacked),
            }
        }

        stacked.sort_by_key(|(z, _)| *z);
        scene.items = stacked.into_iter().map(|(_, item)| item).collect();

        Ok(scene)
    }

    fn grid_line(stacked: &mut Vec<(i32, Item)>, a: Position, b: Position) {
        stacked.push((
            GRID_Z,
            Item::Polyline(PolylineItem {
                points: vec![a, b],
                width: 1.0,
                color: GRID_COLOR.to_string(),
                style: LineStyle::Dashed,
            }),
        ));
    }

    fn tick_text(&self, position: Position, value: f64, anchor: Anchor) -> (i32, Item) {
        (
            GRID_Z,
            Item::Text(TextItem {
                position,
                content: tick_label(value),
                size: self.options.font_size,
                color: self.theme.tick.to_string(),
                anchor,
                bold: false,
            }),
        )
    }

    fn grid_items(&self, layout: &Layout, stacked: &mut Vec<(i32, Item)>) {
        if self.options.minor_ticks {
            for x in layout.minor_x() {
                Self::grid_line(
                    stacked,
                    layout.project(Point::new(x, layout.bottom())),
                    layout.project(Point::new(x, layout.top())),
                );
            }
            for y in layout.minor_y() {
                Self::grid_line(
                    stacked,
                    layout.project(Point::new(layout.left(), y)),
                    layout.project(Point::new(layout.right(), y)),
                );
            }
        }

        if self.options.major_ticks {
            for x in layout.major_x() {
                Self::grid_line(
                    stacked,
                    layout.project(Point::new(x, layout.bottom())),
                    layout.project(Point::new(x, layout.top())),
                );

                let mut at = layout.project(Point::new(x, layout.bottom()));
                at.y -= self.options.font_size / 2.0;
                stacked.push(self.tick_text(at, x, Anchor::Middle));
            }
            for y in layout.major_y() {
                Self::grid_line(
                    stacked,
                    layout.project(Point::new(layout.left(), y)),
                    layout.project(Point::new(layout.right(), y)),
                );

                let mut at = layout.project(Point::new(layout.left(), y));
                at.x += self.options.font_size / 2.0;
                stacked.push(self.tick_text(at, y, Anchor::Start));
            }
        }
    }

    #[allow(clippy::too_many_lines)]
    fn figure_items(
        &self,
        figure: &Figure,
        options: &DrawOptions,
        color: &str,
        layout: &Layout,
        stacked: &mut Vec<(i32, Item)>,
    ) {
        let z = options.zorder;
        let rings = figure.outline_rings();
        let chains = figure.outline_chains();

        let mut fill = options.fill;
        if fill && !figure.planar() {
            eprintln!(
                "[WARN] Canvas: `{}` does not support filling its interior",
                figure.kind()
            );
            fill = false;
        }

        let mut show_area = options.show_area;
        if show_area && figure.area().is_none() {
            eprintln!(
                "[WARN] Canvas: `{}` does not support displaying its area",
                figure.kind()
            );
            show_area = false;
        }

        let mut show_edges = options.show_edges;
        if show_edges && rings.is_none() && chains.is_none() {
            eprintln!(
                "[WARN] Canvas: `{}` does not support drawing edges",
                figure.kind()
            );
            show_edges = false;
        }

        // Interior fill sits below the outline, which sits below the dots.
        if fill {
            if let Some((outers, inners)) = &rings {
                for ring in outers {
                    stacked.push((z, Self::polygon(ring, layout, color.to_string(), 1.0)));
                }
                for ring in inners {
                    stacked.push((
                        z,
                        Self::polygon(ring, layout, self.theme.face.to_string(), 1.0),
                    ));
                }
            }
        }

        if show_edges || show_area {
            let edge_color = self.theme.edge.to_string();

            if let Some((outers, inners)) = &rings {
                for ring in outers.iter().chain(inners) {
                    let mut points: Vec<Position> =
                        ring.iter().map(|&p| layout.project(p)).collect();
                    if let Some(&first) = points.first() {
                        points.push(first);
                    }
                    stacked.push((
                        z,
                        Item::Polyline(PolylineItem {
                            points,
                            width: 1.0,
                            color: edge_color.clone(),
                            style: LineStyle::Solid,
                        }),
                    ));
                }
            } else if let Some(chains) = &chains {
                for chain in chains {
                    stacked.push((
                        z,
                        Item::Polyline(PolylineItem {
                            points: chain.iter().map(|&p| layout.project(p)).collect(),
                            width: 1.0,
                            color: edge_color.clone(),
                            style: LineStyle::Solid,
                        }),
                    ));
                }
            }
        }

        stacked.push((
            z,
            Item::Dots(DotsItem {
                positions: figure.points().iter().map(|&p| layout.project(p)).collect(),
                size: options.dot_size,
                color: color.to_string(),
                marker: options.marker,
            }),
        ));

        let Some(figure_bounds) = figure.bounds() else {
            return;
        };
        let Some(center) = figure.center() else {
            return;
        };
        let span = layout.span;

        if options.show_center {
            stacked.push((
                ANNOTATION_Z,
                Item::Dots(DotsItem {
                    positions: vec![layout.project(center)],
                    size: options.dot_size.max(2.5),
                    color: self.theme.dot.to_string(),
                    marker: Marker::Circle,
                }),
            ));
            stacked.push((
                ANNOTATION_Z,
                self.annotation(
                    layout.project(center + Point::new(0.0, span / 25.0)),
                    format!("({:.2}, {:.2})", center.x, center.y),
                ),
            ));
        }

        if show_area {
            if let Some(area) = figure.area() {
                stacked.push((
                    ANNOTATION_Z,
                    self.annotation(
                        layout.project(center - Point::new(0.0, span / 25.0)),
                        format!("(Area = {area:.2})"),
                    ),
                ));

                if let Some((outers, _)) = &rings {
                    for ring in outers {
                        stacked.push((
                            ANNOTATION_Z,
                            Self::polygon(ring, layout, self.theme.edge.to_string(), 0.5),
                        ));
                    }
                }
            }
        }

        if options.show_radius {
            self.radius_items(figure, center, span, layout, stacked);
        }

        if options.show_size {
            self.size_items(&figure_bounds, span, layout, stacked);
        }

        if options.show_class {
            stacked.push((
                ANNOTATION_Z,
                self.annotation(
                    layout.project(Point::new(
                        center.x,
                        figure_bounds.max_y + span / 20.0,
                    )),
                    figure.kind().to_string(),
                ),
            ));
        }
    }

    /// The radius vector: centroid to the farthest dot, with its length.
    fn radius_items(
        &self,
        figure: &Figure,
        center: Point,
        span: f64,
        layout: &Layout,
        stacked: &mut Vec<(i32, Item)>,
    ) {
        let Some(farthest) = figure
            .points()
            .iter()
            .copied()
            .max_by(|a, b| a.dist(center).total_cmp(&b.dist(center)))
        else {
            return;
        };

        stacked.push((
            ANNOTATION_Z,
            Item::Polyline(PolylineItem {
                points: vec![layout.project(center), layout.project(farthest)],
                width: 1.0,
                color: self.theme.edge.to_string(),
                style: LineStyle::Solid,
            }),
        ));

        // Circle-like outlines measure a radius, everything else a
        // diameter-ish reach.
        let symbol = match figure.outline() {
            Outline::Closed { outers, .. } if outers.len() == 1 => "r",
            _ => "d",
        };

        let slope = center.gradient(farthest) + 3.0 * std::f64::consts::FRAC_PI_2;
        let mid = center.lerp(farthest, 0.5)
            + Point::new(slope.cos() * span / 10.0, slope.sin() * span / 30.0);

        stacked.push((
            ANNOTATION_Z,
            self.annotation(
                layout.project(mid),
                format!("{symbol} = {:.2}", center.dist(farthest)),
            ),
        ));
    }

    fn bracket(&self, layout: &Layout, ends: [Point; 2], stacked: &mut Vec<(i32, Item)>) {
        stacked.push((
            ANNOTATION_Z,
            Item::Polyline(PolylineItem {
                points: ends.into_iter().map(|p| layout.project(p)).collect(),
                width: 1.0,
                color: self.theme.edge.to_string(),
                style: LineStyle::Solid,
            }),
        ));
    }

    /// Dimension brackets above and to the right of the bounding box.
    fn size_items(
        &self,
        bounds: &Bounds,
        span: f64,
        layout: &Layout,
        stacked: &mut Vec<(i32, Item)>,
    ) {
        // Width bracket along the top.
        let bar_y = bounds.max_y + span / 32.0;
        self.bracket(
            layout,
            [
                Point::new(bounds.min_x - span / 128.0, bar_y),
                Point::new(bounds.max_x + span / 128.0, bar_y),
            ],
            stacked,
        );
        for x in [bounds.min_x - span / 128.0, bounds.max_x + span / 128.0] {
            self.bracket(
                layout,
                [
                    Point::new(x, bounds.max_y + span / 64.0),
                    Point::new(x, bounds.max_y + 3.0 * span / 64.0),
                ],
                stacked,
            );
        }

        // Height bracket along the right.
        let bar_x = bounds.max_x + span / 32.0;
        self.bracket(
            layout,
            [
                Point::new(bar_x, bounds.min_y - span / 128.0),
                Point::new(bar_x, bounds.max_y + span / 128.0),
            ],
            stacked,
        );
        for y in [bounds.min_y - span / 128.0, bounds.max_y + span / 128.0] {
            self.bracket(
                layout,
                [
                    Point::new(bounds.max_x + span / 64.0, y),
                    Point::new(bounds.max_x + 3.0 * span / 64.0, y),
                ],
                stacked,
            );
        }

        stacked.push((
            ANNOTATION_Z,
            self.annotation(
                layout.project(Point::new(
                    (bounds.min_x + bounds.max_x) / 2.0,
                    bounds.max_y + 3.0 * span / 64.0,
                )),
                format!("{:.2}", bounds.width()),
            ),
        ));
        stacked.push((
            ANNOTATION_Z,
            self.annotation(
                layout.project(Point::new(
                    bounds.max_x + 3.0 * span / 64.0,
                    (bounds.min_y + bounds.max_y) / 2.0,
                )),
                format!("{:.2}", bounds.height()),
            ),
        ));
    }

    fn line_items(
        line: &Line,
        options: &LineOptions,
        color: &str,
        layout: &Layout,
        stacked: &mut Vec<(i32, Item)>,
    ) {
        let Some((a, b)) = line.clip_to(&layout.view_bounds()) else {
            return;
        };

        stacked.push((
            options.zorder,
            Item::Polyline(PolylineItem {
                points: vec![layout.project(a), layout.project(b)],
                width: options.width,
                color: color.to_string(),
                style: options.style,
            }),
        ));
    }

    fn polygon(ring: &[Point], layout: &Layout, color: String, opacity: f64) -> Item {
        Item::Polygon(PolygonItem {
            points: ring.iter().map(|&p| layout.project(p)).collect(),
            color,
            opacity,
        })
    }

    fn annotation(&self, position: Position, content: String) -> Item {
        Item::Text(TextItem {
            position,
            content,
            size: self.options.font_size,
            color: self.theme.text.to_string(),
            anchor: Anchor::Middle,
            bold: true,
        })
    }
}

/// Render a single figure with default canvas settings: the one-liner
/// counterpart of building a [`Canvas`] by hand.
///
/// # Errors
/// See [`Canvas::new`] and [`Canvas::project`].
pub fn plot(figure: Figure, options: DrawOptions) -> Result<Scene, CanvasError> {
    let mut canvas = Canvas::new(CanvasOptions::default())?;
    canvas.add(figure, options);
    canvas.project()
}

#[cfg(test)]
mod tests {
    use super::{plot, Canvas, CanvasError, CanvasOptions, DrawOptions, LineOptions};
    use stipple_figure::Item;
    use stipple_geom::shape::line::Line;
    use stipple_geom::shape::polygon::Rectangle;
    use stipple_geom::shape::round::Circle;
    use stipple_geom::shape::scatter::PointCloud;
    use stipple_geom::shape::Shape;
    use stipple_geom::Point;

    fn dot_items(scene: &stipple_figure::Scene) -> usize {
        scene
            .items
            .iter()
            .filter(|i| matches!(i, Item::Dots(_)))
            .count()
    }

    #[test]
    fn unknown_theme_is_rejected() {
        let options = CanvasOptions {
            theme: "neon".to_string(),
            ..CanvasOptions::default()
        };

        assert_eq!(
            Canvas::new(options).unwrap_err(),
            CanvasError::UnknownTheme("neon".to_string())
        );
    }

    #[test]
    fn empty_canvas_cannot_project() {
        let canvas = Canvas::new(CanvasOptions::default()).unwrap();
        assert_eq!(canvas.project().unwrap_err(), CanvasError::Empty);
    }

    #[test]
    fn plot_produces_grid_and_dots() {
        let circle = Circle::new(3.0, 32).unwrap().build();
        let scene = plot(circle, DrawOptions::default()).unwrap();

        assert!(dot_items(&scene) >= 1);
        assert!(scene
            .items
            .iter()
            .any(|i| matches!(i, Item::Polyline(_))));
        // Grid comes first thanks to its z value.
        assert!(matches!(scene.items[0], Item::Polyline(_)));
    }

    #[test]
    fn fill_adds_a_polygon_under_the_dots() {
        let rect = Rectangle::new(2.0, 4.0, 4).unwrap().build();
        let scene = plot(
            rect,
            DrawOptions {
                fill: true,
                ..DrawOptions::default()
            },
        )
        .unwrap();

        let polygon_at = scene
            .items
            .iter()
            .position(|i| matches!(i, Item::Polygon(_)))
            .unwrap();
        let dots_at = scene
            .items
            .iter()
            .position(|i| matches!(i, Item::Dots(_)))
            .unwrap();

        assert!(polygon_at < dots_at);
    }

    #[test]
    fn annotations_come_last() {
        let rect = Rectangle::new(2.0, 4.0, 4).unwrap().build();
        let scene = plot(
            rect,
            DrawOptions {
                show_center: true,
                show_size: true,
                ..DrawOptions::default()
            },
        )
        .unwrap();

        let last = scene.items.last().unwrap();
        assert!(matches!(last, Item::Text(_) | Item::Dots(_) | Item::Polyline(_)));
        assert!(scene
            .items
            .iter()
            .any(|i| matches!(i, Item::Text(t) if t.content.contains("4.00"))));
    }

    #[test]
    fn point_cloud_edge_request_is_dropped() {
        let cloud = PointCloud::new(vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)])
            .unwrap()
            .build();
        let scene = plot(
            cloud,
            DrawOptions {
                show_edges: true,
                ..DrawOptions::default()
            },
        )
        .unwrap();

        // Only grid polylines: the cloud has no outline to draw.
        let edge_color_lines = scene.items.iter().any(
            |i| matches!(i, Item::Polyline(p) if p.color == super::theme::LIGHT.edge),
        );
        assert!(!edge_color_lines);
    }

    #[test]
    fn color_cycle_assigns_distinct_colors() {
        let mut canvas = Canvas::new(CanvasOptions::default()).unwrap();
        canvas.add(
            Circle::new(3.0, 16).unwrap().build(),
            DrawOptions::default(),
        );
        canvas.add(
            Circle::new(1.0, 16).unwrap().build(),
            DrawOptions::default(),
        );

        let scene = canvas.project().unwrap();
        let colors: Vec<&str> = scene
            .items
            .iter()
            .filter_map(|i| match i {
                Item::Dots(d) => Some(d.color.as_str()),
                _ => None,
            })
            .collect();

        assert_eq!(colors.len(), 2);
        assert_ne!(colors[0], colors[1]);
    }

    #[test]
    fn infinite_lines_are_clipped_into_the_scene() {
        let mut canvas = Canvas::new(CanvasOptions::default()).unwrap();
        canvas.add(
            Circle::new(2.0, 16).unwrap().build(),
            DrawOptions::default(),
        );
        canvas.add_line(
            Line::with_slope(Point::new(0.0, 0.0), 1.0),
            LineOptions::default(),
        );

        let scene = canvas.project().unwrap();
        let clipped = scene.items.iter().any(|i| match i {
            Item::Polyline(p) => {
                p.points.len() == 2
                    && p.points
                        .iter()
                        .all(|q| q.x >= -1e-9 && q.x <= scene.width + 1e-9)
            }
            _ => false,
        });

        assert!(clipped);
    }

    #[test]
    fn removing_an_entry_shrinks_the_canvas() {
        let mut canvas = Canvas::new(CanvasOptions::default()).unwrap();
        canvas.add(
            Circle::new(2.0, 16).unwrap().build(),
            DrawOptions::default(),
        );

        assert_eq!(canvas.len(), 1);
        assert!(canvas.remove(0));
        assert!(canvas.is_empty());
        assert!(!canvas.remove(3));
    }
}
