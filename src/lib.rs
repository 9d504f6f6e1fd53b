//! stipple builds parametric dot-figure geometry and renders it through a
//! canvas onto SVG, JSON or plaintext. This crate is the front end: it
//! re-exports the member crates and defines the JSON figure-spec format the
//! CLI consumes. The member crates can be used directly for programmatic
//! drawing.

#![warn(clippy::pedantic)]

pub mod spec;

pub use stipple_canvas as canvas;
pub use stipple_figure as figure;
pub use stipple_geom as geom;
pub use stipple_json as json;
pub use stipple_plaintext as plaintext;
pub use stipple_svg as svg;
