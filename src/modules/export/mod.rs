//! Export Bezier curves and demo scenes to various formats
//!
//! # Available Export Formats
//!
//! - [SVG path data](svg_path/index.html) - curves and polylines as `d` attributes
//! - [Plots](plot/index.html) - whole scenes rendered to SVG or PNG with plotters

pub mod plot;
pub mod svg_path;
