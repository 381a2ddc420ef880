//! Render demo scenes with plotters
//!
//! The 2D scene is drawn under an orthographic view that keeps the axis
//! extent visible along the shorter image side and widens the other side to
//! preserve the aspect ratio. The 3D scene is rotated by a [`ViewState`] and
//! projected onto the view plane first, then drawn the same way.
//!
//! Output goes to an SVG string, or to a file whose extension picks the
//! backend (`.png` for a bitmap, anything else for SVG).
//!
//! # Example
//!
//! ```rust
//! use bezier_curves::modules::export::plot::{render_scene_2d, PlotOptions};
//! use bezier_curves::modules::scene::Scene2;
//!
//! let options = PlotOptions { labels: false, ..PlotOptions::default() };
//! let svg = render_scene_2d(&Scene2::demo(), &options).unwrap();
//! assert!(svg.contains("<svg"));
//! ```

use crate::data::Point;
use crate::error::{BezierError, BezierResult};
use crate::modules::scene::{Axis, Primitive, Role, Scene};
use crate::modules::view::ViewState;
use log::debug;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::ops::Range;
use std::path::Path;

/// Room left around the axes so that labels and arrowheads stay inside
const VIEW_MARGIN: f64 = 0.6;

/// Image size and decorations
#[derive(Debug, Clone, PartialEq)]
pub struct PlotOptions {
    pub width: u32,
    pub height: u32,
    /// Draw axis names and other text. Bitmap output needs a system font for this.
    pub labels: bool,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            width: 500,
            height: 500,
            labels: true,
        }
    }
}

fn render_err<E: std::fmt::Display>(err: E) -> BezierError {
    BezierError::RenderError(err.to_string())
}

/// Visible x and y ranges for a square half-extent on a `width` x `height` image
pub fn view_bounds(width: u32, height: u32, extent: f64) -> (Range<f64>, Range<f64>) {
    let (w, h) = (width.max(1) as f64, height.max(1) as f64);
    if w <= h {
        let y = extent * h / w;
        (-extent..extent, -y..y)
    } else {
        let x = extent * w / h;
        (-x..x, -extent..extent)
    }
}

fn style_for(role: Role) -> ShapeStyle {
    let gray = RGBColor(128, 128, 128);
    match role {
        Role::Axis(Axis::X) => RED.stroke_width(2),
        Role::Axis(Axis::Y) => GREEN.stroke_width(2),
        Role::Axis(Axis::Z) => BLUE.stroke_width(2),
        Role::Tick | Role::DropLine | Role::ControlPolygon => gray.stroke_width(1),
        Role::Grid => RGBColor(200, 200, 200).stroke_width(1),
        Role::ControlPoint => BLUE.filled(),
        Role::Curve => RED.stroke_width(3),
        Role::Text => BLACK.stroke_width(1),
    }
}

fn coord(point: &Point) -> (f64, f64) {
    (point.x, point.y)
}

fn draw_primitives<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    primitives: &[Primitive<2>],
    extent: f64,
    options: &PlotOptions,
) -> BezierResult<()> {
    root.fill(&WHITE).map_err(render_err)?;

    let (x_range, y_range) = view_bounds(options.width, options.height, extent + VIEW_MARGIN);
    let mut chart = ChartBuilder::on(root)
        .build_cartesian_2d(x_range, y_range)
        .map_err(render_err)?;

    for primitive in primitives {
        let style = style_for(primitive.role());
        match primitive {
            Primitive::Segment { from, to, .. } => {
                chart
                    .draw_series(std::iter::once(PathElement::new(
                        vec![coord(from), coord(to)],
                        style,
                    )))
                    .map_err(render_err)?;
            }
            Primitive::Polyline { points, .. } => {
                chart
                    .draw_series(LineSeries::new(points.iter().map(coord), style))
                    .map_err(render_err)?;
            }
            Primitive::Markers { points, .. } => {
                chart
                    .draw_series(points.iter().map(|p| Circle::new(coord(p), 4, style)))
                    .map_err(render_err)?;
            }
            Primitive::Label { at, text, .. } => {
                if options.labels {
                    chart
                        .draw_series(std::iter::once(Text::new(
                            text.clone(),
                            coord(at),
                            ("sans-serif", 14).into_font().color(&BLACK),
                        )))
                        .map_err(render_err)?;
                }
            }
        }
    }
    Ok(())
}

fn render_to_string(
    primitives: &[Primitive<2>],
    extent: f64,
    options: &PlotOptions,
) -> BezierResult<String> {
    let mut buffer = String::new();
    {
        let root =
            SVGBackend::with_string(&mut buffer, (options.width, options.height)).into_drawing_area();
        draw_primitives(&root, primitives, extent, options)?;
        root.present().map_err(render_err)?;
    }
    Ok(buffer)
}

fn render_to_file(
    primitives: &[Primitive<2>],
    extent: f64,
    path: &Path,
    options: &PlotOptions,
) -> BezierResult<()> {
    let size = (options.width, options.height);
    let is_png = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("png"))
        .unwrap_or(false);

    debug!("rendering {} primitives to {}", primitives.len(), path.display());
    if is_png {
        let root = BitMapBackend::new(path, size).into_drawing_area();
        draw_primitives(&root, primitives, extent, options)?;
        root.present().map_err(render_err)?;
    } else {
        let root = SVGBackend::new(path, size).into_drawing_area();
        draw_primitives(&root, primitives, extent, options)?;
        root.present().map_err(render_err)?;
    }
    Ok(())
}

/// Render the 2D scene to an SVG document
pub fn render_scene_2d(scene: &Scene<2>, options: &PlotOptions) -> BezierResult<String> {
    render_to_string(&scene.primitives()?, scene.axis_extent, options)
}

/// Render the 3D scene, seen through `view`, to an SVG document
pub fn render_scene_3d(
    scene: &Scene<3>,
    view: &ViewState,
    options: &PlotOptions,
) -> BezierResult<String> {
    render_to_string(&scene.projected_primitives(view)?, scene.axis_extent, options)
}

/// Render the 2D scene to an `.svg` or `.png` file
pub fn render_scene_2d_to_file(
    scene: &Scene<2>,
    path: impl AsRef<Path>,
    options: &PlotOptions,
) -> BezierResult<()> {
    render_to_file(&scene.primitives()?, scene.axis_extent, path.as_ref(), options)
}

/// Render the 3D scene, seen through `view`, to an `.svg` or `.png` file
pub fn render_scene_3d_to_file(
    scene: &Scene<3>,
    view: &ViewState,
    path: impl AsRef<Path>,
    options: &PlotOptions,
) -> BezierResult<()> {
    render_to_file(
        &scene.projected_primitives(view)?,
        scene.axis_extent,
        path.as_ref(),
        options,
    )
}
