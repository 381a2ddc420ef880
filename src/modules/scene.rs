//! Demo scenes as renderer-neutral primitives
//!
//! A [`Scene`] holds one curve plus the decorations the demos draw around it:
//! coordinate axes with labels, tick marks (2D), a grid on the XZ plane and
//! drop lines from the control points (3D), the control polygon and the
//! sampled curve. Renderers only have to know how to draw the handful of
//! [`Primitive`] shapes.

use crate::constants::{
    DEFAULT_AXIS_EXTENT, DEFAULT_SAMPLE_COUNT, DEMO_CONTROL_POINTS_2D, DEMO_CONTROL_POINTS_3D,
    EPSILON, MAX_AXIS_EXTENT, TICK_HALF_LENGTH,
};
use crate::data::{BezierCurve, Point, Point3, PointN};
use crate::error::{BezierError, BezierResult};
use crate::modules::sample::{sample_curve, SampleSpacing};
use crate::modules::view::ViewState;
use nalgebra::SVector;

/// Coordinate axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        }
    }
}

/// What a primitive depicts; renderers pick colors and widths from it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Axis(Axis),
    Tick,
    Grid,
    DropLine,
    ControlPolygon,
    ControlPoint,
    Curve,
    Text,
}

/// A drawable shape in `D` dimensions
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive<const D: usize> {
    Segment {
        from: PointN<D>,
        to: PointN<D>,
        role: Role,
    },
    Polyline {
        points: Vec<PointN<D>>,
        role: Role,
    },
    Markers {
        points: Vec<PointN<D>>,
        role: Role,
    },
    Label {
        at: PointN<D>,
        text: String,
        role: Role,
    },
}

impl<const D: usize> Primitive<D> {
    pub fn role(&self) -> Role {
        match self {
            Primitive::Segment { role, .. }
            | Primitive::Polyline { role, .. }
            | Primitive::Markers { role, .. }
            | Primitive::Label { role, .. } => *role,
        }
    }

    /// Transform every point of the primitive, possibly changing dimension
    pub fn map_points<const E: usize>(&self, f: impl Fn(&PointN<D>) -> PointN<E>) -> Primitive<E> {
        match self {
            Primitive::Segment { from, to, role } => Primitive::Segment {
                from: f(from),
                to: f(to),
                role: *role,
            },
            Primitive::Polyline { points, role } => Primitive::Polyline {
                points: points.iter().map(&f).collect(),
                role: *role,
            },
            Primitive::Markers { points, role } => Primitive::Markers {
                points: points.iter().map(&f).collect(),
                role: *role,
            },
            Primitive::Label { at, text, role } => Primitive::Label {
                at: f(at),
                text: text.clone(),
                role: *role,
            },
        }
    }
}

impl Primitive<3> {
    /// Rotate and project onto the view plane
    pub fn project(&self, view: &ViewState) -> Primitive<2> {
        let rotation = view.rotation();
        self.map_points(|p| {
            let rotated = &rotation * p;
            Point::new(rotated.x, rotated.y)
        })
    }
}

/// A curve with its sampling and axis decorations
#[derive(Debug, Clone, PartialEq)]
pub struct Scene<const D: usize> {
    pub name: String,
    pub curve: BezierCurve<D>,
    pub spacing: SampleSpacing,
    pub axis_extent: f64,
}

pub type Scene2 = Scene<2>;
pub type Scene3 = Scene<3>;

/// Fails unless `extent` is finite, positive and at most [`MAX_AXIS_EXTENT`]
pub fn check_axis_extent(extent: f64) -> BezierResult<()> {
    if !extent.is_finite() || extent <= 0.0 || extent > MAX_AXIS_EXTENT {
        return Err(BezierError::InvalidArgument(format!(
            "axis extent must be in (0, {}], got {}",
            MAX_AXIS_EXTENT, extent
        )));
    }
    Ok(())
}

fn axis_point<const D: usize>(axis: usize, value: f64) -> PointN<D> {
    let mut coords = SVector::<f64, D>::zeros();
    coords[axis] = value;
    PointN::from(coords)
}

impl<const D: usize> Scene<D> {
    pub fn new(name: impl Into<String>, curve: BezierCurve<D>) -> Self {
        Self {
            name: name.into(),
            curve,
            spacing: SampleSpacing::default(),
            axis_extent: DEFAULT_AXIS_EXTENT,
        }
    }

    pub fn with_spacing(mut self, spacing: SampleSpacing) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_axis_extent(mut self, axis_extent: f64) -> Self {
        self.axis_extent = axis_extent;
        self
    }

    /// The sampled curve as a polyline
    pub fn polyline(&self) -> BezierResult<Vec<PointN<D>>> {
        sample_curve(&self.curve, self.spacing)
    }

    /// One line per axis from `-extent` to `extent`, plus its name past the positive end
    fn axes(&self, label_offset: f64) -> Vec<Primitive<D>> {
        let extent = self.axis_extent;
        let mut primitives = Vec::with_capacity(2 * D);
        for axis in Axis::ALL.iter().take(D) {
            primitives.push(Primitive::Segment {
                from: axis_point(axis.index(), -extent),
                to: axis_point(axis.index(), extent),
                role: Role::Axis(*axis),
            });
            primitives.push(Primitive::Label {
                at: axis_point(axis.index(), extent + label_offset),
                text: axis.label().to_string(),
                role: Role::Text,
            });
        }
        primitives
    }

    /// Control points, control polygon and the sampled curve
    fn curve_primitives(&self) -> BezierResult<Vec<Primitive<D>>> {
        let control_points = self.curve.control_points().to_vec();
        Ok(vec![
            Primitive::Polyline {
                points: control_points.clone(),
                role: Role::ControlPolygon,
            },
            Primitive::Markers {
                points: control_points,
                role: Role::ControlPoint,
            },
            Primitive::Polyline {
                points: self.polyline()?,
                role: Role::Curve,
            },
        ])
    }
}

impl Scene<2> {
    /// The planar cubic demo
    pub fn demo() -> Self {
        let curve = BezierCurve::from_nonempty(
            Point::from(DEMO_CONTROL_POINTS_2D[0]),
            DEMO_CONTROL_POINTS_2D[1..].iter().map(|&p| Point::from(p)),
        );
        Scene::new("2D Bézier Curve with Axes", curve)
    }

    fn arrowheads(&self) -> Vec<Primitive<2>> {
        let e = self.axis_extent;
        let (back, half) = (0.2, 0.1);
        vec![
            Primitive::Polyline {
                points: vec![
                    Point::new(e, 0.0),
                    Point::new(e - back, half),
                    Point::new(e - back, -half),
                    Point::new(e, 0.0),
                ],
                role: Role::Axis(Axis::X),
            },
            Primitive::Polyline {
                points: vec![
                    Point::new(0.0, e),
                    Point::new(half, e - back),
                    Point::new(-half, e - back),
                    Point::new(0.0, e),
                ],
                role: Role::Axis(Axis::Y),
            },
        ]
    }

    /// Unit tick marks strictly inside the axis extent, origin excluded
    fn ticks(&self) -> Vec<Primitive<2>> {
        let last = (self.axis_extent - EPSILON).floor() as i64;
        let h = TICK_HALF_LENGTH;
        let positions = (-last..=last).filter(|&i| i != 0).map(|i| i as f64);

        let mut ticks = Vec::new();
        for i in positions {
            ticks.push(Primitive::Segment {
                from: Point::new(i, -h),
                to: Point::new(i, h),
                role: Role::Tick,
            });
            ticks.push(Primitive::Segment {
                from: Point::new(-h, i),
                to: Point::new(h, i),
                role: Role::Tick,
            });
        }
        ticks
    }

    /// Everything the 2D demo draws, in drawing order
    pub fn primitives(&self) -> BezierResult<Vec<Primitive<2>>> {
        check_axis_extent(self.axis_extent)?;
        let mut primitives = self.axes(0.2);
        primitives.extend(self.arrowheads());
        primitives.extend(self.ticks());
        primitives.push(Primitive::Label {
            at: Point::new(0.2, 0.2),
            text: "O".to_string(),
            role: Role::Text,
        });
        primitives.extend(self.curve_primitives()?);
        Ok(primitives)
    }
}

impl Scene<3> {
    /// The spatial cubic demo
    pub fn demo() -> Self {
        let curve = BezierCurve::from_nonempty(
            Point3::from(DEMO_CONTROL_POINTS_3D[0]),
            DEMO_CONTROL_POINTS_3D[1..].iter().map(|&p| Point3::from(p)),
        );
        Scene::new("3D Bézier Curve with Coordinate Axes", curve)
            .with_spacing(SampleSpacing::Count(DEFAULT_SAMPLE_COUNT))
    }

    /// Unit grid on the XZ plane, skipping the lines covered by the axes
    fn grid(&self) -> Vec<Primitive<3>> {
        let e = self.axis_extent;
        let last = e.floor() as i64;
        let mut grid = Vec::new();
        for i in (-last..=last).filter(|&i| i != 0).map(|i| i as f64) {
            grid.push(Primitive::Segment {
                from: Point3::new(-e, 0.0, i),
                to: Point3::new(e, 0.0, i),
                role: Role::Grid,
            });
            grid.push(Primitive::Segment {
                from: Point3::new(i, 0.0, -e),
                to: Point3::new(i, 0.0, e),
                role: Role::Grid,
            });
        }
        grid
    }

    /// Vertical lines from every control point down to the XZ plane
    fn drop_lines(&self) -> Vec<Primitive<3>> {
        self.curve
            .control_points()
            .iter()
            .map(|p| Primitive::Segment {
                from: *p,
                to: Point3::new(p.x, 0.0, p.z),
                role: Role::DropLine,
            })
            .collect()
    }

    /// Everything the 3D demo draws, in drawing order
    pub fn primitives(&self) -> BezierResult<Vec<Primitive<3>>> {
        check_axis_extent(self.axis_extent)?;
        let mut primitives = self.axes(0.3);
        primitives.push(Primitive::Label {
            at: Point3::new(0.2, 0.2, 0.2),
            text: "O".to_string(),
            role: Role::Text,
        });
        primitives.extend(self.grid());
        primitives.extend(self.drop_lines());
        primitives.extend(self.curve_primitives()?);

        let mid = self.curve.point_at(0.5);
        primitives.push(Primitive::Label {
            at: Point3::new(mid.x, mid.y + 0.5, mid.z),
            text: "Bézier Curve".to_string(),
            role: Role::Text,
        });
        Ok(primitives)
    }

    /// The 3D scene as seen through `view`
    pub fn projected_primitives(&self, view: &ViewState) -> BezierResult<Vec<Primitive<2>>> {
        Ok(self
            .primitives()?
            .iter()
            .map(|primitive| primitive.project(view))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{pt, pt3};
    use approx::assert_relative_eq;

    fn count_role<const D: usize>(primitives: &[Primitive<D>], role: Role) -> usize {
        primitives.iter().filter(|p| p.role() == role).count()
    }

    #[test]
    fn test_demo_2d_primitives() {
        let scene = Scene2::demo();
        assert_eq!(scene.curve.degree(), 3);
        let primitives = scene.primitives().unwrap();

        // line and arrowhead per axis
        assert_eq!(count_role(&primitives, Role::Axis(Axis::X)), 2);
        assert_eq!(count_role(&primitives, Role::Axis(Axis::Y)), 2);
        assert_eq!(count_role(&primitives, Role::Axis(Axis::Z)), 0);
        // -4..=4 without the origin, on both axes
        assert_eq!(count_role(&primitives, Role::Tick), 16);
        assert_eq!(count_role(&primitives, Role::Text), 3);
        assert_eq!(count_role(&primitives, Role::Grid), 0);

        let curve = primitives
            .iter()
            .find_map(|p| match p {
                Primitive::Polyline {
                    points,
                    role: Role::Curve,
                } => Some(points.clone()),
                _ => None,
            })
            .unwrap();
        assert_eq!(curve.len(), 101);
        assert_eq!(curve[0], pt!(-4, 0));
        assert_relative_eq!(curve[50], pt!(0, 3), epsilon = 1e-12);
        assert_eq!(curve[100], pt!(4, 0));
    }

    #[test]
    fn test_demo_3d_primitives() {
        let scene = Scene3::demo();
        let primitives = scene.primitives().unwrap();

        assert_eq!(count_role(&primitives, Role::Axis(Axis::Z)), 1);
        // -5..=5 without 0, two directions
        assert_eq!(count_role(&primitives, Role::Grid), 20);
        assert_eq!(count_role(&primitives, Role::DropLine), 4);
        // X, Y, Z, O and the curve label
        assert_eq!(count_role(&primitives, Role::Text), 5);

        assert!(primitives.contains(&Primitive::Segment {
            from: pt3!(2, 4, 0),
            to: pt3!(2, 0, 0),
            role: Role::DropLine,
        }));
        assert!(primitives.contains(&Primitive::Label {
            at: pt3!(5.3, 0, 0),
            text: "X".to_string(),
            role: Role::Text,
        }));
    }

    #[test]
    fn test_demo_3d_curve_sampling() {
        let scene = Scene3::demo();
        let polyline = scene.polyline().unwrap();
        assert_eq!(polyline.len(), 100);
        assert_eq!(polyline[0], pt3!(-4, 0, -2));
        assert_eq!(polyline[99], pt3!(4, 0, 3));
    }

    #[test]
    fn test_projection_with_identity_view() {
        let scene = Scene3::demo();
        let flat = scene
            .projected_primitives(&ViewState::new(0.0, 0.0, 0.0))
            .unwrap();
        let markers = flat
            .iter()
            .find_map(|p| match p {
                Primitive::Markers { points, .. } => Some(points.clone()),
                _ => None,
            })
            .unwrap();
        assert_eq!(markers, vec![pt!(-4, 0), pt!(-2, 4), pt!(2, 4), pt!(4, 0)]);
    }

    #[test]
    fn test_axis_extent_changes_ticks() {
        let scene = Scene2::demo().with_axis_extent(3.0);
        let primitives = scene.primitives().unwrap();
        assert_eq!(count_role(&primitives, Role::Tick), 8);
    }

    #[test]
    fn test_axis_extent_limits() {
        for extent in [1e12, f64::INFINITY, f64::NAN, 0.0, -2.0] {
            assert!(matches!(
                Scene2::demo().with_axis_extent(extent).primitives(),
                Err(BezierError::InvalidArgument(_))
            ));
            assert!(matches!(
                Scene3::demo().with_axis_extent(extent).primitives(),
                Err(BezierError::InvalidArgument(_))
            ));
        }

        let grid = Scene3::demo()
            .with_axis_extent(MAX_AXIS_EXTENT)
            .primitives()
            .unwrap();
        assert_eq!(count_role(&grid, Role::Grid), 4000);
    }

    #[test]
    fn test_invalid_spacing_fails() {
        let scene = Scene2::demo().with_spacing(SampleSpacing::Count(0));
        assert!(scene.primitives().is_err());
    }
}
