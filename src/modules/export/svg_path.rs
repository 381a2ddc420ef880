//! SVG path data for curves and sampled polylines
//!
//! Curves up to cubic degree map onto native SVG commands (`L`, `Q`, `C`).
//! Higher degrees have no SVG counterpart and are exported as a sampled
//! polyline.
//!
//! # Examples
//!
//! ```rust
//! use bezier_curves::{bezier, pt, modules::export::svg_path::ToSvgPath};
//!
//! let cubic = bezier!([pt!(50, 200), pt!(100, 50), pt!(200, 50), pt!(250, 200)]);
//! assert_eq!(cubic.to_svg_path(), "M50,200 C100,50,200,50,250,200");
//!
//! let polyline = [pt!(0, 0), pt!(10, 5), pt!(20, 0)];
//! assert_eq!(polyline.to_svg_path(), "M0,0 L10,5 L20,0");
//! ```

use crate::constants::DEFAULT_SAMPLE_STEP;
use crate::data::{BezierCurve, Point};
use crate::modules::sample::sample_at_t_values;

/// Trait for types that can be converted to SVG path data
pub trait ToSvgPath {
    /// Convert to SVG path data string
    fn to_svg_path(&self) -> String;
}

impl ToSvgPath for [Point] {
    fn to_svg_path(&self) -> String {
        let mut result = String::new();
        for (i, point) in self.iter().enumerate() {
            if i == 0 {
                result.push_str(&format!("M{},{}", point.x, point.y));
            } else {
                result.push_str(&format!(" L{},{}", point.x, point.y));
            }
        }
        result
    }
}

impl ToSvgPath for Vec<Point> {
    fn to_svg_path(&self) -> String {
        self.as_slice().to_svg_path()
    }
}

impl ToSvgPath for BezierCurve<2> {
    fn to_svg_path(&self) -> String {
        let points = self.control_points();
        let start = format!("M{},{}", points[0].x, points[0].y);
        match points {
            [_] => start,
            [_, p1] => format!("{} L{},{}", start, p1.x, p1.y),
            [_, p1, p2] => format!("{} Q{},{},{},{}", start, p1.x, p1.y, p2.x, p2.y),
            [_, p1, p2, p3] => format!(
                "{} C{},{},{},{},{},{}",
                start, p1.x, p1.y, p2.x, p2.y, p3.x, p3.y
            ),
            _ => {
                let steps = (1.0 / DEFAULT_SAMPLE_STEP).round() as usize;
                let t_values: Vec<f64> = (0..=steps).map(|i| i as f64 / steps as f64).collect();
                sample_at_t_values(self, &t_values).to_svg_path()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{bezier, pt};

    #[test]
    fn test_curve_export_to_svg_path() {
        struct SvgPathExportTestCase<'a> {
            name: &'a str,
            curve: BezierCurve<2>,
            expected_path: &'a str,
        }

        let test_cases = [
            SvgPathExportTestCase {
                name: "single_point",
                curve: bezier!([pt!(3, 4)]),
                expected_path: "M3,4",
            },
            SvgPathExportTestCase {
                name: "line",
                curve: bezier!([pt!(10, 20), pt!(40, 50)]),
                expected_path: "M10,20 L40,50",
            },
            SvgPathExportTestCase {
                name: "quadratic",
                curve: bezier!([pt!(10, 20), pt!(40, 50), pt!(70, 80)]),
                expected_path: "M10,20 Q40,50,70,80",
            },
            SvgPathExportTestCase {
                name: "cubic_demo",
                curve: bezier!([pt!(-4, 0), pt!(-2, 4), pt!(2, 4), pt!(4, 0)]),
                expected_path: "M-4,0 C-2,4,2,4,4,0",
            },
        ];

        for test_case in test_cases {
            assert_eq!(
                test_case.curve.to_svg_path(),
                test_case.expected_path,
                "Test case: {}",
                test_case.name
            );
        }
    }

    #[test]
    fn test_high_degree_falls_back_to_polyline() {
        let curve = bezier!([pt!(0, 0), pt!(1, 2), pt!(2, -2), pt!(3, 2), pt!(4, 0)]);
        let path = curve.to_svg_path();
        assert!(path.starts_with("M0,0 L"));
        assert!(path.ends_with(" L4,0"));
        assert_eq!(path.matches(" L").count(), 100);
    }

    #[test]
    fn test_empty_polyline() {
        let empty: Vec<Point> = Vec::new();
        assert_eq!(empty.to_svg_path(), "");
    }
}
