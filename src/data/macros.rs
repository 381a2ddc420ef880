//! This module provides convenient macros for creating points and curves.

/// Macro for creating a 2D Point
#[macro_export]
macro_rules! pt {
    ($x:expr, $y:expr) => {
        $crate::data::Point::new($x as f64, $y as f64)
    };
}

/// Macro for creating a 3D Point
#[macro_export]
macro_rules! pt3 {
    ($x:expr, $y:expr, $z:expr) => {
        $crate::data::Point3::new($x as f64, $y as f64, $z as f64)
    };
}

/// Macro for creating a Bezier curve from one or more control points
///
/// The curve degree is the number of points minus one.
///
/// ```rust
/// use bezier_curves::{bezier, pt};
///
/// let cubic = bezier!([pt!(-4, 0), pt!(-2, 4), pt!(2, 4), pt!(4, 0)]);
/// assert_eq!(cubic.degree(), 3);
/// ```
#[macro_export]
macro_rules! bezier {
    ([$first:expr $(, $rest:expr)* $(,)?]) => {
        $crate::data::BezierCurve::from_nonempty($first, [$($rest),*])
    };
}
