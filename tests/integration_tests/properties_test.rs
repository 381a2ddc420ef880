use approx::assert_relative_eq;
use bezier_curves::modules::random::{random_control_points, random_curve};
use bezier_curves::{bezier, evaluate, pt, pt3, BezierCurve2, BezierCurve3, Point, Point3};
use nalgebra::{Affine2, Affine3, Matrix3, Matrix4};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const TOLERANCE: f64 = 1e-9;

fn t_grid() -> impl Iterator<Item = f64> {
    (0..=40).map(|i| i as f64 / 40.0)
}

#[test]
fn test_endpoint_interpolation() {
    let mut rng = StdRng::seed_from_u64(1);
    for degree in 0..10 {
        let points = random_control_points::<3, _>(&mut rng, degree + 1, 3.0).unwrap();
        assert_relative_eq!(evaluate(&points, 0.0).unwrap(), points[0], epsilon = TOLERANCE);
        assert_relative_eq!(
            evaluate(&points, 1.0).unwrap(),
            points[degree],
            epsilon = TOLERANCE
        );
    }
}

#[test]
fn test_degree_zero_constant() {
    let p = pt3!(1.5, -2, 7);
    for t in t_grid() {
        assert_eq!(evaluate(&[p], t).unwrap(), p);
    }
}

#[test]
fn test_linear_interpolation() {
    let mut rng = StdRng::seed_from_u64(2);
    let points = random_control_points::<2, _>(&mut rng, 2, 5.0).unwrap();
    for t in t_grid() {
        let expected = points[0] + (points[1] - points[0]) * t;
        assert_relative_eq!(evaluate(&points, t).unwrap(), expected, epsilon = TOLERANCE);
    }
}

#[test]
fn test_reversal_symmetry() {
    let mut rng = StdRng::seed_from_u64(3);
    for degree in 1..8 {
        let curve: BezierCurve3 = random_curve(&mut rng, degree, 2.0).unwrap();
        let mut reversed_points = curve.control_points().to_vec();
        reversed_points.reverse();
        for t in t_grid() {
            assert_relative_eq!(
                evaluate(&reversed_points, t).unwrap(),
                evaluate(curve.control_points(), 1.0 - t).unwrap(),
                epsilon = TOLERANCE
            );
        }
    }
}

#[test]
fn test_affine_invariance_2d() {
    let mut rng = StdRng::seed_from_u64(4);
    for _ in 0..10 {
        let curve: BezierCurve2 = random_curve(&mut rng, 3, 4.0).unwrap();
        let m: Matrix3<f64> = Matrix3::new(
            rng.gen_range(-2.0..2.0),
            rng.gen_range(-2.0..2.0),
            rng.gen_range(-5.0..5.0),
            rng.gen_range(-2.0..2.0),
            rng.gen_range(-2.0..2.0),
            rng.gen_range(-5.0..5.0),
            0.0,
            0.0,
            1.0,
        );
        let transform = Affine2::from_matrix_unchecked(m);
        let transformed = curve.map_points(|p: &Point| &transform * p);
        for t in t_grid() {
            assert_relative_eq!(
                transformed.point_at(t),
                &transform * curve.point_at(t),
                epsilon = 1e-8
            );
        }
    }
}

#[test]
fn test_affine_invariance_3d() {
    let curve = bezier!([pt3!(-4, 0, -2), pt3!(-2, 4, 2), pt3!(2, 4, 0), pt3!(4, 0, 3)]);
    let m = Matrix4::new(
        0.0, -2.0, 0.5, 1.0, //
        1.0, 0.0, 0.0, -3.0, //
        0.3, 0.0, 3.0, 0.25, //
        0.0, 0.0, 0.0, 1.0,
    );
    let transform = Affine3::from_matrix_unchecked(m);
    let transformed = curve.map_points(|p: &Point3| &transform * p);
    for t in t_grid() {
        assert_relative_eq!(
            transformed.point_at(t),
            &transform * curve.point_at(t),
            epsilon = 1e-9
        );
    }
}

#[test]
fn test_demo_scenarios() {
    let planar = [pt!(-4, 0), pt!(-2, 4), pt!(2, 4), pt!(4, 0)];
    assert_relative_eq!(evaluate(&planar, 0.5).unwrap(), pt!(0, 3), epsilon = 1e-5);

    let spatial = [pt3!(-4, 0, -2), pt3!(-2, 4, 2), pt3!(2, 4, 0), pt3!(4, 0, 3)];
    assert_relative_eq!(evaluate(&spatial, 0.0).unwrap(), pt3!(-4, 0, -2), epsilon = 1e-5);
    assert_relative_eq!(evaluate(&spatial, 1.0).unwrap(), pt3!(4, 0, 3), epsilon = 1e-5);
}

#[test]
fn test_high_degree_stays_finite_and_matches_de_casteljau() {
    let mut rng = StdRng::seed_from_u64(5);
    let curve: BezierCurve2 = random_curve(&mut rng, 40, 1.0).unwrap();
    for t in t_grid() {
        let p = curve.point_at(t);
        assert!(p.x.is_finite() && p.y.is_finite());
        assert_relative_eq!(p, curve.point_at_de_casteljau(t), epsilon = 1e-6);
    }
}

#[test]
fn test_evaluation_from_many_threads() {
    let curve = std::sync::Arc::new(bezier!([pt!(-4, 0), pt!(-2, 4), pt!(2, 4), pt!(4, 0)]));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let curve = std::sync::Arc::clone(&curve);
            std::thread::spawn(move || curve.point_at(0.5))
        })
        .collect();
    for handle in handles {
        assert_relative_eq!(handle.join().unwrap(), pt!(0, 3), epsilon = 1e-12);
    }
}

#[test]
fn test_endpoints_beyond_float_binomial_range() {
    // C(1100, 550) does not fit in an f64
    let points: Vec<Point> = (0..=1100).map(|i| pt!(i, 1.0)).collect();
    assert_eq!(evaluate(&points, 0.0).unwrap(), points[0]);
    assert_eq!(evaluate(&points, 1.0).unwrap(), points[1100]);

    // Bernstein weights reproduce linear functions: x(t) = n * t
    for t in [0.1, 0.5, 0.75] {
        let p = evaluate(&points, t).unwrap();
        assert_relative_eq!(p, pt!(1100.0 * t, 1.0), epsilon = 1e-6);
    }
}
