//! Default values shared by the evaluator, the samplers and the demo scenes.

/// Tolerance used when comparing evaluated points
pub const EPSILON: f64 = 1e-9;

/// Parameter step used by the demo renderers (t = 0, 0.01, ..., 1.0)
pub const DEFAULT_SAMPLE_STEP: f64 = 0.01;

/// Number of evenly spaced samples used by the 3D demo
pub const DEFAULT_SAMPLE_COUNT: usize = 100;

/// Largest number of parameter values a sample spacing may produce
pub const MAX_SAMPLES: usize = 1_000_000;

/// Largest accepted axis half-width; ticks and grid lines grow linearly with it
pub const MAX_AXIS_EXTENT: f64 = 1000.0;

/// Half-width of the drawn coordinate axes
pub const DEFAULT_AXIS_EXTENT: f64 = 5.0;

/// Half-length of an axis tick mark
pub const TICK_HALF_LENGTH: f64 = 0.1;

/// Degrees added or removed per rotation key press
pub const ROTATION_STEP_DEGREES: f64 = 5.0;

/// Initial rotation of the 3D demo view, in degrees (x, y, z)
pub const INITIAL_ROTATION: (f64, f64, f64) = (20.0, 30.0, 0.0);

/// Degree above which a warning is logged when a scene is loaded
pub const HIGH_DEGREE_WARNING: usize = 30;

/// Control points of the 2D demo curve
pub const DEMO_CONTROL_POINTS_2D: [[f64; 2]; 4] = [[-4.0, 0.0], [-2.0, 4.0], [2.0, 4.0], [4.0, 0.0]];

/// Control points of the 3D demo curve
pub const DEMO_CONTROL_POINTS_3D: [[f64; 3]; 4] = [
    [-4.0, 0.0, -2.0],
    [-2.0, 4.0, 2.0],
    [2.0, 4.0, 0.0],
    [4.0, 0.0, 3.0],
];
