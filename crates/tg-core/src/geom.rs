//! Planar point type and the geometry kernel shared by routing and
//! steering validation.
//!
//! Coordinates are `f64` meters in the track's metric frame (the map is
//! calibrated to meters before it reaches this crate).  The kernel is four
//! pure functions; degenerate inputs resolve to sentinel values rather than
//! errors:
//!
//! | Degenerate input                    | Result                      |
//! |-------------------------------------|-----------------------------|
//! | zero-length leg in a turning angle  | `0.0`° (no turn)            |
//! | collinear circumradius points       | `f64::INFINITY` (no curve)  |
//! | zero turning radius                 | `90.0`° (turn in place)     |

/// A planar metric coordinate in meters.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Point2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}

/// Triangle areas below this are treated as zero (collinear points).
const COLLINEAR_AREA_EPS: f64 = 1e-6;

/// Euclidean distance between two points in meters.
#[inline]
pub fn distance(a: Point2, b: Point2) -> f64 {
    ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
}

/// Turning angle at `b` when driving `a → b → c`, in degrees within
/// `[0, 180]`.
///
/// Measured between the direction vectors `b − a` and `c − b`: `0` means the
/// heading is unchanged, values near `180` mean the path reverses on itself.
/// If either leg has zero length (coincident points) the turn is `0.0` —
/// degenerate geometry is "no turn", not an error.
pub fn turning_angle_deg(a: Point2, b: Point2, c: Point2) -> f64 {
    let (v1x, v1y) = (b.x - a.x, b.y - a.y);
    let (v2x, v2y) = (c.x - b.x, c.y - b.y);

    let n1 = (v1x * v1x + v1y * v1y).sqrt();
    let n2 = (v2x * v2x + v2y * v2y).sqrt();
    if n1 == 0.0 || n2 == 0.0 {
        return 0.0;
    }

    // Clamp the normalized dot product: rounding can push it past ±1 and
    // acos would return NaN.
    let dot = ((v1x * v2x + v1y * v2y) / (n1 * n2)).clamp(-1.0, 1.0);
    dot.acos().to_degrees()
}

/// Radius of the circle through three points, via side lengths and Heron's
/// formula: `R = abc / (4·Area)`.
///
/// Returns `f64::INFINITY` when the points are collinear (triangle area
/// numerically zero).  The Heron radicand is clamped to zero first — for
/// near-collinear points floating error can drive it slightly negative.
pub fn circumradius(p1: Point2, p2: Point2, p3: Point2) -> f64 {
    let a = distance(p1, p2);
    let b = distance(p2, p3);
    let c = distance(p3, p1);

    let s = (a + b + c) / 2.0;
    let area = (s * (s - a) * (s - b) * (s - c)).max(0.0).sqrt();

    if area < COLLINEAR_AREA_EPS {
        return f64::INFINITY;
    }
    (a * b * c) / (4.0 * area)
}

/// Ackermann (bicycle-model) steering angle in degrees for a vehicle of the
/// given wheelbase following an arc of the given radius:
/// `atan(wheelbase / radius)`.
///
/// `radius == 0.0` is a reserved sentinel meaning "turn in place" and yields
/// `90.0`.  An infinite radius (straight line) yields `0.0` directly from
/// the formula.
pub fn ackermann_angle_deg(radius: f64, wheelbase: f64) -> f64 {
    if radius == 0.0 {
        return 90.0;
    }
    (wheelbase / radius).atan().to_degrees()
}
