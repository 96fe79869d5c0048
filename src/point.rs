use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use std::ops::{Add, Div, Mul, Sub};

/// Factor applied to every coordinate before it reaches a clipper.
pub const SCALE_FACTOR: f64 = 1e7;

/// A 2D coordinate in unscaled floating-point space.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A scaled integer coordinate, the form clippers actually operate on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct IntPoint {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Multiplies by [`SCALE_FACTOR`] and rounds to the nearest integer.
    ///
    /// Coordinates must stay within about ±9.2e11 so the scaled value fits in `i64`. Release
    /// builds saturate out-of-range values (and map NaN to 0); debug builds assert instead.
    #[inline]
    pub fn to_scaled(self) -> IntPoint {
        IntPoint {
            x: scale_axis(self.x),
            y: scale_axis(self.y),
        }
    }
}

/// 2^63, the first magnitude an `f64` cannot carry into `i64`.
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

#[inline]
fn scale_axis(value: f64) -> i64 {
    let scaled = (value * SCALE_FACTOR).round();
    debug_assert!(
        scaled >= -I64_LIMIT && scaled < I64_LIMIT,
        "coordinate {} does not fit in i64 after scaling",
        value
    );
    scaled as i64
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

// NaN coordinates are never produced by the generator, so this is a full equivalence in practice.
impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // -0.0 + 0.0 == +0.0, keeping hash consistent with `==`
        (self.x + 0.0).to_bits().hash(state);
        (self.y + 0.0).to_bits().hash(state);
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul for Point {
    type Output = Point;

    fn mul(self, rhs: Point) -> Point {
        Point::new(self.x * rhs.x, self.y * rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl Div for Point {
    type Output = Point;

    fn div(self, rhs: Point) -> Point {
        Point::new(self.x / rhs.x, self.y / rhs.y)
    }
}

impl Div<f64> for Point {
    type Output = Point;

    fn div(self, rhs: f64) -> Point {
        Point::new(self.x / rhs, self.y / rhs)
    }
}

/// Scales every ring of a geometry into integer space.
pub fn scale_rings(rings: &[Vec<Point>]) -> Vec<Vec<IntPoint>> {
    rings
        .iter()
        .map(|ring| ring.iter().map(|p| p.to_scaled()).collect())
        .collect()
}
