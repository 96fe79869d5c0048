use crate::point::Point;
use crate::workload::{ClipExecutionData, ClipOperation};
use rand::Rng;
use std::f64::consts::PI;
use std::fmt;

/// Vertex count of each random polygon in the large profile.
pub const LARGE_POLYGON_VERTICES: usize = 10_000;

/// Coordinates of large-profile vertices are drawn from `[-LARGE_COORD_RANGE, LARGE_COORD_RANGE]`
/// and then divided by ten.
const LARGE_COORD_RANGE: i64 = 1_000_000;

/// Shape of the synthetic load.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LoadProfile {
    /// Square against a 12-vertex star.
    Simple,
    /// Self-intersecting ring with holes against a rectangle with a hole.
    Complex,
    /// Two random 10000-vertex polygons.
    Large,
}

impl LoadProfile {
    pub const ALL: [LoadProfile; 3] = [LoadProfile::Simple, LoadProfile::Complex, LoadProfile::Large];

    pub fn path_count(self) -> usize {
        match self {
            LoadProfile::Simple | LoadProfile::Complex => 10_000,
            LoadProfile::Large => 100,
        }
    }

    /// Conventional fixture name for this profile.
    pub fn fixture_name(self) -> &'static str {
        match self {
            LoadProfile::Simple => "SimplePolygons",
            LoadProfile::Complex => "ComplexPolygons",
            LoadProfile::Large => "LargePolygons",
        }
    }

    /// The unscaled (shape A, shape B) pair records are built from.
    pub fn base_shapes<R: Rng + ?Sized>(self, rng: &mut R) -> (Vec<Vec<Point>>, Vec<Vec<Point>>) {
        match self {
            LoadProfile::Simple => (vec![square()], vec![star()]),
            LoadProfile::Complex => (crossed_ring_with_holes(), rectangle_with_hole()),
            LoadProfile::Large => (
                vec![random_polygon(rng, LARGE_POLYGON_VERTICES)],
                vec![random_polygon(rng, LARGE_POLYGON_VERTICES)],
            ),
        }
    }
}

impl fmt::Display for LoadProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.fixture_name())
    }
}

/// The random choices made for a single record.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RecordDraw {
    pub scale: f64,
    pub probability: f64,
}

impl RecordDraw {
    /// Scale in [0, 1000] at 0.01 granularity, then a probability in [0, 1).
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let scale = rng.gen_range(0..=100_000) as f64 / 100.0;
        let probability = rng.gen::<f64>();
        Self { scale, probability }
    }

    pub fn operation(&self) -> ClipOperation {
        ClipOperation::from_probability(self.probability)
    }

    /// Shape A is the subject below 0.5; from 0.5 upwards it becomes the clip.
    pub fn swaps_roles(&self) -> bool {
        self.probability >= 0.5
    }

    /// Builds the record for this draw from the unscaled base shapes.
    pub fn build(&self, shape_a: &[Vec<Point>], shape_b: &[Vec<Point>]) -> ClipExecutionData {
        let a = scale_shape(shape_a, self.scale);
        let b = scale_shape(shape_b, self.scale);
        let (subject, clip) = if self.swaps_roles() { (b, a) } else { (a, b) };
        ClipExecutionData::new(self.operation(), subject, clip)
    }
}

/// Generates the full `path_count` records for `profile`.
pub fn generate_workload<R: Rng + ?Sized>(profile: LoadProfile, rng: &mut R) -> Vec<ClipExecutionData> {
    generate_workload_with_count(profile, profile.path_count(), rng)
}

/// Generates `count` records for `profile`.
///
/// Base shapes are built first (the large profile draws its vertices here), then each record
/// draws its scale and probability exactly once.
pub fn generate_workload_with_count<R: Rng + ?Sized>(
    profile: LoadProfile,
    count: usize,
    rng: &mut R,
) -> Vec<ClipExecutionData> {
    let (shape_a, shape_b) = profile.base_shapes(rng);

    let records: Vec<_> = (0..count)
        .map(|_| RecordDraw::sample(rng).build(&shape_a, &shape_b))
        .collect();

    log::info!("Generated {} records for profile {}", records.len(), profile);
    records
}

fn scale_shape(rings: &[Vec<Point>], factor: f64) -> Vec<Vec<Point>> {
    rings
        .iter()
        .map(|ring| ring.iter().map(|&p| p * factor).collect())
        .collect()
}

fn square() -> Vec<Point> {
    vec![
        Point::new(1.0, 0.0),
        Point::new(5.0, 0.0),
        Point::new(5.0, 4.0),
        Point::new(1.0, 4.0),
    ]
}

/// Six-pointed star (12 vertices) centred on the square.
fn star() -> Vec<Point> {
    let center = Point::new(3.0, 2.0);
    (0..12)
        .map(|i| {
            let radius = if i % 2 == 0 { 3.0 } else { 1.5 };
            let angle = i as f64 * PI / 6.0;
            center + Point::new(angle.cos(), angle.sin()) * radius
        })
        .collect()
}

fn crossed_ring_with_holes() -> Vec<Vec<Point>> {
    // Bow-tie crossing itself at (6, 6), one hole in each lobe
    let outer = vec![
        Point::new(0.0, 0.0),
        Point::new(12.0, 12.0),
        Point::new(12.0, 0.0),
        Point::new(0.0, 12.0),
    ];
    let left_hole = vec![
        Point::new(1.0, 5.0),
        Point::new(1.0, 7.0),
        Point::new(3.0, 7.0),
        Point::new(3.0, 5.0),
    ];
    let right_hole = vec![
        Point::new(9.0, 5.0),
        Point::new(9.0, 7.0),
        Point::new(11.0, 7.0),
        Point::new(11.0, 5.0),
    ];
    vec![outer, left_hole, right_hole]
}

fn rectangle_with_hole() -> Vec<Vec<Point>> {
    let outer = vec![
        Point::new(2.0, 2.0),
        Point::new(14.0, 2.0),
        Point::new(14.0, 9.0),
        Point::new(2.0, 9.0),
    ];
    let hole = vec![
        Point::new(5.0, 4.0),
        Point::new(5.0, 7.0),
        Point::new(11.0, 7.0),
        Point::new(11.0, 4.0),
    ];
    vec![outer, hole]
}

pub(crate) fn random_polygon<R: Rng + ?Sized>(rng: &mut R, vertices: usize) -> Vec<Point> {
    (0..vertices)
        .map(|_| {
            let x = rng.gen_range(-LARGE_COORD_RANGE..=LARGE_COORD_RANGE) as f64 / 10.0;
            let y = rng.gen_range(-LARGE_COORD_RANGE..=LARGE_COORD_RANGE) as f64 / 10.0;
            Point::new(x, y)
        })
        .collect()
}

#[cfg(test)]
#[path = "generator_tests.rs"]
mod tests;
