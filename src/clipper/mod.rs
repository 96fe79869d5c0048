//! The narrow contract the harness drives every clipping implementation through.

use crate::point::IntPoint;
use crate::workload::ClipOperation;
use geo_types::{Coord, LineString, MultiPolygon, Polygon};

pub mod overlay;
pub mod sweep;

pub use overlay::OverlayClipper;
pub use sweep::SweepClipper;

/// Which input set a path collection belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PathRole {
    Subject,
    Clip,
}

/// A polygon clipper under test.
///
/// A fresh instance (`Default`) is created for every record, so implementations never see state
/// left over from a previous clip.
pub trait Clipper: Default {
    /// Implementation-specific path collection built from scaled rings.
    type Paths;
    /// Native operation identifier.
    type Op: Copy;

    /// Name used in logs and errors.
    const NAME: &'static str;

    fn build_paths(rings: &[Vec<IntPoint>]) -> Self::Paths;

    fn add_paths(&mut self, paths: Self::Paths, role: PathRole);

    /// Translates the harness operation tag into the native identifier.
    fn native_op(op: ClipOperation) -> Self::Op;

    /// Runs the clip, writing the result into `solution`. Returns `false` on failure.
    fn execute(&mut self, op: Self::Op, solution: &mut MultiPolygon<f64>) -> bool;
}

/// Converts a scaled ring into a closed polygon without holes.
///
/// Rings with fewer than three points carry no area and yield `None`.
pub(crate) fn ring_polygon(ring: &[IntPoint]) -> Option<Polygon<f64>> {
    if ring.len() < 3 {
        return None;
    }
    let coords: Vec<Coord<f64>> = ring
        .iter()
        .map(|p| Coord { x: p.x as f64, y: p.y as f64 })
        .collect();
    Some(Polygon::new(LineString::new(coords), vec![]))
}

/// Combines a role's rings into one region with even-odd fill.
///
/// The fold starts from the first ring, so `n` rings cost exactly `n - 1` calls to `xor`
/// (none for the common single-ring role). Every adapter goes through this so that only the
/// final clip differs between implementations.
pub(crate) fn fold_even_odd<F>(rings: Vec<Polygon<f64>>, mut xor: F) -> MultiPolygon<f64>
where
    F: FnMut(&MultiPolygon<f64>, &MultiPolygon<f64>) -> MultiPolygon<f64>,
{
    let mut rings = rings.into_iter().map(|ring| MultiPolygon::new(vec![ring]));
    let Some(first) = rings.next() else {
        return MultiPolygon::new(vec![]);
    };
    rings.fold(first, |acc, ring| xor(&acc, &ring))
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::Area;

    fn square(x0: i64, y0: i64, size: i64) -> Polygon<f64> {
        let ring = vec![
            IntPoint { x: x0, y: y0 },
            IntPoint { x: x0 + size, y: y0 },
            IntPoint { x: x0 + size, y: y0 + size },
            IntPoint { x: x0, y: y0 + size },
        ];
        ring_polygon(&ring).unwrap()
    }

    fn nested(count: usize) -> Vec<Polygon<f64>> {
        // 12x12, 8x8, 4x4 nested squares: even-odd area 144 - 64 + 16
        [(0, 12), (2, 8), (4, 4)].iter().take(count).map(|&(o, s)| square(o, o, s)).collect()
    }

    #[test]
    fn test_even_odd_fold_op_counts_match_across_libraries() {
        for (rings, expected_ops, expected_area) in [(1, 0, 144.0), (3, 2, 96.0)] {
            let mut sweep_ops = 0;
            let sweep_region = fold_even_odd(nested(rings), |a, b| {
                sweep_ops += 1;
                geo::algorithm::bool_ops::BooleanOps::xor(a, b)
            });

            let mut overlay_ops = 0;
            let overlay_region = fold_even_odd(nested(rings), |a, b| {
                overlay_ops += 1;
                geo_next::algorithm::bool_ops::BooleanOps::xor(a, b)
            });

            assert_eq!(sweep_ops, expected_ops, "{} rings", rings);
            assert_eq!(overlay_ops, expected_ops, "{} rings", rings);
            assert!((sweep_region.unsigned_area() - expected_area).abs() < 1e-6);
            assert!((overlay_region.unsigned_area() - expected_area).abs() < 1e-6);
        }
    }

    #[test]
    fn test_even_odd_fold_of_nothing_is_empty() {
        let mut ops = 0;
        let region = fold_even_odd(vec![], |a: &MultiPolygon<f64>, _b: &MultiPolygon<f64>| {
            ops += 1;
            a.clone()
        });
        assert!(region.0.is_empty());
        assert_eq!(ops, 0);
    }

    #[test]
    fn test_ring_polygon_closes_ring() {
        let ring = vec![
            IntPoint { x: 0, y: 0 },
            IntPoint { x: 10, y: 0 },
            IntPoint { x: 10, y: 10 },
        ];
        let poly = ring_polygon(&ring).unwrap();
        let ext = &poly.exterior().0;
        assert_eq!(ext.len(), 4);
        assert_eq!(ext.first(), ext.last());
    }

    #[test]
    fn test_degenerate_ring_is_skipped() {
        let ring = vec![IntPoint { x: 0, y: 0 }, IntPoint { x: 1, y: 1 }];
        assert!(ring_polygon(&ring).is_none());
    }
}
