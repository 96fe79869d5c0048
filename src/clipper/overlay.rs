use super::{fold_even_odd, ring_polygon, Clipper, PathRole};
use crate::point::IntPoint;
use crate::workload::ClipOperation;
use geo_next::algorithm::bool_ops::{BooleanOps, OpType};
use geo_types::{MultiPolygon, Polygon};
use std::panic::{self, AssertUnwindSafe};

/// Candidate: the `i_overlay` backed boolean ops introduced in `geo` 0.29.
#[derive(Debug, Default)]
pub struct OverlayClipper {
    subject: Vec<Polygon<f64>>,
    clip: Vec<Polygon<f64>>,
}

impl Clipper for OverlayClipper {
    type Paths = Vec<Polygon<f64>>;
    type Op = OpType;

    const NAME: &'static str = "geo-0.29-overlay";

    fn build_paths(rings: &[Vec<IntPoint>]) -> Self::Paths {
        rings.iter().filter_map(|ring| ring_polygon(ring)).collect()
    }

    fn add_paths(&mut self, paths: Self::Paths, role: PathRole) {
        match role {
            PathRole::Subject => self.subject.extend(paths),
            PathRole::Clip => self.clip.extend(paths),
        }
    }

    fn native_op(op: ClipOperation) -> OpType {
        match op {
            ClipOperation::Intersection => OpType::Intersection,
            ClipOperation::Union => OpType::Union,
            ClipOperation::Difference => OpType::Difference,
            ClipOperation::Xor => OpType::Xor,
        }
    }

    fn execute(&mut self, op: OpType, solution: &mut MultiPolygon<f64>) -> bool {
        let subject = std::mem::take(&mut self.subject);
        let clip = std::mem::take(&mut self.clip);

        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            let subject = even_odd_region(subject);
            let clip = even_odd_region(clip);
            subject.boolean_op(&clip, op)
        }));

        match result {
            Ok(polygons) => {
                *solution = polygons;
                true
            }
            Err(_) => {
                log::warn!("{} panicked during {:?}", Self::NAME, op);
                false
            }
        }
    }
}

fn even_odd_region(rings: Vec<Polygon<f64>>) -> MultiPolygon<f64> {
    fold_even_odd(rings, |acc, ring| acc.xor(ring))
}
