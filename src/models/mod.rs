//! Static, hand-authored model geometry.
//!
//! Models are compiled into the binary as const tables, produced offline by
//! the `obj2model` tool and re-centered by `recenter`. Nothing mutates them
//! at runtime.

mod cube;
mod penger;

use crate::math::vec3::Vec3;

pub use cube::CUBE;
pub use penger::PENGER;

/// An immutable polygonal model: a vertex list plus a list of face loops.
///
/// Each face is an ordered loop of indices into `vertices`; edges are the
/// consecutive pairs with wraparound. Every index must be in range — that is
/// an authoring invariant, not something the renderer checks per frame.
#[derive(Clone, Copy, Debug)]
pub struct Model {
    pub name: &'static str,
    pub vertices: &'static [Vec3],
    pub faces: &'static [&'static [usize]],
}

impl Model {
    /// Number of edges the wireframe pass will draw (shared edges counted
    /// once per face that uses them).
    pub fn edge_count(&self) -> usize {
        self.faces.iter().map(|face| face.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_invariants(model: &Model) {
        assert!(!model.vertices.is_empty(), "{}: no vertices", model.name);
        for (i, face) in model.faces.iter().enumerate() {
            assert!(face.len() >= 3, "{}: face {i} has < 3 vertices", model.name);
            for &index in face.iter() {
                assert!(
                    index < model.vertices.len(),
                    "{}: face {i} index {index} out of range",
                    model.name
                );
            }
        }
    }

    #[test]
    fn cube_is_well_formed() {
        check_invariants(&CUBE);
        assert_eq!(CUBE.vertices.len(), 8);
        assert_eq!(CUBE.faces.len(), 6);
        assert_eq!(CUBE.edge_count(), 24);
    }

    #[test]
    fn penger_is_well_formed() {
        check_invariants(&PENGER);
    }

    #[test]
    fn models_are_centered() {
        // Both shipped models went through the recentering tool, so their
        // bounding-box centers sit at the origin.
        for model in [&CUBE, &PENGER] {
            let first = model.vertices[0];
            let (mut min, mut max) = (first, first);
            for v in model.vertices.iter() {
                min = crate::math::vec3::Vec3::new(min.x.min(v.x), min.y.min(v.y), min.z.min(v.z));
                max = crate::math::vec3::Vec3::new(max.x.max(v.x), max.y.max(v.y), max.z.max(v.z));
            }
            let center = (min + max) * 0.5;
            assert!(center.magnitude() < 1e-6, "{} off-center", model.name);
        }
    }

    #[test]
    fn models_stay_clear_of_the_projection_plane() {
        // With the fixed camera depth, every vertex must keep a positive z
        // after translation for any rotation angle.
        for model in [&CUBE, &PENGER] {
            for v in model.vertices.iter() {
                let radius = (v.x * v.x + v.z * v.z).sqrt();
                assert!(
                    radius < crate::pipeline::CAMERA_DEPTH,
                    "{} vertex too close to the projection plane",
                    model.name
                );
            }
        }
    }
}
