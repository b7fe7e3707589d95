use super::Model;
use crate::math::vec3::Vec3;

const VERTICES: &[Vec3] = &[
    Vec3::new(-0.5, -0.5, -0.5),
    Vec3::new(0.5, -0.5, -0.5),
    Vec3::new(0.5, 0.5, -0.5),
    Vec3::new(-0.5, 0.5, -0.5),
    Vec3::new(-0.5, -0.5, 0.5),
    Vec3::new(0.5, -0.5, 0.5),
    Vec3::new(0.5, 0.5, 0.5),
    Vec3::new(-0.5, 0.5, 0.5),
];

const FACES: &[&[usize]] = &[
    // back
    &[0, 1, 2, 3],
    // front
    &[4, 5, 6, 7],
    // bottom
    &[0, 1, 5, 4],
    // top
    &[3, 2, 6, 7],
    // left
    &[0, 3, 7, 4],
    // right
    &[1, 2, 6, 5],
];

/// Unit cube centered at the origin.
pub const CUBE: Model = Model {
    name: "cube",
    vertices: VERTICES,
    faces: FACES,
};
