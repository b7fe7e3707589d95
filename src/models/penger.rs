use super::Model;
use crate::math::vec3::Vec3;

// Blocky low-poly penguin assembled from seven boxes, already run through
// the recentering tool.
const VERTICES: &[Vec3] = &[
    // body
    Vec3::new(-0.22, -0.4, -0.2),
    Vec3::new(0.22, -0.4, -0.2),
    Vec3::new(0.22, 0.2, -0.2),
    Vec3::new(-0.22, 0.2, -0.2),
    Vec3::new(-0.22, -0.4, 0.16),
    Vec3::new(0.22, -0.4, 0.16),
    Vec3::new(0.22, 0.2, 0.16),
    Vec3::new(-0.22, 0.2, 0.16),
    // head
    Vec3::new(-0.16, 0.2, -0.13),
    Vec3::new(0.16, 0.2, -0.13),
    Vec3::new(0.16, 0.48, -0.13),
    Vec3::new(-0.16, 0.48, -0.13),
    Vec3::new(-0.16, 0.2, 0.13),
    Vec3::new(0.16, 0.2, 0.13),
    Vec3::new(0.16, 0.48, 0.13),
    Vec3::new(-0.16, 0.48, 0.13),
    // beak
    Vec3::new(-0.05, 0.28, 0.13),
    Vec3::new(0.05, 0.28, 0.13),
    Vec3::new(0.05, 0.36, 0.13),
    Vec3::new(-0.05, 0.36, 0.13),
    Vec3::new(-0.05, 0.28, 0.2),
    Vec3::new(0.05, 0.28, 0.2),
    Vec3::new(0.05, 0.36, 0.2),
    Vec3::new(-0.05, 0.36, 0.2),
    // left foot
    Vec3::new(-0.18, -0.48, -0.06),
    Vec3::new(-0.04, -0.48, -0.06),
    Vec3::new(-0.04, -0.4, -0.06),
    Vec3::new(-0.18, -0.4, -0.06),
    Vec3::new(-0.18, -0.48, 0.2),
    Vec3::new(-0.04, -0.48, 0.2),
    Vec3::new(-0.04, -0.4, 0.2),
    Vec3::new(-0.18, -0.4, 0.2),
    // right foot
    Vec3::new(0.04, -0.48, -0.06),
    Vec3::new(0.18, -0.48, -0.06),
    Vec3::new(0.18, -0.4, -0.06),
    Vec3::new(0.04, -0.4, -0.06),
    Vec3::new(0.04, -0.48, 0.2),
    Vec3::new(0.18, -0.48, 0.2),
    Vec3::new(0.18, -0.4, 0.2),
    Vec3::new(0.04, -0.4, 0.2),
    // left wing
    Vec3::new(-0.3, -0.18, -0.09),
    Vec3::new(-0.22, -0.18, -0.09),
    Vec3::new(-0.22, 0.14, -0.09),
    Vec3::new(-0.3, 0.14, -0.09),
    Vec3::new(-0.3, -0.18, 0.09),
    Vec3::new(-0.22, -0.18, 0.09),
    Vec3::new(-0.22, 0.14, 0.09),
    Vec3::new(-0.3, 0.14, 0.09),
    // right wing
    Vec3::new(0.22, -0.18, -0.09),
    Vec3::new(0.3, -0.18, -0.09),
    Vec3::new(0.3, 0.14, -0.09),
    Vec3::new(0.22, 0.14, -0.09),
    Vec3::new(0.22, -0.18, 0.09),
    Vec3::new(0.3, -0.18, 0.09),
    Vec3::new(0.3, 0.14, 0.09),
    Vec3::new(0.22, 0.14, 0.09),
];

const FACES: &[&[usize]] = &[
    // body
    &[0, 1, 2, 3],
    &[4, 5, 6, 7],
    &[0, 1, 5, 4],
    &[3, 2, 6, 7],
    &[0, 3, 7, 4],
    &[1, 2, 6, 5],
    // head
    &[8, 9, 10, 11],
    &[12, 13, 14, 15],
    &[8, 9, 13, 12],
    &[11, 10, 14, 15],
    &[8, 11, 15, 12],
    &[9, 10, 14, 13],
    // beak
    &[16, 17, 18, 19],
    &[20, 21, 22, 23],
    &[16, 17, 21, 20],
    &[19, 18, 22, 23],
    &[16, 19, 23, 20],
    &[17, 18, 22, 21],
    // left foot
    &[24, 25, 26, 27],
    &[28, 29, 30, 31],
    &[24, 25, 29, 28],
    &[27, 26, 30, 31],
    &[24, 27, 31, 28],
    &[25, 26, 30, 29],
    // right foot
    &[32, 33, 34, 35],
    &[36, 37, 38, 39],
    &[32, 33, 37, 36],
    &[35, 34, 38, 39],
    &[32, 35, 39, 36],
    &[33, 34, 38, 37],
    // left wing
    &[40, 41, 42, 43],
    &[44, 45, 46, 47],
    &[40, 41, 45, 44],
    &[43, 42, 46, 47],
    &[40, 43, 47, 44],
    &[41, 42, 46, 45],
    // right wing
    &[48, 49, 50, 51],
    &[52, 53, 54, 55],
    &[48, 49, 53, 52],
    &[51, 50, 54, 55],
    &[48, 51, 55, 52],
    &[49, 50, 54, 53],
];

/// The stylized low-poly penguin.
pub const PENGER: Model = Model {
    name: "penger",
    vertices: VERTICES,
    faces: FACES,
};
