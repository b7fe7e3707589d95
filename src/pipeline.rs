//! The per-vertex geometry pipeline.
//!
//! Every vertex takes the same fixed path each frame:
//!
//! 1. rotate about the vertical axis by the current angle
//! 2. translate along Z by [`CAMERA_DEPTH`]
//! 3. perspective-divide to normalized device coordinates
//! 4. map normalized coordinates to screen pixels
//!
//! The stages only compose correctly in this order; [`project_vertex`] is the
//! canonical composition.

use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;

/// Fixed distance the model is pushed away from the projection origin so the
/// perspective division never sees z near zero for unit-scale models.
pub const CAMERA_DEPTH: f32 = 1.0;

/// Screen dimensions for the normalized-to-pixel mapping.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Map a normalized-device point to screen pixel coordinates.
    ///
    /// X maps [-1, 1] onto [0, width]; Y is flipped because screen space
    /// grows downward. One-way: applying this to an already-mapped point is a
    /// caller error and is not detected.
    pub fn to_screen(&self, ndc: Vec2) -> Vec2 {
        Vec2 {
            x: (ndc.x + 1.0) / 2.0 * self.width as f32,
            y: (1.0 - (ndc.y + 1.0) / 2.0) * self.height as f32,
        }
    }
}

/// Run one vertex through the full rotate -> translate -> project -> screen
/// pipeline.
pub fn project_vertex(vertex: Vec3, angle: f32, viewport: &Viewport) -> Vec2 {
    viewport.to_screen(
        vertex
            .rotate_y(angle)
            .translate_z(CAMERA_DEPTH)
            .project(),
    )
}
