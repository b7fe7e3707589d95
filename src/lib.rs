//! A real-time 3D wireframe viewer rendered on the CPU.
//!
//! This crate holds a small set of hand-authored polygonal models (a cube and
//! a low-poly penguin), spins them about the vertical axis, and draws them as
//! point markers and/or edge segments. SDL2 is used only for window
//! management, input, and presenting the frame; all drawing happens on a
//! CPU-owned color buffer.
//!
//! # Quick Start
//!
//! ```ignore
//! use wireview::prelude::*;
//!
//! let mut fb = Framebuffer::new(WINDOW_WIDTH, WINDOW_HEIGHT);
//! let viewport = Viewport::new(WINDOW_WIDTH, WINDOW_HEIGHT);
//! let state = ViewState::new();
//! render_model(state.model().data(), &state, &viewport, &mut fb);
//! ```

// Public API - exposed to library consumers
pub mod canvas;
pub mod colors;
pub mod framebuffer;
pub mod math;
pub mod models;
pub mod obj;
pub mod pipeline;
pub mod render;
pub mod state;
pub mod window;

// Internal modules - used within the crate only
pub(crate) mod text;

// Re-export commonly needed types at crate root for convenience
pub use canvas::Canvas;
pub use framebuffer::Framebuffer;
pub use models::Model;
pub use pipeline::Viewport;
pub use state::{ModelId, ViewMode, ViewState};

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use wireview::prelude::*;
/// ```
pub mod prelude {
    // Math
    pub use crate::math::vec2::Vec2;
    pub use crate::math::vec3::Vec3;

    // Geometry pipeline
    pub use crate::pipeline::{Viewport, CAMERA_DEPTH};

    // Models
    pub use crate::models::Model;

    // Rendering
    pub use crate::canvas::Canvas;
    pub use crate::framebuffer::Framebuffer;
    pub use crate::render::{draw_help_overlay, render_model};

    // State
    pub use crate::state::{ModelId, ViewMode, ViewState};

    // Window & Input
    pub use crate::window::{FrameInput, FrameLimiter, Window, FPS, WINDOW_HEIGHT, WINDOW_WIDTH};
}
