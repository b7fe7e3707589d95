//! Viewer state and the key-driven mode machine.
//!
//! Two independent cycles — model selection and view mode — each advanced by
//! an edge-triggered key press, plus the accumulated rotation angle. The
//! state is an explicit struct handed by reference to input handling and
//! rendering; nothing else mutates it.

use std::f32::consts::{PI, TAU};

use crate::models::{Model, CUBE, PENGER};
use crate::window::FrameInput;

/// Rotation rate in radians per second (half a turn per second).
pub const ANGULAR_RATE: f32 = PI;

/// What the render pass draws each frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    Vertices,
    Faces,
    #[default]
    Both,
}

impl ViewMode {
    /// Advance to the next mode in the fixed vertices -> faces -> both cycle.
    pub fn next(self) -> Self {
        match self {
            ViewMode::Vertices => ViewMode::Faces,
            ViewMode::Faces => ViewMode::Both,
            ViewMode::Both => ViewMode::Vertices,
        }
    }

    pub fn draws_vertices(self) -> bool {
        matches!(self, ViewMode::Vertices | ViewMode::Both)
    }

    pub fn draws_faces(self) -> bool {
        matches!(self, ViewMode::Faces | ViewMode::Both)
    }
}

/// Which of the built-in models is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModelId {
    #[default]
    Cube,
    Penger,
}

impl ModelId {
    pub fn next(self) -> Self {
        match self {
            ModelId::Cube => ModelId::Penger,
            ModelId::Penger => ModelId::Cube,
        }
    }

    /// The static geometry bound to this selector.
    pub fn data(self) -> &'static Model {
        match self {
            ModelId::Cube => &CUBE,
            ModelId::Penger => &PENGER,
        }
    }
}

/// Per-frame viewer state: active model, view mode, and rotation angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    pub model: ModelId,
    pub view_mode: ViewMode,
    pub angle: f32,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            model: ModelId::default(),
            view_mode: ViewMode::default(),
            angle: 0.0,
        }
    }

    pub fn model(&self) -> ModelId {
        self.model
    }

    /// Consume this frame's edge-triggered key events. Each latch advances
    /// its cycle exactly once, however many raw key events fed it.
    pub fn apply(&mut self, input: &FrameInput) {
        if input.cycle_view_mode {
            self.view_mode = self.view_mode.next();
        }
        if input.cycle_model {
            self.model = self.model.next();
        }
    }

    /// Accumulate rotation for an elapsed frame time in seconds. The wrap at
    /// 2π is cosmetic; rotation is periodic.
    pub fn advance(&mut self, dt_secs: f32) {
        self.angle = (self.angle + ANGULAR_RATE * dt_secs).rem_euclid(TAU);
    }
}
