//! The per-frame render pass.
//!
//! Walks the active model and emits draw calls through the [`Canvas`]
//! capability: one point marker per vertex in vertex mode, one line segment
//! per face edge in face mode. Draw calls are issued in model-list order;
//! an edge shared by two faces is drawn twice, once per face traversal.

use crate::canvas::Canvas;
use crate::colors;
use crate::models::Model;
use crate::pipeline::{project_vertex, Viewport};
use crate::state::ViewState;

/// Side length of the square vertex marker, pixels.
pub const VERTEX_SIZE: u32 = 7;
/// Wireframe line thickness, pixels.
pub const LINE_THICKNESS: u32 = 1;

/// Emit the draw calls for one frame of the active model.
pub fn render_model(
    model: &Model,
    state: &ViewState,
    viewport: &Viewport,
    canvas: &mut impl Canvas,
) {
    if state.view_mode.draws_vertices() {
        for &vertex in model.vertices.iter() {
            let p = project_vertex(vertex, state.angle, viewport);
            canvas.draw_point_marker(p.x, p.y, VERTEX_SIZE, colors::VERTEX);
        }
    }

    if state.view_mode.draws_faces() {
        for face in model.faces.iter() {
            for index in 0..face.len() {
                let a = model.vertices[face[index]];
                let b = model.vertices[face[(index + 1) % face.len()]];

                let p1 = project_vertex(a, state.angle, viewport);
                let p2 = project_vertex(b, state.angle, viewport);

                canvas.draw_line_segment(p1.x, p1.y, p2.x, p2.y, LINE_THICKNESS, colors::EDGE);
            }
        }
    }
}

/// Draw the two key-help lines in the top-left corner.
pub fn draw_help_overlay(canvas: &mut impl Canvas) {
    canvas.draw_text(
        "V - [V]iew mode - Switch between vertices/faces/both",
        10,
        10,
        2,
        colors::TEXT,
    );
    canvas.draw_text(
        "M - [M]odel - Switch between cube/penger model",
        10,
        30,
        2,
        colors::TEXT,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::vec3::Vec3;
    use crate::state::{ViewMode, ViewState};

    #[derive(Debug, Clone, PartialEq)]
    enum DrawCall {
        Clear(u32),
        Point { x: f32, y: f32, size: u32 },
        Line { x1: f32, y1: f32, x2: f32, y2: f32 },
        Text(String),
    }

    #[derive(Default)]
    struct RecordingCanvas {
        calls: Vec<DrawCall>,
    }

    impl Canvas for RecordingCanvas {
        fn clear(&mut self, color: u32) {
            self.calls.push(DrawCall::Clear(color));
        }

        fn draw_point_marker(&mut self, x: f32, y: f32, size: u32, _color: u32) {
            self.calls.push(DrawCall::Point { x, y, size });
        }

        fn draw_line_segment(
            &mut self,
            x1: f32,
            y1: f32,
            x2: f32,
            y2: f32,
            _thickness: u32,
            _color: u32,
        ) {
            self.calls.push(DrawCall::Line { x1, y1, x2, y2 });
        }

        fn draw_text(&mut self, text: &str, _x: i32, _y: i32, _scale: u32, _color: u32) {
            self.calls.push(DrawCall::Text(text.to_string()));
        }
    }

    const VIEWPORT: Viewport = Viewport::new(800, 800);

    fn triangle_model() -> Model {
        const VERTICES: &[Vec3] = &[
            Vec3::new(-0.2, -0.2, 0.0),
            Vec3::new(0.2, -0.2, 0.0),
            Vec3::new(0.0, 0.2, 0.0),
        ];
        const FACES: &[&[usize]] = &[&[0, 1, 2]];
        Model {
            name: "triangle",
            vertices: VERTICES,
            faces: FACES,
        }
    }

    fn state_with_mode(mode: ViewMode) -> ViewState {
        let mut state = ViewState::new();
        state.view_mode = mode;
        state
    }

    #[test]
    fn vertex_mode_emits_one_marker_per_vertex_in_order() {
        let model = triangle_model();
        let mut canvas = RecordingCanvas::default();
        render_model(&model, &state_with_mode(ViewMode::Vertices), &VIEWPORT, &mut canvas);

        assert_eq!(canvas.calls.len(), 3);
        for (i, call) in canvas.calls.iter().enumerate() {
            let expected = project_vertex(model.vertices[i], 0.0, &VIEWPORT);
            assert_eq!(
                *call,
                DrawCall::Point {
                    x: expected.x,
                    y: expected.y,
                    size: VERTEX_SIZE
                }
            );
        }
    }

    #[test]
    fn face_mode_emits_k_edges_for_a_k_gon() {
        let model = triangle_model();
        let mut canvas = RecordingCanvas::default();
        render_model(&model, &state_with_mode(ViewMode::Faces), &VIEWPORT, &mut canvas);

        assert_eq!(canvas.calls.len(), 3);
        // Edge i connects face[i] to face[(i + 1) % k], including the
        // wraparound edge back to the first vertex.
        let face = model.faces[0];
        for (i, call) in canvas.calls.iter().enumerate() {
            let a = project_vertex(model.vertices[face[i]], 0.0, &VIEWPORT);
            let b = project_vertex(model.vertices[face[(i + 1) % face.len()]], 0.0, &VIEWPORT);
            assert_eq!(
                *call,
                DrawCall::Line {
                    x1: a.x,
                    y1: a.y,
                    x2: b.x,
                    y2: b.y
                }
            );
        }
    }

    #[test]
    fn both_mode_draws_vertices_then_edges() {
        let model = triangle_model();
        let mut canvas = RecordingCanvas::default();
        render_model(&model, &state_with_mode(ViewMode::Both), &VIEWPORT, &mut canvas);

        assert_eq!(canvas.calls.len(), 6);
        assert!(matches!(canvas.calls[0], DrawCall::Point { .. }));
        assert!(matches!(canvas.calls[5], DrawCall::Line { .. }));
    }

    #[test]
    fn shared_edges_are_drawn_once_per_face() {
        // Two triangles sharing the edge 1-2: six segments total, the shared
        // edge drawn once per face. No de-duplication.
        const VERTICES: &[Vec3] = &[
            Vec3::new(-0.2, 0.0, 0.0),
            Vec3::new(0.0, 0.2, 0.0),
            Vec3::new(0.0, -0.2, 0.0),
            Vec3::new(0.2, 0.0, 0.0),
        ];
        const FACES: &[&[usize]] = &[&[0, 1, 2], &[1, 3, 2]];
        let model = Model {
            name: "quad",
            vertices: VERTICES,
            faces: FACES,
        };

        let mut canvas = RecordingCanvas::default();
        render_model(&model, &state_with_mode(ViewMode::Faces), &VIEWPORT, &mut canvas);
        assert_eq!(canvas.calls.len(), 6);
    }

    #[test]
    fn rotation_angle_moves_the_projection() {
        let model = triangle_model();
        let mut at_rest = RecordingCanvas::default();
        render_model(&model, &state_with_mode(ViewMode::Vertices), &VIEWPORT, &mut at_rest);

        let mut turned_state = state_with_mode(ViewMode::Vertices);
        turned_state.angle = 1.0;
        let mut turned = RecordingCanvas::default();
        render_model(&model, &turned_state, &VIEWPORT, &mut turned);

        assert_ne!(at_rest.calls, turned.calls);
    }

    #[test]
    fn help_overlay_is_two_lines() {
        let mut canvas = RecordingCanvas::default();
        draw_help_overlay(&mut canvas);
        assert_eq!(canvas.calls.len(), 2);
        assert!(matches!(&canvas.calls[0], DrawCall::Text(t) if t.contains("[V]iew")));
        assert!(matches!(&canvas.calls[1], DrawCall::Text(t) if t.contains("[M]odel")));
    }
}
