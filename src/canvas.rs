//! The drawing capability the render pass depends on.
//!
//! The render pass never touches pixels directly; it emits draw calls through
//! this trait. [`crate::framebuffer::Framebuffer`] is the real backend; tests
//! substitute a recording implementation.

/// Minimal canvas interface: clear plus the three draw calls the viewer
/// needs. Coordinates are screen pixels, colors ARGB8888.
pub trait Canvas {
    fn clear(&mut self, color: u32);

    /// Draw a filled square marker of `size` x `size` pixels centered on
    /// (`x`, `y`).
    fn draw_point_marker(&mut self, x: f32, y: f32, size: u32, color: u32);

    /// Draw a line segment between two screen points.
    fn draw_line_segment(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, thickness: u32, color: u32);

    /// Draw a text overlay with its top-left corner at (`x`, `y`). `scale`
    /// is an integer multiplier over the built-in 5x7 glyph cell.
    fn draw_text(&mut self, text: &str, x: i32, y: i32, scale: u32, color: u32);
}
