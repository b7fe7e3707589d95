//! CPU-owned color buffer with the pixel-level drawing primitives.
//!
//! The [`Framebuffer`] is the concrete [`Canvas`] backend: everything is
//! rendered here on the CPU and the buffer is handed to the window as raw
//! ARGB8888 bytes once per frame.

use crate::canvas::Canvas;
use crate::colors;
use crate::text;

pub struct Framebuffer {
    color_buffer: Vec<u32>,
    width: u32,
    height: u32,
}

impl Framebuffer {
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width * height) as usize;
        Self {
            color_buffer: vec![colors::BACKGROUND; size],
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            let index = (y as u32 * self.width + x as u32) as usize;
            self.color_buffer[index] = color;
        }
    }

    #[inline]
    pub fn pixel(&self, x: i32, y: i32) -> Option<u32> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some(self.color_buffer[(y as u32 * self.width + x as u32) as usize])
        } else {
            None
        }
    }

    #[inline]
    pub fn draw_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: u32) {
        for dy in 0..height {
            for dx in 0..width {
                self.set_pixel(x + dx, y + dy, color);
            }
        }
    }

    /// Draws a line between two points using Bresenham's line algorithm.
    ///
    /// Steps along the major axis with integer arithmetic, accumulating an
    /// error term that decides when to also step along the minor axis.
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: u32) {
        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();
        let step_x = if x0 < x1 { 1 } else { -1 };
        let step_y = if y0 < y1 { 1 } else { -1 };

        let mut x = x0;
        let mut y = y0;
        let mut error = dx - dy;

        loop {
            self.set_pixel(x, y, color);
            if x == x1 && y == y1 {
                break;
            }
            let doubled = 2 * error;
            if doubled > -dy {
                error -= dy;
                x += step_x;
            }
            if doubled < dx {
                error += dx;
                y += step_y;
            }
        }
    }

    /// View of the buffer as raw bytes for the SDL streaming texture.
    pub fn as_bytes(&self) -> &[u8] {
        unsafe {
            std::slice::from_raw_parts(
                self.color_buffer.as_ptr() as *const u8,
                self.color_buffer.len() * 4,
            )
        }
    }
}

impl Canvas for Framebuffer {
    fn clear(&mut self, color: u32) {
        self.color_buffer.fill(color);
    }

    fn draw_point_marker(&mut self, x: f32, y: f32, size: u32, color: u32) {
        let half = size as i32 / 2;
        self.draw_rect(x as i32 - half, y as i32 - half, size as i32, size as i32, color);
    }

    fn draw_line_segment(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, thickness: u32, color: u32) {
        let (x1, y1, x2, y2) = (x1 as i32, y1 as i32, x2 as i32, y2 as i32);
        // Thickness > 1 is drawn as parallel lines offset along the minor axis.
        let steep = (y2 - y1).abs() > (x2 - x1).abs();
        for t in 0..thickness.max(1) as i32 {
            let offset = t - (thickness as i32 - 1) / 2;
            if steep {
                self.draw_line(x1 + offset, y1, x2 + offset, y2, color);
            } else {
                self.draw_line(x1, y1 + offset, x2, y2 + offset, color);
            }
        }
    }

    fn draw_text(&mut self, string: &str, x: i32, y: i32, scale: u32, color: u32) {
        let scale = scale.max(1) as i32;
        let mut pen_x = x;
        for ch in string.chars() {
            let rows = text::glyph(ch);
            for (row, &bits) in rows.iter().enumerate() {
                for col in 0..text::GLYPH_WIDTH {
                    if bits >> (text::GLYPH_WIDTH - 1 - col) & 1 != 0 {
                        self.draw_rect(
                            pen_x + col as i32 * scale,
                            y + row as i32 * scale,
                            scale,
                            scale,
                            color,
                        );
                    }
                }
            }
            pen_x += text::GLYPH_ADVANCE as i32 * scale;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_buffer_is_background() {
        let fb = Framebuffer::new(4, 4);
        assert_eq!(fb.pixel(0, 0), Some(colors::BACKGROUND));
        assert_eq!(fb.pixel(3, 3), Some(colors::BACKGROUND));
    }

    #[test]
    fn set_pixel_out_of_bounds_is_ignored() {
        let mut fb = Framebuffer::new(4, 4);
        fb.set_pixel(-1, 0, colors::VERTEX);
        fb.set_pixel(0, 4, colors::VERTEX);
        fb.set_pixel(100, 100, colors::VERTEX);
        assert!(fb
            .color_buffer
            .iter()
            .all(|&px| px == colors::BACKGROUND));
    }

    #[test]
    fn clear_fills_every_pixel() {
        let mut fb = Framebuffer::new(3, 3);
        fb.set_pixel(1, 1, colors::VERTEX);
        fb.clear(colors::EDGE);
        assert!(fb.color_buffer.iter().all(|&px| px == colors::EDGE));
    }

    #[test]
    fn point_marker_is_centered() {
        let mut fb = Framebuffer::new(20, 20);
        fb.draw_point_marker(10.0, 10.0, 7, colors::VERTEX);
        // 7x7 square centered on (10, 10) spans 7..=13 in both axes.
        assert_eq!(fb.pixel(7, 7), Some(colors::VERTEX));
        assert_eq!(fb.pixel(13, 13), Some(colors::VERTEX));
        assert_eq!(fb.pixel(10, 10), Some(colors::VERTEX));
        assert_eq!(fb.pixel(6, 10), Some(colors::BACKGROUND));
        assert_eq!(fb.pixel(14, 10), Some(colors::BACKGROUND));
    }

    #[test]
    fn line_covers_both_endpoints() {
        let mut fb = Framebuffer::new(20, 20);
        fb.draw_line_segment(2.0, 3.0, 15.0, 11.0, 1, colors::EDGE);
        assert_eq!(fb.pixel(2, 3), Some(colors::EDGE));
        assert_eq!(fb.pixel(15, 11), Some(colors::EDGE));
    }

    #[test]
    fn horizontal_line_is_solid() {
        let mut fb = Framebuffer::new(20, 20);
        fb.draw_line_segment(1.0, 5.0, 10.0, 5.0, 1, colors::EDGE);
        for x in 1..=10 {
            assert_eq!(fb.pixel(x, 5), Some(colors::EDGE));
        }
    }

    #[test]
    fn as_bytes_length_matches_buffer() {
        let fb = Framebuffer::new(8, 8);
        assert_eq!(fb.as_bytes().len(), 8 * 8 * 4);
    }

    #[test]
    fn draw_text_marks_pixels() {
        let mut fb = Framebuffer::new(40, 20);
        fb.draw_text("V", 0, 0, 1, colors::TEXT);
        let lit = fb.color_buffer.iter().filter(|&&px| px == colors::TEXT).count();
        // 'V' glyph has 13 set bits.
        assert_eq!(lit, 13);
    }
}
