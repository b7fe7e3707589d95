//! Fixed color palette, ARGB8888 words.

pub const BACKGROUND: u32 = 0xFF000000;
pub const VERTEX: u32 = 0xFFFF0000;
pub const EDGE: u32 = 0xFF00FF00;
pub const TEXT: u32 = 0xFF0000FF;
