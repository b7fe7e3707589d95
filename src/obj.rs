//! OBJ subset parsing and model-source emission for the `obj2model` tool.
//!
//! Only `v x y z` and `f i j k ...` lines are honored; face entries may
//! carry `/texcoord/normal` suffixes, which are dropped keeping the leading
//! vertex index. Blank lines, `#` comments, and every other prefix are
//! skipped. Any malformed vertex or face line aborts the whole conversion
//! with a line-numbered error, consistent with the tool's one-shot batch
//! nature.

use std::error::Error;
use std::fmt;

/// Parsed OBJ geometry: vertices plus 0-based face index loops.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjModel {
    pub vertices: Vec<(f64, f64, f64)>,
    pub faces: Vec<Vec<usize>>,
}

/// A line-numbered conversion failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub line: usize,
    pub message: String,
}

impl ParseError {
    fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

impl Error for ParseError {}

/// Parse the supported OBJ subset out of `source`.
pub fn parse_obj(source: &str) -> Result<ObjModel, ParseError> {
    let mut vertices = Vec::new();
    let mut faces = Vec::new();

    for (index, raw_line) in source.lines().enumerate() {
        let line_num = index + 1;
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        match fields[0] {
            "v" => vertices.push(parse_vertex(&fields, line_num)?),
            "f" => faces.push(parse_face(&fields, line_num)?),
            // All other prefixes (vt, vn, g, o, s, usemtl, ...) are ignored.
            _ => {}
        }
    }

    Ok(ObjModel { vertices, faces })
}

fn parse_vertex(fields: &[&str], line: usize) -> Result<(f64, f64, f64), ParseError> {
    if fields.len() < 4 {
        return Err(ParseError::new(line, "not enough components for vertex"));
    }
    let mut components = [0.0f64; 3];
    for (slot, field) in components.iter_mut().zip(&fields[1..4]) {
        *slot = field
            .parse()
            .map_err(|_| ParseError::new(line, format!("invalid vertex component {field:?}")))?;
    }
    Ok((components[0], components[1], components[2]))
}

fn parse_face(fields: &[&str], line: usize) -> Result<Vec<usize>, ParseError> {
    if fields.len() < 4 {
        // at least "f i j k"
        return Err(ParseError::new(line, "face line has too few vertices"));
    }
    let mut indices = Vec::with_capacity(fields.len() - 1);
    for &field in &fields[1..] {
        // Faces can be written as "v", "v/vt", "v//vn", or "v/vt/vn"; only
        // the vertex index before the first '/' matters.
        let lead = field.split('/').next().unwrap_or(field);
        let index: usize = lead
            .parse()
            .map_err(|_| ParseError::new(line, format!("invalid face index {field:?}")))?;
        if index == 0 {
            return Err(ParseError::new(line, "face index must be positive"));
        }
        // OBJ indices are 1-based.
        indices.push(index - 1);
    }
    Ok(indices)
}

/// Format a float with 6 significant digits, Go `%.6g` style: shortest of
/// decimal and exponent notation, trailing zeros trimmed.
pub fn format_g6(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let exp = value.abs().log10().floor() as i32;
    if !(-4..6).contains(&exp) {
        let formatted = format!("{:.5e}", value);
        let (mantissa, exponent) = formatted
            .split_once('e')
            .expect("{:e} always contains an exponent");
        let mantissa = mantissa.trim_end_matches('0').trim_end_matches('.');
        let exponent: i32 = exponent.parse().expect("exponent is an integer");
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exponent.abs())
    } else {
        let decimals = (6 - 1 - exp).max(0) as usize;
        let formatted = format!("{:.*}", decimals, value);
        if formatted.contains('.') {
            formatted
                .trim_end_matches('0')
                .trim_end_matches('.')
                .to_string()
        } else {
            formatted
        }
    }
}

/// A float literal for emitted Rust source (always carries a decimal point
/// or exponent so it type-checks as f32).
fn float_literal(value: f64) -> String {
    let s = format_g6(value);
    if s.contains('.') || s.contains('e') {
        s
    } else {
        format!("{s}.0")
    }
}

/// Emit the parsed geometry as a Rust model-data module in this crate's
/// `models/` style. `name` becomes the module-level const name.
pub fn emit_model_source(name: &str, model: &ObjModel) -> String {
    let const_name = name.to_ascii_uppercase();
    let mut out = String::new();

    out.push_str("use super::Model;\n");
    out.push_str("use crate::math::vec3::Vec3;\n\n");

    out.push_str("const VERTICES: &[Vec3] = &[\n");
    for &(x, y, z) in &model.vertices {
        out.push_str(&format!(
            "    Vec3::new({}, {}, {}),\n",
            float_literal(x),
            float_literal(y),
            float_literal(z)
        ));
    }
    out.push_str("];\n\n");

    out.push_str("const FACES: &[&[usize]] = &[\n");
    for face in &model.faces {
        let indices: Vec<String> = face.iter().map(usize::to_string).collect();
        out.push_str(&format!("    &[{}],\n", indices.join(", ")));
    }
    out.push_str("];\n\n");

    out.push_str(&format!(
        "pub const {const_name}: Model = Model {{\n    name: \"{name}\",\n    vertices: VERTICES,\n    faces: FACES,\n}};\n"
    ));

    out
}
