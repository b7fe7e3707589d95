//! Offline vertex-recentering rewriter.
//!
//! Finds every `{a, b, c}`-shaped numeric triple in the given source file,
//! computes the axis-aligned bounding-box center over all of them, subtracts
//! it, and rewrites the triples in place with 6-significant-digit formatting.
//! Running it a second time is a near-no-op since the data is already
//! centered.

use std::env;
use std::fs;
use std::ops::Range;
use std::process;

use wireview::obj::format_g6;

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: recenter <path-to-model-source>");
        process::exit(1);
    }
    let path = &args[1];

    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("Error reading {path}: {err}");
            process::exit(1);
        }
    };

    let rewritten = match recenter(&text) {
        Ok(rewritten) => rewritten,
        Err(err) => {
            eprintln!("Error: {err}");
            process::exit(1);
        }
    };

    if let Err(err) = fs::write(path, rewritten) {
        eprintln!("Error writing {path}: {err}");
        process::exit(1);
    }
    println!("Vertices re-centered and file overwritten.");
}

/// A `{a, b, c}` span in the source text, braces included.
struct Triple {
    span: Range<usize>,
    values: [f64; 3],
}

/// Scan for brace-delimited spans whose contents parse as exactly three
/// comma-separated numbers. Anything else between braces is left alone.
fn find_triples(text: &str) -> Vec<Triple> {
    let mut triples = Vec::new();
    let bytes = text.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] != b'{' {
            i += 1;
            continue;
        }
        let Some(close) = text[i + 1..].find('}') else {
            break;
        };
        let end = i + 1 + close;
        if let Some(values) = parse_triple(&text[i + 1..end]) {
            triples.push(Triple {
                span: i..end + 1,
                values,
            });
        }
        i = end + 1;
    }
    triples
}

fn parse_triple(body: &str) -> Option<[f64; 3]> {
    let mut values = [0.0f64; 3];
    let mut parts = body.split(',');
    for slot in values.iter_mut() {
        *slot = parts.next()?.trim().parse().ok()?;
    }
    if parts.next().is_some() {
        return None;
    }
    Some(values)
}

/// Rewrite every numeric triple in `text`, translated so the bounding-box
/// center of all triples lands at the origin.
fn recenter(text: &str) -> Result<String, String> {
    let triples = find_triples(text);
    if triples.is_empty() {
        return Err("no vertices found".to_string());
    }

    let mut min = triples[0].values;
    let mut max = triples[0].values;
    for triple in &triples[1..] {
        for axis in 0..3 {
            min[axis] = min[axis].min(triple.values[axis]);
            max[axis] = max[axis].max(triple.values[axis]);
        }
    }
    let center = [
        (min[0] + max[0]) / 2.0,
        (min[1] + max[1]) / 2.0,
        (min[2] + max[2]) / 2.0,
    ];

    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for triple in &triples {
        out.push_str(&text[last..triple.span.start]);
        out.push_str(&format!(
            "{{{}, {}, {}}}",
            format_g6(triple.values[0] - center[0]),
            format_g6(triple.values[1] - center[1]),
            format_g6(triple.values[2] - center[2])
        ));
        last = triple.span.end;
    }
    out.push_str(&text[last..]);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centers_on_the_bounding_box() {
        let input = "a {0, 0, 0} b {2, 2, 2} c";
        let output = recenter(input).unwrap();
        assert_eq!(output, "a {-1, -1, -1} b {1, 1, 1} c");
    }

    #[test]
    fn second_run_is_a_no_op() {
        let once = recenter("{0, 1, 4} {2, 3, 0}").unwrap();
        let twice = recenter(&once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn non_numeric_braces_are_left_alone() {
        let input = "fn main() { x } {1, 1, 1} {3, 1, 1}";
        let output = recenter(input).unwrap();
        assert_eq!(output, "fn main() { x } {-1, 0, 0} {1, 0, 0}");
    }

    #[test]
    fn pairs_and_quadruples_are_not_triples() {
        assert!(parse_triple("1, 2").is_none());
        assert!(parse_triple("1, 2, 3, 4").is_none());
        assert!(parse_triple(" 1 , 2.5 , -3 ").is_some());
    }

    #[test]
    fn no_triples_is_an_error() {
        assert!(recenter("nothing here").is_err());
    }

    #[test]
    fn already_centered_data_keeps_its_values() {
        let input = "{-0.5, -0.5, -0.5} {0.5, 0.5, 0.5}";
        assert_eq!(recenter(input).unwrap(), input);
    }
}
