//! Offline OBJ-to-model-source converter.
//!
//! Reads the supported OBJ subset and prints a Rust model-data module on
//! stdout, ready to drop into `src/models/`. Any parse failure aborts with a
//! line-numbered message and a non-zero exit.

use std::env;
use std::fs;
use std::path::Path;
use std::process;

use wireview::obj;

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: obj2model <path-to-obj>");
        process::exit(1);
    }
    let path = &args[1];

    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("Error reading {path}: {err}");
            process::exit(1);
        }
    };

    let model = match obj::parse_obj(&source) {
        Ok(model) => model,
        Err(err) => {
            eprintln!("Error converting OBJ: {err}");
            process::exit(1);
        }
    };

    print!("{}", obj::emit_model_source(&module_name(path), &model));
}

/// Derive a const-friendly model name from the input file stem.
fn module_name(path: &str) -> String {
    let stem = Path::new(path)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("model");
    let cleaned: String = stem
        .chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() {
                ch.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();
    if cleaned.chars().next().is_some_and(|ch| ch.is_ascii_digit()) {
        format!("model_{cleaned}")
    } else if cleaned.is_empty() {
        "model".to_string()
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_from_stem() {
        assert_eq!(module_name("assets/penger.obj"), "penger");
        assert_eq!(module_name("My Model.obj"), "my_model");
        assert_eq!(module_name("3dthing.obj"), "model_3dthing");
    }
}
