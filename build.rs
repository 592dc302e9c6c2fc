//! Build script to generate the embedded curated name list
//!
//! Reads `data/curated_names.csv` and generates Rust source with a const array
//! of `CuratedName` literals.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_name_list(
        "data/curated_names.csv",
        &Path::new(&out_dir).join("curated.rs"),
        "CURATED",
        "Curated ENS names usable as target words",
    );

    // Rebuild if the name list changes
    println!("cargo:rerun-if-changed=data/curated_names.csv");
}

fn generate_name_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    // Skip the header and blank/comment lines
    let rows: Vec<Vec<&str>> = content
        .lines()
        .skip(1)
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| line.split(',').map(str::trim).collect())
        .collect();

    assert!(!rows.is_empty(), "{input_path} has no names");

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated name list").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[CuratedName] = &[").unwrap();

    for row in &rows {
        let [name, difficulty, category, has_avatar] = row.as_slice() else {
            panic!("Malformed row in {input_path}: {row:?}");
        };
        writeln!(
            output,
            "    CuratedName {{ name: \"{name}\", difficulty: Difficulty::{}, category: Category::{}, has_avatar: {} }},",
            variant(difficulty),
            variant(category),
            has_avatar.parse::<bool>().unwrap_or_else(|e| panic!("Bad has_avatar for {name}: {e}"))
        )
        .unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of names in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {};", rows.len()).unwrap();
}

/// `"easy"` -> `"Easy"`
fn variant(value: &str) -> String {
    let mut chars = value.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_ascii_uppercase().to_string() + chars.as_str()
    })
}
