//! Build script to generate the embedded word catalog
//!
//! Reads the catalog and association files and generates Rust source code with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

const MIN_LENGTH: usize = 4;
const MAX_LENGTH: usize = 10;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_catalog(
        "data/catalog.txt",
        &Path::new(&out_dir).join("catalog.rs"),
    );
    generate_associations(
        "data/associations.txt",
        &Path::new(&out_dir).join("associations.rs"),
    );

    // Rebuild if data files change
    println!("cargo:rerun-if-changed=data/catalog.txt");
    println!("cargo:rerun-if-changed=data/associations.txt");
}

/// Non-empty, non-comment lines of a data file
fn data_lines(content: &str) -> impl Iterator<Item = &str> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
}

fn generate_catalog(input_path: &str, output_path: &Path) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word catalog").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Built-in catalog entries as (word, category, description)").unwrap();
    writeln!(output, "pub const CATALOG: &[(&str, &str, &str)] = &[").unwrap();

    let mut count = 0usize;
    for line in data_lines(&content) {
        let fields: Vec<&str> = line.splitn(3, '|').map(str::trim).collect();
        let [word, category, description] = fields[..] else {
            panic!("{input_path}: expected word|category|description, got {line:?}");
        };

        assert!(
            (MIN_LENGTH..=MAX_LENGTH).contains(&word.len()),
            "{input_path}: '{word}' must be {MIN_LENGTH}-{MAX_LENGTH} letters"
        );
        assert!(
            word.chars().all(|c| c.is_ascii_lowercase()),
            "{input_path}: '{word}' contains non-lowercase chars"
        );

        writeln!(output, "    ({word:?}, {category:?}, {description:?}),").unwrap();
        count += 1;
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of entries in CATALOG").unwrap();
    writeln!(output, "pub const CATALOG_COUNT: usize = {count};").unwrap();
}

fn generate_associations(input_path: &str, output_path: &Path) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated association table").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Built-in hint associations as (word, tokens)").unwrap();
    writeln!(output, "pub const ASSOCIATIONS: &[(&str, &[&str])] = &[").unwrap();

    for line in data_lines(&content) {
        let (word, tokens) = line
            .split_once(':')
            .unwrap_or_else(|| panic!("{input_path}: expected word: token, token, got {line:?}"));

        let tokens: Vec<&str> = tokens
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect();

        writeln!(output, "    ({:?}, &{tokens:?}),", word.trim()).unwrap();
    }

    writeln!(output, "];").unwrap();
}
