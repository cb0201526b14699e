//! Build script to generate the embedded word catalog
//!
//! Reads `data/catalog.txt` and generates Rust source code with a const table.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_catalog(
        "data/catalog.txt",
        &Path::new(&out_dir).join("catalog.rs"),
        "Built-in word catalog (category, difficulty, words)",
    );

    // Rebuild if the catalog changes
    println!("cargo:rerun-if-changed=data/catalog.txt");
}

fn generate_catalog(input_path: &str, output_path: &Path, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let mut entries = Vec::new();
    for (number, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut fields = line.split_whitespace();
        let (Some(category), Some(difficulty)) = (fields.next(), fields.next()) else {
            panic!("{input_path}:{}: expected `<category> <difficulty> <words...>`", number + 1);
        };
        let words: Vec<&str> = fields.collect();
        assert!(
            !words.is_empty(),
            "{input_path}:{}: entry has no words",
            number + 1
        );
        entries.push((category, difficulty, words));
    }

    let word_count: usize = entries.iter().map(|(_, _, words)| words.len()).sum();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word catalog").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const CATALOG: &[(&str, &str, &[&str])] = &[").unwrap();

    for (category, difficulty, words) in &entries {
        let quoted: Vec<String> = words.iter().map(|w| format!("\"{w}\"")).collect();
        writeln!(
            output,
            "    (\"{category}\", \"{difficulty}\", &[{}]),",
            quoted.join(", ")
        )
        .unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in CATALOG").unwrap();
    writeln!(output, "pub const CATALOG_WORD_COUNT: usize = {word_count};").unwrap();
}
