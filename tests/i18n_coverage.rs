//! Integration test ensuring the two translation tables never drift apart.
//!
//! New display strings are usually added to one language first; this test
//! parses the i18n source and fails when a key exists in only one table.
//!
//! Run with: cargo test --test i18n_coverage

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

/// Extract the key set of one `lazy_static` translation table by scanning
/// the source between `static ref <NAME>` and the closing `.collect()`.
fn table_keys(source: &str, table_name: &str) -> HashSet<String> {
    let mut keys = HashSet::new();
    let mut in_table = false;

    for line in source.lines() {
        let trimmed = line.trim();

        if trimmed.starts_with(&format!("static ref {}", table_name)) {
            in_table = true;
            continue;
        }
        if !in_table {
            continue;
        }
        if trimmed.starts_with(".collect()") {
            break;
        }

        // Entries look like: ("key", "value"),
        if let Some(rest) = trimmed.strip_prefix("(\"") {
            if let Some(end) = rest.find('"') {
                keys.insert(rest[..end].to_string());
            }
        }
    }

    keys
}

fn i18n_source() -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src/i18n.rs");
    fs::read_to_string(&path).expect("Failed to read src/i18n.rs")
}

#[test]
fn both_languages_define_the_same_keys() {
    let source = i18n_source();
    let en = table_keys(&source, "EN");
    let zh = table_keys(&source, "ZH");

    assert!(!en.is_empty(), "failed to parse the EN table");
    assert!(!zh.is_empty(), "failed to parse the ZH table");

    let missing_in_zh: Vec<&String> = en.difference(&zh).collect();
    let missing_in_en: Vec<&String> = zh.difference(&en).collect();

    assert!(
        missing_in_zh.is_empty(),
        "keys missing from the ZH table: {:?}",
        missing_in_zh
    );
    assert!(
        missing_in_en.is_empty(),
        "keys missing from the EN table: {:?}",
        missing_in_en
    );
}

#[test]
fn every_static_label_in_the_page_skeleton_has_a_translation() {
    let i18n = i18n_source();
    let en = table_keys(&i18n, "EN");

    // Collect every data-i18n key referenced by the skeleton and form
    // builders.
    let mut referenced = HashSet::new();
    for file in ["src/ui/setup.rs"] {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(file);
        let source = fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to read {file}"));
        for line in source.lines() {
            let mut rest = line;
            while let Some(start) = rest.find("\"data-i18n\", \"") {
                let tail = &rest[start + "\"data-i18n\", \"".len()..];
                if let Some(end) = tail.find('"') {
                    referenced.insert(tail[..end].to_string());
                    rest = &tail[end..];
                } else {
                    break;
                }
            }
        }
    }

    // Keys passed through the helper builders show up as plain string
    // literals in calls; the ones above cover the attribute form. Either
    // way, anything referenced must exist in the tables.
    let unknown: Vec<&String> = referenced.iter().filter(|k| !en.contains(*k)).collect();
    assert!(
        unknown.is_empty(),
        "data-i18n keys without a translation: {:?}",
        unknown
    );
}
