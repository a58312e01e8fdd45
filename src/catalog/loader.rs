//! JSON document → flat technique list
//!
//! The document shape is:
//!
//! ```text
//! { "cpp_modern_features": {
//!     "cpp17_features": { "version": "C++17", "features": [ {entry}, ... ] },
//!     "cpp20_features": { ... },
//!     "cpp23_features": { ... } } }
//! ```
//!
//! Entries are read leniently: a key that is missing or has the wrong JSON
//! type yields the field's default instead of an error.

use super::errors::CatalogError;
use super::technique::Technique;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Required top-level key
pub const ROOT_KEY: &str = "cpp_modern_features";

/// Subgroups visited, in catalog order
pub const FEATURE_GROUPS: [&str; 3] = ["cpp17_features", "cpp20_features", "cpp23_features"];

/// Read and flatten the document at `path`.
pub fn load_file(path: &Path) -> Result<Vec<Technique>, CatalogError> {
    let text = fs::read_to_string(path).map_err(|source| CatalogError::NotFound {
        path: path.to_path_buf(),
        source,
    })?;
    parse_document(&text, path)
}

/// Flatten an already-read document. `path` is only used for error reporting.
pub fn parse_document(text: &str, path: &Path) -> Result<Vec<Technique>, CatalogError> {
    let malformed = |reason: String| CatalogError::Malformed {
        path: path.to_path_buf(),
        reason,
    };

    let document: Value = serde_json::from_str(text).map_err(|e| malformed(e.to_string()))?;
    let root = document
        .get(ROOT_KEY)
        .ok_or_else(|| malformed(format!("missing top-level key '{}'", ROOT_KEY)))?;

    let mut techniques = Vec::new();
    for group_key in FEATURE_GROUPS {
        let Some(group) = root.get(group_key) else {
            debug!(group = group_key, "feature group absent, skipping");
            continue;
        };
        let version = str_field(group, "version");
        let Some(features) = group.get("features").and_then(Value::as_array) else {
            debug!(group = group_key, "feature group has no feature list, skipping");
            continue;
        };

        for entry in features {
            match technique_from_entry(entry, &version) {
                Some(tech) => techniques.push(tech),
                None => debug!(group = group_key, "skipping entry without a name"),
            }
        }
    }

    debug!(count = techniques.len(), path = %path.display(), "catalog loaded");
    Ok(techniques)
}

/// Build one record. Returns `None` when the entry has no usable name.
fn technique_from_entry(entry: &Value, version: &str) -> Option<Technique> {
    let name = str_field(entry, "name");
    if name.is_empty() {
        return None;
    }

    let mut tech = Technique::new(name);
    tech.definition = str_field(entry, "definition");
    tech.cpp_version = version.to_string();
    tech.set_use_cases(string_list(entry, "primary_use_cases"));
    tech.syntax = entry.get("syntax").map(render_syntax).unwrap_or_default();

    if let Some(demo) = entry.get("complete_demo") {
        tech.demo_code = str_field(demo, "code");
        tech.expected_output = str_field(demo, "expected_output");
    }

    tech.notes = build_notes(entry);
    tech.best_practices = string_list(entry, "best_practices");
    tech.advantages = string_list(entry, "advantages");
    Some(tech)
}

/// `syntax` is either a plain string or a mapping rendered as `key: value` lines.
fn render_syntax(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Object(map) => render_mapping(map),
        _ => String::new(),
    }
}

fn render_mapping(map: &Map<String, Value>) -> String {
    let mut out = String::new();
    for (key, value) in map {
        out.push_str(key);
        out.push_str(": ");
        match value {
            Value::String(s) => out.push_str(s),
            other => out.push_str(&other.to_string()),
        }
        out.push('\n');
    }
    out
}

fn build_notes(entry: &Value) -> String {
    const NOTE_FIELDS: [(&str, &str); 3] = [
        ("category", "Category"),
        ("complexity_level", "Level"),
        ("key_improvements", "Improvements"),
    ];

    let mut notes = String::new();
    for (key, label) in NOTE_FIELDS {
        if let Some(value) = entry.get(key).and_then(Value::as_str) {
            notes.push_str(&format!("{}: {}\n", label, value));
        }
    }
    notes
}

fn str_field(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn string_list(value: &Value, key: &str) -> Vec<String> {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(doc: Value) -> Vec<Technique> {
        parse_document(&doc.to_string(), Path::new("test.json")).unwrap()
    }

    #[test]
    fn test_minimal_entry() {
        let techs = parse(json!({
            "cpp_modern_features": {
                "cpp20_features": { "features": [ { "name": "X", "definition": "D" } ] }
            }
        }));

        assert_eq!(techs.len(), 1);
        let t = &techs[0];
        assert_eq!(t.name, "X");
        assert_eq!(t.definition, "D");
        assert!(t.use_cases().is_empty());
        assert!(t.best_practices.is_empty());
        assert!(t.advantages.is_empty());
        assert_eq!(t.usage(), "");
        assert_eq!(t.cpp_version, "");
        assert_eq!(t.syntax, "");
        assert_eq!(t.demo_code, "");
        assert_eq!(t.expected_output, "");
        assert_eq!(t.notes, "");
        assert_eq!(t.demo_note, "");
    }

    #[test]
    fn test_group_then_entry_order() {
        let techs = parse(json!({
            "cpp_modern_features": {
                "cpp23_features": { "version": "C++23", "features": [ { "name": "E" } ] },
                "cpp17_features": { "version": "C++17", "features": [ { "name": "A" }, { "name": "B" } ] },
                "cpp20_features": { "version": "C++20", "features": [ { "name": "C" }, { "name": "D" } ] }
            }
        }));

        let names: Vec<&str> = techs.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["A", "B", "C", "D", "E"]);
        assert_eq!(techs[0].cpp_version, "C++17");
        assert_eq!(techs[3].cpp_version, "C++20");
        assert_eq!(techs[4].cpp_version, "C++23");
    }

    #[test]
    fn test_syntax_mapping_keeps_order() {
        let text = r#"{"cpp_modern_features": {"cpp17_features": {"features": [
            {"name": "S", "syntax": {"b": "2", "a": "1"}}
        ]}}}"#;
        let techs = parse_document(text, Path::new("t.json")).unwrap();
        assert_eq!(techs[0].syntax, "b: 2\na: 1\n");
    }

    #[test]
    fn test_syntax_mapping_rendering() {
        let techs = parse(json!({
            "cpp_modern_features": { "cpp17_features": { "features": [
                { "name": "S", "syntax": { "a": "1", "b": "2" } },
                { "name": "T", "syntax": "auto [a, b] = pair;" }
            ] } }
        }));
        assert_eq!(techs[0].syntax, "a: 1\nb: 2\n");
        assert_eq!(techs[1].syntax, "auto [a, b] = pair;");
    }

    #[test]
    fn test_notes_fixed_order() {
        let techs = parse(json!({
            "cpp_modern_features": { "cpp17_features": { "features": [
                { "name": "One", "category": "X" },
                { "name": "All", "key_improvements": "Z", "category": "X", "complexity_level": "Y" },
                { "name": "None" }
            ] } }
        }));
        assert_eq!(techs[0].notes, "Category: X\n");
        assert_eq!(techs[1].notes, "Category: X\nLevel: Y\nImprovements: Z\n");
        assert_eq!(techs[2].notes, "");
    }

    #[test]
    fn test_complete_demo_fields() {
        let techs = parse(json!({
            "cpp_modern_features": { "cpp17_features": { "features": [
                { "name": "Full", "complete_demo": { "code": "int main(){}", "expected_output": "ok" } },
                { "name": "CodeOnly", "complete_demo": { "code": "int main(){}" } },
                { "name": "Empty", "complete_demo": {} }
            ] } }
        }));
        assert_eq!(techs[0].demo_code, "int main(){}");
        assert_eq!(techs[0].expected_output, "ok");
        assert_eq!(techs[1].expected_output, "");
        assert_eq!(techs[2].demo_code, "");
    }

    #[test]
    fn test_lists_and_usage() {
        let techs = parse(json!({
            "cpp_modern_features": { "cpp20_features": { "features": [ {
                "name": "Ranges",
                "primary_use_cases": ["Pipelines", "Lazy views"],
                "best_practices": ["Prefer views"],
                "advantages": ["Composable", "Lazy"]
            } ] } }
        }));
        let t = &techs[0];
        assert_eq!(t.use_cases(), ["Pipelines", "Lazy views"]);
        assert_eq!(t.usage(), "- Pipelines\n- Lazy views");
        assert_eq!(t.best_practices, ["Prefer views"]);
        assert_eq!(t.advantages, ["Composable", "Lazy"]);
    }

    #[test]
    fn test_wrong_types_fall_back_to_defaults() {
        let techs = parse(json!({
            "cpp_modern_features": { "cpp17_features": { "features": [ {
                "name": "Odd",
                "definition": 42,
                "primary_use_cases": "not a list",
                "syntax": 7,
                "complete_demo": "nope"
            } ] } }
        }));
        let t = &techs[0];
        assert_eq!(t.definition, "");
        assert!(t.use_cases().is_empty());
        assert_eq!(t.syntax, "");
        assert_eq!(t.demo_code, "");
    }

    #[test]
    fn test_skips_groups_and_unnamed_entries() {
        let techs = parse(json!({
            "cpp_modern_features": {
                "cpp17_features": { "version": "C++17" },
                "cpp20_features": { "features": [ { "definition": "no name" }, { "name": "" }, { "name": "Kept" } ] },
                "cpp26_features": { "features": [ { "name": "Ignored" } ] }
            }
        }));
        assert_eq!(techs.len(), 1);
        assert_eq!(techs[0].name, "Kept");
    }

    #[test]
    fn test_missing_root_key() {
        let err = parse_document(r#"{"features": []}"#, Path::new("bad.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Malformed { .. }));
    }

    #[test]
    fn test_invalid_json() {
        let err = parse_document("{ not json", Path::new("bad.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Malformed { .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = load_file(Path::new("definitely/not/here.json")).unwrap_err();
        assert!(err.is_not_found());
    }
}
