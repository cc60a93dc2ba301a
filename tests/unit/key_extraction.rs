use langkeys::comparison::keys::KEY_SEPARATOR;
use langkeys::{extract_keys, KeyExtractor, KeySet};
use serde_json::{json, Value};

fn keys(items: &[&str]) -> KeySet {
    items.iter().map(|s| s.to_string()).collect()
}

/// Count leaves the slow way: every non-object value under an object
fn count_leaves(value: &Value) -> usize {
    match value {
        Value::Object(map) => map
            .values()
            .map(|v| match v {
                Value::Object(_) => count_leaves(v),
                _ => 1,
            })
            .sum(),
        _ => 0,
    }
}

#[test]
fn test_one_path_per_leaf() {
    let doc = json!({
        "app": {
            "title": "Langkeys",
            "menu": {"file": {"open": "Open", "save": "Save"}, "help": "Help"},
            "tags": ["a", "b"],
            "empty": {}
        },
        "version": 2,
        "beta": false,
        "notes": null
    });

    let extracted = extract_keys(&doc);
    assert_eq!(extracted.len(), count_leaves(&doc));
    assert_eq!(
        extracted,
        keys(&[
            "app.title",
            "app.menu.file.open",
            "app.menu.file.save",
            "app.menu.help",
            "app.tags",
            "version",
            "beta",
            "notes",
        ])
    );
}

#[test]
fn test_extraction_is_idempotent() {
    let doc = json!({"a": {"b": {"c": 1}}, "d": [1, {"e": 2}]});
    assert_eq!(extract_keys(&doc), extract_keys(&doc));
}

#[test]
fn test_does_not_mutate_input() {
    let doc = json!({"a": {"b": 1}});
    let before = doc.clone();
    let _ = extract_keys(&doc);
    assert_eq!(doc, before);
}

#[test]
fn test_spec_examples() {
    assert_eq!(extract_keys(&json!({"a": {"b": 1, "c": 2}})), keys(&["a.b", "a.c"]));
    assert!(extract_keys(&json!({"a": {}})).is_empty());
    assert_eq!(extract_keys(&json!({"a": [1, 2, 3]})), keys(&["a"]));
}

#[test]
fn test_paths_use_dot_separator() {
    let extracted = extract_keys(&json!({"x": {"y": {"z": "deep"}}}));
    let path = extracted.iter().next().unwrap();
    assert_eq!(path.matches(KEY_SEPARATOR).count(), 2);
    assert!(!path.starts_with(KEY_SEPARATOR));
}

#[test]
fn test_unicode_keys() {
    let extracted = extract_keys(&json!({"菜单": {"打开": "打开"}}));
    assert_eq!(extracted, keys(&["菜单.打开"]));
}

#[test]
fn test_ignore_case_lowercases_every_segment() {
    let extractor = KeyExtractor::new().with_ignore_case(true);
    let extracted = extractor.extract(&json!({"Settings": {"DarkMode": true}}));
    assert_eq!(extracted, keys(&["settings.darkmode"]));
}

#[test]
fn test_deeply_nested_document() {
    let mut doc = json!("leaf");
    for i in (0..100).rev() {
        let mut map = serde_json::Map::new();
        map.insert(format!("k{}", i), doc);
        doc = Value::Object(map);
    }

    let extracted = extract_keys(&doc);
    assert_eq!(extracted.len(), 1);
    let path = extracted.into_iter().next().unwrap();
    assert!(path.starts_with("k0.k1.k2."));
    assert!(path.ends_with(".k99"));
}
