use langkeys::{compare, extract_keys, ComparisonEngine, JsonSource, KeySet};
use serde_json::json;

fn keys(items: &[&str]) -> KeySet {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_set_laws() {
    let a = keys(&["a", "b", "c.d"]);
    let b = keys(&["b", "c.d", "e"]);
    let result = compare(&a, &b);

    assert_eq!(result.only_in_a, a.difference(&b).cloned().collect());
    assert_eq!(result.only_in_b, b.difference(&a).cloned().collect());
    assert_eq!(result.common, a.intersection(&b).cloned().collect());
}

#[test]
fn test_partition_invariants() {
    let a = keys(&["x", "y", "z", "shared.one", "shared.two"]);
    let b = keys(&["shared.one", "shared.two", "w"]);
    let result = compare(&a, &b);

    let rebuilt_a: KeySet = result.only_in_a.union(&result.common).cloned().collect();
    let rebuilt_b: KeySet = result.only_in_b.union(&result.common).cloned().collect();
    assert_eq!(rebuilt_a, a);
    assert_eq!(rebuilt_b, b);

    assert!(result.only_in_a.is_disjoint(&result.only_in_b));
    assert!(result.only_in_a.is_disjoint(&result.common));
    assert!(result.only_in_b.is_disjoint(&result.common));
}

#[test]
fn test_compare_with_self() {
    let a = keys(&["p", "q.r"]);
    let result = compare(&a, &a);
    assert!(result.only_in_a.is_empty());
    assert!(result.only_in_b.is_empty());
    assert_eq!(result.common, a);
    assert!(result.is_identical());
}

#[test]
fn test_compare_with_empty_set() {
    let a = keys(&["p", "q.r"]);
    let result = compare(&a, &KeySet::new());
    assert_eq!(result.only_in_a, a);
    assert!(result.only_in_b.is_empty());
    assert!(result.common.is_empty());

    assert!(compare(&KeySet::new(), &KeySet::new()).is_identical());
}

#[test]
fn test_symmetry() {
    let a = keys(&["one", "two", "three"]);
    let b = keys(&["two", "four"]);

    let forward = compare(&a, &b);
    let backward = compare(&b, &a);
    assert_eq!(forward.only_in_a, backward.only_in_b);
    assert_eq!(forward.only_in_b, backward.only_in_a);
    assert_eq!(forward.common, backward.common);
}

#[test]
fn test_document_example() {
    let a = extract_keys(&json!({"a": {"b": 1}}));
    let b = extract_keys(&json!({"a": {"b": 1, "c": 2}}));
    let result = compare(&a, &b);

    assert!(result.only_in_a.is_empty());
    assert_eq!(result.only_in_b, keys(&["a.c"]));
    assert_eq!(result.common, keys(&["a.b"]));
}

#[test]
fn test_values_are_ignored() {
    let a = extract_keys(&json!({"k": "hello", "n": 1}));
    let b = extract_keys(&json!({"k": ["totally", "different"], "n": {"x": 1}}));
    let result = compare(&a, &b);

    assert_eq!(result.common, keys(&["k"]));
    assert_eq!(result.only_in_a, keys(&["n"]));
    assert_eq!(result.only_in_b, keys(&["n.x"]));
}

#[test]
fn test_engine_round_trip_same_content() {
    let content = r#"{"greeting": {"morning": "Good morning", "night": "Good night"}}"#;
    let outcome = ComparisonEngine::default()
        .compare_sources(
            &JsonSource::from_string("first", content),
            &JsonSource::from_string("second", content),
        )
        .unwrap();

    assert!(outcome.is_identical());
    assert_eq!(outcome.statistics().common, 2);
}

#[test]
fn test_compare_files() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("en.json");
    let b = dir.path().join("it.json");
    std::fs::write(&a, r#"{"hello": "Hello", "bye": "Bye"}"#).unwrap();
    std::fs::write(&b, r#"{"hello": "Ciao"}"#).unwrap();

    let outcome = langkeys::compare_files(&a, &b).unwrap();
    assert_eq!(outcome.comparison.only_in_a, keys(&["bye"]));
    assert_eq!(outcome.name_b, b.display().to_string());
}
