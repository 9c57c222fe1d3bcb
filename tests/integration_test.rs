/// Integration tests for the application layer
mod test_utilities;

use std::fs;
use tempfile::TempDir;
use test_utilities::mocks::*;
use deporder::prelude::*;

fn names(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_resolve_load_order_happy_path() {
    let source = MockDependencySource::new(&[
        ("app", &["http", "log"]),
        ("http", &["bytes", "log"]),
        ("log", &[]),
        ("bytes", &[]),
    ]);
    let progress_reporter = MockProgressReporter::new();

    let use_case = ResolveLoadOrderUseCase::new(source, progress_reporter.clone());
    let request = ResolveRequest::builder().root("app").build().unwrap();

    let response = use_case.execute(request).unwrap();

    assert_eq!(response.graph.node_count(), 4);
    assert_eq!(
        response.load_order.as_slice(),
        names(&["bytes", "log", "http", "app"])
    );
    assert!(response.comparison.is_none());
    assert!(!progress_reporter.get_messages().is_empty());
}

#[test]
fn test_resolve_load_order_cycle_terminates() {
    let source = MockDependencySource::new(&[("A", &["B"]), ("B", &["A"])]);
    let use_case = ResolveLoadOrderUseCase::new(source, MockProgressReporter::new());
    let request = ResolveRequest::builder().root("A").build().unwrap();

    let response = use_case.execute(request).unwrap();

    assert_eq!(response.load_order.as_slice(), names(&["B", "A"]));
}

#[test]
fn test_resolve_load_order_depth_and_filter() {
    let source = MockDependencySource::new(&[
        ("A", &["Btest", "C"]),
        ("C", &["D"]),
        ("D", &["E"]),
        ("E", &[]),
    ]);
    let use_case = ResolveLoadOrderUseCase::new(source, MockProgressReporter::new());
    let request = ResolveRequest::builder()
        .root("A")
        .max_depth(1)
        .filter_substring("test")
        .build()
        .unwrap();

    let response = use_case.execute(request).unwrap();

    let keys: Vec<&str> = response.graph.node_names().collect();
    assert_eq!(keys, vec!["A", "C"]);
    // Btest is no node but A still declares it; D is reached through C's list
    assert_eq!(
        response.load_order.as_slice(),
        names(&["Btest", "D", "C", "A"])
    );
}

#[test]
fn test_resolve_load_order_mismatch_reported() {
    let source = MockDependencySource::new(&[
        ("A", &["B", "C"]),
        ("B", &["D"]),
        ("C", &["D"]),
        ("D", &[]),
    ]);
    let progress_reporter = MockProgressReporter::new();
    let use_case = ResolveLoadOrderUseCase::new(source, progress_reporter.clone());
    let request = ResolveRequest::builder()
        .root("A")
        .expected_order(Some(names(&["A", "B", "C", "D"])))
        .build()
        .unwrap();

    let response = use_case.execute(request).unwrap();

    assert_eq!(
        response.comparison,
        Some(OrderComparison::Mismatch {
            expected: names(&["A", "B", "C", "D"])
        })
    );
    assert_eq!(progress_reporter.warnings().len(), 1);
}

#[test]
fn test_resolve_load_order_root_missing() {
    let source = MockDependencySource::new(&[("A", &[])]);
    let use_case = ResolveLoadOrderUseCase::new(source, MockProgressReporter::new());
    let request = ResolveRequest::builder().root("missing").build().unwrap();

    let err = use_case.execute(request).unwrap_err();

    assert!(err
        .to_string()
        .contains("Package 'missing' not found in mock dependency source"));
}

#[test]
fn test_resolve_load_order_source_failure() {
    let use_case = ResolveLoadOrderUseCase::new(
        MockDependencySource::with_failure(),
        MockProgressReporter::new(),
    );
    let request = ResolveRequest::builder().root("A").build().unwrap();

    let err = use_case.execute(request).unwrap_err();

    assert!(err.to_string().contains("Mock dependency source failure"));
}

#[test]
fn test_registry_source_end_to_end() {
    let client = MockRegistryClient::new()
        .with_crate("app", "1.0.0", &["serde", "tokio"])
        .with_crate("serde", "1.0.200", &["serde_derive"])
        .with_crate("serde_derive", "1.0.200", &[])
        .with_crate("tokio", "1.37.0", &[])
        .with_failure("tokio");
    let progress_reporter = MockProgressReporter::new();

    let use_case = ResolveLoadOrderUseCase::new(
        RegistryDependencySource::new(client),
        progress_reporter.clone(),
    );
    let request = ResolveRequest::builder()
        .root("app")
        .version(Some("1.0.0".to_string()))
        .build()
        .unwrap();

    let response = use_case.execute(request).unwrap();

    assert_eq!(
        response.load_order.as_slice(),
        names(&["serde_derive", "serde", "tokio", "app"])
    );
    // The failed lookup degrades to a leaf plus a warning
    assert_eq!(response.graph.dependencies_of("tokio"), Some(&[][..]));
    let warnings = progress_reporter.warnings();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("tokio"));
}

#[test]
fn test_registry_source_respects_policy() {
    let client = MockRegistryClient::new()
        .with_crate("app", "0.1.0", &["core", "core-test"])
        .with_crate("core", "2.0.0", &["deep"])
        .with_crate("core-test", "2.0.0", &[])
        .with_crate("deep", "0.9.0", &[]);
    let source = RegistryDependencySource::new(client);
    let query = DependencyQuery::new(
        PackageName::new("app".to_string()).unwrap(),
        None,
        TraversalPolicy::new(1, "test"),
    );

    let map = source
        .load_dependencies(&query, &MockProgressReporter::new())
        .unwrap();

    // deep sits at depth 2 and core-test is filtered; neither is fetched
    let mut keys: Vec<&String> = map.keys().collect();
    keys.sort();
    assert_eq!(keys, vec!["app", "core"]);
    assert_eq!(map["app"], names(&["core", "core-test"]));
}

#[test]
fn test_file_source_with_text_report() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("deps.txt");
    fs::write(
        &path,
        "# diamond\nA: B, C\nB: D\nC: D\nD:\n",
    )
    .unwrap();

    let use_case =
        ResolveLoadOrderUseCase::new(FileSystemReader::new(path), MockProgressReporter::new());
    let request = ResolveRequest::builder()
        .root("A")
        .expected_order(Some(names(&["D", "B", "C", "A"])))
        .build()
        .unwrap();

    let response = use_case.execute(request).unwrap();
    let report = TextFormatter::new().format(&response).unwrap();

    assert!(report.contains("A: [B, C]\nB: [D]\nC: [D]\nD: []\n"));
    assert!(report.contains("  1. D\n  2. B\n  3. C\n  4. A\n"));
    assert!(report.contains("✅ Load order matches expected order"));
}

#[test]
fn test_file_source_malformed_line() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("deps.txt");
    fs::write(&path, "A: B\nthis line has no colon\n").unwrap();

    let use_case =
        ResolveLoadOrderUseCase::new(FileSystemReader::new(path), MockProgressReporter::new());
    let request = ResolveRequest::builder().root("A").build().unwrap();

    let err = use_case.execute(request).unwrap_err();

    assert!(err.to_string().contains("(line 2)"));
}

#[test]
fn test_json_report_from_use_case() {
    let source = MockDependencySource::new(&[("A", &["B"]), ("B", &[])]);
    let use_case = ResolveLoadOrderUseCase::new(source, MockProgressReporter::new());
    let request = ResolveRequest::builder().root("A").build().unwrap();

    let response = use_case.execute(request).unwrap();
    let json = JsonFormatter::new().format(&response).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["root"], "A");
    assert_eq!(value["load_order"], serde_json::json!(["B", "A"]));
}
