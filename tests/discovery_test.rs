//! Integration tests for template discovery
//!
//! These tests lay out translation trees in temporary directories and run
//! complete discovery passes against them.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use transync::discovery::{
    DiscoveryError, ExtractionResult, FileDiscovery, SkipReason, TemplateDiscovery, discover, discover_in,
};

/// Helper function to create a file with parent directories
fn create_test_file(root: &Path, rel: &str) -> PathBuf {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "{\"hello\": \"world\"}").unwrap();
    path
}

/// Helper function to reduce results to comparable (path, variables) pairs
fn as_set(results: &[ExtractionResult]) -> BTreeSet<(PathBuf, Vec<(String, Option<String>)>)> {
    results
        .iter()
        .map(|r| {
            let vars = r.variables.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
            (r.path.clone(), vars)
        })
        .collect()
}

#[test]
fn test_namespace_and_language_are_extracted() {
    let tmp = TempDir::new().unwrap();
    create_test_file(tmp.path(), "translations/common/en.json");
    create_test_file(tmp.path(), "translations/common/fr.json");

    let results = discover_in(tmp.path(), "translations/{namespace}/{language}.json").unwrap();
    assert_eq!(results.len(), 2);
    for result in &results {
        assert_eq!(result.get("namespace"), Some("common"));
    }
    let languages: BTreeSet<&str> = results.iter().filter_map(|r| r.get("language")).collect();
    assert_eq!(languages, BTreeSet::from(["en", "fr"]));
}

#[test]
fn test_variables_follow_first_occurrence_order() {
    let tmp = TempDir::new().unwrap();
    create_test_file(tmp.path(), "i18n/de/admin.json");

    let results = discover_in(tmp.path(), "i18n/{language}/{namespace}.json").unwrap();
    assert_eq!(results.len(), 1);
    let names: Vec<&str> = results[0].variables.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["language", "namespace"]);
    assert_eq!(results[0].get("language"), Some("de"));
    assert_eq!(results[0].get("namespace"), Some("admin"));
}

#[test]
fn test_literal_pattern_is_existence_check() {
    let tmp = TempDir::new().unwrap();
    create_test_file(tmp.path(), "locales/en.json");
    create_test_file(tmp.path(), "locales/de.json");

    let present = discover_in(tmp.path(), "locales/en.json").unwrap();
    assert_eq!(present.len(), 1);
    assert!(present[0].variables.is_empty());
    assert_eq!(present[0].path, tmp.path().join("locales/en.json"));

    let absent = discover_in(tmp.path(), "locales/fr.json").unwrap();
    assert!(absent.is_empty());
}

#[test]
fn test_absolute_pattern_with_discover() {
    let tmp = TempDir::new().unwrap();
    create_test_file(tmp.path(), "translations/common/en.json");
    let root = tmp.path().to_string_lossy().replace('\\', "/");

    let results = discover(&format!("{root}/translations/{{namespace}}/{{language}}.json")).unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].get("language"), Some("en"));
}

#[test]
fn test_discovery_is_idempotent() {
    let tmp = TempDir::new().unwrap();
    for rel in ["locales/app/en.json", "locales/app/de.json", "locales/web/en.json", "locales/web/notes.txt"] {
        create_test_file(tmp.path(), rel);
    }

    let first = discover_in(tmp.path(), "locales/{namespace}/{language}.json").unwrap();
    let second = discover_in(tmp.path(), "locales/{namespace}/{language}.json").unwrap();
    assert_eq!(first.len(), 3);
    assert_eq!(as_set(&first), as_set(&second));
}

#[test]
fn test_missing_prefix_falls_back_to_parent() {
    let tmp = TempDir::new().unwrap();
    create_test_file(tmp.path(), "locales/messages_en.properties");
    create_test_file(tmp.path(), "locales/messages_de.properties");
    create_test_file(tmp.path(), "locales/other_en.properties");

    let results = discover_in(tmp.path(), "locales/messages_{language}.properties").unwrap();
    let languages: BTreeSet<&str> = results.iter().filter_map(|r| r.get("language")).collect();
    assert_eq!(languages, BTreeSet::from(["de", "en"]));
}

#[test]
fn test_missing_base_directory_yields_no_results() {
    let tmp = TempDir::new().unwrap();
    let results = discover_in(tmp.path(), "nowhere/deeper/{language}.json").unwrap();
    assert!(results.is_empty());
}

#[test]
fn test_repeated_placeholder_binds_last_occurrence() {
    let tmp = TempDir::new().unwrap();
    create_test_file(tmp.path(), "po/de/messages_at.po");

    let results = discover_in(tmp.path(), "po/{lang}/messages_{lang}.po").unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].variables.len(), 1);
    assert_eq!(results[0].get("lang"), Some("at"));
}

#[cfg(unix)]
#[test]
fn test_whitespace_segment_is_absent() {
    let tmp = TempDir::new().unwrap();
    create_test_file(tmp.path(), "locales/ /en.json");

    let results = discover_in(tmp.path(), "locales/{namespace}/{language}.json").unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].variables.get("namespace"), Some(&None));
    assert_eq!(results[0].get("namespace"), None);
    assert_eq!(results[0].get("language"), Some("en"));
}

#[test]
fn test_depth_bound_excludes_deep_files() {
    let tmp = TempDir::new().unwrap();
    create_test_file(tmp.path(), "deep/1/2/3/4/5/en.json");
    create_test_file(tmp.path(), "deep/1/2/3/4/5/6/de.json");

    let results = discover_in(tmp.path(), "deep/**/{language}.json").unwrap();
    let languages: Vec<&str> = results.iter().filter_map(|r| r.get("language")).collect();
    assert_eq!(languages, vec!["en"]);
}

#[test]
fn test_non_matching_files_are_excluded() {
    let tmp = TempDir::new().unwrap();
    create_test_file(tmp.path(), "app/web/i18n/en.json");
    create_test_file(tmp.path(), "app/web/i18n/en.yaml");
    create_test_file(tmp.path(), "app/web/lang/de.json");
    create_test_file(tmp.path(), "app/web/i18n/nested/fr.json");

    let report = TemplateDiscovery::new("app/{namespace}/i18n/{language}.json")
        .unwrap()
        .discover(tmp.path())
        .unwrap();
    assert_eq!(report.results.len(), 1);
    assert_eq!(report.results[0].get("namespace"), Some("web"));
    assert_eq!(report.results[0].get("language"), Some("en"));
    assert_eq!(report.skipped_for(SkipReason::GlobMismatch), 2);
    assert_eq!(report.skipped_for(SkipReason::ExtractionMismatch), 1);
}

#[test]
fn test_leading_placeholder_is_malformed() {
    let err = discover("{language}/messages.json").unwrap_err();
    assert!(matches!(err, DiscoveryError::MalformedPattern { .. }));
}

#[test]
fn test_unbalanced_braces_are_malformed() {
    let tmp = TempDir::new().unwrap();
    let err = discover_in(tmp.path(), "locales/{language.json").unwrap_err();
    assert!(matches!(err, DiscoveryError::MalformedPattern { .. }));
}

#[cfg(unix)]
#[test]
fn test_unreadable_directory_aborts_discovery() {
    use std::os::unix::fs::PermissionsExt;

    let tmp = TempDir::new().unwrap();
    create_test_file(tmp.path(), "locales/en.json");
    let locked = tmp.path().join("locales/locked");
    fs::create_dir_all(&locked).unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // Privileged users read through permission bits; nothing to observe then.
    if fs::read_dir(&locked).is_ok() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let result = discover_in(tmp.path(), "locales/{language}.json");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    match result {
        Err(DiscoveryError::Traversal { path, .. }) => assert!(path.starts_with(tmp.path().join("locales"))),
        other => panic!("expected a traversal error, got {other:?}"),
    }
}
