//! End-to-end scenarios over JSON-built extension sets: manifest parsing,
//! identity keys, grouping, dependency closure, and the denylist.

use ext_identity::{ExtensionKey, TargetPlatform, group_by_extension, same_extension};
use ext_manager::{
    ControlManifest, ExtensionManifest, InstalledExtension, dependencies_of, malicious_ids,
};
use pretty_assertions::assert_eq;

/// Build an installed extension the way the manager does: parse the
/// manifest JSON, derive the identifier from it.
fn install(manifest_json: &str) -> InstalledExtension {
    let manifest = ExtensionManifest::from_json(manifest_json).unwrap();
    let id = manifest.id();
    serde_json::from_value(serde_json::json!({
        "identifier": { "id": id },
        "manifest": serde_json::from_str::<serde_json::Value>(manifest_json).unwrap(),
        "targetPlatform": "undefined"
    }))
    .unwrap()
}

fn installed_set() -> Vec<InstalledExtension> {
    vec![
        install(
            r#"{
                "name": "python",
                "publisher": "ms-python",
                "version": "2024.2.1",
                "extensionDependencies": ["ms-toolsai.jupyter"]
            }"#,
        ),
        install(
            r#"{
                "name": "jupyter",
                "publisher": "ms-toolsai",
                "version": "2024.1.0",
                "extensionDependencies": ["ms-toolsai.jupyter-renderers"]
            }"#,
        ),
        install(
            r#"{
                "name": "jupyter-renderers",
                "publisher": "ms-toolsai",
                "version": "1.0.17"
            }"#,
        ),
        install(
            r#"{
                "name": "unrelated",
                "publisher": "someone",
                "version": "0.1.0"
            }"#,
        ),
    ]
}

#[test]
fn resolves_transitive_closure_from_parsed_manifests() {
    let set = installed_set();
    let result = dependencies_of(&set, &set[0]);
    let ids: Vec<_> = result.iter().map(|ext| ext.identifier.id.as_str()).collect();
    assert_eq!(ids, vec!["ms-toolsai.jupyter", "ms-toolsai.jupyter-renderers"]);
}

#[test]
fn declared_but_uninstalled_dependencies_are_invisible_in_result() {
    let mut set = installed_set();
    set.remove(2); // drop jupyter-renderers
    let result = dependencies_of(&set, &set[0]);
    let ids: Vec<_> = result.iter().map(|ext| ext.identifier.id.as_str()).collect();
    assert_eq!(ids, vec!["ms-toolsai.jupyter"]);

    // The only way to see the gap is to diff declarations against the result.
    let declared = &set[1].manifest.extension_dependencies;
    let unresolved: Vec<&str> = declared
        .iter()
        .map(String::as_str)
        .filter(|id| !result.iter().any(|ext| ext.identifier.id == *id))
        .collect();
    assert_eq!(unresolved, vec!["ms-toolsai.jupyter-renderers"]);
}

#[test]
fn keys_of_installed_set_round_trip_through_strings() {
    for ext in installed_set() {
        let key = ext.key();
        let reparsed = ExtensionKey::parse(&key.to_string()).unwrap();
        assert_eq!(reparsed, key);
    }
}

#[test]
fn grouping_collapses_differently_cased_installs() {
    let mut set = installed_set();
    set.push(install(
        r#"{
            "name": "Python",
            "publisher": "MS-Python",
            "version": "2023.1.0"
        }"#,
    ));
    let total = set.len();
    let groups = group_by_extension(set, |ext| &ext.identifier);
    assert_eq!(groups.len(), total - 1);
    assert_eq!(groups[0].len(), 2);
    assert!(same_extension(
        &groups[0][0].identifier,
        &groups[0][1].identifier
    ));
}

#[test]
fn denylist_lookup_is_exact_membership() {
    let control = ControlManifest::from_json(
        r#"{"malicious": [{"id": "evil.ext"}, {"id": "worse.ext"}]}"#,
    )
    .unwrap();
    let denied = malicious_ids(&control);

    let set = installed_set();
    let flagged: Vec<_> = set
        .iter()
        .filter(|ext| denied.contains(&ext.identifier.id))
        .collect();
    assert!(flagged.is_empty());
    assert!(denied.contains("evil.ext"));
}

#[test]
fn platform_specific_key_survives_storage_form() {
    let manifest = ExtensionManifest::from_json(
        r#"{"name": "cpptools", "publisher": "devtools", "version": "1.19.4"}"#,
    )
    .unwrap();
    let ext = InstalledExtension {
        identifier: ext_identity::ExtensionIdentifier::new(manifest.id()),
        manifest,
        target_platform: TargetPlatform::LinuxArm64,
    };

    let stored = ext.key().to_string();
    assert_eq!(stored, "devtools.cpptools-1.19.4-linux-arm64");
    let key = ExtensionKey::parse(&stored).unwrap();
    assert_eq!(key.target_platform, TargetPlatform::LinuxArm64);
    assert_eq!(key, ext.key());
}
