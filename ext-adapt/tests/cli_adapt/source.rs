use pretty_assertions::assert_eq;

use super::*;

#[test]
fn source_flag_writes_pretty_manifest_into_source_package() {
    let dir = project("2.4.1");
    build_package(
        &dir.path().join("dist_packed/reader-2.4.1.zip"),
        &[("manifest.json", V3_MANIFEST.as_bytes())],
    );
    build_package(
        &dir.path().join("dist_packed/reader-2.4.1-source.zip"),
        &[
            ("src/sw.ts", b"export {};"),
            ("dist/manifest.json", br#"{"manifest_version":3,"action":{"default_title":"Read"}}"#),
        ],
    );

    ext_adapt(dir.path())
        .args([
            "adapt",
            "--browser",
            "opera",
            "--i",
            "dist_packed/reader-{version}.zip",
            "--source",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("__adapted_for_opera-source.zip"));

    let output = dir
        .path()
        .join("dist_packed/reader-2.4.1__adapted_for_opera-source.zip");
    assert_eq!(
        read_package_entry(&output, "manifest.json"),
        "{\n  \"manifest_version\": 2,\n  \"browser_action\": {\n    \"default_title\": \"Read\"\n  }\n}"
    );
    assert_eq!(
        package_entry_names(&output),
        vec![
            "src/sw.ts".to_string(),
            "dist/manifest.json".to_string(),
            "manifest.json".to_string()
        ]
    );
    assert!(dir
        .path()
        .join("dist_packed/reader-2.4.1__adapted_for_opera.zip")
        .exists());
}

#[test]
fn source_package_is_not_touched_without_flag() {
    let dir = project("1.0.0");
    build_package(
        &dir.path().join("dist_packed/reader-1.0.0.zip"),
        &[("manifest.json", br#"{"manifest_version":3}"#)],
    );
    build_package(
        &dir.path().join("dist_packed/reader-1.0.0-source.zip"),
        &[("dist/manifest.json", br#"{"manifest_version":3}"#)],
    );

    ext_adapt(dir.path())
        .args(["adapt", "--browser", "firefox", "--i", "dist_packed/reader-{version}.zip"])
        .assert()
        .success();

    assert!(!dir
        .path()
        .join("dist_packed/reader-1.0.0__adapted_for_firefox-source.zip")
        .exists());
}

#[test]
fn source_package_without_dist_manifest_fails() {
    let dir = project("1.0.0");
    build_package(
        &dir.path().join("dist_packed/reader-1.0.0.zip"),
        &[("manifest.json", br#"{"manifest_version":3}"#)],
    );
    build_package(
        &dir.path().join("dist_packed/reader-1.0.0-source.zip"),
        &[("manifest.json", br#"{"manifest_version":3}"#)],
    );

    ext_adapt(dir.path())
        .args([
            "adapt",
            "--browser",
            "firefox",
            "--i",
            "dist_packed/reader-{version}.zip",
            "--source",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("entry 'dist/manifest.json' not found"));
}
