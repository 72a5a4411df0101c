use pretty_assertions::assert_eq;

use super::*;

#[test]
fn profiles_file_overrides_builtin_rules() {
    let dir = project("1.0.0");
    fs::write(
        dir.path().join("targets.toml"),
        r#"
[[profile]]
browser = "firefox"
manifest_version = 3
force_browser_style = false
dropped_csp_directives = []
removed_fields = []
"#,
    )
    .expect("write profiles");
    build_package(
        &dir.path().join("dist_packed/reader-1.0.0.zip"),
        &[(
            "manifest.json",
            br#"{"manifest_version":3,"offline_enabled":true,"options_ui":{"page":"o.html"},"content_security_policy":"script-src-elem 'self'"}"#,
        )],
    );

    ext_adapt(dir.path())
        .args([
            "adapt",
            "--browser",
            "firefox",
            "--i",
            "dist_packed/reader-{version}.zip",
            "--profiles-file",
            "targets.toml",
        ])
        .assert()
        .success();

    let output = dir
        .path()
        .join("dist_packed/reader-1.0.0__adapted_for_firefox.zip");
    assert_eq!(
        read_package_entry(&output, "manifest.json"),
        r#"{"manifest_version":3,"offline_enabled":true,"options_ui":{"page":"o.html"},"content_security_policy":"script-src-elem 'self'"}"#
    );
}

#[test]
fn broken_profiles_file_falls_back_to_embedded() {
    let dir = project("1.0.0");
    fs::write(dir.path().join("targets.toml"), "not = [valid").expect("write profiles");
    build_package(
        &dir.path().join("dist_packed/reader-1.0.0.zip"),
        &[("manifest.json", br#"{"manifest_version":3,"offline_enabled":true}"#)],
    );

    ext_adapt(dir.path())
        .args([
            "adapt",
            "--browser",
            "firefox",
            "--i",
            "dist_packed/reader-{version}.zip",
            "--profiles-file",
            "targets.toml",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("using embedded profiles"));

    let output = dir
        .path()
        .join("dist_packed/reader-1.0.0__adapted_for_firefox.zip");
    assert_eq!(
        read_package_entry(&output, "manifest.json"),
        r#"{"manifest_version":2}"#
    );
}

#[test]
fn profiles_file_without_browser_fails() {
    let dir = project("1.0.0");
    fs::write(
        dir.path().join("targets.toml"),
        r#"
[[profile]]
browser = "opera"
manifest_version = 2
"#,
    )
    .expect("write profiles");

    ext_adapt(dir.path())
        .args([
            "adapt",
            "--browser",
            "firefox",
            "--i",
            "dist_packed/reader-{version}.zip",
            "--profiles-file",
            "targets.toml",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no target profile defined for browser 'firefox'"));
}
