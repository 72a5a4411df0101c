use pretty_assertions::assert_eq;

use super::*;

#[test]
fn missing_packed_dir_is_a_noop() {
    let dir = tempdir().expect("tempdir");

    ext_adapt(dir.path())
        .args(["adapt", "--browser", "firefox", "--i", "dist_packed/reader-{version}.zip"])
        .assert()
        .success()
        .stderr(predicate::str::contains("No \"dist_packed\" directory"));
}

#[test]
fn missing_browser_is_a_noop() {
    let dir = project("1.0.0");

    ext_adapt(dir.path())
        .args(["adapt", "--i", "dist_packed/reader-{version}.zip"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Specify either --browser=firefox"));
    assert!(fs::read_dir(dir.path().join("dist_packed"))
        .expect("read dir")
        .next()
        .is_none());
}

#[test]
fn unknown_browser_is_rejected() {
    let dir = project("1.0.0");

    ext_adapt(dir.path())
        .args(["adapt", "--browser", "safari", "--i", "dist_packed/reader-{version}.zip"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'safari'"));
}

#[test]
fn adapts_primary_package_for_firefox() {
    let dir = project("2.4.1");
    let input = dir.path().join("dist_packed/reader-2.4.1.zip");
    build_package(
        &input,
        &[
            ("manifest.json", V3_MANIFEST.as_bytes()),
            ("sw.js", b"self.addEventListener('install', () => {});"),
        ],
    );

    ext_adapt(dir.path())
        .args(["adapt", "--browser=firefox", "--i", "dist_packed/reader-{version}.zip"])
        .assert()
        .success()
        .stdout(predicate::str::contains("__adapted_for_firefox.zip"));

    let output = dir
        .path()
        .join("dist_packed/reader-2.4.1__adapted_for_firefox.zip");
    let manifest = read_package_entry(&output, "manifest.json");
    assert_eq!(
        manifest,
        concat!(
            r#"{"manifest_version":2,"name":"Reader","version":"2.4.1","#,
            r#""background":{"scripts":["sw.js"]},"#,
            r#""options_ui":{"page":"options.html","browser_style":true},"#,
            r#""permissions":["storage","https://example.com/*"],"#,
            r#""content_security_policy":"script-src 'self'; object-src 'self'","#,
            r#""browser_action":{"default_title":"Read"}}"#
        )
    );
    assert_eq!(
        package_entry_names(&output),
        vec!["sw.js".to_string(), "manifest.json".to_string()]
    );
    assert_eq!(
        read_package_entry(&output, "sw.js"),
        "self.addEventListener('install', () => {});"
    );
    assert_eq!(read_package_entry(&input, "manifest.json"), V3_MANIFEST);
}

#[test]
fn explicit_template_directory_is_honored() {
    let dir = project("0.9.0");
    fs::create_dir(dir.path().join("out")).expect("create out");
    build_package(
        &dir.path().join("out/ext-0.9.0.zip"),
        &[("manifest.json", br#"{"manifest_version":3}"#)],
    );

    ext_adapt(dir.path())
        .args(["adapt", "--browser", "opera", "--i", "out/ext-{version}.zip"])
        .assert()
        .success();

    let output = dir.path().join("out/ext-0.9.0__adapted_for_opera.zip");
    assert_eq!(
        read_package_entry(&output, "manifest.json"),
        r#"{"manifest_version":2}"#
    );
}

#[test]
fn missing_input_package_is_skipped() {
    let dir = project("3.0.0");

    ext_adapt(dir.path())
        .args(["adapt", "--browser", "firefox", "--i", "dist_packed/reader-{version}.zip"])
        .assert()
        .success()
        .stderr(predicate::str::contains("not found; skipping"));
}

#[test]
fn unreadable_archive_aborts() {
    let dir = project("1.0.0");
    fs::write(dir.path().join("dist_packed/reader-1.0.0.zip"), b"not a zip")
        .expect("write bogus package");

    ext_adapt(dir.path())
        .args(["adapt", "--browser", "firefox", "--i", "dist_packed/reader-{version}.zip"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid package archive"));
}

#[test]
fn template_without_placeholder_fails() {
    let dir = project("1.0.0");

    ext_adapt(dir.path())
        .args(["adapt", "--browser", "firefox", "--i", "reader.zip"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("has no {version} placeholder"));
}

#[test]
fn malformed_background_degrades_with_warning() {
    let dir = project("1.0.0");
    build_package(
        &dir.path().join("dist_packed/reader-1.0.0.zip"),
        &[("manifest.json", br#"{"manifest_version":3,"background":{}}"#)],
    );

    ext_adapt(dir.path())
        .args(["adapt", "--browser", "firefox", "--i", "dist_packed/reader-{version}.zip"])
        .assert()
        .success()
        .stderr(predicate::str::contains("emitting a null script"));

    let output = dir
        .path()
        .join("dist_packed/reader-1.0.0__adapted_for_firefox.zip");
    assert_eq!(
        read_package_entry(&output, "manifest.json"),
        r#"{"manifest_version":2,"background":{"scripts":[null]}}"#
    );
}

#[test]
fn browser_name_is_case_insensitive() {
    let dir = project("1.0.0");
    build_package(
        &dir.path().join("dist_packed/reader-1.0.0.zip"),
        &[("manifest.json", br#"{"manifest_version":3}"#)],
    );

    ext_adapt(dir.path())
        .args(["adapt", "--browser", "Firefox", "--i", "dist_packed/reader-{version}.zip"])
        .assert()
        .success();

    assert!(dir
        .path()
        .join("dist_packed/reader-1.0.0__adapted_for_firefox.zip")
        .exists());
}

#[test]
fn bare_template_resolves_from_working_directory() {
    let dir = project("1.0.0");
    build_package(
        &dir.path().join("r-1.0.0.zip"),
        &[("manifest.json", br#"{"manifest_version":3,"action":{}}"#)],
    );

    ext_adapt(dir.path())
        .args(["adapt", "--browser", "firefox", "--i", "r-{version}.zip"])
        .assert()
        .success()
        .stdout(predicate::str::contains("r-1.0.0__adapted_for_firefox.zip"));

    assert_eq!(
        read_package_entry(&dir.path().join("r-1.0.0__adapted_for_firefox.zip"), "manifest.json"),
        r#"{"manifest_version":2,"browser_action":{}}"#
    );
    assert!(!dir
        .path()
        .join("dist_packed/r-1.0.0__adapted_for_firefox.zip")
        .exists());
}
