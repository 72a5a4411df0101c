use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::{tempdir, TempDir};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

const V3_MANIFEST: &str = r#"{
  "manifest_version": 3,
  "name": "Reader",
  "version": "2.4.1",
  "offline_enabled": true,
  "action": { "default_title": "Read" },
  "background": { "service_worker": "sw.js" },
  "options_ui": { "page": "options.html" },
  "permissions": ["storage"],
  "host_permissions": ["https://example.com/*"],
  "content_security_policy": {
    "extension_pages": "script-src 'self'; script-src-elem 'self'; object-src 'self'"
  }
}"#;

fn build_package(path: &Path, entries: &[(&str, &[u8])]) {
    let file = File::create(path).expect("create package");
    let mut writer = ZipWriter::new(file);
    for (name, contents) in entries {
        let options =
            SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
        writer.start_file(*name, options).expect("start entry");
        writer.write_all(contents).expect("write entry");
    }
    writer.finish().expect("finish package");
}

fn read_package_entry(path: &Path, entry: &str) -> String {
    let mut archive = ZipArchive::new(File::open(path).expect("open package")).expect("zip");
    let mut contents = String::new();
    archive
        .by_name(entry)
        .expect("entry present")
        .read_to_string(&mut contents)
        .expect("read entry");
    contents
}

fn package_entry_names(path: &Path) -> Vec<String> {
    manifest_core::list_entries(path).expect("list entries")
}

/// Project layout with package.json and a `dist_packed` directory.
fn project(version: &str) -> TempDir {
    let dir = tempdir().expect("tempdir");
    fs::write(
        dir.path().join("package.json"),
        format!(r#"{{"name":"reader","version":"{version}"}}"#),
    )
    .expect("write package.json");
    fs::create_dir(dir.path().join("dist_packed")).expect("create dist_packed");
    dir
}

fn ext_adapt(dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("ext-adapt"));
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}

mod basics;
mod profiles;
mod source;
