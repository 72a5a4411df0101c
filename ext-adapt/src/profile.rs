use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::target::{ManifestVersion, TargetBrowser, TargetSchema};

/// CSP directives Manifest V2 browsers reject.
pub const LEGACY_UNSUPPORTED_CSP_DIRECTIVES: [&str; 5] = [
    "prefetch-src",
    "script-src-elem",
    "script-src-attr",
    "style-src-attr",
    "style-src-elem",
];

/// Per-browser transformation settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TargetProfile {
    pub browser: TargetBrowser,
    pub manifest_version: ManifestVersion,
    #[serde(default = "default_force_browser_style")]
    pub force_browser_style: bool,
    #[serde(default)]
    pub dropped_csp_directives: Vec<String>,
    #[serde(default)]
    pub removed_fields: Vec<String>,
}

fn default_force_browser_style() -> bool {
    true
}

impl TargetProfile {
    /// Built-in profile for `schema.browser`, pinned to `schema.version`.
    pub fn for_schema(schema: &TargetSchema) -> Self {
        let mut profile = find_profile(&default_profiles(), schema.browser)
            .cloned()
            .unwrap_or_else(|| legacy_profile(schema.browser));
        profile.manifest_version = schema.version;
        profile
    }

    /// Whether a CSP directive named `name` is removed for this target.
    pub fn drops_csp_directive(&self, name: &str) -> bool {
        self.dropped_csp_directives
            .iter()
            .any(|d| d.eq_ignore_ascii_case(name))
    }
}

#[derive(Debug, Deserialize)]
struct ProfileFile {
    profile: Vec<TargetProfile>,
}

/// Errors returned when loading profile files.
#[derive(Debug, Error)]
pub enum ProfileLoadError {
    #[error("failed to read profiles file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse profiles file {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
    #[error("profiles file {path} defines browser '{browser}' more than once")]
    Duplicate { path: String, browser: TargetBrowser },
}

/// Load target profiles from a TOML file.
pub fn load_profiles(path: &Path) -> Result<Vec<TargetProfile>, ProfileLoadError> {
    let raw = fs::read_to_string(path).map_err(|source| ProfileLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;

    parse_profiles(&raw, path.display().to_string())
}

/// Built-in profiles shipped with the binary.
pub fn default_profiles() -> Vec<TargetProfile> {
    let embedded = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/profiles/targets.toml"));
    match parse_profiles(embedded, "embedded profiles".to_string()) {
        Ok(profiles) if !profiles.is_empty() => profiles,
        _ => fallback_profiles(),
    }
}

/// Return the profile for `browser`, if one is defined.
pub fn find_profile(
    profiles: &[TargetProfile],
    browser: TargetBrowser,
) -> Option<&TargetProfile> {
    profiles.iter().find(|p| p.browser == browser)
}

fn parse_profiles(raw: &str, path: String) -> Result<Vec<TargetProfile>, ProfileLoadError> {
    let parsed: ProfileFile = toml::from_str(raw).map_err(|source| ProfileLoadError::Parse {
        path: path.clone(),
        source,
    })?;

    for (idx, profile) in parsed.profile.iter().enumerate() {
        if parsed.profile[..idx]
            .iter()
            .any(|earlier| earlier.browser == profile.browser)
        {
            return Err(ProfileLoadError::Duplicate {
                path,
                browser: profile.browser,
            });
        }
    }

    Ok(parsed.profile)
}

fn fallback_profiles() -> Vec<TargetProfile> {
    TargetBrowser::ALL.into_iter().map(legacy_profile).collect()
}

fn legacy_profile(browser: TargetBrowser) -> TargetProfile {
    TargetProfile {
        browser,
        manifest_version: ManifestVersion::V2,
        force_browser_style: true,
        dropped_csp_directives: LEGACY_UNSUPPORTED_CSP_DIRECTIVES
            .iter()
            .map(ToString::to_string)
            .collect(),
        removed_fields: vec!["offline_enabled".to_string()],
    }
}
