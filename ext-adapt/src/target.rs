use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Browser an adapted package is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetBrowser {
    Firefox,
    Opera,
}

impl TargetBrowser {
    pub const ALL: [TargetBrowser; 2] = [TargetBrowser::Firefox, TargetBrowser::Opera];

    pub fn as_str(self) -> &'static str {
        match self {
            TargetBrowser::Firefox => "firefox",
            TargetBrowser::Opera => "opera",
        }
    }
}

impl Display for TargetBrowser {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown browser '{0}'; expected firefox or opera")]
pub struct UnknownBrowser(pub String);

impl FromStr for TargetBrowser {
    type Err = UnknownBrowser;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        TargetBrowser::ALL
            .into_iter()
            .find(|b| b.as_str().eq_ignore_ascii_case(raw.trim()))
            .ok_or_else(|| UnknownBrowser(raw.to_string()))
    }
}

/// Manifest schema generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ManifestVersion {
    V2,
    V3,
}

impl ManifestVersion {
    pub fn number(self) -> u8 {
        match self {
            ManifestVersion::V2 => 2,
            ManifestVersion::V3 => 3,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unsupported manifest_version {0}; expected 2 or 3")]
pub struct UnsupportedManifestVersion(pub u8);

impl TryFrom<u8> for ManifestVersion {
    type Error = UnsupportedManifestVersion;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(ManifestVersion::V2),
            3 => Ok(ManifestVersion::V3),
            other => Err(UnsupportedManifestVersion(other)),
        }
    }
}

impl From<ManifestVersion> for u8 {
    fn from(version: ManifestVersion) -> Self {
        version.number()
    }
}

/// Destination schema for a transformation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetSchema {
    pub version: ManifestVersion,
    pub browser: TargetBrowser,
}

impl TargetSchema {
    pub fn new(version: ManifestVersion, browser: TargetBrowser) -> Self {
        Self { version, browser }
    }

    /// Manifest V2 for the given browser, the only downgrade the tool ships profiles for.
    pub fn v2(browser: TargetBrowser) -> Self {
        Self::new(ManifestVersion::V2, browser)
    }
}
