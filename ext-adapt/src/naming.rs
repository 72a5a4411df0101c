use std::path::PathBuf;

use thiserror::Error;

use crate::target::TargetBrowser;

/// Placeholder substituted in package path templates.
pub const VERSION_PLACEHOLDER: &str = "{version}";

/// Suffix marking the package that carries extension sources.
pub const SOURCE_SUFFIX: &str = "-source";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NamingError {
    #[error("package template '{0}' has no {{version}} placeholder")]
    MissingPlaceholder(String),
}

/// Substitute the first `{version}` in `template` with `value`.
pub fn render_template(template: &str, value: &str) -> Result<String, NamingError> {
    if !template.contains(VERSION_PLACEHOLDER) {
        return Err(NamingError::MissingPlaceholder(template.to_string()));
    }
    Ok(template.replacen(VERSION_PLACEHOLDER, value, 1))
}

/// `1.2.0` -> `1.2.0__adapted_for_firefox`.
pub fn adapted_version(version: &str, browser: TargetBrowser) -> String {
    format!("{version}__adapted_for_{browser}")
}

/// `1.2.0` -> `1.2.0-source`.
pub fn source_version(version: &str) -> String {
    format!("{version}{SOURCE_SUFFIX}")
}

/// `1.2.0` -> `1.2.0__adapted_for_firefox-source`.
pub fn source_adapted_version(version: &str, browser: TargetBrowser) -> String {
    format!("{}{SOURCE_SUFFIX}", adapted_version(version, browser))
}

/// Input and output package locations for one adaptation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackagePaths {
    pub input: PathBuf,
    pub output: PathBuf,
    pub source_input: PathBuf,
    pub source_output: PathBuf,
}

impl PackagePaths {
    /// Resolve all package paths from a `{version}` template.
    ///
    /// Rendered paths are used as given, relative to the working directory.
    pub fn resolve(
        template: &str,
        version: &str,
        browser: TargetBrowser,
    ) -> Result<Self, NamingError> {
        let place = |value: &str| render_template(template, value).map(PathBuf::from);

        Ok(Self {
            input: place(version)?,
            output: place(&adapted_version(version, browser))?,
            source_input: place(&source_version(version))?,
            source_output: place(&source_adapted_version(version, browser))?,
        })
    }
}
