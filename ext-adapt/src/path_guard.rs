use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

/// Fail if `output` resolves to the same file as `input`.
///
/// The output package is streamed while the input is still being read, so
/// writing over the input would corrupt both.
pub fn ensure_distinct_output(output: &Path, input: &Path) -> Result<()> {
    let out_abs = comparable(output)
        .with_context(|| format!("failed to resolve output path {}", output.display()))?;
    let in_abs = comparable(input)
        .with_context(|| format!("failed to resolve input path {}", input.display()))?;

    if out_abs == in_abs {
        bail!(
            "refusing to overwrite input package: output {} matches input {}",
            output.display(),
            input.display()
        );
    }
    Ok(())
}

fn comparable(path: &Path) -> Result<PathBuf> {
    if path.exists() {
        return path
            .canonicalize()
            .with_context(|| format!("canonicalize {}", path.display()));
    }

    // Not on disk yet; `..` segments stay unresolved.
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    Ok(std::env::current_dir().context("current_dir")?.join(path))
}
