//! Command implementations.

use anyhow::Context;
use camino::Utf8Path;

pub mod analyze;
pub mod info;
pub mod profile;
pub mod report;

/// Validate a file's size against the configured limit.
///
/// Checked via metadata before anything is read into memory.
pub fn ensure_input_size(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<()> {
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = metadata.len() as usize;
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }
    Ok(())
}

/// Read a file after validating its size against the configured limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    ensure_input_size(path, max_bytes)?;
    std::fs::read_to_string(path.as_std_path()).with_context(|| format!("failed to read {path}"))
}
