//! Clean command - removes the build output directory.

use anyhow::Result;
use std::path::Path;

use crate::clean;

/// Execute the clean command. Best-effort by design, never fails.
pub fn cmd_clean(base_dir: &Path) -> Result<()> {
    clean::clean_build(base_dir);
    Ok(())
}
