//! Lint command - recognized but not wired to any checker.

use anyhow::Result;

pub fn cmd_lint() -> Result<()> {
    Ok(())
}
