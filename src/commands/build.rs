//! Build command - drives the luasocket Makefile.

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::config::BuildConfig;
use crate::process::Cmd;

/// Execute the build command.
///
/// Runs `make install-both` inside `<base_dir>/luasocket` with the resolved
/// platform tokens. A non-zero make exit terminates the whole process with
/// that same code, so automation can detect a failed build from our exit
/// status alone.
pub fn cmd_build(base_dir: &Path, config: &BuildConfig) -> Result<()> {
    let source_dir = base_dir.join("luasocket");

    // The prefix carries ../.. segments, so this lands next to base_dir's
    // own build output. Already-exists is the common case on rebuilds.
    let build_dir = source_dir.join("src").join(&config.prefix);
    if let Err(err) = fs::create_dir(&build_dir) {
        println!("luasocket build directory not created: {err}");
    }

    let args = config.make_args();
    let status = Cmd::new("make")
        .args(&args)
        .dir(&source_dir)
        .allow_fail()
        .run_interactive()?;

    if !status.success() {
        let code = status.code().unwrap_or(-1);
        println!("make {args:?} returned: {code}");
        std::process::exit(code);
    }

    Ok(())
}
