//! Shared fixtures for sockbuild integration tests.

use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// Configuration variables the binary consults; scrubbed so a developer's
/// shell environment cannot leak into assertions.
pub const CONFIG_VARS: &[&str] = &[
    "DEBUG",
    "PLAT",
    "LUAINC",
    "LUAPREFIX",
    "LUAINC_macosx_base",
    "LUAPREFIX_macosx",
    "LUAINC_linux_base",
    "LUAPREFIX_linux",
];

/// Scratch project root the binary runs against.
pub struct TestEnv {
    /// Temporary directory (kept alive for the lifetime of TestEnv)
    pub temp: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            temp: TempDir::new().expect("create temp dir"),
        }
    }

    pub fn root(&self) -> &Path {
        self.temp.path()
    }

    /// Command for the compiled sockbuild binary, working directory at the
    /// scratch root, configuration environment scrubbed.
    pub fn bin(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_sockbuild"));
        cmd.current_dir(self.root());
        for var in CONFIG_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Lay down a vendored luasocket tree whose Makefile runs the given
    /// recipe lines for the `install-both` target.
    pub fn write_makefile(&self, recipe_lines: &str) {
        let src = self.root().join("luasocket/src");
        fs::create_dir_all(&src).expect("create luasocket/src");

        let mut makefile = String::from("install-both:\n");
        for line in recipe_lines.lines() {
            makefile.push('\t');
            makefile.push_str(line);
            makefile.push('\n');
        }
        fs::write(self.root().join("luasocket/Makefile"), makefile).expect("write Makefile");
    }
}
