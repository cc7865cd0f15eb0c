//! Test module discovery and execution.
//!
//! Discovers `test_*.lua` modules under the project's `tests` directory and
//! runs each one with a Lua interpreter found on PATH. The harness only
//! runs and counts; assertions live in the modules themselves.

use anyhow::{bail, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::process::Cmd;

/// Exit code a test module uses to report itself as skipped, following the
/// convention of Makefile-driven test harnesses.
pub const SKIP_EXIT_CODE: i32 = 77;

/// Interpreter names probed on PATH, in order of preference.
const INTERPRETERS: &[&str] = &["lua5.4", "lua5.3", "lua5.1", "luajit", "lua"];

/// Aggregated outcome of one harness run.
#[derive(Debug, Default)]
pub struct TestReport {
    /// Number of modules executed (including skipped ones).
    pub run: usize,
    /// Modules that could not be executed at all: (label, detail).
    pub errors: Vec<(String, String)>,
    /// Modules that ran and exited non-zero: (label, detail).
    pub failures: Vec<(String, String)>,
    /// Modules that exited with [`SKIP_EXIT_CODE`].
    pub skipped: usize,
}

impl TestReport {
    pub fn all_passed(&self) -> bool {
        self.errors.is_empty() && self.failures.is_empty()
    }

    /// The fixed-format summary block.
    pub fn summary(&self) -> String {
        format!(
            "\ntests run: {}\nerrors: {}\nfailures: {}\nskipped: {}",
            self.run,
            self.errors.len(),
            self.failures.len(),
            self.skipped
        )
    }

    /// Print every error, then every failure, then the summary block.
    pub fn print(&self) {
        for (label, detail) in &self.errors {
            println!("{label}");
            println!("{detail}");
        }
        for (label, detail) in &self.failures {
            println!("{label}");
            println!("{detail}");
        }
        println!("{}", self.summary());
    }
}

/// Find all `test_*.lua` modules under `tests_dir`, sorted for determinism.
pub fn discover(tests_dir: &Path) -> Vec<PathBuf> {
    let mut found = Vec::new();
    if !tests_dir.is_dir() {
        return found;
    }

    for entry in WalkDir::new(tests_dir).into_iter().filter_map(|e| e.ok()) {
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if name.starts_with("test_") && name.ends_with(".lua") {
            found.push(entry.into_path());
        }
    }

    found.sort();
    found
}

/// Locate a Lua interpreter on PATH.
pub fn find_interpreter() -> Result<PathBuf> {
    for name in INTERPRETERS {
        if let Ok(path) = which::which(name) {
            return Ok(path);
        }
    }
    bail!(
        "no Lua interpreter found on PATH (tried {})",
        INTERPRETERS.join(", ")
    )
}

/// Run every discovered module with `interpreter` and collect outcomes.
pub fn run_all(tests_dir: &Path, interpreter: &Path) -> TestReport {
    let mut report = TestReport::default();

    for module in discover(tests_dir) {
        report.run += 1;
        let label = module
            .strip_prefix(tests_dir)
            .unwrap_or(&module)
            .display()
            .to_string();

        match Cmd::new(interpreter).arg_path(&module).allow_fail().run() {
            Err(err) => report.errors.push((label, format!("{err:#}"))),
            Ok(result) if result.success() => {}
            Ok(result) if result.code() == SKIP_EXIT_CODE => report.skipped += 1,
            Ok(result) => {
                let detail = result.stderr.trim_end().to_string();
                report.failures.push((label, detail));
            }
        }
    }

    report
}
