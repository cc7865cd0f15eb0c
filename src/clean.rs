//! Best-effort removal of the build output directory.

use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Recursively delete `<base_dir>/build`, one entry at a time.
///
/// Deletion is not transactional: every entry that cannot be removed is
/// reported and skipped, and a missing directory is not an error.
pub fn clean_build(base_dir: &Path) {
    let build_dir = base_dir.join("build");
    if !build_dir.exists() {
        println!("No build directory to clean.");
        return;
    }

    println!("Removing {}...", build_dir.display());
    for entry in WalkDir::new(&build_dir).contents_first(true) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };

        let removed = if entry.file_type().is_dir() {
            fs::remove_dir(entry.path())
        } else {
            fs::remove_file(entry.path())
        };
        if let Err(err) = removed {
            println!("Failed to remove {}: {}", entry.path().display(), err);
        }
    }
}
