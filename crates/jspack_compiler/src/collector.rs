use ignore::WalkBuilder;
use log::{debug, trace};
use std::io;
use std::path::{Path, PathBuf};

use jspack_core::{PackError, Result, SCRIPT_EXTENSION};

use crate::paths::is_package_artifact;

/// Walk a folder for script files to use as compilation roots.
///
/// Previously compiled artifacts are skipped so a second run over the
/// same folder never tries to compile its own output. Results are sorted
/// for deterministic batch order.
pub fn collect_source_files(folder: &Path) -> Result<Vec<PathBuf>> {
    debug!("Collecting source files under {}", folder.display());
    let walker = WalkBuilder::new(folder).hidden(false).build();

    let mut files: Vec<PathBuf> = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|e| PackError::Read {
            path: folder.to_path_buf(),
            source: io::Error::other(e),
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if is_package_artifact(path) {
            trace!("Skipping compiled artifact: {}", path.display());
            continue;
        }
        if path.extension().and_then(|e| e.to_str()) == Some(SCRIPT_EXTENSION) {
            trace!("Found source file: {}", path.display());
            files.push(path.to_path_buf());
        }
    }

    files.sort();
    debug!("Collected {} source files", files.len());
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_file(dir: &Path, path: &str, content: &str) -> PathBuf {
        let file_path = dir.join(path);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&file_path, content).expect("Failed to write test file");
        file_path
    }

    #[test]
    fn test_collects_scripts_recursively_and_sorted() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        create_test_file(root, "js/b.js", "");
        create_test_file(root, "js/pages/a.js", "");
        create_test_file(root, "css/theme.css", "");
        create_test_file(root, "readme.md", "");

        let files = collect_source_files(root).unwrap();
        let names: Vec<&str> =
            files.iter().map(|p| p.strip_prefix(root).unwrap().to_str().unwrap()).collect();
        assert_eq!(names, vec!["js/b.js", "js/pages/a.js"]);
    }

    #[test]
    fn test_skips_compiled_artifacts() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        create_test_file(root, "js/main.js", "");
        create_test_file(root, "js/main.compiled.js", "");
        create_test_file(root, "js/main.js.manifest", "");

        let files = collect_source_files(root).unwrap();
        assert_eq!(files, vec![root.join("js/main.js")]);
    }

    #[test]
    fn test_empty_folder_yields_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let files = collect_source_files(temp_dir.path()).unwrap();
        assert!(files.is_empty());
    }
}
