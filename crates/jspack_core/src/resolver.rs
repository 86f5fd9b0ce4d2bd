use log::trace;
use path_clean::clean;
use std::path::{Path, PathBuf};

use crate::config::RemotePathConfig;
use crate::constants::{REMOTE_TOKEN, is_remote_path};
use crate::error::{PackError, Result};
use crate::types::{Annotation, AssetKind};

/// Turn an annotation into a canonical absolute path.
///
/// Remote-rooted paths resolve against `remote.base`; everything else
/// resolves against the referencing file's directory. Existence is
/// verified here, so graph construction only ever sees paths that were
/// real at resolution time.
pub fn resolve(
    annotation: &Annotation,
    from_file: &Path,
    remote: &RemotePathConfig,
) -> Result<PathBuf> {
    let joined = if is_remote_path(&annotation.raw_path) {
        let rest = annotation.raw_path.trim_start_matches(REMOTE_TOKEN).trim_start_matches('/');
        trace!("Resolving '{}' against remote base {}", annotation.raw_path, remote.base.display());
        remote.base.join(rest)
    } else {
        let base = from_file.parent().unwrap_or_else(|| Path::new("."));
        trace!("Resolving '{}' relative to {}", annotation.raw_path, base.display());
        base.join(&annotation.raw_path)
    };

    let cleaned = clean(joined);
    if !cleaned.is_file() {
        return Err(PackError::MissingFile {
            path: cleaned,
            referenced_from: Some(from_file.to_path_buf()),
        });
    }
    let resolved = cleaned.canonicalize().unwrap_or(cleaned);

    // A directive's kind must agree with the extension of the file it
    // points at; silently reclassifying would hide a mistake in the
    // annotation.
    let expected = annotation.kind.asset_kind();
    if AssetKind::from_path(&resolved) != Some(expected) {
        return Err(PackError::Parsing {
            file: from_file.to_path_buf(),
            line: Some(annotation.line),
            reason: format!(
                "directive for '{}' points at '{}', which is not a {} file",
                annotation.raw_path,
                resolved.display(),
                match expected {
                    AssetKind::Script => "script",
                    AssetKind::Stylesheet => "stylesheet",
                },
            ),
        });
    }

    trace!("Resolved '{}' to {}", annotation.raw_path, resolved.display());
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DirectiveKind;
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

    fn annotation(kind: DirectiveKind, raw_path: &str) -> Annotation {
        Annotation { kind, raw_path: raw_path.to_string(), line: 1 }
    }

    #[test]
    fn test_relative_resolution() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let main = create_test_file(root, "js/main.js", "");
        let util = create_test_file(root, "js/util.js", "");

        let remote = RemotePathConfig::new(root.join("shared"));
        let resolved = resolve(&annotation(DirectiveKind::Script, "util.js"), &main, &remote);
        assert_eq!(resolved.unwrap(), util.canonicalize().unwrap());
    }

    #[test]
    fn test_parent_directory_resolution() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let page = create_test_file(root, "js/pages/home.js", "");
        let base = create_test_file(root, "js/base.js", "");

        let remote = RemotePathConfig::new(root.join("shared"));
        let resolved = resolve(&annotation(DirectiveKind::Script, "../base.js"), &page, &remote);
        assert_eq!(resolved.unwrap(), base.canonicalize().unwrap());
    }

    #[test]
    fn test_remote_rooted_resolution_ignores_referencing_dir() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let main = create_test_file(root, "app/deep/nested/main.js", "");
        let vendor = create_test_file(root, "shared/lib/vendor.js", "");

        let remote = RemotePathConfig::new(root.join("shared"));
        let resolved =
            resolve(&annotation(DirectiveKind::RemoteScript, "@remote/lib/vendor.js"), &main, &remote);
        assert_eq!(resolved.unwrap(), vendor.canonicalize().unwrap());
    }

    #[test]
    fn test_changing_remote_base_only_moves_remote_refs() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let main = create_test_file(root, "js/main.js", "");
        let local = create_test_file(root, "js/local.js", "");
        create_test_file(root, "shared_a/lib.js", "");
        let lib_b = create_test_file(root, "shared_b/lib.js", "");

        let remote_b = RemotePathConfig::new(root.join("shared_b"));
        let remote_resolved =
            resolve(&annotation(DirectiveKind::RemoteScript, "@remote/lib.js"), &main, &remote_b);
        assert_eq!(remote_resolved.unwrap(), lib_b.canonicalize().unwrap());

        // Plain references are unaffected by the remote base
        let local_resolved =
            resolve(&annotation(DirectiveKind::Script, "local.js"), &main, &remote_b);
        assert_eq!(local_resolved.unwrap(), local.canonicalize().unwrap());
    }

    #[test]
    fn test_missing_file_carries_referent() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let main = create_test_file(root, "js/main.js", "");

        let remote = RemotePathConfig::new(root.join("shared"));
        let err = resolve(&annotation(DirectiveKind::Script, "gone.js"), &main, &remote).unwrap_err();
        match err {
            PackError::MissingFile { path, referenced_from } => {
                assert!(path.ends_with("js/gone.js"));
                assert_eq!(referenced_from, Some(main));
            }
            other => panic!("expected MissingFile, got {other:?}"),
        }
    }

    #[test]
    fn test_stylesheet_directive_at_script_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let main = create_test_file(root, "js/main.js", "");
        create_test_file(root, "js/oops.js", "");

        let remote = RemotePathConfig::new(root.join("shared"));
        let err =
            resolve(&annotation(DirectiveKind::Stylesheet, "oops.js"), &main, &remote).unwrap_err();
        match err {
            PackError::Parsing { line, reason, .. } => {
                assert_eq!(line, Some(1));
                assert!(reason.contains("not a stylesheet"));
            }
            other => panic!("expected Parsing error, got {other:?}"),
        }
    }

    #[test]
    fn test_script_directive_at_stylesheet_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let main = create_test_file(root, "js/main.js", "");
        create_test_file(root, "js/theme.css", "");

        let remote = RemotePathConfig::new(root.join("shared"));
        let err =
            resolve(&annotation(DirectiveKind::Script, "theme.css"), &main, &remote).unwrap_err();
        assert!(matches!(err, PackError::Parsing { .. }));
    }

    #[test]
    fn test_dot_segments_are_normalized() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let main = create_test_file(root, "js/main.js", "");
        let util = create_test_file(root, "js/util.js", "");

        let remote = RemotePathConfig::new(root.join("shared"));
        let resolved =
            resolve(&annotation(DirectiveKind::Script, "./sub/../util.js"), &main, &remote);
        assert_eq!(resolved.unwrap(), util.canonicalize().unwrap());
    }
}
