use std::path::{Path, PathBuf};

use jspack_core::{
    ARTIFACT_SUFFIXES, AssetKind, COMPILED_SCRIPT_SUFFIX, COMPILED_STYLESHEET_SUFFIX,
    SCRIPT_MANIFEST_SUFFIX, STYLESHEET_MANIFEST_SUFFIX,
};

/// Bundle path for a root: `main.js` becomes `main.compiled.js` (or
/// `main.compiled.css` for the root's stylesheet bundle), beside the root
/// unless an output directory is given.
pub fn compiled_path(root: &Path, kind: AssetKind, output_dir: Option<&Path>) -> PathBuf {
    let suffix = match kind {
        AssetKind::Script => COMPILED_SCRIPT_SUFFIX,
        AssetKind::Stylesheet => COMPILED_STYLESHEET_SUFFIX,
    };
    artifact_path(root, suffix, output_dir)
}

/// Manifest path for a root: `main.js` becomes `main.js.manifest` /
/// `main.css.manifest`.
pub fn manifest_path(root: &Path, kind: AssetKind, output_dir: Option<&Path>) -> PathBuf {
    let suffix = match kind {
        AssetKind::Script => SCRIPT_MANIFEST_SUFFIX,
        AssetKind::Stylesheet => STYLESHEET_MANIFEST_SUFFIX,
    };
    artifact_path(root, suffix, output_dir)
}

fn artifact_path(root: &Path, suffix: &str, output_dir: Option<&Path>) -> PathBuf {
    let stem = root.file_stem().and_then(|s| s.to_str()).unwrap_or("package");
    let name = format!("{stem}{suffix}");
    match output_dir {
        Some(dir) => dir.join(name),
        None => root.with_file_name(name),
    }
}

/// True if a path matches the artifact naming convention. This is the
/// reverse of `compiled_path`/`manifest_path`: clearing relies on it to
/// find artifacts by pattern alone, without reparsing sources.
pub fn is_package_artifact(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    ARTIFACT_SUFFIXES.iter().any(|suffix| name.len() > suffix.len() && name.ends_with(suffix))
}
