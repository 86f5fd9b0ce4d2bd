use log::{debug, info, warn};
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use jspack_core::{
    AssetKind, DependencyTree, FlattenedAssets, PackError, RemotePathConfig, Result, flatten,
};

use crate::paths::{compiled_path, is_package_artifact, manifest_path};

/// Per-invocation compiler configuration, passed by reference so batch
/// compilation can share one value across worker threads.
#[derive(Debug, Clone)]
pub struct CompilerOptions {
    pub remote: RemotePathConfig,
    /// Write artifacts here instead of beside each root
    pub output_dir: Option<PathBuf>,
}

impl CompilerOptions {
    pub fn new(remote: RemotePathConfig) -> Self {
        Self { remote, output_dir: None }
    }
}

/// One bundle/manifest pair produced for a root. Both paths are derived
/// deterministically from `source_path`, which is what lets
/// `clear_packages` find them later by pattern alone.
#[derive(Debug, Clone, Serialize)]
pub struct CompiledPackage {
    pub source_path: PathBuf,
    pub kind: AssetKind,
    pub compiled_path: PathBuf,
    pub manifest_path: PathBuf,
}

/// Build and flatten a root's dependency graph without writing anything.
/// This backs the `resolve` mode, which reports load order only.
pub fn resolve_dependencies(root: &Path, opts: &CompilerOptions) -> Result<FlattenedAssets> {
    let tree = DependencyTree::build(root, &opts.remote)?;
    Ok(flatten(&tree))
}

/// Compile one root: build the graph, flatten it, and write one bundle
/// plus one manifest per asset kind that has any content.
///
/// The bundle is written before its manifest, and any write failure
/// surfaces as `CannotWrite` before the manifest exists, so a manifest
/// never describes a bundle that failed. Only the artifacts for this
/// root are touched.
pub fn compile_and_write(root: &Path, opts: &CompilerOptions) -> Result<Vec<CompiledPackage>> {
    info!("Compiling {}", root.display());
    let tree = DependencyTree::build(root, &opts.remote)?;
    let root_path = tree.node(tree.root()).path.clone();
    let assets = flatten(&tree);

    let output_dir = opts.output_dir.as_deref();
    let mut packages = Vec::new();
    for (kind, sources) in
        [(AssetKind::Script, &assets.scripts), (AssetKind::Stylesheet, &assets.stylesheets)]
    {
        if sources.is_empty() {
            continue;
        }
        let bundle = compiled_path(&root_path, kind, output_dir);
        let manifest = manifest_path(&root_path, kind, output_dir);

        write_bundle(&bundle, sources)?;
        write_manifest(&manifest, sources)?;

        info!(
            "Wrote {:?} bundle {} ({} sources)",
            kind,
            bundle.display(),
            sources.len()
        );
        packages.push(CompiledPackage {
            source_path: root_path.clone(),
            kind,
            compiled_path: bundle,
            manifest_path: manifest,
        });
    }

    Ok(packages)
}

/// Concatenate the sources, in flattened order, into one bundle file.
/// No separators are inserted: the bundle is byte-for-byte the
/// concatenation of the manifest's entries.
fn write_bundle(target: &Path, sources: &[PathBuf]) -> Result<()> {
    debug!("Writing bundle {}", target.display());
    let mut out = fs::File::create(target)
        .map_err(|e| PackError::CannotWrite { path: target.to_path_buf(), source: e })?;
    for source in sources {
        let content =
            fs::read(source).map_err(|e| PackError::Read { path: source.clone(), source: e })?;
        out.write_all(&content)
            .map_err(|e| PackError::CannotWrite { path: target.to_path_buf(), source: e })?;
    }
    out.flush().map_err(|e| PackError::CannotWrite { path: target.to_path_buf(), source: e })
}

/// One absolute source path per line, in exactly the bundle's
/// concatenation order. Downstream consumers rely on this to know what
/// was concatenated and in what order.
fn write_manifest(target: &Path, sources: &[PathBuf]) -> Result<()> {
    debug!("Writing manifest {}", target.display());
    let mut body = String::new();
    for source in sources {
        body.push_str(&source.to_string_lossy());
        body.push('\n');
    }
    fs::write(target, body)
        .map_err(|e| PackError::CannotWrite { path: target.to_path_buf(), source: e })
}

/// Recursively delete every bundle and manifest under `folder`, matching
/// by the artifact naming convention. A failed deletion is logged and
/// counted but does not stop the remaining deletions; returns false if
/// anything could not be removed. Source files are never touched.
pub fn clear_packages(folder: &Path) -> bool {
    info!("Clearing packages under {}", folder.display());
    // Artifacts are routinely gitignored, so the walk must not apply
    // ignore rules here.
    let walker = WalkBuilder::new(folder).standard_filters(false).build();

    let mut success = true;
    let mut removed = 0usize;
    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                warn!("Skipping unreadable entry while clearing: {}", e);
                success = false;
                continue;
            }
        };
        let path = entry.path();
        if !path.is_file() || !is_package_artifact(path) {
            continue;
        }
        match fs::remove_file(path) {
            Ok(()) => {
                debug!("Removed {}", path.display());
                removed += 1;
            }
            Err(e) => {
                warn!("Could not remove {}: {}", path.display(), e);
                success = false;
            }
        }
    }

    info!("Removed {} package artifacts under {}", removed, folder.display());
    success
}
