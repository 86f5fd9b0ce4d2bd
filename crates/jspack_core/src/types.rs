use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::constants::{SCRIPT_EXTENSION, STYLESHEET_EXTENSION};

/// What a file on disk is, determined by its extension alone. The kind of
/// the directive that referenced a file never reclassifies it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Script,
    Stylesheet,
}

impl AssetKind {
    pub fn from_path(path: &Path) -> Option<AssetKind> {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext == SCRIPT_EXTENSION => Some(AssetKind::Script),
            Some(ext) if ext == STYLESHEET_EXTENSION => Some(AssetKind::Stylesheet),
            _ => None,
        }
    }
}

/// Which directive keyword (and path shape) declared a dependency
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectiveKind {
    Script,
    RemoteScript,
    Stylesheet,
}

impl DirectiveKind {
    /// The asset kind this directive is expected to point at
    pub fn asset_kind(self) -> AssetKind {
        match self {
            DirectiveKind::Script | DirectiveKind::RemoteScript => AssetKind::Script,
            DirectiveKind::Stylesheet => AssetKind::Stylesheet,
        }
    }
}

/// One dependency directive found in a source file, in declaration order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    pub kind: DirectiveKind,
    /// The path exactly as written in the source
    pub raw_path: String,
    /// 1-based line the directive appeared on, for diagnostics
    pub line: usize,
}

/// The flattened load order for one root: every dependency precedes every
/// dependent, duplicates collapsed to their first occurrence
#[derive(Debug, Clone, Default, Serialize)]
pub struct FlattenedAssets {
    pub scripts: Vec<PathBuf>,
    pub stylesheets: Vec<PathBuf>,
}
