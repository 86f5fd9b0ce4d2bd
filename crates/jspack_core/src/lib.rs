//! Core dependency resolution engine for jspack.
//!
//! This crate provides the pure (non-writing) half of the packager:
//! - Scanning source files for `@require`/`@requireStyle` annotations
//! - Resolving annotated paths (relative and `@remote`-rooted)
//! - Building a dependency graph with cycle detection
//! - Flattening the graph into script/stylesheet load orders

mod annotation;
mod config;
mod constants;
mod error;
mod flatten;
mod graph;
mod resolver;
mod types;

// Re-export public API
pub use annotation::parse_annotations;
pub use config::RemotePathConfig;
pub use constants::{
    ARTIFACT_SUFFIXES, COMPILED_SCRIPT_SUFFIX, COMPILED_STYLESHEET_SUFFIX, REMOTE_TOKEN,
    REQUIRE_DIRECTIVE, REQUIRE_STYLE_DIRECTIVE, SCRIPT_EXTENSION, SCRIPT_MANIFEST_SUFFIX,
    STYLESHEET_EXTENSION, STYLESHEET_MANIFEST_SUFFIX, is_remote_path,
};
pub use error::{PackError, Result};
pub use flatten::flatten;
pub use graph::{DependencyTree, Node, NodeId};
pub use resolver::resolve;
pub use types::{Annotation, AssetKind, DirectiveKind, FlattenedAssets};
