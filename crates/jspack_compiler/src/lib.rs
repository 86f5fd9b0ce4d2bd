//! Bundle compilation and artifact management for jspack.
//!
//! Builds on `jspack_core`'s resolution engine to:
//! - Concatenate flattened dependency chains into bundle files
//! - Write manifests recording each bundle's composition in order
//! - Clear previously produced bundles and manifests from a folder
//! - Discover and batch-compile every source file under a folder

mod batch;
mod collector;
mod compiler;
mod config;
mod paths;
mod reporter;

// Re-export public API
pub use batch::{BatchOutcome, RootOutcome, compile_folder};
pub use collector::collect_source_files;
pub use compiler::{
    CompiledPackage, CompilerOptions, clear_packages, compile_and_write, resolve_dependencies,
};
pub use config::{ClearConfig, CompileConfig, FolderConfig, ResolveConfig};
pub use paths::{compiled_path, is_package_artifact, manifest_path};
pub use reporter::{print_batch_summary, print_error, print_file_list, print_packages};
