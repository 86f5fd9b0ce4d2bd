use clap::Parser;
use std::path::PathBuf;

use jspack_core::RemotePathConfig;

use crate::compiler::CompilerOptions;

fn build_options(remote_path: Option<&PathBuf>, output_dir: Option<&PathBuf>) -> CompilerOptions {
    let remote = match remote_path {
        Some(base) => RemotePathConfig::new(base),
        None => RemotePathConfig::default_for_cwd(),
    };
    CompilerOptions { remote, output_dir: output_dir.cloned() }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "compile")]
#[command(about = "Compile root file(s) into bundles and manifests")]
pub struct CompileConfig {
    /// Root files to compile
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Base path for @remote-rooted dependencies (defaults to public/shared
    /// under the working directory)
    #[arg(long)]
    pub remote_path: Option<PathBuf>,

    /// Write bundles and manifests here instead of beside each root
    #[arg(long)]
    pub output_dir: Option<PathBuf>,
}

impl CompileConfig {
    pub fn compiler_options(&self) -> CompilerOptions {
        build_options(self.remote_path.as_ref(), self.output_dir.as_ref())
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "compile-folder")]
#[command(about = "Compile every source file found under the given folder(s)")]
pub struct FolderConfig {
    /// Folders to scan for compilation roots
    #[arg(required = true)]
    pub folders: Vec<PathBuf>,

    /// Base path for @remote-rooted dependencies (defaults to public/shared
    /// under the working directory)
    #[arg(long)]
    pub remote_path: Option<PathBuf>,

    /// Write bundles and manifests here instead of beside each root
    #[arg(long)]
    pub output_dir: Option<PathBuf>,
}

impl FolderConfig {
    pub fn compiler_options(&self) -> CompilerOptions {
        build_options(self.remote_path.as_ref(), self.output_dir.as_ref())
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "resolve")]
#[command(about = "Print a file's flattened dependency lists without compiling")]
pub struct ResolveConfig {
    /// Root files to resolve
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Emit the file list as a JSON array
    #[arg(long)]
    pub json: bool,

    /// Exclude scripts from the results
    #[arg(long)]
    pub exclude_scripts: bool,

    /// Exclude stylesheets from the results
    #[arg(long)]
    pub exclude_stylesheets: bool,

    /// Base path for @remote-rooted dependencies (defaults to public/shared
    /// under the working directory)
    #[arg(long, short = 'r')]
    pub remote_path: Option<PathBuf>,
}

impl ResolveConfig {
    pub fn compiler_options(&self) -> CompilerOptions {
        build_options(self.remote_path.as_ref(), None)
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "clear")]
#[command(about = "Remove compiled bundles and manifests under the given folder(s)")]
pub struct ClearConfig {
    /// Folders to clear of compiled artifacts
    #[arg(required = true)]
    pub folders: Vec<PathBuf>,
}
