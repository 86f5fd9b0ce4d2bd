use log::{debug, info};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::thread;

use jspack_core::Result;

use crate::collector::collect_source_files;
use crate::compiler::{CompiledPackage, CompilerOptions, compile_and_write};

/// The result of compiling one root within a batch
pub struct RootOutcome {
    pub root: PathBuf,
    pub result: Result<Vec<CompiledPackage>>,
}

/// Aggregated per-root results for a folder compilation
pub struct BatchOutcome {
    pub outcomes: Vec<RootOutcome>,
}

impl BatchOutcome {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    pub fn all_succeeded(&self) -> bool {
        self.outcomes.iter().all(|o| o.result.is_ok())
    }
}

/// Compile every source file found under `folder`, one isolated
/// invocation per root across the rayon pool. A failing root is recorded
/// in its outcome and never aborts the others; the naming convention
/// keeps distinct roots' outputs from colliding.
pub fn compile_folder(folder: &Path, opts: &CompilerOptions) -> Result<BatchOutcome> {
    let roots = collect_source_files(folder)?;
    info!(
        "Found {} files to compile under {} (using {} threads)",
        roots.len(),
        folder.display(),
        rayon::current_num_threads()
    );

    let outcomes: Vec<RootOutcome> = roots
        .par_iter()
        .map(|root| {
            debug!("Thread {:?} compiling: {}", thread::current().id(), root.display());
            RootOutcome { root: root.clone(), result: compile_and_write(root, opts) }
        })
        .collect();

    Ok(BatchOutcome { outcomes })
}
