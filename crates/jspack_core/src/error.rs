use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PackError>;

/// Everything that can go wrong while resolving or compiling one root.
/// All variants are unrecoverable for the invocation that raised them;
/// callers compiling a batch isolate roots so one failure does not abort
/// the rest.
#[derive(Debug, Error)]
pub enum PackError {
    /// A declared dependency, or the root itself, does not exist on disk
    #[error("missing file '{}'{}", .path.display(), required_by(.referenced_from))]
    MissingFile { path: PathBuf, referenced_from: Option<PathBuf> },

    /// A directive is malformed, or points at a file whose kind does not
    /// match the directive's
    #[error("parse error in '{}'{}: {}", .file.display(), at_line(.line), .reason)]
    Parsing { file: PathBuf, line: Option<usize>, reason: String },

    /// A dependency chain loops back on itself; the payload is the full
    /// chain from the revisited file back to itself
    #[error("circular dependency detected: {}", render_cycle(.cycle))]
    Recursion { cycle: Vec<PathBuf> },

    /// A bundle or manifest could not be written
    #[error("cannot write '{}': {}", .path.display(), .source)]
    CannotWrite { path: PathBuf, source: io::Error },

    /// A source file exists but could not be read
    #[error("cannot read '{}': {}", .path.display(), .source)]
    Read { path: PathBuf, source: io::Error },
}

fn required_by(referenced_from: &Option<PathBuf>) -> String {
    match referenced_from {
        Some(file) => format!(" (required by '{}')", file.display()),
        None => String::new(),
    }
}

fn at_line(line: &Option<usize>) -> String {
    match line {
        Some(n) => format!(" line {n}"),
        None => String::new(),
    }
}

fn render_cycle(cycle: &[PathBuf]) -> String {
    cycle.iter().map(|p| p.display().to_string()).collect::<Vec<_>>().join(" -> ")
}
