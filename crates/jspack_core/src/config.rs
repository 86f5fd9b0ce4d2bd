use std::env;
use std::path::PathBuf;

/// Base directory that `@remote`-rooted paths resolve against.
///
/// This is passed explicitly into resolution and graph construction so
/// concurrent invocations with different remote bases cannot interfere;
/// the core never reads ambient state itself.
#[derive(Debug, Clone)]
pub struct RemotePathConfig {
    pub base: PathBuf,
}

impl RemotePathConfig {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// The default the CLI injects when no remote path is given:
    /// `public/shared` under the working directory.
    pub fn default_for_cwd() -> Self {
        let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self { base: cwd.join("public").join("shared") }
    }
}
