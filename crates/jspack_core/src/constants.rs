//! Directive keywords, asset extensions, and the artifact naming scheme.
//!
//! The naming scheme is load-bearing: `clear_packages` locates compiled
//! output by suffix pattern alone, without reparsing sources, so these
//! values must stay stable.

/// Declares a script dependency: `// @require path/to/file.js`
pub const REQUIRE_DIRECTIVE: &str = "@require";

/// Declares a stylesheet dependency: `// @requireStyle path/to/file.css`
pub const REQUIRE_STYLE_DIRECTIVE: &str = "@requireStyle";

/// Placeholder token at the start of a raw path that redirects resolution
/// to the configured remote base directory instead of the referencing
/// file's own directory.
pub const REMOTE_TOKEN: &str = "@remote";

/// Extension of files classified as scripts
pub const SCRIPT_EXTENSION: &str = "js";

/// Extension of files classified as stylesheets
pub const STYLESHEET_EXTENSION: &str = "css";

/// Suffix appended to a root's file stem for its script bundle
pub const COMPILED_SCRIPT_SUFFIX: &str = ".compiled.js";

/// Suffix appended to a root's file stem for its stylesheet bundle
pub const COMPILED_STYLESHEET_SUFFIX: &str = ".compiled.css";

/// Suffix appended to a root's file stem for its script manifest
pub const SCRIPT_MANIFEST_SUFFIX: &str = ".js.manifest";

/// Suffix appended to a root's file stem for its stylesheet manifest
pub const STYLESHEET_MANIFEST_SUFFIX: &str = ".css.manifest";

/// Every suffix the compiler may produce, used by clearing to match
/// artifacts by pattern
pub const ARTIFACT_SUFFIXES: &[&str] = &[
    COMPILED_SCRIPT_SUFFIX,
    COMPILED_STYLESHEET_SUFFIX,
    SCRIPT_MANIFEST_SUFFIX,
    STYLESHEET_MANIFEST_SUFFIX,
];

/// Returns true if a raw annotation path is remote-rooted, i.e. it is the
/// `@remote` token alone or starts with `@remote/`.
pub fn is_remote_path(raw: &str) -> bool {
    match raw.strip_prefix(REMOTE_TOKEN) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}
