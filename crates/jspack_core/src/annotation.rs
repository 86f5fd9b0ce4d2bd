use log::{debug, trace};
use std::path::Path;

use crate::constants::{REQUIRE_DIRECTIVE, REQUIRE_STYLE_DIRECTIVE, is_remote_path};
use crate::error::{PackError, Result};
use crate::types::{Annotation, DirectiveKind};

/// Scan source text for dependency directives embedded in comments.
///
/// Directives are recognized one per line inside `//` comments and
/// `/* ... */` blocks (including `*`-decorated continuation lines).
/// Declaration order is preserved; it governs load order among siblings.
/// Purely textual, no filesystem access.
pub fn parse_annotations(source: &str, file: &Path) -> Result<Vec<Annotation>> {
    trace!("Scanning {} for annotations", file.display());
    let mut annotations = Vec::new();
    let mut in_block = false;

    for (idx, line) in source.lines().enumerate() {
        let line_no = idx + 1;
        let Some(comment) = comment_text(line, &mut in_block) else {
            continue;
        };

        let mut tokens = comment.split_whitespace();
        while let Some(token) = tokens.next() {
            if !token.starts_with(REQUIRE_DIRECTIVE) {
                continue;
            }
            if token != REQUIRE_DIRECTIVE && token != REQUIRE_STYLE_DIRECTIVE {
                return Err(PackError::Parsing {
                    file: file.to_path_buf(),
                    line: Some(line_no),
                    reason: format!("unrecognized annotation '{token}'"),
                });
            }
            let raw_path = tokens.next().ok_or_else(|| PackError::Parsing {
                file: file.to_path_buf(),
                line: Some(line_no),
                reason: format!("{token} directive is missing its path argument"),
            })?;

            let kind = if token == REQUIRE_STYLE_DIRECTIVE {
                DirectiveKind::Stylesheet
            } else if is_remote_path(raw_path) {
                DirectiveKind::RemoteScript
            } else {
                DirectiveKind::Script
            };

            trace!("Found {:?} directive '{}' at {}:{}", kind, raw_path, file.display(), line_no);
            annotations.push(Annotation { kind, raw_path: raw_path.to_string(), line: line_no });
        }
    }

    debug!("Found {} annotations in {}", annotations.len(), file.display());
    Ok(annotations)
}

/// Extract the comment portion of a line, tracking `/* ... */` blocks
/// across lines. Returns None for lines with no comment content.
fn comment_text<'a>(line: &'a str, in_block: &mut bool) -> Option<&'a str> {
    let trimmed = line.trim_start();

    if *in_block {
        let body = match trimmed.find("*/") {
            Some(end) => {
                *in_block = false;
                &trimmed[..end]
            }
            None => trimmed,
        };
        return Some(body.trim_start_matches('*').trim_start());
    }

    if let Some(rest) = trimmed.strip_prefix("//") {
        return Some(rest);
    }

    if let Some(rest) = trimmed.strip_prefix("/*") {
        return match rest.find("*/") {
            Some(end) => Some(&rest[..end]),
            None => {
                *in_block = true;
                Some(rest)
            }
        };
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn parse(source: &str) -> Result<Vec<Annotation>> {
        parse_annotations(source, &PathBuf::from("/app/js/main.js"))
    }

    #[test]
    fn test_require_directive() {
        let found = parse("// @require util.js\n").unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].kind, DirectiveKind::Script);
        assert_eq!(found[0].raw_path, "util.js");
        assert_eq!(found[0].line, 1);
    }

    #[test]
    fn test_require_style_directive() {
        let found = parse("// @requireStyle ../css/theme.css\n").unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].kind, DirectiveKind::Stylesheet);
        assert_eq!(found[0].raw_path, "../css/theme.css");
    }

    #[test]
    fn test_remote_rooted_require() {
        let found = parse("// @require @remote/lib/vendor.js\n").unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].kind, DirectiveKind::RemoteScript);
        assert_eq!(found[0].raw_path, "@remote/lib/vendor.js");
    }

    #[test]
    fn test_declaration_order_preserved() {
        let source = "// @require b.js\n// @require a.js\n// @requireStyle c.css\n";
        let found = parse(source).unwrap();
        let paths: Vec<&str> = found.iter().map(|a| a.raw_path.as_str()).collect();
        assert_eq!(paths, vec!["b.js", "a.js", "c.css"]);
    }

    #[test]
    fn test_block_comment_continuation_lines() {
        let source = "/**\n * @require dep.js\n * @requireStyle dep.css\n */\nvar x = 1;\n";
        let found = parse(source).unwrap();
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].raw_path, "dep.js");
        assert_eq!(found[1].raw_path, "dep.css");
        assert_eq!(found[0].line, 2);
    }

    #[test]
    fn test_single_line_block_comment() {
        let found = parse("/* @require dep.js */\n").unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].raw_path, "dep.js");
    }

    #[test]
    fn test_directives_outside_comments_ignored() {
        let source = "var s = 'not a comment';\n@require nope.js\n";
        let found = parse(source).unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn test_plain_comment_text_ignored() {
        let found = parse("// just a note about requirements\n").unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn test_missing_path_argument_fails() {
        let err = parse("// some docs\n// @require\n").unwrap_err();
        match err {
            PackError::Parsing { line, reason, .. } => {
                assert_eq!(line, Some(2));
                assert!(reason.contains("missing its path argument"));
            }
            other => panic!("expected Parsing error, got {other:?}"),
        }
    }

    #[test]
    fn test_unrecognized_keyword_with_marker_prefix_fails() {
        let err = parse("// @requireRemotely util.js\n").unwrap_err();
        match err {
            PackError::Parsing { line, reason, .. } => {
                assert_eq!(line, Some(1));
                assert!(reason.contains("@requireRemotely"));
            }
            other => panic!("expected Parsing error, got {other:?}"),
        }
    }

    #[test]
    fn test_stylesheet_sources_use_css_comments() {
        let source = "/* @requireStyle base.css */\nbody { margin: 0; }\n";
        let found = parse_annotations(source, &PathBuf::from("/app/css/page.css")).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].kind, DirectiveKind::Stylesheet);
    }
}
