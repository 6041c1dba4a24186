//! Block Extractor
//!
//! Locates declaration headers (`keyword "name" {`) with a line-anchored
//! pattern and slices out the balanced-brace block following each one by
//! running a brace-depth counter forward from the opening brace.
//!
//! The counter treats every `{` and `}` alike: braces embedded in quoted
//! strings or comments are counted too. That is a documented limitation of
//! this scanner, kept intentionally.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

/// Header pattern for the common case, compiled once.
static VARIABLE_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?m)^\s*variable\s+"([^"\n]+)"\s*\{"#).unwrap());

/// One discovered declaration block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockMatch {
    /// The quoted identifier from the header.
    pub name: String,
    /// Byte offset of the block's opening brace in the scanned text.
    pub start: usize,
    /// The balanced-brace substring, braces included. Truncated (missing its
    /// closing brace) when the input ended before the depth returned to zero.
    pub block: String,
}

/// Scan forward from `start` (the opening brace) and return the end of the
/// balanced block plus whether the scan actually balanced.
fn block_end(text: &str, start: usize) -> (usize, bool) {
    let bytes = text.as_bytes();
    let mut depth: i32 = 0;
    let mut i = start;
    while i < bytes.len() {
        match bytes[i] {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return (i + 1, true);
                }
            }
            _ => {}
        }
        i += 1;
    }
    (bytes.len(), false)
}

/// Return the substring from the opening brace at `start` through its
/// matching closing brace, inclusive.
///
/// Correct for arbitrarily nested braces. If the text ends before the depth
/// returns to zero, whatever accumulated is returned as-is; callers treat a
/// block without a trailing `}` as truncated input.
pub fn extract_block(text: &str, start: usize) -> &str {
    let (end, _) = block_end(text, start);
    &text[start..end]
}

/// Discover every `keyword "name" {` header in `text` and extract its block.
///
/// Matches are returned in file-text order, which is the canonical ordering
/// downstream. A block that never balances is kept truncated and reported
/// through a diagnostic, never dropped.
pub fn find_blocks(text: &str, keyword: &str) -> Vec<BlockMatch> {
    let owned;
    let header: &Regex = if keyword == "variable" {
        &VARIABLE_HEADER
    } else {
        owned = header_regex(keyword);
        &owned
    };

    let mut blocks = Vec::new();
    for caps in header.captures_iter(text) {
        let (Some(full), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        // The pattern ends with the opening brace, so it sits at end - 1.
        let start = full.end() - 1;
        let (end, balanced) = block_end(text, start);
        if !balanced {
            warn!(
                keyword,
                name = name.as_str(),
                "declaration block never closes; keeping truncated text"
            );
        }
        blocks.push(BlockMatch {
            name: name.as_str().to_string(),
            start,
            block: text[start..end].to_string(),
        });
    }
    blocks
}

fn header_regex(keyword: &str) -> Regex {
    let pattern = format!(r#"(?m)^\s*{}\s+"([^"\n]+)"\s*\{{"#, regex::escape(keyword));
    Regex::new(&pattern).expect("escaped keyword forms a valid header pattern")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_flat_block() {
        let text = r#"variable "a" { type = string }"#;
        let start = text.find('{').unwrap();
        assert_eq!(extract_block(text, start), "{ type = string }");
    }

    #[test]
    fn test_extract_nested_block() {
        let text = "{ outer { inner { deep } } tail }";
        assert_eq!(extract_block(text, 0), text);
    }

    #[test]
    fn test_extract_stops_at_matching_brace() {
        let text = "{ a } { b }";
        assert_eq!(extract_block(text, 0), "{ a }");
    }

    #[test]
    fn test_extract_truncated_returns_remainder() {
        let text = "{ never { closed }";
        assert_eq!(extract_block(text, 0), text);
    }

    #[test]
    fn test_find_blocks_in_order() {
        let text = "variable \"b\" {\n}\n\nvariable \"a\" {\n}\n";
        let found = find_blocks(text, "variable");
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].name, "b");
        assert_eq!(found[1].name, "a");
    }

    #[test]
    fn test_find_blocks_other_keyword() {
        let text = "output \"bucket_arn\" {\n  value = aws_s3_bucket.this.arn\n}\n";
        let found = find_blocks(text, "output");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "bucket_arn");
        assert!(found[0].block.ends_with('}'));
    }

    #[test]
    fn test_find_blocks_includes_nested_content() {
        let text = "variable \"x\" {\n  validation {\n    condition = true\n  }\n}\n";
        let found = find_blocks(text, "variable");
        assert_eq!(found.len(), 1);
        assert!(found[0].block.contains("condition = true"));
        assert!(found[0].block.trim_end().ends_with('}'));
    }

    #[test]
    fn test_find_blocks_header_not_mid_line() {
        // Header discovery is line-anchored; a mention inside a value is not
        // a declaration.
        let text = "locals {\n  note = \"variable \\\"fake\\\" {\"\n}\n";
        assert!(find_blocks(text, "variable").is_empty());
    }

    #[test]
    fn test_find_blocks_empty_input() {
        assert!(find_blocks("", "variable").is_empty());
    }

    #[test]
    fn test_find_blocks_truncated_block_kept() {
        let text = "variable \"broken\" {\n  description = \"never closed\n";
        let found = find_blocks(text, "variable");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "broken");
        assert!(!found[0].block.ends_with('}'));
    }

    #[test]
    fn test_quoted_brace_is_counted() {
        // Known limitation: a brace inside a quoted string closes the block.
        let text = "variable \"x\" {\n  description = \"has a } brace\"\n}\n";
        let found = find_blocks(text, "variable");
        assert_eq!(found.len(), 1);
        assert!(found[0].block.ends_with('}'));
        assert!(!found[0].block.contains("brace"));
    }
}
