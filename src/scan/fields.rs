//! Field Parser
//!
//! Probes one extracted block's raw text for the known scalar fields and the
//! nested `validation { ... }` sub-block. Every probe is independent and
//! tolerant: a field that does not match its pattern degrades to the
//! documented default (empty string, the `string` type sentinel, `false`,
//! absent). Nothing in here can fail; a truncated or oddly formatted block
//! simply yields emptier fields.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::{Validation, DEFAULT_TYPE};
use crate::scan::blocks::extract_block;

static DESCRIPTION: Lazy<Regex> = Lazy::new(|| {
    // Single- or double-quoted, stopping at the first closing quote or
    // newline.
    Regex::new(r#"(?m)^\s*description\s*=\s*(?:"([^"\n]*)"|'([^'\n]*)')"#).unwrap()
});

static TYPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\s*type\s*=\s*(.+)$").unwrap());

static DEFAULT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\s*default\s*=\s*(.*)$").unwrap());

static VALIDATION_OPEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^\s*validation\s*(\{)").unwrap());

static CONDITION: Lazy<Regex> = Lazy::new(|| Regex::new(r"condition\s*=\s*").unwrap());

/// Scalar fields recovered from one declaration block.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedFields {
    pub description: String,
    pub var_type: String,
    pub has_default: bool,
    pub default_value: Option<String>,
    pub validation: Option<Validation>,
}

/// Extract the known fields from a block's raw text.
///
/// A `default =` line sets `has_default` regardless of the value written
/// after it; an explicit `null` still counts as having a default clause.
pub fn parse_fields(raw_block: &str) -> ParsedFields {
    let description = DESCRIPTION
        .captures(raw_block)
        .and_then(|c| c.get(1).or_else(|| c.get(2)))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();

    let var_type = TYPE
        .captures(raw_block)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_else(|| DEFAULT_TYPE.to_string());

    let default_value = DEFAULT
        .captures(raw_block)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string());
    let has_default = default_value.is_some();

    ParsedFields {
        description,
        var_type,
        has_default,
        default_value,
        validation: parse_validation(raw_block),
    }
}

/// Locate and parse the nested `validation { ... }` sub-block, if any.
///
/// The sub-block is sliced out with the same balanced-brace scan used for
/// outer blocks. The condition expression is everything between
/// `condition =` and the following `error_message` keyword; when that
/// keyword is absent the condition runs to the end of the sub-block body.
fn parse_validation(raw_block: &str) -> Option<Validation> {
    let open = VALIDATION_OPEN.captures(raw_block)?.get(1)?.start();
    let sub_block = extract_block(raw_block, open);

    let condition = match CONDITION.find(sub_block) {
        Some(m) => {
            let rest = &sub_block[m.end()..];
            let until = rest.find("error_message").unwrap_or(rest.len());
            rest[..until].trim().trim_end_matches('}').trim().to_string()
        }
        None => String::new(),
    };

    Some(Validation {
        condition,
        raw_block: sub_block.to_string(),
    })
}
