//! Core data model for parsed module declarations.
//!
//! Everything here is a plain value type. Declarations are produced once by
//! the field parser and never mutated afterwards; `UsageGroup` records arrive
//! from an external collaborator and live only for a single render call.

use serde::Deserialize;

/// Sentinel type shown when a declaration carries no `type =` field.
pub const DEFAULT_TYPE: &str = "string";

/// A nested `validation { ... }` rule attached to a declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    /// The raw condition expression, taken verbatim (trimmed) from between
    /// `condition =` and the following `error_message` keyword. Opaque to
    /// this crate; it is never evaluated.
    pub condition: String,
    /// The full validation sub-block text, braces included.
    pub raw_block: String,
}

/// One parsed declaration entry, e.g. a `variable "name" { ... }` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// Identifier from the block header. Unique within one module; the
    /// pipeline rejects duplicates at assembly time.
    pub name: String,
    /// The exact balanced-brace substring the block was extracted from.
    pub raw_block: String,
    /// `description =` value, empty when absent.
    pub description: String,
    /// `type =` value, or [`DEFAULT_TYPE`] when absent.
    pub var_type: String,
    /// Whether a `default =` clause was written at all. An explicit `null`
    /// default still counts: the classification axis is "was a default
    /// clause written", not "is the value usable".
    pub has_default: bool,
    /// The default's text, present only when `has_default` is true.
    pub default_value: Option<String>,
    /// Nested validation rule, when one was found.
    pub validation: Option<Validation>,
}

impl Declaration {
    pub fn has_validation(&self) -> bool {
        self.validation.is_some()
    }

    /// The condition expression, or an empty string when there is none.
    pub fn condition(&self) -> &str {
        self.validation
            .as_ref()
            .map(|v| v.condition.as_str())
            .unwrap_or("")
    }
}

/// Externally supplied association of one trigger value with the conditional
/// declarations that value makes mandatory.
///
/// These records come back from the text-generation collaborator and are
/// untrusted: names are validated loosely at render time, never rejected.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UsageGroup {
    /// Name of the trigger declaration this group pivots on.
    pub trigger: String,
    /// The concrete value the trigger takes in this example.
    pub value: String,
    /// Human-readable label for the rendered block.
    pub label: String,
    /// Names of the conditional declarations required under this value.
    #[serde(default)]
    pub variables: Vec<String>,
}

/// Module-level metadata used only for textual substitution in rendered
/// examples. Never parsed by this crate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleMeta {
    /// Display name used as the `module "<name>"` label.
    pub display_name: String,
    /// Canonical source locator (registry path or VCS URL).
    pub source: String,
    /// Version tag, empty when unpinned.
    pub version: String,
}

impl ModuleMeta {
    pub fn new(display_name: &str, source: &str, version: &str) -> Self {
        Self {
            display_name: display_name.to_string(),
            source: source.to_string(),
            version: version.to_string(),
        }
    }
}
