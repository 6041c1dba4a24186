//! Testing utilities: canonical sample sources and declaration constructors.
//!
//! Tests should take HCL content from [`Samples`] instead of inlining their
//! own: the samples are vetted against the scanner's expectations, and when
//! the expectations change there is exactly one place to update.

use crate::model::{Declaration, Validation, DEFAULT_TYPE};

/// Canonical declaration-file sources used across the test suites.
pub struct Samples;

impl Samples {
    /// A storage module exercising all four categories: one Required
    /// (`bucket_name`), one Trigger (`storage_class`), one Conditional
    /// (`glacier_days`), one Optional (`force_destroy`).
    pub fn storage_module() -> &'static str {
        r#"variable "bucket_name" {
  description = "Name of the bucket"
  type        = string
}

variable "storage_class" {
  description = "Storage tier for objects"
  type        = string

  validation {
    condition     = contains(["standard", "infrequent", "glacier"], var.storage_class)
    error_message = "storage_class must be one of: standard, infrequent, glacier."
  }
}

variable "glacier_days" {
  description = "Days before objects transition to glacier"
  type        = number
  default     = 0

  validation {
    condition     = var.storage_class != "glacier" || var.glacier_days > 0
    error_message = "glacier_days must be set when storage_class is glacier."
  }
}

variable "force_destroy" {
  description = "Allow destroying a non-empty bucket"
  type        = bool
  default     = false
}
"#
    }

    /// A single required declaration and nothing else.
    pub fn minimal_module() -> &'static str {
        "variable \"bucket_name\" {\n  type = string\n}\n"
    }

    /// A declaration whose block never closes; the scanner keeps the
    /// truncated text and field parsing degrades to defaults.
    pub fn truncated_module() -> &'static str {
        "variable \"broken\" {\n  description = \"never closed\n"
    }

    /// Two declarations sharing one name; the pipeline rejects this.
    pub fn duplicate_module() -> &'static str {
        "variable \"region\" {\n}\n\nvariable \"region\" {\n  default = \"eu-west-1\"\n}\n"
    }
}

/// Build a declaration with the given classification axes and inert text
/// fields. Test helper only; the raw block is a synthetic stand-in.
pub fn decl(name: &str, has_default: bool, has_validation: bool) -> Declaration {
    Declaration {
        name: name.to_string(),
        raw_block: format!("{{ name = {} }}", name),
        description: String::new(),
        var_type: DEFAULT_TYPE.to_string(),
        has_default,
        default_value: has_default.then(|| "null".to_string()),
        validation: has_validation.then(|| Validation {
            condition: format!("var.{} != null", name),
            raw_block: "{ }".to_string(),
        }),
    }
}
