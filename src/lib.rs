//! # tfusage
//!
//! Structural analysis and usage-example synthesis for Terraform-style
//! module declaration files.
//!
//! Given the raw text of a module's declaration files, this crate:
//!
//! 1. extracts `variable "name" { ... }` blocks with a balanced-brace scan
//!    ([`scan::blocks`]),
//! 2. parses each block's fields with tolerant pattern matching
//!    ([`scan::fields`]),
//! 3. classifies every declaration as Required, Trigger, Conditional or
//!    Optional ([`classify`]),
//! 4. renders deterministic, column-aligned usage-example text blocks
//!    ([`render::usage`]).
//!
//! ## Degradation over failure
//!
//! The scanner is a best-effort structural pass, not an HCL grammar. Fields
//! that do not match degrade to documented defaults, truncated blocks are
//! kept (with a diagnostic) rather than dropped, and externally supplied
//! usage groups that reference unknown names still render. The one hard
//! rejection is a duplicate declaration name at pipeline assembly.
//!
//! ## Determinism
//!
//! Rendering the same declarations and groups twice is byte-identical:
//! observable orderings are explicit sorts and placeholder values are
//! derived from declaration names alone.
//!
//! ## Boundaries
//!
//! This crate performs no I/O. File reading lives in the CLI binary; the
//! [`summary`] module defines the structured shapes exchanged with the
//! external text-generation collaborator (summary out, usage groups in).

pub mod classify;
pub mod model;
pub mod pipeline;
pub mod render;
pub mod scan;
pub mod summary;
pub mod testing;
