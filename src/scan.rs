//! Structural scanning of declaration file text.
//!
//! This is a best-effort structural scanner, not a grammar-aware HCL parser:
//! it recovers approximate field metadata from loosely formatted text and
//! degrades to empty fields on anything it cannot match. The two stages are
//! kept behind separate seams so a stricter parser could replace either
//! without touching the classifier or the renderer:
//!
//! 1. [`blocks`] finds `keyword "name" {` headers and slices out the
//!    balanced-brace block that follows each one.
//! 2. [`fields`] probes one block's text for the known scalar fields and the
//!    nested `validation { ... }` sub-block.

pub mod blocks;
pub mod fields;

pub use blocks::{extract_block, find_blocks, BlockMatch};
pub use fields::{parse_fields, ParsedFields};
