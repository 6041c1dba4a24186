//! Rendering of usage-example text blocks.
//!
//! Output determinism is a hard requirement here: repeated synthesis over the
//! same inputs must be byte-identical, so every observable ordering is an
//! explicit sort and every value is derived from the input alone.

pub mod placeholder;
pub mod usage;

pub use placeholder::placeholder_value;
pub use usage::{render_basic_usage, render_conditional_usage, render_usage, RenderedUsage};
