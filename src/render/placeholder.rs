//! Deterministic placeholder values for example assignments.

/// Derive the placeholder value shown for a declaration in usage examples.
///
/// The value is a function of the name alone (word separators swapped for a
/// display-friendly dash), so repeated renders of the same input are
/// byte-identical.
pub fn placeholder_value(name: &str) -> String {
    name.replace('_', "-")
}
