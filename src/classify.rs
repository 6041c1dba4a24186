//! Variable Classifier
//!
//! Partitions a declaration set into four disjoint categories along two
//! axes: whether a default clause was written, and whether a validation
//! sub-block is present.
//!
//! | has default | has validation | category    |
//! |-------------|----------------|-------------|
//! | no          | no             | Required    |
//! | no          | yes            | Trigger     |
//! | yes         | yes            | Conditional |
//! | yes         | no             | Optional    |
//!
//! The partition is exhaustive and disjoint: every declaration lands in
//! exactly one list, and each list preserves discovery order.

use std::fmt;

use crate::model::Declaration;

/// The four-way classification of a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// No default, no validation: must always be supplied.
    Required,
    /// No default, validated against a fixed set of values; specific values
    /// may make other declarations mandatory.
    Trigger,
    /// Has a default, but its validation ties it to a trigger value under
    /// which it becomes effectively mandatory.
    Conditional,
    /// Has a default and no validation: genuinely optional.
    Optional,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Category::Required => "required",
            Category::Trigger => "trigger",
            Category::Conditional => "conditional",
            Category::Optional => "optional",
        };
        write!(f, "{}", label)
    }
}

/// Apply the decision table to one declaration.
pub fn category_of(decl: &Declaration) -> Category {
    match (decl.has_default, decl.has_validation()) {
        (false, false) => Category::Required,
        (false, true) => Category::Trigger,
        (true, true) => Category::Conditional,
        (true, false) => Category::Optional,
    }
}

/// The classified subsets of one module's declarations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classified {
    pub required: Vec<Declaration>,
    pub trigger: Vec<Declaration>,
    pub conditional: Vec<Declaration>,
    pub optional: Vec<Declaration>,
}

impl Classified {
    /// Total number of declarations across all four lists.
    pub fn len(&self) -> usize {
        self.required.len() + self.trigger.len() + self.conditional.len() + self.optional.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Partition `declarations` into the four category lists.
///
/// Total over any input, including the empty list; order within each list is
/// the declarations' original order.
pub fn classify(declarations: &[Declaration]) -> Classified {
    let mut classified = Classified::default();
    for decl in declarations {
        let bucket = match category_of(decl) {
            Category::Required => &mut classified.required,
            Category::Trigger => &mut classified.trigger,
            Category::Conditional => &mut classified.conditional,
            Category::Optional => &mut classified.optional,
        };
        bucket.push(decl.clone());
    }
    classified
}
