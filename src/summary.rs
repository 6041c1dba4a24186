//! Boundary shapes exchanged with the text-generation collaborator.
//!
//! Outbound: a compact structural summary of one module (names partitioned
//! by category, with condition expressions for the validated categories) —
//! the payload the collaborator's prompt is built from. This crate produces
//! structured facts only, never prose.
//!
//! Inbound: the collaborator's reply, a list of [`UsageGroup`] records.
//! Malformed JSON is the only rejection; referential mismatches against the
//! local declaration set are tolerated at render time.

use serde::Serialize;

use crate::model::UsageGroup;
use crate::pipeline::ModuleContext;

/// One validated declaration and its raw condition expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConditionEntry {
    pub name: String,
    pub condition: String,
}

/// The structural summary of one module, in discovery order per category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleSummary {
    pub module: String,
    pub required: Vec<String>,
    pub trigger: Vec<ConditionEntry>,
    pub conditional: Vec<ConditionEntry>,
    pub optional: Vec<String>,
}

/// Build the structural summary for `ctx`.
pub fn summarize(ctx: &ModuleContext) -> ModuleSummary {
    let classified = &ctx.classified;
    ModuleSummary {
        module: ctx.meta.display_name.clone(),
        required: classified.required.iter().map(|d| d.name.clone()).collect(),
        trigger: classified
            .trigger
            .iter()
            .map(|d| ConditionEntry {
                name: d.name.clone(),
                condition: d.condition().to_string(),
            })
            .collect(),
        conditional: classified
            .conditional
            .iter()
            .map(|d| ConditionEntry {
                name: d.name.clone(),
                condition: d.condition().to_string(),
            })
            .collect(),
        optional: classified.optional.iter().map(|d| d.name.clone()).collect(),
    }
}

/// Parse the collaborator's structured reply.
pub fn usage_groups_from_json(json: &str) -> Result<Vec<UsageGroup>, serde_json::Error> {
    serde_json::from_str(json)
}
