//! Usage Synthesizer
//!
//! Builds the example text blocks embedded into generated module docs: one
//! "basic usage" block covering everything that must always be supplied
//! (Required and Trigger categories), and one "conditional usage" block per
//! externally supplied [`UsageGroup`], showing the trigger pinned to a
//! concrete value and the conditional fields annotated with the requirement
//! that pins them.
//!
//! Assignment lines are name-sorted and column-aligned; column width is
//! computed per block, so blocks do not share alignment with each other.

use std::collections::BTreeMap;

use crate::model::{Declaration, ModuleMeta, UsageGroup};
use crate::pipeline::ModuleContext;
use crate::render::placeholder::placeholder_value;

/// One rendered example block, tagged with its group label so the assembly
/// layer can place it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedUsage {
    pub label: String,
    pub text: String,
}

/// One assignment line awaiting rendering, keyed by name in a `BTreeMap` so
/// output order is the lexicographic name order regardless of insertion
/// order.
struct Line {
    value: String,
    note: Option<String>,
}

/// Render the minimal always-required example: Required ∪ Trigger, every
/// value a deterministic placeholder.
///
/// Optional and Conditional declarations are deliberately absent; they only
/// appear contextually in conditional blocks. An empty variable set renders
/// the empty string.
pub fn render_basic_usage(
    required: &[Declaration],
    trigger: &[Declaration],
    meta: &ModuleMeta,
) -> String {
    let mut lines = BTreeMap::new();
    for decl in required.iter().chain(trigger) {
        lines.insert(
            decl.name.clone(),
            Line {
                value: placeholder_value(&decl.name),
                note: None,
            },
        );
    }
    render_block(&lines, meta)
}

/// Render one conditional example for `group`: Required ∪ Trigger ∪ the
/// group's conditional names.
///
/// The trigger's line shows the group's concrete value instead of a
/// placeholder, and every name in `group.variables` carries a trailing
/// comment naming the trigger assignment that makes it required. Names the
/// group lists that are unknown locally still render as placeholder lines;
/// the grouping comes from an imprecise external pass and is trusted loosely.
pub fn render_conditional_usage(
    group: &UsageGroup,
    required: &[Declaration],
    trigger: &[Declaration],
    meta: &ModuleMeta,
) -> String {
    let mut lines = BTreeMap::new();
    for decl in required.iter().chain(trigger) {
        lines.insert(
            decl.name.clone(),
            Line {
                value: placeholder_value(&decl.name),
                note: None,
            },
        );
    }

    for name in &group.variables {
        let line = lines.entry(name.clone()).or_insert_with(|| Line {
            value: placeholder_value(name),
            note: None,
        });
        line.note = Some(format!(
            "required when {} = \"{}\"",
            group.trigger, group.value
        ));
    }

    let trigger_line = lines.entry(group.trigger.clone()).or_insert_with(|| Line {
        value: String::new(),
        note: None,
    });
    trigger_line.value = group.value.clone();

    render_block(&lines, meta)
}

/// Render the basic block plus one block per group, in group order.
pub fn render_usage(ctx: &ModuleContext, groups: &[UsageGroup]) -> Vec<RenderedUsage> {
    let classified = &ctx.classified;
    let mut rendered = vec![RenderedUsage {
        label: "Basic usage".to_string(),
        text: render_basic_usage(&classified.required, &classified.trigger, &ctx.meta),
    }];
    for group in groups {
        rendered.push(RenderedUsage {
            label: group.label.clone(),
            text: render_conditional_usage(group, &classified.required, &classified.trigger, &ctx.meta),
        });
    }
    rendered
}

/// Render one `module "..." { ... }` shell around the assignment lines.
///
/// Assignment names are padded to the longest name in this block. Meta lines
/// are emitted only for non-empty meta fields, aligned among themselves.
fn render_block(lines: &BTreeMap<String, Line>, meta: &ModuleMeta) -> String {
    if lines.is_empty() {
        return String::new();
    }

    let label = if meta.display_name.is_empty() {
        "example"
    } else {
        meta.display_name.as_str()
    };

    let mut out = String::new();
    out.push_str(&format!("module \"{}\" {{\n", label));

    let mut meta_lines: Vec<(&str, &str)> = Vec::new();
    if !meta.source.is_empty() {
        meta_lines.push(("source", meta.source.as_str()));
    }
    if !meta.version.is_empty() {
        meta_lines.push(("version", meta.version.as_str()));
    }
    if !meta_lines.is_empty() {
        let meta_width = meta_lines.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
        for (key, value) in &meta_lines {
            out.push_str(&format!("  {:<width$} = \"{}\"\n", key, value, width = meta_width));
        }
        out.push('\n');
    }

    let width = lines.keys().map(String::len).max().unwrap_or(0);
    for (name, line) in lines {
        out.push_str(&format!("  {:<width$} = \"{}\"", name, line.value, width = width));
        if let Some(note) = &line.note {
            out.push_str(&format!(" # {}", note));
        }
        out.push('\n');
    }

    out.push_str("}\n");
    out
}
