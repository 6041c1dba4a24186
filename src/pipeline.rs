//! Module analysis pipeline: scan → parse → classify.
//!
//! Thin glue over the stage modules. The stages themselves are total; the
//! only rejection added here is the duplicate-name policy, applied when the
//! declarations are assembled into one [`ModuleContext`].

use thiserror::Error;

use crate::classify::{classify, Classified};
use crate::model::{Declaration, ModuleMeta};
use crate::scan::{find_blocks, parse_fields};

/// Keyword scanned for input declarations.
pub const VARIABLE_KEYWORD: &str = "variable";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalyzeError {
    /// The same name was declared twice in one module's text.
    #[error("duplicate declaration name: {0}")]
    DuplicateDeclaration(String),
}

/// Everything the renderer and the summary boundary need for one module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleContext {
    pub meta: ModuleMeta,
    /// All declarations in discovery order.
    pub declarations: Vec<Declaration>,
    /// The same declarations partitioned four ways.
    pub classified: Classified,
}

/// Scan `text` for declarations under `keyword` and parse each block.
///
/// Total over any input: malformed blocks degrade to emptier declarations,
/// and zero matches yields an empty list.
pub fn scan_declarations(text: &str, keyword: &str) -> Vec<Declaration> {
    find_blocks(text, keyword)
        .into_iter()
        .map(|found| {
            let fields = parse_fields(&found.block);
            Declaration {
                name: found.name,
                raw_block: found.block,
                description: fields.description,
                var_type: fields.var_type,
                has_default: fields.has_default,
                default_value: fields.default_value,
                validation: fields.validation,
            }
        })
        .collect()
}

/// Analyze one module's full text into a [`ModuleContext`].
///
/// Duplicate declaration names are rejected rather than merged; the error
/// names the first offender.
pub fn analyze_module(text: &str, meta: ModuleMeta) -> Result<ModuleContext, AnalyzeError> {
    let declarations = scan_declarations(text, VARIABLE_KEYWORD);

    let mut seen = std::collections::HashSet::new();
    for decl in &declarations {
        if !seen.insert(decl.name.as_str()) {
            return Err(AnalyzeError::DuplicateDeclaration(decl.name.clone()));
        }
    }

    let classified = classify(&declarations);
    Ok(ModuleContext {
        meta,
        declarations,
        classified,
    })
}
