//! Integration tests for block discovery and field extraction over whole
//! declaration files.

use tfusage::model::DEFAULT_TYPE;
use tfusage::scan::{extract_block, find_blocks, parse_fields};
use tfusage::testing::Samples;

#[test]
fn test_storage_module_discovers_all_blocks_in_order() {
    let found = find_blocks(Samples::storage_module(), "variable");
    let names: Vec<&str> = found.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["bucket_name", "storage_class", "glacier_days", "force_destroy"]
    );
}

#[test]
fn test_blocks_are_exact_balanced_substrings() {
    let text = Samples::storage_module();
    for found in find_blocks(text, "variable") {
        assert!(found.block.starts_with('{'));
        assert!(found.block.ends_with('}'));
        assert_eq!(&text[found.start..found.start + found.block.len()], found.block);
    }
}

#[test]
fn test_nested_validation_braces_do_not_end_block_early() {
    let found = find_blocks(Samples::storage_module(), "variable");
    let storage_class = &found[1];
    // The validation sub-block's own braces are nested inside the returned
    // block, error_message and all.
    assert!(storage_class.block.contains("validation {"));
    assert!(storage_class.block.contains("error_message"));
    assert!(storage_class.block.trim_end().ends_with('}'));
}

#[test]
fn test_round_trip_required_block() {
    let text = "variable \"bucket_name\" {\n  type = string\n}";
    let found = find_blocks(text, "variable");
    assert_eq!(found.len(), 1);
    let fields = parse_fields(&found[0].block);
    assert_eq!(fields.var_type, "string");
    assert!(!fields.has_default);
    assert!(fields.validation.is_none());
}

#[test]
fn test_round_trip_trigger_block() {
    let text = "variable \"storage_class\" {\n  validation {\n    condition = contains([\"standard\",\"glacier\"], var.storage_class)\n    error_message = \"bad\"\n  }\n}";
    let found = find_blocks(text, "variable");
    assert_eq!(found.len(), 1);
    let fields = parse_fields(&found[0].block);
    assert!(!fields.has_default);
    let validation = fields.validation.expect("validation sub-block");
    assert!(validation.condition.contains("contains("));
    assert!(validation.condition.contains("var.storage_class"));
}

#[test]
fn test_truncated_module_degrades_to_empty_fields() {
    let found = find_blocks(Samples::truncated_module(), "variable");
    assert_eq!(found.len(), 1);
    assert!(!found[0].block.ends_with('}'));
    let fields = parse_fields(&found[0].block);
    assert_eq!(fields.description, "");
    assert_eq!(fields.var_type, DEFAULT_TYPE);
    assert!(!fields.has_default);
    assert!(fields.validation.is_none());
}

#[test]
fn test_extract_block_from_arbitrary_offset() {
    let text = "prefix { a { b } c } suffix";
    let start = text.find('{').unwrap();
    assert_eq!(extract_block(text, start), "{ a { b } c }");
}

#[test]
fn test_empty_input_yields_no_blocks() {
    assert!(find_blocks("", "variable").is_empty());
    assert!(find_blocks("# just a comment\n", "variable").is_empty());
}
