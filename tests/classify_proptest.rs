//! Property tests: the classification partition and render determinism.

use proptest::prelude::*;

use tfusage::classify::{category_of, classify, Category};
use tfusage::model::{Declaration, ModuleMeta};
use tfusage::render::render_basic_usage;
use tfusage::testing::decl;

/// A vector of declarations with unique generated names and arbitrary
/// classification axes.
fn arb_declarations() -> impl Strategy<Value = Vec<Declaration>> {
    prop::collection::vec((any::<bool>(), any::<bool>()), 0..24).prop_map(|axes| {
        axes.into_iter()
            .enumerate()
            .map(|(i, (has_default, has_validation))| {
                decl(&format!("var_{:02}", i), has_default, has_validation)
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn partition_is_exhaustive_and_disjoint(decls in arb_declarations()) {
        let classified = classify(&decls);
        prop_assert_eq!(classified.len(), decls.len());

        for decl in &decls {
            let bucket = match category_of(decl) {
                Category::Required => &classified.required,
                Category::Trigger => &classified.trigger,
                Category::Conditional => &classified.conditional,
                Category::Optional => &classified.optional,
            };
            prop_assert!(bucket.iter().any(|d| d.name == decl.name));
        }
    }

    #[test]
    fn basic_render_is_input_order_independent(decls in arb_declarations()) {
        let classified = classify(&decls);
        let meta = ModuleMeta::new("m", "acme/m", "0.1.0");

        let forward = render_basic_usage(&classified.required, &classified.trigger, &meta);

        let mut required_rev = classified.required.clone();
        required_rev.reverse();
        let mut trigger_rev = classified.trigger.clone();
        trigger_rev.reverse();
        let reversed = render_basic_usage(&required_rev, &trigger_rev, &meta);

        prop_assert_eq!(forward, reversed);
    }

    #[test]
    fn basic_render_lines_are_name_sorted(decls in arb_declarations()) {
        let classified = classify(&decls);
        let meta = ModuleMeta::default();
        let text = render_basic_usage(&classified.required, &classified.trigger, &meta);

        let names: Vec<String> = text
            .lines()
            .filter(|line| line.starts_with("  var_"))
            .map(|line| line.split_whitespace().next().unwrap().to_string())
            .collect();
        let mut sorted = names.clone();
        sorted.sort();
        prop_assert_eq!(names, sorted);
    }
}
