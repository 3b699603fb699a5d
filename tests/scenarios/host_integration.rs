//! Scenario: A host application embedding several controls
//!
//! Journey: The host initializes controls from config files, restores a
//! saved selection, lets the user edit it, and saves it again.

use treeselect::config::ControlConfig;
use treeselect::{ControlRegistry, Diagnostic, Mark, SelectionRequest};

use crate::common::*;

/// SCENARIO: save and restore a selection across a re-initialization
#[test]
fn scenario_restore_saved_selection() {
    let env = TestEnv::new();
    let path = env.write("groceries.toml", GROCERIES_TOML);
    let config = ControlConfig::load(&path).unwrap();

    let mut registry = ControlRegistry::new();
    registry.initialize(&config).unwrap();

    // Restore: Apple plus the whole Dairy category plus Bread
    let saved = SelectionRequest::new()
        .with_parents([2, 3])
        .with_children([101]);
    assert!(registry.set_selection("groceries", &saved));

    let control = registry.control("groceries").unwrap();
    assert_eq!(control.tree().parents()[0].mark(), Mark::Indeterminate);
    assert_eq!(control.tree().parents()[1].mark(), Mark::Checked);
    assert_eq!(
        control.summary(None),
        "Fruit (Apple), Dairy (Milk, Cheese), Bread"
    );

    // Save the selection, tear down, rebuild, restore
    let payload = serde_json::to_string(&registry.get_selection("groceries").unwrap().to_request())
        .unwrap();
    let before = registry.get_selection("groceries").unwrap();
    registry.teardown("groceries");
    registry.initialize(&config).unwrap();

    let restored = SelectionRequest::from_json(&payload).unwrap();
    registry.set_selection("groceries", &restored);
    assert_eq!(registry.get_selection("groceries").unwrap(), before);
    assert!(registry.diagnostics().is_empty());
}

/// SCENARIO: two containers are independent
#[test]
fn scenario_containers_do_not_share_state() {
    let env = TestEnv::new();
    let tree = ControlConfig::load(&env.write("tree.toml", GROCERIES_TOML)).unwrap();
    let single = ControlConfig::load(&env.write("single.json", GROCERIES_SINGLE_JSON)).unwrap();
    let single = ControlConfig {
        container_id: "pantry".to_string(),
        ..single
    };

    let mut registry = ControlRegistry::new();
    registry.initialize(&tree).unwrap();
    registry.initialize(&single).unwrap();

    registry.toggle_all("groceries", true, false);
    registry.set_selection("pantry", &SelectionRequest::new().with_parents([3]));

    assert_eq!(registry.get_selection("groceries").unwrap().len(), 3);
    let pantry = registry.get_selection("pantry").unwrap();
    assert_eq!(pantry.len(), 1);
    assert_eq!(pantry.items[0].name, "Bread");
}

/// SCENARIO: calls against unknown containers degrade to no-ops
#[test]
fn scenario_unknown_container_is_a_no_op() {
    let mut registry = ControlRegistry::new();

    assert!(!registry.set_selection("nowhere", &SelectionRequest::new().with_parents([1])));
    assert!(!registry.search("nowhere", "x"));
    assert!(registry.get_selection("nowhere").is_none());

    let diagnostics = registry.drain_diagnostics();
    assert_eq!(diagnostics.len(), 3);
    assert!(diagnostics
        .iter()
        .all(|d| matches!(d, Diagnostic::UnknownContainer { .. })));
}
