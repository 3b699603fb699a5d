//! Scenario: Duplicate ids in caller data
//!
//! Journey: A host passes data where two parents share an id. The control
//! reports it once per repeat but keeps rendering and selecting both nodes.

use treeselect::engine::{generate_id, RenderPass};
use treeselect::{ControlEvent, Diagnostic, Diagnostics, Flag, Identifier, Item, NodeKey};

use crate::common::*;

/// SCENARIO: the second id in a render pass fails validation
#[test]
fn scenario_second_generated_id_is_a_duplicate() {
    let mut pass = RenderPass::new();
    let mut sink = Diagnostics::new();
    let id = Identifier::from(1);

    let first = generate_id("dup", &id, None);
    let second = generate_id("dup", &id, None);

    assert!(pass.validate_id(&first, &mut sink));
    assert!(!pass.validate_id(&second, &mut sink));
    assert_eq!(
        sink.entries(),
        &[Diagnostic::DuplicateId {
            id: "dup-1".into()
        }]
    );

    // A new pass starts clean
    let mut next = RenderPass::new();
    assert!(next.validate_id(&first, &mut sink));
}

/// SCENARIO: both duplicate parents render and select independently
#[test]
fn scenario_duplicate_parents_still_render() {
    let mut control = control_with(
        "dup",
        vec![Item::new(1, "First"), Item::new(1, "Second")],
        &[Flag::MultiSelect],
    );

    assert_eq!(control.tree().parents().len(), 2);
    assert_eq!(control.tree().duplicate_count(), 1);
    assert!(format!("{control:?}").contains("duplicates: 1"));
    assert!(matches!(
        control.drain_diagnostics().as_slice(),
        [Diagnostic::DuplicateId { .. }]
    ));

    control.toggle_node(NodeKey::Parent(1));
    let selection = control.selection();
    assert_eq!(selection.len(), 1);
    assert_eq!(selection.items[0].name, "Second");

    // The shared composite id resolves to the first node
    let shared = control.tree().parents()[0].composite_id.clone();
    control.apply_event(ControlEvent::ParentToggled(shared));
    assert_eq!(control.selection().len(), 2);
}

/// SCENARIO: injection by a duplicated id selects every match
#[test]
fn scenario_injection_selects_all_duplicates() {
    let mut control = control_with(
        "dup",
        vec![Item::new(1, "First"), Item::new(1, "Second"), Item::new(2, "Other")],
        &[Flag::MultiSelect],
    );

    control.set_selection(&treeselect::SelectionRequest::new().with_parents([1]));

    let selection = control.selection();
    let names: Vec<&str> = selection.items.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["First", "Second"]);
}
