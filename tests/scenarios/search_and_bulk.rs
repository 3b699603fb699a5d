//! Scenario: Searching and bulk actions
//!
//! Journey: A user narrows a long list with the search box, selects what is
//! visible, and clears the search again. Hidden selections must survive.

use treeselect::{ControlEvent, Item, Mark, NodeKey, SelectControl};

use crate::common::*;

fn mark(control: &SelectControl, key: NodeKey) -> Mark {
    control.tree().mark(key)
}

fn toggle_child(control: &mut SelectControl, p: usize, c: usize) {
    let id = control.tree().children_of(p)[c].composite_id.clone();
    control.apply_event(ControlEvent::ChildToggled(id));
}

/// SCENARIO: select-all while a search hides the first parent
#[test]
fn scenario_bulk_select_respects_search() {
    let mut control = full_control(groceries());

    control.apply_event(ControlEvent::SearchChanged("dairy".to_string()));
    assert!(!control.tree().is_visible(NodeKey::Parent(0)));
    assert!(control.tree().is_visible(NodeKey::Parent(1)));

    control.apply_event(ControlEvent::BulkRequested {
        select: true,
        respect_search: true,
    });

    assert_eq!(mark(&control, NodeKey::Parent(0)), Mark::Unchecked);
    assert_eq!(mark(&control, NodeKey::Child(0, 0)), Mark::Unchecked);
    assert_eq!(mark(&control, NodeKey::Parent(1)), Mark::Checked);
    assert_eq!(mark(&control, NodeKey::Child(1, 0)), Mark::Checked);
    assert_eq!(mark(&control, NodeKey::Child(1, 1)), Mark::Checked);
    assert_eq!(mark(&control, NodeKey::Parent(2)), Mark::Unchecked);

    // Clearing the search keeps the result
    control.apply_event(ControlEvent::SearchChanged(String::new()));
    assert_eq!(mark(&control, NodeKey::Parent(0)), Mark::Unchecked);
    assert_eq!(mark(&control, NodeKey::Parent(1)), Mark::Checked);
    assert_eq!(control.summary(None), "Dairy (Milk, Cheese)");
}

/// SCENARIO: bulk that ignores the search touches everything
#[test]
fn scenario_bulk_select_ignoring_search() {
    let mut control = full_control(groceries());
    control.search("dairy");

    control.toggle_all(true, false);

    assert!(control
        .tree()
        .keys()
        .into_iter()
        .all(|k| control.tree().mark(k) == Mark::Checked));
}

/// SCENARIO: a checked child hidden by the search keeps its parent selected
#[test]
fn scenario_hidden_checked_child_preserves_parent() {
    let mut control = full_control(groceries());
    toggle_child(&mut control, 0, 0); // Apple
    assert_eq!(mark(&control, NodeKey::Parent(0)), Mark::Indeterminate);

    // Only Pear is visible under Fruit now
    control.apply_event(ControlEvent::SearchChanged("pear".to_string()));
    assert!(!control.tree().is_visible(NodeKey::Child(0, 0)));
    assert_eq!(mark(&control, NodeKey::Parent(0)), Mark::Indeterminate);

    toggle_child(&mut control, 0, 1); // check Pear
    assert_eq!(mark(&control, NodeKey::Parent(0)), Mark::Checked);

    toggle_child(&mut control, 0, 1); // uncheck Pear
    assert_ne!(mark(&control, NodeKey::Parent(0)), Mark::Unchecked);
    assert_eq!(mark(&control, NodeKey::Child(0, 0)), Mark::Checked);

    // Full visibility brings back the globally derived mark
    control.apply_event(ControlEvent::SearchChanged(String::new()));
    assert_eq!(mark(&control, NodeKey::Parent(0)), Mark::Indeterminate);
}

/// SCENARIO: clear-all under a search spares hidden children and their parent
#[test]
fn scenario_clear_all_keeps_hidden_selection() {
    let mut control = full_control(groceries());
    toggle_child(&mut control, 0, 0); // Apple
    toggle_child(&mut control, 0, 1); // Pear
    assert_eq!(mark(&control, NodeKey::Parent(0)), Mark::Checked);

    control.apply_event(ControlEvent::SearchChanged("pear".to_string()));
    control.apply_event(ControlEvent::BulkRequested {
        select: false,
        respect_search: true,
    });

    assert_eq!(mark(&control, NodeKey::Child(0, 1)), Mark::Unchecked);
    assert_eq!(mark(&control, NodeKey::Child(0, 0)), Mark::Checked);
    assert_ne!(mark(&control, NodeKey::Parent(0)), Mark::Unchecked);
    assert_eq!(control.summary(None), "Fruit (Apple)");

    control.apply_event(ControlEvent::SearchChanged(String::new()));
    assert_eq!(mark(&control, NodeKey::Parent(0)), Mark::Indeterminate);
}

/// SCENARIO: a parent picked while its children are hidden is restored alone
#[test]
fn scenario_parent_only_selection_round_trips() {
    let mut control = full_control(groceries());
    for c in 0..2 {
        let id = control.tree().children_of(0)[c].composite_id.clone();
        control.set_visible(&id, false);
    }
    control.recalculate(Some("host filter"));
    let fruit = control.tree().parents()[0].composite_id.clone();
    control.apply_event(ControlEvent::ParentToggled(fruit));

    let selection = control.selection();
    assert_eq!(selection.items[0].children, Some(Vec::new()));

    let mut restored = full_control(groceries());
    restored.set_selection(&selection.to_request());

    assert_eq!(restored.selection(), selection);
    assert_eq!(mark(&restored, NodeKey::Child(0, 0)), Mark::Unchecked);
    assert_eq!(mark(&restored, NodeKey::Child(0, 1)), Mark::Unchecked);
}

/// SCENARIO: clear-all also clears indeterminate parents
#[test]
fn scenario_clear_all_resets_partial_parents() {
    let mut control = full_control(groceries());
    toggle_child(&mut control, 1, 0);
    assert_eq!(mark(&control, NodeKey::Parent(1)), Mark::Indeterminate);

    let delta = control.apply_event(ControlEvent::BulkRequested {
        select: false,
        respect_search: true,
    });

    assert!(delta.summary_dirty());
    assert!(control
        .tree()
        .keys()
        .into_iter()
        .all(|k| control.tree().mark(k) == Mark::Unchecked));
    assert_eq!(control.summary(None), "Select...");
}

/// SCENARIO: bulk buttons that are not configured do nothing
#[test]
fn scenario_bulk_without_buttons_is_reported() {
    let mut control = control_with(
        "c",
        vec![Item::new(1, "One"), Item::new(2, "Two")],
        &[treeselect::Flag::MultiSelect],
    );

    let delta = control.apply_event(ControlEvent::BulkRequested {
        select: true,
        respect_search: false,
    });

    assert!(delta.is_empty());
    assert!(control.selection().is_empty());
    assert_eq!(control.diagnostics().len(), 1);
}
