//! Property tests for tri-state propagation.

use proptest::prelude::*;

use treeselect::engine::{on_parent_toggle, SelectionTree};
use treeselect::{
    ControlConfig, Diagnostics, Flag, Item, Mark, NodeKey, Scope, SelectControl, SelectionMode,
};

fn items() -> impl Strategy<Value = Vec<Item>> {
    proptest::collection::vec(0usize..5, 1..6).prop_map(|child_counts| {
        child_counts
            .iter()
            .enumerate()
            .map(|(p, &n)| {
                let pid = (p + 1) as u64;
                Item::new(pid, format!("Parent {pid}")).with_children((0..n).map(|c| {
                    let cid = pid * 100 + c as u64;
                    Item::new(cid, format!("Child {cid}"))
                }))
            })
            .collect()
    })
}

#[derive(Debug, Clone)]
enum Op {
    Toggle(usize),
    SelectAll,
    ClearAll,
    Invert,
    Search(String),
    ClearSearch,
}

fn unscoped_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => any::<usize>().prop_map(Op::Toggle),
        1 => Just(Op::SelectAll),
        1 => Just(Op::ClearAll),
        1 => Just(Op::Invert),
    ]
}

fn any_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => unscoped_op(),
        1 => prop_oneof![Just("child".to_string()), "[0-9]{1,3}"].prop_map(Op::Search),
        1 => Just(Op::ClearSearch),
    ]
}

fn control(data: Vec<Item>, mode: SelectionMode) -> SelectControl {
    let config = ControlConfig::new("p")
        .with_data(data)
        .with_flag(Flag::Search, true)
        .with_flag(Flag::MultiSelect, mode.is_multi())
        .with_flag(Flag::TreeView, mode.is_tree());
    SelectControl::new(&config, &mut Diagnostics::new()).unwrap()
}

fn apply(control: &mut SelectControl, op: &Op) {
    match op {
        Op::Toggle(i) => {
            let keys = control.tree().keys();
            if !keys.is_empty() {
                control.toggle_node(keys[i % keys.len()]);
            }
        }
        Op::SelectAll => {
            control.toggle_all(true, true);
        }
        Op::ClearAll => {
            control.toggle_all(false, true);
        }
        Op::Invert => {
            control.invert(true);
        }
        Op::Search(query) => {
            control.search(query);
        }
        Op::ClearSearch => {
            control.search("");
        }
    }
}

fn check_tri_state(tree: &SelectionTree) -> Result<(), TestCaseError> {
    for parent in tree.parents() {
        if parent.children.is_empty() {
            continue;
        }
        let checked = parent.children.iter().filter(|c| c.mark().is_checked()).count();
        let expected = match checked {
            0 => Mark::Unchecked,
            n if n == parent.children.len() => Mark::Checked,
            _ => Mark::Indeterminate,
        };
        prop_assert_eq!(parent.mark(), expected, "parent {}", parent.label);
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: without a search, every parent mirrors its children.
    #[test]
    fn property_parents_follow_children(
        data in items(),
        ops in proptest::collection::vec(unscoped_op(), 0..24)
    ) {
        let mut control = control(data, SelectionMode::MultiTree);
        for op in &ops {
            apply(&mut control, op);
        }
        check_tri_state(control.tree())?;
    }

    /// PROPERTY: while searching, a parent is never unchecked with a checked child.
    #[test]
    fn property_parent_never_unchecked_with_checked_child(
        data in items(),
        ops in proptest::collection::vec(any_op(), 0..24)
    ) {
        let mut control = control(data, SelectionMode::MultiTree);
        for op in &ops {
            apply(&mut control, op);
            for parent in control.tree().parents() {
                if parent.children.iter().any(|c| c.mark().is_checked()) {
                    prop_assert_ne!(parent.mark(), Mark::Unchecked, "parent {}", parent.label);
                }
            }
        }
    }

    /// PROPERTY: clearing the search restores globally derived parent marks.
    #[test]
    fn property_clearing_search_restores_tri_state(
        data in items(),
        ops in proptest::collection::vec(any_op(), 0..24)
    ) {
        let mut control = control(data, SelectionMode::MultiTree);
        for op in &ops {
            apply(&mut control, op);
        }
        control.search("");
        check_tri_state(control.tree())?;
    }

    /// PROPERTY: single modes never hold more than one checked node.
    #[test]
    fn property_single_modes_select_at_most_one(
        data in items(),
        tree_view in any::<bool>(),
        ops in proptest::collection::vec(any_op(), 0..24)
    ) {
        let mode = SelectionMode::from_flags(false, tree_view);
        let mut control = control(data, mode);
        for op in &ops {
            apply(&mut control, op);
        }
        let tree = control.tree();
        let checked = tree.keys().into_iter().filter(|&k| tree.mark(k).is_checked()).count();
        prop_assert!(checked <= 1, "{} nodes checked", checked);
        prop_assert!(control.selection().len() <= 1);
    }

    /// PROPERTY: a parent toggle applied twice changes nothing the second time.
    #[test]
    fn property_parent_toggle_is_idempotent(
        data in items(),
        pick in any::<usize>(),
        target in any::<bool>(),
        ops in proptest::collection::vec(unscoped_op(), 0..12)
    ) {
        let mut control = control(data, SelectionMode::MultiTree);
        for op in &ops {
            apply(&mut control, op);
        }

        let mut tree = control.tree().clone();
        let p = pick % tree.parents().len();
        on_parent_toggle(&mut tree, p, target, Scope::All);
        let once = tree.snapshot();

        let second = on_parent_toggle(&mut tree, p, target, Scope::All);
        prop_assert!(second.is_empty());
        prop_assert_eq!(tree.snapshot(), once);
        prop_assert_eq!(tree.mark(NodeKey::Parent(p)), Mark::from_checked(target));
    }
}
