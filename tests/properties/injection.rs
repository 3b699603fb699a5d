//! Property tests for selection extraction and injection.

use proptest::prelude::*;

use treeselect::{
    ControlConfig, Diagnostics, Flag, Identifier, Item, SelectControl, SelectionMode,
    SelectionRequest,
};

fn items() -> impl Strategy<Value = Vec<Item>> {
    proptest::collection::vec(0usize..4, 1..6).prop_map(|child_counts| {
        child_counts
            .iter()
            .enumerate()
            .map(|(p, &n)| {
                let pid = (p + 1) as u64;
                Item::new(pid, format!("P{pid}")).with_children((0..n).map(|c| {
                    let cid = pid * 100 + c as u64;
                    Item::new(cid, format!("C{cid}"))
                }))
            })
            .collect()
    })
}

fn mode() -> impl Strategy<Value = SelectionMode> {
    prop_oneof![
        Just(SelectionMode::SingleFlat),
        Just(SelectionMode::SingleTree),
        Just(SelectionMode::MultiFlat),
        Just(SelectionMode::MultiTree),
    ]
}

fn control(data: Vec<Item>, mode: SelectionMode) -> SelectControl {
    let config = ControlConfig::new("rt")
        .with_data(data)
        .with_flag(Flag::MultiSelect, mode.is_multi())
        .with_flag(Flag::TreeView, mode.is_tree());
    SelectControl::new(&config, &mut Diagnostics::new()).unwrap()
}

/// Ids that may or may not exist in the generated trees
fn id() -> impl Strategy<Value = Identifier> {
    prop_oneof![
        (1u64..7).prop_map(Identifier::from),
        (100u64..704).prop_map(Identifier::from),
        "[a-z]{1,3}".prop_map(Identifier::from),
    ]
}

fn request() -> impl Strategy<Value = SelectionRequest> {
    (
        proptest::collection::vec(id(), 0..4),
        proptest::collection::vec(id(), 0..6),
    )
        .prop_map(|(parents, children)| {
            SelectionRequest::new()
                .with_parents(parents)
                .with_children(children)
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: extraction -> injection -> extraction is stable.
    #[test]
    fn property_selection_round_trips(
        data in items(),
        mode in mode(),
        hidden in proptest::collection::vec(any::<usize>(), 0..6),
        toggles in proptest::collection::vec(any::<usize>(), 0..16),
        invert in any::<bool>()
    ) {
        let mut source = control(data.clone(), mode);
        // Host-driven filter: hide some nodes, then toggle under it
        if !hidden.is_empty() {
            let keys = source.tree().keys();
            for i in &hidden {
                let id = source
                    .tree()
                    .node(keys[i % keys.len()])
                    .map(|node| node.composite_id.clone());
                if let Some(id) = id {
                    source.set_visible(&id, false);
                }
            }
            source.recalculate(Some("host"));
        }
        for i in toggles {
            let keys = source.tree().keys();
            source.toggle_node(keys[i % keys.len()]);
        }
        if invert {
            source.invert(false);
        }
        let selection = source.selection();

        let mut target = control(data, mode);
        target.set_selection(&selection.to_request());

        prop_assert_eq!(target.selection(), selection);
        prop_assert!(target.diagnostics().is_empty());
    }

    /// PROPERTY: injecting the same request twice yields the same state.
    #[test]
    fn property_injection_is_idempotent(
        data in items(),
        mode in mode(),
        request in request()
    ) {
        let mut control = control(data, mode);

        control.set_selection(&request);
        let first = control.selection();
        let second = control.set_selection(&request);

        prop_assert!(second.is_empty());
        prop_assert_eq!(control.selection(), first);
    }

    /// PROPERTY: extraction never mutates state.
    #[test]
    fn property_extraction_is_read_only(
        data in items(),
        mode in mode(),
        request in request()
    ) {
        let mut control = control(data, mode);
        control.set_selection(&request);

        let before = control.tree().snapshot();
        let a = control.selection();
        let b = control.selection();

        prop_assert_eq!(a, b);
        prop_assert_eq!(control.tree().snapshot(), before);
    }
}
