#![no_main]

use libfuzzer_sys::fuzz_target;
use treeselect::{
    ControlConfig, Diagnostics, Flag, Item, Mark, NodeKey, SelectControl, SelectionRequest,
};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(request) = SelectionRequest::from_json(text) else {
        return;
    };

    let config = ControlConfig::new("fuzz")
        .with_data(vec![
            Item::new(1, "One").with_children([Item::new(11, "A"), Item::new(12, "B")]),
            Item::new(2, "Two").with_children([Item::new(11, "A")]),
            Item::new(3, "Three"),
        ])
        .with_flag(Flag::MultiSelect, true)
        .with_flag(Flag::TreeView, true);
    let Some(mut control) = SelectControl::new(&config, &mut Diagnostics::new()) else {
        return;
    };
    control.set_selection(&request);

    // Parents with children must agree with them after injection; parents
    // requested on their own are checked regardless
    let tree = control.tree();
    for (p, parent) in tree.parents().iter().enumerate() {
        if request.parents_only.contains(&parent.id) {
            assert_eq!(tree.mark(NodeKey::Parent(p)), Mark::Checked);
            continue;
        }
        if parent.children.is_empty() {
            continue;
        }
        let checked = parent.children.iter().filter(|c| c.mark().is_checked()).count();
        let expected = match checked {
            0 => Mark::Unchecked,
            n if n == parent.children.len() => Mark::Checked,
            _ => Mark::Indeterminate,
        };
        assert_eq!(tree.mark(NodeKey::Parent(p)), expected);
    }
});
