//! Test fixtures - reusable data for scenario tests.

use treeselect::{ControlConfig, Diagnostics, Flag, Item, SelectControl};

/// A multi-select tree control over grocery categories
pub const GROCERIES_TOML: &str = r#"
container_id = "groceries"
placeholder = "Pick groceries"

[flags]
search = { enabled = true }
multi_select = { enabled = true }
tree_view = { enabled = true }
select_all_btn = { enabled = true }
clear_all_btn = { enabled = true }

[[data]]
id = 1
name = "Fruit"
children = [{ id = 101, name = "Apple" }, { id = 102, name = "Pear" }]

[[data]]
id = 2
name = "Dairy"
children = [{ id = 201, name = "Milk" }, { id = 202, name = "Cheese" }]

[[data]]
id = 3
name = "Bread"
"#;

/// The same groceries as a single-select flat list, in JSON
pub const GROCERIES_SINGLE_JSON: &str = r#"{
  "containerId": "groceries",
  "data": [
    { "id": 1, "name": "Fruit" },
    { "id": 2, "name": "Dairy" },
    { "id": 3, "name": "Bread" }
  ],
  "flags": { "multiSelect": { "enabled": false } }
}"#;

pub fn groceries() -> Vec<Item> {
    vec![
        Item::new(1, "Fruit").with_children([Item::new(101, "Apple"), Item::new(102, "Pear")]),
        Item::new(2, "Dairy").with_children([Item::new(201, "Milk"), Item::new(202, "Cheese")]),
        Item::new(3, "Bread"),
    ]
}

/// Build a control over `data` with the given flags enabled
pub fn control_with(container: &str, data: Vec<Item>, flags: &[Flag]) -> SelectControl {
    let mut config = ControlConfig::new(container).with_data(data);
    for flag in flags {
        config = config.with_flag(*flag, true);
    }
    SelectControl::new(&config, &mut Diagnostics::new()).expect("container id is set")
}

/// Multi-select tree control with search and both bulk buttons
pub fn full_control(data: Vec<Item>) -> SelectControl {
    control_with(
        "c",
        data,
        &[
            Flag::Search,
            Flag::MultiSelect,
            Flag::TreeView,
            Flag::SelectAllBtn,
            Flag::ClearAllBtn,
        ],
    )
}
