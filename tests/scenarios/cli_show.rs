//! Scenario: Scripting the CLI
//!
//! Journey: A script feeds a config file and ids to `treeselect show` and
//! consumes the NDJSON output.

use crate::common::*;

/// SCENARIO: inject ids and read the selection back as JSON
#[test]
fn scenario_show_json_reports_selection() {
    let env = TestEnv::new();
    let config = env.write("groceries.toml", GROCERIES_TOML);
    let config = config.to_str().unwrap();

    let result = env.run(&["show", config, "--child", "101,201", "--json"]);

    assert!(result.success, "{}", result.combined_output());
    let events = result.json_events();
    assert_eq!(events.first().unwrap()["event"], "start");
    assert_eq!(events.last().unwrap()["event"], "complete");
    assert_eq!(events.last().unwrap()["success"], true);

    let data = result.event("data").unwrap();
    assert_eq!(data["container_id"], "groceries");
    assert_eq!(data["mode"], "multi-tree");
    assert_eq!(data["summary"], "Fruit (Apple), Dairy (Milk)");
    assert_eq!(data["request"]["children"], serde_json::json!([101, 201]));
}

/// SCENARIO: unknown ids and config keys are reported, not fatal
#[test]
fn scenario_show_reports_problems_and_continues() {
    let env = TestEnv::new();
    let content = GROCERIES_TOML.replace("placeholder =", "placeholer =");
    let config = env.write("groceries.toml", &content);

    let result = env.run(&["show", config.to_str().unwrap(), "--parent", "3,99"]);

    assert!(result.success, "{}", result.combined_output());
    assert_eq!(result.stdout.trim(), "Bread");
    assert!(result.stderr.contains("Unknown config key 'placeholer'"));
    assert!(result.stderr.contains("Did you mean 'placeholder'?"));
    assert!(result.stderr.contains("no parent with id '99'"));
}

/// SCENARIO: search then select-all from the command line
#[test]
fn scenario_show_search_and_select_all() {
    let env = TestEnv::new();
    let config = env.write("groceries.toml", GROCERIES_TOML);

    let result = env.run(&[
        "show",
        config.to_str().unwrap(),
        "--search",
        "milk",
        "--select-all",
        "-v",
    ]);

    assert!(result.success, "{}", result.combined_output());
    let mut lines = result.stdout.lines();
    assert_eq!(lines.next(), Some("Dairy (Milk)"));
    assert_eq!(lines.next(), Some("  - Dairy (2)"));
    assert_eq!(lines.next(), Some("      - Milk (201)"));
}

/// SCENARIO: a config without a container id is an error
#[test]
fn scenario_show_rejects_missing_container() {
    let env = TestEnv::new();
    let config = env.write("empty.json", r#"{ "data": [] }"#);

    let result = env.run(&["show", config.to_str().unwrap(), "--json"]);

    assert!(!result.success);
    let error = result.event("error").unwrap();
    assert!(error["message"].as_str().unwrap().contains("container_id"));
    assert_eq!(result.event("complete").unwrap()["success"], false);
}

/// SCENARIO: unsupported extensions are rejected up front
#[test]
fn scenario_show_rejects_unknown_format() {
    let env = TestEnv::new();
    let config = env.write("groceries.yaml", "container_id: x");

    let result = env.run(&["show", config.to_str().unwrap()]);

    assert!(!result.success);
    assert!(result.stderr.contains("unsupported config format"));
}
