use healthlens_testing::assertions::assert_json_status;
use healthlens_testing::{DumpBuilder, TestWorld};

fn node_status_dump() -> String {
    DumpBuilder::new()
        .banner("NODE STATUS", "edge1-a NotReady\nmdc1-b Ready")
        .build()
}

#[test]
fn test_config_defaults_apply() {
    let world = TestWorld::new()
        .with_dump("dump.txt", &node_status_dump())
        .with_config("[defaults]\nformat = \"json\"\n");

    let result = world.run(&["check", "dump.txt"]).unwrap();
    assert!(result.success());
    assert_json_status(&result.json().unwrap(), "Node Status", "OK").unwrap();
}

#[test]
fn test_flags_override_config_defaults() {
    let world = TestWorld::new()
        .with_dump("dump.txt", &node_status_dump())
        .with_config("[defaults]\nformat = \"json\"\n");

    let result = world.run(&["check", "dump.txt", "--format", "csv"]).unwrap();
    assert!(result.success());
    assert!(result.stdout().starts_with("category,level,status,remarks\n"));
}

#[test]
fn test_config_rule_settings() {
    let world = TestWorld::new()
        .with_dump("dump.txt", &node_status_dump())
        .with_config(
            "[defaults]\nformat = \"json\"\n\n[rules]\nfleet_host_prefix = \"edge\"\n",
        );

    let result = world.run(&["check", "dump.txt"]).unwrap();
    let json = result.json().unwrap();
    assert_json_status(&json, "Node Status", "Warning").unwrap();
    assert_eq!(
        json["records"][0]["remarks"],
        "Total: 1, Ready: 0, NotReady: 1 (edge1-a)"
    );
}

#[test]
fn test_invalid_config_is_reported() {
    let world = TestWorld::new()
        .with_dump("dump.txt", &node_status_dump())
        .with_config("[defaults]\nformat = \"pdf\"\n");

    let result = world.run(&["check", "dump.txt"]).unwrap();
    assert_eq!(result.code(), Some(1));
    assert!(result.stderr().contains("Error: Configuration error"));
}
