use assert_cmd::Command;
use healthlens_testing::TestWorld;
use predicates::prelude::*;

#[allow(deprecated)]
fn healthlens() -> Command {
    Command::cargo_bin("healthlens").unwrap()
}

#[test]
fn test_inspect_fleet_sample() {
    let world = TestWorld::new().with_sample("fleet_dump.txt");
    let result = world.run(&["inspect", "fleet_dump.txt"]).unwrap();

    assert!(result.success());
    let stdout = result.stdout();
    assert!(stdout.starts_with("Dialect: banner\nSections: 18\n"));
    assert!(stdout.contains("pod xdr status"));
    assert!(stdout.contains("Pod XDR Status"));
    assert!(stdout.contains("diskspace_mdc1"));
}

#[test]
fn test_inspect_cluster_blocks_route_to_storage() {
    let world = TestWorld::new().with_sample("cluster_dump.txt");
    let result = world.run(&["inspect", "cluster_dump.txt"]).unwrap();

    assert!(result.success());
    assert!(result.stdout().starts_with("Dialect: node\n"));
    assert!(result.stdout().contains("Unknown"));
    assert!(result.stdout().contains("Storage"));
}

#[test]
fn test_catalog_lists_both_dialects() {
    healthlens()
        .arg("catalog")
        .assert()
        .success()
        .stdout(predicate::str::contains("banner dialect"))
        .stdout(predicate::str::contains("node dialect"))
        .stdout(predicate::str::contains("Pod Restarts (24h)"));
}

#[test]
fn test_catalog_single_dialect() {
    healthlens()
        .args(["catalog", "--dialect", "node"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Historical Issues"))
        .stdout(predicate::str::contains("banner dialect").not());
}

#[test]
fn test_guidance_without_subcommand() {
    healthlens()
        .env("NO_COLOR", "1")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("healthlens - health-check dump analyzer"));
}

#[test]
fn test_help_lists_subcommands() {
    healthlens()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("inspect"))
        .stdout(predicate::str::contains("catalog"));
}
