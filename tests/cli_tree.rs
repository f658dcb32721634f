//! End-to-end tests for `fluxtree tree` reading captured snapshots.

mod common;

use common::*;

#[test]
fn reference_snapshot_renders_expected_tree() {
    let env = TestEnv::new();
    env.write_project_file("snapshot.json", REFERENCE_RECORDS);

    let result = env.run(&["tree", "--input", "snapshot.json", "--color", "never"]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert_eq!(result.stdout, REFERENCE_TREE);
}

#[test]
fn tree_is_the_default_command() {
    let env = TestEnv::new();
    env.write_project_file("snapshot.json", REFERENCE_RECORDS);
    env.write_project_file("fluxtree.toml", "[output]\ncolor = \"never\"\n");

    // Without a subcommand there is no --input, so point kubectl at a
    // missing binary and only check that the tree command ran.
    let result = env.run_with_env(&[], &[("FLUXTREE_KUBECTL", "fluxtree-no-such-kubectl")]);

    assert!(!result.success);
    assert!(
        result.stderr.contains("fluxtree-no-such-kubectl"),
        "stderr:\n{}",
        result.stderr
    );
}

#[test]
fn snapshot_can_be_piped_on_stdin() {
    let env = TestEnv::new();

    let result = env.run_with_stdin(&["tree", "-i", "-"], REFERENCE_RECORDS);

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert_eq!(result.stdout, REFERENCE_TREE);
}

#[test]
fn kubectl_json_output_is_accepted() {
    let env = TestEnv::new();
    env.write_project_file("ks.json", KUBECTL_LIST);

    let result = env.run(&["tree", "-i", "ks.json"]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    insta::assert_snapshot!(result.stdout, @r"
    ● infrastructure
    └── ✗ apps
    ");
}

#[test]
fn all_failed_snapshot_still_exits_zero() {
    let env = TestEnv::new();
    env.write_project_file(
        "failed.yaml",
        "- name: a\n  ready: \"False\"\n  message: boom\n- name: b\n  ready: \"Unknown\"\n  dependencies: a\n",
    );

    let result = env.run(&["tree", "-i", "failed.yaml"]);

    assert_eq!(result.exit_code, 0, "stderr:\n{}", result.stderr);
    assert_eq!(result.stdout, "✗ a\n└── ✗ b\n");
}

#[test]
fn messages_flag_appends_status_messages() {
    let env = TestEnv::new();
    env.write_project_file("snapshot.json", REFERENCE_RECORDS);

    let result = env.run(&["tree", "-i", "snapshot.json", "--messages"]);

    assert!(result.success);
    let lines: Vec<&str> = result.stdout.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "● A");
    assert!(lines[2].starts_with("│   └── ✗ D  kustomize build failed"));
    assert!(lines[3].starts_with("└── ◌ C  dependency"));
}

#[test]
fn detached_nodes_are_listed_after_the_tree() {
    let env = TestEnv::new();
    env.write_project_file("snapshot.json", DANGLING_RECORDS);

    let result = env.run(&["tree", "-i", "snapshot.json"]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    insta::assert_snapshot!(result.stdout, @r"
    ● infra

    ⚠ Detached (dependencies not found):
    ● apps  (missing: sources)
    └── ✗ monitoring
    ");
}

#[test]
fn no_detached_flag_hides_the_section() {
    let env = TestEnv::new();
    env.write_project_file("snapshot.json", DANGLING_RECORDS);

    let result = env.run(&["tree", "-i", "snapshot.json", "--no-detached"]);

    assert!(result.success);
    assert_eq!(result.stdout, "● infra\n");
}

#[test]
fn ascii_output_when_unicode_is_disabled() {
    let env = TestEnv::new();
    env.write_project_file("snapshot.json", REFERENCE_RECORDS);

    let result = env.run_with_env(
        &["tree", "-i", "snapshot.json"],
        &[("FLUXTREE_UNICODE", "false")],
    );

    assert!(result.success);
    assert_eq!(result.stdout, "[OK] A\n|-- [OK] B\n|   `-- [X] D\n`-- [..] C\n");
}

#[test]
fn empty_list_prints_nothing_and_warns() {
    let env = TestEnv::new();
    env.write_project_file("empty.json", "[]");

    let result = env.run(&["tree", "-i", "empty.json"]);

    assert!(result.success);
    assert!(result.stdout.is_empty());
    assert!(result.stderr.contains("No resources found in empty.json"));
}

#[test]
fn unquoted_yaml_readiness_renders_every_record() {
    let env = TestEnv::new();
    env.write_project_file(
        "plain.yaml",
        "- name: A\n  ready: True\n- name: B\n  ready: True\n  dependencies: A\n",
    );

    let result = env.run(&["tree", "-i", "plain.yaml"]);

    assert_eq!(result.exit_code, 0, "stderr:\n{}", result.stderr);
    assert_eq!(result.stdout, "● A\n└── ● B\n");
}
