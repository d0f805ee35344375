//! Binary-level tests for the paths that never touch the network:
//! configuration, local validation, and confirmation gating.

mod common;

use common::FrontdeskTest;

#[test]
fn help_lists_the_subcommands() {
    let test = FrontdeskTest::new();
    let output = test.run(&["--help"]);
    assert!(output.status.success());

    let stdout = FrontdeskTest::stdout(&output);
    for subcommand in ["ls", "show", "assign", "take", "resolve", "close", "comment"] {
        assert!(stdout.contains(subcommand), "help should mention {subcommand}");
    }
}

#[test]
fn completions_generate_without_config() {
    let test = FrontdeskTest::new();
    let output = test.run(&["completions", "bash"]);
    assert!(output.status.success());
    assert!(FrontdeskTest::stdout(&output).contains("frontdesk"));
}

#[test]
fn config_set_get_round_trip() {
    let test = FrontdeskTest::new();

    let output = test.run(&["config", "set", "api_url", "https://desk.example.com/api"]);
    assert!(output.status.success(), "{}", FrontdeskTest::stderr(&output));

    let output = test.run(&["config", "set", "role", "agent"]);
    assert!(output.status.success());

    let output = test.run(&["config", "get", "api_url"]);
    assert!(output.status.success());
    assert!(FrontdeskTest::stdout(&output).contains("https://desk.example.com/api"));

    let output = test.run(&["config", "get", "role"]);
    assert!(FrontdeskTest::stdout(&output).contains("agent"));
}

#[test]
fn config_rejects_unknown_keys_and_roles() {
    let test = FrontdeskTest::new();

    let output = test.run(&["config", "set", "github_token", "x"]);
    assert!(!output.status.success());
    assert!(FrontdeskTest::stderr(&output).contains("unknown config key"));

    let output = test.run(&["config", "set", "role", "manager"]);
    assert!(!output.status.success());
    assert!(FrontdeskTest::stderr(&output).contains("invalid role"));
}

#[test]
fn config_never_echoes_the_token() {
    let test = FrontdeskTest::new();

    let output = test.run(&["config", "set", "token", "tok_supersecret99"]);
    assert!(output.status.success());
    assert!(!FrontdeskTest::stdout(&output).contains("tok_supersecret99"));

    let output = test.run(&["config", "get", "token"]);
    assert!(output.status.success());
    assert!(!FrontdeskTest::stdout(&output).contains("tok_supersecret99"));

    let output = test.run(&["config", "show"]);
    assert!(output.status.success());
    assert!(!FrontdeskTest::stdout(&output).contains("tok_supersecret99"));
    assert!(FrontdeskTest::stdout(&output).contains("configured"));
}

#[test]
fn create_rejects_blank_fields_before_any_network_call() {
    let test = FrontdeskTest::new();
    // No api_url configured: if validation ran after connecting this would
    // fail differently.
    let output = test.run(&[
        "create",
        "--subject",
        "  ",
        "--issue",
        "It is broken",
        "--category",
        "hardware",
    ]);
    assert!(!output.status.success());
    assert!(FrontdeskTest::stderr(&output).contains("subject"));
}

#[test]
fn empty_comment_is_rejected_locally() {
    let test = FrontdeskTest::new();
    let output = test.run(&["comment", "TK-1", ""]);
    assert!(!output.status.success());
    assert!(FrontdeskTest::stderr(&output).contains("comment text cannot be empty"));
}

#[test]
fn destructive_actions_require_yes_when_stdin_is_piped() {
    let test = FrontdeskTest::new();
    let env = &[
        ("FRONTDESK_API_URL", "http://127.0.0.1:1"),
        ("FRONTDESK_USER", "casey"),
        ("FRONTDESK_ROLE", "agent"),
        ("FRONTDESK_TOKEN", "tok-test"),
    ];

    for action in ["resolve", "close"] {
        let output = test.run_with_env(&[action, "TK-1"], env);
        assert!(!output.status.success(), "{action} should require --yes");
        assert!(
            FrontdeskTest::stderr(&output).contains("--yes"),
            "{action} should point at --yes"
        );
    }
}

#[test]
fn commands_fail_cleanly_without_an_api_url() {
    let test = FrontdeskTest::new();
    let output = test.run(&["ls"]);
    assert!(!output.status.success());
    assert!(FrontdeskTest::stderr(&output).contains("no API URL configured"));
}

#[test]
fn ls_json_flag_is_accepted() {
    let test = FrontdeskTest::new();
    // Still fails (no API URL) but the flag must parse.
    let output = test.run(&["ls", "--json", "--status", "open"]);
    assert!(!output.status.success());
    assert!(FrontdeskTest::stderr(&output).contains("no API URL configured"));

    let output = test.run(&["ls", "--status", "reopened"]);
    assert!(!output.status.success());
    assert!(FrontdeskTest::stderr(&output).contains("Invalid status"));
}
