//! REPL sessions driven through in-memory input and output buffers.

use super::test_utils::ScriptedProvider;
use gish::cli::{Commands, RunContext};
use gish::config::{GishConfig, ShellConfig};
use gish::shell::{run_repl, Session};
use gish::tree::Tree;

fn session() -> (Session, super::test_utils::CallLog) {
    let provider = ScriptedProvider::sample();
    let log = provider.log.clone();
    let settings = ShellConfig {
        color: false,
        ..ShellConfig::default()
    };
    (Session::new(Tree::new(), Box::new(provider), settings), log)
}

fn drive(session: &mut Session, script: &str) -> (String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    run_repl(session, script.as_bytes(), &mut out, &mut err).unwrap();
    (
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn test_navigation_script() {
    let (mut s, log) = session();
    let (out, err) = drive(
        &mut s,
        "cd users\nls\ncd torvalds\nls\ncd repos\nls\ncat linux\npwd\nexit\n",
    );

    assert!(err.is_empty(), "unexpected errors: {}", err);
    assert!(out.contains("mojombo\ndefunkt\npjhyett\n"));
    assert!(out.contains("info\nrepos\n"));
    assert!(out.contains("linux\nsubsurface\n"));
    assert!(out.contains("Linux kernel\n"));
    assert!(out.contains("gish:/users/torvalds/repos> "));
    assert!(out.contains("/users/torvalds/repos\n"));
    assert_eq!(log.count("readme:torvalds/linux"), 1);
}

#[test]
fn test_errors_do_not_end_the_session() {
    let (mut s, _) = session();
    let (out, err) = drive(
        &mut s,
        "cd /nope\ncat /users\nfrobnicate\ncd ..\ncd trending\npwd\n",
    );

    let errors: Vec<&str> = err.lines().collect();
    assert_eq!(errors.len(), 4, "errors: {:?}", errors);
    assert!(errors[0].contains("No such file or directory"));
    assert!(errors[1].contains("Is a directory"));
    assert!(errors[2].contains("command not found"));
    assert!(errors[3].contains("already at the root"));
    assert!(out.contains("/trending\n"));
    assert_eq!(s.pwd(), "/trending");
}

#[test]
fn test_help_and_quit() {
    let (mut s, log) = session();
    let (out, _) = drive(&mut s, "\nhelp\nhelp cd\nquit\nls users\n");
    assert!(out.contains("Browse GitHub like it's your filesystem"));
    assert!(out.contains("Move around the gish filesystem."));
    assert_eq!(log.total(), 0);
}

#[test]
fn test_cat_user_info_shows_profile() {
    let (mut s, _) = session();
    let (out, err) = drive(&mut s, "cat /users/torvalds/info\n");
    assert!(err.is_empty());
    assert!(out.contains("Linus Torvalds"));
    assert!(out.contains("200000"));
}

#[test]
fn test_run_context_one_shot_commands() {
    let provider = ScriptedProvider::sample();
    let mut ctx = RunContext::with_provider(GishConfig::default(), Box::new(provider), true);

    let listing = ctx
        .execute(&Commands::Ls {
            path: Some("/trending".to_string()),
        })
        .unwrap();
    assert_eq!(listing, "rust-lang:rust\ntorvalds:linux");

    let readme = ctx
        .execute(&Commands::Readme {
            name: "rust-lang/rust".to_string(),
        })
        .unwrap();
    assert_eq!(readme, "# The Rust Programming Language");

    let url = ctx
        .execute(&Commands::Url {
            path: Some("/users/mojombo/repos".to_string()),
        })
        .unwrap();
    assert_eq!(url, "https://www.github.com/mojombo?tab=repositories");

    let summary = ctx
        .execute(&Commands::UserSummary {
            login: "torvalds".to_string(),
        })
        .unwrap();
    assert!(summary.contains("Linus Torvalds"));
}
