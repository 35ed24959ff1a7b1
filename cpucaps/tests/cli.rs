//! End-to-end checks of the `cpucaps` binary.

use std::process::{Command, Output};

fn cpucaps(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_cpucaps"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run cpucaps")
}

#[test]
fn probe_exit_status_matches_message() {
    let output = cpucaps(&["probe", "sha-ni"]);
    let stdout = String::from_utf8(output.stdout).unwrap();

    match output.status.code() {
        Some(0) => assert_eq!(stdout, "This CPU supports SHA-NI\n"),
        Some(1) => assert_eq!(stdout, "This CPU does not support SHA-NI\n"),
        other => panic!("unexpected exit status: {other:?}"),
    }
}

#[test]
fn bare_invocation_probes_sha_ni() {
    let bare = cpucaps(&[]);
    let explicit = cpucaps(&["probe"]);

    assert_eq!(bare.status.code(), explicit.status.code());
    assert_eq!(bare.stdout, explicit.stdout);
}

#[test]
fn quiet_probe_is_silent() {
    let output = cpucaps(&["probe", "pclmulqdq", "--quiet"]);
    assert!(matches!(output.status.code(), Some(0 | 1)));
    assert!(output.stdout.is_empty());
}

#[test]
fn selftest_passes() {
    let output = cpucaps(&["selftest"]);
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert!(output.status.success(), "{stdout}");
    for primitive in ["sha1", "sha256", "sha512", "gf128"] {
        assert!(
            stdout.contains(&format!("PASS {primitive:<6} soft")),
            "{primitive} missing from:\n{stdout}"
        );
    }
    assert!(!stdout.contains("FAIL"));
}

#[test]
fn backends_lists_soft_forms() {
    let output = cpucaps(&["backends"]);
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert!(output.status.success());
    assert!(stdout.lines().any(|l| l == "+SHA-NI" || l == "-SHA-NI"));
    assert_eq!(stdout.lines().filter(|l| l.contains(" soft ")).count(), 4);
}

#[test]
fn verbose_logs_to_stderr() {
    let output = cpucaps(&["-v", "probe"]);
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("probed extension"));
}

#[test]
fn verbose_selftest_logs_dispatch() {
    let output = cpucaps(&["-v", "selftest"]);
    let stderr = String::from_utf8(output.stderr).unwrap();

    assert_eq!(stderr.matches("dispatcher choice").count(), 4, "{stderr}");
}

#[test]
fn invalid_arguments_are_usage_errors() {
    let output = cpucaps(&["probe", "not-an-extension"]);
    assert_eq!(output.status.code(), Some(2));
}
