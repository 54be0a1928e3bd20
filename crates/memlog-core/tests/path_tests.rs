use memlog_core::*;
use std::env;
use std::path::{Path, PathBuf};

#[test]
fn test_resolve_workspace_path_explicit_wins() {
    unsafe {
        env::set_var(WORKSPACE_ENV, "/env/memlog");
    }

    let result = resolve_workspace_path(Some("/explicit/memlog")).unwrap();
    assert_eq!(result, PathBuf::from("/explicit/memlog"));

    let from_env = resolve_workspace_path(None).unwrap();
    assert_eq!(from_env, PathBuf::from("/env/memlog"));

    unsafe {
        env::remove_var(WORKSPACE_ENV);
    }
}

#[test]
fn test_expand_tilde_leaves_plain_paths() {
    assert_eq!(expand_tilde("logs/out"), PathBuf::from("logs/out"));
    assert_eq!(expand_tilde("/abs/~/x"), PathBuf::from("/abs/~/x"));
}

#[test]
fn test_expand_tilde_uses_home() {
    let Some(home) = env::var_os("HOME") else {
        return;
    };
    assert_eq!(expand_tilde("~/memlog"), PathBuf::from(home).join("memlog"));
}

#[test]
fn test_resolve_against() {
    let base = Path::new("/work");
    assert_eq!(
        resolve_against(base, Path::new("memory_data")),
        PathBuf::from("/work/memory_data")
    );
    assert_eq!(
        resolve_against(base, Path::new("/tmp/out")),
        PathBuf::from("/tmp/out")
    );
}

#[test]
fn test_normalize_label_is_idempotent() {
    let inputs = [
        "Nightly #12 @ main",
        "https://ci.example.com/job/7/console",
        "  mixed.Case-Label;x  ",
        "already_normal_42",
        "",
    ];

    for input in inputs {
        let once = normalize_label(input);
        assert_eq!(normalize_label(&once), once, "input: {input:?}");
    }
}

#[test]
fn test_normalize_label_output_alphabet() {
    let out = normalize_label("Build url #3 (retry) => ok?");
    assert!(
        out.chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
    );
    assert_eq!(out, "build_url_3_retry__ok");
}
