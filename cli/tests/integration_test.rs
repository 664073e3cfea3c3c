// pixtext
// Copyright 2026 The pixtext Authors
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not
// use this file except in compliance with the License.  You may obtain a copy
// of the License at:
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.  See the
// License for the specific language governing permissions and limitations
// under the License.

//! Integration tests that run the pixtext binary.

// Keep these in sync with other top-level files.
#![warn(anonymous_parameters, bad_style, missing_docs)]
#![warn(unused, unused_extern_crates, unused_import_braces, unused_qualifications)]
#![warn(unsafe_code)]

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

/// Computes the path to the directory where this test's binary lives.
fn self_dir() -> PathBuf {
    let self_exe = env::current_exe().expect("Cannot get self's executable path");
    let dir = self_exe.parent().expect("Cannot get self's directory");
    assert!(dir.ends_with("target/debug/deps") || dir.ends_with("target/release/deps"));
    dir.to_owned()
}

/// Computes the path to the built binary `name`.
fn bin_path<P: AsRef<Path>>(name: P) -> PathBuf {
    let test_dir = self_dir();
    let debug_or_release_dir = test_dir.parent().expect("Failed to get parent directory");
    debug_or_release_dir.join(name).with_extension(env::consts::EXE_EXTENSION)
}

/// Describes the behavior for one of the output streams (stdout, stderr) of a program.
enum Behavior {
    /// Ensure the stream is silent.
    Null,

    /// Expect the contents of the stream to match this literal string.
    Literal(String),

    /// Expect the contents of the stream to start with this literal string.
    Prefix(String),
}

/// Runs `bin` with arguments `args` and returns its exit code, stdout and stderr.
fn run<P: AsRef<Path>>(bin: P, args: &[&str]) -> (i32, String, String) {
    let result = process::Command::new(bin.as_ref())
        .args(args)
        .stdin(process::Stdio::null())
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute subprocess");
    let code = result.status.code().expect("Subprocess didn't exit cleanly");
    let stdout = String::from_utf8(result.stdout).expect("Stdout not is not valid UTF-8");
    let stderr = String::from_utf8(result.stderr).expect("Stderr not is not valid UTF-8");
    (code, stdout, stderr)
}

/// Returns true if `actual` satisfies the expectations in `behavior`.
fn matches(behavior: &Behavior, actual: &str) -> bool {
    match behavior {
        Behavior::Null => actual.is_empty(),
        Behavior::Literal(text) => actual == text,
        Behavior::Prefix(text) => actual.starts_with(text.as_str()),
    }
}

/// Runs `bin` with arguments `args` and checks its behavior against expectations.
///
/// `exp_code` is the expected error code from the program.  `stdout_behavior` and
/// `stderr_behavior` indicate what to expect from the program's textual output.
fn check<P: AsRef<Path>>(
    bin: P,
    args: &[&str],
    exp_code: i32,
    stdout_behavior: Behavior,
    stderr_behavior: Behavior,
) {
    let (code, stdout, stderr) = run(bin, args);

    if exp_code != code || !matches(&stdout_behavior, &stdout) || !matches(&stderr_behavior, &stderr)
    {
        eprintln!("Exit code: {}", code);
        eprintln!("stdout:\n{}", stdout);
        eprintln!("stderr:\n{}", stderr);
        assert_eq!(exp_code, code);
        assert!(matches(&stdout_behavior, &stdout), "stdout did not match");
        assert!(matches(&stderr_behavior, &stderr), "stderr did not match");
    }
}

#[test]
fn test_cli_help() {
    fn check_with_args(args: &[&str]) {
        check(
            &bin_path("pixtext"),
            args,
            0,
            Behavior::Prefix("Usage: pixtext [options] TEXT\n".to_owned()),
            Behavior::Null,
        );
    }
    check_with_args(&["-h"]);
    check_with_args(&["--help"]);
    check_with_args(&["--version", "--help"]);
    check_with_args(&["the", "--help", "flag always wins"]);
}

#[test]
fn test_cli_version() {
    check(
        &bin_path("pixtext"),
        &["--version"],
        0,
        Behavior::Prefix(format!("pixtext {}\n", env!("CARGO_PKG_VERSION"))),
        Behavior::Null,
    );
}

#[test]
fn test_cli_direct() {
    let exp = "..#..\n.##..\n..#..\n..#..\n.###.\n";
    for args in &[&["1"][..], &["-a", "left", "1"][..], &["--align=RIGHT", "1"][..]] {
        check(&bin_path("pixtext"), args, 0, Behavior::Literal(exp.to_owned()), Behavior::Null);
    }
}

#[test]
fn test_cli_direct_blank() {
    check(
        &bin_path("pixtext"),
        &[" "],
        0,
        Behavior::Literal(".....\n".repeat(5)),
        Behavior::Null,
    );
}

#[test]
fn test_cli_scaled() {
    check(
        &bin_path("pixtext"),
        &["-s", "1", "1"],
        0,
        Behavior::Literal("..+..\n.++..\n..+..\n..+..\n.+++.\n".to_owned()),
        Behavior::Null,
    );
}

#[test]
fn test_cli_grid() {
    let exp = [
        "    oo    ",
        "    oo    ",
        "  oooo    ",
        "  oooo    ",
        "    oo    ",
        "    oo    ",
        "    oo    ",
        "    oo    ",
        "  oooooo  ",
        "  oooooo  ",
    ];
    let mut exp = exp.join("\n");
    exp.push('\n');
    check(&bin_path("pixtext"), &["--grid", "-s", "2", "1"], 0, Behavior::Literal(exp), Behavior::Null);
}

#[test]
fn test_cli_output_ppm() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.ppm");
    check(
        &bin_path("pixtext"),
        &["-o", path.to_str().unwrap(), "12"],
        0,
        Behavior::Null,
        Behavior::Null,
    );

    let contents = fs::read(&path).unwrap();
    let header = b"P6\n10 5\n255\n";
    assert!(contents.starts_with(header));
    assert_eq!(header.len() + 10 * 5 * 3, contents.len());
}

#[test]
fn test_cli_invalid_character() {
    check(
        &bin_path("pixtext"),
        &["a"],
        1,
        Behavior::Null,
        Behavior::Literal("pixtext: invalid char: a\n".to_owned()),
    );
    check(
        &bin_path("pixtext"),
        &["-s", "3", "1a"],
        1,
        Behavior::Null,
        Behavior::Literal("pixtext: invalid char: a\n".to_owned()),
    );
}

#[test]
fn test_cli_scale_too_large() {
    for args in &[&["-s", "4294967295", "AB"][..], &["--grid", "-s", "4294967295", "AB"][..]] {
        check(
            &bin_path("pixtext"),
            args,
            1,
            Behavior::Null,
            Behavior::Literal("pixtext: text too large at scale 4294967295\n".to_owned()),
        );
    }
}

#[test]
fn test_cli_usage_errors() {
    fn check_usage(args: &[&str], message: &str) {
        check(
            &bin_path("pixtext"),
            args,
            2,
            Behavior::Null,
            Behavior::Literal(format!(
                "Usage error: {}\nType pixtext --help for more information\n",
                message
            )),
        );
    }
    check_usage(&[], "Missing text to render");
    check_usage(&["1", "2"], "Too many arguments");
    check_usage(&["-s", "0", "1"], "Invalid scale 0: number would be zero for non-zero type");
    check_usage(&["-a", "top", "1"], "Invalid alignment top: must be left, right or center");
    check_usage(&["-s", "2", "--style", "purple", "1"], "Unknown palette purple");
    check_usage(&["-Z", "1"], "Unrecognized option: 'Z'");
    check_usage(&["--grid", "-o", "out.ppm", "1"], "--output cannot be used with --grid");
    check_usage(&["-s", "2", "-a", "left", "1"], "--align only applies to direct rendering");
    check_usage(&["--grid", "--align=right", "1"], "--align only applies to direct rendering");
    check_usage(&["--style", "red", "1"], "--style only applies to scaled rendering");
    check_usage(&["--grid", "-s", "2", "--style", "red", "1"], "--style only applies to scaled rendering");
}
