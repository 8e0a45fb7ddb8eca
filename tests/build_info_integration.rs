//! Integration tests for build metadata and the binary built on it.

use std::process::Command;

use socktainer_buildinfo::{
    BuildMetadata, VersionInfo, apple_container_version, build_git_commit, build_info,
    build_time, build_version, docker_engine_api_max_version, docker_engine_api_min_version,
};

const BIN: &str = env!("CARGO_BIN_EXE_socktainer-buildinfo");

fn run_bin(args: &[&str]) -> String {
    let output = Command::new(BIN)
        .args(args)
        .env_remove("SOCKTAINER_BUILDINFO_FORMAT")
        .output()
        .expect("failed to run binary");
    assert!(output.status.success(), "binary exited with {}", output.status);
    String::from_utf8(output.stdout).expect("stdout is not UTF-8")
}

#[test]
fn accessors_are_stable_across_calls() {
    assert_eq!(build_version(), build_version());
    assert_eq!(build_git_commit(), build_git_commit());
    assert_eq!(build_time(), build_time());
    assert_eq!(docker_engine_api_min_version(), docker_engine_api_min_version());
    assert_eq!(docker_engine_api_max_version(), docker_engine_api_max_version());
    assert_eq!(apple_container_version(), apple_container_version());
    assert_eq!(BuildMetadata::current(), BuildMetadata::current());
}

#[test]
fn unset_inputs_fall_back_to_defaults() {
    if option_env!("BUILD_VERSION").is_none() {
        assert_eq!(build_version(), "0.0.0-dev");
    }
    if option_env!("BUILD_GIT_COMMIT").is_none() {
        assert_eq!(build_git_commit(), "unspecified");
    }
    if option_env!("BUILD_TIME").is_none() {
        assert_eq!(build_time(), "unspecified");
    }
}

#[test]
fn injected_version_is_returned_verbatim() {
    assert_eq!(build_info::resolve(Some("1.2.3"), build_info::DEFAULT_VERSION), "1.2.3");
    if let Some(version) = option_env!("BUILD_VERSION") {
        assert_eq!(build_version(), version);
    }
}

#[test]
fn version_document_reflects_build_metadata() {
    let info = VersionInfo::current();
    assert_eq!(info.api_version, docker_engine_api_max_version());
    assert_eq!(info.min_api_version, docker_engine_api_min_version());
    assert_eq!(info.git_commit, build_git_commit());
    assert_eq!(info.build_time, build_time());
    assert_eq!(info.components[0].version, build_version());
}

#[test]
fn binary_prints_banner() {
    let stdout = run_bin(&["--short"]);
    assert_eq!(stdout, format!("{}\n", build_info::version_string()));
}

#[test]
fn binary_prints_json() {
    let stdout = run_bin(&["--format", "json"]);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["version"], build_version());
    assert_eq!(value["gitCommit"], build_git_commit());
    assert_eq!(value["appleContainerVersion"], apple_container_version());
}

#[test]
fn binary_prints_text_by_default() {
    let stdout = run_bin(&[]);
    assert_eq!(stdout.lines().count(), 6);
    assert_eq!(
        stdout.lines().next(),
        Some(format!("version: {}", build_version()).as_str())
    );
}

#[test]
fn binary_rejects_unknown_format() {
    let status = Command::new(BIN)
        .args(["--format", "xml"])
        .output()
        .unwrap()
        .status;
    assert!(!status.success());
}
