//! Build script tracking build metadata inputs.
//!
//! rustc inherits the build environment, so `option_env!` in
//! `src/build_info.rs` already sees each input verbatim. Re-emitting them
//! through `rustc-env` would let cargo trim trailing whitespace.

/// Environment inputs read by `src/build_info.rs`.
const INPUTS: [&str; 6] = [
    "BUILD_VERSION",
    "BUILD_GIT_COMMIT",
    "BUILD_TIME",
    "DOCKER_ENGINE_API_MIN_VERSION",
    "DOCKER_ENGINE_API_MAX_VERSION",
    "APPLE_CONTAINER_VERSION",
];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // Re-run whenever an input is set, changed or removed
    for name in INPUTS {
        println!("cargo:rerun-if-env-changed={name}");
    }
}
