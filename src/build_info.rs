//! Build information captured at compile time.
//!
//! Every value comes from an environment variable present when the crate is
//! compiled (see `build.rs`). Absent inputs fall back to fixed defaults, and
//! present inputs are returned exactly as given.

use serde::Serialize;

/// Product name used in banners and the Docker version document.
pub const PRODUCT_NAME: &str = "socktainer";

/// Version reported when `BUILD_VERSION` is not set.
pub const DEFAULT_VERSION: &str = "0.0.0-dev";

/// Placeholder for every other input that is not set.
pub const UNSPECIFIED: &str = "unspecified";

/// Pick the injected value if there is one, the default otherwise.
#[must_use]
pub const fn resolve(value: Option<&'static str>, default: &'static str) -> &'static str {
    match value {
        Some(value) => value,
        None => default,
    }
}

/// Release version (`BUILD_VERSION`).
pub const VERSION: &str = resolve(option_env!("BUILD_VERSION"), DEFAULT_VERSION);

/// Source commit (`BUILD_GIT_COMMIT`).
pub const GIT_COMMIT: &str = resolve(option_env!("BUILD_GIT_COMMIT"), UNSPECIFIED);

/// Build timestamp (`BUILD_TIME`), in whatever format the build supplied.
pub const BUILD_TIME: &str = resolve(option_env!("BUILD_TIME"), UNSPECIFIED);

/// Lowest Docker Engine API version served (`DOCKER_ENGINE_API_MIN_VERSION`).
pub const DOCKER_ENGINE_API_MIN_VERSION: &str =
    resolve(option_env!("DOCKER_ENGINE_API_MIN_VERSION"), UNSPECIFIED);

/// Highest Docker Engine API version served (`DOCKER_ENGINE_API_MAX_VERSION`).
pub const DOCKER_ENGINE_API_MAX_VERSION: &str =
    resolve(option_env!("DOCKER_ENGINE_API_MAX_VERSION"), UNSPECIFIED);

/// Apple container release built against (`APPLE_CONTAINER_VERSION`).
pub const APPLE_CONTAINER_VERSION: &str =
    resolve(option_env!("APPLE_CONTAINER_VERSION"), UNSPECIFIED);

static CURRENT: BuildMetadata = BuildMetadata {
    version: VERSION,
    git_commit: GIT_COMMIT,
    build_time: BUILD_TIME,
    docker_engine_api_min_version: DOCKER_ENGINE_API_MIN_VERSION,
    docker_engine_api_max_version: DOCKER_ENGINE_API_MAX_VERSION,
    apple_container_version: APPLE_CONTAINER_VERSION,
};

/// All build metadata of this binary in one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildMetadata {
    pub version: &'static str,
    pub git_commit: &'static str,
    pub build_time: &'static str,
    pub docker_engine_api_min_version: &'static str,
    pub docker_engine_api_max_version: &'static str,
    pub apple_container_version: &'static str,
}

impl BuildMetadata {
    /// Metadata compiled into this binary.
    #[must_use]
    pub const fn current() -> &'static Self {
        &CURRENT
    }

    /// Field names and values, in declaration order.
    #[must_use]
    pub const fn entries(&self) -> [(&'static str, &'static str); 6] {
        [
            ("version", self.version),
            ("gitCommit", self.git_commit),
            ("buildTime", self.build_time),
            ("dockerEngineApiMinVersion", self.docker_engine_api_min_version),
            ("dockerEngineApiMaxVersion", self.docker_engine_api_max_version),
            ("appleContainerVersion", self.apple_container_version),
        ]
    }
}

#[must_use]
pub const fn build_version() -> &'static str {
    VERSION
}

#[must_use]
pub const fn build_git_commit() -> &'static str {
    GIT_COMMIT
}

#[must_use]
pub const fn build_time() -> &'static str {
    BUILD_TIME
}

#[must_use]
pub const fn docker_engine_api_min_version() -> &'static str {
    DOCKER_ENGINE_API_MIN_VERSION
}

#[must_use]
pub const fn docker_engine_api_max_version() -> &'static str {
    DOCKER_ENGINE_API_MAX_VERSION
}

#[must_use]
pub const fn apple_container_version() -> &'static str {
    APPLE_CONTAINER_VERSION
}

/// Version banner with commit, as printed for `--version`.
///
/// Format: `socktainer: 1.2.3 (git commit: abc1234def)`.
#[must_use]
pub fn version_string() -> String {
    version_string_of(VERSION, GIT_COMMIT)
}

fn version_string_of(version: &str, commit: &str) -> String {
    format!("{PRODUCT_NAME}: {version} (git commit: {commit})")
}
