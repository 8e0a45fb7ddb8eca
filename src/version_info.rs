//! Docker Engine `GET /version` document.
//!
//! Only the subset of the Docker schema that socktainer can answer is
//! modelled. Key names follow the Docker wire format.

use serde::Serialize;
use sysinfo::System;

use crate::build_info::{BuildMetadata, PRODUCT_NAME};

/// Server platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ServerPlatform {
    pub name: String,
}

/// Versioned component of the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Component {
    pub name: String,
    pub version: String,
}

/// Facts about the machine the server runs on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostInfo {
    /// Go-style OS name (`darwin`, `linux`, ...).
    pub os: String,
    /// Go-style architecture name (`arm64`, `amd64`, ...).
    pub arch: String,
    /// Kernel release, when it can be determined.
    pub kernel_version: Option<String>,
}

impl HostInfo {
    /// Describe the current host.
    #[must_use]
    pub fn current() -> Self {
        let kernel_version = System::kernel_version().filter(|release| !release.is_empty());

        tracing::trace!(?kernel_version, "Detected kernel release");

        Self {
            os: go_os(std::env::consts::OS).to_string(),
            arch: go_arch(std::env::consts::ARCH).to_string(),
            kernel_version,
        }
    }
}

/// Map a Rust target OS name to the name Docker clients expect.
#[must_use]
pub fn go_os(os: &str) -> &str {
    match os {
        "macos" => "darwin",
        other => other,
    }
}

/// Map a Rust target architecture name to the name Docker clients expect.
#[must_use]
pub fn go_arch(arch: &str) -> &str {
    match arch {
        "aarch64" => "arm64",
        "x86_64" => "amd64",
        "x86" => "386",
        "powerpc64" => "ppc64",
        other => other,
    }
}

/// Response body of `GET /version`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct VersionInfo {
    pub platform: ServerPlatform,
    pub components: Vec<Component>,
    pub version: String,
    pub api_version: String,
    #[serde(rename = "MinAPIVersion")]
    pub min_api_version: String,
    pub git_commit: String,
    pub os: String,
    pub arch: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kernel_version: Option<String>,
    pub experimental: bool,
    pub build_time: String,
}

impl VersionInfo {
    /// Build the document from build metadata and host facts.
    ///
    /// `Version` carries the highest supported API version rather than the
    /// product release: some clients refuse servers whose SemVer is lower
    /// than the Docker release they target. The product release is listed
    /// as a component instead.
    #[must_use]
    pub fn new(meta: &BuildMetadata, host: &HostInfo) -> Self {
        Self {
            platform: ServerPlatform {
                name: PRODUCT_NAME.to_string(),
            },
            components: vec![Component {
                name: PRODUCT_NAME.to_string(),
                version: meta.version.to_string(),
            }],
            version: meta.docker_engine_api_max_version.to_string(),
            api_version: meta.docker_engine_api_max_version.to_string(),
            min_api_version: meta.docker_engine_api_min_version.to_string(),
            git_commit: meta.git_commit.to_string(),
            os: host.os.clone(),
            arch: host.arch.clone(),
            kernel_version: host.kernel_version.clone(),
            experimental: true,
            build_time: meta.build_time.to_string(),
        }
    }

    /// Document for this binary on this host.
    #[must_use]
    pub fn current() -> Self {
        Self::new(BuildMetadata::current(), &HostInfo::current())
    }
}
