//! Socktainer build information.
//!
//! Build metadata (release version, commit, build time, supported Docker
//! Engine API range and Apple container release) is injected through
//! environment variables at compile time and exposed here as constants:
//!
//! ```text
//!  BUILD_VERSION, BUILD_GIT_COMMIT, ...
//!              │
//!        ┌─────┴─────┐
//!        │ build.rs  │  rerun tracking, forwarding
//!        └─────┬─────┘
//!        ┌─────┴──────┐     ┌──────────────┐
//!        │ build_info │ ──▶ │ version_info │  Docker `/version`
//!        └─────┬──────┘     └──────┬───────┘
//!              └─────────┬─────────┘
//!                  ┌─────┴─────┐
//!                  │    CLI    │
//!                  └───────────┘
//! ```

pub mod build_info;
pub mod cli;
pub mod error;
pub mod version_info;

pub use build_info::{
    BuildMetadata, apple_container_version, build_git_commit, build_time, build_version,
    docker_engine_api_max_version, docker_engine_api_min_version,
};
pub use error::{Error, Result};
pub use version_info::{HostInfo, VersionInfo};
