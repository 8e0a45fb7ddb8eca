//! CLI parsing and rendering.

use std::fmt::Write as _;

use clap::{Parser, ValueEnum};

use crate::build_info::{self, BuildMetadata};
use crate::error::Result;
use crate::version_info::{HostInfo, VersionInfo};

/// Print the build metadata compiled into socktainer.
#[derive(Parser)]
#[command(name = "socktainer-buildinfo")]
#[command(about = "Print the build metadata compiled into socktainer")]
#[command(version = build_info::VERSION)]
pub struct Cli {
    /// Output format.
    #[arg(
        short,
        long,
        value_enum,
        default_value_t = Format::Text,
        env = "SOCKTAINER_BUILDINFO_FORMAT"
    )]
    pub format: Format,

    /// Print only the version banner.
    #[arg(short, long)]
    pub short: bool,

    /// Increase logging verbosity.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Output format for build metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// One `key: value` line per field.
    Text,
    /// Build metadata as JSON.
    Json,
    /// Build metadata as TOML.
    Toml,
    /// Docker Engine `/version` document.
    Docker,
}

impl Cli {
    /// Tracing filter for the requested verbosity.
    #[must_use]
    pub const fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// Render build metadata in the given format.
///
/// Docker output combines `meta` with facts about the current host.
pub fn render(format: Format, meta: &BuildMetadata) -> Result<String> {
    tracing::debug!(?format, "Rendering build metadata");

    let rendered = match format {
        Format::Text => render_text(meta),
        Format::Json => serde_json::to_string_pretty(meta)?,
        Format::Toml => toml::to_string_pretty(meta)?,
        Format::Docker => {
            serde_json::to_string_pretty(&VersionInfo::new(meta, &HostInfo::current()))?
        }
    };
    Ok(rendered)
}

fn render_text(meta: &BuildMetadata) -> String {
    meta.entries()
        .iter()
        .fold(String::new(), |mut out, (key, value)| {
            let _ = writeln!(out, "{key}: {value}");
            out
        })
}
