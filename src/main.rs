use std::io::Write as _;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use socktainer_buildinfo::{
    BuildMetadata, build_info,
    cli::{self, Cli},
};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr, stdout carries the rendered metadata
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(cli.log_filter()))
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let meta = BuildMetadata::current();
    tracing::info!(
        version = meta.version,
        git_commit = meta.git_commit,
        "Loaded build metadata"
    );

    let output = if cli.short {
        build_info::version_string()
    } else {
        cli::render(cli.format, meta)?
    };

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    if !output.ends_with('\n') {
        stdout.write_all(b"\n")?;
    }
    stdout.flush()?;

    Ok(())
}
