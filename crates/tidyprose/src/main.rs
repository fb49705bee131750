//! tidyprose CLI
#![deny(unsafe_code)]

use std::path::PathBuf;

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Parser;
use tidyprose::{Cli, Commands, commands};
use tidyprose_core::config::ConfigLoader;
use tracing::debug;

mod observability;

fn utf8_path(path: PathBuf, what: &str) -> anyhow::Result<Utf8PathBuf> {
    Utf8PathBuf::try_from(path).map_err(|e| {
        anyhow::anyhow!("{what} is not valid UTF-8: {}", e.into_path_buf().display())
    })
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.color.apply();

    if cli.version_only {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // arg_required_else_help guarantees a subcommand when --version-only is absent
    let Some(command) = cli.command else {
        return Ok(());
    };

    if let Some(ref dir) = cli.chdir {
        std::env::set_current_dir(dir)
            .with_context(|| format!("failed to change directory to {}", dir.display()))?;
    }

    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    let mut loader = ConfigLoader::new().with_project_search(utf8_path(cwd, "current directory")?);
    if let Some(config_path) = cli.config.clone() {
        loader = loader.with_file(utf8_path(config_path, "config path")?);
    }
    let (config, sources) = loader.load().context("failed to load configuration")?;

    let obs_config = observability::ObservabilityConfig::from_env_with_overrides(
        config.log_dir.as_ref().map(|dir| dir.as_std_path().to_path_buf()),
    );
    let filter = observability::env_filter(cli.quiet, cli.verbose, config.log_level.as_str());
    let _guard = observability::init_observability(&obs_config, filter)
        .context("failed to initialize logging")?;

    debug!(
        verbose = cli.verbose,
        quiet = cli.quiet,
        json = cli.json,
        color = ?cli.color,
        config_file = ?sources.primary_file(),
        "CLI initialized"
    );

    let result = match command {
        Commands::Check(args) => {
            commands::check::cmd_check(args, cli.json, &config, config.input_limit())
        }
        Commands::Words(args) => commands::words::cmd_words(args, cli.json, &config),
        Commands::Info(args) => commands::info::cmd_info(args, cli.json, &config, &sources),
    };
    if let Err(ref err) = result {
        tracing::error!(error = %err, "command failed");
    }
    result
}
