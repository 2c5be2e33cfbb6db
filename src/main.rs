use clap::Parser;

use semver_value::cli::{Cli, execute};
use semver_value::config::{CliConfig, config_path};
use semver_value::logging;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_file = cli.config.clone().unwrap_or_else(config_path);
    let config = CliConfig::load(&config_file)?;
    let _guard = logging::init(&config.log)?;

    let format = cli.format.unwrap_or(config.output.format);
    let output = execute(&cli.command, format)?;
    println!("{}", output);

    Ok(())
}
