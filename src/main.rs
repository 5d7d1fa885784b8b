mod buffer;
mod cli;
mod config;
mod populate;
mod report;

use anyhow::Result;
use clap::Parser;

use cli::Cli;
use config::Config;
use populate::PopulateConfig;
use report::Progress;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    let pop = PopulateConfig::new(cli.path.clone(), cli.size, cli.dry_run);
    let buf = buffer::generate(buffer::BUFFER_SIZE);
    let progress = Progress::new(
        config.progress_interval.unwrap_or(report::DEFAULT_PROGRESS_INTERVAL),
        config.quiet,
    );

    populate::run(&pop, &buf, &progress)?;

    Ok(())
}
