use anyhow::Result;
use clap::Parser;
use sable::cli::Cli;
use sable::config::load_config;
use sable::rewrite::rewrite_source;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config()?;

    let count = rewrite_source(&cli.source_file, &config.replacements)?;
    println!(
        "Replaced {count} dark-mode ternaries in {}",
        cli.source_file.display()
    );

    Ok(())
}
