use anyhow::Result;
use clap::Parser;
use umbra::cli::Cli;
use umbra::merge::merge_stylesheet;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let output = merge_stylesheet(&cli.css_file)?;
    println!("Merged stylesheet written to {}", output.display());

    Ok(())
}
