use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "umbra")]
#[command(about = "Umbra - folds dark-mode scoped rules into a single-theme stylesheet", long_about = None)]
pub struct Cli {
    /// Stylesheet to process
    pub css_file: PathBuf,
}
