use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sable")]
#[command(about = "Sable - rewrites dark/light ternaries in generated sources to fixed dark values", long_about = None)]
pub struct Cli {
    /// Source file to rewrite in place
    pub source_file: PathBuf,
}
