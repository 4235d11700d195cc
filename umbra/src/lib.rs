pub mod cli;
pub mod merge;
pub mod util;
