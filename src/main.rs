//! gitgather: gather repository files into a single context document
//!
//! Reads the tracked (or all) files of a repository and writes them, each
//! annotated with its relative path, to one output file.

use anyhow::Result;

fn main() -> Result<()> {
    gitgather::cli::run()
}
