//! logsum CLI: summarize a folder of JSONL log files.

use anyhow::Result;
use clap::Parser;
use logsum::engine::arg_parser::Cli;
use logsum::engine::handle_run;
use std::time::Instant;

fn main() -> Result<()> {
    let start_time = Instant::now();
    let cli = Cli::parse();
    handle_run(&cli)?;
    log::debug!("Total time: {:?}", start_time.elapsed());
    Ok(())
}
