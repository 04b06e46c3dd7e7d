//! CLI command handler: build options from flags and run the summary.

use anyhow::Result;

use crate::engine::arg_parser::Cli;
use crate::summary::summarize_dir;
use crate::types::Opts;
use crate::utils::setup_logging;

fn setup_opts(cli: &Cli) -> Opts {
    setup_logging(cli.verbose);
    Opts {
        num_threads: cli.threads,
        exclude: cli.exclude.clone(),
        verbose: cli.verbose,
        strict: cli.strict,
        prefix_len: cli.prefix_len,
        top: cli.top,
        json: cli.json,
    }
}

/// Run the summary over the given folder. Fatal errors (bad input path,
/// strict-mode file failure, Ctrl+C) propagate to `main` and exit non-zero.
pub fn handle_run(cli: &Cli) -> Result<()> {
    let opts = setup_opts(cli);
    summarize_dir(&cli.dir, &opts)?;
    Ok(())
}
