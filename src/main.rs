use std::io::{self, BufWriter};
use std::process::ExitCode;

use anyhow::{Context, Result};
use reducedata::data::loader;
use reducedata::{ReduceError, ReducerConfig};

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Downstream closed the pipe (e.g. `| head -1`): not our failure.
            if e
                .downcast_ref::<ReduceError>()
                .is_some_and(ReduceError::is_broken_pipe)
            {
                return ExitCode::SUCCESS;
            }
            log::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let config = ReducerConfig::default();
    let stdin = io::stdin();
    let mut out = BufWriter::new(io::stdout().lock());

    let dataset = loader::reduce(stdin.lock(), &mut out, &config).context("reducing stdin")?;
    log::info!(
        "summarised {} columns over {} rows",
        dataset.width(),
        dataset.row_count()
    );
    Ok(())
}
