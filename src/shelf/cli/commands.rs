use super::logging;
use super::setup::parse_args;
use shelf::api::ShelfApi;
use shelf::config::ShelfConfig;
use shelf::error::{Result, ShelfError};
use shelf::runner::{run_script, RunReport};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use tracing::debug;

pub fn run() -> Result<()> {
    let cli = parse_args();

    let config = match &cli.config {
        Some(path) => ShelfConfig::load(path)?,
        None => ShelfConfig::default(),
    };
    logging::init(cli.verbose, &config.log_level);

    let report = process_files(&cli.input, &cli.output, &config)?;
    debug!(?report, "processed {}", cli.input.display());
    Ok(())
}

fn process_files(input: &Path, output: &Path, config: &ShelfConfig) -> Result<RunReport> {
    // Output first: a missing input still leaves a fresh, empty output file.
    let output_file = File::create(output).map_err(|e| ShelfError::open(output, e))?;
    let input_file = File::open(input).map_err(|e| ShelfError::open(input, e))?;

    let mut writer = BufWriter::new(output_file);
    let mut api = ShelfApi::in_memory();
    run_script(
        &mut api,
        BufReader::new(input_file),
        &mut writer,
        &config.render_options(),
    )
}
