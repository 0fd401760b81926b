//! # CLI Behavior
//!
//! This is the only place that knows about process arguments, files on disk,
//! stderr and exit codes. Everything else works on readers and writers.
//!
//! ## Run Order
//!
//! 1. Parse arguments. Anything other than two positionals prints usage and
//!    exits with status 1.
//! 2. Load the config file if `--config` was given.
//! 3. Install the stderr log subscriber.
//! 4. Create (truncate) the output file, then open the input file. A missing
//!    input therefore still leaves an empty output file behind.
//! 5. Hand both streams to [`shelf::runner::run_script`].
//!
//! ## Module Structure
//!
//! - `commands`: context setup and the run itself
//! - `logging`: tracing subscriber setup
//! - `setup`: argument parsing via clap

mod commands;
mod logging;
pub mod setup;

pub use commands::run;
