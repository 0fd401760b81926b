//! The stream driver.
//!
//! Reads a script one line at a time, runs each command through the API and
//! writes the rendered result before the next line is read. End of input is the
//! normal way a run finishes.
//!
//! A fatal error (unreadable input, malformed line, failed write) stops the run.
//! Output produced by earlier lines is flushed to the sink before the error is
//! returned, so it survives in the output file.

use crate::api::ShelfApi;
use crate::error::Result;
use crate::render::{render_result, RenderOptions};
use crate::script::{parse_line, Line, Skip};
use crate::store::ItemStore;
use std::io::{BufRead, Write};
use tracing::{debug, info, trace, warn};

/// Counters for a finished run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    pub lines_read: usize,
    pub commands_run: usize,
    pub lines_ignored: usize,
}

pub fn run_script<S, R, W>(
    api: &mut ShelfApi<S>,
    input: R,
    output: &mut W,
    options: &RenderOptions,
) -> Result<RunReport>
where
    S: ItemStore,
    R: BufRead,
    W: Write,
{
    let mut report = RunReport::default();
    let outcome = process_lines(api, input, output, options, &mut report);
    let flushed = output.flush();
    outcome?;
    flushed?;

    info!(
        lines = report.lines_read,
        commands = report.commands_run,
        ignored = report.lines_ignored,
        items = api.catalog().len(),
        "run finished"
    );
    Ok(report)
}

fn process_lines<S, R, W>(
    api: &mut ShelfApi<S>,
    input: R,
    output: &mut W,
    options: &RenderOptions,
    report: &mut RunReport,
) -> Result<()>
where
    S: ItemStore,
    R: BufRead,
    W: Write,
{
    for (index, line) in input.lines().enumerate() {
        let number = index + 1;
        let text = line?;
        report.lines_read += 1;

        match parse_line(number, &text)? {
            Line::Ignored(Skip::UnknownCategory(category)) => {
                warn!(line = number, category = %category, "unknown category, line ignored");
                report.lines_ignored += 1;
            }
            Line::Ignored(skip) => {
                trace!(line = number, reason = ?skip, "line ignored");
                report.lines_ignored += 1;
            }
            Line::Command(command) => {
                debug!(line = number, command = command.keyword(), "dispatching");
                let result = api.execute(command)?;
                for item in &result.affected_items {
                    debug!(
                        line = number,
                        category = %item.category(),
                        barcode = item.barcode(),
                        "item added"
                    );
                }
                for rendered in render_result(&result, options) {
                    writeln!(output, "{}", rendered)?;
                }
                report.commands_run += 1;
            }
        }
    }
    Ok(())
}
