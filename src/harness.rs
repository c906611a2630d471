//! Demonstration harness: runs inputs or cases and prints the outcomes.

use crate::cases::{read_cases, Case};
use crate::config::{HarnessConfig, OutputFormat};
use crate::error::{SubnetError, SubnetResult};
use crate::models::SubnetDetails;
use crate::output::{render_error, render_json, render_text};
use crate::{calculate, calculate_value};
use colored::Colorize;
use std::error::Error;
use std::io::Write;

/// Tally of a harness run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub passed: usize,
    pub failed: usize,
    pub internal_errors: usize,
}

impl RunSummary {
    pub fn success(&self) -> bool {
        self.failed == 0 && self.internal_errors == 0
    }

    fn record(&mut self, passed: bool, result: &SubnetResult<SubnetDetails>) {
        if let Err(SubnetError::InternalError(_)) = result {
            self.internal_errors += 1;
        }
        if passed {
            self.passed += 1;
        } else {
            self.failed += 1;
        }
    }
}

/// Run the configured command line inputs, or the case list if there are none.
pub fn run<W: Write>(config: &HarnessConfig, out: &mut W) -> Result<RunSummary, Box<dyn Error>> {
    if config.inputs.is_empty() {
        let file = read_cases(config.cases_file.as_deref())?;
        run_cases(&file.cases, config.output, out)
    } else {
        run_inputs(&config.inputs, config.output, out)
    }
}

/// Calculate each CIDR string; any rejected input counts as a failure.
pub fn run_inputs<W: Write>(
    inputs: &[String],
    format: OutputFormat,
    out: &mut W,
) -> Result<RunSummary, Box<dyn Error>> {
    let mut summary = RunSummary::default();
    for input in inputs {
        let result = calculate(input);
        write_result(out, &format!("{input:?}"), &result, format)?;
        summary.record(result.is_ok(), &result);
    }
    log::info!("Inputs done: {summary:?}");
    Ok(summary)
}

/// Run each case and compare its outcome to the expectation.
pub fn run_cases<W: Write>(
    cases: &[Case],
    format: OutputFormat,
    out: &mut W,
) -> Result<RunSummary, Box<dyn Error>> {
    let mut summary = RunSummary::default();
    for (i, case) in cases.iter().enumerate() {
        let result = calculate_value(&case.input);
        let passed = match case.expect {
            Some(expect) => expect.matches(&result),
            None => !matches!(result, Err(SubnetError::InternalError(_))),
        };
        let status = if passed { "PASS".green() } else { "FAIL".red() };
        let note = case.note.as_deref().unwrap_or("");
        writeln!(out, "#{:<3} [{status}] {note}", i + 1)?;
        write_result(out, &case.input.to_string(), &result, format)?;
        summary.record(passed, &result);
    }
    writeln!(
        out,
        "# {} passed, {} failed, {} internal errors",
        summary.passed, summary.failed, summary.internal_errors
    )?;
    log::info!("Cases done: {summary:?}");
    Ok(summary)
}

fn write_result<W: Write>(
    out: &mut W,
    label: &str,
    result: &SubnetResult<SubnetDetails>,
    format: OutputFormat,
) -> Result<(), Box<dyn Error>> {
    match result {
        Ok(details) => {
            writeln!(out, "{} {label}", "OK".on_green())?;
            let body = match format {
                OutputFormat::Text => render_text(details),
                OutputFormat::Json => render_json(details)?,
            };
            writeln!(out, "{body}")?;
        }
        Err(e) if e.is_input_error() => {
            writeln!(out, "{} {label}", "ERR".on_yellow())?;
            writeln!(out, "{}", render_error(e))?;
        }
        Err(e) => {
            writeln!(out, "{} {label}", "BUG".on_red())?;
            writeln!(out, "{}", render_error(e).red())?;
        }
    }
    Ok(())
}
