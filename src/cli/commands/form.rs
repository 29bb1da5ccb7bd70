//! `weigh form` command - the weighing form as a terminal session
//!
//! On a terminal the fields are prompted for and the result is shown after
//! each pass. With piped stdin each line is an edit (`field=value` or
//! `clear`) and the recomputed result is printed after every accepted line.

use console::style;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use miette::{IntoDiagnostic, Result};
use std::io::{self, BufRead};

use crate::cli::commands::check::CheckReport;
use crate::cli::helpers::{print_result, stdin_has_data};
use crate::cli::output::effective_format;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::form::{FormEdit, WeighingForm};
use crate::core::tolerance::WeighingResult;
use crate::core::unit::Unit;
use crate::core::Config;

#[derive(clap::Args, Debug)]
pub struct FormArgs {
    /// Start from an empty form instead of the worked example
    #[arg(long)]
    pub blank: bool,
}

pub fn run(args: FormArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load().into_diagnostic()?;
    let mut form = if args.blank {
        WeighingForm {
            unit1: config.default_unit,
            unit2: config.default_total_unit,
            ..WeighingForm::cleared()
        }
    } else {
        WeighingForm::new()
    };

    let format = effective_format(global.format, config.format);
    if stdin_has_data() {
        let stdin = io::stdin();
        run_piped(&mut form, stdin.lock(), format)
    } else {
        run_interactive(&mut form)
    }
}

/// Apply edits line by line, printing a result after each accepted edit
///
/// Blank lines and `#` comments are ignored. Bad lines are reported on stderr
/// and skipped.
pub fn run_piped<R: BufRead>(
    form: &mut WeighingForm,
    reader: R,
    format: OutputFormat,
) -> Result<()> {
    let mut rejected = 0usize;

    for (n, line) in reader.lines().enumerate() {
        let line = line.into_diagnostic()?;
        if line.trim().is_empty() || line.trim_start().starts_with('#') {
            continue;
        }

        match line.parse::<FormEdit>() {
            Ok(edit) => {
                form.apply(edit);
                print_line(form, format)?;
            }
            Err(e) => {
                rejected += 1;
                eprintln!("{} line {}: {}", style("!").yellow(), n + 1, e);
            }
        }
    }

    if rejected > 0 {
        tracing::warn!(rejected, "skipped unrecognised form lines");
    }
    Ok(())
}

fn print_line(form: &WeighingForm, format: OutputFormat) -> Result<()> {
    let input = form.input();
    let result = form.evaluate();
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string(&CheckReport::new(input, result)).into_diagnostic()?;
            println!("{}", json);
        }
        OutputFormat::Yaml => {
            let yaml = serde_yml::to_string(&CheckReport::new(input, result)).into_diagnostic()?;
            println!("---");
            print!("{}", yaml);
        }
        OutputFormat::Text | OutputFormat::Auto => {
            println!("{}", summary_line(&result, input.unit2));
        }
    }
    Ok(())
}

/// One-line result used for piped sessions
pub fn summary_line(result: &WeighingResult, unit: Unit) -> String {
    format!(
        "total={} {unit} range={} {unit} status={}",
        result.total_display(),
        result.range_display(),
        result.status.label(),
    )
}

fn run_interactive(form: &mut WeighingForm) -> Result<()> {
    let theme = ColorfulTheme::default();
    let units = [Unit::Mg, Unit::G];
    let unit_names = ["mg", "g"];

    println!("{} Weighing form", style("◆").cyan());

    loop {
        form.theoretical_weight = Input::with_theme(&theme)
            .with_prompt("Theoretical weight (as per AP sheet)")
            .with_initial_text(form.theoretical_weight.clone())
            .allow_empty(true)
            .interact_text()
            .into_diagnostic()?;

        let unit1 = Select::with_theme(&theme)
            .with_prompt("Theoretical weight unit")
            .items(&unit_names)
            .default(units.iter().position(|u| *u == form.unit1).unwrap_or(0))
            .interact()
            .into_diagnostic()?;
        form.unit1 = units[unit1];

        form.times = Input::with_theme(&theme)
            .with_prompt("No. of times weighing to be taken")
            .with_initial_text(form.times.clone())
            .allow_empty(true)
            .interact_text()
            .into_diagnostic()?;

        let unit2 = Select::with_theme(&theme)
            .with_prompt("Total weight unit")
            .items(&unit_names)
            .default(units.iter().position(|u| *u == form.unit2).unwrap_or(0))
            .interact()
            .into_diagnostic()?;
        form.unit2 = units[unit2];

        // Show the range before asking for the measurement
        let preview = form.evaluate();
        println!(
            "{} {} {}",
            style("Acceptable range:").bold(),
            preview.range_display(),
            form.unit2
        );

        form.actual_weight = Input::with_theme(&theme)
            .with_prompt("Actual weight taken")
            .with_initial_text(form.actual_weight.clone())
            .allow_empty(true)
            .interact_text()
            .into_diagnostic()?;

        let result = form.evaluate();
        println!();
        print_result(&result, form.unit2);
        tracing::info!(status = %result.status, "form evaluated");

        let next = Select::with_theme(&theme)
            .with_prompt("Next")
            .items(&["Edit", "Clear all", "Quit"])
            .default(0)
            .interact()
            .into_diagnostic()?;
        match next {
            0 => {}
            1 => form.clear_all(),
            _ => return Ok(()),
        }
    }
}
