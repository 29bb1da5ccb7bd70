//! `weigh check` command - tolerance range and pass/fail for one weighing

use miette::{IntoDiagnostic, Result};
use serde::Serialize;

use crate::cli::helpers::print_result;
use crate::cli::output::{effective_format, print_structured};
use crate::cli::GlobalOpts;
use crate::core::form::WeighingForm;
use crate::core::tolerance::{WeighingInput, WeighingResult, WeighingStatus};
use crate::core::unit::Unit;
use crate::core::Config;

#[derive(clap::Args, Debug)]
pub struct CheckArgs {
    /// Theoretical weight per portion (as per the AP sheet)
    #[arg(long, short = 'w', allow_hyphen_values = true)]
    pub weight: Option<String>,

    /// Unit of the theoretical weight [default: config, else mg]
    #[arg(long, short = 'u')]
    pub unit: Option<Unit>,

    /// Number of times the weighing is to be taken
    #[arg(long, short = 't', allow_hyphen_values = true)]
    pub times: Option<String>,

    /// Unit for the total and the acceptable range [default: config, else mg]
    #[arg(long, short = 'T')]
    pub total_unit: Option<Unit>,

    /// Actual weight taken, in the total unit (omit if not weighed yet)
    #[arg(long, short = 'a', allow_hyphen_values = true)]
    pub actual: Option<String>,

    /// Exit with an error when the actual weight fails the check
    #[arg(long)]
    pub strict: bool,
}

/// Structured output of `weigh check`
#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub input: WeighingInput,
    pub result: WeighingResult,
    pub total: String,
    pub range: String,
    pub unit: Unit,
}

impl CheckReport {
    pub fn new(input: WeighingInput, result: WeighingResult) -> Self {
        Self {
            total: result.total_display(),
            range: result.range_display(),
            unit: input.unit2,
            input,
            result,
        }
    }
}

/// Build the form the flags describe
pub fn form_from_args(args: &CheckArgs, config: &Config) -> WeighingForm {
    WeighingForm {
        theoretical_weight: args.weight.clone().unwrap_or_default(),
        unit1: args.unit.unwrap_or(config.default_unit),
        times: args.times.clone().unwrap_or_default(),
        unit2: args.total_unit.unwrap_or(config.default_total_unit),
        actual_weight: args.actual.clone().unwrap_or_default(),
    }
}

pub fn run(args: CheckArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load().into_diagnostic()?;
    let form = form_from_args(&args, &config);
    let input = form.input();
    let result = form.evaluate();
    tracing::debug!(?input, ?result, "evaluated weighing");

    let format = effective_format(global.format, config.format);
    let report = CheckReport::new(input, result);
    if !print_structured(&report, format)? {
        print_result(&result, input.unit2);
    }

    if args.strict && result.status == WeighingStatus::Fail {
        return Err(miette::miette!(
            "Actual weight is outside the acceptable range ({} {})",
            report.range,
            report.unit
        ));
    }

    Ok(())
}
