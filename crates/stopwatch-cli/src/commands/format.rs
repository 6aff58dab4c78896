use clap::Args;
use stopwatch_core::{format_clock, TimeParts};

#[derive(Args)]
pub struct FormatArgs {
    /// Elapsed time in milliseconds (fractions are floored)
    millis: f64,
    /// Print the decomposed parts as JSON instead of the clock string
    #[arg(long)]
    parts: bool,
}

pub fn run(args: FormatArgs) -> Result<(), Box<dyn std::error::Error>> {
    if !args.millis.is_finite() || args.millis < 0.0 {
        return Err(format!("expected a non-negative number of milliseconds, got {}", args.millis).into());
    }
    if args.parts {
        let parts = TimeParts::from_millis(args.millis);
        println!("{}", serde_json::to_string_pretty(&parts)?);
    } else {
        println!("{}", format_clock(args.millis));
    }
    Ok(())
}
