//! Deterministic replay of a scripted timeline.
//!
//! A script is a whitespace-separated list of `action@ms` steps, e.g.
//! `start@0 frame@250 pause@500 resume@900 frame@1200 clear@1500`.
//! Times are monotonic milliseconds and must not go backwards.

use clap::Args;
use serde::Serialize;
use stopwatch_core::{
    Config, Event, Frame, InputEvent, KeyCode, ManualClock, ManualScheduler, Mode,
    RecordingSurface, Stopwatch,
};

#[derive(Args)]
pub struct ReplayArgs {
    /// Timeline script, e.g. "start@0 frame@250 pause@500"
    script: String,
    /// Pretty-print each output record
    #[arg(long)]
    pretty: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum StepAction {
    Start,
    Pause,
    Resume,
    Clear,
    Toggle,
    Frame,
    Key(KeyCode),
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Step {
    at_ms: f64,
    action: StepAction,
}

#[derive(Debug, Serialize)]
struct ReplayRecord {
    at_ms: f64,
    step: String,
    mode: Mode,
    #[serde(skip_serializing_if = "Option::is_none")]
    event: Option<Event>,
    #[serde(skip_serializing_if = "Option::is_none")]
    frame: Option<Frame>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    prevent_default: bool,
}

fn parse_step(token: &str) -> Result<Step, Box<dyn std::error::Error>> {
    let (name, at) = token
        .split_once('@')
        .ok_or_else(|| format!("step '{token}' is missing '@<ms>'"))?;
    let at_ms: f64 = at
        .parse()
        .map_err(|_| format!("step '{token}' has an invalid time '{at}'"))?;
    if !at_ms.is_finite() || at_ms < 0.0 {
        return Err(format!("step '{token}' has a negative or non-finite time").into());
    }
    let action = match name {
        "start" => StepAction::Start,
        "pause" => StepAction::Pause,
        "resume" => StepAction::Resume,
        "clear" => StepAction::Clear,
        "toggle" => StepAction::Toggle,
        "frame" => StepAction::Frame,
        other => match other.strip_prefix("key:") {
            Some(code) => StepAction::Key(code.parse()?),
            None => return Err(format!("unknown step '{name}'").into()),
        },
    };
    Ok(Step { at_ms, action })
}

fn parse_script(script: &str) -> Result<Vec<Step>, Box<dyn std::error::Error>> {
    let mut steps = Vec::new();
    let mut last = 0.0;
    for token in script.split_whitespace() {
        let step = parse_step(token)?;
        if step.at_ms < last {
            return Err(format!("step '{token}' goes back in time (previous step at {last}ms)").into());
        }
        last = step.at_ms;
        steps.push(step);
    }
    if steps.is_empty() {
        return Err("script is empty".into());
    }
    Ok(steps)
}

fn apply(
    sw: &mut Stopwatch<ManualClock, ManualScheduler, RecordingSurface>,
    step: Step,
) -> ReplayRecord {
    sw.clock_mut().set(step.at_ms);
    let mut prevent_default = false;
    let mut frame = None;
    let (event, label) = match step.action {
        StepAction::Start => (sw.start(), "start".to_string()),
        StepAction::Pause => (sw.pause(), "pause".to_string()),
        StepAction::Resume => (sw.resume(), "resume".to_string()),
        StepAction::Clear => (sw.clear(), "clear".to_string()),
        StepAction::Toggle => (sw.toggle(), "toggle".to_string()),
        StepAction::Frame => {
            frame = sw.pump();
            (None, "frame".to_string())
        }
        StepAction::Key(code) => {
            let outcome = sw.handle_input(InputEvent::KeyDown(code));
            prevent_default = outcome.prevent_default;
            (outcome.event, format!("key:{code}"))
        }
    };
    ReplayRecord {
        at_ms: step.at_ms,
        step: label,
        mode: sw.mode(),
        event,
        frame,
        prevent_default,
    }
}

pub fn run(args: ReplayArgs) -> Result<(), Box<dyn std::error::Error>> {
    let steps = parse_script(&args.script)?;
    let config = Config::load()?;
    let mut sw = Stopwatch::with_options(
        ManualClock::new(0.0),
        ManualScheduler::new(),
        RecordingSurface::new(),
        config.stopwatch_options(),
    );

    for step in steps {
        let record = apply(&mut sw, step);
        let json = if args.pretty {
            serde_json::to_string_pretty(&record)?
        } else {
            serde_json::to_string(&record)?
        };
        println!("{json}");
    }

    println!("{}", serde_json::to_string(&sw.snapshot())?);
    Ok(())
}
