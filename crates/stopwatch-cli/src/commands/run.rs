use std::io::BufRead;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::time::{Duration, Instant};

use clap::Args;
use stopwatch_core::{Config, FramePacer, InputEvent, KeyBindings, MonotonicClock, Stopwatch};
use tracing::{debug, info, warn};

use crate::terminal::TerminalSurface;

/// Longest the loop sleeps before checking for input again.
const INPUT_POLL: Duration = Duration::from_millis(5);

#[derive(Args)]
pub struct RunArgs {
    /// Start running immediately instead of waiting for the first toggle
    #[arg(long)]
    start: bool,
    /// Stop after this many seconds
    #[arg(long = "for", value_name = "SECS")]
    duration_secs: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Command {
    Input(InputEvent),
    Quit,
}

/// Map one stdin line to a command.
///
/// A bare line and `space` press the bound toggle key, `esc` the bound
/// clear key, whatever those are configured to.
fn parse_command(line: &str, keys: &KeyBindings) -> Option<Command> {
    let line = line.trim();
    let command = match line.to_ascii_lowercase().as_str() {
        "" | "space" => Command::Input(InputEvent::KeyDown(keys.toggle)),
        "esc" | "escape" => Command::Input(InputEvent::KeyDown(keys.clear)),
        "t" | "toggle" => Command::Input(InputEvent::ToggleClicked),
        "c" | "clear" => Command::Input(InputEvent::ClearClicked),
        "q" | "quit" | "exit" => Command::Quit,
        _ => Command::Input(InputEvent::KeyDown(line.parse().ok()?)),
    };
    Some(command)
}

fn spawn_stdin_reader() -> Receiver<String> {
    let (tx, rx) = mpsc::channel();
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    rx
}

pub fn run(args: RunArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let deadline = match args.duration_secs {
        Some(secs) if secs.is_finite() && secs >= 0.0 => {
            Some(Instant::now() + Duration::from_secs_f64(secs))
        }
        Some(secs) => return Err(format!("invalid duration: {secs}").into()),
        None => None,
    };

    let mut sw = Stopwatch::with_options(
        MonotonicClock::new(),
        FramePacer::from_millis(config.frames.interval_ms),
        TerminalSurface::stderr(),
        config.stopwatch_options(),
    );
    info!(interval_ms = config.frames.interval_ms, "stopwatch running");

    if args.start {
        if let Some(event) = sw.start() {
            println!("{}", serde_json::to_string(&event)?);
        }
    }

    let input = spawn_stdin_reader();
    let mut input_open = true;

    'frames: loop {
        while input_open {
            match input.try_recv() {
                Ok(line) => match parse_command(&line, &config.keys) {
                    Some(Command::Quit) => break 'frames,
                    Some(Command::Input(event)) => {
                        let outcome = sw.handle_input(event);
                        if let Some(event) = outcome.event {
                            println!("{}", serde_json::to_string(&event)?);
                        }
                    }
                    None => warn!(input = %line, "unrecognised input"),
                },
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    debug!("stdin closed");
                    input_open = false;
                }
            }
        }
        if !input_open && deadline.is_none() {
            break;
        }

        sw.pump();

        let now = Instant::now();
        if deadline.is_some_and(|d| now >= d) {
            break;
        }
        let wake = [sw.scheduler().next_deadline(), deadline]
            .into_iter()
            .flatten()
            .min()
            .map_or(INPUT_POLL, |at| at.saturating_duration_since(now).min(INPUT_POLL));
        std::thread::sleep(wake);
    }

    eprintln!();
    println!("{}", serde_json::to_string(&sw.snapshot())?);
    Ok(())
}
