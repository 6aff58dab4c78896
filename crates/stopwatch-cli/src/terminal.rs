//! Terminal rendition of the stopwatch surface.
//!
//! The clock line is redrawn in place on stderr so stdout stays free for
//! JSON event output. Every frame ends with the clear flag, so that is where
//! the line gets redrawn. The title goes to the terminal emulator's window
//! title through an OSC 0 sequence when stderr is a TTY.

use std::io::{IsTerminal, Write};

use stopwatch_core::surface::{AppearanceSink, ControlSink, DisplaySink, TitleSink};
use stopwatch_core::timer::DisplayFields;
use stopwatch_core::Appearance;

pub struct TerminalSurface<W: Write> {
    out: W,
    tty: bool,
    display: DisplayFields,
    label: String,
    hint: String,
    clear_enabled: bool,
}

impl TerminalSurface<std::io::Stderr> {
    pub fn stderr() -> Self {
        let err = std::io::stderr();
        let tty = err.is_terminal();
        Self::new(err, tty)
    }
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W, tty: bool) -> Self {
        Self {
            out,
            tty,
            display: DisplayFields::zero(),
            label: String::new(),
            hint: String::new(),
            clear_enabled: false,
        }
    }

    fn line(&self) -> String {
        let clear = if self.clear_enabled { "  [clear]" } else { "" };
        format!("{}  {} ({}){}", self.display, self.hint, self.label, clear)
    }

    fn redraw(&mut self) {
        // Nothing meaningful to show until the first appearance arrives.
        if self.label.is_empty() {
            return;
        }
        let line = self.line();
        // Output is best effort; a closed stderr must not stop the clock.
        let _ = if self.tty {
            write!(self.out, "\r\x1b[2K{line}")
        } else {
            writeln!(self.out, "{line}")
        };
        let _ = self.out.flush();
    }
}

impl<W: Write> DisplaySink for TerminalSurface<W> {
    fn set_display(&mut self, fields: &DisplayFields) {
        self.display = fields.clone();
    }
}

impl<W: Write> TitleSink for TerminalSurface<W> {
    fn set_title(&mut self, title: &str) {
        if self.tty {
            let _ = write!(self.out, "\x1b]0;{title}\x07");
        }
    }
}

impl<W: Write> ControlSink for TerminalSurface<W> {
    fn set_clear_enabled(&mut self, enabled: bool) {
        self.clear_enabled = enabled;
        self.redraw();
    }
}

impl<W: Write> AppearanceSink for TerminalSurface<W> {
    fn set_appearance(&mut self, appearance: &Appearance) {
        self.label = appearance.label.clone();
        self.hint = appearance.hint.clone();
        self.redraw();
    }
}
