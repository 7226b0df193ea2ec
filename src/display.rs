/// Terminal output for the countdown: the remaining-time line and the bell.
use std::io::{self, Write};
use std::time::Duration;

use crate::duration::format_duration;

pub const CLEAR_SCREEN: &str = "\x1b[2J";
pub const CURSOR_HOME: &str = "\x1b[H";
pub const BELL: &str = "\x07"; // ASCII bell character

/// Where the engine sends its two visible effects.
pub trait Screen {
    /// Redraw the remaining time at the top-left corner.
    fn show(&mut self, remaining: Duration) -> io::Result<()>;
    /// Emit one audible alert.
    fn bell(&mut self) -> io::Result<()>;
}

/// ANSI terminal screen writing to any byte sink.
pub struct Terminal<W: Write> {
    out: W,
}

impl Terminal<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Terminal<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Screen for Terminal<W> {
    fn show(&mut self, remaining: Duration) -> io::Result<()> {
        writeln!(
            self.out,
            "{CLEAR_SCREEN}{CURSOR_HOME}{}",
            format_duration(remaining)
        )?;
        self.out.flush()
    }

    fn bell(&mut self) -> io::Result<()> {
        self.out.write_all(BELL.as_bytes())?;
        self.out.flush()
    }
}
