//! Menu-driven exploration of the force laws over a text console.

use std::io::{BufRead, Write};
use std::num::ParseFloatError;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use rubberband::plot::{self, DEFAULT_PLOT_PATH};
use rubberband::{Arrangement, PlotError, Simulator};
use thiserror::Error;
use tracing::{debug, info};

use crate::menu::{MenuChoice, MENU};
use crate::report::render_analysis;

/// Error that ends an interactive session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Returned when reading from or writing to the console fails.
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
    /// Returned when the displacement entry is not a real number.
    #[error("invalid displacement {input:?}: {source}")]
    InvalidDisplacement {
        /// The text that was entered, without its line ending.
        input: String,
        /// Reason the text was rejected.
        #[source]
        source: ParseFloatError,
    },
    /// Returned when input ends while a displacement is expected.
    #[error("input ended while waiting for a displacement")]
    UnexpectedEndOfInput,
    /// Returned when the comparison chart cannot be written.
    #[error(transparent)]
    Plot(#[from] PlotError),
}

/// Settings for an interactive session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    /// Where the comparison chart is written.
    pub plot_path: PathBuf,
    /// Pause after each computed force so the result can be read.
    pub pause: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            plot_path: PathBuf::from(DEFAULT_PLOT_PATH),
            pause: Duration::from_secs(1),
        }
    }
}

/// Interactive loop reading choices from `input` and writing to `output`.
pub struct Session<R, W> {
    /// Force laws being explored.
    simulator: Simulator,
    /// Output location and pacing.
    config: SessionConfig,
    /// Source of menu choices and displacements.
    input: R,
    /// Destination for the menu, prompts and results.
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session over the given console streams.
    pub fn new(simulator: Simulator, config: SessionConfig, input: R, output: W) -> Self {
        Self {
            simulator,
            config,
            input,
            output,
        }
    }

    /// Run until the exit choice is made or the input is exhausted at the menu.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::InvalidDisplacement`] for a non-numeric
    /// displacement and propagates console and chart failures.
    pub fn run(&mut self) -> Result<(), SessionError> {
        info!("session started");
        writeln!(self.output, "\nRubber Band Arrangement Simulator")?;
        writeln!(self.output, "================================")?;

        loop {
            writeln!(self.output, "\n{MENU}")?;
            let Some(line) = self.prompt("\nEnter choice (1-5): ")? else {
                debug!("input closed at menu");
                break;
            };
            match MenuChoice::parse(&line) {
                Some(MenuChoice::Exit) => break,
                Some(MenuChoice::ShowComparison) => self.show_comparison()?,
                Some(MenuChoice::Simulate(arrangement)) => self.simulate(arrangement)?,
                None => debug!(choice = %line.trim(), "ignoring unrecognised choice"),
            }
        }

        info!("session finished");
        Ok(())
    }

    /// Print `text` and read one line, or `None` at end of input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>, SessionError> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    /// Ask for a displacement and report the force for `arrangement`.
    fn simulate(&mut self, arrangement: Arrangement) -> Result<(), SessionError> {
        debug!(%arrangement, "simulating arrangement");
        writeln!(self.output, "\nSimulating {} arrangement...", arrangement.name())?;
        let line = self
            .prompt("Enter displacement (0-2): ")?
            .ok_or(SessionError::UnexpectedEndOfInput)?;
        let input = line.trim();
        let displacement: f64 = input
            .parse()
            .map_err(|source| SessionError::InvalidDisplacement {
                input: input.to_owned(),
                source,
            })?;

        let force = self.simulator.force(arrangement, displacement);
        debug!(%arrangement, displacement, force, "computed force");
        write!(self.output, "{}", render_analysis(arrangement, force))?;
        self.output.flush()?;

        if !self.config.pause.is_zero() {
            thread::sleep(self.config.pause);
        }
        Ok(())
    }

    /// Write the comparison chart and tell the user where it went.
    fn show_comparison(&mut self) -> Result<(), SessionError> {
        plot::write_comparison(&self.simulator, &self.config.plot_path)?;
        writeln!(
            self.output,
            "\nComparison plot saved to {}",
            self.config.plot_path.display()
        )?;
        Ok(())
    }
}
