mod menu;
mod report;
mod session;

use rubberband::Simulator;
use session::{Session, SessionConfig};
use std::error::Error;
use std::io;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    // Diagnostics go to stderr so they never interleave with the menu on
    // stdout. RUST_LOG overrides the default filter.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    // Two identical unit bands; the menu picks how they are joined.
    let simulator = Simulator::new();

    // Blocking console session. A non-numeric displacement ends it with an
    // error, which exits the process with a diagnostic.
    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(
        simulator,
        SessionConfig::default(),
        stdin.lock(),
        stdout.lock(),
    )
    .run()?;

    Ok(())
}
