use std::io;

use meal_builder::{run, DemoConfig, DemoError};

fn init_logging() {
    // stdout carries the meal; diagnostics go to stderr.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<(), DemoError> {
    init_logging();

    let config = DemoConfig::default();
    let stdout = io::stdout();
    run(&config, &mut stdout.lock())
}
