//! rShiftCheck main entrypoint.

use rshiftcheck::run;
use rshiftcheck::ui::messages::error;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(false) => {}
        Ok(true) => std::process::exit(2),
        Err(e) => {
            error(format!("Error: {e}"));
            std::process::exit(1);
        }
    }
}
