//! fibmemo: prints the nth Fibonacci number computed by memoized recursion.

use fibmemo_lib::{app, config, errors};
use tracing::level_filters::LevelFilter;

fn main() {
    // Initialize tracing on stderr so stdout carries only the result
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .init();

    let config = config::AppConfig::parse();
    if let Err(err) = app::run(&config) {
        eprintln!("Error: {err:#}");
        std::process::exit(errors::exit_code(&err));
    }
}
