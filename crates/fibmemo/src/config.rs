//! Application configuration from CLI flags and environment.

use clap::Parser;

use fibmemo_core::{Evaluation, FibError, DEFAULT_INDEX};

/// fibmemo: the nth Fibonacci number by memoized recursion.
#[derive(Parser, Debug)]
#[command(name = "fibmemo", version, about)]
pub struct AppConfig {
    /// Fibonacci index to compute.
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_INDEX,
        env = "FIBMEMO_N",
        allow_negative_numbers = true
    )]
    pub n: i64,

    /// Evaluation to use: recursive or worklist.
    #[arg(long, default_value = "recursive")]
    pub algo: String,

    /// Quiet mode (only output the number).
    #[arg(short, long)]
    pub quiet: bool,

    /// Print cache statistics to stderr.
    #[arg(short, long)]
    pub stats: bool,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Resolve `--algo` into an evaluation.
    pub fn evaluation(&self) -> Result<Evaluation, FibError> {
        self.algo.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> AppConfig {
        AppConfig::try_parse_from(std::iter::once("fibmemo").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn defaults() {
        let config = parse(&[]);
        assert_eq!(config.algo, "recursive");
        assert!(!config.quiet);
        assert!(!config.stats);
        assert_eq!(config.evaluation(), Ok(Evaluation::Recursive));
    }

    #[test]
    fn negative_index_parses() {
        let config = parse(&["-n", "-5"]);
        assert_eq!(config.n, -5);
    }

    #[test]
    fn worklist_algo() {
        let config = parse(&["--algo", "worklist", "-q", "-s"]);
        assert_eq!(config.evaluation(), Ok(Evaluation::Worklist));
        assert!(config.quiet);
        assert!(config.stats);
    }

    #[test]
    fn unknown_algo_is_config_error() {
        let config = parse(&["--algo", "matrix"]);
        assert!(matches!(config.evaluation(), Err(FibError::Config(_))));
    }

    #[test]
    fn non_numeric_index_is_rejected() {
        assert!(AppConfig::try_parse_from(["fibmemo", "-n", "abc"]).is_err());
    }
}
