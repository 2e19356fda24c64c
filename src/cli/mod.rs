// src/cli/mod.rs — CLI definition (clap derive)

pub mod run;

use std::io::Read;

use clap::{Args, Parser, Subcommand};

use crate::core::timing::TimingConfig;
use crate::infra::config::Config;

#[derive(Parser, Debug)]
#[command(
    name = "coopfold",
    about = "Cooperative, time-budgeted folds over lists of integers",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file path
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Delay before a deferred continuation runs (overrides config)
    #[arg(long, global = true)]
    pub yield_delay_ms: Option<u64>,

    /// Longest synchronous burst before a forced yield (overrides config)
    #[arg(long, global = true)]
    pub batch_time_ms: Option<u64>,

    /// Simulated asynchronous work per item, in milliseconds
    #[arg(long, global = true, default_value = "0")]
    pub work_ms: u64,

    /// Read whitespace-separated numbers from stdin instead of arguments
    /// (cannot be combined with numbers on the command line)
    #[arg(long, global = true)]
    pub stdin: bool,

    /// Print the result as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

impl Cli {
    /// Timing from the config file with command-line overrides applied.
    pub fn timing(&self, config: &Config) -> TimingConfig {
        let mut timing = config.timing();
        if let Some(ms) = self.yield_delay_ms {
            timing = timing.with_yield_delay(std::time::Duration::from_millis(ms));
        }
        if let Some(ms) = self.batch_time_ms {
            timing = timing.with_batch_time(std::time::Duration::from_millis(ms));
        }
        timing
    }

    /// The numbers to fold: from `stdin` when `--stdin` is set, else the arguments.
    pub fn input_numbers(&self, stdin: impl Read) -> anyhow::Result<Vec<i64>> {
        let args = self.command.numbers();
        if !self.stdin {
            return Ok(args.to_vec());
        }
        if !args.is_empty() {
            anyhow::bail!("--stdin cannot be combined with numbers on the command line");
        }
        run::read_numbers(stdin)
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct Numbers {
    #[arg(allow_negative_numbers = true)]
    pub numbers: Vec<i64>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Sum the numbers (fails on empty input)
    Sum(Numbers),
    /// Square every number
    Squares(Numbers),
    /// Keep the even numbers
    Evens(Numbers),
    /// Are all numbers even?
    AllEven(Numbers),
    /// Is any number even?
    AnyEven(Numbers),
    /// Print each number with its index
    List {
        #[command(flatten)]
        numbers: Numbers,
        /// Stop after printing the first number equal to this
        #[arg(long, allow_negative_numbers = true)]
        stop_at: Option<i64>,
    },
}

impl Commands {
    pub fn numbers(&self) -> &[i64] {
        match self {
            Commands::Sum(n)
            | Commands::Squares(n)
            | Commands::Evens(n)
            | Commands::AllEven(n)
            | Commands::AnyEven(n)
            | Commands::List { numbers: n, .. } => &n.numbers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_parse_sum_with_negatives() {
        let cli = Cli::parse_from(["coopfold", "sum", "1", "-2", "3"]);
        assert_eq!(cli.command.numbers(), &[1, -2, 3]);
        assert!(!cli.json);
    }

    #[test]
    fn test_parse_list_stop_at() {
        let cli = Cli::parse_from(["coopfold", "list", "4", "5", "6", "--stop-at", "5"]);
        match cli.command {
            Commands::List { ref numbers, stop_at } => {
                assert_eq!(numbers.numbers, vec![4, 5, 6]);
                assert_eq!(stop_at, Some(5));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_timing_overrides_config() {
        let cli = Cli::parse_from(["coopfold", "--batch-time-ms", "5", "evens", "1"]);
        let timing = cli.timing(&Config::default());
        assert_eq!(timing.batch_time, Duration::from_millis(5));
        assert_eq!(timing.yield_delay, Duration::from_millis(15));
    }

    #[test]
    fn test_input_numbers_from_stdin() {
        let cli = Cli::parse_from(["coopfold", "--stdin", "sum"]);
        let numbers = cli.input_numbers("4 5\n6".as_bytes()).unwrap();
        assert_eq!(numbers, vec![4, 5, 6]);
    }

    #[test]
    fn test_input_numbers_rejects_stdin_with_arguments() {
        let cli = Cli::parse_from(["coopfold", "--stdin", "sum", "1", "2"]);
        let err = cli.input_numbers("3".as_bytes()).unwrap_err();
        assert!(err.to_string().contains("--stdin"));
    }

    #[test]
    fn test_input_numbers_ignores_stdin_without_flag() {
        let cli = Cli::parse_from(["coopfold", "sum", "1", "2"]);
        let numbers = cli.input_numbers("99".as_bytes()).unwrap();
        assert_eq!(numbers, vec![1, 2]);
    }
}
