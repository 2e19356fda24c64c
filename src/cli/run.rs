// src/cli/run.rs — Execute one CLI command against a Driver

use std::io::Read;
use std::ops::ControlFlow;
use std::time::Duration;

use anyhow::Context;
use serde::Serialize;

use super::Commands;
use crate::core::engine::{Driver, Step};

/// Result of a command, ready to print.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    Number(i64),
    List(Vec<i64>),
    Bool(bool),
    Lines(Vec<String>),
}

impl Outcome {
    pub fn render(&self, json: bool) -> anyhow::Result<String> {
        if json {
            return Ok(serde_json::to_string(self)?);
        }
        Ok(match self {
            Outcome::Number(n) => n.to_string(),
            Outcome::List(values) => values
                .iter()
                .map(i64::to_string)
                .collect::<Vec<_>>()
                .join(" "),
            Outcome::Bool(b) => b.to_string(),
            Outcome::Lines(lines) => lines.join("\n"),
        })
    }
}

/// Parse whitespace-separated integers.
pub fn read_numbers(mut input: impl Read) -> anyhow::Result<Vec<i64>> {
    let mut text = String::new();
    input
        .read_to_string(&mut text)
        .context("reading numbers from stdin")?;
    text.split_whitespace()
        .map(|word| {
            word.parse::<i64>()
                .with_context(|| format!("not an integer: {word:?}"))
        })
        .collect()
}

/// Stand-in for real per-item I/O.
async fn simulate_work(work: Duration) {
    if !work.is_zero() {
        tokio::time::sleep(work).await;
    }
}

pub async fn run_command(
    driver: &Driver,
    command: &Commands,
    numbers: Vec<i64>,
    work: Duration,
) -> anyhow::Result<Outcome> {
    tracing::debug!(count = numbers.len(), ?work, "running command");

    let outcome = match command {
        Commands::Sum(_) => {
            let total = driver.reduce(numbers, |acc, n| async move {
                simulate_work(work).await;
                Step::Continue(acc.saturating_add(n))
            })?;
            Outcome::Number(total.await)
        }
        Commands::Squares(_) => Outcome::List(
            driver
                .map(numbers, |n| async move {
                    simulate_work(work).await;
                    n.saturating_mul(n)
                })
                .await,
        ),
        Commands::Evens(_) => Outcome::List(
            driver
                .filter(numbers, |&n| async move {
                    simulate_work(work).await;
                    n % 2 == 0
                })
                .await,
        ),
        Commands::AllEven(_) => Outcome::Bool(
            driver
                .every(numbers, |&n| async move {
                    simulate_work(work).await;
                    n % 2 == 0
                })
                .await,
        ),
        Commands::AnyEven(_) => Outcome::Bool(
            driver
                .some(numbers, |&n| async move {
                    simulate_work(work).await;
                    n % 2 == 0
                })
                .await,
        ),
        Commands::List { stop_at, .. } => {
            let stop_at = *stop_at;
            let mut lines = Vec::new();
            driver
                .for_each(numbers, |&n, index| {
                    lines.push(format!("{index}: {n}"));
                    async move {
                        simulate_work(work).await;
                        if stop_at == Some(n) {
                            ControlFlow::Break(())
                        } else {
                            ControlFlow::Continue(())
                        }
                    }
                })
                .await;
            Outcome::Lines(lines)
        }
    };

    Ok(outcome)
}
