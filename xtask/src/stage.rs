//! Timed cargo invocations with coloured pass/fail reporting.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fmt;
use std::process::Command;
use std::time::{Duration, Instant};

/// One named `cargo` invocation. Any non-zero exit fails the stage.
#[derive(Debug, Clone)]
pub struct Stage {
    name: &'static str,
    args: Vec<&'static str>,
    env: Vec<(&'static str, String)>,
}

/// Captured output of a passing stage.
#[derive(Debug)]
pub struct StageOutput {
    pub stdout: String,
    pub elapsed: Duration,
}

impl Stage {
    pub fn cargo(name: &'static str, args: &[&'static str]) -> Self {
        Self {
            name,
            args: args.to_vec(),
            env: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: &'static str) -> Self {
        self.args.push(arg);
        self
    }

    pub fn env(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.env.push((key, value.into()));
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The shell line this stage runs, for logs and failure hints.
    pub fn command_line(&self) -> String {
        let mut line = String::new();
        for (key, value) in &self.env {
            line.push_str(&format!("{key}={value} "));
        }
        line.push_str("cargo");
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }

    pub fn run(&self) -> Result<StageOutput> {
        println!("{}", format!("  Running {}...", self.name).cyan());
        println!("     {}", self.command_line().dimmed());
        let start = Instant::now();

        let mut cmd = Command::new("cargo");
        cmd.args(&self.args);
        for (key, value) in &self.env {
            cmd.env(key, value);
        }
        let output = cmd
            .output()
            .with_context(|| format!("Failed to spawn `{}`", self.command_line()))?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        if !output.status.success() {
            eprintln!("{}", format!("  ✗ {} failed", self.name).red().bold());
            eprintln!();
            for line in stdout.lines() {
                eprintln!("  {line}");
            }
            eprintln!("{}", String::from_utf8_lossy(&output.stderr));
            anyhow::bail!("{} failed", self.name);
        }

        Ok(StageOutput {
            stdout,
            elapsed: start.elapsed(),
        })
    }
}

/// Pass/fail/ignore totals summed over every `test result:` line of a run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TestCounts {
    pub passed: u32,
    pub failed: u32,
    pub ignored: u32,
}

impl TestCounts {
    pub fn parse(output: &str) -> Self {
        let mut counts = Self::default();
        for line in output.lines() {
            let Some((_, result)) = line.split_once("test result:") else {
                continue;
            };
            for part in result.split(';') {
                let words: Vec<&str> = part.split_whitespace().collect();
                let [.., count, label] = words.as_slice() else {
                    continue;
                };
                let Ok(count) = count.parse::<u32>() else {
                    continue;
                };
                let slot = match *label {
                    "passed" => &mut counts.passed,
                    "failed" => &mut counts.failed,
                    "ignored" => &mut counts.ignored,
                    _ => continue,
                };
                *slot = slot.saturating_add(count);
            }
        }
        counts
    }

    pub fn add(self, other: Self) -> Self {
        Self {
            passed: self.passed.saturating_add(other.passed),
            failed: self.failed.saturating_add(other.failed),
            ignored: self.ignored.saturating_add(other.ignored),
        }
    }
}

impl fmt::Display for TestCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} passed, {} failed, {} ignored",
            self.passed, self.failed, self.ignored
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{Stage, TestCounts};

    const TWO_BINARIES: &str = "\
running 3 tests
test a ... ok
test result: ok. 3 passed; 0 failed; 1 ignored; 0 measured; 0 filtered out; finished in 0.01s

running 2 tests
test result: ok. 2 passed; 0 failed; 0 ignored; 0 measured; 0 filtered out; finished in 0.00s
";

    #[test]
    fn test_counts_sum_every_result_line() {
        let counts = TestCounts::parse(TWO_BINARIES);
        assert_eq!(
            counts,
            TestCounts {
                passed: 5,
                failed: 0,
                ignored: 1
            }
        );
        assert_eq!(counts.to_string(), "5 passed, 0 failed, 1 ignored");
    }

    #[test]
    fn test_counts_parse_failed_run() {
        let counts = TestCounts::parse(
            "test result: FAILED. 4 passed; 2 failed; 0 ignored; 0 measured; 0 filtered out",
        );
        assert_eq!(counts.passed, 4);
        assert_eq!(counts.failed, 2);
    }

    #[test]
    fn test_counts_empty_without_results() {
        assert_eq!(TestCounts::parse("error[E0425]: cannot find value"), TestCounts::default());
    }

    #[test]
    fn test_counts_add() {
        let one = TestCounts {
            passed: 1,
            failed: 0,
            ignored: 2,
        };
        assert_eq!(one.add(one).ignored, 4);
    }

    #[test]
    fn test_command_line_includes_env_and_args() {
        let stage = Stage::cargo("properties", &["test", "-p", "navigation"])
            .arg("--release")
            .env("PROPTEST_CASES", "64");
        assert_eq!(
            stage.command_line(),
            "PROPTEST_CASES=64 cargo test -p navigation --release"
        );
    }
}
