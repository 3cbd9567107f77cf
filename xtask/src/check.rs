use anyhow::Result;
use colored::Colorize;
use std::time::Instant;

use crate::stage::Stage;

/// Every stage must pass: the navigation crate's no-panic guarantee rests on
/// the workspace `deny` lints, so clippy and rustfmt failures are fatal.
fn stages() -> Vec<Stage> {
    vec![
        Stage::cargo(
            "workspace check (all targets)",
            &["check", "--workspace", "--all-targets"],
        ),
        Stage::cargo(
            "navigation library in isolation",
            &["check", "-p", "navigation", "--lib"],
        ),
        Stage::cargo(
            "clippy",
            &["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"],
        ),
        Stage::cargo("formatting", &["fmt", "--all", "--check"]),
    ]
}

pub fn run() -> Result<()> {
    println!();
    println!("{}", "🔍 Checking workspace...".cyan().bold());
    println!();

    let total_start = Instant::now();

    for stage in stages() {
        let output = stage.run().inspect_err(|_| {
            if stage.name() == "formatting" {
                eprintln!("     Run 'cargo fmt --all' to fix");
            }
        })?;
        println!(
            "{}",
            format!(
                "  ✓ {} passed in {:.2}s",
                stage.name(),
                output.elapsed.as_secs_f64()
            )
            .green()
        );
        println!();
    }

    println!(
        "{}",
        format!(
            "✓ All checks passed in {:.2}s",
            total_start.elapsed().as_secs_f64()
        )
        .green()
        .bold()
    );
    println!();

    Ok(())
}
