use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use std::process::Command;

pub fn run(script: Option<&Path>, verbose: bool) -> Result<()> {
    println!();
    println!("{}", "🧭 Running navigation demo...".cyan().bold());
    if let Some(path) = script {
        println!("   {}", format!("script: {}", path.display()).dimmed());
    }
    println!();

    let mut cmd = Command::new("cargo");
    cmd.args(["run", "-p", "navigation-demo", "--"]);
    if let Some(path) = script {
        cmd.arg("--script").arg(path);
    }
    if verbose {
        cmd.arg("--verbose");
        cmd.env("RUST_LOG", "navigation=debug,navigation_demo=debug");
    }

    let status = cmd.status().context("Failed to run navigation demo")?;
    if !status.success() {
        eprintln!("{}", "✗ Demo exited with an error".red().bold());
        anyhow::bail!("Demo failed");
    }

    println!();
    println!("{}", "✓ Demo finished".green());
    Ok(())
}
