//! navigation-demo binary: replay scripted taps and print both stacks.

// Binary crate: the library carries the public API docs.
#![allow(missing_docs)]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use navigation_demo::{load_config, DemoApp, DemoScript};

#[derive(Parser)]
#[command(name = "navigation-demo")]
#[command(about = "Replay button taps against the navigation controller demo", long_about = None)]
#[command(version)]
struct Cli {
    /// JSON script of button taps (defaults to the built-in walkthrough)
    #[arg(long)]
    script: Option<PathBuf>,
    /// JSON controller config; overrides the script's `config`
    #[arg(long)]
    config: Option<PathBuf>,
    /// Print only the visible frame of each stack after every step
    #[arg(long)]
    visible_only: bool,
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut script = match &cli.script {
        Some(path) => DemoScript::load(path)
            .with_context(|| format!("Failed to load script {}", path.display()))?,
        None => DemoScript::builtin(),
    };
    if let Some(path) = &cli.config {
        script.config = load_config(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?;
    }

    tracing::info!(
        steps = script.steps.len(),
        retention = ?script.config.retention,
        empty_pop = ?script.config.empty_pop,
        "starting navigation demo"
    );

    let mut app = DemoApp::new(script.config);
    print_app(&app, cli.visible_only)?;

    for (n, action) in script.steps.iter().enumerate() {
        println!("--- step {}: {} ---", n.saturating_add(1), action.label());
        if let Err(err) = app.dispatch(*action) {
            tracing::warn!(error = %err, "step rejected");
            println!("    ! {err}");
        }
        print_app(&app, cli.visible_only)?;
    }

    tracing::info!(changes = app.change_count(), "navigation demo finished");
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn print_app(app: &DemoApp, visible_only: bool) -> Result<()> {
    let mut out = String::new();
    let rendered = if visible_only {
        app.render_visible(&mut out)
    } else {
        app.render(&mut out)
    };
    rendered.context("Failed to render navigation stacks")?;
    print!("{out}");
    Ok(())
}
