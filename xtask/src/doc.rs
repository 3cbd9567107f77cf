use anyhow::Result;
use colored::Colorize;

use crate::stage::Stage;

/// Rustdoc for the two library crates. Broken intra-doc links and missing
/// docs fail the build.
fn stage(open: bool) -> Stage {
    let stage = Stage::cargo(
        "documentation",
        &["doc", "-p", "navigation", "-p", "navigation-demo", "--no-deps"],
    )
    .env("RUSTDOCFLAGS", "-D warnings");
    if open {
        stage.arg("--open")
    } else {
        stage
    }
}

pub fn run(open: bool) -> Result<()> {
    println!();
    println!("{}", "📚 Building documentation...".cyan().bold());
    println!();

    let output = stage(open).run()?;
    println!(
        "{}",
        format!(
            "✓ Documentation built in {:.2}s",
            output.elapsed.as_secs_f64()
        )
        .green()
    );

    if !open {
        println!();
        println!(
            "   {}",
            "Open target/doc/navigation/index.html in your browser".dimmed()
        );
        println!("   {}", "Or run 'cargo xtask doc --open'".dimmed());
    }

    println!();

    Ok(())
}
