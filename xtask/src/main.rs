use anyhow::Result;
use clap::{Parser, Subcommand};
use std::process::Command;

#[derive(Parser)]
#[command(name = "xtask", about = "Workspace automation for spincube")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run all checks: fmt, clippy, tests, doc
    Check,
    /// Run cargo fmt --check on all crates
    Fmt,
    /// Run clippy on all crates
    Clippy,
    /// Run all tests
    Test,
    /// Build rustdoc for the workspace
    Doc,
    /// Build the entire workspace
    Build,
}

fn cargo(label: &str, args: &[&str]) -> Result<()> {
    println!("==> Running cargo {label}");
    let status = Command::new("cargo").args(args).status()?;
    if !status.success() {
        anyhow::bail!("cargo {label} failed");
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let fmt = &["fmt", "--all", "--", "--check"][..];
    let clippy = &["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"][..];
    let test = &["test", "--workspace"][..];
    let doc = &["doc", "--workspace", "--no-deps"][..];
    let build = &["build", "--workspace"][..];

    match cli.command {
        Commands::Check => {
            cargo("fmt", fmt)?;
            cargo("clippy", clippy)?;
            cargo("test", test)?;
            cargo("doc", doc)?;
        }
        Commands::Fmt => cargo("fmt", fmt)?,
        Commands::Clippy => cargo("clippy", clippy)?,
        Commands::Test => cargo("test", test)?,
        Commands::Doc => cargo("doc", doc)?,
        Commands::Build => cargo("build", build)?,
    }

    Ok(())
}
