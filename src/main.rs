//! Sockbuild - build orchestrator for the vendored luasocket library.
//!
//! Resolves platform-specific include and prefix overrides from flags and
//! environment variables, then drives `make install-both` inside the
//! luasocket source tree. Also carries the trivial `test`, `clean`, and
//! `lint` subcommands.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use sockbuild::commands;
use sockbuild::config::{BuildConfig, Platform};

#[derive(Parser)]
#[command(name = "sockbuild")]
#[command(about = "Build orchestrator for the vendored luasocket library")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    action: Option<Action>,

    /// Target platform passed to the luasocket Makefile
    #[arg(short, long, global = true, default_value_t = Platform::detect().flag().to_string())]
    plat: String,

    /// Lua include directory
    #[arg(short, long, global = true, default_value = "/usr/local/include")]
    incl: String,

    /// Install prefix directory name
    #[arg(short, long, global = true, default_value = "build")]
    build: String,

    /// Parallelism hint (accepted for compatibility; the Makefile drives its own jobs)
    #[arg(short = 'j', global = true)]
    #[allow(dead_code)]
    jobs: Option<u32>,
}

#[derive(Subcommand)]
enum Action {
    /// Build and install luasocket via its Makefile (default)
    Build,
    /// Discover and run test modules under ./tests
    Test,
    /// Remove the build output directory
    Clean,
    /// Placeholder, no checks wired up yet
    Lint,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // .env entries never override real environment variables.
    dotenvy::dotenv().ok();

    let base_dir = std::env::current_dir().context("cannot determine working directory")?;

    match cli.action.unwrap_or(Action::Build) {
        Action::Build => {
            let config = BuildConfig::resolve(&cli.plat, &cli.incl, &cli.build);
            commands::cmd_build(&base_dir, &config)?;
        }
        Action::Test => commands::cmd_test(&base_dir)?,
        Action::Clean => commands::cmd_clean(&base_dir)?,
        Action::Lint => commands::cmd_lint()?,
    }

    Ok(())
}
