//! Build automation for clustertemplate-kube
//!
//! Usage: cargo xtask <command>
//!
//! Available commands:
//! - build: Build the project
//! - test: Run tests
//! - dist: Create distribution packages
//! - ci: Run CI checks

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use xshell::{cmd, Shell};

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build automation for clustertemplate-kube")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the project
    Build {
        /// Build in release mode
        #[arg(long)]
        release: bool,
    },
    /// Run tests
    Test {
        /// Run only integration tests
        #[arg(long)]
        integration: bool,
    },
    /// Create distribution packages
    Dist {
        /// Target triple (e.g., x86_64-unknown-linux-gnu)
        #[arg(long)]
        target: Option<String>,
    },
    /// Run CI checks (format, clippy, test)
    Ci,
    /// Format code
    Format {
        /// Check formatting without modifying files
        #[arg(long)]
        check: bool,
    },
    /// Run clippy
    Clippy,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let sh = Shell::new()?;

    sh.change_dir(project_root());

    match cli.command {
        Commands::Build { release } => build(&sh, release),
        Commands::Test { integration } => test(&sh, integration),
        Commands::Dist { target } => dist(&sh, target),
        Commands::Ci => ci(&sh),
        Commands::Format { check } => format(&sh, check),
        Commands::Clippy => clippy(&sh),
    }
}

fn build(sh: &Shell, release: bool) -> Result<()> {
    println!("🔨 Building clustertemplate-kube...");

    if release {
        cmd!(sh, "cargo build --release").run()?;
        println!("✅ Release build completed: target/release/clustertemplate-kube");
    } else {
        cmd!(sh, "cargo build").run()?;
        println!("✅ Debug build completed: target/debug/clustertemplate-kube");
    }

    Ok(())
}

fn test(sh: &Shell, integration: bool) -> Result<()> {
    println!("🧪 Running tests...");

    if integration {
        cmd!(sh, "cargo test --test '*'").run()?;
    } else {
        cmd!(sh, "cargo test --all").run()?;
    }

    println!("✅ All tests passed");
    Ok(())
}

fn dist(sh: &Shell, target: Option<String>) -> Result<()> {
    println!("📦 Creating distribution package...");

    // Build release binary
    if let Some(ref target_triple) = target {
        cmd!(sh, "cargo build --release --target {target_triple}").run()?;
    } else {
        cmd!(sh, "cargo build --release").run()?;
    }

    // Create dist directory
    let dist_dir = project_root().join("dist");
    sh.create_dir(&dist_dir)?;

    // Copy binary
    let binary_src = if let Some(ref target_triple) = target {
        project_root().join(format!(
            "target/{}/release/clustertemplate-kube",
            target_triple
        ))
    } else {
        project_root().join("target/release/clustertemplate-kube")
    };

    let binary_dst = dist_dir.join("clustertemplate-kube");
    sh.copy_file(&binary_src, &binary_dst)?;

    // Create tarball
    let version = env!("CARGO_PKG_VERSION");
    let archive_name = format!("clustertemplate-kube-{}.tar.gz", version);

    cmd!(sh, "tar -czf {archive_name} -C dist clustertemplate-kube")
        .run()
        .context("Failed to create tarball")?;

    println!("✅ Distribution package created: {}", archive_name);
    Ok(())
}

fn ci(sh: &Shell) -> Result<()> {
    println!("🔍 Running CI checks...");

    println!("\n📝 Checking formatting...");
    format(sh, true)?;

    println!("\n🔧 Running clippy...");
    clippy(sh)?;

    println!("\n🧪 Running tests...");
    test(sh, false)?;

    println!("\n✅ All CI checks passed!");
    Ok(())
}

fn format(sh: &Shell, check: bool) -> Result<()> {
    if check {
        cmd!(sh, "cargo fmt --all -- --check").run()?;
        println!("✅ Code formatting is correct");
    } else {
        cmd!(sh, "cargo fmt --all").run()?;
        println!("✅ Code formatted");
    }
    Ok(())
}

fn clippy(sh: &Shell) -> Result<()> {
    cmd!(
        sh,
        "cargo clippy --all-targets --all-features -- -D warnings"
    )
    .run()?;
    println!("✅ Clippy checks passed");
    Ok(())
}

fn project_root() -> PathBuf {
    Path::new(&env!("CARGO_MANIFEST_DIR"))
        .ancestors()
        .nth(1)
        .unwrap()
        .to_path_buf()
}
