//! Build automation tasks for engine-lessons
//!
//! Usage:
//!   cargo xtask dist            # Release build staged in dist/EndlessRunner/
//!   cargo xtask dist --zip      # Same, plus dist/EndlessRunner.zip
//!   cargo xtask clean-data      # Remove local high scores and settings

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Folder name used for the staged build and the per-user data directory.
const APP_NAME: &str = "EndlessRunner";
const BINARY: &str = "engine-lessons";

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build automation for engine-lessons")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a native release and stage it for distribution
    Dist {
        /// Also create a zip archive next to the staged folder
        #[arg(long)]
        zip: bool,
    },
    /// Delete the local score database and settings file
    CleanData,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Dist { zip } => dist(zip),
        Commands::CleanData => clean_data(),
    }
}

/// Get the project root directory
fn project_root() -> Result<PathBuf> {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .context("xtask manifest has no parent directory")
}

/// Run a command and check for success
fn run_cmd(cmd: &mut Command) -> Result<()> {
    let status = cmd.status().context("Failed to execute command")?;
    if !status.success() {
        anyhow::bail!("Command failed with status: {}", status);
    }
    Ok(())
}

/// Build the release binary and copy it into dist/EndlessRunner
fn dist(zip: bool) -> Result<()> {
    let root = project_root()?;
    let staging = root.join("dist").join(APP_NAME);

    println!("Building native release...");
    run_cmd(
        Command::new("cargo")
            .current_dir(&root)
            .args(["build", "--release", "--bin", BINARY]),
    )?;

    if staging.exists() {
        std::fs::remove_dir_all(&staging)
            .with_context(|| format!("Failed to clear {}", staging.display()))?;
    }
    std::fs::create_dir_all(&staging)?;

    let binary_name = if cfg!(target_os = "windows") {
        format!("{}.exe", BINARY)
    } else {
        BINARY.to_string()
    };
    std::fs::copy(
        root.join("target/release").join(&binary_name),
        staging.join(&binary_name),
    )
    .context("Failed to copy release binary")?;

    println!("Staged build: dist/{}/", APP_NAME);

    if zip {
        let zip_name = format!("{}.zip", APP_NAME);
        let zip_path = root.join("dist").join(&zip_name);
        if zip_path.exists() {
            std::fs::remove_file(&zip_path)?;
        }
        run_cmd(
            Command::new("zip")
                .current_dir(root.join("dist"))
                .args(["-r", zip_name.as_str(), APP_NAME]),
        )?;
        println!("Archive ready: dist/{}", zip_name);
    }

    Ok(())
}

/// Same location the app uses: the platform data dir, or the working
/// directory when there is none.
fn data_dir(base: Option<PathBuf>) -> PathBuf {
    base.unwrap_or_else(|| PathBuf::from(".")).join(APP_NAME)
}

/// Remove scores.db and settings.ron from the per-user data directory
fn clean_data() -> Result<()> {
    let base = dirs::data_local_dir();
    if base.is_none() {
        println!("No local data directory on this platform, using working directory");
    }
    remove_data_files(&data_dir(base))
}

fn remove_data_files(dir: &Path) -> Result<()> {
    for file in ["scores.db", "settings.ron"] {
        let path = dir.join(file);
        match std::fs::remove_file(&path) {
            Ok(()) => println!("Removed {}", path.display()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(e).with_context(|| format!("Failed to remove {}", path.display())),
        }
    }
    Ok(())
}
