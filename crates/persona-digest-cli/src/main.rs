use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use persona_digest_core::config_file;
use persona_digest_core::{DiscoveryOrder, Driver, ProgressEvent};
use persona_digest_pdf_mupdf::MupdfBackend;
use tracing_subscriber::EnvFilter;

mod output;

use output::ColorMode;

/// Persona Digest - Summarize every PDF collection under a root directory
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Directory holding the collections (default: the executable's directory)
    #[arg(long, env = "PERSONA_DIGEST_ROOT")]
    root: Option<PathBuf>,

    /// Process collections in name order instead of directory listing order
    #[arg(long)]
    sorted: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Path to a TOML config file, layered over the discovered ones
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let root = match cli.root {
        Some(root) => root,
        None => executable_dir()?,
    };

    // Resolve configuration: CLI flags > --config > <root>/.persona-digest.toml > platform
    let mut file_config = config_file::load_config(&root);
    if let Some(ref path) = cli.config {
        file_config = config_file::merge(file_config, config_file::load_explicit(path)?);
    }
    let mut config = file_config.resolve();
    if cli.sorted {
        config.order = DiscoveryOrder::Sorted;
    }
    tracing::debug!(root = %root.display(), ?config, "resolved configuration");

    let color = ColorMode(!cli.no_color);
    let progress = move |event: ProgressEvent| {
        let mut stdout = std::io::stdout().lock();
        let _ = output::print_progress(&mut stdout, &event, color);
        let _ = stdout.flush();
    };

    let driver = Driver::new(root, Box::new(MupdfBackend::new()), config);
    let summary = driver.run(progress)?;

    println!();
    println!("{}", output::format_elapsed(summary.elapsed));

    Ok(())
}

/// Directory containing the running executable.
fn executable_dir() -> anyhow::Result<PathBuf> {
    let exe = std::env::current_exe()?;
    exe.parent()
        .map(|dir| dir.to_path_buf())
        .ok_or_else(|| anyhow::anyhow!("Cannot determine directory of {}", exe.display()))
}
