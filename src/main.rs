#![forbid(unsafe_code)]

mod config;
mod constants;
mod gui;
mod layout;
mod registry;
mod site;
mod storage;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{info, warn, Level as TraceLevel};
use tracing_subscriber::FmtSubscriber;

use config::SiteConfig;
use layout::SectionStore;
use site::{footer_links, nav_links, PageRenderer};
use storage::{FileStorage, Storage};

/// Manage the section layout of the Forge Burger single-page site
#[derive(Debug, Parser)]
#[command(name = "forge-layout", version, about)]
struct Cli {
    /// Site config file (default: <config dir>/forge-layout/site.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory the section layout is stored in
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show every section with its visibility and order
    List,
    /// Show the visible sections in display order
    Enabled,
    /// Show or hide a section
    Toggle { id: String },
    /// Move a section into the place of another
    Move { moved: String, target: String },
    /// Restore the default layout
    Reset {
        /// Delete the stored layout instead of saving the defaults over it
        #[arg(long)]
        purge: bool,
    },
    /// Print navigation and footer links
    Nav,
    /// Render the page as static HTML
    Render {
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Open the settings panel
    Gui,
}

fn init_logging() -> Result<()> {
    // Parse log level from environment variable
    let log_level = match std::env::var("LOG_LEVEL")
        .unwrap_or_else(|_| "info".to_string())
        .to_lowercase()
        .as_str()
    {
        "trace" => TraceLevel::TRACE,
        "debug" => TraceLevel::DEBUG,
        "warn" => TraceLevel::WARN,
        "error" => TraceLevel::ERROR,
        _ => TraceLevel::INFO,
    };

    // stderr keeps `render` output on stdout clean
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to install tracing subscriber")
}

/// Run one non-GUI command against an opened store
fn run_command<S: Storage>(
    command: &Command,
    store: &mut SectionStore<S>,
    config: &SiteConfig,
    out: &mut impl Write,
) -> Result<()> {
    match command {
        Command::List => {
            for section in store.sections() {
                let mark = if section.enabled { "x" } else { " " };
                writeln!(out, "[{mark}] {:>3}  {}", section.order, section.id)?;
            }
        }
        Command::Enabled => {
            for section in store.enabled_sections() {
                writeln!(out, "{}", section.id)?;
            }
        }
        Command::Toggle { id } => {
            if !store.registry().contains(id) {
                warn!(id = %id, "Unknown section, nothing toggled");
            }
            store.toggle_section(id);
        }
        Command::Move { moved, target } => {
            for id in [moved, target] {
                if !store.registry().contains(id) {
                    warn!(id = %id, "Unknown section, layout unchanged");
                }
            }
            store.reorder_sections(moved, target);
        }
        Command::Reset { purge: false } => store.reset_to_defaults(),
        Command::Reset { purge: true } => store.purge()?,
        Command::Nav => {
            let enabled = store.enabled_sections();
            writeln!(out, "Navigation:")?;
            for link in nav_links(store.registry(), &enabled) {
                writeln!(out, "  {} -> {}", link.label, link.href)?;
            }
            writeln!(out, "Footer:")?;
            for link in footer_links(store.registry(), &enabled) {
                writeln!(out, "  {} -> {}", link.label, link.href)?;
            }
        }
        Command::Render { output } => {
            let enabled = store.enabled_sections();
            let html = PageRenderer::new(config, store.registry()).render_page(&enabled);
            match output {
                Some(path) => {
                    fs::write(path, &html)
                        .with_context(|| format!("Failed to write page to {}", path.display()))?;
                    info!(path = %path.display(), "Wrote page");
                }
                None => out.write_all(html.as_bytes())?,
            }
        }
        Command::Gui => bail!("The settings panel is launched from main, not as a store command"),
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging()?;

    let config = match &cli.config {
        Some(path) => SiteConfig::load_from(path)?,
        None => SiteConfig::load()?,
    };
    let registry = config.registry()?;

    let storage = match &cli.data_dir {
        Some(dir) => FileStorage::new(dir),
        None => FileStorage::default(),
    };
    info!(dir = %storage.dir().display(), key = %config.storage_key, "Opening section layout");
    let mut store = SectionStore::open(registry, storage, config.storage_key.clone());

    if let Command::Gui = cli.command {
        return gui::run_gui(store, &config);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_command(&cli.command, &mut store, &config, &mut out)
}
