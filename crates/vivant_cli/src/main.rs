//! Vivant CLI
//!
//! Render the landing page and replay scripted interactions against it.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use vivant_core::config::EngineConfig;
use vivant_page::page::Page;
use vivant_page::section::SectionId;
use vivant_widgets::submit::SimulatedSubmitter;

mod config;
mod scenario;

use config::VivantConfig;
use scenario::Scenario;

#[derive(Parser)]
#[command(name = "vivant")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Scroll-driven landing page engine", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the page to HTML
    Render {
        /// Site directory containing vivant.toml
        #[arg(default_value = ".")]
        dir: String,

        /// Output path (overrides [site].output; stdout when neither is set)
        #[arg(short, long)]
        output: Option<String>,

        /// Scroll offset to render at
        #[arg(short, long)]
        scroll: Option<f32>,

        /// Milliseconds since load, for the typewriter and marquee
        #[arg(short, long)]
        tick: Option<u64>,
    },

    /// Replay a scenario file and print the state after each step as JSON
    Scenario {
        /// Scenario TOML file
        file: String,

        /// Site directory containing vivant.toml
        #[arg(short, long, default_value = ".")]
        dir: String,

        /// Pretty-print the report
        #[arg(short, long)]
        pretty: bool,
    },

    /// Check that every navigation link targets a section
    Check {
        /// Site directory containing vivant.toml
        #[arg(default_value = ".")]
        dir: String,
    },

    /// Show engine defaults and page structure
    Info,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match cli.command {
        Commands::Render {
            dir,
            output,
            scroll,
            tick,
        } => cmd_render(&dir, output.as_deref(), scroll, tick),
        Commands::Scenario { file, dir, pretty } => cmd_scenario(&file, &dir, pretty),
        Commands::Check { dir } => cmd_check(&dir),
        Commands::Info => cmd_info(),
    }
}

fn load_page(dir: &str) -> Result<(VivantConfig, Page)> {
    let config = VivantConfig::load_from_dir(Path::new(dir))?;
    let content = config.load_content()?;
    let mut page = Page::new(content, config.engine.clone())
        .context("Failed to build page")?;
    page.resize(config.site.viewport_width, config.site.viewport_height);
    Ok((config, page))
}

fn cmd_render(dir: &str, output: Option<&str>, scroll: Option<f32>, tick: Option<u64>) -> Result<()> {
    let (config, mut page) = load_page(dir)?;

    if let Some(y) = scroll {
        let revealed = page.on_scroll(y);
        info!("Scrolled to {}, {} section(s) revealed", y, revealed);
    }
    if let Some(ms) = tick {
        page.tick(ms);
    }

    let html = page.render_html();
    let target = output.map(PathBuf::from).or_else(|| config.output_path());
    match target {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            fs::write(&path, html)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {}", path.display());
        }
        None => print!("{}", html),
    }

    Ok(())
}

fn cmd_scenario(file: &str, dir: &str, pretty: bool) -> Result<()> {
    let scenario = Scenario::load(Path::new(file))?;
    let (config, mut page) = load_page(dir)?;
    let submitter = SimulatedSubmitter::from_config(&config.engine);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("Failed to start async runtime")?;
    let report = runtime.block_on(scenario.run(&mut page, &submitter))?;

    let json = if pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{}", json);

    Ok(())
}

fn cmd_check(dir: &str) -> Result<()> {
    let (_, page) = load_page(dir)?;

    let broken = page.check_anchors();
    for entry in &broken {
        warn!(
            "Navigation link \"{}\" targets #{} which is not a section",
            entry.label, entry.anchor
        );
    }
    if !broken.is_empty() {
        bail!("{} broken navigation link(s)", broken.len());
    }

    info!(
        "{} navigation links, {} sections: OK",
        page.nav().entries().len(),
        page.anchors().len()
    );
    Ok(())
}

fn cmd_info() -> Result<()> {
    let engine = EngineConfig::default();

    println!("Vivant");
    println!("======");
    println!();
    println!("Version: {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Engine defaults:");
    println!("  - reveal threshold: {}", engine.reveal_threshold);
    println!("  - nav scroll threshold: {}px", engine.scroll_threshold);
    println!("  - section reveal: {}ms", engine.reveal_duration_ms);
    println!("  - card reveal: {}ms", engine.card_duration_ms);
    println!("  - product stagger: {}ms", engine.stagger_step_ms);
    println!("  - testimonial stagger: {}ms", engine.testimonial_stagger_ms);
    println!("  - marquee loop: {}ms", engine.marquee_duration_ms);
    println!("  - typewriter interval: {}ms", engine.typewriter_interval_ms);
    println!("  - simulated submit: {}ms", engine.submit_delay_ms);
    println!();
    println!("Sections:");
    for id in SectionId::ALL {
        println!("  - #{}", id);
    }

    Ok(())
}
