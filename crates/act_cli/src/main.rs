//! act CLI
//!
//! Render markdown documents to HTML and preview page transition timelines.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use act_core::UiNode;
use act_doc::{DocPage, DriverStyle, MarkdownArticle, PageTransitions};
use act_markdown::{MdastRenderer, RendererOptions};

mod config;

use config::ActConfig;

#[derive(Parser)]
#[command(name = "act")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "act markdown and transition toolkit", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a markdown article to HTML on stdout
    Render {
        /// Markdown file, or mdast JSON with --json
        file: PathBuf,

        /// Config file (defaults to ./act.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Read the input as mdast JSON
        #[arg(long)]
        json: bool,
    },

    /// Navigate through pages and print each slot's position over time
    Transition {
        /// Page paths, visited in order
        #[arg(required = true)]
        paths: Vec<String>,

        /// Sampling step in ms
        #[arg(short, long, default_value = "50")]
        step: f64,

        /// Time between navigations in ms
        #[arg(short, long, default_value = "250")]
        interval: f64,

        /// Transition duration in ms (overrides the config)
        #[arg(short, long)]
        duration: Option<f64>,

        /// Config file (defaults to ./act.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
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
        Commands::Render { file, config, json } => cmd_render(&file, config.as_deref(), json),

        Commands::Transition {
            paths,
            step,
            interval,
            duration,
            config,
        } => cmd_transition(&paths, step, interval, duration, config.as_deref()),
    }
}

fn cmd_render(file: &Path, config: Option<&Path>, json: bool) -> Result<()> {
    let config = ActConfig::load(config)?;
    let renderer = MdastRenderer::new(RendererOptions::from(config.renderer));

    let content =
        fs::read_to_string(file).with_context(|| format!("Failed to read {}", file.display()))?;
    let article = if json {
        MarkdownArticle::from_json(&content)
            .with_context(|| format!("Failed to parse {}", file.display()))?
    } else {
        MarkdownArticle::from_markdown(&content)
    };

    if let Some(title) = article.metadata().and_then(|metadata| metadata.title.as_deref()) {
        info!("Rendering \"{}\"", title);
    }

    println!("{}", article.render(&renderer).to_html());
    Ok(())
}

fn cmd_transition(
    paths: &[String],
    step: f64,
    interval: f64,
    duration: Option<f64>,
    config: Option<&Path>,
) -> Result<()> {
    if !(step > 0.0 && interval > 0.0) {
        anyhow::bail!("--step and --interval must be positive");
    }

    let mut transition = ActConfig::load(config)?.transition;
    if let Some(duration) = duration {
        if duration.is_nan() || duration <= 0.0 {
            anyhow::bail!("--duration must be positive, got {}", duration);
        }
        transition.duration = duration;
    }

    info!(
        "Navigating {} pages every {}ms ({}ms transitions)",
        paths.len(),
        interval,
        transition.duration
    );

    let mut pages = PageTransitions::with_config(transition);
    let mut visits = paths
        .iter()
        .enumerate()
        .map(|(index, path)| (index as f64 * interval, path))
        .peekable();

    // Run until the last page has settled
    let end = paths.len().saturating_sub(1) as f64 * interval + transition.duration;
    let mut now = 0.0;
    while now <= end {
        while let Some((_, path)) = visits.next_if(|(at, _)| *at <= now) {
            pages.show(DocPage::new(path.as_str(), path.as_str(), UiNode::Empty), now);
        }
        pages.prune(now);
        println!("{}", timeline_row(&pages, now));
        now += step;
    }
    Ok(())
}

/// One line of the timeline: every slot's position and opacity at `now`
fn timeline_row(pages: &PageTransitions, now: f64) -> String {
    let slots: Vec<String> = pages
        .slots()
        .iter()
        .map(|slot| {
            let x = slot.animation.sample_at(now).point.x();
            let marker = if pages.is_leaving(&slot.key) { "<" } else { ">" };
            format!(
                "{marker} {} x={:+.3} opacity={:.2}",
                slot.key,
                x,
                DriverStyle::at(x).opacity
            )
        })
        .collect();
    format!("{:>7.1}ms  {}", now, slots.join("  "))
}
