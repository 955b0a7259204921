use anyhow::{Context, Result};
use brief_md::{AnalysisReport, Renderer};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::io::Read;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod config;
mod page;

#[derive(Parser)]
#[command(
    name = "brief",
    version,
    about = "Render AI-drafted family-law answers to HTML and speech text"
)]
struct Cli {
    /// Suppress non-essential output
    #[arg(long, global = true)]
    quiet: bool,

    /// Log debug detail to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to brief.json (default: ./brief.json if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum RenderFormat {
    Html,
    Page,
    Speech,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a markdown answer
    Render {
        /// Path to the answer text, or `-` for stdin
        file: String,

        /// Output format
        #[arg(long, value_enum, default_value = "html")]
        format: RenderFormat,
    },

    /// Narrate a case-analysis report returned by the model as JSON
    Narrate {
        /// Path to the raw model response, or `-` for stdin
        file: String,
    },

    /// Validate case-analysis report file(s)
    Validate {
        /// Paths to raw model responses
        files: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = config::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Render { file, format } => {
            handle_render(&file, format, &config)?;
        }
        Commands::Narrate { file } => {
            handle_narrate(&file, &config)?;
        }
        Commands::Validate { files } => {
            handle_validate(&files, cli.quiet)?;
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // Rendered output goes to stdout, so logs stay on stderr.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn read_input(file: &str) -> Result<String> {
    if file == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(file).with_context(|| format!("Failed to read '{}'", file))
}

fn handle_render(file: &str, format: RenderFormat, config: &config::BriefConfig) -> Result<()> {
    let content = read_input(file)?;
    tracing::debug!(file, bytes = content.len(), "rendering");

    let output = match format {
        RenderFormat::Html => Renderer::new(config.styles.clone()).render(&content),
        RenderFormat::Page => {
            let fragment = Renderer::new(config.styles.clone()).render(&content);
            page::render_page(&fragment, &config.page_title)
        }
        RenderFormat::Speech => brief_md::clean(&content),
    };

    println!("{output}");
    Ok(())
}

fn handle_narrate(file: &str, config: &config::BriefConfig) -> Result<()> {
    let raw = read_input(file)?;
    let report = AnalysisReport::from_model_output(&raw)
        .with_context(|| format!("Failed to read a report from '{}'", file))?;
    tracing::debug!(
        key_points = report.key_points.len(),
        insights = report.insights.len(),
        "narrating report"
    );

    println!("{}", brief_md::narrate_report(&report, &config.narration));
    Ok(())
}

fn handle_validate(files: &[String], quiet: bool) -> Result<()> {
    let mut has_errors = false;

    for file in files {
        let raw = read_input(file)?;

        match AnalysisReport::from_model_output(&raw) {
            Ok(report) => {
                if !quiet {
                    println!(
                        "{}: {} ({} key points, {} insights)",
                        file,
                        "OK".green(),
                        report.key_points.len(),
                        report.insights.len()
                    );
                }
            }
            Err(e) => {
                has_errors = true;
                println!("{}: {}: {}", file, "error".red().bold(), e);
            }
        }
    }

    if has_errors {
        std::process::exit(1);
    }

    Ok(())
}
