//! rate-chart CLI - exchange-rate chart views from the command line
//!
//! Loads observation records, runs the chart pipeline for one currency and
//! prints the result.
//!
//! ## Example Usage
//!
//! ```bash
//! # Write the chart view for the euro as JSON
//! rate-chart render --currency EUR --input rates.json --output view.json --pretty
//!
//! # Human-readable summary straight from the API
//! rate-chart summary --url https://example.org/api/rates
//!
//! # List the tracked currencies
//! rate-chart currencies
//! ```

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rusty_ratechart::config::{AppConfig, SourceConfig, API_URL_ENV};
use rusty_ratechart::currency::Currency;
use rusty_ratechart::data::{ConfiguredSource, RecordSource};
use rusty_ratechart::session::ChartSession;
use rusty_ratechart::view::{ViewModel, AVERAGE_LABEL};
use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Duration;

/// rate-chart: exchange-rate chart views from raw observations
#[derive(Parser)]
#[command(name = "rate-chart")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Exchange-rate chart views from raw observations", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the chart view model as JSON
    Render {
        #[command(flatten)]
        source: SourceArgs,

        /// Output file (stdout when omitted)
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Print title, average and axis range
    Summary {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// List tracked currencies
    Currencies,

    /// Show version and resolved configuration
    Info,
}

#[derive(Args)]
struct SourceArgs {
    /// Currency to show (USD, EUR, CNY or $, €, ¥)
    #[arg(long)]
    currency: Option<Currency>,

    /// JSON or CSV file with records
    #[arg(short = 'i', long, conflicts_with = "url")]
    input: Option<PathBuf>,

    /// Rate API URL
    #[arg(short = 'u', long)]
    url: Option<String>,
}

impl SourceArgs {
    /// Command-line source overrides the configured one
    fn source_config(&self, base: &SourceConfig) -> SourceConfig {
        if let Some(path) = &self.input {
            return SourceConfig {
                url: None,
                path: Some(path.clone()),
                timeout_secs: base.timeout_secs,
            };
        }
        if let Some(url) = &self.url {
            return SourceConfig {
                url: Some(url.clone()),
                path: None,
                timeout_secs: base.timeout_secs,
            };
        }
        base.clone()
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    match cli.command {
        Commands::Render {
            source,
            output,
            pretty,
        } => render(&config, &source, output.as_deref(), pretty),
        Commands::Summary { source } => summary(&config, &source),
        Commands::Currencies => {
            list_currencies();
            Ok(())
        }
        Commands::Info => show_info(&config, cli.config.as_deref()),
    }
}

/// Fetch records into a fresh session and select the requested currency
fn load_session(config: &AppConfig, args: &SourceArgs) -> Result<ChartSession> {
    let source = ConfiguredSource::from_config(&args.source_config(&config.source))
        .context("Failed to set up record source")?;

    let mut session = ChartSession::from_config(config);

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    spinner.set_message(format!("Loading records ({})...", source.name()));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    let loaded = runtime.block_on(session.ingest(&source));
    spinner.finish_and_clear();

    if !loaded {
        eprintln!(
            "{} No records loaded from {}; showing the no-data view",
            "Warning:".yellow(),
            source.name()
        );
    }

    if let Some(currency) = args.currency {
        session.select(currency);
    }
    Ok(session)
}

fn render(config: &AppConfig, args: &SourceArgs, output: Option<&Path>, pretty: bool) -> Result<()> {
    let mut session = load_session(config, args)?;
    let view = session.render();

    let json = if pretty {
        serde_json::to_string_pretty(view)?
    } else {
        serde_json::to_string(view)?
    };

    match output {
        Some(path) => {
            fs::write(path, json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!(
                "{} {}",
                "View written to".green(),
                path.display().to_string().bold()
            );
        }
        None => println!("{}", json),
    }
    Ok(())
}

fn summary(config: &AppConfig, args: &SourceArgs) -> Result<()> {
    let mut session = load_session(config, args)?;
    let rejected = session.rejected().len();
    let view = session.render();

    print_summary(view);
    if rejected > 0 {
        println!(
            "  {} {}",
            "Rejected records:".bold(),
            rejected.to_string().yellow()
        );
    }
    Ok(())
}

fn print_summary(view: &ViewModel) {
    println!("{}", view.title.cyan().bold());
    println!();
    println!("  {} {}", AVERAGE_LABEL.bold(), view.average_text());

    match (view.period_axis.first(), view.period_axis.last()) {
        (Some(first), Some(last)) => println!(
            "  {} {} ({} .. {})",
            "Periods:".bold(),
            view.period_axis.len(),
            first,
            last
        ),
        _ => println!("  {} 0", "Periods:".bold()),
    }

    if let Some(range) = view.range {
        println!(
            "  {} {} .. {} (tick {})",
            "Axis:".bold(),
            range.min,
            range.max,
            range.tick_interval
        );
    }
}

fn list_currencies() {
    println!("{}", "Tracked currencies".cyan().bold());
    println!();
    for currency in Currency::all() {
        println!(
            "  {} {}  {:<14} {}",
            currency.symbol().bold(),
            currency.code(),
            currency.indicator_name(),
            currency.title().dimmed()
        );
    }
}

fn show_info(config: &AppConfig, config_path: Option<&Path>) -> Result<()> {
    println!(
        "{} v{}",
        "rate-chart".cyan().bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!();

    let resolved_path = config_path
        .map(Path::to_path_buf)
        .or_else(AppConfig::default_path);
    match resolved_path {
        Some(path) if path.exists() => println!("  {} {}", "Config:".bold(), path.display()),
        _ => println!("  {} {}", "Config:".bold(), "built-in defaults".dimmed()),
    }

    println!("  {} {}", "Default currency:".bold(), config.default_currency);
    match (&config.source.url, &config.source.path) {
        (Some(url), _) => println!("  {} {}", "Source:".bold(), url),
        (None, Some(path)) => println!("  {} {}", "Source:".bold(), path.display()),
        (None, None) => println!(
            "  {} {} (set {} or --input)",
            "Source:".bold(),
            "none".yellow(),
            API_URL_ENV
        ),
    }
    println!("  {} {}s", "Timeout:".bold(), config.source.timeout_secs);
    Ok(())
}
