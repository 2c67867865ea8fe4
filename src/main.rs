use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fundstory::config::{Config, LoggingConfig};
use fundstory::error::FundstoryErrorTrait;
use fundstory::filter::FilterArgs;

mod commands;

#[derive(Parser)]
#[command(
    name = "fundstory",
    version,
    about = "Keyword and sentence statistics for fashion crowdfunding storytelling",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Sentence records file (.json or .jsonl)
    #[arg(short, long, global = true)]
    input: Option<PathBuf>,

    /// Use the built-in sample dataset instead of --input
    #[arg(long, global = true, default_value = "false")]
    demo: bool,

    /// TOML configuration file (defaults to FUNDSTORY_* environment variables)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Product category filter (e.g. Coat, Shirt, 한복, or All)
    #[arg(long, global = true)]
    category: Option<String>,

    /// Season filter (All, Summer, Winter, Spring, Autumn)
    #[arg(long, global = true, default_value = "All")]
    season: String,

    /// Price preset (all, under-50k, 50k-100k, 100k-200k, 200k-300k, over-300k)
    #[arg(long, global = true)]
    price: Option<String>,

    /// Custom minimum price in won (with --max-price)
    #[arg(long, global = true)]
    min_price: Option<String>,

    /// Custom maximum price in won (with --min-price)
    #[arg(long, global = true)]
    max_price: Option<String>,

    /// Seed for reproducible sampling
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Print JSON instead of text
    #[arg(long, global = true, default_value = "false")]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log format (text, json)
    #[arg(long, global = true)]
    log_format: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the most common element order across campaigns
    Order,

    /// List the narrative elements present in the data
    Elements,

    /// Rank keywords for one element
    Keywords {
        /// Element name
        #[arg(short, long)]
        element: String,

        /// Number of keywords to show
        #[arg(short, long, default_value = "20")]
        top: usize,
    },

    /// Sample example sentences for one element
    Examples {
        /// Element name
        #[arg(short, long)]
        element: String,

        /// Number of sentences (defaults to the configured value)
        #[arg(short, long)]
        n: Option<usize>,
    },

    /// Show bigrams related to an element's top keywords
    Bigrams {
        /// Element name
        #[arg(short, long)]
        element: String,

        /// Top keywords to associate (defaults to the configured value)
        #[arg(long)]
        top_words: Option<usize>,

        /// Bigrams per keyword (defaults to the configured value)
        #[arg(long)]
        top_bigrams: Option<usize>,
    },

    /// Full per-element report
    Report {
        /// Include elements outside the dominant order
        #[arg(long, default_value = "false")]
        all_elements: bool,
    },

    /// List showcased success cases
    SuccessCases {
        /// Lookup file (defaults to the configured path)
        #[arg(short, long)]
        path: Option<PathBuf>,
    },

    /// Random demonstration weights for chart labels
    DemoWeights {
        /// Chart labels
        #[arg(required = true)]
        labels: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::from_env()?,
    };
    if let Some(seed) = cli.seed {
        config.analysis.seed = Some(seed);
    }
    if let Some(format) = &cli.log_format {
        config.logging.format = format.clone();
    }
    config.validate().context("Invalid configuration")?;

    setup_tracing(&config.logging, cli.verbose)?;

    tracing::info!("fundstory starting");

    let filter = FilterArgs {
        category: cli.category.clone(),
        season: Some(cli.season.clone()),
        price: cli.price.clone(),
        min_price: cli.min_price.clone(),
        max_price: cli.max_price.clone(),
    };
    let input = cli.input.clone().or_else(|| config.data.records_path.clone());
    let ctx = commands::Context {
        config,
        input,
        demo: cli.demo,
        filter,
        json: cli.json,
    };

    if let Err(err) = dispatch(&ctx, cli.command) {
        if let Some(e) = err.downcast_ref::<fundstory::Error>() {
            tracing::error!(
                category = e.category().description(),
                recoverable = e.is_recoverable(),
                "{}: {e}",
                e.category().korean_desc()
            );
        }
        return Err(err);
    }

    tracing::info!("fundstory completed successfully");
    Ok(())
}

fn dispatch(ctx: &commands::Context, command: Commands) -> Result<()> {
    match command {
        Commands::Order => {
            tracing::info!("Starting order command");
            commands::order(ctx)?;
        }

        Commands::Elements => {
            tracing::info!("Starting elements command");
            commands::elements(ctx)?;
        }

        Commands::Keywords { element, top } => {
            tracing::info!(element = %element, top = %top, "Starting keywords command");
            commands::keywords(ctx, &element, top)?;
        }

        Commands::Examples { element, n } => {
            tracing::info!(element = %element, n = ?n, "Starting examples command");
            commands::examples(ctx, &element, n)?;
        }

        Commands::Bigrams {
            element,
            top_words,
            top_bigrams,
        } => {
            tracing::info!(
                element = %element,
                top_words = ?top_words,
                top_bigrams = ?top_bigrams,
                "Starting bigrams command"
            );
            commands::bigrams(ctx, &element, top_words, top_bigrams)?;
        }

        Commands::Report { all_elements } => {
            tracing::info!(all_elements = %all_elements, "Starting report command");
            commands::report(ctx, all_elements)?;
        }

        Commands::SuccessCases { path } => {
            tracing::info!(path = ?path, "Starting success-cases command");
            commands::success_cases(ctx, path)?;
        }

        Commands::DemoWeights { labels } => {
            tracing::info!(labels = labels.len(), "Starting demo-weights command");
            commands::demo_weights(ctx, &labels)?;
        }
    }

    Ok(())
}

/// `--verbose` wins over the configured level
fn filter_directive(logging: &LoggingConfig, verbose: bool) -> String {
    if verbose {
        String::from("fundstory=debug")
    } else {
        format!("fundstory={},warn", logging.level)
    }
}

fn setup_tracing(logging: &LoggingConfig, verbose: bool) -> Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::new(filter_directive(logging, verbose));

    match logging.format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    Ok(())
}
