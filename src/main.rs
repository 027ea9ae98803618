//! doc-compare: line and word level document comparison
//!
//! Compares two versions of a slide deck, Word document or text file.

#![allow(clippy::needless_pass_by_value)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use doc_compare::{
    cli,
    config::{
        AppConfig, ComparePaths, CompareConfig, ConfigPreset, ExtractConfig, ExtractFormat,
        Validatable,
    },
    diff::{DiffAlgorithm, WordDiffMode},
    pipeline::exit_codes,
    reports::ReportFormat,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build long version string with format support info
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nSupported Documents:",
        "\n  Slides:  .pptx (compared slide by slide)",
        "\n  Word:    .docx",
        "\n  Text:    .txt",
        "\n\nOutput Formats:",
        "\n  summary, side-by-side, json, markdown, html"
    )
}

#[derive(Parser)]
#[command(name = "doc-compare")]
#[command(version, long_version = build_long_version())]
#[command(about = "Line and word level comparison of documents", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  No changes detected (or --fail-on-change not set)
    1  Changes detected with --fail-on-change
    3  Error occurred

EXAMPLES:
    # Compare two slide decks in the terminal
    doc-compare compare deck-v1.pptx deck-v2.pptx

    # CI check with a JSON report
    doc-compare compare old.docx new.docx -o json -O diff.json --fail-on-change

    # Shareable HTML report
    doc-compare compare old.pptx new.pptx -o html -O review.html

    # Inspect the lines the comparison will see
    doc-compare extract deck.pptx")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true, env = "DOC_COMPARE_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

// ============================================================================
// Command argument structs
// ============================================================================

/// Arguments for the `compare` subcommand
#[derive(Parser)]
struct CompareArgs {
    /// Path to the original document
    original: PathBuf,

    /// Path to the revised document
    revised: PathBuf,

    /// Output format (auto: side-by-side on a terminal, summary otherwise)
    #[arg(short, long)]
    output: Option<ReportFormat>,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Line alignment algorithm for Word and text documents
    #[arg(long)]
    algorithm: Option<DiffAlgorithm>,

    /// Word highlighting mode (default: positional for side-by-side, aligned otherwise)
    #[arg(long)]
    word_mode: Option<WordDiffMode>,

    /// Report title
    #[arg(long)]
    title: Option<String>,

    /// Maximum number of changes to render
    #[arg(long)]
    max_items: Option<usize>,

    /// Process slides on a single thread
    #[arg(long)]
    no_parallel: bool,

    /// Keep lines made only of digits (page numbers, counters)
    #[arg(long)]
    keep_numeric: bool,

    /// Side-by-side width in columns (defaults to the terminal width)
    #[arg(long)]
    width: Option<usize>,

    /// Exit with code 1 if any changes are detected
    #[arg(long)]
    fail_on_change: bool,

    /// Start from a named preset (default, ci-cd, strict)
    #[arg(long)]
    preset: Option<String>,
}

/// Arguments for the `extract` subcommand
#[derive(Parser)]
struct ExtractArgs {
    /// Document to extract
    file: PathBuf,

    /// Output format
    #[arg(short, long, default_value = "text")]
    output: ExtractFormat,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Keep lines made only of digits (page numbers, counters)
    #[arg(long)]
    keep_numeric: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two documents
    Compare(CompareArgs),

    /// Print the lines extracted from a document
    Extract(ExtractArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate JSON Schema for the config file format
    ConfigSchema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .doc-compare.yaml in the current directory
    Init,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    match run(cli) {
        Ok(code) => {
            if code != exit_codes::SUCCESS {
                std::process::exit(code);
            }
        }
        Err(err) => {
            eprintln!("Error: {err:#}");
            std::process::exit(exit_codes::ERROR);
        }
    }
}

/// Dispatch to command handlers, returning the process exit code.
fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Compare(args) => {
            let base = match args.preset.as_deref() {
                Some(name) => {
                    let preset = ConfigPreset::from_name(name)
                        .with_context(|| format!("unknown preset '{name}'"))?;
                    AppConfig::from_preset(preset)
                }
                None => AppConfig::default(),
            };

            let overrides = AppConfig::builder()
                .algorithm(args.algorithm.unwrap_or_default())
                .parallel(!args.no_parallel)
                .keep_numeric(args.keep_numeric)
                .output_format(args.output.unwrap_or_default())
                .output_file(args.output_file)
                .word_mode(args.word_mode)
                .width(args.width)
                .no_color(cli.no_color)
                .fail_on_change(args.fail_on_change)
                .quiet(cli.quiet)
                .build();

            let mut app = load_app_config(cli.config.as_ref(), base);
            app.merge(&overrides);
            if args.title.is_some() {
                app.output.title = args.title;
            }
            if args.max_items.is_some() {
                app.output.max_items = args.max_items;
            }
            check_config(&app)?;

            let config = CompareConfig::from_app(
                ComparePaths {
                    original: args.original,
                    revised: args.revised,
                },
                app,
            );
            cli::run_compare(config)
        }

        Commands::Extract(args) => {
            let mut app = load_app_config(cli.config.as_ref(), AppConfig::default());
            if args.keep_numeric {
                app.extraction.keep_numeric = true;
            }
            check_config(&app)?;

            let config = ExtractConfig {
                path: args.file,
                format: args.output,
                file: args.output_file,
                extraction: app.extraction,
            };
            cli::run_extract(config, cli.quiet)?;
            Ok(exit_codes::SUCCESS)
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "doc-compare", &mut io::stdout());
            Ok(exit_codes::SUCCESS)
        }

        Commands::ConfigSchema { output } => {
            let schema = doc_compare::config::generate_json_schema();
            match output {
                Some(path) => {
                    std::fs::write(&path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => {
                    println!("{schema}");
                }
            }
            Ok(exit_codes::SUCCESS)
        }

        Commands::Config { action } => {
            match action {
                ConfigAction::Show => {
                    let (config, loaded_from) =
                        doc_compare::config::load_or_default(cli.config.as_deref());
                    if let Some(path) = &loaded_from {
                        eprintln!("# Loaded from: {}", path.display());
                    } else {
                        eprintln!("# No config file found; showing defaults");
                    }
                    let yaml =
                        serde_yaml_ng::to_string(&config).context("failed to serialize config")?;
                    print!("{yaml}");
                }
                ConfigAction::Path => {
                    let search_paths: [Option<String>; 3] = [
                        std::env::current_dir().ok().map(|p| p.display().to_string()),
                        doc_compare::config::user_config_dir().map(|p| p.display().to_string()),
                        dirs::home_dir().map(|p| p.display().to_string()),
                    ];
                    eprintln!("Config file search paths (in order):");
                    for path in search_paths.into_iter().flatten() {
                        eprintln!("  {path}");
                    }
                    eprintln!();
                    eprintln!("Recognized file names:");
                    for name in [
                        ".doc-compare.yaml",
                        ".doc-compare.yml",
                        "doc-compare.yaml",
                        "doc-compare.yml",
                    ] {
                        eprintln!("  {name}");
                    }
                    eprintln!();
                    match doc_compare::config::discover_config_file(cli.config.as_deref()) {
                        Some(path) => eprintln!("Active config file: {}", path.display()),
                        None => eprintln!("No config file found."),
                    }
                }
                ConfigAction::Init => {
                    let target = std::env::current_dir()
                        .context("cannot determine current directory")?
                        .join(doc_compare::config::default_config_path());
                    if target.exists() {
                        anyhow::bail!(
                            "{} already exists. Remove it first to re-initialize.",
                            target.display()
                        );
                    }
                    let content = doc_compare::config::generate_full_example_config();
                    std::fs::write(&target, content)
                        .with_context(|| format!("failed to write {}", target.display()))?;
                    eprintln!("Created {}", target.display());
                }
            }
            Ok(exit_codes::SUCCESS)
        }
    }
}

/// Layer the discovered config file over `base`.
fn load_app_config(explicit: Option<&PathBuf>, mut base: AppConfig) -> AppConfig {
    let (file_config, loaded_from) = doc_compare::config::load_or_default(explicit.map(PathBuf::as_path));
    if let Some(path) = loaded_from {
        tracing::debug!("Using config file {}", path.display());
        base.merge(&file_config);
    }
    base
}

/// Fail with every validation problem listed.
fn check_config(config: &AppConfig) -> Result<()> {
    let errors = config.validate();
    if errors.is_empty() {
        return Ok(());
    }
    let details: Vec<String> = errors.iter().map(ToString::to_string).collect();
    anyhow::bail!("invalid configuration:\n  {}", details.join("\n  "))
}
