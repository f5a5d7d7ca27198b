// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use relnotes::utils::logging::{format_error, format_success, format_version, format_warning};
use relnotes::{Config, JsonExporter, LoadReport, Registry, SourceScanner, Validator};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "relnotes")]
#[command(author = "cipher")]
#[command(version = "0.1.0")]
#[command(about = "Index, check and query a directory of versioned release notes", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    /// Overrides `sources.root` from the configuration
    #[arg(long, value_name = "DIR", env = "RELNOTES_ROOT")]
    root: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every indexed release in ascending version order
    List,

    /// Print one release's notes
    Show {
        version: String,

        #[arg(long, conflicts_with = "section")]
        outline: bool,

        #[arg(long, value_name = "HEADING")]
        section: Option<String>,
    },

    /// Load all sources and report parse and duplicate errors
    Check,

    /// Write the ordered document set as JSON
    Export {
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[arg(short, long)]
        pretty: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    relnotes::utils::logging::init_logger(cli.color, cli.verbose);

    info!("Loading configuration from: {}", cli.config.display());

    let mut config = if cli.config.exists() {
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::load(None).unwrap_or_else(|e| {
            warn!("Falling back to built-in defaults: {}", e);
            Config::default_config()
        })
    };

    if let Some(root) = cli.root {
        config.sources.root = root;
    }

    let registry = Registry::new();
    let report = load_registry(&registry, &config)?;

    match cli.command {
        Commands::List => cmd_list(&registry, &report),
        Commands::Show {
            version,
            outline,
            section,
        } => cmd_show(&registry, &version, outline, section.as_deref()),
        Commands::Check => cmd_check(&registry, &report),
        Commands::Export { output, pretty } => {
            let output = output.unwrap_or_else(|| config.export.output_dir.clone());
            cmd_export(&registry, output, pretty || config.export.pretty)
        }
    }
}

fn load_registry(registry: &Registry, config: &Config) -> Result<LoadReport> {
    let scanner = SourceScanner::new(config.sources.clone());
    let files = scanner
        .scan_directory(&config.sources.root)
        .context("Failed to scan release-notes directory")?;

    let report = registry.load(&files);
    if !report.is_clean() {
        warn!(
            "{} of {} sources failed to load",
            report.errors.len(),
            files.len()
        );
    }

    Ok(report)
}

fn cmd_list(registry: &Registry, report: &LoadReport) -> Result<()> {
    let documents = registry.all();

    if documents.is_empty() {
        println!("{}", format_warning("No release notes indexed"));
        return Ok(());
    }

    for document in &documents {
        println!(
            "{:>8}  {}  ({})",
            format_version(&document.version.to_string()),
            Validator::truncate_text(&document.title, 60),
            document.source_path
        );
    }

    if !report.is_clean() {
        println!(
            "\n{}",
            format_warning(&format!(
                "{} sources skipped; run `relnotes check` for details",
                report.errors.len()
            ))
        );
    }

    Ok(())
}

fn cmd_show(registry: &Registry, version: &str, outline: bool, section: Option<&str>) -> Result<()> {
    let document = registry
        .get(version)
        .with_context(|| format!("Cannot show release {}", version))?;

    if outline {
        println!("{}", document.title);
        for heading in document.outline() {
            let indent = "  ".repeat(heading.level.saturating_sub(1) as usize);
            println!("{}{}", indent, heading.text);
        }
        return Ok(());
    }

    if let Some(heading) = section {
        let text = document
            .section(heading)
            .with_context(|| format!("No section {:?} in release {}", heading, document.version))?;
        println!("{}", text);
        return Ok(());
    }

    println!("# {}", document.title);
    print!("{}", document.body);
    Ok(())
}

fn cmd_check(registry: &Registry, report: &LoadReport) -> Result<()> {
    for error in &report.errors {
        println!("{}", format_error(&error.to_string()));
    }

    let stats = &report.stats;
    info!(
        "Read {} sources ({} bytes) in {} ms, success rate {:.1}%",
        stats.sources_read,
        stats.total_bytes_read,
        stats.duration_ms,
        stats.success_rate()
    );

    if report.is_clean() {
        println!(
            "{}",
            format_success(&format!("{} release notes indexed, no errors", registry.len()))
        );
        Ok(())
    } else {
        Err(anyhow::anyhow!(
            "{} parse errors, {} duplicate versions, {} other failures",
            report.parse_errors().count(),
            report.duplicate_errors().count(),
            report.errors.len()
                - report.parse_errors().count()
                - report.duplicate_errors().count()
        ))
    }
}

fn cmd_export(registry: &Registry, output: PathBuf, pretty: bool) -> Result<()> {
    info!("Initializing JSON export");

    let exporter = JsonExporter::new(output).context("Failed to create export directory")?;
    let manifest = exporter
        .export(&registry.snapshot(), pretty)
        .context("JSON export failed")?;

    println!(
        "{}",
        format_success(&format!(
            "Exported {} documents to {}",
            manifest.total_documents,
            exporter.output_dir().display()
        ))
    );

    Ok(())
}
