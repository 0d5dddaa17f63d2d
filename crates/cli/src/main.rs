//! # nutritable-cli
//!
//! Batch driver over scraped product dumps: decodes each product's embedded
//! HTML, runs the extraction engine and emits normalized nutrient records.

use anyhow::{bail, Context, Result};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use clap::Parser;
use colored::Colorize;
use nutritable_extract::extract_document;
use nutritable_model::NutrientRecord;
use rayon::prelude::*;
use serde::Serialize;
use std::collections::HashSet;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing_subscriber::EnvFilter;

/// nutritable - normalized nutrition records from scraped product pages
#[derive(Parser)]
#[command(name = "nutritable")]
#[command(author, version, about = "Extract normalized nutrition records from scrape dumps", long_about = None)]
struct Cli {
    /// Directory of scrape dumps (*.json, searched recursively), or a
    /// single .html file for ad-hoc inspection
    #[arg(value_name = "PATH")]
    path: PathBuf,

    /// Output format (jsonl, summary)
    #[arg(short = 'f', long = "format", default_value = "jsonl")]
    format: OutputFormat,

    /// Write output to a file instead of stdout
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// Output format for results.
#[derive(Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    /// One JSON record per extracted product (default)
    #[default]
    Jsonl,
    /// Per-run counts only
    Summary,
}

/// One extracted product, in the shape downstream persistence stores.
#[derive(Serialize)]
struct ExtractedProduct {
    product_id: String,
    nutrition: NutrientRecord,
    measure: String,
    amount: f64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .init();
    }

    if cli.path.is_file() {
        return run_single_file(&cli);
    }
    if cli.path.is_dir() {
        return run_batch(&cli);
    }
    bail!("no such file or directory: {}", cli.path.display());
}

/// Extract a single HTML file and print the result.
fn run_single_file(cli: &Cli) -> Result<()> {
    let html = fs::read_to_string(&cli.path)
        .with_context(|| format!("Failed to read file: {}", cli.path.display()))?;

    match extract_document(&html) {
        Some((nutrition, unit)) => {
            let product = ExtractedProduct {
                product_id: cli
                    .path
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_default(),
                nutrition,
                measure: unit.measure.as_str().to_string(),
                amount: unit.amount,
            };
            write_output(cli, &[product], 1)
        }
        None => {
            eprintln!("{}", "no usable nutrition data".yellow());
            Ok(())
        }
    }
}

/// Extract every dump under the root directory, in parallel.
fn run_batch(cli: &Cli) -> Result<()> {
    let dumps = collect_dumps(&cli.path)?;
    if dumps.is_empty() {
        bail!("no *.json dumps found under {}", cli.path.display());
    }
    tracing::info!(count = dumps.len(), "processing scrape dumps");

    let processed = AtomicUsize::new(0);
    let products: Vec<ExtractedProduct> = dumps
        .par_iter()
        .filter_map(|path| {
            let n = processed.fetch_add(1, Ordering::Relaxed) + 1;
            if n % 1000 == 0 {
                tracing::info!(processed = n, "progress");
            }
            match process_dump(path) {
                Ok(product) => product,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "skipping unreadable dump");
                    None
                }
            }
        })
        .collect();

    write_output(cli, &products, dumps.len())
}

/// Find dump files under `root`, sorted for deterministic output, deduped
/// by file stem (first occurrence wins).
fn collect_dumps(root: &Path) -> Result<Vec<PathBuf>> {
    let pattern = format!("{}/**/*.json", root.display());
    let mut paths: Vec<PathBuf> = glob::glob(&pattern)
        .with_context(|| format!("Invalid search pattern: {pattern}"))?
        .filter_map(std::result::Result::ok)
        .filter(|p| p.is_file())
        .collect();
    paths.sort();

    let mut seen = HashSet::new();
    paths.retain(|p| {
        let stem = p
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        seen.insert(stem)
    });
    Ok(paths)
}

/// Decode one scrape dump and run extraction over its embedded HTML.
///
/// Dumps hold `products[0].product_uid` and `products[0].details_html`
/// (base64). `Ok(None)` means the product had no usable nutrition data.
fn process_dump(path: &Path) -> Result<Option<ExtractedProduct>> {
    let raw = fs::read_to_string(path)?;
    let dump: serde_json::Value = serde_json::from_str(&raw)?;

    let product = dump
        .get("products")
        .and_then(|p| p.get(0))
        .context("dump has no products[0]")?;
    let uid = product
        .get("product_uid")
        .and_then(|v| v.as_str())
        .context("product has no product_uid")?;
    let encoded = product
        .get("details_html")
        .and_then(|v| v.as_str())
        .context("product has no details_html")?;

    let html = BASE64.decode(encoded).context("details_html is not valid base64")?;
    let html = String::from_utf8(html).context("details_html is not valid UTF-8")?;

    Ok(extract_document(&html).map(|(nutrition, unit)| ExtractedProduct {
        product_id: uid.to_string(),
        nutrition,
        measure: unit.measure.as_str().to_string(),
        amount: unit.amount,
    }))
}

/// Emit results in the requested format.
fn write_output(cli: &Cli, products: &[ExtractedProduct], total: usize) -> Result<()> {
    let mut out: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(
            fs::File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?,
        ),
        None => Box::new(std::io::stdout().lock()),
    };

    match cli.format {
        OutputFormat::Jsonl => {
            for product in products {
                serde_json::to_writer(&mut out, product)?;
                writeln!(out)?;
            }
        }
        OutputFormat::Summary => {
            writeln!(
                out,
                "{} {} extracted, {} without usable data",
                "nutritable:".cyan().bold(),
                products.len(),
                total - products.len(),
            )?;
        }
    }

    Ok(())
}
