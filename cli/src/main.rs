//! sentclean CLI - document sanitization and sentence segmentation tool

mod config;
mod io;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use sentclean::render::{self, JsonFormat};
use sentclean::{SanitizePreset, Sanitizer, Sentclean};

use config::Config;

#[derive(Parser)]
#[command(name = "sentclean")]
#[command(version)]
#[command(about = "Sanitize documents and split them into sentences", long_about = None)]
struct Cli {
    /// Input document (text or JSON)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output JSON file (stdout if not specified)
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// JSON config file with "sanitize" and "segment" sections
    #[arg(long, global = true, env = "SENTCLEAN_CONFIG", value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Remove markup, emails, URLs, IP addresses and whitespace
    Sanitize {
        /// Input document
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Sanitize preset
        #[arg(long, value_enum)]
        preset: Option<PresetLevel>,
    },

    /// Split a document into sentences (JSON array)
    #[command(alias = "split")]
    Segment {
        /// Input document
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output JSON file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Maximum sentence length in characters
        #[arg(long, env = "SENTCLEAN_MAX_LEN")]
        max_len: Option<usize>,

        /// Segment the raw text without sanitizing it
        #[arg(long)]
        raw: bool,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Sanitize and segment every matching file under a directory
    Batch {
        /// Input directory (or a single file)
        #[arg(value_name = "DIR")]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// File extension to pick up
        #[arg(long, default_value = "txt")]
        ext: String,

        /// Maximum sentence length in characters
        #[arg(long, env = "SENTCLEAN_MAX_LEN")]
        max_len: Option<usize>,

        /// Sanitize preset
        #[arg(long, value_enum)]
        preset: Option<PresetLevel>,

        /// Process documents one at a time
        #[arg(long)]
        sequential: bool,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum PresetLevel {
    /// Numbers and whitespace only
    Minimal,
    /// Markup, PII and whitespace (default)
    Standard,
    /// Standard plus Unicode cleanup
    Aggressive,
}

impl From<PresetLevel> for SanitizePreset {
    fn from(level: PresetLevel) -> Self {
        match level {
            PresetLevel::Minimal => SanitizePreset::Minimal,
            PresetLevel::Standard => SanitizePreset::Standard,
            PresetLevel::Aggressive => SanitizePreset::Aggressive,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = Config::load(cli.config.as_deref()).and_then(|config| match cli.command {
        Some(Commands::Sanitize {
            input,
            output,
            preset,
        }) => cmd_sanitize(&config, &input, output.as_deref(), preset),
        Some(Commands::Segment {
            input,
            output,
            max_len,
            raw,
            compact,
        }) => cmd_segment(&config, &input, output.as_deref(), max_len, raw, compact),
        Some(Commands::Batch {
            input,
            output,
            ext,
            max_len,
            preset,
            sequential,
        }) => cmd_batch(
            &config,
            &input,
            output.as_deref(),
            &ext,
            max_len,
            preset,
            sequential,
        ),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: process if input is provided
            if let Some(input) = cli.input {
                cmd_process(&config, &input, cli.output.as_deref())
            } else {
                println!("{}", "Usage: sentclean <FILE> [OUTPUT]".yellow());
                println!("       sentclean --help for more information");
                Ok(())
            }
        }
    });

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Build the pipeline from the config file, then apply command-line overrides.
fn pipeline(
    config: &Config,
    preset: Option<PresetLevel>,
    max_len: Option<usize>,
    raw: bool,
) -> Sentclean {
    let mut pipeline = Sentclean::new()
        .with_sanitize_options(config.sanitize.clone())
        .with_segment_options(config.segment.clone());

    if let Some(level) = preset {
        pipeline = pipeline.with_preset(level.into());
    }
    if let Some(max_len) = max_len {
        pipeline = pipeline.with_max_len(max_len);
    }
    if raw {
        pipeline = pipeline.raw();
    }
    pipeline
}

fn emit(
    output: Option<&Path>,
    content: &str,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    match output {
        Some(path) => {
            if json {
                io::write_json(path, content)?;
            } else {
                io::write_text(path, content)?;
            }
            println!("{} {}", "Saved to".green(), path.display());
        }
        None => println!("{}", content),
    }
    Ok(())
}

fn cmd_process(
    config: &Config,
    input: &Path,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let content = io::read_document(input)?;
    let processed = pipeline(config, None, None, false).process(&content)?;
    let json = render::to_json(&processed, JsonFormat::Pretty)?;
    emit(output, &json, true)
}

fn cmd_sanitize(
    config: &Config,
    input: &Path,
    output: Option<&Path>,
    preset: Option<PresetLevel>,
) -> Result<(), Box<dyn std::error::Error>> {
    let content = io::read_document(input)?;

    let sanitizer = match preset {
        Some(level) => Sanitizer::from_preset(level.into()),
        None => Sanitizer::new(config.sanitize.clone()),
    };
    let sanitized = sanitizer.process(&content);

    emit(output, &sanitized, false)
}

fn cmd_segment(
    config: &Config,
    input: &Path,
    output: Option<&Path>,
    max_len: Option<usize>,
    raw: bool,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let content = io::read_document(input)?;
    let processed = pipeline(config, None, max_len, raw).process(&content)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    let json = render::sentences_to_json(&processed.sentences, format)?;

    emit(output, &json, true)
}

fn cmd_batch(
    config: &Config,
    input: &Path,
    output: Option<&Path>,
    ext: &str,
    max_len: Option<usize>,
    preset: Option<PresetLevel>,
    sequential: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let files = io::discover_files(input, ext)?;
    if files.is_empty() {
        println!(
            "{} no .{} files under {}",
            "Nothing to do:".yellow(),
            ext.trim_start_matches('.'),
            input.display()
        );
        return Ok(());
    }

    let output_dir = output.map(|p| p.to_path_buf()).unwrap_or_else(|| {
        let stem = input.file_stem().unwrap_or_default().to_string_lossy();
        input.with_file_name(format!("{}_output", stem))
    });

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    pb.set_message("Reading documents...");
    let (sources, documents) = read_batch(files, &pb);

    pb.set_message("Processing...");
    let results = pipeline(config, preset, max_len, false)
        .with_parallel(!sequential)
        .process_batch(&documents)?;

    pb.set_message("Writing results...");
    let mut sentence_total = 0;
    for (path, processed) in sources.iter().zip(&results) {
        let target = io::output_path(path, input, &output_dir);
        let json = render::to_json(processed, JsonFormat::Pretty)?;
        io::write_json(&target, &json)?;
        sentence_total += processed.sentence_count();
        pb.inc(1);
    }

    pb.finish_with_message("Done!");

    println!(
        "\n{} {} documents, {} sentences",
        "Processed".green().bold(),
        results.len(),
        sentence_total
    );
    println!("  {} {}", "└─".dimmed(), output_dir.display());

    Ok(())
}

/// Read every file, skipping unreadable ones. Skipped files advance `pb` here;
/// read files advance it when their result is written.
fn read_batch(files: Vec<PathBuf>, pb: &ProgressBar) -> (Vec<PathBuf>, Vec<String>) {
    let mut sources = Vec::with_capacity(files.len());
    let mut documents = Vec::with_capacity(files.len());
    for path in files {
        match io::read_document(&path) {
            Ok(content) => {
                documents.push(content);
                sources.push(path);
            }
            Err(e) => {
                log::warn!("skipping {}: {}", path.display(), e);
                pb.println(format!("{} {}", "Skipped".yellow(), path.display()));
                pb.inc(1);
            }
        }
    }
    (sources, documents)
}

fn cmd_version() {
    println!("{} {}", "sentclean".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Document sanitization and sentence segmentation tool");
    println!();
    println!("License: MIT");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_read_batch_counts_skipped_files() {
        let dir = TempDir::new().unwrap();
        let good = dir.path().join("good.txt");
        let bad = dir.path().join("bad.json");
        fs::write(&good, "正文。").unwrap();
        fs::write(&bad, "42").unwrap();

        let pb = ProgressBar::hidden();
        let (sources, documents) = read_batch(vec![good.clone(), bad], &pb);

        assert_eq!(sources, vec![good]);
        assert_eq!(documents, vec!["正文。".to_string()]);
        // Skipped file already counted; the read one is counted on write
        assert_eq!(pb.position(), 1);
    }
}
