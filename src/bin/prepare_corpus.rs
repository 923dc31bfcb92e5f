use std::path::{Path, PathBuf};

use clap::Parser;
use mfa_corpus::{BuildSummary, CorpusBuilder, CorpusConfig};
use tracing_subscriber::EnvFilter;

#[path = "prepare_corpus/console_observer.rs"]
mod console_observer;

use console_observer::ConsoleObserver;

#[derive(Debug, Parser)]
#[command(name = "prepare_corpus")]
#[command(about = "Pair audio files with transcripts into a Montreal Forced Aligner corpus")]
struct Args {
    /// Directory holding `<stem>.wav` recordings.
    #[arg(
        long,
        env = "MFA_CORPUS_AUDIO_DIR",
        default_value = CorpusConfig::DEFAULT_AUDIO_DIR
    )]
    audio_dir: PathBuf,
    /// Directory holding `<stem>.txt` transcripts.
    #[arg(
        long,
        env = "MFA_CORPUS_TRANSCRIPT_DIR",
        default_value = CorpusConfig::DEFAULT_TRANSCRIPT_DIR
    )]
    transcript_dir: PathBuf,
    /// Corpus directory to fill; created when missing.
    #[arg(
        long,
        env = "MFA_CORPUS_OUTPUT_DIR",
        default_value = CorpusConfig::DEFAULT_OUTPUT_DIR
    )]
    output_dir: PathBuf,
}

fn main() {
    init_tracing();
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<(), String> {
    let args = Args::parse();
    let cwd = std::env::current_dir()
        .map_err(|err| format!("Failed to read the current directory: {err}"))?;

    let config = CorpusConfig::new(
        resolve_path(&cwd, &args.audio_dir),
        resolve_path(&cwd, &args.transcript_dir),
        resolve_path(&cwd, &args.output_dir),
    );

    println!("Starting data preparation...");
    println!("Audio source: {}", config.audio_dir.display());
    println!("Transcript source: {}", config.transcript_dir.display());
    println!("Output corpus: {}", config.output_dir.display());

    let summary = CorpusBuilder::new(config)
        .with_observer(Box::new(ConsoleObserver::new()))
        .build()
        .map_err(|err| format!("Corpus preparation aborted: {err}"))?;

    print_summary(&summary);
    Ok(())
}

fn print_summary(summary: &BuildSummary) {
    println!();
    println!("--- Preparation Complete ---");
    println!("Successfully processed {} file pairs.", summary.processed);
    if summary.is_clean() {
        return;
    }
    println!(
        "Failed to process {} files. Please check:",
        summary.failure_count()
    );
    for stem in summary.failed_stems() {
        println!("- {stem}");
    }
}

fn resolve_path(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
