//! Batch command - extract records from a directory of packages.

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use coopex_core::applicant::{ApplicantParser, ExtractionRuleSet};
use coopex_core::collector::finalize;
use coopex_core::dispatch::{discover, FilenamePattern};
use coopex_core::models::record::Record;
use coopex_core::pool::WorkerPool;
use coopex_core::text::CommandExtractor;

use super::{load_config, PipelineArgs};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Directory containing the packages
    #[arg(default_value = ".")]
    dir: PathBuf,

    /// Output CSV file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Number of parallel workers
    #[arg(short = 'j', long)]
    jobs: Option<usize>,

    /// Hide the progress bar
    #[arg(short, long)]
    quiet: bool,

    #[command(flatten)]
    pipeline: PipelineArgs,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    // Load configuration and apply overrides
    let mut config = load_config(config_path)?;
    args.pipeline.apply(&mut config);
    if let Some(jobs) = args.jobs {
        config.pool.workers = jobs;
    }
    config.validate()?;

    let pattern = FilenamePattern::new(&config.dispatch.file_pattern)?;
    let rules = Arc::new(ExtractionRuleSet::from_config(&config.rules)?);

    let candidates = discover(&args.dir, &pattern)?;
    info!(
        "Found {} packages in {}",
        candidates.len(),
        args.dir.display()
    );

    let pb = if args.quiet {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(candidates.len() as u64)
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} packages")?
            .progress_chars("=>-"),
    );

    let progress = pb.clone();
    let pool = WorkerPool::new(
        CommandExtractor::from_config(&config.extractor),
        ApplicantParser::new(rules),
        pattern,
    )
    .with_config(&config.pool)
    .with_progress(Arc::new(move |_: &Record| progress.inc(1)));

    let records = match pool.run(candidates).await {
        Ok(records) => records,
        Err(e) => {
            pb.abandon();
            return Err(e.into());
        }
    };
    pb.finish_and_clear();

    // Write outputs
    let records = match &args.output {
        Some(path) => {
            let file = File::create(path)
                .map_err(|e| anyhow::anyhow!("Failed to create {}: {}", path.display(), e))?;
            let records = finalize(BufWriter::new(file), records)?;
            debug!("Wrote output to {}", path.display());
            records
        }
        None => finalize(io::stdout().lock(), records)?,
    };

    if !args.quiet {
        eprintln!(
            "{} Extracted {} records in {:?}",
            style("✓").green(),
            records.len(),
            start.elapsed()
        );
    }

    Ok(())
}
