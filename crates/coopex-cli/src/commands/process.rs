//! Process command - extract the record for a single package.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use console::style;
use tracing::info;

use coopex_core::applicant::{ApplicantParser, ExtractionRuleSet};
use coopex_core::collector::write_csv;
use coopex_core::dispatch::FilenamePattern;
use coopex_core::models::record::Record;
use coopex_core::text::{CommandExtractor, TextExtractor};

use super::{load_config, PipelineArgs};

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Package file, named like "First Last (id).pdf"
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    #[command(flatten)]
    pipeline: PipelineArgs,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output with header
    Csv,
    /// Plain text summary
    Text,
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let mut config = load_config(config_path)?;
    args.pipeline.apply(&mut config);
    config.validate()?;

    // Check input file exists
    if !args.input.is_file() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let file_name = args
        .input
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("");

    let pattern = FilenamePattern::new(&config.dispatch.file_pattern)?;
    let identity = pattern.parse(file_name).ok_or_else(|| {
        anyhow::anyhow!(
            "File name '{}' does not match the filename pattern {}",
            file_name,
            config.dispatch.file_pattern
        )
    })?;

    info!("Processing file: {}", args.input.display());

    let extractor = CommandExtractor::from_config(&config.extractor);
    let text = extractor.extract(&args.input).await.map_err(|e| {
        anyhow::anyhow!("Text extraction failed for {}: {}", args.input.display(), e)
    })?;

    let rules = Arc::new(ExtractionRuleSet::from_config(&config.rules)?);
    let result = ApplicantParser::new(rules).parse(&identity, &text);

    for warning in &result.warnings {
        eprintln!("{} {}", style("⚠").yellow(), warning);
    }

    let output = format_record(&result.record, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        eprintln!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        print!("{}", output);
    }

    Ok(())
}

fn format_record(record: &Record, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(record)?)),
        OutputFormat::Csv => {
            let mut buf = Vec::new();
            write_csv(&mut buf, std::slice::from_ref(record))?;
            Ok(String::from_utf8(buf)?)
        }
        OutputFormat::Text => Ok(format_record_text(record)),
    }
}

fn format_record_text(record: &Record) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Applicant: {} {} ({})\n",
        record.first_name, record.last_name, record.id
    ));
    output.push('\n');

    output.push_str("Contact:\n");
    if record.emails_with_name.is_empty() {
        output.push_str("  (no email found)\n");
    }
    for email in &record.emails_with_name {
        output.push_str(&format!("  {}\n", email));
    }
    if let Some(link) = &record.profile_link {
        output.push_str(&format!("  LinkedIn: {}\n", link));
    }
    if let Some(link) = &record.repo_link {
        output.push_str(&format!("  Github: {}\n", link));
    }
    output.push('\n');

    output.push_str(&format!(
        "Cover letter: {}\n",
        record.cover_letter_label()
    ));

    if !record.evaluations.is_empty() {
        output.push_str(&format!(
            "Work term evaluations: {}\n",
            record.evaluations.join(", ")
        ));
    }

    if !record.term_averages.is_empty() {
        output.push_str(&format!(
            "Term averages: {}\n",
            record.term_averages.join(", ")
        ));
    }
    output.push_str(&format!(
        "Overall average: {}\n",
        record.overall_average_label()
    ));

    output
}
