//! Subcommand implementations.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use chrono::Utc;

use snp_cli::history::{
    HistoryEntry, append_entry, default_history_path, load_history, recent,
};
use snp_core::ConversionService;
use snp_ingest::expand_inputs;
use snp_map::NotationMapper;
use snp_model::{ConversionResult, ValidationReport};
use snp_standards::standard_bands;

use crate::cli::{ConvertArgs, HistoryArgs, ValidateArgs};
use crate::progress::ProgressReporter;
use crate::summary::{print_bands, print_history, print_mapping};

pub fn run_convert(args: &ConvertArgs) -> Result<ConversionResult> {
    let files = expand_inputs(&args.inputs).context("collect input files")?;
    if files.is_empty() {
        return Err(anyhow!("no SnP files found in the given inputs"));
    }

    let mapper = match &args.mapping {
        Some(path) => Some(load_mapper(path)?),
        None => None,
    };

    let options = args.options();
    tracing::info!(
        files = files.len(),
        output = %args.output.display(),
        filter = options.filters_by_band(),
        direction = %options.direction,
        "starting conversion"
    );

    let mut progress = ProgressReporter::new(files.len());
    let result = ConversionService::default().convert(
        &files,
        &args.output,
        options,
        mapper.as_ref(),
        &mut progress,
    );
    progress.finish();

    if let Some(mapper) = &mapper {
        let missing = mapper.missing_keys();
        if !missing.is_empty() {
            tracing::warn!(
                count = missing.len(),
                keys = ?missing,
                "CA notations without a mapping"
            );
        }
    }

    if !args.no_history {
        record_history(args.history.as_deref(), &result);
    }
    Ok(result)
}

pub fn run_validate(args: &ValidateArgs) -> Result<ValidationReport> {
    // Directories expand to their SnP files; anything else is checked as given.
    let files = expand_inputs(&args.inputs).context("collect input files")?;
    Ok(ConversionService::default().validate(&files))
}

pub fn run_bands() -> Result<()> {
    print_bands(standard_bands());
    Ok(())
}

pub fn run_mapping_check(path: &Path) -> Result<()> {
    let mut mapper = NotationMapper::new();
    let report = mapper
        .load(path)
        .with_context(|| format!("load mapping file {}", path.display()))?;
    print_mapping(&report, &mapper);
    Ok(())
}

pub fn run_history(args: &HistoryArgs) -> Result<()> {
    let path = history_path(args.history.as_deref())?;
    let entries = load_history(&path)
        .with_context(|| format!("read history file {}", path.display()))?;
    print_history(recent(&entries, args.limit));
    Ok(())
}

fn load_mapper(path: &Path) -> Result<NotationMapper> {
    let mut mapper = NotationMapper::new();
    let report = mapper
        .load(path)
        .with_context(|| format!("load mapping file {}", path.display()))?;
    if let Some(warning) = &report.version_warning {
        eprintln!("warning: {warning}");
    }
    tracing::info!(mappings = report.count, file = %report.file_name, "loaded notation mappings");
    Ok(mapper)
}

fn history_path(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => default_history_path().context("could not determine home directory"),
    }
}

/// History problems never fail the conversion.
fn record_history(explicit: Option<&Path>, result: &ConversionResult) {
    let path = match history_path(explicit) {
        Ok(path) => path,
        Err(error) => {
            tracing::warn!(%error, "skipping conversion history");
            return;
        }
    };
    let entry = HistoryEntry::from_result(result, Utc::now());
    if let Err(error) = append_entry(&path, entry) {
        tracing::warn!(path = %path.display(), %error, "failed to update conversion history");
    }
}
