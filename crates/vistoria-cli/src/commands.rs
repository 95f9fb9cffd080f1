use anyhow::{Context, Result};
use tracing::info_span;
use vistoria_map::AliasTable;
use vistoria_model::{RecordFilter, ValidationResult};
use vistoria_cli::pipeline::{ConvertOutcome, convert, import, load_options};

use crate::cli::{CheckArgs, ConvertArgs};
use crate::summary::{print_check, print_convert, print_vocab};

pub fn run_check(args: &CheckArgs) -> Result<ValidationResult> {
    let span = info_span!("check", file = %args.file.display());
    let _guard = span.enter();

    let options = load_options(args.import.config.as_deref(), args.import.encoding.as_deref())?;
    let result = import(&args.file, &options)?;
    if args.json {
        let json = serde_json::to_string_pretty(&result).context("serialize result")?;
        println!("{json}");
    } else {
        print_check(&args.file, &result, &options.preview);
    }
    Ok(result)
}

pub fn run_convert(args: &ConvertArgs) -> Result<ConvertOutcome> {
    let span = info_span!("convert", file = %args.file.display());
    let _guard = span.enter();

    let options = load_options(args.import.config.as_deref(), args.import.encoding.as_deref())?;
    let result = import(&args.file, &options)?;
    let filter = RecordFilter::new()
        .with_status(args.status)
        .with_search(args.search.clone().unwrap_or_default());
    let outcome = convert(&result, &filter, &args.output)?;
    print_convert(&args.output, &result, &outcome);
    Ok(outcome)
}

pub fn run_vocab() {
    print_vocab(&AliasTable::default());
}
