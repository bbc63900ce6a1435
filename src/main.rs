use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};

use survey_lens::data::export::{
    level_export_file_name, word_export_file_name, write_level_matches, write_word_matches,
};
use survey_lens::data::loader::load_file;
use survey_lens::{AnalysisConfig, AnalysisState, SearchScope, StatisticKind};

#[derive(Parser, Debug)]
#[command(author, version, about = "Analyze a survey export and print the report as JSON")]
struct Args {
    /// Survey export (.csv or .json)
    file: PathBuf,

    /// JSON file overriding the default column layout
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Keep only rows containing this text
    #[arg(short, long)]
    search: Option<String>,

    /// Restrict the search to one column
    #[arg(long, requires = "search")]
    search_column: Option<String>,

    /// Keep only rows inside a standard statistic band of --column
    #[arg(long, value_enum, requires = "column")]
    filter: Option<FilterKind>,

    /// Column for --filter, --word and --level
    #[arg(long)]
    column: Option<String>,

    /// Export the rows whose text in --column contains this word as CSV
    #[arg(long, requires = "column", conflicts_with = "level")]
    word: Option<String>,

    /// Export the rows at this level of --column as CSV
    #[arg(long, requires = "column")]
    level: Option<i64>,

    /// Directory for exported CSV files (stdout when omitted)
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Pretty-print the JSON report
    #[arg(long)]
    pretty: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FilterKind {
    TopBox,
    BottomBox,
    Ci,
}

impl From<FilterKind> for StatisticKind {
    fn from(kind: FilterKind) -> Self {
        match kind {
            FilterKind::TopBox => StatisticKind::TopBox,
            FilterKind::BottomBox => StatisticKind::BottomBox,
            FilterKind::Ci => StatisticKind::ConfidenceInterval,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => AnalysisConfig::from_path(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => AnalysisConfig::default(),
    };

    let mut state = AnalysisState::new(config);
    state.set_dataset(load_file(&args.file)?);

    if let Some(term) = &args.search {
        let scope = match &args.search_column {
            Some(column) => SearchScope::Column(column.clone()),
            None => SearchScope::AllColumns,
        };
        state.set_search(term, scope)?;
    }

    if let (Some(kind), Some(column)) = (args.filter, &args.column) {
        match state.standard_filter(column, kind.into())? {
            Some(filter) => state.set_statistic_filter(filter)?,
            None => bail!("column {column} has no values to derive a {kind:?} filter from"),
        }
    }

    if let (Some(word), Some(column)) = (&args.word, &args.column) {
        let matches = state.word_matches(column, word)?;
        log::info!("{} rows contain \"{word}\"", matches.len());
        let out = export_target(args.out_dir.as_deref(), &word_export_file_name(word))?;
        write_word_matches(out, &matches)?;
        return Ok(());
    }

    if let (Some(level), Some(column)) = (args.level, &args.column) {
        let matches = state.level_matches(column, level)?;
        log::info!("{} rows at level {level} of {column}", matches.len());
        let out = export_target(args.out_dir.as_deref(), &level_export_file_name(column, level))?;
        let columns = state.view()?.column_names();
        write_level_matches(out, &matches, columns)?;
        return Ok(());
    }

    let report = state.report()?;
    let stdout = io::stdout().lock();
    if args.pretty {
        serde_json::to_writer_pretty(stdout, &report)?;
    } else {
        serde_json::to_writer(stdout, &report)?;
    }
    println!();
    Ok(())
}

fn export_target(out_dir: Option<&Path>, file_name: &str) -> Result<Box<dyn Write>> {
    match out_dir {
        Some(dir) => {
            let path = dir.join(file_name);
            let file = File::create(&path).with_context(|| format!("creating {}", path.display()))?;
            log::info!("Writing {}", path.display());
            Ok(Box::new(file))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}
