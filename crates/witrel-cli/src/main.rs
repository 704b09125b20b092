//! `witrel`: rank variant patterns across collated witnesses.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use tracing::info;
use witrel_analysis::collation::read_collation;
use witrel_analysis::patterns::Alphabet;
use witrel_analysis::report::create_reporter;
use witrel_analysis::VariantPipeline;
use witrel_core::config::CliOverrides;
use witrel_core::tracing::{init_tracing_with_default, metrics, verbosity_filter};
use witrel_core::{PipelineError, WitrelConfig, WitrelErrorCode};

#[derive(Parser, Debug)]
#[command(
    name = "witrel",
    version,
    about = "Classify and rank variant patterns across collated witnesses"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Classify every segment of a collation and rank the patterns.
    Classify(ClassifyArgs),
    /// Describe the label space for a witness count.
    Alphabet {
        /// Number of witnesses.
        #[arg(long)]
        witnesses: usize,
        /// List every label a segment can receive.
        #[arg(long)]
        patterns: bool,
    },
}

#[derive(Args, Debug)]
struct ClassifyArgs {
    /// Collation table (JSON).
    collation: PathBuf,
    /// Output format: text, json, or plot.
    #[arg(long)]
    format: Option<String>,
    /// Write the report here instead of stdout.
    #[arg(long)]
    output: Option<PathBuf>,
    /// Keep only the K most prevalent patterns.
    #[arg(long)]
    top: Option<usize>,
    /// Decimal places for percentages.
    #[arg(long)]
    precision: Option<u32>,
    /// Classify in parallel shards.
    #[arg(long)]
    parallel: bool,
    /// Expected witness count.
    #[arg(long)]
    witnesses: Option<usize>,
    /// Directory holding witrel.toml.
    #[arg(long, default_value = ".")]
    config: PathBuf,
}

impl ClassifyArgs {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            precision: self.precision,
            top: self.top,
            parallel: self.parallel.then_some(true),
            output_format: self.format.clone(),
            output_path: self.output.clone(),
            witness_count: self.witnesses,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing_with_default(verbosity_filter(cli.verbose));

    let result = match cli.command {
        Commands::Classify(args) => {
            classify(&args).and_then(|(rendered, path)| emit(&rendered, path.as_deref()))
        }
        Commands::Alphabet {
            witnesses,
            patterns,
        } => alphabet(witnesses, patterns).map(|text| print!("{text}")),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<PipelineError>() {
                Some(pipeline) => eprintln!("error: {}", pipeline.coded_string()),
                None => eprintln!("error: {e:#}"),
            }
            ExitCode::FAILURE
        }
    }
}

/// Load, classify and render; the rendered report and its destination.
fn classify(args: &ClassifyArgs) -> Result<(String, Option<PathBuf>)> {
    let config = WitrelConfig::load(&args.config, Some(&args.overrides()))
        .map_err(PipelineError::from)?;
    let table = read_collation(&args.collation, config.collation.witness_count)
        .map_err(PipelineError::from)?;

    let report = VariantPipeline::from_config(&config, &table)?
        .run(&table)?
        .truncated(config.ranking.top);

    let format = config.output.effective_format();
    let reporter = create_reporter(format)
        .ok_or_else(|| PipelineError::Report(format!("unknown output format '{format}'")))?;
    let rendered = reporter.generate(&report).map_err(PipelineError::Report)?;
    info!(
        { metrics::OUTPUT_FORMAT } = format,
        { metrics::PATTERN_COUNT } = report.ranked.len(),
        "report rendered"
    );
    Ok((rendered, config.output.path.clone()))
}

fn emit(rendered: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => fs::write(path, rendered)
            .with_context(|| format!("writing report to {}", path.display())),
        None => {
            print!("{rendered}");
            Ok(())
        }
    }
}

fn alphabet(witnesses: usize, patterns: bool) -> Result<String> {
    let alphabet = Alphabet::new(witnesses).map_err(PipelineError::from)?;
    let mut out = format!(
        "witnesses: {}\nindex space: {}\npatterns: {}\n",
        alphabet.witnesses(),
        alphabet.size(),
        alphabet.pattern_count()
    );
    if patterns {
        for label in alphabet.pattern_space() {
            let index = alphabet.index_of(&label).unwrap_or_default();
            out.push_str(&format!("{label}\t{index}\n"));
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn classify_flags_become_overrides() {
        let cli = Cli::try_parse_from([
            "witrel", "-vv", "classify", "c.json", "--format", "json", "--top", "3",
            "--precision", "1", "--parallel",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        let Commands::Classify(args) = cli.command else {
            panic!("expected classify");
        };
        let overrides = args.overrides();
        assert_eq!(overrides.output_format.as_deref(), Some("json"));
        assert_eq!(overrides.top, Some(3));
        assert_eq!(overrides.precision, Some(1));
        assert_eq!(overrides.parallel, Some(true));
        assert_eq!(overrides.witness_count, None);
    }

    #[test]
    fn alphabet_summary_and_listing() {
        assert_eq!(
            alphabet(3, false).unwrap(),
            "witnesses: 3\nindex space: 27\npatterns: 5\n"
        );
        let listing = alphabet(3, true).unwrap();
        let labels: Vec<&str> = listing
            .lines()
            .skip(3)
            .map(|l| l.split('\t').next().unwrap())
            .collect();
        assert_eq!(labels, vec!["AAA", "AAB", "ABA", "ABB", "ABC"]);
        assert!(alphabet(1, false).is_err());
    }

    fn classify_args(dir: &Path, collation: &str, extra: &[&str]) -> ClassifyArgs {
        let path = dir.join("collation.json");
        fs::write(&path, collation).unwrap();
        let mut argv = vec![
            "witrel".to_string(),
            "classify".to_string(),
            path.display().to_string(),
            "--config".to_string(),
            dir.display().to_string(),
        ];
        argv.extend(extra.iter().map(|s| s.to_string()));
        match Cli::try_parse_from(argv).unwrap().command {
            Commands::Classify(args) => args,
            Commands::Alphabet { .. } => panic!("expected classify"),
        }
    }

    #[test]
    fn classify_renders_text() {
        let dir = tempfile::tempdir().unwrap();
        let args = classify_args(
            dir.path(),
            r#"[["a","a","b","b"],["x","x","x","x"],["a","b","a","c"],["a","b","a","c"]]"#,
            &["--format", "text"],
        );
        let (rendered, path) = classify(&args).unwrap();
        assert_eq!(rendered, "ABAC: 50.0%\nAABB: 25.0%\n");
        assert!(path.is_none());
    }

    #[test]
    fn classify_writes_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("ranked.json");
        let out_arg = out.display().to_string();
        let args = classify_args(
            dir.path(),
            r#"[["a","b"],["a","a"]]"#,
            &["--format", "plot", "--output", &out_arg],
        );
        let (rendered, path) = classify(&args).unwrap();
        emit(&rendered, path.as_deref()).unwrap();
        assert_eq!(
            fs::read_to_string(&out).unwrap(),
            r#"{"labels":["AB"],"values":[50.0]}"#
        );
    }

    #[test]
    fn empty_collation_fails_with_no_data() {
        let dir = tempfile::tempdir().unwrap();
        let args = classify_args(dir.path(), "[]", &[]);
        let err = classify(&args).unwrap_err();
        let pipeline = err.downcast_ref::<PipelineError>().unwrap();
        assert!(pipeline.is_no_data());
        assert!(pipeline.coded_string().starts_with("[NO_DATA]"));
    }
}
