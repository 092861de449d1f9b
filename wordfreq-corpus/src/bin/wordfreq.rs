use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wordfreq_corpus::{Pipeline, PipelineConfig, ReportFormat};

#[derive(Debug, Parser)]
#[command(
    name = "wordfreq",
    about = "Count lemma frequencies across a directory of English documents"
)]
struct Cli {
    /// Corpus root directory
    dir: PathBuf,

    /// JSON config file; flags given on the command line take precedence
    #[arg(long)]
    config: Option<PathBuf>,

    /// Stop word list, one word per line
    #[arg(long, env = "WORDFREQ_STOPWORDS")]
    stopwords: Option<PathBuf>,

    /// Report destination (overwritten)
    #[arg(long, env = "WORDFREQ_OUTPUT")]
    output: Option<PathBuf>,

    /// Directory levels below the root to descend into
    #[arg(long)]
    max_depth: Option<usize>,

    /// Base-form lexicon used to validate lemmas
    #[arg(long)]
    lexicon: Option<PathBuf>,

    /// Report format
    #[arg(long, value_enum)]
    format: Option<ReportFormat>,

    /// Print the files that would be read and exit
    #[arg(long)]
    list: bool,
}

impl Cli {
    fn pipeline_config(&self) -> anyhow::Result<PipelineConfig> {
        let mut config = match &self.config {
            Some(path) => PipelineConfig::from_path(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => PipelineConfig::default(),
        };

        if let Some(stopwords) = &self.stopwords {
            config.stopwords = stopwords.clone();
        }
        if let Some(output) = &self.output {
            config.output = output.clone();
        }
        if let Some(depth) = self.max_depth {
            config.max_depth = depth;
        }
        if let Some(lexicon) = &self.lexicon {
            config.lexicon = Some(lexicon.clone());
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    init_observability();

    let cli = Cli::parse();
    let config = cli.pipeline_config()?;

    if cli.list {
        for file in list_files(config, &cli.dir)? {
            println!("{}", file.display());
        }
        return Ok(());
    }

    let pipeline = Pipeline::new(config).context("failed to set up the pipeline")?;
    let summary = pipeline
        .run(&cli.dir)
        .with_context(|| format!("failed to process {}", cli.dir.display()))?;

    info!(
        files = summary.files,
        tokens = summary.tokens,
        lemmas = summary.lemmas,
        output = %summary.output.display(),
        "done"
    );
    Ok(())
}

/// Files a run over `dir` would read. Stop words and lexicon are not loaded.
fn list_files(config: PipelineConfig, dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    Pipeline::with_analyzer(config, Default::default())
        .files(dir)
        .with_context(|| format!("failed to list {}", dir.display()))
}

fn init_observability() {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info".into());

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(env_filter)
        .init();
}
