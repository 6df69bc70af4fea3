//! stagehand CLI: scene-state extraction over an argument or stdin lines.
//!
//! Each input line runs through the configured extractor; the patch is
//! printed as JSON, merged into a running scene state, and the resulting
//! changes are summarized. With `--endpoint` the remote classifier is
//! used, falling back to the heuristic engine on any failure.

use std::io::{self, BufRead};
use std::time::Duration;

use clap::{Parser, ValueEnum};
use miette::{IntoDiagnostic, Result};

use stagehand::remote::DEFAULT_TIMEOUT_MS;
use stagehand::{
    diff, summarize, ExtractorOptions, Granularity, HeuristicExtractor, PatchSource,
    RemoteClassifier, RemoteOptions, SceneState, MIN_ACCEPT_SCORE,
};

#[derive(Parser)]
#[command(name = "stagehand", version, about = "Scene-state extraction from narrative text")]
struct Cli {
    /// Text to extract from. Reads stdin line by line when omitted.
    text: Option<String>,

    /// Date/time rendering precision.
    #[arg(long, value_enum, default_value = "date")]
    granularity: GranularityArg,

    /// Minimum candidate score for a field to enter the patch.
    #[arg(long, default_value_t = MIN_ACCEPT_SCORE)]
    min_score: f32,

    /// Remote classifier endpoint. Heuristic-only when omitted.
    #[arg(long)]
    endpoint: Option<String>,

    /// Remote request timeout in milliseconds.
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_MS)]
    timeout_ms: u64,

    /// Print the full scene state after each patch.
    #[arg(long)]
    show_state: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum GranularityArg {
    Date,
    Datetime,
}

impl From<GranularityArg> for Granularity {
    fn from(arg: GranularityArg) -> Self {
        match arg {
            GranularityArg::Date => Granularity::Date,
            GranularityArg::Datetime => Granularity::DateTime,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let options = ExtractorOptions {
        granularity: cli.granularity.into(),
        min_score: cli.min_score,
    };
    let heuristic = HeuristicExtractor::new(options);
    let source: Box<dyn PatchSource> = match &cli.endpoint {
        Some(endpoint) => Box::new(RemoteClassifier::new(
            RemoteOptions {
                endpoint: endpoint.clone(),
                timeout: Duration::from_millis(cli.timeout_ms),
            },
            heuristic,
        )),
        None => Box::new(heuristic),
    };

    let mut state = SceneState::default();

    match &cli.text {
        Some(text) => process(source.as_ref(), &mut state, text, cli.show_state)?,
        None => {
            for line in io::stdin().lock().lines() {
                let line = line.into_diagnostic()?;
                if line.trim().is_empty() {
                    continue;
                }
                process(source.as_ref(), &mut state, &line, cli.show_state)?;
            }
        }
    }

    Ok(())
}

fn process(
    source: &dyn PatchSource,
    state: &mut SceneState,
    text: &str,
    show_state: bool,
) -> Result<()> {
    let reference = chrono::Local::now().naive_local();
    let patch = source.extract(text, state, reference);
    let next = patch.apply_to(state);
    let changes = diff(state, &next);

    println!("{}", serde_json::to_string_pretty(&patch).into_diagnostic()?);
    println!("{}", summarize(&changes));
    if show_state {
        println!("{}", serde_json::to_string_pretty(&next).into_diagnostic()?);
    }

    *state = next;
    Ok(())
}
