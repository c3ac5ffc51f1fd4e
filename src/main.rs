use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use modelrank::input::{DatasetError, builtin_records, load_records};
use modelrank::model::{Criterion, WeightVector};
use modelrank::pipeline::{RankingCache, SortKey, top_n};
use modelrank::report::json::JsonReport;
use modelrank::report::series::{bar_series, radar_series, scatter_series};
use modelrank::report::{Axis, ViewMode, text};

/// Explore the built-in model evaluation table under adjustable criterion
/// weights. Each `--weight` flag replays one interactive adjustment: the
/// named criterion takes the given value and the remaining weight mass is
/// redistributed proportionally over the other three.
#[derive(Debug, Parser)]
#[command(name = "modelrank", version, about)]
struct Cli {
    /// Set one weight (e.g. `--weight privacy=0.5`); repeatable, applied in order.
    #[arg(long = "weight", value_name = "CRITERION=VALUE", value_parser = parse_weight)]
    weights: Vec<(Criterion, f64)>,

    /// Ranking key, always descending.
    #[arg(long, value_enum, default_value_t)]
    sort_by: SortKey,

    /// Which projection of the ranking to render.
    #[arg(long, value_enum, default_value_t)]
    view: ViewMode,

    /// Scatter x axis.
    #[arg(long, value_enum, default_value_t = Axis::Efficiency)]
    x_axis: Axis,

    /// Scatter y axis.
    #[arg(long, value_enum, default_value_t = Axis::Privacy)]
    y_axis: Axis,

    /// Keep only the top N rows of the table view.
    #[arg(long)]
    top: Option<usize>,

    #[arg(long, value_enum, default_value_t)]
    format: OutputFormat,

    /// JSON dataset replacing the built-in table.
    #[arg(long)]
    data: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        })
    }
}

fn parse_weight(s: &str) -> Result<(Criterion, f64), String> {
    let (criterion, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected CRITERION=VALUE, got: {s}"))?;
    let criterion: Criterion = criterion.trim().parse()?;
    let value: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("invalid weight value: {value}"))?;
    Ok((criterion, value))
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), DatasetError> {
    let cli = Cli::parse();
    init_tracing();

    let records = match &cli.data {
        Some(path) => load_records(path)?,
        None => builtin_records(),
    };

    let mut weights = WeightVector::uniform();
    for &(criterion, value) in &cli.weights {
        weights.set(criterion, value);
        debug!(%criterion, value, sum = weights.sum(), "applied weight");
    }

    let mut cache = RankingCache::new();
    let ranked = cache.ranked(&records, &weights, cli.sort_by);
    let rows = match cli.top {
        Some(n) => top_n(ranked, n),
        None => ranked,
    };

    let output = match (cli.format, cli.view) {
        (OutputFormat::Text, ViewMode::Table) => text::render_table(rows, &weights, cli.sort_by),
        (OutputFormat::Text, ViewMode::Bars) => text::render_bars(&bar_series(ranked)),
        (OutputFormat::Text, ViewMode::Scatter) => {
            text::render_scatter(&scatter_series(ranked, cli.x_axis, cli.y_axis))
        }
        (OutputFormat::Text, ViewMode::Radar) => text::render_radar(&radar_series(ranked)),
        (OutputFormat::Json, ViewMode::Table) => {
            let mut report = JsonReport::new(&weights, cli.sort_by, ViewMode::Table);
            report.rows = Some(rows);
            report.render()
        }
        (OutputFormat::Json, ViewMode::Bars) => {
            let bars = bar_series(ranked);
            let mut report = JsonReport::new(&weights, cli.sort_by, ViewMode::Bars);
            report.bars = Some(&bars);
            report.render()
        }
        (OutputFormat::Json, ViewMode::Scatter) => {
            let scatter = scatter_series(ranked, cli.x_axis, cli.y_axis);
            let mut report = JsonReport::new(&weights, cli.sort_by, ViewMode::Scatter);
            report.scatter = Some(&scatter);
            report.render()
        }
        (OutputFormat::Json, ViewMode::Radar) => {
            let radar = radar_series(ranked);
            let mut report = JsonReport::new(&weights, cli.sort_by, ViewMode::Radar);
            report.radar = Some(&radar);
            report.render()
        }
    };

    print!("{output}");
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}
