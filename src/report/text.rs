use crate::model::criterion::Criterion;
use crate::model::record::ScoredRecord;
use crate::model::weights::WeightVector;
use crate::pipeline::rank::SortKey;
use crate::report::format_score;
use crate::report::series::{BarSeries, RadarSeries, ScatterSeries};

pub fn render_table(ranked: &[ScoredRecord], weights: &WeightVector, sort_key: SortKey) -> String {
    let mut out = String::new();

    out.push_str("Multi-Criteria Model Ranking\n");
    out.push_str("============================\n\n");
    out.push_str(&format!("Sorted by: {} (descending)\n", sort_key.label()));
    out.push_str(&format!("Weights: {}\n\n", weight_line(weights)));

    out.push_str(&format!(
        "{:>4}  {:<32} {:>9} {:>9} {:>11} {:>9} {:>7}\n",
        "Rank", "Model", "Composite", "Privacy", "Efficiency", "Openness", "QSAR"
    ));
    for (idx, r) in ranked.iter().enumerate() {
        out.push_str(&format!(
            "{:>4}  {:<32} {:>9} {:>9} {:>11} {:>9} {:>7}\n",
            idx + 1,
            r.name,
            format_score(r.composite),
            format_score(r.privacy),
            format_score(r.efficiency),
            format_score(r.openness),
            format_score(r.qsar),
        ));
    }

    out.push('\n');
    out.push_str(&insights(ranked, weights));
    out
}

fn weight_line(weights: &WeightVector) -> String {
    Criterion::ALL
        .into_iter()
        .map(|c| format!("{}: {:.0}%", c.label(), weights.get(c) * 100.0))
        .collect::<Vec<_>>()
        .join(", ")
}

fn insights(ranked: &[ScoredRecord], weights: &WeightVector) -> String {
    let mut out = String::new();
    out.push_str("Key insights\n");

    if let Some(top) = ranked.first() {
        out.push_str(&format!(
            "Top performer: {} (composite {})\n",
            top.name,
            format_score(top.composite)
        ));
    }
    out.push_str(&format!("Weight distribution: {}\n", weight_line(weights)));

    let balanced = ranked
        .iter()
        .filter(|r| Criterion::ALL.into_iter().all(|c| r.score(c) > 50.0))
        .count();
    out.push_str(&format!(
        "Best balanced: {balanced} model(s) score above 50 in all categories\n"
    ));
    out
}

pub fn render_bars(series: &BarSeries) -> String {
    let mut out = String::new();
    out.push_str("Composite Score — top models\n\n");
    for entry in &series.entries {
        let filled = (entry.composite / 2.0).round().clamp(0.0, 50.0) as usize;
        out.push_str(&format!(
            "{:<20} {} {}\n",
            entry.label,
            "#".repeat(filled),
            format_score(entry.composite)
        ));
    }
    out
}

pub fn render_scatter(series: &ScatterSeries) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Scatter: x = {}, y = {}\n\n",
        series.x_axis.label(),
        series.y_axis.label()
    ));
    for p in &series.points {
        out.push_str(&format!(
            "({:>6}, {:>6})  {}\n",
            format_score(p.x),
            format_score(p.y),
            p.name
        ));
    }
    out
}

pub fn render_radar(series: &RadarSeries) -> String {
    let mut out = String::new();
    out.push_str("Radar comparison — top 5 by current ranking\n\n");

    if let Some(first) = series.rows.first() {
        out.push_str(&format!("{:<12}", ""));
        for value in &first.values {
            out.push_str(&format!("{:>21}", value.label));
        }
        out.push('\n');
    }
    for row in &series.rows {
        out.push_str(&format!("{:<12}", row.criterion.label()));
        for value in &row.values {
            out.push_str(&format!("{:>21}", format_score(value.score)));
        }
        out.push('\n');
    }
    out
}
