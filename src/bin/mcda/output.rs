// src/bin/mcda/output.rs
//
// Rendering of rankings as a table or as JSON.

use mcda_rs::Ranking;
use serde::Serialize;
use tabled::{Table, Tabled};

/// Output format for the ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed table (default).
    Table,
    /// JSON for machine consumption.
    Json,
}

#[derive(Debug, Serialize, Tabled)]
struct ScoreRow {
    #[tabled(rename = "Alternative")]
    alternative: String,
    #[tabled(rename = "Score")]
    score: String,
    #[tabled(rename = "Rank")]
    rank: usize,
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    method: &'a str,
    order: mcda_rs::PreferenceOrder,
    alternatives: Vec<ScoreRow>,
}

fn rows(labels: &[String], ranking: &Ranking, precision: usize) -> Vec<ScoreRow> {
    ranking
        .ordered_indices()
        .into_iter()
        .map(|i| ScoreRow {
            alternative: labels.get(i).cloned().unwrap_or_else(|| format!("A{}", i + 1)),
            score: format!("{:.*}", precision, ranking.preferences[i]),
            rank: ranking.ranks[i],
        })
        .collect()
}

pub fn render(
    format: OutputFormat,
    labels: &[String],
    ranking: &Ranking,
    precision: usize,
) -> serde_json::Result<String> {
    let rows = rows(labels, ranking, precision);
    match format {
        OutputFormat::Table => Ok(format!("{} results\n{}", ranking.method, Table::new(&rows))),
        OutputFormat::Json => serde_json::to_string_pretty(&Report {
            method: &ranking.method,
            order: ranking.order,
            alternatives: rows,
        }),
    }
}
