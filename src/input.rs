//! Clue pool loading.
//!
//! Tabular sources (tab-separated files) use three columns: question,
//! location, and an optional Person/Place category. JSON sources are an array
//! of clue objects. Either way the last clue is the shared final clue.
use crate::clue::Clue;
use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

const HEADER_CELLS: [&str; 3] = ["Clue", "Answer/Location/Person", "Type"];

const SAMPLE_CLUES: [(&str, &str, &str); 10] = [
    ("What has keys but can't open locks?", "Piano", "Place"),
    (
        "What has a face and two hands but no arms or legs?",
        "Clock",
        "Place",
    ),
    ("Who created this scavenger hunt?", "Kevin", "Person"),
    ("Where do you cook your meals?", "Kitchen", "Place"),
    ("Who is your favorite teacher?", "Mrs. Smith", "Person"),
    ("What room has books but no bookshelf?", "Library", "Place"),
    ("Where do cars sleep at night?", "Garage", "Place"),
    ("Who can help you check out a book?", "Librarian", "Person"),
    (
        "What's the coldest appliance in the house?",
        "Refrigerator",
        "Place",
    ),
    (
        "Where do you wash your hands before dinner?",
        "Bathroom sink",
        "Place",
    ),
];

/// JSON clue record; `category` is normalized like a sheet cell.
#[derive(Debug, Deserialize)]
struct ClueRecord {
    question: String,
    location: String,
    #[serde(default)]
    category: Option<String>,
}

/// Convert raw rows into clues.
///
/// A header row (first cell `clue` or `question`) is skipped, as are rows
/// missing a question or location.
pub fn clues_from_rows(rows: &[Vec<String>]) -> Vec<Clue> {
    let start = match rows.first().and_then(|row| row.first()) {
        Some(cell) if is_header_cell(cell) => 1,
        _ => 0,
    };
    rows.iter()
        .skip(start)
        .filter_map(|row| clue_from_row(row.as_slice()))
        .collect()
}

fn is_header_cell(cell: &str) -> bool {
    let cell = cell.trim();
    cell.eq_ignore_ascii_case("clue") || cell.eq_ignore_ascii_case("question")
}

fn clue_from_row(row: &[String]) -> Option<Clue> {
    let question = row.first()?.trim();
    let location = row.get(1)?.trim();
    if question.is_empty() || location.is_empty() {
        return None;
    }
    let label = row
        .get(2)
        .map(|cell| cell.trim())
        .filter(|cell| !cell.is_empty());
    Some(Clue::with_label(question, location, label))
}

/// Split tab-separated text into rows of cells, ignoring blank lines.
pub fn parse_tsv(text: &str) -> Vec<Vec<String>> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.split('\t').map(str::to_string).collect())
        .collect()
}

/// Render rows back to tab-separated text.
pub fn render_tsv(rows: &[Vec<String>]) -> String {
    let mut out = String::new();
    for row in rows {
        out.push_str(&row.join("\t"));
        out.push('\n');
    }
    out
}

/// Load a clue pool from a `.json` array or a tab-separated file.
pub fn load_clues(path: &Path) -> Result<Vec<Clue>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("read clues {}", path.display()))?;
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let clues = if is_json {
        let records: Vec<ClueRecord> = serde_json::from_str(&text)
            .with_context(|| format!("parse clues JSON {}", path.display()))?;
        records
            .into_iter()
            .map(|record| {
                Clue::with_label(record.question, record.location, record.category.as_deref())
            })
            .collect()
    } else {
        clues_from_rows(&parse_tsv(&text))
    };
    if clues.is_empty() {
        return Err(anyhow!("no clues found in {}", path.display()));
    }
    tracing::debug!(path = %path.display(), count = clues.len(), "loaded clues");
    Ok(clues)
}

/// Built-in sample pool, header row first.
pub fn sample_rows() -> Vec<Vec<String>> {
    let mut rows = vec![HEADER_CELLS.iter().map(|cell| cell.to_string()).collect()];
    for (question, location, category) in SAMPLE_CLUES {
        rows.push(vec![
            question.to_string(),
            location.to_string(),
            category.to_string(),
        ]);
    }
    rows
}

pub fn sample_clues() -> Vec<Clue> {
    clues_from_rows(&sample_rows())
}
