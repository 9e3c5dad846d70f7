//! Terminal rendering of results, schema and model summaries.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde::Serialize;

use tdp_classifier::ModelSummary;
use tdp_model::{
    Feature, FeatureKind, FeatureVector, INSIGHTS_CAPTION, INSIGHTS_HEADING, Insight,
    MODEL_INSIGHTS, PredictionResult,
};

/// Machine-readable output of `tdp predict --json`.
#[derive(Debug, Serialize)]
pub struct PredictOutput<'a> {
    pub label: u8,
    pub probability: f64,
    pub confidence: f64,
    pub message: String,
    pub features: &'a FeatureVector,
    pub insights: &'static [Insight],
}

impl<'a> PredictOutput<'a> {
    pub fn new(result: &PredictionResult, features: &'a FeatureVector) -> Self {
        Self {
            label: result.label.class(),
            probability: result.probability,
            confidence: result.confidence(),
            message: result.message(),
            features,
            insights: &MODEL_INSIGHTS,
        }
    }
}

/// Result headline block.
pub fn render_result(result: &PredictionResult) -> String {
    let marker = if result.label.is_positive() { "+" } else { "x" };
    format!("Prediction Result\n{marker} {}\n", result.message())
}

/// Heading, caption and one line per metric card.
pub fn render_insights_text() -> String {
    let mut out = format!("{INSIGHTS_HEADING}\n{INSIGHTS_CAPTION}\n");
    for insight in &MODEL_INSIGHTS {
        out.push_str(&format!(
            "  {}: {} - {}\n",
            insight.title, insight.value, insight.note
        ));
    }
    out
}

pub fn insights_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Metric"),
        header_cell("Value"),
        header_cell("Meaning"),
    ]);
    apply_card_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    for insight in &MODEL_INSIGHTS {
        table.add_row(vec![
            Cell::new(insight.title).add_attribute(Attribute::Bold),
            Cell::new(insight.value)
                .fg(Color::Yellow)
                .add_attribute(Attribute::Bold),
            dim_cell(insight.note),
        ]);
    }
    table
}

/// Print the result and the insight cards; `plain` drops the table borders
/// for piped output.
pub fn print_prediction(result: &PredictionResult, plain: bool) {
    if plain {
        println!("{}", render_result(result));
        print!("{}", render_insights_text());
        return;
    }
    let color = if result.label.is_positive() {
        Color::Green
    } else {
        Color::Red
    };
    let mut headline = Table::new();
    headline.set_header(vec![header_cell("Prediction Result")]);
    apply_card_style(&mut headline);
    headline.add_row(vec![
        Cell::new(result.message())
            .fg(color)
            .add_attribute(Attribute::Bold),
    ]);
    println!("{headline}");
    println!();
    println!("{INSIGHTS_HEADING}");
    println!("{INSIGHTS_CAPTION}");
    println!("{}", insights_table());
}

/// One row per feature in vector order.
pub fn schema_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Feature"),
        header_cell("Label"),
        header_cell("Kind"),
        header_cell("Domain"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for feature in Feature::ALL {
        let domain = match feature.kind() {
            FeatureKind::Integer(bounds) => bounds.to_string(),
            FeatureKind::Float => "-".to_string(),
            FeatureKind::Categorical(table) => table
                .entries()
                .map(|(value, code)| format!("{value}={code}"))
                .collect::<Vec<_>>()
                .join(", "),
        };
        table.add_row(vec![
            Cell::new(feature.index()),
            Cell::new(feature.name())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(feature.label()),
            dim_cell(feature.kind().as_str()),
            Cell::new(domain),
        ]);
    }
    table
}

/// Feature/value pairs of an encoded vector.
pub fn vector_table(features: &FeatureVector) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Feature"),
        header_cell("Value"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for (feature, value) in features.iter() {
        table.add_row(vec![
            Cell::new(feature.index()),
            Cell::new(feature.name()),
            Cell::new(value),
        ]);
    }
    table
}

pub fn model_table(summary: &ModelSummary) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Property"), header_cell("Value")]);
    apply_table_style(&mut table);
    let rows = [
        ("Path", summary.path.display().to_string()),
        ("Backend", summary.backend.to_string()),
        ("Objective", summary.objective.to_string()),
        ("Trees", summary.trees.to_string()),
        (
            "Best iteration",
            summary
                .best_iteration
                .map_or_else(|| "-".to_string(), |round| round.to_string()),
        ),
        ("Features", summary.features.to_string()),
        ("Base score", summary.base_score.to_string()),
        ("SHA-256", summary.sha256.clone()),
    ];
    for (property, value) in rows {
        table.add_row(vec![Cell::new(property).add_attribute(Attribute::Bold), Cell::new(value)]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_card_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
