//! Data types for the report: tables, chart series, and the block sequence.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A single table cell. Floats are authored with six decimal places and
/// display that way; integers display plainly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Int(i64),
    Float(f64),
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Int(v) => write!(f, "{}", v),
            Cell::Float(v) => write!(f, "{:.6}", v),
        }
    }
}

/// One labelled row of a statistics table.
#[derive(Debug, Clone, Serialize)]
pub struct TableRow {
    pub label: String,
    pub cells: Vec<Cell>,
}

/// A small categorical statistics table: one label column plus numeric
/// columns. Every row carries exactly `columns.len()` cells.
#[derive(Debug, Clone, Serialize)]
pub struct Table {
    /// Name of the categorical key, shown as the label column header.
    pub index_label: String,
    pub columns: Vec<String>,
    pub rows: Vec<TableRow>,
}

/// Bar fill: a single color for the whole series, or one color per category.
#[derive(Debug, Clone, Serialize)]
pub enum SeriesColor {
    Uniform(String),
    PerCategory(Vec<String>),
}

impl SeriesColor {
    /// Fill color for the bar at category index `i`.
    pub fn at(&self, i: usize) -> &str {
        match self {
            SeriesColor::Uniform(c) => c,
            SeriesColor::PerCategory(cs) => &cs[i],
        }
    }
}

/// One named value array of a chart, with optional symmetric error margins.
#[derive(Debug, Clone, Serialize)]
pub struct Series {
    pub name: String,
    pub values: Vec<f64>,
    pub color: SeriesColor,
    pub error: Option<Vec<f64>>,
}

/// How multiple series share a category slot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum BarMode {
    Stacked,
    Grouped,
}

/// Y-axis tick label style.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum TickFormat {
    /// SI suffixes: 200000 renders as "200k", 1200000 as "1.2M".
    Si,
    Integer,
}

/// Fixed presentation settings for a single chart.
#[derive(Debug, Clone, Serialize)]
pub struct ChartConfig {
    pub bar_mode: BarMode,
    pub x_title: String,
    pub y_title: String,
    /// Upper bound of the y axis; bars rise from zero.
    pub y_max: f64,
    pub tick_format: TickFormat,
    pub show_legend: bool,
}

/// A bar chart: ordered categories, one or more series, and presentation
/// settings. Every series carries one value per category.
#[derive(Debug, Clone, Serialize)]
pub struct Chart {
    pub title: String,
    pub categories: Vec<String>,
    pub series: Vec<Series>,
    pub config: ChartConfig,
}

impl Chart {
    /// Sum of all series values at category index `i`.
    pub fn stacked_total(&self, i: usize) -> f64 {
        self.series.iter().map(|s| s.values[i]).sum()
    }
}

/// One element of the fixed report sequence.
#[derive(Debug, Clone, Serialize)]
pub enum Block {
    Heading { level: u8, text: String },
    Paragraph(String),
    NumberedList(Vec<String>),
    BulletList { title: Option<String>, items: Vec<String> },
    Table(Table),
    Chart(Chart),
}

/// The complete report: a title plus the ordered block sequence. Built once
/// per invocation and never mutated afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub title: String,
    pub blocks: Vec<Block>,
}

impl Report {
    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Table(t) => Some(t),
            _ => None,
        })
    }

    pub fn charts(&self) -> impl Iterator<Item = &Chart> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Chart(c) => Some(c),
            _ => None,
        })
    }
}

/// Shape listing for a single table in the [`Summary`].
#[derive(Serialize)]
pub struct TableSummary {
    pub index_label: String,
    pub rows: usize,
    pub columns: usize,
}

/// Shape listing for a single chart in the [`Summary`].
#[derive(Serialize)]
pub struct ChartSummary {
    pub title: String,
    pub categories: Vec<String>,
}

/// Structural metadata for a report, emitted by the `summary` command.
#[derive(Serialize)]
pub struct Summary {
    pub generated_at: DateTime<Utc>,
    pub title: String,
    pub block_count: usize,
    pub tables: Vec<TableSummary>,
    pub charts: Vec<ChartSummary>,
}

impl Summary {
    pub fn of(report: &Report) -> Self {
        Summary {
            generated_at: Utc::now(),
            title: report.title.clone(),
            block_count: report.blocks.len(),
            tables: report
                .tables()
                .map(|t| TableSummary {
                    index_label: t.index_label.clone(),
                    rows: t.rows.len(),
                    columns: t.columns.len(),
                })
                .collect(),
            charts: report
                .charts()
                .map(|c| ChartSummary {
                    title: c.title.clone(),
                    categories: c.categories.clone(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_display_float_six_decimals() {
        assert_eq!(Cell::Float(5644.303191).to_string(), "5644.303191");
        assert_eq!(Cell::Float(4584.82).to_string(), "4584.820000");
    }

    #[test]
    fn test_cell_display_int_plain() {
        assert_eq!(Cell::Int(8714).to_string(), "8714");
        assert_eq!(Cell::Int(22).to_string(), "22");
    }

    #[test]
    fn test_series_color_lookup() {
        let uniform = SeriesColor::Uniform("rgb(255,192,203)".to_string());
        assert_eq!(uniform.at(0), "rgb(255,192,203)");
        assert_eq!(uniform.at(2), "rgb(255,192,203)");

        let per = SeriesColor::PerCategory(vec![
            "rgb(255,192,203)".to_string(),
            "rgb(135,206,235)".to_string(),
        ]);
        assert_eq!(per.at(1), "rgb(135,206,235)");
    }

    #[test]
    fn test_stacked_total_sums_series() {
        let chart = Chart {
            title: "t".to_string(),
            categories: vec!["a".to_string()],
            series: vec![
                Series {
                    name: "x".to_string(),
                    values: vec![10.0],
                    color: SeriesColor::Uniform("red".to_string()),
                    error: None,
                },
                Series {
                    name: "y".to_string(),
                    values: vec![5.0],
                    color: SeriesColor::Uniform("blue".to_string()),
                    error: None,
                },
            ],
            config: ChartConfig {
                bar_mode: BarMode::Stacked,
                x_title: String::new(),
                y_title: String::new(),
                y_max: 20.0,
                tick_format: TickFormat::Integer,
                show_legend: false,
            },
        };
        assert_eq!(chart.stacked_total(0), 15.0);
    }
}
