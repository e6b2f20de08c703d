//! Markdown rendition of the report.
//!
//! Tables become pipe tables; charts become fixed-width rows of scaled
//! unicode bars inside fenced code blocks.

use crate::model::{Block, Chart, Report, Table};

/// Maximum bar length in characters.
const BAR_WIDTH: usize = 40;

/// Renders the full report as a Markdown document.
pub fn render_report(report: &Report) -> String {
    let mut out = format!("# {}\n\n", report.title);
    for block in &report.blocks {
        render_block(&mut out, block);
    }
    out
}

fn render_block(out: &mut String, block: &Block) {
    match block {
        Block::Heading { level, text } => {
            out.push_str(&format!("{} {}\n\n", "#".repeat(*level as usize), text));
        }
        Block::Paragraph(text) => {
            out.push_str(text);
            out.push_str("\n\n");
        }
        Block::NumberedList(items) => {
            for (i, item) in items.iter().enumerate() {
                out.push_str(&format!("{}. {}\n", i + 1, item));
            }
            out.push('\n');
        }
        Block::BulletList { title, items } => {
            if let Some(title) = title {
                out.push_str(&format!("**{}**\n", title));
            }
            for item in items {
                out.push_str(&format!("- {}\n", item));
            }
            out.push('\n');
        }
        Block::Table(table) => render_table(out, table),
        Block::Chart(chart) => render_chart(out, chart),
    }
}

fn render_table(out: &mut String, table: &Table) {
    out.push_str(&format!("| {} |", table.index_label));
    for column in &table.columns {
        out.push_str(&format!(" {} |", column));
    }
    out.push('\n');
    out.push_str(&"| --- ".repeat(table.columns.len() + 1));
    out.push_str("|\n");
    for row in &table.rows {
        out.push_str(&format!("| {} |", row.label));
        for cell in &row.cells {
            out.push_str(&format!(" {} |", cell));
        }
        out.push('\n');
    }
    out.push('\n');
}

/// One bar row per category, one group per series, scaled to the fixed
/// y range so bars stay comparable across charts sharing an axis.
fn render_chart(out: &mut String, chart: &Chart) {
    let label_width = chart
        .categories
        .iter()
        .map(|c| c.len())
        .max()
        .unwrap_or(0);

    out.push_str(&format!("**{}**\n\n```text\n", chart.title));
    for series in &chart.series {
        out.push_str(&format!("{}\n", series.name));
        for (i, category) in chart.categories.iter().enumerate() {
            let value = series.values[i];
            let bar = "\u{2588}".repeat(bar_chars(value, chart.config.y_max));
            let mut line = format!(
                "  {:<width$}  {}  {}",
                category,
                bar,
                value as i64,
                width = label_width
            );
            if let Some(errors) = &series.error {
                line.push_str(&format!(" \u{b1} {}", errors[i] as i64));
            }
            line.push('\n');
            out.push_str(&line);
        }
    }
    out.push_str("```\n\n");
}

fn bar_chars(value: f64, y_max: f64) -> usize {
    (value / y_max * BAR_WIDTH as f64).round() as usize
}
