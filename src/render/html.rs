//! Self-contained HTML report generation.
//!
//! Produces a single document with embedded CSS and inline SVG charts; no
//! external assets, works offline.

use crate::model::{Block, Report, Table};
use crate::render::svg;

/// Renders the full report as one HTML document.
pub fn render_report(report: &Report) -> String {
    let body: String = report.blocks.iter().map(render_block).collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{css}</style>
</head>
<body>
    <div class="container">
        <h1>{title}</h1>
{body}    </div>
</body>
</html>"#,
        title = escape(&report.title),
        css = inline_css(),
        body = body,
    )
}

fn render_block(block: &Block) -> String {
    match block {
        Block::Heading { level, text } => {
            format!("        <h{l}>{}</h{l}>\n", escape(text), l = level)
        }
        Block::Paragraph(text) => format!("        <p>{}</p>\n", escape(text)),
        Block::NumberedList(items) => render_list("ol", None, items),
        Block::BulletList { title, items } => render_list("ul", title.as_deref(), items),
        Block::Table(table) => render_table(table),
        Block::Chart(chart) => format!(
            "        <figure class=\"chart\">\n{}\n        </figure>\n",
            svg::render_chart(chart)
        ),
    }
}

fn render_list(tag: &str, title: Option<&str>, items: &[String]) -> String {
    let mut out = String::new();
    if let Some(title) = title {
        out.push_str(&format!(
            "        <p class=\"list-title\">{}</p>\n",
            escape(title)
        ));
    }
    out.push_str(&format!("        <{}>\n", tag));
    for item in items {
        out.push_str(&format!("            <li>{}</li>\n", escape(item)));
    }
    out.push_str(&format!("        </{}>\n", tag));
    out
}

/// Renders a statistics table with the categorical key as the row label.
fn render_table(table: &Table) -> String {
    let mut out = String::from("        <table>\n            <thead><tr>");
    out.push_str(&format!("<th>{}</th>", escape(&table.index_label)));
    for column in &table.columns {
        out.push_str(&format!("<th>{}</th>", escape(column)));
    }
    out.push_str("</tr></thead>\n            <tbody>\n");
    for row in &table.rows {
        out.push_str(&format!(
            "            <tr><th scope=\"row\">{}</th>",
            escape(&row.label)
        ));
        for cell in &row.cells {
            out.push_str(&format!("<td>{}</td>", cell));
        }
        out.push_str("</tr>\n");
    }
    out.push_str("            </tbody>\n        </table>\n");
    out
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Inline CSS styles
fn inline_css() -> &'static str {
    r#"
* { box-sizing: border-box; margin: 0; padding: 0; }

body {
    font-family: system-ui, -apple-system, 'Segoe UI', sans-serif;
    line-height: 1.6;
    color: #111827;
    background: #ffffff;
}

.container {
    max-width: 880px;
    margin: 0 auto;
    padding: 2rem;
}

h1 {
    font-size: 2rem;
    font-weight: 700;
    margin-bottom: 1rem;
    padding-bottom: 0.5rem;
    border-bottom: 2px solid #e5e7eb;
}

h2 { font-size: 1.5rem; margin: 2rem 0 0.75rem; }
h3 { font-size: 1.2rem; margin: 1.5rem 0 0.5rem; }
h4 { font-size: 1rem; color: #374151; margin: 1rem 0 0.5rem; }

p { margin-bottom: 0.75rem; }

.list-title { font-weight: 600; margin-bottom: 0.25rem; }

ul, ol { margin: 0 0 1rem 1.5rem; }
li { margin-bottom: 0.25rem; }

table {
    border-collapse: collapse;
    margin: 0.5rem 0 1rem;
    font-size: 0.875rem;
}

th, td {
    border: 1px solid #e5e7eb;
    padding: 0.4rem 0.75rem;
    text-align: right;
}

thead th { background: #f9fafb; }
tbody th { background: #f9fafb; text-align: left; }

figure.chart { margin: 0.5rem 0 1rem; }
"#
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset;
    use crate::model::{Cell, TableRow};

    #[test]
    fn test_render_is_idempotent() {
        let report = dataset::report();
        assert_eq!(render_report(&report), render_report(&report));
    }

    #[test]
    fn test_season_table_renders_four_rows() {
        let report = dataset::report();
        let table = report.tables().next().unwrap();
        let html = render_table(table);
        assert_eq!(html.matches("<th scope=\"row\">").count(), 4);
        assert!(html.contains("<th>season</th>"));
        assert!(html.contains("<td>5644.303191</td>"));
    }

    #[test]
    fn test_document_contains_all_sections() {
        let html = render_report(&dataset::report());
        for heading in [
            "Determining Business Question",
            "Exploratory Data Analysis (EDA)",
            "Visualization &amp; Explanatory Analysis",
            "Conclusion",
        ] {
            assert!(html.contains(heading), "missing section: {heading}");
        }
        assert_eq!(html.matches("<svg").count(), 3);
    }

    #[test]
    fn test_escape_special_characters() {
        let table = Table {
            index_label: "a&b".to_string(),
            columns: vec!["<x>".to_string()],
            rows: vec![TableRow {
                label: "r".to_string(),
                cells: vec![Cell::Int(1)],
            }],
        };
        let html = render_table(&table);
        assert!(html.contains("a&amp;b"));
        assert!(html.contains("&lt;x&gt;"));
    }

    #[test]
    fn test_paragraph_renders_verbatim() {
        let block = Block::Paragraph("Rentals peak in Fall.".to_string());
        assert_eq!(render_block(&block), "        <p>Rentals peak in Fall.</p>\n");
    }

    #[test]
    fn test_numbered_list_renders_ordered() {
        let html = render_report(&dataset::report());
        assert!(html.contains("<ol>"));
        assert!(html.contains(
            "<li>How does bike-sharing demand vary across different seasons?</li>"
        ));
    }
}
