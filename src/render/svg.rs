//! Inline SVG bar charts.
//!
//! Builds each chart as a single `<svg>` element: plot frame, horizontal
//! gridlines with tick labels, bars per category (stacked segments or
//! side-by-side groups), optional error whiskers, axis titles, and an
//! optional horizontal legend.

use crate::model::{BarMode, Chart, TickFormat};

const WIDTH: f64 = 680.0;
const HEIGHT: f64 = 360.0;
const MARGIN_LEFT: f64 = 70.0;
const MARGIN_RIGHT: f64 = 30.0;
const MARGIN_TOP: f64 = 50.0;
const MARGIN_BOTTOM: f64 = 60.0;

/// Fraction of a category slot occupied by its bars.
const BAR_FILL: f64 = 0.7;

/// Renders a chart as one self-contained SVG string.
pub fn render_chart(chart: &Chart) -> String {
    let plot_w = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_h = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
    let base_y = MARGIN_TOP + plot_h;
    let y_max = chart.config.y_max;

    let mut svg = String::new();
    svg.push_str(&format!(
        r##"<svg width="{w}" height="{h}" viewBox="0 0 {w} {h}" xmlns="http://www.w3.org/2000/svg" style="background:#ffffff">
  <style>.bar {{ stroke: #ffffff; stroke-width: 0.5; }} .whisker {{ stroke: #111827; stroke-width: 1.5; }}</style>
"##,
        w = WIDTH,
        h = HEIGHT,
    ));

    // Title
    svg.push_str(&format!(
        r##"  <text x="{x}" y="24" text-anchor="middle" font-size="14" font-weight="600" fill="#374151">{title}</text>
"##,
        x = WIDTH / 2.0,
        title = xml_escape(&chart.title),
    ));

    // Gridlines and tick labels, from zero up to the fixed range
    let step = tick_step(y_max);
    let mut v = 0.0;
    while v <= y_max + step * 1e-6 {
        let y = base_y - bar_px(v, y_max, plot_h);
        if v > 0.0 {
            svg.push_str(&format!(
                r##"  <line x1="{x1}" y1="{y:.1}" x2="{x2}" y2="{y:.1}" stroke="#d3d3d3" stroke-width="1"/>
"##,
                x1 = MARGIN_LEFT,
                x2 = MARGIN_LEFT + plot_w,
            ));
        }
        svg.push_str(&format!(
            r##"  <text x="{x}" y="{ty:.1}" text-anchor="end" font-size="11" fill="#6b7280">{label}</text>
"##,
            x = MARGIN_LEFT - 8.0,
            ty = y + 4.0,
            label = format_tick(v, chart.config.tick_format),
        ));
        v += step;
    }

    // Axes
    svg.push_str(&format!(
        r##"  <line x1="{ml}" y1="{by:.1}" x2="{xr}" y2="{by:.1}" stroke="#e5e7eb" stroke-width="2"/>
  <line x1="{ml}" y1="{mt}" x2="{ml}" y2="{by:.1}" stroke="#e5e7eb" stroke-width="2"/>
"##,
        ml = MARGIN_LEFT,
        mt = MARGIN_TOP,
        by = base_y,
        xr = MARGIN_LEFT + plot_w,
    ));

    // Bars
    let n = chart.categories.len();
    let slot_w = plot_w / n as f64;
    for i in 0..n {
        let slot_x = MARGIN_LEFT + i as f64 * slot_w;
        match chart.config.bar_mode {
            BarMode::Stacked => {
                let bw = slot_w * BAR_FILL;
                let x = slot_x + slot_w * (1.0 - BAR_FILL) / 2.0;
                let mut stacked = 0.0;
                for series in &chart.series {
                    let h = bar_px(series.values[i], y_max, plot_h);
                    let y = base_y - bar_px(stacked, y_max, plot_h) - h;
                    svg.push_str(&format!(
                        r##"  <rect class="bar" x="{x:.1}" y="{y:.1}" width="{bw:.1}" height="{h:.1}" fill="{fill}" opacity="0.9"/>
"##,
                        fill = series.color.at(i),
                    ));
                    stacked += series.values[i];
                }
            }
            BarMode::Grouped => {
                let k = chart.series.len();
                let bw = slot_w * BAR_FILL / k as f64;
                for (j, series) in chart.series.iter().enumerate() {
                    let x = slot_x + slot_w * (1.0 - BAR_FILL) / 2.0 + j as f64 * bw;
                    let h = bar_px(series.values[i], y_max, plot_h);
                    let y = base_y - h;
                    svg.push_str(&format!(
                        r##"  <rect class="bar" x="{x:.1}" y="{y:.1}" width="{bw:.1}" height="{h:.1}" fill="{fill}" opacity="0.9"/>
"##,
                        fill = series.color.at(i),
                    ));
                }
            }
        }
    }

    // Error whiskers, drawn over the bars
    for (j, series) in chart.series.iter().enumerate() {
        let Some(errors) = &series.error else {
            continue;
        };
        for i in 0..n {
            let slot_x = MARGIN_LEFT + i as f64 * slot_w;
            let cx = match chart.config.bar_mode {
                BarMode::Stacked => slot_x + slot_w / 2.0,
                BarMode::Grouped => {
                    let k = chart.series.len();
                    let bw = slot_w * BAR_FILL / k as f64;
                    slot_x + slot_w * (1.0 - BAR_FILL) / 2.0 + j as f64 * bw + bw / 2.0
                }
            };
            let y_hi = base_y - bar_px(series.values[i] + errors[i], y_max, plot_h);
            let y_lo = base_y - bar_px(series.values[i] - errors[i], y_max, plot_h);
            svg.push_str(&format!(
                r##"  <line class="whisker" x1="{cx:.1}" y1="{y_hi:.1}" x2="{cx:.1}" y2="{y_lo:.1}"/>
  <line class="whisker" x1="{c1:.1}" y1="{y_hi:.1}" x2="{c2:.1}" y2="{y_hi:.1}"/>
  <line class="whisker" x1="{c1:.1}" y1="{y_lo:.1}" x2="{c2:.1}" y2="{y_lo:.1}"/>
"##,
                c1 = cx - 4.0,
                c2 = cx + 4.0,
            ));
        }
    }

    // Category labels and axis titles
    for (i, category) in chart.categories.iter().enumerate() {
        let cx = MARGIN_LEFT + (i as f64 + 0.5) * slot_w;
        svg.push_str(&format!(
            r##"  <text x="{cx:.1}" y="{y:.1}" text-anchor="middle" font-size="11" fill="#374151">{label}</text>
"##,
            y = base_y + 20.0,
            label = xml_escape(category),
        ));
    }
    svg.push_str(&format!(
        r##"  <text x="{x}" y="{y}" text-anchor="middle" font-size="12" fill="#6b7280">{label}</text>
  <text x="18" y="{my:.1}" text-anchor="middle" font-size="12" fill="#6b7280" transform="rotate(-90, 18, {my:.1})">{ylabel}</text>
"##,
        x = MARGIN_LEFT + plot_w / 2.0,
        y = HEIGHT - 12.0,
        label = xml_escape(&chart.config.x_title),
        my = MARGIN_TOP + plot_h / 2.0,
        ylabel = xml_escape(&chart.config.y_title),
    ));

    if chart.config.show_legend {
        svg.push_str(&legend(chart));
    }

    svg.push_str("</svg>");
    svg
}

/// Horizontal legend, right-aligned above the plot area.
fn legend(chart: &Chart) -> String {
    let item_widths: Vec<f64> = chart
        .series
        .iter()
        .map(|s| 20.0 + s.name.len() as f64 * 7.0)
        .collect();
    let total: f64 = item_widths.iter().sum();
    let mut x = WIDTH - MARGIN_RIGHT - total;
    let mut out = String::new();
    for (series, w) in chart.series.iter().zip(&item_widths) {
        out.push_str(&format!(
            r##"  <rect x="{x:.1}" y="32" width="12" height="12" fill="{fill}" opacity="0.9"/>
  <text x="{tx:.1}" y="42" font-size="11" fill="#374151">{name}</text>
"##,
            fill = series.color.at(0),
            tx = x + 16.0,
            name = xml_escape(&series.name),
        ));
        x += w;
    }
    out
}

/// Pixel height of a bar for `value` within a plot of height `plot_h`.
pub(crate) fn bar_px(value: f64, y_max: f64, plot_h: f64) -> f64 {
    (value / y_max * plot_h).max(0.0)
}

/// Gridline spacing on the 1/2/5 ladder, aiming for four to eight lines.
fn tick_step(y_max: f64) -> f64 {
    let target = y_max / 6.0;
    let magnitude = 10f64.powf(target.log10().floor());
    for m in [1.0, 2.0, 5.0, 10.0] {
        let step = m * magnitude;
        if y_max / step <= 8.0 {
            return step;
        }
    }
    magnitude * 10.0
}

fn format_tick(v: f64, format: TickFormat) -> String {
    match format {
        TickFormat::Si => format_si(v),
        TickFormat::Integer => format!("{}", v.round() as i64),
    }
}

/// SI-suffix number formatting: 200000 -> "200k", 1200000 -> "1.2M".
pub fn format_si(v: f64) -> String {
    let (scaled, suffix) = if v.abs() >= 1e9 {
        (v / 1e9, "G")
    } else if v.abs() >= 1e6 {
        (v / 1e6, "M")
    } else if v.abs() >= 1e3 {
        (v / 1e3, "k")
    } else {
        (v, "")
    };
    let mut s = format!("{:.1}", scaled);
    if s.ends_with(".0") {
        s.truncate(s.len() - 2);
    }
    format!("{}{}", s, suffix)
}

fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset;
    use crate::model::{BarMode, Chart, ChartConfig, Series, SeriesColor, TickFormat};

    /// Parses a numeric attribute out of one SVG tag.
    fn attr(tag: &str, name: &str) -> f64 {
        let key = format!("{}=\"", name);
        let start = tag.find(&key).unwrap() + key.len();
        let end = tag[start..].find('"').unwrap() + start;
        tag[start..end].parse().unwrap()
    }

    /// Collects (x, height) for every bar rect, in emission order.
    fn bars(svg: &str) -> Vec<(f64, f64)> {
        svg.lines()
            .filter(|l| l.contains(r#"class="bar""#))
            .map(|l| (attr(l, "x"), attr(l, "height")))
            .collect()
    }

    fn chart(svg_of: fn() -> Chart) -> String {
        render_chart(&svg_of())
    }

    fn weather() -> Chart {
        dataset::report()
            .charts()
            .find(|c| c.title.contains("Weather"))
            .unwrap()
            .clone()
    }

    #[test]
    fn test_format_si() {
        assert_eq!(format_si(0.0), "0");
        assert_eq!(format_si(200000.0), "200k");
        assert_eq!(format_si(1_000_000.0), "1M");
        assert_eq!(format_si(1_200_000.0), "1.2M");
        assert_eq!(format_si(431.0), "431");
    }

    #[test]
    fn test_tick_step_ladder() {
        assert_eq!(tick_step(1_200_000.0), 200_000.0);
        assert_eq!(tick_step(5500.0), 1000.0);
        assert_eq!(tick_step(100.0), 20.0);
    }

    #[test]
    fn test_light_snow_bar_is_shortest() {
        let svg = render_chart(&weather());
        let bars = bars(&svg);
        assert_eq!(bars.len(), 3);
        // Category order: Clear, Light Snow/Rain, Misty
        assert!(bars[1].1 < bars[0].1);
        assert!(bars[1].1 < bars[2].1);
    }

    #[test]
    fn test_working_day_bar_is_taller() {
        let report = dataset::report();
        let chart = report
            .charts()
            .find(|c| c.title.contains("Working Day"))
            .unwrap();
        let svg = render_chart(chart);
        let bars = bars(&svg);
        assert_eq!(bars.len(), 2);
        assert!(bars[1].1 > bars[0].1);
    }

    #[test]
    fn test_categories_appear_in_supplied_order() {
        let svg = render_chart(&weather());
        let clear = svg.find("Clear/Partly Cloudy").unwrap();
        let snow = svg.find("Light Snow/Rain").unwrap();
        let misty = svg.find("Misty/Cloudy").unwrap();
        assert!(clear < snow && snow < misty);
    }

    #[test]
    fn test_stacked_chart_emits_one_segment_per_series() {
        let report = dataset::report();
        let chart = report.charts().find(|c| c.title.contains("Season")).unwrap();
        let svg = render_chart(chart);
        // 4 categories x 2 series
        assert_eq!(bars(&svg).len(), 8);
    }

    #[test]
    fn test_whiskers_only_with_error_margins() {
        let with = render_chart(&weather());
        assert!(with.contains(r#"class="whisker""#));

        let report = dataset::report();
        let without = report.charts().find(|c| c.title.contains("Season")).unwrap();
        assert!(!render_chart(without).contains(r#"class="whisker""#));
    }

    #[test]
    fn test_grouped_mode_places_series_side_by_side() {
        let two = || Chart {
            title: "g".to_string(),
            categories: vec!["a".to_string()],
            series: vec![
                Series {
                    name: "left".to_string(),
                    values: vec![4.0],
                    color: SeriesColor::Uniform("red".to_string()),
                    error: None,
                },
                Series {
                    name: "right".to_string(),
                    values: vec![6.0],
                    color: SeriesColor::Uniform("blue".to_string()),
                    error: None,
                },
            ],
            config: ChartConfig {
                bar_mode: BarMode::Grouped,
                x_title: String::new(),
                y_title: String::new(),
                y_max: 10.0,
                tick_format: TickFormat::Integer,
                show_legend: false,
            },
        };
        let bars = bars(&chart(two));
        assert_eq!(bars.len(), 2);
        assert!(bars[0].0 < bars[1].0);
        assert!(bars[0].1 < bars[1].1);
    }

    #[test]
    fn test_bar_px_scales_linearly() {
        assert_eq!(bar_px(0.0, 100.0, 250.0), 0.0);
        assert_eq!(bar_px(50.0, 100.0, 250.0), 125.0);
        assert_eq!(bar_px(100.0, 100.0, 250.0), 250.0);
    }
}
