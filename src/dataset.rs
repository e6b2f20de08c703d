//! The authored bike-sharing analysis, as a fixed block sequence.
//!
//! Everything in this module is a literal transcribed from the source
//! analysis: category labels, statistics, chart arrays, and narrative text.
//! The report answers three business questions about seasonal demand,
//! weather impact, and working-day versus holiday usage.

use crate::model::{
    BarMode, Block, Chart, ChartConfig, Report, Series, SeriesColor, TickFormat,
};
use crate::stats;

const PINK: &str = "rgb(255,192,203)";
const SKY_BLUE: &str = "rgb(135,206,235)";
const LIGHT_GREEN: &str = "rgb(144,238,144)";

fn heading(level: u8, text: &str) -> Block {
    Block::Heading {
        level,
        text: text.to_string(),
    }
}

fn bullets(title: Option<&str>, items: &[&str]) -> Block {
    Block::BulletList {
        title: title.map(String::from),
        items: items.iter().map(|s| s.to_string()).collect(),
    }
}

/// Builds the complete report in its fixed order.
pub fn report() -> Report {
    let mut blocks = Vec::new();
    blocks.extend(business_questions());
    blocks.extend(exploratory_analysis());
    blocks.extend(visualization());
    blocks.extend(conclusion());

    Report {
        title: "Bike Sharing Data Analysis Project".to_string(),
        blocks,
    }
}

fn business_questions() -> Vec<Block> {
    vec![
        heading(2, "Determining Business Question"),
        Block::NumberedList(
            [
                "How does bike-sharing demand vary across different seasons?",
                "What impact do weather conditions have on bike sharing patterns?",
                "Is there a significant difference in bike-sharing usage between working day and holiday?",
            ]
            .map(String::from)
            .to_vec(),
        ),
    ]
}

fn exploratory_analysis() -> Vec<Block> {
    vec![
        heading(2, "Exploratory Data Analysis (EDA)"),
        heading(3, "Explore Season"),
        heading(4, "Seasonal Bike Rental Statistics"),
        Block::Table(stats::season_table(&stats::season_rows())),
        bullets(
            Some("Insight:"),
            &[
                "Fall has the highest peak day (8714 rides)",
                "Spring has the lowest peak (7836 rides)",
                "Winter has an extremely low minimum (22 rides), possibly due to severe weather",
            ],
        ),
        heading(3, "Explore Weather"),
        heading(4, "Bike Rental Statistics based on Weather Situations"),
        Block::Table(stats::weather_table(&stats::weather_rows())),
        bullets(
            Some("Insight:"),
            &[
                "Clear days have the widest range (431 to 8714), suggesting other factors (like temperature or day of week) also play a role",
                "Rainy days have the smallest maximum, indicating it's hard to ride in poor weather",
            ],
        ),
        heading(3, "Explore Working Day and Holiday Comparison"),
        heading(4, "Bike Rental Statistics: Holiday vs Working Day"),
        Block::Table(stats::day_type_table(&stats::day_type_rows())),
        bullets(
            Some("Insight:"),
            &[
                "Workdays show extreme difference (22 to 8362), potentially indicating severe weather or a unique event",
                "The difference in average usage between workdays and holidays is relatively small (about 250 rides)",
                "Both types of days can reach high usage levels, but for potentially different reasons (commuting or leisure)",
            ],
        ),
    ]
}

/// Stacked seasonal demand chart: registered on the bottom, casual on top.
fn season_chart() -> Chart {
    Chart {
        title: "Bike Sharing Demand based on Season".to_string(),
        categories: ["Fall", "Spring", "Summer", "Winter"]
            .map(String::from)
            .to_vec(),
        series: vec![
            Series {
                name: "Registered".to_string(),
                values: vec![840000.0, 410000.0, 710000.0, 710000.0],
                color: SeriesColor::Uniform(PINK.to_string()),
                error: None,
            },
            Series {
                name: "Casual".to_string(),
                values: vec![260000.0, 70000.0, 220000.0, 140000.0],
                color: SeriesColor::Uniform(SKY_BLUE.to_string()),
                error: None,
            },
        ],
        config: ChartConfig {
            bar_mode: BarMode::Stacked,
            x_title: "Season".to_string(),
            y_title: "Number of Rentals".to_string(),
            y_max: 1_200_000.0,
            tick_format: TickFormat::Si,
            show_legend: true,
        },
    }
}

fn weather_chart() -> Chart {
    Chart {
        title: "Bike Sharing Demand based on Weather Conditions".to_string(),
        categories: ["Clear/Partly Cloudy", "Light Snow/Rain", "Misty/Cloudy"]
            .map(String::from)
            .to_vec(),
        series: vec![Series {
            name: "Rentals".to_string(),
            values: vec![4900.0, 1800.0, 4050.0],
            color: SeriesColor::PerCategory(
                [PINK, SKY_BLUE, LIGHT_GREEN].map(String::from).to_vec(),
            ),
            error: Some(vec![150.0, 600.0, 300.0]),
        }],
        config: ChartConfig {
            bar_mode: BarMode::Grouped,
            x_title: "Weather Conditions".to_string(),
            y_title: "Number of Rentals".to_string(),
            y_max: 5500.0,
            tick_format: TickFormat::Integer,
            show_legend: false,
        },
    }
}

fn day_type_chart() -> Chart {
    Chart {
        title: "Comparison of Bike Renters on Working Day and Holiday".to_string(),
        categories: ["Holiday", "Working Day"].map(String::from).to_vec(),
        series: vec![Series {
            name: "Rentals".to_string(),
            values: vec![4040.0, 4326.0],
            color: SeriesColor::PerCategory([PINK, SKY_BLUE].map(String::from).to_vec()),
            error: Some(vec![100.0, 100.0]),
        }],
        config: ChartConfig {
            bar_mode: BarMode::Grouped,
            x_title: "Day".to_string(),
            y_title: "Number of Rentals".to_string(),
            y_max: 5500.0,
            tick_format: TickFormat::Integer,
            show_legend: false,
        },
    }
}

fn visualization() -> Vec<Block> {
    vec![
        heading(2, "Visualization & Explanatory Analysis"),
        heading(3, "1. How does bike sharing demand vary across different seasons?"),
        Block::Chart(season_chart()),
        bullets(
            Some("Insight:"),
            &[
                "Fall has the highest overall demand for bike rentals",
                "Spring has the lowest overall demand",
                "Registered users consistently outnumber casual users across all seasons",
                "The proportion of casual users is highest in Summer and Fall",
                "Winter demand is surprisingly high, surpassing Spring",
            ],
        ),
        heading(3, "2. What impact do weather conditions have on bike sharing patterns?"),
        Block::Chart(weather_chart()),
        bullets(
            Some("Insight:"),
            &[
                "Clear/Partly Cloudy weather has the highest demand, with nearly 5000 rentals on average",
                "Misty/Cloudy weather with moderate demand, averaging about 4000 rentals",
                "Light Snow/Rain conditions significantly reduce demand to around 1800 rentals",
                "The error bars (black lines) suggest some variability within each weather category",
            ],
        ),
        heading(
            3,
            "3. Is there a significant difference in bike-sharing usage between working days and holidays?",
        ),
        Block::Chart(day_type_chart()),
        bullets(
            Some("Insight:"),
            &[
                "Working day had an average number of bike rentals that are slightly higher than holidays",
                "The difference of rentals during working days and those during holidays are relatively small",
                "There is a notable amount of variability in both categories, as shown by the error bar",
            ],
        ),
    ]
}

fn conclusion() -> Vec<Block> {
    vec![
        heading(2, "Conclusion"),
        heading(3, "1. How does bike sharing demand vary across different seasons?"),
        bullets(
            None,
            &[
                "The seasonal influence on bike demand (Fall with the highest demand)",
                "Registered users are the most users throughout any season",
                "The service is remain popular even in Winter",
                "They should campaigning or promoting more in Spring",
            ],
        ),
        heading(3, "2. What impact do weather conditions have on bike sharing patterns?"),
        bullets(
            None,
            &[
                "Clear or partly cloudy weather is optimal for bike sharing, likely encouraging the highest number of riders",
                "Misty or cloudy conditions cause a moderate decrease in ridership, but still maintain relatively high usage",
                "Light snow or rain dramatically reduces bike sharing demand, cutting usage by more than half compared to clear weather",
                "The variability within each category (shown by error bars) suggests that other factors (like temperature or day of the week) may also influence ridership within these weather conditions",
            ],
        ),
        heading(
            3,
            "3. Is there a significant difference in bike-sharing usage between working day and holiday?",
        ),
        bullets(
            None,
            &[
                "While there is a difference, it may not significant. Working days show slightly higher usage",
                "The small difference in averages and the overlapping error bars indicate that factors such as weather, season, or special events might have a more pronounced impact on bikes sharing rentals",
            ],
        ),
    ]
}
