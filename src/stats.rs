//! Typed statistics rows for the authored bike-sharing tables.
//!
//! Values are fixed constants transcribed from the source analysis; nothing
//! here is computed at runtime.

use serde::Serialize;

use crate::model::{Cell, Table, TableRow};

/// Daily rental statistics for one season.
#[derive(Debug, Clone, Serialize)]
pub struct SeasonStats {
    pub season: &'static str,
    pub casual_mean: f64,
    pub registered_mean: f64,
    pub cnt_max: i64,
    pub cnt_min: i64,
    pub cnt_mean: f64,
}

/// Daily rental statistics for one weather situation.
#[derive(Debug, Clone, Serialize)]
pub struct WeatherStats {
    pub weathersit: &'static str,
    pub max: i64,
    pub min: i64,
    pub mean: f64,
    pub sum: i64,
}

/// Daily rental statistics for one day type (holiday or working day).
#[derive(Debug, Clone, Serialize)]
pub struct DayTypeStats {
    pub workingday: &'static str,
    pub max: i64,
    pub min: i64,
    pub mean: f64,
}

/// Seasonal rental statistics, one row per season.
pub fn season_rows() -> Vec<SeasonStats> {
    vec![
        SeasonStats {
            season: "Spring",
            casual_mean: 334.928177,
            registered_mean: 2269.204420,
            cnt_max: 7836,
            cnt_min: 431,
            cnt_mean: 2604.132597,
        },
        SeasonStats {
            season: "Summer",
            casual_mean: 1106.097826,
            registered_mean: 3886.233696,
            cnt_max: 8362,
            cnt_min: 795,
            cnt_mean: 4992.331522,
        },
        SeasonStats {
            season: "Fall",
            casual_mean: 1202.611702,
            registered_mean: 4441.691489,
            cnt_max: 8714,
            cnt_min: 1115,
            cnt_mean: 5644.303191,
        },
        SeasonStats {
            season: "Winter",
            casual_mean: 729.112360,
            registered_mean: 3999.050562,
            cnt_max: 8555,
            cnt_min: 22,
            cnt_mean: 4728.162921,
        },
    ]
}

/// Rental statistics by weather situation, one row per condition.
pub fn weather_rows() -> Vec<WeatherStats> {
    vec![
        WeatherStats {
            weathersit: "Clear/Partly Cloudy",
            max: 8714,
            min: 431,
            mean: 4876.786177,
            sum: 2257952,
        },
        WeatherStats {
            weathersit: "Light Snow/Rain",
            max: 4639,
            min: 22,
            mean: 1803.285714,
            sum: 37869,
        },
        WeatherStats {
            weathersit: "Misty/Cloudy",
            max: 8362,
            min: 605,
            mean: 4035.862348,
            sum: 996858,
        },
    ]
}

/// Rental statistics for holidays versus working days.
pub fn day_type_rows() -> Vec<DayTypeStats> {
    vec![
        DayTypeStats {
            workingday: "Holiday",
            max: 8714,
            min: 605,
            mean: 4330.168831,
        },
        DayTypeStats {
            workingday: "workingday",
            max: 8362,
            min: 22,
            mean: 4584.820000,
        },
    ]
}

/// Builds the displayable grid for the seasonal statistics.
pub fn season_table(rows: &[SeasonStats]) -> Table {
    Table {
        index_label: "season".to_string(),
        columns: [
            "casual_mean",
            "registered_mean",
            "cnt_max",
            "cnt_min",
            "cnt_mean",
        ]
        .map(String::from)
        .to_vec(),
        rows: rows
            .iter()
            .map(|r| TableRow {
                label: r.season.to_string(),
                cells: vec![
                    Cell::Float(r.casual_mean),
                    Cell::Float(r.registered_mean),
                    Cell::Int(r.cnt_max),
                    Cell::Int(r.cnt_min),
                    Cell::Float(r.cnt_mean),
                ],
            })
            .collect(),
    }
}

/// Builds the displayable grid for the weather statistics.
pub fn weather_table(rows: &[WeatherStats]) -> Table {
    Table {
        index_label: "weathersit".to_string(),
        columns: ["max", "min", "mean", "sum"].map(String::from).to_vec(),
        rows: rows
            .iter()
            .map(|r| TableRow {
                label: r.weathersit.to_string(),
                cells: vec![
                    Cell::Int(r.max),
                    Cell::Int(r.min),
                    Cell::Float(r.mean),
                    Cell::Int(r.sum),
                ],
            })
            .collect(),
    }
}

/// Builds the displayable grid for the holiday/working day statistics.
pub fn day_type_table(rows: &[DayTypeStats]) -> Table {
    Table {
        index_label: "workingday".to_string(),
        columns: ["max", "min", "mean"].map(String::from).to_vec(),
        rows: rows
            .iter()
            .map(|r| TableRow {
                label: r.workingday.to_string(),
                cells: vec![Cell::Int(r.max), Cell::Int(r.min), Cell::Float(r.mean)],
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_rows_count() {
        assert_eq!(season_rows().len(), 4);
    }

    #[test]
    fn test_weather_rows_count() {
        assert_eq!(weather_rows().len(), 3);
    }

    #[test]
    fn test_day_type_rows_count() {
        assert_eq!(day_type_rows().len(), 2);
    }

    #[test]
    fn test_fall_has_highest_mean_count() {
        let rows = season_rows();
        let fall = rows.iter().find(|r| r.season == "Fall").unwrap();
        assert_eq!(fall.cnt_mean, 5644.303191);
        assert!(rows.iter().all(|r| r.cnt_mean <= fall.cnt_mean));
    }

    #[test]
    fn test_season_table_shape() {
        let table = season_table(&season_rows());
        assert_eq!(table.index_label, "season");
        assert_eq!(table.columns.len(), 5);
        assert_eq!(table.rows.len(), 4);
        assert!(table.rows.iter().all(|r| r.cells.len() == 5));
    }

    #[test]
    fn test_weather_table_row_labels_in_order() {
        let table = weather_table(&weather_rows());
        let labels: Vec<_> = table.rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(
            labels,
            ["Clear/Partly Cloudy", "Light Snow/Rain", "Misty/Cloudy"]
        );
    }

    #[test]
    fn test_day_type_table_shape() {
        let table = day_type_table(&day_type_rows());
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.columns, ["max", "min", "mean"]);
    }
}
