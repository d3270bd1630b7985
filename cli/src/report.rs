use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, Table};

use crate::gather::SiteReport;

const HEADER: [&str; 4] = [
    "Language",
    "Vacancies found",
    "Vacancies processed",
    "Average salary",
];

fn centered<T: ToString>(content: T) -> Cell {
    Cell::new(content).set_alignment(CellAlignment::Center)
}

/// One row per language, titled with the site name
pub fn render_table(report: &SiteReport) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(HEADER.to_vec());
    for statistic in &report.statistics {
        table.add_row(vec![
            centered(&statistic.language),
            centered(statistic.vacancies_found),
            centered(statistic.vacancies_processed),
            Cell::new(statistic.average_salary),
        ]);
    }
    format!("Vacancy statistics for {}\n{}", report.site, table)
}

pub fn render_json(reports: &[SiteReport]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(reports)
}

#[cfg(test)]
mod test {
    use salary_analyzer::LanguageStatistic;
    use serde_json::{json, Value};

    use super::*;

    fn report() -> SiteReport {
        SiteReport {
            site: "HeadHunter".to_owned(),
            statistics: vec![
                LanguageStatistic::new("Python".to_owned(), 312, 240, 187_500),
                LanguageStatistic::new("C++".to_owned(), 95, 0, 0),
            ],
        }
    }

    #[test]
    fn test_render_table() {
        let rendered = render_table(&report());
        let mut lines = rendered.lines();
        assert_eq!(lines.next(), Some("Vacancy statistics for HeadHunter"));
        for column in HEADER {
            assert!(rendered.contains(column), "missing column {}", column);
        }
        let python_row = rendered
            .lines()
            .find(|line| line.contains("Python"))
            .expect("Python row missing");
        assert!(python_row.contains("312"));
        assert!(python_row.contains("240"));
        assert!(python_row.contains("187500"));
        assert!(rendered.lines().any(|line| line.contains("C++")));
    }

    #[test]
    fn test_render_empty_report() {
        let empty = SiteReport {
            site: "SuperJob".to_owned(),
            statistics: vec![],
        };
        let rendered = render_table(&empty);
        assert!(rendered.starts_with("Vacancy statistics for SuperJob"));
        assert!(rendered.contains("Average salary"));
    }

    #[test]
    fn test_render_json() {
        let rendered = render_json(&[report()]).expect("Serialization failed");
        let value: Value = serde_json::from_str(&rendered).expect("invalid json");
        assert_eq!(value[0]["site"], json!("HeadHunter"));
        assert_eq!(
            value[0]["statistics"][1],
            json!({
                "language": "C++",
                "vacancies_found": 95,
                "vacancies_processed": 0,
                "average_salary": 0
            })
        );
    }
}
