use async_trait::async_trait;
use chrono::{Local, Months, NaiveDate};
use salary_analyzer::SalaryPredictor;

use crate::api::Result;

/// Filter shared by every request of one fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub language: String,
    /// only vacancies published on or after this day
    pub date_from: NaiveDate,
}

impl SearchQuery {
    pub fn new(language: impl Into<String>, date_from: NaiveDate) -> Self {
        Self {
            language: language.into(),
            date_from,
        }
    }

    pub fn posted_within_last_month(language: impl Into<String>) -> Self {
        Self::new(language, month_ago(Local::now().date_naive()))
    }

    /// formatted as yyyy-mm-dd
    pub fn date_from_param(&self) -> String {
        self.date_from.format("%Y-%m-%d").to_string()
    }
}

/// Same day one calendar month earlier, clamped to the end of shorter months
pub fn month_ago(today: NaiveDate) -> NaiveDate {
    today.checked_sub_months(Months::new(1)).unwrap_or(today)
}

#[derive(Debug, PartialEq, Eq)]
pub enum Page<V> {
    Vacancies(Vec<V>),
    /// the api has nothing past the requested page
    Exhausted,
}

/// A job site able to return one page of vacancies for a search
#[async_trait]
pub trait VacancySite: Send + Sync {
    type Vacancy: SalaryPredictor + Send;

    /// Display name used in logs and reports
    fn name(&self) -> &'static str;

    async fn fetch_page(&self, query: &SearchQuery, page: u32) -> Result<Page<Self::Vacancy>>;
}

#[cfg(test)]
mod test {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    #[test]
    fn test_month_ago() {
        assert_eq!(month_ago(date(2024, 5, 15)), date(2024, 4, 15));
        assert_eq!(month_ago(date(2024, 1, 10)), date(2023, 12, 10));
    }

    #[test]
    fn test_month_ago_clamps_to_month_end() {
        assert_eq!(month_ago(date(2024, 3, 31)), date(2024, 2, 29));
        assert_eq!(month_ago(date(2023, 3, 31)), date(2023, 2, 28));
    }

    #[test]
    fn test_date_from_param() {
        let query = SearchQuery::new("Python", date(2024, 2, 5));
        assert_eq!(query.date_from_param(), "2024-02-05");
    }
}
