use serde::{Deserialize, Serialize};

/// Found/processed/average-salary figures for one programming language on one site
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LanguageStatistic {
    pub language: String,
    pub vacancies_found: usize,
    /// Only vacancies with a matching currency and a usable salary range
    pub vacancies_processed: usize,
    /// Zero when nothing was processed
    pub average_salary: i64,
}

impl LanguageStatistic {
    pub fn new(
        language: String,
        vacancies_found: usize,
        vacancies_processed: usize,
        average_salary: i64,
    ) -> Self {
        Self {
            language,
            vacancies_found,
            vacancies_processed,
            average_salary,
        }
    }
}
