use salary_analyzer::{predict_salary, SalaryPredictor};
use serde::{Deserialize, Serialize};

use crate::lenient::lenient;
use crate::site::Page;

const RUB_CURRENCY: &str = "RUR";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Salary {
    #[serde(default, deserialize_with = "lenient")]
    pub from: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub to: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub currency: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Vacancy {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    /// `None` for a missing, `null` or malformed salary
    #[serde(default, deserialize_with = "lenient")]
    pub salary: Option<Salary>,
}

impl SalaryPredictor for Vacancy {
    fn predict_rub_salary(&self) -> Option<i64> {
        let salary = self.salary.as_ref()?;
        if salary.currency.as_deref() != Some(RUB_CURRENCY) {
            return None;
        }
        predict_salary(salary.from, salary.to)
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub(crate) struct VacancySearch {
    pub(crate) items: Vec<Vacancy>,
    #[serde(default)]
    pub(crate) found: u32,
    pub(crate) pages: u32,
}

impl VacancySearch {
    /// HeadHunter keeps answering past the last page, `pages` tells where results end
    pub(crate) fn into_page(self, page: u32) -> Page<Vacancy> {
        if page >= self.pages {
            return Page::Exhausted;
        }
        Page::Vacancies(self.items)
    }
}
