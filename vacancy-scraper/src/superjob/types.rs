use salary_analyzer::{predict_salary, SalaryPredictor};
use serde::{Deserialize, Serialize};

use crate::lenient::lenient;
use crate::site::Page;

const RUB_CURRENCY: &str = "rub";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Vacancy {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub profession: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub payment_from: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub payment_to: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub currency: Option<String>,
}

impl SalaryPredictor for Vacancy {
    fn predict_rub_salary(&self) -> Option<i64> {
        if self.currency.as_deref() != Some(RUB_CURRENCY) {
            return None;
        }
        predict_salary(self.payment_from, self.payment_to)
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub(crate) struct VacancySearch {
    pub(crate) objects: Vec<Vacancy>,
    #[serde(default)]
    pub(crate) total: u32,
}

impl VacancySearch {
    /// SuperJob has no page count, an empty page marks the end
    pub(crate) fn into_page(self) -> Page<Vacancy> {
        if self.objects.is_empty() {
            return Page::Exhausted;
        }
        Page::Vacancies(self.objects)
    }
}
