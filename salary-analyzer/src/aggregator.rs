use crate::api::SalaryPredictor;
use crate::models::LanguageStatistic;

/// Average the predicted ruble salaries of the given vacancies
///
/// Returns `(average_salary, vacancies_processed)`. Vacancies without an estimate
/// are skipped and do not move the average.
pub fn average_salary<V: SalaryPredictor>(vacancies: &[V]) -> (i64, usize) {
    let mut salary_sum: i128 = 0;
    let mut processed = 0;
    let mut average = 0;
    for vacancy in vacancies {
        let Some(salary) = vacancy.predict_rub_salary() else {
            continue;
        };
        processed += 1;
        salary_sum += i128::from(salary);
        // an average of i64 values always fits back into i64
        average = (salary_sum / processed as i128) as i64;
    }
    (average, processed)
}

/// Build the statistic for one language out of everything fetched for it
pub fn aggregate<V: SalaryPredictor>(
    language: impl Into<String>,
    vacancies: &[V],
) -> LanguageStatistic {
    let language = language.into();
    let (average, processed) = average_salary(vacancies);
    log::debug!(
        "{}: {} of {} vacancies had a usable salary",
        language,
        processed,
        vacancies.len()
    );
    LanguageStatistic::new(language, vacancies.len(), processed, average)
}
