use salary_analyzer::{aggregate, LanguageStatistic};
use serde::Serialize;
use vacancy_scraper::{VacancyFetcher, VacancySite};

use crate::Error;

/// What to do when fetching one language fails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// stop the whole run
    Abort,
    /// log the failure and leave the language out of the report
    Skip,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SiteReport {
    pub site: String,
    /// in the order languages were requested, languages without vacancies are absent
    pub statistics: Vec<LanguageStatistic>,
}

/// Fetch and aggregate every language on one site, one language at a time
pub async fn gather_statistics<S: VacancySite>(
    fetcher: &VacancyFetcher<S>,
    languages: &[String],
    policy: FailurePolicy,
) -> Result<SiteReport, Error> {
    let site = fetcher.site().name();
    let mut statistics = Vec::with_capacity(languages.len());
    for language in languages {
        let vacancies = match fetcher.fetch(language).await {
            Ok(vacancies) => vacancies,
            Err(source) if policy == FailurePolicy::Skip => {
                log::error!(
                    "failed to fetch {} vacancies from {}, skipping: {}",
                    language,
                    site,
                    source
                );
                continue;
            }
            Err(source) => {
                return Err(Error::FetchFailed {
                    site,
                    language: language.clone(),
                    source,
                })
            }
        };
        if vacancies.is_empty() {
            log::info!("no {} vacancies found on {}", language, site);
            continue;
        }
        let statistic = aggregate(language.as_str(), &vacancies);
        log::info!(
            "{} on {}: found {}, processed {}, average salary {}",
            language,
            site,
            statistic.vacancies_found,
            statistic.vacancies_processed,
            statistic.average_salary
        );
        statistics.push(statistic);
    }
    Ok(SiteReport {
        site: site.to_owned(),
        statistics,
    })
}
