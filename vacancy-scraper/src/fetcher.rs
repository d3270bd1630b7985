use std::time::Duration;

use crate::api::Result;
use crate::site::{Page, SearchQuery, VacancySite};

/// Pause inserted every `every_pages` pages so long searches don't get throttled upstream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Throttle {
    pub every_pages: u32,
    pub pause: Duration,
}

impl Throttle {
    pub fn new(every_pages: u32, pause: Duration) -> Self {
        Self { every_pages, pause }
    }

    fn applies_before(&self, page: u32) -> bool {
        self.every_pages > 0 && page > 0 && page % self.every_pages == 0
    }
}

/// Collects every page of a site's search results for one language
pub struct VacancyFetcher<S> {
    site: S,
    throttle: Option<Throttle>,
}

impl<S: VacancySite> VacancyFetcher<S> {
    pub fn new(site: S) -> Self {
        Self {
            site,
            throttle: None,
        }
    }

    pub fn with_throttle(mut self, throttle: Option<Throttle>) -> Self {
        self.throttle = throttle;
        self
    }

    pub fn site(&self) -> &S {
        &self.site
    }

    /// Fetch all vacancies for `language` published during the last month
    pub async fn fetch(&self, language: &str) -> Result<Vec<S::Vacancy>> {
        let query = SearchQuery::posted_within_last_month(language);
        self.fetch_query(&query).await
    }

    /// Request pages until the site reports no more, keeping the api's order.
    /// The first failing page aborts the whole fetch.
    pub async fn fetch_query(&self, query: &SearchQuery) -> Result<Vec<S::Vacancy>> {
        let mut vacancies = Vec::new();
        let mut page = 0;
        loop {
            if let Some(throttle) = self.throttle.filter(|t| t.applies_before(page)) {
                log::info!(
                    "pausing {:?} before page {} of {} search for {}",
                    throttle.pause,
                    page,
                    self.site.name(),
                    query.language
                );
                tokio::time::sleep(throttle.pause).await;
            }
            log::debug!(
                "requesting vacancies from {}, page: {}, language: {}",
                self.site.name(),
                page,
                query.language
            );
            match self.site.fetch_page(query, page).await? {
                Page::Vacancies(batch) => vacancies.extend(batch),
                Page::Exhausted => break,
            }
            page += 1;
        }
        log::debug!(
            "retrieved {} vacancies from {} in {} pages, language: {}",
            vacancies.len(),
            self.site.name(),
            page,
            query.language
        );
        Ok(vacancies)
    }
}
