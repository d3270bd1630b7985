pub mod types;

use async_trait::async_trait;
use reqwest::Client;

use crate::api::Result;
use crate::http;
use crate::site::{Page, SearchQuery, VacancySite};

pub use types::{Salary, Vacancy};

pub const DEFAULT_API_URL: &str = "https://api.hh.ru/";
pub const MOSCOW_AREA_ID: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadHunterConfig {
    pub api_url: String,
    /// region the search is restricted to
    pub area_id: u32,
}

impl Default for HeadHunterConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_owned(),
            area_id: MOSCOW_AREA_ID,
        }
    }
}

/// Client for the public hh.ru vacancy search, no credentials needed
pub struct HeadHunter {
    client: Client,
    config: HeadHunterConfig,
}

impl HeadHunter {
    pub fn new(config: HeadHunterConfig) -> Result<Self> {
        Ok(Self::with_client(config, http::client()?))
    }

    pub fn with_client(config: HeadHunterConfig, client: Client) -> Self {
        Self { client, config }
    }

    fn vacancies_url(&self) -> String {
        format!("{}/vacancies", self.config.api_url.trim_end_matches('/'))
    }

    fn search_params(&self, query: &SearchQuery, page: u32) -> Vec<(&'static str, String)> {
        vec![
            ("text", format!("Программист {}", query.language)),
            ("area", self.config.area_id.to_string()),
            ("date_from", query.date_from_param()),
            ("only_with_salary", "true".to_owned()),
            ("page", page.to_string()),
        ]
    }
}

#[async_trait]
impl VacancySite for HeadHunter {
    type Vacancy = Vacancy;

    fn name(&self) -> &'static str {
        "HeadHunter"
    }

    async fn fetch_page(&self, query: &SearchQuery, page: u32) -> Result<Page<Vacancy>> {
        let url = self.vacancies_url();
        let request = self.client.get(&url).query(&self.search_params(query, page));
        let search: types::VacancySearch = http::get_json(request, &url).await?;
        log::debug!(
            "hh.ru page {} of {} for {}, {} vacancies found in total",
            page,
            search.pages,
            query.language,
            search.found
        );
        Ok(search.into_page(page))
    }
}
