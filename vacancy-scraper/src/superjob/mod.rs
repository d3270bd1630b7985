pub mod types;

use async_trait::async_trait;
use reqwest::Client;

use crate::api::Result;
use crate::http;
use crate::site::{Page, SearchQuery, VacancySite};

pub use types::Vacancy;

pub const DEFAULT_API_URL: &str = "https://api.superjob.ru/2.0/";
pub const MOSCOW_TOWN: &str = "Москва";
const PAGE_SIZE: u32 = 40;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuperJobConfig {
    pub api_url: String,
    /// town name the search is restricted to
    pub town: String,
}

impl Default for SuperJobConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_owned(),
            town: MOSCOW_TOWN.to_owned(),
        }
    }
}

/// Client for the superjob.ru api, authenticated with an application secret key
pub struct SuperJob {
    client: Client,
    config: SuperJobConfig,
    secret_key: String,
}

impl SuperJob {
    pub fn new(config: SuperJobConfig, secret_key: String) -> Result<Self> {
        Ok(Self::with_client(config, secret_key, http::client()?))
    }

    pub fn with_client(config: SuperJobConfig, secret_key: String, client: Client) -> Self {
        Self {
            client,
            config,
            secret_key,
        }
    }

    fn vacancies_url(&self) -> String {
        format!("{}/vacancies", self.config.api_url.trim_end_matches('/'))
    }

    fn search_params(&self, query: &SearchQuery, page: u32) -> Vec<(&'static str, String)> {
        vec![
            ("town", self.config.town.clone()),
            ("keywords", format!("{} разработчик", query.language)),
            ("date_published_from", query.date_from_param()),
            ("page", page.to_string()),
            ("count", PAGE_SIZE.to_string()),
        ]
    }
}

#[async_trait]
impl VacancySite for SuperJob {
    type Vacancy = Vacancy;

    fn name(&self) -> &'static str {
        "SuperJob"
    }

    async fn fetch_page(&self, query: &SearchQuery, page: u32) -> Result<Page<Vacancy>> {
        let url = self.vacancies_url();
        let request = self
            .client
            .get(&url)
            .header("X-Api-App-Id", &self.secret_key)
            .query(&self.search_params(query, page));
        let search: types::VacancySearch = http::get_json(request, &url).await?;
        log::debug!(
            "superjob page {} for {}, {} vacancies in total",
            page,
            query.language,
            search.total
        );
        Ok(search.into_page())
    }
}

#[cfg(test)]
mod test {
    use chrono::NaiveDate;
    use serde_json::json;

    use super::*;
    use crate::api::Error;
    use crate::fetcher::VacancyFetcher;
    use crate::test_server::TestServer;

    fn site(api_url: &str) -> SuperJob {
        let config = SuperJobConfig {
            api_url: api_url.to_owned(),
            ..Default::default()
        };
        SuperJob::with_client(config, "v3.r.secret".to_owned(), Client::new())
    }

    fn query() -> SearchQuery {
        SearchQuery::new(
            "JavaScript",
            NaiveDate::from_ymd_opt(2024, 1, 31).expect("valid date"),
        )
    }

    #[test]
    fn test_search_params() {
        let site = site(DEFAULT_API_URL);
        assert_eq!(site.vacancies_url(), "https://api.superjob.ru/2.0/vacancies");
        assert_eq!(
            site.search_params(&query(), 0),
            vec![
                ("town", "Москва".to_owned()),
                ("keywords", "JavaScript разработчик".to_owned()),
                ("date_published_from", "2024-01-31".to_owned()),
                ("page", "0".to_owned()),
                ("count", "40".to_owned()),
            ]
        );
    }

    #[tokio::test]
    async fn test_fetch_sends_app_id_until_empty_page() {
        let first = json!({
            "objects": [{"id": 7, "payment_from": 90000, "payment_to": 0, "currency": "rub"}],
            "total": 1,
            "more": false
        });
        let server = TestServer::start(vec![
            (200, first.to_string()),
            (200, json!({"objects": [], "total": 1}).to_string()),
        ])
        .await;
        let fetcher = VacancyFetcher::new(site(&server.url));
        let vacancies = fetcher.fetch_query(&query()).await.expect("fetch failed");
        assert_eq!(vacancies.len(), 1);
        assert_eq!(vacancies[0].id, Some(7));

        let requests = server.requests();
        assert_eq!(requests.len(), 2);
        for (page, request) in requests.iter().enumerate() {
            assert!(request.starts_with("get /vacancies?"), "{}", request);
            assert!(request.contains("x-api-app-id: v3.r.secret"), "{}", request);
            assert!(request.contains(&format!("page={}", page)), "{}", request);
            assert!(request.contains("count=40"), "{}", request);
        }
    }

    #[tokio::test]
    async fn test_rejected_key_is_request_not_ok() {
        let body = r#"{"error": {"code": 403, "message": "Invalid app_key"}}"#;
        let server = TestServer::start(vec![(403, body.to_owned())]).await;
        let result = VacancyFetcher::new(site(&server.url))
            .fetch_query(&query())
            .await;
        assert!(matches!(result, Err(Error::RequestNotOk { status: 403, .. })));
    }
}
