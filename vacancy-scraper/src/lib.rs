pub mod api;
pub mod fetcher;
pub mod headhunter;
pub(crate) mod http;
pub(crate) mod lenient;
pub mod site;
pub mod superjob;
#[cfg(test)]
mod test_server;

pub use api::{Error, Result};
pub use fetcher::{Throttle, VacancyFetcher};
pub use headhunter::HeadHunter;
pub use site::{month_ago, Page, SearchQuery, VacancySite};
pub use superjob::SuperJob;
