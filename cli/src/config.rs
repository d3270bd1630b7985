use std::time::Duration;

use clap::ValueEnum;
use thiserror::Error;
use vacancy_scraper::headhunter::HeadHunterConfig;
use vacancy_scraper::superjob::SuperJobConfig;
use vacancy_scraper::Throttle;

pub const DEFAULT_LANGUAGES: [&str; 7] = [
    "JavaScript",
    "Java",
    "Python",
    "Ruby",
    "PHP",
    "C++",
    "C#",
];

const DEFAULT_HH_THROTTLE_EVERY_PAGES: u32 = 5;
const DEFAULT_HH_THROTTLE_PAUSE_SECS: u64 = 10;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} not set")]
    MissingVar(&'static str),
    #[error("{var} must be a non-negative integer, got '{value}'")]
    InvalidNumber { var: &'static str, value: String },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Site {
    #[value(name = "hh")]
    HeadHunter,
    #[value(name = "sj")]
    SuperJob,
}

/// Everything needed to query one site
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteConfig {
    HeadHunter {
        config: HeadHunterConfig,
        throttle: Option<Throttle>,
    },
    SuperJob {
        config: SuperJobConfig,
        secret_key: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub languages: Vec<String>,
    pub sites: Vec<SiteConfig>,
}

impl AppConfig {
    /// Build the configuration from the process environment
    pub fn load(sites: &[Site], languages: &[String]) -> Result<Self, ConfigError> {
        Self::from_lookup(sites, languages, |name| std::env::var(name).ok())
    }

    /// An empty `sites` selects every site, empty `languages` selects [`DEFAULT_LANGUAGES`]
    pub fn from_lookup<F>(
        sites: &[Site],
        languages: &[String],
        lookup: F,
    ) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let languages = if languages.is_empty() {
            DEFAULT_LANGUAGES.into_iter().map(String::from).collect()
        } else {
            languages.to_vec()
        };
        let mut selected: Vec<Site> = Vec::new();
        let requested = if sites.is_empty() {
            &[Site::HeadHunter, Site::SuperJob][..]
        } else {
            sites
        };
        for site in requested {
            if !selected.contains(site) {
                selected.push(*site);
            }
        }
        let sites = selected
            .into_iter()
            .map(|site| match site {
                Site::HeadHunter => headhunter(&lookup),
                Site::SuperJob => superjob(&lookup),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { languages, sites })
    }
}

fn headhunter<F>(lookup: &F) -> Result<SiteConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = HeadHunterConfig::default();
    if let Some(api_url) = lookup("HH_API_URL") {
        config.api_url = api_url;
    }
    if let Some(area_id) = number(lookup, "HH_AREA_ID")? {
        config.area_id = area_id;
    }
    let every_pages =
        number(lookup, "HH_THROTTLE_EVERY_PAGES")?.unwrap_or(DEFAULT_HH_THROTTLE_EVERY_PAGES);
    let pause_secs =
        number(lookup, "HH_THROTTLE_PAUSE_SECS")?.unwrap_or(DEFAULT_HH_THROTTLE_PAUSE_SECS);
    let throttle = (every_pages > 0)
        .then(|| Throttle::new(every_pages, Duration::from_secs(pause_secs)));
    Ok(SiteConfig::HeadHunter { config, throttle })
}

fn superjob<F>(lookup: &F) -> Result<SiteConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let secret_key = lookup("SJ_SECRET_KEY")
        .filter(|key| !key.trim().is_empty())
        .ok_or(ConfigError::MissingVar("SJ_SECRET_KEY"))?;
    let mut config = SuperJobConfig::default();
    if let Some(api_url) = lookup("SJ_API_URL") {
        config.api_url = api_url;
    }
    if let Some(town) = lookup("SJ_TOWN") {
        config.town = town;
    }
    Ok(SiteConfig::SuperJob { config, secret_key })
}

fn number<F, N>(lookup: &F, var: &'static str) -> Result<Option<N>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    N: std::str::FromStr,
{
    match lookup(var) {
        None => Ok(None),
        Some(value) => match value.trim().parse() {
            Ok(number) => Ok(Some(number)),
            Err(_) => Err(ConfigError::InvalidNumber { var, value }),
        },
    }
}
