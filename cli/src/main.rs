mod config;
mod gather;
mod report;

use clap::{Parser, ValueEnum};
use dotenv::dotenv;
use thiserror::Error;
use vacancy_scraper::{HeadHunter, SuperJob, VacancyFetcher};

use config::{AppConfig, ConfigError, Site, SiteConfig};
use gather::{gather_statistics, FailurePolicy, SiteReport};

#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Failed to create {site} client: '{source}'")]
    Client {
        site: &'static str,
        source: vacancy_scraper::Error,
    },
    #[error("Fetching {language} vacancies from {site} failed: '{source}'")]
    FetchFailed {
        site: &'static str,
        language: String,
        source: vacancy_scraper::Error,
    },
    #[error("Failed to serialize statistics: '{0}'")]
    Serialize(#[from] serde_json::Error),
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Output {
    Table,
    Json,
}

/// Vacancy counts and average salaries per programming language
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Job sites to collect statistics from, all of them when omitted
    #[clap(long, value_enum)]
    site: Vec<Site>,

    /// Programming languages to search for, replaces the default list
    #[clap(long)]
    language: Vec<String>,

    #[clap(long, value_enum, default_value_t = Output::Table)]
    output: Output,

    /// Leave out languages that failed to fetch instead of stopping
    #[clap(long)]
    keep_going: bool,
}

async fn site_report(
    site: SiteConfig,
    languages: &[String],
    policy: FailurePolicy,
) -> Result<SiteReport, Error> {
    match site {
        SiteConfig::HeadHunter { config, throttle } => {
            let client = HeadHunter::new(config).map_err(|source| Error::Client {
                site: "HeadHunter",
                source,
            })?;
            let fetcher = VacancyFetcher::new(client).with_throttle(throttle);
            gather_statistics(&fetcher, languages, policy).await
        }
        SiteConfig::SuperJob { config, secret_key } => {
            let client = SuperJob::new(config, secret_key).map_err(|source| Error::Client {
                site: "SuperJob",
                source,
            })?;
            gather_statistics(&VacancyFetcher::new(client), languages, policy).await
        }
    }
}

async fn run(args: Cli) -> Result<(), Error> {
    let config = AppConfig::load(&args.site, &args.language)?;
    let policy = if args.keep_going {
        FailurePolicy::Skip
    } else {
        FailurePolicy::Abort
    };
    log::info!(
        "collecting statistics for {} languages from {} sites",
        config.languages.len(),
        config.sites.len()
    );
    let mut reports = Vec::with_capacity(config.sites.len());
    for site in config.sites {
        let report = site_report(site, &config.languages, policy).await?;
        if args.output == Output::Table {
            println!("{}\n", report::render_table(&report));
        }
        reports.push(report);
    }
    if args.output == Output::Json {
        println!("{}", report::render_json(&reports)?);
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::init();
    let args = Cli::parse();
    if let Err(e) = run(args).await {
        log::error!("{}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
