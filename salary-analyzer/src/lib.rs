pub mod aggregator;
pub mod api;
pub mod estimator;
pub mod models;

pub use aggregator::{aggregate, average_salary};
pub use api::SalaryPredictor;
pub use estimator::predict_salary;
pub use models::LanguageStatistic;
