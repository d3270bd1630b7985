/// Trait for turning a site-specific vacancy record into a salary estimate in rubles
///
/// Implementations filter by the currency marker their site uses and hand the
/// bounds over to [`crate::predict_salary`].
pub trait SalaryPredictor {
    fn predict_rub_salary(&self) -> Option<i64>;
}

impl<T: SalaryPredictor + ?Sized> SalaryPredictor for &T {
    fn predict_rub_salary(&self) -> Option<i64> {
        (**self).predict_rub_salary()
    }
}
