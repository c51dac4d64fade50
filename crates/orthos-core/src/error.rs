use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("field name is required")]
    EmptyFieldName,
    #[error("field classified more than once: {0}")]
    DuplicateFieldClassification(String),
    #[error("invalid country prefix: {0:?}")]
    InvalidCountryPrefix(String),
    #[error("invalid dial plan: {0}")]
    InvalidDialPlan(String),
}
