use crate::project::MissingFields;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// One or more required submission fields were absent or empty.
    #[error("Missing required fields: {0}")]
    MissingFields(MissingFields),

    #[error("Validation failed: {0}")]
    Validation(String),
}
