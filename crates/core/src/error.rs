/// Domain rule violations. Storage outcomes live in `comics_db::error`.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),
}

impl From<validator::ValidationErrors> for CoreError {
    /// Flatten per-field validation errors into a single message.
    fn from(errors: validator::ValidationErrors) -> Self {
        let message = errors
            .to_string()
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("; ");
        CoreError::Validation(message)
    }
}
