#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Backend API error: {0}")]
    BackendApi(String),

    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
