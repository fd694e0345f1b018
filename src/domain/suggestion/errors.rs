use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Infrastructure error: {0}")]
    InfrastructureError(String),
}
