use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("Wind profile error: {0}")]
    ProfileError(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
