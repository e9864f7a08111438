use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnimError {
    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type AnimResult<T> = Result<T, AnimError>;
