use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CoreError {
    #[error("message needs content or code")]
    EmptyMessage,
}

pub type Result<T> = std::result::Result<T, CoreError>;
