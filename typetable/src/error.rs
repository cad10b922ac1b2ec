use crate::Index;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("no row with index {index}")]
    NotFound { index: Index },
}

pub type Result<T> = std::result::Result<T, Error>;
