#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("{0}")]
    Other(String),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ReadError {
    #[error("corrupt progress state: {0}")]
    CorruptState(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum WriteError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}
