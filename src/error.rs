#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Generic {0}")]
    Generic(String),

    #[error("corpus contains no pages")]
    EmptyCorpus,

    #[error("page {0:?} is not in the corpus")]
    UnknownPage(String),

    #[error("damping factor {0} is outside the open interval (0, 1)")]
    InvalidDamping(f64),

    #[error(transparent)]
    IO(#[from] std::io::Error),

    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),
}

pub type Result<T> = core::result::Result<T, Error>;
