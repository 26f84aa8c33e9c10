#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown form factor: {0:?}")]
    UnknownFormFactor(String),
}

pub type Result<T> = std::result::Result<T, Error>;
