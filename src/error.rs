use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid noise pattern: {0}")]
    InvalidNoisePattern(#[from] regex::Error),
}
