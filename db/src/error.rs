use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("duplicate key {0}")]
    DuplicateKey(String),
    #[error("key {key} does not match entity id {id}")]
    KeyMismatch { key: String, id: String },
}

pub type Result<T> = core::result::Result<T, Error>;
