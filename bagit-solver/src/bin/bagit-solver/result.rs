use bagit_solver::instance::InstanceError;
use thiserror::Error;

pub(crate) type BagItResult<T> = Result<T, BagItError>;

#[derive(Error, Debug)]
pub(crate) enum BagItError {
    #[error("IO error, more details: {0}")]
    IOError(#[from] std::io::Error),
    #[error("The instance could not be read, more details: {0}")]
    InvalidInstance(#[from] InstanceError),
}
