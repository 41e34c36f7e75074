use std::error::Error as StdError;

use diesel::r2d2::PoolError;
use docket_web::ApiError;
use tokio::task::JoinError;

use crate::models::ValidationError;

pub type Result<T> = ::std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("record not found")]
    NotFound,

    #[error("store failure: {0}")]
    Store(#[from] diesel::result::Error),

    #[error("could not check out a store connection: {0}")]
    Pool(#[from] PoolError),

    #[error("could not apply migrations: {0}")]
    Migration(Box<dyn StdError + Send + Sync>),

    #[error("store worker did not finish: {0}")]
    Worker(#[from] JoinError),

    #[error("bad configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] ::std::io::Error),
}

impl From<Error> for ApiError {
    fn from(err: Error) -> ApiError {
        match err {
            Error::Validation(err) => {
                debug!("rejecting request: {}", err);
                ApiError::BadRequest(err.to_string())
            },

            Error::NotFound => {
                debug!("requested record does not exist");
                ApiError::NotFound
            },

            err => {
                error!("request failed: {}", err);
                ApiError::Internal
            },
        }
    }
}

#[test]
fn test_validation_is_bad_request() {
    let err = Error::from(ValidationError { field: "text" });
    match ApiError::from(err) {
        ApiError::BadRequest(msg) => assert_eq!(msg, "field 'text' is required"),
        other => panic!("unexpected: {:?}", other),
    }
}

#[test]
fn test_store_failure_is_internal() {
    let err = Error::from(diesel::result::Error::RollbackTransaction);
    match ApiError::from(err) {
        ApiError::Internal => {},
        other => panic!("unexpected: {:?}", other),
    }
}
