use std::str::FromStr;

use crate::result::ApiError;

/// Parses a raw route capture into `T`.
///
/// A capture that does not parse can never name an existing record, so
/// it is reported the same way a missing record is: `404` w/ no body.
pub fn param<T: FromStr>(raw: &str) -> Result<T, ApiError> {
    raw.parse::<T>().map_err(|_| {
        debug!("route param {:?} did not parse", raw);
        ApiError::NotFound
    })
}

#[test]
fn test_param_parses_ids() {
    assert_eq!(param::<i64>("42").ok(), Some(42));
}

#[test]
fn test_param_garbage_is_not_found() {
    match param::<i64>("forty-two") {
        Err(ApiError::NotFound) => {},
        other => panic!("expected not found, got {:?}", other),
    }
}
