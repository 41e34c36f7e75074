use diesel::backend::Backend;
use diesel::deserialize::{self, FromSql, FromSqlRow};
use diesel::expression::AsExpression;
use diesel::serialize::{self, IsNull, Output, ToSql};
use diesel::sql_types::{BigInt, Nullable};
use diesel::sqlite::Sqlite;

/// Epoch-millisecond timestamp at which an entry was completed.
///
/// `CompletedAt(None)` means the entry is still open. In the store this is
/// a nullable `BIGINT`; on the wire it is either `null` or a bare integer.
/// The JSON side is handled by [`json`], attached with `#[serde(with)]`.
#[derive(AsExpression, FromSqlRow, Clone, Copy, Debug, Default, Eq, PartialEq)]
#[diesel(sql_type = BigInt)]
pub struct CompletedAt(pub Option<i64>);

impl CompletedAt {
    pub fn pending() -> Self { CompletedAt(None) }

    pub fn at(millis: i64) -> Self { CompletedAt(Some(millis)) }

    pub fn is_completed(&self) -> bool { self.0.is_some() }
}

impl From<Option<i64>> for CompletedAt {
    fn from(millis: Option<i64>) -> Self { CompletedAt(millis) }
}

impl ToSql<BigInt, Sqlite> for CompletedAt {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Sqlite>) -> serialize::Result {
        match self.0 {
            Some(millis) => {
                out.set_value(millis);
                Ok(IsNull::No)
            },

            None => Ok(IsNull::Yes),
        }
    }
}

impl FromSql<Nullable<BigInt>, Sqlite> for CompletedAt {
    fn from_sql(value: <Sqlite as Backend>::RawValue<'_>) -> deserialize::Result<Self> {
        <i64 as FromSql<BigInt, Sqlite>>::from_sql(value).map(CompletedAt::at)
    }

    fn from_nullable_sql(value: Option<<Sqlite as Backend>::RawValue<'_>>) -> deserialize::Result<Self> {
        match value {
            Some(value) => Self::from_sql(value),
            None        => Ok(CompletedAt::pending()),
        }
    }
}

/// Wire codec: `null` <=> absent, integer <=> present.
///
/// Anything else (floats, strings, objects) fails with a type error from
/// the deserializer.
pub mod json {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::CompletedAt;

    pub fn serialize<S: Serializer>(value: &CompletedAt, ser: S) -> Result<S::Ok, S::Error> {
        match value.0 {
            Some(millis) => ser.serialize_i64(millis),
            None         => ser.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<CompletedAt, D::Error> {
        Option::<i64>::deserialize(de).map(CompletedAt::from)
    }
}

#[cfg(test)]
mod test {
    use serde::{Deserialize, Serialize};

    use super::*;

    #[derive(Debug, Default, Deserialize, PartialEq, Serialize)]
    struct Probe {
        #[serde(rename = "completedAt", default, with = "json")]
        completed_at: CompletedAt,
    }

    #[test]
    fn test_encode_absent_as_null() {
        let out = serde_json::to_string(&Probe::default()).unwrap();
        assert_eq!(out, r#"{"completedAt":null}"#);
    }

    #[test]
    fn test_encode_present_as_integer() {
        let probe = Probe { completed_at: CompletedAt::at(123456789) };
        let out = serde_json::to_string(&probe).unwrap();
        assert_eq!(out, r#"{"completedAt":123456789}"#);
    }

    #[test]
    fn test_decode_null_as_absent() {
        let probe: Probe = serde_json::from_str(r#"{"completedAt":null}"#).unwrap();
        assert_eq!(probe, Probe::default());
    }

    #[test]
    fn test_decode_missing_as_absent() {
        let probe: Probe = serde_json::from_str("{}").unwrap();
        assert!(!probe.completed_at.is_completed());
    }

    #[test]
    fn test_decode_integer_exactly() {
        let probe: Probe = serde_json::from_str(r#"{"completedAt":1617181920212}"#).unwrap();
        assert_eq!(probe.completed_at, CompletedAt::at(1617181920212));
    }

    #[test]
    fn test_decode_rejects_other_tokens() {
        for bad in &[r#"{"completedAt":"soon"}"#, r#"{"completedAt":1.5}"#, r#"{"completedAt":{}}"#, r#"{"completedAt":[1]}"#] {
            assert!(serde_json::from_str::<Probe>(bad).is_err(), "accepted {}", bad);
        }
    }
}
