use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Identity and bookkeeping shared by every stored record.
///
/// `id` is assigned by the store and never changes; both timestamps are
/// epoch milliseconds maintained by the gateway, not by the client.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stamp {
    pub id:         i64,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Current wall-clock time in epoch milliseconds.
pub fn now_millis() -> i64 {
    let now = OffsetDateTime::now_utc();
    now.unix_timestamp() * 1000 + i64::from(now.millisecond())
}

#[test]
fn test_now_millis_is_milliseconds() {
    let secs = OffsetDateTime::now_utc().unix_timestamp();
    let millis = now_millis();

    assert!(millis / 1000 >= secs);
    assert!(millis / 1000 - secs <= 1);
}

#[test]
fn test_stamp_uses_camel_case() {
    let stamp = Stamp { id: 7, created_at: 1, updated_at: 2 };
    let json = ::serde_json::to_value(&stamp).unwrap();

    assert_eq!(json["id"], 7);
    assert_eq!(json["createdAt"], 1);
    assert_eq!(json["updatedAt"], 2);
}
