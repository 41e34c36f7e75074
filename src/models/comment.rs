use diesel::associations::HasTable;
use diesel::deserialize::{self, Queryable};
use diesel::prelude::{Associations, Insertable};
use diesel::sqlite::Sqlite;
use serde::{Deserialize, Serialize};

use crate::models::{required, EntryRecord, Stamp, ValidationError};
use crate::schema::comments;

/// A note attached to exactly one entry.
#[derive(Associations, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[diesel(belongs_to(EntryRecord, foreign_key = entry_id))]
#[diesel(table_name = comments)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(flatten)]
    pub stamp: Stamp,

    pub entry_id: i64,
    pub text:     String,
}

impl Queryable<comments::SqlType, Sqlite> for Comment {
    type Row = (i64, i64, i64, i64, String);

    fn build((id, created_at, updated_at, entry_id, text): Self::Row) -> deserialize::Result<Self> {
        Ok(Comment {
            stamp: Stamp { id: id, created_at: created_at, updated_at: updated_at },
            entry_id: entry_id,
            text: text,
        })
    }
}

impl HasTable for Comment {
    type Table = comments::table;

    fn table() -> Self::Table { comments::table }
}

#[derive(Insertable)]
#[diesel(table_name = comments)]
pub struct InsertComment<'a> {
    pub created_at: i64,
    pub updated_at: i64,
    pub entry_id:   i64,
    pub text:       &'a str,
}

/// Payload of `POST /entries/{id}/comments`.
#[derive(Debug, Default, Deserialize)]
pub struct NewComment {
    pub text: Option<String>,
}

impl NewComment {
    pub fn validate(&self) -> Result<&str, ValidationError> {
        required("text", self.text.as_ref().map(|text| &text[..]))
    }
}

#[test]
fn test_comment_json_shape() {
    let comment = Comment {
        stamp: Stamp { id: 2, created_at: 10, updated_at: 11 },
        entry_id: 1,
        text: "use the blue sponge".to_string(),
    };

    assert_eq!(serde_json::to_value(&comment).unwrap(), serde_json::json!({
        "id": 2,
        "createdAt": 10,
        "updatedAt": 11,
        "entryId": 1,
        "text": "use the blue sponge",
    }));
}

#[test]
fn test_new_comment_requires_text() {
    let payload: NewComment = serde_json::from_str(r#"{"text":""}"#).unwrap();
    assert_eq!(payload.validate(), Err(ValidationError { field: "text" }));
}
