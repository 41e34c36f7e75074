use diesel::associations::{HasTable, Identifiable};
use diesel::deserialize::{self, Queryable};
use diesel::prelude::Insertable;
use diesel::sqlite::Sqlite;
use serde::{Deserialize, Serialize};

use crate::models::completed_at::{self, CompletedAt};
use crate::models::{required, Comment, Stamp, TagRef, ValidationError};
use crate::schema::entries;

/// A single row of `entries`, without its associations.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryRecord {
    #[serde(flatten)]
    pub stamp: Stamp,

    #[serde(default, with = "completed_at::json")]
    pub completed_at: CompletedAt,

    pub text: String,
}

// NOTE: rows are flat, the record is not; so the row is assembled by hand.
impl Queryable<entries::SqlType, Sqlite> for EntryRecord {
    type Row = (i64, i64, i64, CompletedAt, String);

    fn build((id, created_at, updated_at, completed_at, text): Self::Row) -> deserialize::Result<Self> {
        Ok(EntryRecord {
            stamp: Stamp { id: id, created_at: created_at, updated_at: updated_at },
            completed_at: completed_at,
            text: text,
        })
    }
}

impl HasTable for EntryRecord {
    type Table = entries::table;

    fn table() -> Self::Table { entries::table }
}

impl<'a> Identifiable for &'a EntryRecord {
    type Id = &'a i64;

    fn id(self) -> Self::Id { &self.stamp.id }
}

/// An entry w/ its comments (oldest first) and tags (by name) loaded.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(flatten)]
    pub record: EntryRecord,

    pub comments: Vec<Comment>,
    pub tags:     Vec<TagRef>,
}

impl Entry {
    pub fn id(&self) -> i64 { self.record.stamp.id }
}

#[derive(Insertable)]
#[diesel(table_name = entries)]
pub struct InsertEntry<'a> {
    pub created_at:   i64,
    pub updated_at:   i64,
    pub completed_at: CompletedAt,
    pub text:         &'a str,
}

/// Payload of `POST /entries`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEntry {
    pub text: Option<String>,

    #[serde(default, with = "completed_at::json")]
    pub completed_at: CompletedAt,

    #[serde(default)]
    pub tags: Option<Vec<TagRef>>,
}

impl NewEntry {
    pub fn validate(&self) -> Result<&str, ValidationError> {
        required("text", self.text.as_ref().map(|text| &text[..]))
    }

    pub fn tags(&self) -> &[TagRef] {
        self.tags.as_ref().map(|tags| &tags[..]).unwrap_or(&[])
    }
}

/// Payload of `PUT /entries/{id}`; `text` is replaced wholesale.
#[derive(Debug, Default, Deserialize)]
pub struct EntryChanges {
    pub text: Option<String>,
}

impl EntryChanges {
    pub fn validate(&self) -> Result<&str, ValidationError> {
        required("text", self.text.as_ref().map(|text| &text[..]))
    }
}
