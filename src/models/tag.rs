use diesel::prelude::Insertable;
use serde::{Deserialize, Serialize};

use crate::models::{required, EntryRecord, ValidationError};
use crate::schema::tags;

/// A tag as it hangs off an entry, and the shape clients use to name one.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct TagRef {
    pub name: String,
}

impl TagRef {
    pub fn validate(&self) -> Result<&str, ValidationError> {
        required("name", Some(&self.name[..]))
    }
}

/// A tag w/ every entry currently carrying it (ascending id).
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub name:    String,
    pub entries: Vec<EntryRecord>,
}

#[derive(Insertable)]
#[diesel(table_name = tags)]
pub struct NewTag<'a> {
    pub name: &'a str,
}

#[test]
fn test_tag_ref_requires_name() {
    let tag = TagRef { name: String::new() };
    assert_eq!(tag.validate(), Err(ValidationError { field: "name" }));
}

#[test]
fn test_tag_json_shape() {
    let tag = Tag { name: "food".to_string(), entries: vec![] };
    assert_eq!(serde_json::to_string(&tag).unwrap(), r#"{"name":"food","entries":[]}"#);
}
