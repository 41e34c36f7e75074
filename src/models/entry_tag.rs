use diesel::associations::HasTable;
use diesel::prelude::{Associations, Insertable, Queryable};

use crate::models::EntryRecord;
use crate::schema::entry_tags;

/// One row of the entry <=> tag join table.
#[derive(Associations, Clone, Debug, Eq, PartialEq, Queryable)]
#[diesel(belongs_to(EntryRecord, foreign_key = entry_id))]
#[diesel(table_name = entry_tags)]
pub struct EntryTag {
    pub entry_id: i64,
    pub tag_name: String,
}

impl HasTable for EntryTag {
    type Table = entry_tags::table;

    fn table() -> Self::Table { entry_tags::table }
}

#[derive(Insertable)]
#[diesel(table_name = entry_tags)]
pub struct NewEntryTag<'a> {
    pub entry_id: i64,
    pub tag_name: &'a str,
}
