//! The persistence gateway: every read and write the handlers perform.
//!
//! Operations on a sub-resource always re-resolve the parent entry first,
//! so a missing parent is reported as `Error::NotFound` before the child is
//! looked at and before any field of the payload is validated.

use std::collections::{BTreeMap, BTreeSet};

use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::error::{Error, Result};
use crate::models::comment::InsertComment;
use crate::models::entry::InsertEntry;
use crate::models::entry_tag::NewEntryTag;
use crate::models::stamp::now_millis;
use crate::models::tag::NewTag;
use crate::models::{
    Comment, CompletedAt, Entry, EntryChanges, EntryRecord, EntryTag, NewComment, NewEntry, Tag,
    TagRef,
};
use crate::schema::{comments, entries, entry_tags, tags};

/// All entries in ascending id order, w/ comments and tags loaded.
pub fn list_entries(conn: &mut SqliteConnection) -> Result<Vec<Entry>> {
    let records = entries::table
        .order(entries::id.asc())
        .load::<EntryRecord>(conn)?;

    debug!("loaded {} entries", records.len());
    with_associations(conn, records)
}

pub fn find_entry(conn: &mut SqliteConnection, entry_id: i64) -> Result<Entry> {
    let record = require_entry(conn, entry_id)?;
    single(with_associations(conn, vec![record])?)
}

/// Inserts an entry, creating any tags it names that do not exist yet.
pub fn create_entry(conn: &mut SqliteConnection, new_entry: NewEntry) -> Result<Entry> {
    let text  = new_entry.validate()?;
    let names = tag_names(new_entry.tags())?;
    let now   = now_millis();

    let record = conn.transaction::<_, Error, _>(|conn| {
        let row = InsertEntry {
            created_at:   now,
            updated_at:   now,
            completed_at: new_entry.completed_at,
            text:         text,
        };

        let record = diesel::insert_into(entries::table)
            .values(&row)
            .get_result::<EntryRecord>(conn)?;

        attach_tags(conn, record.stamp.id, &names)?;
        Ok(record)
    })?;

    info!("created entry {} w/ {} tag(s)", record.stamp.id, names.len());
    single(with_associations(conn, vec![record])?)
}

/// Replaces the entry's text and refreshes `updated_at`.
pub fn update_entry(conn: &mut SqliteConnection, entry_id: i64, changes: EntryChanges) -> Result<Entry> {
    require_entry(conn, entry_id)?;
    let text = changes.validate()?;

    diesel::update(entries::table.find(entry_id))
        .set((entries::text.eq(text), entries::updated_at.eq(now_millis())))
        .execute(conn)?;

    debug!("updated entry {}", entry_id);
    find_entry(conn, entry_id)
}

/// Marks the entry completed as of now; completing twice moves the mark.
pub fn complete_entry(conn: &mut SqliteConnection, entry_id: i64) -> Result<Entry> {
    require_entry(conn, entry_id)?;
    let now = now_millis();

    diesel::update(entries::table.find(entry_id))
        .set((entries::completed_at.eq(CompletedAt::at(now)), entries::updated_at.eq(now)))
        .execute(conn)?;

    debug!("completed entry {} at {}", entry_id, now);
    find_entry(conn, entry_id)
}

/// Removes the entry row only.
pub fn delete_entry(conn: &mut SqliteConnection, entry_id: i64) -> Result<()> {
    require_entry(conn, entry_id)?;

    diesel::delete(entries::table.find(entry_id)).execute(conn)?;

    info!("deleted entry {}", entry_id);
    Ok(())
}

pub fn create_comment(conn: &mut SqliteConnection, entry_id: i64, new_comment: NewComment) -> Result<Comment> {
    require_entry(conn, entry_id)?;
    let text = new_comment.validate()?;
    let now  = now_millis();

    let row = InsertComment {
        created_at: now,
        updated_at: now,
        entry_id:   entry_id,
        text:       text,
    };

    let comment = diesel::insert_into(comments::table)
        .values(&row)
        .get_result::<Comment>(conn)?;

    debug!("created comment {} on entry {}", comment.stamp.id, entry_id);
    Ok(comment)
}

/// Removes a comment, but only if it belongs to `entry_id`.
pub fn delete_comment(conn: &mut SqliteConnection, entry_id: i64, comment_id: i64) -> Result<()> {
    require_entry(conn, entry_id)?;

    let target = comments::table
        .filter(comments::id.eq(comment_id))
        .filter(comments::entry_id.eq(entry_id));

    match diesel::delete(target).execute(conn)? {
        0 => Err(Error::NotFound),
        _ => {
            debug!("deleted comment {} from entry {}", comment_id, entry_id);
            Ok(())
        },
    }
}

/// Associates each named tag w/ the entry; existing associations are kept
/// as they are.
pub fn tag_entry(conn: &mut SqliteConnection, entry_id: i64, tag_refs: Vec<TagRef>) -> Result<()> {
    require_entry(conn, entry_id)?;
    let names = tag_names(&tag_refs)?;

    conn.transaction::<_, Error, _>(|conn| attach_tags(conn, entry_id, &names))?;

    debug!("tagged entry {} w/ {:?}", entry_id, names);
    Ok(())
}

/// Drops the association between the entry and `name`; the tag row stays.
pub fn untag_entry(conn: &mut SqliteConnection, entry_id: i64, name: &str) -> Result<()> {
    require_entry(conn, entry_id)?;
    require_tag(conn, name)?;

    let link = entry_tags::table
        .filter(entry_tags::entry_id.eq(entry_id))
        .filter(entry_tags::tag_name.eq(name));

    match diesel::delete(link).execute(conn)? {
        0 => Err(Error::NotFound),
        _ => {
            debug!("untagged entry {} from {:?}", entry_id, name);
            Ok(())
        },
    }
}

/// All tags by name, each w/ the entries that carry it.
pub fn list_tags(conn: &mut SqliteConnection) -> Result<Vec<Tag>> {
    let names = tags::table
        .select(tags::name)
        .order(tags::name.asc())
        .load::<String>(conn)?;

    let members = entry_tags::table
        .inner_join(entries::table)
        .select((entry_tags::tag_name, entries::all_columns))
        .order((entry_tags::tag_name.asc(), entries::id.asc()))
        .load::<(String, EntryRecord)>(conn)?;

    let mut grouped = names.into_iter()
        .map(|name| (name, vec![]))
        .collect::<BTreeMap<String, Vec<EntryRecord>>>();

    for (name, record) in members {
        if let Some(entries) = grouped.get_mut(&name) {
            entries.push(record);
        }
    }

    Ok(grouped.into_iter()
        .map(|(name, entries)| Tag { name: name, entries: entries })
        .collect())
}

pub fn find_tag(conn: &mut SqliteConnection, name: &str) -> Result<Tag> {
    let name = require_tag(conn, name)?;

    let entries = entry_tags::table
        .inner_join(entries::table)
        .filter(entry_tags::tag_name.eq(name.as_str()))
        .select(entries::all_columns)
        .order(entries::id.asc())
        .load::<EntryRecord>(conn)?;

    Ok(Tag { name: name, entries: entries })
}

fn require_entry(conn: &mut SqliteConnection, entry_id: i64) -> Result<EntryRecord> {
    entries::table.find(entry_id)
        .first::<EntryRecord>(conn)
        .optional()?
        .ok_or(Error::NotFound)
}

fn require_tag(conn: &mut SqliteConnection, name: &str) -> Result<String> {
    tags::table.find(name)
        .select(tags::name)
        .first::<String>(conn)
        .optional()?
        .ok_or(Error::NotFound)
}

/// Validated, de-duplicated tag names from a request payload.
fn tag_names(tag_refs: &[TagRef]) -> Result<BTreeSet<&str>> {
    let mut names = BTreeSet::new();
    for tag_ref in tag_refs {
        names.insert(tag_ref.validate()?);
    }

    Ok(names)
}

/// Find-or-create each tag, then link it; both inserts ignore rows that
/// already exist, so concurrent taggers converge on a single tag row.
fn attach_tags(conn: &mut SqliteConnection, entry_id: i64, names: &BTreeSet<&str>) -> Result<()> {
    for &name in names {
        diesel::insert_or_ignore_into(tags::table)
            .values(&NewTag { name: name })
            .execute(conn)?;

        diesel::insert_or_ignore_into(entry_tags::table)
            .values(&NewEntryTag { entry_id: entry_id, tag_name: name })
            .execute(conn)?;
    }

    Ok(())
}

fn with_associations(conn: &mut SqliteConnection, records: Vec<EntryRecord>) -> Result<Vec<Entry>> {
    if records.is_empty() { return Ok(vec![]) }

    let comments = Comment::belonging_to(&records)
        .order(comments::id.asc())
        .load::<Comment>(conn)?
        .grouped_by(&records);

    let links = EntryTag::belonging_to(&records)
        .order(entry_tags::tag_name.asc())
        .load::<EntryTag>(conn)?
        .grouped_by(&records);

    Ok(records.into_iter()
        .zip(comments)
        .zip(links)
        .map(|((record, comments), links)| Entry {
            record: record,
            comments: comments,
            tags: links.into_iter().map(|link| TagRef { name: link.tag_name }).collect(),
        })
        .collect())
}

fn single(mut entries: Vec<Entry>) -> Result<Entry> {
    entries.pop().ok_or(Error::NotFound)
}
