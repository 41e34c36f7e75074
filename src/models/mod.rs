pub use self::comment::{Comment, NewComment};
pub use self::completed_at::CompletedAt;
pub use self::entry::{Entry, EntryChanges, EntryRecord, NewEntry};
pub use self::entry_tag::EntryTag;
pub use self::stamp::Stamp;
pub use self::tag::{Tag, TagRef};

pub mod comment;
pub mod completed_at;
pub mod entry;
pub mod entry_tag;
pub mod queries;
pub mod stamp;
pub mod tag;

/// A required field was missing from (or empty in) a request payload.
#[derive(Debug, Eq, PartialEq, thiserror::Error)]
#[error("field '{field}' is required")]
pub struct ValidationError {
    pub field: &'static str,
}

/// Checks that `value` is present and non-empty.
pub fn required<'a>(field: &'static str, value: Option<&'a str>) -> Result<&'a str, ValidationError> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ValidationError { field: field }),
    }
}

#[test]
fn test_required_accepts_text() {
    assert_eq!(required("text", Some("wash dishes")), Ok("wash dishes"));
}

#[test]
fn test_required_rejects_missing_and_empty() {
    assert_eq!(required("text", None), Err(ValidationError { field: "text" }));
    assert_eq!(required("text", Some("")), Err(ValidationError { field: "text" }));
}

#[test]
fn test_validation_message_names_field() {
    let msg = ValidationError { field: "text" }.to_string();
    assert_eq!(msg, "field 'text' is required");
}
