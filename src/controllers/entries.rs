use crate::controllers::prelude::*;
use crate::models::{Entry, EntryChanges, NewEntry};

/// `GET /entries`
pub async fn index(State(ctx): State<Context>) -> Result<Json<Vec<Entry>>> {
    let entries = ctx.run(queries::list_entries).await?;
    Ok(Json(entries))
}

/// `GET /entries/{id}`
pub async fn show(State(ctx): State<Context>, Path(id): Path<String>) -> Result<Json<Entry>> {
    let entry_id = param::<i64>(&id)?;

    let entry = ctx.run(move |conn| queries::find_entry(conn, entry_id)).await?;
    Ok(Json(entry))
}

/// `POST /entries`
///
/// Expects `{"text": .., "completedAt"?: .., "tags"?: [{"name": ..}]}`.
/// Tags which do not exist yet are created along w/ the entry.
pub async fn create(State(ctx): State<Context>, JsonBody(payload): JsonBody<NewEntry>)
    -> Result<(StatusCode, Json<Entry>)> {
    let entry = ctx.run(move |conn| queries::create_entry(conn, payload)).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

/// `PUT /entries/{id}`
pub async fn update(State(ctx): State<Context>,
                    Path(id): Path<String>,
                    JsonBody(changes): JsonBody<EntryChanges>) -> Result<Json<Entry>> {
    let entry_id = param::<i64>(&id)?;

    let entry = ctx.run(move |conn| queries::update_entry(conn, entry_id, changes)).await?;
    Ok(Json(entry))
}

/// `POST /entries/{id}/complete`
pub async fn complete(State(ctx): State<Context>, Path(id): Path<String>) -> Result<Json<Entry>> {
    let entry_id = param::<i64>(&id)?;

    let entry = ctx.run(move |conn| queries::complete_entry(conn, entry_id)).await?;
    Ok(Json(entry))
}

/// `DELETE /entries/{id}`
pub async fn delete(State(ctx): State<Context>, Path(id): Path<String>) -> Result<StatusCode> {
    let entry_id = param::<i64>(&id)?;

    ctx.run(move |conn| queries::delete_entry(conn, entry_id)).await?;
    Ok(StatusCode::OK)
}
