use crate::controllers::prelude::*;
use crate::models::{Tag, TagRef};

/// `GET /tags`
pub async fn index(State(ctx): State<Context>) -> Result<Json<Vec<Tag>>> {
    let tags = ctx.run(queries::list_tags).await?;
    Ok(Json(tags))
}

/// `GET /tags/{name}`
pub async fn show(State(ctx): State<Context>, Path(name): Path<String>) -> Result<Json<Tag>> {
    let tag = ctx.run(move |conn| queries::find_tag(conn, &name)).await?;
    Ok(Json(tag))
}

/// `POST /entries/{id}/tag`
///
/// Expects a JSON array of `{"name": ..}`; unknown names are created.
pub async fn tag(State(ctx): State<Context>,
                 Path(id): Path<String>,
                 JsonBody(tags): JsonBody<Vec<TagRef>>) -> Result<StatusCode> {
    let entry_id = param::<i64>(&id)?;

    ctx.run(move |conn| queries::tag_entry(conn, entry_id, tags)).await?;
    Ok(StatusCode::OK)
}

/// `DELETE /entries/{id}/tags/{name}`
pub async fn untag(State(ctx): State<Context>, Path((id, name)): Path<(String, String)>)
    -> Result<StatusCode> {
    let entry_id = param::<i64>(&id)?;

    ctx.run(move |conn| queries::untag_entry(conn, entry_id, &name)).await?;
    Ok(StatusCode::OK)
}
