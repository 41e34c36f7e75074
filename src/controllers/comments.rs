use crate::controllers::prelude::*;
use crate::models::{Comment, NewComment};

/// `POST /entries/{id}/comments`
pub async fn create(State(ctx): State<Context>,
                    Path(id): Path<String>,
                    JsonBody(payload): JsonBody<NewComment>) -> Result<(StatusCode, Json<Comment>)> {
    let entry_id = param::<i64>(&id)?;

    let comment = ctx.run(move |conn| queries::create_comment(conn, entry_id, payload)).await?;
    Ok((StatusCode::CREATED, Json(comment)))
}

/// `DELETE /entries/{id}/comments/{cid}`
pub async fn delete(State(ctx): State<Context>, Path((id, cid)): Path<(String, String)>)
    -> Result<StatusCode> {
    let entry_id   = param::<i64>(&id)?;
    let comment_id = param::<i64>(&cid)?;

    ctx.run(move |conn| queries::delete_comment(conn, entry_id, comment_id)).await?;
    Ok(StatusCode::OK)
}
