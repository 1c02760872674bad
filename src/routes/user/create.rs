use crate::db::memory_service::MemoryService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::RUserCreate;
use actix_web::{post, web};
use std::sync::Arc;

#[post("")]
async fn create(
    db: web::Data<Arc<MemoryService>>,
    body: web::Json<RUserCreate>,
) -> ApiResult<u64> {
    let user_id = db.create_user(body.into_inner())?;

    Ok(ApiResponse::Created(user_id))
}
