use crate::db::memory_service::MemoryService;
use crate::routes::user::EmailQuery;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::UserGetRes;
use actix_web::{get, web};
use std::sync::Arc;

#[get("")]
async fn get(
    db: web::Data<Arc<MemoryService>>,
    query: web::Query<EmailQuery>,
) -> ApiResult<UserGetRes> {
    let user = db
        .get_user_by_email(&query.email)
        .ok_or(AppError::NotFound)?;

    Ok(ApiResponse::Ok(UserGetRes {
        id: user.id,
        name: user.name,
        email: user.email,
    }))
}
