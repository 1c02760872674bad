use crate::db::memory_service::MemoryService;
use crate::routes::user::EmailQuery;
use crate::types::response::{ApiResponse, ApiResult};
use actix_web::{delete, web};
use std::sync::Arc;

#[delete("")]
async fn delete(
    db: web::Data<Arc<MemoryService>>,
    query: web::Query<EmailQuery>,
) -> ApiResult<()> {
    // Deleting an absent email is a successful no-op; the store's bool is
    // deliberately not surfaced as a different outcome.
    db.delete_user_by_email(&query.email);

    Ok(ApiResponse::NoContent)
}
