use actix_web::{web, App};
use std::sync::Arc;
use user_registry::db::memory_service::MemoryService;

pub struct TestClient {
    pub db: Arc<MemoryService>,
}

impl TestClient {
    pub fn new(db: Arc<MemoryService>) -> Self {
        TestClient { db }
    }

    pub fn create_app(
        &self,
    ) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .configure(user_registry::routes::configure_routes)
    }
}
