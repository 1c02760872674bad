use actix_web::{web, App, HttpServer};
use std::sync::Arc;
use user_registry::config::EnvConfig;
use user_registry::db::memory_service::MemoryService;
use user_registry::routes::configure_routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();
    let config = EnvConfig::from_env();
    let addr = format!("0.0.0.0:{}", config.port);

    // All record state lives here and dies with the process.
    let store = Arc::new(MemoryService::new());

    log::info!("Starting server on {}", addr);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(Arc::clone(&store)))
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
