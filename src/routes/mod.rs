use actix_web::web;

pub mod user;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1").service(
            web::scope("/user")
                .service(user::get::get)
                .service(user::create::create)
                .service(user::delete::delete),
        ),
    );
}
