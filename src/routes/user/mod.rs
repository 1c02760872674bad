use serde::Deserialize;

pub mod create;
pub mod delete;
pub mod get;

#[derive(Deserialize)]
pub struct EmailQuery {
    pub email: String,
}
