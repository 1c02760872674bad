use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("not found")]
    NotFound,
    #[error("already exists")]
    AlreadyExists,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    detail: &'a str,
}

impl AppError {
    fn detail(&self) -> &'static str {
        match self {
            Self::NotFound => "User not found",
            Self::AlreadyExists => "User with this email already exists",
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::AlreadyExists => StatusCode::CONFLICT,
        }
    }
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            detail: self.detail(),
        })
    }
}
