use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

pub const WELCOME_MESSAGE: &str = "Welcome to the Speech-to-Text API";

#[derive(Serialize)]
pub struct WelcomeResponse {
    pub message: &'static str,
}

pub async fn root_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(WelcomeResponse {
            message: WELCOME_MESSAGE,
        }),
    )
}
