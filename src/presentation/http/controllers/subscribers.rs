// src/presentation/http/controllers/subscribers.rs
use crate::application::{commands::subscribers::SubscribeCommand, error::ApplicationError};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct SubscribeRequest {
    pub email: Option<String>,
    /// Where the signup came from. Defaults to the configured source.
    #[serde(default)]
    pub source: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

fn reply(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(MessageResponse {
            message: message.into(),
        }),
    )
        .into_response()
}

#[utoipa::path(
    post,
    path = "/api/subscribe",
    request_body = SubscribeRequest,
    responses(
        (status = 200, description = "Subscriber stored.", body = MessageResponse),
        (status = 400, description = "Missing or malformed email, or an unreadable body.", body = MessageResponse),
        (status = 500, description = "The subscriber could not be stored.", body = MessageResponse)
    ),
    tag = "Subscribers"
)]
pub async fn subscribe(
    Extension(state): Extension<HttpState>,
    payload: Result<Json<SubscribeRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "rejected signup body");
            return reply(StatusCode::BAD_REQUEST, "Invalid request body");
        }
    };

    let command = SubscribeCommand {
        email: request.email,
        source: request.source,
    };
    match state.services.subscriber_commands.subscribe(command).await {
        Ok(()) => reply(StatusCode::OK, "Success"),
        Err(ApplicationError::Validation(message)) => reply(StatusCode::BAD_REQUEST, message),
        Err(err) => {
            tracing::error!(error = %err, "signup failed");
            reply(StatusCode::INTERNAL_SERVER_ERROR, "Error saving email")
        }
    }
}
