//! Minimal JSON error envelope (spec §7.1: "Reject with HTTP 400 and a
//! minimal JSON error body").

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

pub type HttpResponse = Response;

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

fn json_error(status: StatusCode, message: impl Into<String>) -> HttpResponse {
    (status, Json(ErrorBody { error: message.into() })).into_response()
}

pub fn bad_request(message: impl Into<String>) -> HttpResponse {
    json_error(StatusCode::BAD_REQUEST, message)
}
