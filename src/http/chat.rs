//! `POST /chat` (spec §6 Transport, §7 error taxonomy).
//!
//! Parses the request body by hand rather than through axum's `Json`
//! extractor (see the header note below) so a malformed body and a missing
//! `message` field both produce the same minimal error envelope instead of
//! opening a streaming response (spec §7.1: "Do not open a streaming
//! response").

use axum::{
    body::{Body, Bytes},
    extract::State,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;

use crate::dispatcher::{self, Pattern};
use crate::emitters::{card, chart, table, EmitContext};
use crate::http::response::bad_request;
use crate::planner;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
struct ChatRequest {
    message: String,
}

pub async fn chat(State(state): State<AppState>, body: Bytes) -> Response {
    let request: ChatRequest = match serde_json::from_slice(&body) {
        Ok(req) => req,
        Err(err) => return bad_request(format!("invalid request body: {err}")),
    };

    let (tx, rx) = mpsc::channel::<std::io::Result<Bytes>>(64);
    let message = request.message;

    tokio::spawn(async move {
        let mut ctx = EmitContext::new(state.config.clone(), tx);
        let pattern = dispatcher::classify(&message);
        let result = match pattern {
            Pattern::LlmPlan => {
                let plan =
                    planner::resolve_plan(&message, &state.plan_cache, state.planner.as_ref(), &state.config)
                        .await;
                planner::emit_plan(&mut ctx, plan).await
            }
            Pattern::SingleDelayedCard => card::single_delayed(&mut ctx).await,
            Pattern::MultiDelayedCards => {
                let count = dispatcher::count_for(&message)
                    .unwrap_or(2)
                    .min(ctx.config.max_components_per_response);
                card::multi_delayed(&mut ctx, count).await
            }
            Pattern::MultiNormalCards => {
                let count = dispatcher::count_for(&message)
                    .unwrap_or(2)
                    .min(ctx.config.max_components_per_response);
                card::multi_normal(&mut ctx, count).await
            }
            Pattern::SingleNormalCard => card::single_normal(&mut ctx).await,
            Pattern::IncrementalCard => card::incremental(&mut ctx).await,
            Pattern::Tables => table::emit(&mut ctx, &message).await,
            Pattern::Charts => chart::emit(&mut ctx, &message).await,
            Pattern::Default => ctx.emit_prose("I'm not sure how to visualize that yet — try asking for a card, table, or chart.").await,
        };

        if result.is_err() {
            tracing::debug!("client disconnected mid-stream");
        }
    });

    let stream = ReceiverStream::new(rx);
    let mut response = Response::new(Body::from_stream(stream));
    *response.status_mut() = StatusCode::OK;
    let headers = response.headers_mut();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/plain; charset=utf-8"),
    );
    headers.insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static("no-cache, no-store, must-revalidate"),
    );
    headers.insert(header::CONTENT_ENCODING, HeaderValue::from_static("identity"));
    headers.insert("x-accel-buffering", HeaderValue::from_static("no"));
    response.into_response()
}
