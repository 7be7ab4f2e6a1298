//! Support services - Webhook email inbound e inbox di supporto
//!
//! Il webhook valida, pubblica l'evento e risponde subito 202: l'ingestione
//! vera (find-or-create del thread, append del messaggio) la fa il worker.

use crate::core::{AppError, AppState};
use crate::dtos::{EnrichedThreadDTO, InboundEmailDTO};
use crate::entities::SupportThread;
use crate::repositories::Read;
use crate::stream::ChangeEvent;
use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use std::sync::Arc;
use tracing::{debug, info, instrument};
use validator::Validate;

#[instrument(skip(state, body))]
pub async fn inbound_email(
    State(state): State<Arc<AppState>>,
    Json(body): Json<InboundEmailDTO>,
) -> Result<StatusCode, AppError> {
    body.validate()?;

    state.feed.publish(ChangeEvent::InboundEmail {
        from_email: body.from_email.clone(),
        subject: body.subject,
        body: body.body,
    });

    info!(from = %body.from_email, "Inbound email enqueued");
    Ok(StatusCode::ACCEPTED)
}

#[instrument(skip(state))]
pub async fn list_threads(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<SupportThread>>, AppError> {
    let threads = state.support.find_all_threads().await?;
    debug!("Found {} threads", threads.len());
    Ok(Json(threads))
}

#[instrument(skip(state), fields(thread_id = %thread_id))]
pub async fn get_thread(
    State(state): State<Arc<AppState>>,
    Path(thread_id): Path<i64>,
) -> Result<Json<EnrichedThreadDTO>, AppError> {
    let (thread, messages) = futures::try_join!(
        state.support.read(&thread_id),
        state.support.find_messages_by_thread(&thread_id),
    )?;
    let thread = thread.ok_or_else(|| AppError::not_found("Thread not found"))?;

    Ok(Json(EnrichedThreadDTO { thread, messages }))
}
