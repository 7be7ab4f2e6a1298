//! Inbound email trigger - Ingestione della posta nella inbox di supporto
//!
//! Trova (o crea) il thread del mittente e accoda il messaggio INBOUND.
//! Il webhook ha già validato il payload e risposto 202.

use super::worker::TriggerOutcome;
use crate::core::AppState;
use crate::entities::MessageDirection;
use tracing::debug;

pub async fn handle(
    state: &AppState,
    from_email: String,
    subject: String,
    body: String,
) -> Result<TriggerOutcome, sqlx::Error> {
    let thread = match state.support.find_thread_by_sender(&from_email).await? {
        Some(thread) => thread,
        None => state.support.create_thread(&from_email, &subject).await?,
    };

    state
        .support
        .create_message(&thread.thread_id, MessageDirection::Inbound, &body)
        .await?;

    debug!(thread_id = thread.thread_id, from = %from_email, "inbound email ingested");
    Ok(TriggerOutcome::Applied)
}
