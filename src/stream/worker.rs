//! Trigger worker - Consumatore unico del change feed
//!
//! Ogni evento viene gestito nel proprio scope di errore: un record rotto
//! viene loggato e conteggiato, mai fatto esplodere sul resto del batch.
//! Il worker mantiene i contatori aggregati processed/noop/skipped.

use super::events::ChangeEvent;
use super::{acceptance, inbound, invites, referrals, votes};
use crate::core::AppState;
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Esito della gestione di un singolo record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// Il record ha prodotto scritture derivate
    Applied,
    /// Transizione irrilevante, nessuna scrittura
    Noop,
    /// Record non processabile (immagine irrecuperabile, mail fallita...)
    Skipped,
}

pub fn spawn(state: Arc<AppState>, rx: UnboundedReceiver<ChangeEvent>) -> JoinHandle<()> {
    tokio::spawn(run(state, rx))
}

async fn run(state: Arc<AppState>, mut rx: UnboundedReceiver<ChangeEvent>) {
    let mut processed: u64 = 0;
    let mut noop: u64 = 0;
    let mut skipped: u64 = 0;

    while let Some(event) = rx.recv().await {
        let label = event.label();

        match dispatch(&state, event).await {
            Ok(TriggerOutcome::Applied) => processed += 1,
            Ok(TriggerOutcome::Noop) => noop += 1,
            Ok(TriggerOutcome::Skipped) => skipped += 1,
            Err(e) => {
                // per-record: l'errore non ferma il worker
                skipped += 1;
                warn!(event = label, error = %e, "trigger handler failed, record skipped");
            }
        }

        debug!(event = label, processed, noop, skipped, "trigger counters");
    }

    info!(processed, noop, skipped, "change feed closed, trigger worker stopped");
}

/// Smista un evento al suo handler
pub async fn dispatch(
    state: &AppState,
    event: ChangeEvent,
) -> Result<TriggerOutcome, sqlx::Error> {
    match event {
        ChangeEvent::Answer { kind, old, new } => acceptance::handle(state, kind, old, new).await,
        ChangeEvent::Vote { kind, old, new } => votes::handle(state, kind, old, new).await,
        ChangeEvent::Invitation {
            kind,
            invitation,
            raw_token,
        } => invites::handle(state, kind, invitation, raw_token).await,
        ChangeEvent::Referral { kind, referral } => {
            referrals::handle(state, kind, referral).await
        }
        ChangeEvent::InboundEmail {
            from_email,
            subject,
            body,
        } => inbound::handle(state, from_email, subject, body).await,
    }
}
