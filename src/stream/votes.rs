//! Vote trigger - Propagazione voto → score e reputazione
//!
//! Converte il ciclo di vita di una riga vote in: delta sullo score del
//! target, delta di reputazione e contatori ricevuti sull'autore del target,
//! contatori dati sul votante. Le tre scritture sono indipendenti: il
//! fallimento di una viene solo loggato e non blocca le altre.

use super::events::ChangeKind;
use super::worker::TriggerOutcome;
use crate::core::AppState;
use crate::entities::{Vote, VoteTarget};
use crate::repositories::Read;
use tracing::{debug, warn};

/// Delta di score: Insert → +value, Remove → -value, Modify → new-old
pub fn vote_delta(kind: ChangeKind, old_value: Option<i64>, new_value: Option<i64>) -> i64 {
    match kind {
        ChangeKind::Insert => new_value.unwrap_or(0),
        ChangeKind::Remove => -old_value.unwrap_or(0),
        ChangeKind::Modify => new_value.unwrap_or(0) - old_value.unwrap_or(0),
    }
}

/// Aggiustamento dei contatori up/down: quante righe "voto up" e "voto down"
/// sono comparse (o sparite) passando dall'immagine vecchia alla nuova.
pub fn counter_adjustments(old_value: Option<i64>, new_value: Option<i64>) -> (i64, i64) {
    let count = |value: Option<i64>, sign: i64| -> i64 {
        if value == Some(sign) { 1 } else { 0 }
    };

    let up = count(new_value, 1) - count(old_value, 1);
    let down = count(new_value, -1) - count(old_value, -1);
    (up, down)
}

pub async fn handle(
    state: &AppState,
    kind: ChangeKind,
    old: Option<Vote>,
    new: Option<Vote>,
) -> Result<TriggerOutcome, sqlx::Error> {
    let Some(vote) = new.as_ref().or(old.as_ref()) else {
        warn!("vote event without any image, skipping");
        return Ok(TriggerOutcome::Skipped);
    };
    let vote = vote.clone();

    let (old_value, new_value) = match kind {
        ChangeKind::Insert => (None, new.as_ref().map(|v| v.value)),
        ChangeKind::Remove => (old.as_ref().map(|v| v.value), None),
        ChangeKind::Modify => (old.as_ref().map(|v| v.value), new.as_ref().map(|v| v.value)),
    };

    let delta = vote_delta(kind, old_value, new_value);
    if delta == 0 {
        return Ok(TriggerOutcome::Noop);
    }

    // Point read del target: l'owner non sta mai sull'immagine del voto
    let target_owner = match vote.target_kind {
        VoteTarget::Post => state.post.read(&vote.target_id).await?.map(|p| p.author_sub),
        VoteTarget::Answer => state.answer.read(&vote.target_id).await?.map(|a| a.author_sub),
    };
    let Some(target_owner) = target_owner else {
        debug!(
            target_id = vote.target_id,
            "vote target cannot be identified, nothing to do"
        );
        return Ok(TriggerOutcome::Noop);
    };

    let (up, down) = counter_adjustments(old_value, new_value);

    // Scrittura 1: score del target
    let score_write = match vote.target_kind {
        VoteTarget::Post => state.post.apply_score_delta(&vote.target_id, delta).await,
        VoteTarget::Answer => state.answer.apply_score_delta(&vote.target_id, delta).await,
    };
    if let Err(e) = score_write {
        warn!(target_id = vote.target_id, error = %e, "failed to apply vote score delta");
    }

    // Scrittura 2: reputazione + contatori ricevuti dell'autore del target
    let rep_delta = delta * state.config.vote_rep_factor;
    if let Err(e) = state.profile.apply_reputation_delta(&target_owner, rep_delta).await {
        warn!(owner = %target_owner, error = %e, "failed to apply reputation delta");
    }
    if let Err(e) = state
        .profile
        .apply_vote_counters(&target_owner, 0, 0, up, down)
        .await
    {
        warn!(owner = %target_owner, error = %e, "failed to update received-vote counters");
    }

    // Scrittura 3: contatori dati del votante
    if let Err(e) = state
        .profile
        .apply_vote_counters(&vote.voter_sub, up, down, 0, 0)
        .await
    {
        warn!(voter = %vote.voter_sub, error = %e, "failed to update given-vote counters");
    }

    Ok(TriggerOutcome::Applied)
}
