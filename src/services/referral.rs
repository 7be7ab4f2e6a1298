//! Referral services - Segnalazioni realtor → host e generazione codici

use crate::core::{AppError, AppState};
use crate::dtos::{CreateReferralDTO, RealtorQuery, UpdateReferralStatusDTO};
use crate::entities::referral::MAX_REFERRAL_CODE_LEN;
use crate::entities::Referral;
use crate::repositories::Read;
use crate::stream::{ChangeEvent, ChangeKind};
use axum::extract::{Json, Path, Query, State};
use rand::Rng;
use std::sync::Arc;
use tracing::{debug, info, instrument};
use validator::Validate;

/// Aggancia un suffisso al base code troncandolo perché il totale non superi
/// mai MAX_REFERRAL_CODE_LEN (il base code è ASCII per costruzione).
fn suffixed(base: &str, suffix: &str) -> String {
    let max_base = MAX_REFERRAL_CODE_LEN.saturating_sub(suffix.len());
    let mut code = base[..base.len().min(max_base)].to_string();
    code.push_str(suffix);
    code
}

/// Alloca un codice libero: prima il base code, poi i suffissi "01".."09"
/// in ordine, infine un suffisso casuale a 3 cifre.
async fn allocate_referral_code(state: &AppState, host_name: &str) -> Result<String, AppError> {
    let base = Referral::base_code(host_name);

    if !state.referral.code_taken(&base).await? {
        return Ok(base);
    }

    for i in 1..=9 {
        let candidate = suffixed(&base, &format!("0{}", i));
        if !state.referral.code_taken(&candidate).await? {
            debug!(code = %candidate, "Base referral code taken, using ordered suffix");
            return Ok(candidate);
        }
    }

    // fallback casuale; qualche tentativo prima di arrendersi
    for _ in 0..20 {
        let suffix = rand::thread_rng().gen_range(100..1000).to_string();
        let candidate = suffixed(&base, &suffix);
        if !state.referral.code_taken(&candidate).await? {
            debug!(code = %candidate, "Using random referral code suffix");
            return Ok(candidate);
        }
    }

    Err(AppError::conflict("Could not allocate a referral code"))
}

#[instrument(skip(state, body))]
pub async fn create_referral(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateReferralDTO>,
) -> Result<Json<Referral>, AppError> {
    body.validate()?;

    let code = allocate_referral_code(&state, &body.host_name).await?;
    let referral = state.referral.create(&body, &code).await?;

    // il benvenuto all'host parte dal trigger
    state.feed.publish(ChangeEvent::Referral {
        kind: ChangeKind::Insert,
        referral: referral.clone(),
    });

    info!(referral_id = referral.referral_id, code = %referral.referral_code, "Referral created");
    Ok(Json(referral))
}

#[instrument(skip(state))]
pub async fn list_referrals(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RealtorQuery>,
) -> Result<Json<Vec<Referral>>, AppError> {
    let referrals = state.referral.find_many_by_realtor(&query.realtor_sub).await?;
    Ok(Json(referrals))
}

/// Avanza lo stato di onboarding; il funnel va solo in avanti
#[instrument(skip(state, body), fields(referral_id = %referral_id))]
pub async fn update_referral_status(
    State(state): State<Arc<AppState>>,
    Path(referral_id): Path<i64>,
    Json(body): Json<UpdateReferralStatusDTO>,
) -> Result<Json<Referral>, AppError> {
    let referral = state
        .referral
        .read(&referral_id)
        .await?
        .ok_or_else(|| AppError::not_found("Referral not found"))?;

    if body.onboarding_status.rank() <= referral.onboarding_status.rank() {
        return Err(AppError::bad_request(
            "onboarding status can only move forward",
        ));
    }

    state
        .referral
        .update_status(&referral_id, body.onboarding_status)
        .await?;

    let referral = state
        .referral
        .read(&referral_id)
        .await?
        .ok_or_else(|| AppError::internal_server_error("Internal server error"))?;

    info!(status = ?referral.onboarding_status, "Referral onboarding advanced");
    Ok(Json(referral))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffixed_never_exceeds_max_len() {
        let base = "ABCDEFGHIJKLMN"; // 14 chars, massimo per un base code
        assert_eq!(suffixed(base, "01").len(), MAX_REFERRAL_CODE_LEN);
        assert_eq!(suffixed(base, "123").len(), MAX_REFERRAL_CODE_LEN);
        assert!(suffixed("AB", "01").len() <= MAX_REFERRAL_CODE_LEN);
    }

    #[test]
    fn suffixed_truncates_base_not_suffix() {
        let code = suffixed("ABCDEFGHIJKLMN", "123");
        assert!(code.ends_with("123"));
        assert_eq!(&code[..13], "ABCDEFGHIJKLM");
    }
}
