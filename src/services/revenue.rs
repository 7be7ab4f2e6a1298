//! Revenue services - Lead audit, conversione in proprietà, snapshot mensili

use crate::core::{AppError, AppState};
use crate::dtos::{
    ConvertAuditDTO, ConvertedAuditDTO, CreatePropertyDTO, CreateRevenueAuditDTO,
    CreateSnapshotDTO, PropertyRevenueSummaryDTO,
};
use crate::entities::{AuditStatus, RevenueAudit, RevenueSnapshot};
use crate::repositories::{Create, Delete, Read};
use axum::extract::{Json, Path, State};
use axum_macros::debug_handler;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use validator::Validate;

#[instrument(skip(state, body))]
pub async fn create_audit(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateRevenueAuditDTO>,
) -> Result<Json<RevenueAudit>, AppError> {
    body.validate()?;

    let audit = state.audit.create(&body).await?;

    info!(audit_id = audit.audit_id, "Revenue audit created");
    Ok(Json(audit))
}

#[instrument(skip(state))]
pub async fn list_audits(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<RevenueAudit>>, AppError> {
    let audits = state.audit.find_all().await?;
    debug!("Found {} audits", audits.len());
    Ok(Json(audits))
}

#[debug_handler]
#[instrument(skip(state, body), fields(audit_id = %audit_id))]
pub async fn convert_audit(
    State(state): State<Arc<AppState>>,
    Path(audit_id): Path<i64>,
    Json(body): Json<ConvertAuditDTO>,
) -> Result<Json<ConvertedAuditDTO>, AppError> {
    // 1. Leggere l'audit e rifiutare subito se non è più NEW
    // 2. Creare la proprietà (nome esplicito o indirizzo dell'audit)
    // 3. Creare il revenue profile con target mensile = stimato annuo / 12
    // 4. Marcare CONVERTED in modo condizionale; se la guardia fallisce
    //    qualcun altro ha già convertito e le righe appena create vanno rimosse
    body.validate()?;

    let audit = state
        .audit
        .read(&audit_id)
        .await?
        .ok_or_else(|| AppError::not_found("Audit not found"))?;

    if audit.status != AuditStatus::New {
        return Err(AppError::conflict("Audit already converted"));
    }

    let property_dto = CreatePropertyDTO {
        owner_sub: body.owner_sub.clone(),
        name: body.name.clone().unwrap_or_else(|| audit.address.clone()),
        address: audit.address.clone(),
    };
    let property = state.property.create(&property_dto).await?;

    let target_monthly_cents = audit.estimated_revenue_cents / 12;
    let revenue_profile = state
        .revenue_profile
        .create(&property.property_id, target_monthly_cents, None)
        .await?;

    if !state
        .audit
        .mark_converted(&audit_id, &property.property_id)
        .await?
    {
        // Corsa persa: il revenue profile cade in cascata con la proprietà
        warn!(
            property_id = property.property_id,
            "Concurrent conversion won the guard, removing the property"
        );
        state.property.delete(&property.property_id).await?;
        return Err(AppError::conflict("Audit already converted"));
    }

    let audit = state
        .audit
        .read(&audit_id)
        .await?
        .ok_or_else(|| AppError::not_found("Audit not found"))?;

    info!(property_id = property.property_id, "Audit converted");
    Ok(Json(ConvertedAuditDTO {
        audit,
        property,
        revenue_profile,
    }))
}

#[instrument(skip(state), fields(unit_id = %unit_id))]
pub async fn list_snapshots(
    State(state): State<Arc<AppState>>,
    Path(unit_id): Path<i64>,
) -> Result<Json<Vec<RevenueSnapshot>>, AppError> {
    if state.unit.read(&unit_id).await?.is_none() {
        return Err(AppError::not_found("Unit not found"));
    }

    let snapshots = state.snapshot.find_many_by_unit(&unit_id).await?;
    Ok(Json(snapshots))
}

#[instrument(skip(state, body), fields(unit_id = %unit_id))]
pub async fn create_snapshot(
    State(state): State<Arc<AppState>>,
    Path(unit_id): Path<i64>,
    Json(body): Json<CreateSnapshotDTO>,
) -> Result<Json<RevenueSnapshot>, AppError> {
    body.validate()?;

    if state.unit.read(&unit_id).await?.is_none() {
        return Err(AppError::not_found("Unit not found"));
    }

    // (unit_id, month) è UNIQUE: il doppio inserimento finisce in conflict
    let snapshot = state.snapshot.create_for_unit(&unit_id, &body).await?;

    info!(snapshot_id = snapshot.snapshot_id, "Snapshot recorded");
    Ok(Json(snapshot))
}

#[instrument(skip(state), fields(property_id = %property_id))]
pub async fn property_revenue_summary(
    State(state): State<Arc<AppState>>,
    Path(property_id): Path<i64>,
) -> Result<Json<PropertyRevenueSummaryDTO>, AppError> {
    if state.property.read(&property_id).await?.is_none() {
        return Err(AppError::not_found("Property not found"));
    }

    let summary = state.snapshot.property_summary(&property_id).await?;
    Ok(Json(summary))
}
