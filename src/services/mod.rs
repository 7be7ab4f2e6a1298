//! Services module - Coordinatore per tutti i service handler HTTP
//!
//! Questo modulo organizza i service handlers in sotto-moduli separati per una migliore manutenibilità.
//! Ogni modulo gestisce gli endpoint HTTP per una specifica funzionalità.

pub mod booking;
pub mod cleaning;
pub mod forum;
pub mod membership;
pub mod property;
pub mod referral;
pub mod revenue;
pub mod support;
pub mod unit;

// Re-exports per facilitare l'import
pub use booking::{delete_booking, get_booking};
pub use cleaning::{get_cleaning, list_cleaner_tasks, update_cleaning};
pub use forum::{
    accept_answer, cast_vote, create_answer, create_post, get_post, get_profile, list_posts,
    unaccept_answer,
};
pub use membership::{
    accept_invitation, create_invitation, list_affiliations, list_pending_invitations,
    revoke_affiliation, revoke_invitation,
};
pub use property::{
    create_property, create_unit, delete_property, get_property, list_properties, list_units,
    update_property,
};
pub use referral::{create_referral, list_referrals, update_referral_status};
pub use revenue::{
    convert_audit, create_audit, create_snapshot, list_audits, list_snapshots,
    property_revenue_summary,
};
pub use support::{get_thread, inbound_email, list_threads};
pub use unit::{
    create_booking, create_cleaning, delete_unit, get_unit, list_unit_bookings,
    list_unit_cleanings, update_unit,
};

use crate::core::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse};
use std::sync::Arc;

/// Root endpoint - health check
pub async fn root(State(_state): State<Arc<AppState>>) -> impl IntoResponse {
    (StatusCode::OK, "Server is running!")
}
