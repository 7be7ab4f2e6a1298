//! Server library - espone i moduli principali per i test

pub mod core;
pub mod dtos;
pub mod entities;
pub mod mail;
pub mod repositories;
pub mod services;
pub mod stream;

// Re-export dei tipi principali per facilitare l'import
pub use crate::core::{AppError, AppState, Config};
pub use crate::services::root;

use axum::{
    Router,
    routing::{get, patch, post},
};
use std::sync::Arc;

/// Crea il router principale dell'applicazione
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root))
        .nest("/properties", configure_property_routes())
        .nest("/units", configure_unit_routes())
        .nest("/bookings", configure_booking_routes())
        .nest("/cleanings", configure_cleaning_routes())
        .nest("/invitations", configure_invitation_routes())
        .nest("/affiliations", configure_affiliation_routes())
        .nest("/referrals", configure_referral_routes())
        .nest("/forum", configure_forum_routes())
        .nest("/profiles", configure_profile_routes())
        .nest("/revenue", configure_revenue_routes())
        .nest("/support", configure_support_routes())
        .route("/inbound-email", post(services::inbound_email))
        .with_state(state)
}

/// Configura le routes per proprietà e unit annidate
fn configure_property_routes() -> Router<Arc<AppState>> {
    use crate::services::*;

    Router::new()
        .route("/", get(list_properties).post(create_property))
        .route(
            "/{property_id}",
            get(get_property)
                .patch(update_property)
                .delete(delete_property),
        )
        .route("/{property_id}/units", get(list_units).post(create_unit))
        .route("/{property_id}/revenue", get(property_revenue_summary))
}

/// Configura le routes per le unit (prenotazioni e pulizie annidate)
fn configure_unit_routes() -> Router<Arc<AppState>> {
    use crate::services::*;

    Router::new()
        .route(
            "/{unit_id}",
            get(get_unit).patch(update_unit).delete(delete_unit),
        )
        .route(
            "/{unit_id}/bookings",
            get(list_unit_bookings).post(create_booking),
        )
        .route(
            "/{unit_id}/cleanings",
            get(list_unit_cleanings).post(create_cleaning),
        )
        .route(
            "/{unit_id}/snapshots",
            get(list_snapshots).post(create_snapshot),
        )
}

fn configure_booking_routes() -> Router<Arc<AppState>> {
    use crate::services::*;

    Router::new().route("/{booking_id}", get(get_booking).delete(delete_booking))
}

/// Configura le routes per le pulizie e la task list dei cleaner
fn configure_cleaning_routes() -> Router<Arc<AppState>> {
    use crate::services::*;

    Router::new()
        .route("/", get(list_cleaner_tasks))
        .route("/{cleaning_id}", get(get_cleaning).patch(update_cleaning))
}

/// Configura le routes per gli inviti dei cleaner
fn configure_invitation_routes() -> Router<Arc<AppState>> {
    use crate::services::*;

    Router::new()
        .route("/", get(list_pending_invitations).post(create_invitation))
        .route("/accept", post(accept_invitation))
        .route("/{invitation_id}/revoke", post(revoke_invitation))
}

fn configure_affiliation_routes() -> Router<Arc<AppState>> {
    use crate::services::*;

    Router::new()
        .route("/", get(list_affiliations))
        .route("/{affiliation_id}/revoke", post(revoke_affiliation))
}

/// Configura le routes per i referral dei realtor
fn configure_referral_routes() -> Router<Arc<AppState>> {
    use crate::services::*;

    Router::new()
        .route("/", get(list_referrals).post(create_referral))
        .route("/{referral_id}/status", patch(update_referral_status))
}

/// Configura le routes del forum (post, risposte, voti)
fn configure_forum_routes() -> Router<Arc<AppState>> {
    use crate::services::*;

    Router::new()
        .route("/posts", get(list_posts).post(create_post))
        .route("/posts/{post_id}", get(get_post))
        .route("/posts/{post_id}/answers", post(create_answer))
        .route("/answers/{answer_id}/accept", post(accept_answer))
        .route("/answers/{answer_id}/unaccept", post(unaccept_answer))
        .route("/votes", post(cast_vote))
}

fn configure_profile_routes() -> Router<Arc<AppState>> {
    use crate::services::*;

    Router::new().route("/{sub}", get(get_profile))
}

/// Configura le routes del funnel revenue (audit e conversione)
fn configure_revenue_routes() -> Router<Arc<AppState>> {
    use crate::services::*;

    Router::new()
        .route("/audits", get(list_audits).post(create_audit))
        .route("/audits/{audit_id}/convert", post(convert_audit))
}

fn configure_support_routes() -> Router<Arc<AppState>> {
    use crate::services::*;

    Router::new()
        .route("/threads", get(list_threads))
        .route("/threads/{thread_id}", get(get_thread))
}
