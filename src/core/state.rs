//! Application State - Stato globale dell'applicazione
//!
//! Contiene tutti i repository, configurazioni e stato condiviso
//! necessario per gestire l'applicazione.

use crate::core::Config;
use crate::mail::Mailer;
use crate::repositories::{
    AffiliationRepository, AnswerRepository, BookingRepository, CleaningRepository,
    InvitationRepository, PostRepository, PropertyRepository, ReferralRepository,
    RevenueAuditRepository, RevenueProfileRepository, RevenueSnapshotRepository,
    SupportRepository, UnitRepository, UserProfileRepository, VoteRepository,
};
use crate::stream::ChangeFeed;
use sqlx::SqlitePool;

/// Stato globale dell'applicazione condiviso tra tutte le route e il trigger worker
pub struct AppState {
    pub property: PropertyRepository,
    pub unit: UnitRepository,
    pub booking: BookingRepository,
    pub cleaning: CleaningRepository,
    pub invitation: InvitationRepository,
    pub affiliation: AffiliationRepository,
    pub referral: ReferralRepository,
    pub post: PostRepository,
    pub answer: AnswerRepository,
    pub vote: VoteRepository,
    pub profile: UserProfileRepository,
    pub audit: RevenueAuditRepository,
    pub revenue_profile: RevenueProfileRepository,
    pub snapshot: RevenueSnapshotRepository,
    pub support: SupportRepository,

    /// Feed degli eventi di change-data-capture consumato dal trigger worker
    pub feed: ChangeFeed,

    /// Mailer SMTP (log-only se SMTP non configurato)
    pub mailer: Mailer,

    pub config: Config,
}

impl AppState {
    /// Crea una nuova istanza di AppState inizializzando tutti i repository
    /// con il pool di connessioni fornito.
    pub fn new(pool: SqlitePool, config: Config, feed: ChangeFeed, mailer: Mailer) -> Self {
        Self {
            property: PropertyRepository::new(pool.clone()),
            unit: UnitRepository::new(pool.clone()),
            booking: BookingRepository::new(pool.clone()),
            cleaning: CleaningRepository::new(pool.clone()),
            invitation: InvitationRepository::new(pool.clone()),
            affiliation: AffiliationRepository::new(pool.clone()),
            referral: ReferralRepository::new(pool.clone()),
            post: PostRepository::new(pool.clone()),
            answer: AnswerRepository::new(pool.clone()),
            vote: VoteRepository::new(pool.clone()),
            profile: UserProfileRepository::new(pool.clone()),
            audit: RevenueAuditRepository::new(pool.clone()),
            revenue_profile: RevenueProfileRepository::new(pool.clone()),
            snapshot: RevenueSnapshotRepository::new(pool.clone()),
            support: SupportRepository::new(pool),
            feed,
            mailer,
            config,
        }
    }
}
