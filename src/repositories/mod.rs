//! Repositories module - Coordinatore per tutti i repository del progetto
//!
//! Questo modulo organizza i repository in sotto-moduli separati per una migliore manutenibilità.
//! Ogni repository gestisce le operazioni di database per una specifica entità.
//!
//! Le query sono runtime (`sqlx::query` / `query_as` con bind) così la build non
//! richiede un database attivo; gli update parziali usano `QueryBuilder`.

pub mod traits;
pub mod property;
pub mod unit;
pub mod booking;
pub mod cleaning;
pub mod invitation;
pub mod affiliation;
pub mod referral;
pub mod post;
pub mod answer;
pub mod vote;
pub mod user_profile;
pub mod revenue;
pub mod support;

// Re-esportazione dei trait per facilitare l'import
pub use traits::{Create, Delete, Read, Update};

// Re-esportazione delle struct dei repository per facilitare l'import
pub use property::PropertyRepository;
pub use unit::UnitRepository;
pub use booking::BookingRepository;
pub use cleaning::CleaningRepository;
pub use invitation::InvitationRepository;
pub use affiliation::AffiliationRepository;
pub use referral::ReferralRepository;
pub use post::PostRepository;
pub use answer::AnswerRepository;
pub use vote::VoteRepository;
pub use user_profile::UserProfileRepository;
pub use revenue::{RevenueAuditRepository, RevenueProfileRepository, RevenueSnapshotRepository};
pub use support::SupportRepository;
