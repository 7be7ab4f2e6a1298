//! Entities module - Entità del dominio applicativo
//!
//! Questo modulo contiene tutte le entità (models) che rappresentano i dati persistiti nel database.
//! Ogni entity corrisponde a una tabella nel database.

pub mod enums;
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

// Re-exports per facilitare l'import
pub use enums::{
    AffiliationStatus, AuditStatus, CleaningStatus, InvitationStatus, MessageDirection,
    OnboardingStatus, VoteTarget,
};
pub use property::Property;
pub use unit::Unit;
pub use booking::Booking;
pub use cleaning::Cleaning;
pub use invitation::Invitation;
pub use affiliation::CleanerAffiliation;
pub use referral::Referral;
pub use post::Post;
pub use answer::Answer;
pub use vote::Vote;
pub use user_profile::UserProfile;
pub use revenue::{RevenueAudit, RevenueProfile, RevenueSnapshot};
pub use support::{SupportMessage, SupportThread};
