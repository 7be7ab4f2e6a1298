//! DTOs module - Data Transfer Objects
//!
//! Questo modulo contiene tutti i DTOs usati per la comunicazione client-server.
//! I DTOs separano la rappresentazione esterna (API) dalla rappresentazione interna (entities).

pub mod property;
pub mod booking;
pub mod cleaning;
pub mod membership;
pub mod referral;
pub mod forum;
pub mod revenue;
pub mod support;
pub mod query;

// Re-exports per mantenere gli import compatti nei services
pub use property::{CreatePropertyDTO, CreateUnitDTO, UpdatePropertyDTO, UpdateUnitDTO};
pub use booking::CreateBookingDTO;
pub use cleaning::{CleaningTaskDTO, CreateCleaningDTO, UpdateCleaningDTO};
pub use membership::{
    AcceptInvitationDTO, AcceptInvitationResponseDTO, CreateInvitationDTO, CreatedInvitationDTO,
};
pub use referral::{CreateReferralDTO, UpdateReferralStatusDTO};
pub use forum::{
    CastVoteDTO, CreateAnswerDTO, CreatePostDTO, EnrichedPostDTO,
};
pub use revenue::{
    ConvertAuditDTO, ConvertedAuditDTO, CreateRevenueAuditDTO, CreateSnapshotDTO,
    PropertyRevenueSummaryDTO,
};
pub use support::{EnrichedThreadDTO, InboundEmailDTO};
pub use query::{AffiliationQuery, CleanerQuery, OwnerQuery, PostsQuery, RealtorQuery};
