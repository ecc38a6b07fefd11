// Model exports
pub mod domain;
pub mod responses;

pub use domain::{
    BasicInfo, CandidateProfile, MatchPreferences, Personality, RankedMatch, ScoringWeights,
};
pub use responses::{HealthResponse, MessageResponse};
