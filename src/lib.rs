//! Kindred Match - compatibility scoring and ranking service
//!
//! This library implements the weighted match-scoring engine used by the
//! Kindred networking app: exact-equality comparison for single-value
//! attributes, proportional token-set overlap for list attributes, and a
//! thresholded, score-ordered ranking over a candidate pool.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{attribute_match, calculate_match_score, overlap_score, MatchError, Matcher};
pub use crate::models::{
    BasicInfo, CandidateProfile, MatchPreferences, Personality, RankedMatch, ScoringWeights,
};
