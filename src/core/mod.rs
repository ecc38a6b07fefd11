// Core algorithm exports
pub mod matcher;
pub mod schema;
pub mod scoring;

pub use matcher::{MatchError, Matcher, RankResult};
pub use schema::{AttributeView, MultiField, ScalarField};
pub use scoring::{attribute_match, calculate_match_score, overlap_score};
