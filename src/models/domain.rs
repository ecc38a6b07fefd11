use serde::{Deserialize, Serialize};

/// Basic-info sub-record of a profile: identity and origin attributes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BasicInfo {
    pub nickname: Option<String>,
    pub age_range: Option<String>,
    pub marital_status: Option<String>,
    pub country_of_origin: Option<String>,
    pub tribe: Option<String>,
    pub current_location: Option<String>,
    pub skin_tone: Option<String>,
}

/// Personality sub-record of a profile.
///
/// Single-value attributes are compared by exact equality; the list-valued
/// attributes hold comma-separated free text and are compared by normalized
/// token-set overlap.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Personality {
    pub height: Option<String>,
    pub eye_colour: Option<String>,
    pub body_type: Option<String>,
    pub hair_colour: Option<String>,
    pub hair_style: Option<String>,
    pub religion: Option<String>,
    pub education: Option<String>,
    pub languages: Option<String>,
    pub interest: Option<String>,
    pub hobbies: Option<String>,
    pub movies: Option<String>,
    pub music: Option<String>,
    pub activities: Option<String>,
    pub values: Option<String>,
    pub personality: Option<String>,
}

/// A prospective match as read from the profile store.
///
/// Both sub-records are optional per user; a candidate without a personality
/// record is ineligible for scoring and is skipped by the ranker rather than
/// scored as zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub user_id: i64,
    pub profile_pic: Option<String>,
    pub basic_info: Option<BasicInfo>,
    pub personality: Option<Personality>,
}

impl CandidateProfile {
    pub fn nickname(&self) -> Option<&str> {
        self.basic_info.as_ref().and_then(|b| b.nickname.as_deref())
    }
}

/// The requester's desired-trait record, the basis of all scoring.
///
/// Every field is optional; an unset field contributes zero and never
/// penalizes. `current_location` is stored but not scored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchPreferences {
    pub user_id: i64,
    pub age_range: Option<String>,
    pub marital_status: Option<String>,
    pub country_of_origin: Option<String>,
    pub tribe: Option<String>,
    pub current_location: Option<String>,
    pub skin_tone: Option<String>,
    pub height: Option<String>,
    pub eye_colour: Option<String>,
    pub body_type: Option<String>,
    pub hair_colour: Option<String>,
    pub hair_style: Option<String>,
    pub religion: Option<String>,
    pub education: Option<String>,
    pub languages: Option<String>,
    pub interest: Option<String>,
    pub hobbies: Option<String>,
    pub movies: Option<String>,
    pub music: Option<String>,
    pub activities: Option<String>,
    pub values: Option<String>,
    pub personality: Option<String>,
}

/// One entry of the ranked match payload.
///
/// `score` is the integer surfaced to clients, truncated toward zero from the
/// raw score; ordering was decided on the raw score before truncation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedMatch {
    pub user_id: i64,
    pub nickname: Option<String>,
    pub score: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_pic: Option<String>,
}

/// Scoring weights and acceptance threshold.
///
/// `threshold` assumes the 0-100 scale produced by the default weights; it is
/// a policy constant, not derived from the weighting.
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub scalar: f64,
    pub multivalue: f64,
    pub threshold: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            scalar: 5.0,
            multivalue: 5.0,
            threshold: 85.0,
        }
    }
}
