use std::collections::HashSet;

use crate::core::schema::{AttributeView, MultiField, ScalarField};
use crate::models::{MatchPreferences, ScoringWeights};

/// Compare one scalar attribute and return `weight` on an exact, case-sensitive
/// match of two non-empty values, else 0.
///
/// An unset or empty preference is neutral: it contributes nothing regardless
/// of the candidate's value.
#[inline]
pub fn attribute_match(pref: Option<&str>, candidate: Option<&str>, weight: f64) -> f64 {
    match (pref, candidate) {
        (Some(p), Some(c)) if !p.is_empty() && !c.is_empty() && p == c => weight,
        _ => 0.0,
    }
}

/// Score one comma-separated list attribute by normalized token-set overlap.
///
/// Both sides are split on `,`, trimmed, lowercased, and deduplicated. The
/// score is proportional to the fraction of the *preference's* tokens that the
/// candidate satisfies: `(|pref ∩ cand| / |pref|) * weight`. Extra candidate
/// tokens neither help nor hurt.
pub fn overlap_score(pref: Option<&str>, candidate: Option<&str>, weight: f64) -> f64 {
    let (pref, candidate) = match (pref, candidate) {
        (Some(p), Some(c)) if !p.is_empty() && !c.is_empty() => (p, c),
        _ => return 0.0,
    };

    let pref_set = tokenize(pref);
    if pref_set.is_empty() {
        // e.g. a preference of ", ,": nothing requested, nothing to satisfy
        return 0.0;
    }
    let candidate_set = tokenize(candidate);

    let overlap = pref_set.intersection(&candidate_set).count();
    (overlap as f64 / pref_set.len() as f64) * weight
}

/// Split a comma-separated list into a set of trimmed, lowercased tokens.
fn tokenize(list: &str) -> HashSet<String> {
    list.split(',')
        .map(|token| token.trim().to_lowercase())
        .filter(|token| !token.is_empty())
        .collect()
}

/// Calculate the compatibility score (0-100 under default weights) for one
/// (preferences, candidate) pair.
///
/// Pure function of its inputs: fields are summed in schema order, scalars
/// first, so identical inputs always produce an identical score.
pub fn calculate_match_score(
    preferences: &MatchPreferences,
    candidate: &AttributeView<'_>,
    weights: &ScoringWeights,
) -> f64 {
    let mut score = 0.0;

    for field in ScalarField::ALL {
        score += attribute_match(
            preferences.scalar(field),
            candidate.scalar(field),
            weights.scalar,
        );
    }

    for field in MultiField::ALL {
        score += overlap_score(
            preferences.multi(field),
            candidate.multi(field),
            weights.multivalue,
        );
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BasicInfo, Personality};

    #[test]
    fn test_attribute_match_exact() {
        assert_eq!(attribute_match(Some("Single"), Some("Single"), 5.0), 5.0);
        assert_eq!(attribute_match(Some("Single"), Some("Married"), 5.0), 0.0);
    }

    #[test]
    fn test_attribute_match_case_sensitive() {
        assert_eq!(attribute_match(Some("Single"), Some("single"), 5.0), 0.0);
    }

    #[test]
    fn test_attribute_match_unset_preference_is_neutral() {
        assert_eq!(attribute_match(None, Some("Single"), 5.0), 0.0);
        assert_eq!(attribute_match(Some(""), Some("Single"), 5.0), 0.0);
        assert_eq!(attribute_match(None, None, 5.0), 0.0);
        assert_eq!(attribute_match(Some(""), Some(""), 5.0), 0.0);
    }

    #[test]
    fn test_overlap_full() {
        assert_eq!(
            overlap_score(Some("Hiking, Chess"), Some("chess,   HIKING"), 5.0),
            5.0
        );
    }

    #[test]
    fn test_overlap_partial() {
        // 1 of 3 requested traits satisfied
        let score = overlap_score(Some("a, b, c"), Some("c, d"), 5.0);
        assert!((score - 5.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_overlap_extra_candidate_tokens_ignored() {
        let exact = overlap_score(Some("reading, travel"), Some("reading, travel"), 5.0);
        let extra = overlap_score(
            Some("reading, travel"),
            Some("reading, travel, hiking, chess"),
            5.0,
        );
        assert_eq!(exact, extra);
    }

    #[test]
    fn test_overlap_empty_inputs() {
        assert_eq!(overlap_score(None, Some("a"), 5.0), 0.0);
        assert_eq!(overlap_score(Some("a"), None, 5.0), 0.0);
        assert_eq!(overlap_score(Some(""), Some("a"), 5.0), 0.0);
        // all-whitespace tokens collapse to an empty preference set
        assert_eq!(overlap_score(Some(" , ,"), Some("a"), 5.0), 0.0);
    }

    #[test]
    fn test_overlap_duplicates_collapse() {
        let score = overlap_score(Some("a, A, a"), Some("a"), 5.0);
        assert_eq!(score, 5.0);
    }

    fn full_pair() -> (MatchPreferences, BasicInfo, Personality) {
        let preferences = MatchPreferences {
            user_id: 1,
            age_range: Some("25-35".to_string()),
            marital_status: Some("Single".to_string()),
            country_of_origin: Some("Kenya".to_string()),
            tribe: Some("Kikuyu".to_string()),
            skin_tone: Some("Dark".to_string()),
            height: Some("170cm".to_string()),
            eye_colour: Some("Brown".to_string()),
            body_type: Some("Athletic".to_string()),
            hair_colour: Some("Black".to_string()),
            hair_style: Some("Curly".to_string()),
            religion: Some("Christian".to_string()),
            education: Some("Degree".to_string()),
            languages: Some("Swahili, English".to_string()),
            interest: Some("Technology".to_string()),
            hobbies: Some("Hiking, Chess".to_string()),
            movies: Some("Drama".to_string()),
            music: Some("Jazz".to_string()),
            activities: Some("Yoga".to_string()),
            values: Some("Honesty".to_string()),
            personality: Some("Introvert".to_string()),
            ..Default::default()
        };
        let basic_info = BasicInfo {
            age_range: Some("25-35".to_string()),
            marital_status: Some("Single".to_string()),
            country_of_origin: Some("Kenya".to_string()),
            tribe: Some("Kikuyu".to_string()),
            skin_tone: Some("Dark".to_string()),
            ..Default::default()
        };
        let personality = Personality {
            height: Some("170cm".to_string()),
            eye_colour: Some("Brown".to_string()),
            body_type: Some("Athletic".to_string()),
            hair_colour: Some("Black".to_string()),
            hair_style: Some("Curly".to_string()),
            religion: Some("Christian".to_string()),
            education: Some("Degree".to_string()),
            languages: Some("Swahili, English".to_string()),
            interest: Some("Technology".to_string()),
            hobbies: Some("Hiking, Chess".to_string()),
            movies: Some("Drama".to_string()),
            music: Some("Jazz".to_string()),
            activities: Some("Yoga".to_string()),
            values: Some("Honesty".to_string()),
            personality: Some("Introvert".to_string()),
        };
        (preferences, basic_info, personality)
    }

    #[test]
    fn test_perfect_match_scores_100() {
        let (preferences, basic_info, personality) = full_pair();
        let view = AttributeView::new(Some(&basic_info), &personality);

        let score = calculate_match_score(&preferences, &view, &ScoringWeights::default());
        assert!((score - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_score_within_bounds() {
        let (preferences, basic_info, mut personality) = full_pair();
        personality.hobbies = Some("Chess".to_string());
        personality.religion = Some("Muslim".to_string());
        let view = AttributeView::new(Some(&basic_info), &personality);

        let score = calculate_match_score(&preferences, &view, &ScoringWeights::default());
        assert!(score >= 0.0 && score <= 100.0);
        // one scalar miss (-5) and half the hobby list (-2.5)
        assert!((score - 92.5).abs() < 1e-9);
    }

    #[test]
    fn test_empty_preferences_score_zero() {
        let (_, basic_info, personality) = full_pair();
        let preferences = MatchPreferences::default();
        let view = AttributeView::new(Some(&basic_info), &personality);

        let score = calculate_match_score(&preferences, &view, &ScoringWeights::default());
        assert_eq!(score, 0.0);
    }
}
