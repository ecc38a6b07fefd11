// End-to-end ranking scenarios for the Kindred match engine

use kindred_match::models::{
    BasicInfo, CandidateProfile, MatchPreferences, Personality, ScoringWeights,
};
use kindred_match::{Matcher, RankedMatch};

fn full_preferences() -> MatchPreferences {
    MatchPreferences {
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
    }
}

/// A candidate mirroring the preferences exactly (score 100).
fn ideal_candidate(id: i64, nickname: &str) -> CandidateProfile {
    CandidateProfile {
        user_id: id,
        profile_pic: Some(format!("data:image/png;base64,{}", id)),
        basic_info: Some(BasicInfo {
            nickname: Some(nickname.to_string()),
            age_range: Some("25-35".to_string()),
            marital_status: Some("Single".to_string()),
            country_of_origin: Some("Kenya".to_string()),
            tribe: Some("Kikuyu".to_string()),
            skin_tone: Some("Dark".to_string()),
            ..Default::default()
        }),
        personality: Some(Personality {
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
        }),
    }
}

#[test]
fn test_mixed_pool_ranks_and_filters() {
    let matcher = Matcher::with_default_weights();
    let preferences = full_preferences();

    // strong but imperfect: one scalar miss (95) and two scalar misses (90)
    let mut strong = ideal_candidate(2, "strong");
    strong.personality.as_mut().unwrap().religion = Some("Muslim".to_string());

    let mut weaker = ideal_candidate(3, "weaker");
    {
        let p = weaker.personality.as_mut().unwrap();
        p.religion = Some("Muslim".to_string());
        p.education = Some("Diploma".to_string());
    }

    // far below threshold
    let mut poor = ideal_candidate(4, "poor");
    poor.basic_info = None;
    poor.personality = Some(Personality::default());

    // ineligible: no personality record at all
    let mut incomplete = ideal_candidate(5, "incomplete");
    incomplete.personality = None;

    let pool = vec![poor, weaker, incomplete, ideal_candidate(1, "ideal"), strong];
    let result = matcher.rank(&preferences, pool);

    let ids: Vec<i64> = result.matches.iter().map(|m| m.user_id).collect();
    assert_eq!(ids, vec![1, 2, 3]);

    let scores: Vec<i64> = result.matches.iter().map(|m| m.score).collect();
    assert_eq!(scores, vec![100, 95, 90]);

    assert_eq!(result.total_candidates, 5);
    assert_eq!(result.skipped_incomplete, 1);
}

#[test]
fn test_payload_carries_display_fields() {
    let matcher = Matcher::with_default_weights();
    let result = matcher.rank(&full_preferences(), vec![ideal_candidate(7, "amina")]);

    let top: &RankedMatch = &result.matches[0];
    assert_eq!(top.user_id, 7);
    assert_eq!(top.nickname.as_deref(), Some("amina"));
    assert_eq!(top.score, 100);
    assert!(top.profile_pic.as_deref().unwrap().starts_with("data:image/"));
}

#[test]
fn test_payload_serializes_like_the_api_contract() {
    let matcher = Matcher::with_default_weights();
    let result = matcher.rank(&full_preferences(), vec![ideal_candidate(7, "amina")]);

    let json = serde_json::to_value(&result.matches).unwrap();
    let entry = &json[0];
    assert_eq!(entry["user_id"], 7);
    assert_eq!(entry["nickname"], "amina");
    assert_eq!(entry["score"], 100);
    assert!(entry["profile_pic"].is_string());

    // profile_pic is omitted, not null, when absent
    let mut plain = ideal_candidate(8, "plain");
    plain.profile_pic = None;
    let result = matcher.rank(&full_preferences(), vec![plain]);
    let json = serde_json::to_value(&result.matches).unwrap();
    assert!(json[0].get("profile_pic").is_none());
}

#[test]
fn test_zero_threshold_exposes_full_ordering() {
    let matcher = Matcher::new(ScoringWeights {
        threshold: 0.0,
        ..Default::default()
    });
    let preferences = full_preferences();

    let mut blank = ideal_candidate(9, "blank");
    blank.basic_info = None;
    blank.personality = Some(Personality::default());

    let result = matcher.rank(&preferences, vec![blank, ideal_candidate(10, "ideal")]);

    // even a zero-scoring candidate appears when the threshold allows it
    assert_eq!(result.matches.len(), 2);
    assert_eq!(result.matches[0].user_id, 10);
    assert_eq!(result.matches[1].score, 0);
}

#[test]
fn test_custom_weights_change_the_ceiling() {
    // doubling scalar weight lifts a perfect match to 12*10 + 8*5 = 160
    let matcher = Matcher::new(ScoringWeights {
        scalar: 10.0,
        multivalue: 5.0,
        threshold: 150.0,
    });

    let result = matcher.rank(&full_preferences(), vec![ideal_candidate(2, "ideal")]);
    assert_eq!(result.matches.len(), 1);
    assert_eq!(result.matches[0].score, 160);
}
