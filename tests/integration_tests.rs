// Integration tests for FriendFinder compatibility

use friendfinder_compat::core::{score, Matcher};
use friendfinder_compat::models::{Candidate, Interest, Lifestyle, MatchResult, Profile};

fn create_test_profile(
    interests: &[&str],
    age: u32,
    location: &str,
    lifestyle: (&str, &str, &str, &str),
    education: &str,
    job_title: &str,
) -> Profile {
    Profile {
        interests: interests.iter().map(|i| Interest::from(*i)).collect(),
        job_title: Some(job_title.to_string()),
        age: Some(age),
        location: Some(location.to_string()),
        lifestyle: Lifestyle {
            drinking: Some(lifestyle.0.to_string()),
            smoking: Some(lifestyle.1.to_string()),
            exercise: Some(lifestyle.2.to_string()),
            pets: Some(lifestyle.3.to_string()),
        },
        education: Some(education.to_string()),
    }
}

fn sample_profiles() -> Vec<Profile> {
    vec![
        create_test_profile(&["Music", "Travel"], 30, "Austin, TX", ("Socially", "Never", "Daily", "Dogs"), "Bachelor's Degree", "Software Engineer"),
        create_test_profile(&["Hiking", "Chess"], 50, "Denver, CO", ("Never", "Often", "Rarely", "Cats"), "High School", "Chef"),
        create_test_profile(&["music", "Cooking"], 33, "Dallas, TX", ("socially", "Never", "Weekly", "Dogs"), "Master's", "Data Analyst"),
        Profile::default(),
        Profile {
            interests: vec![Interest::Named { name: Some("Travel".to_string()) }],
            age: Some(29),
            ..Profile::default()
        },
    ]
}

fn assert_in_range(result: &MatchResult) {
    assert!(result.score <= 100);
    let b = result.breakdown;
    for value in [b.hobbies, b.job, b.age, b.location, b.lifestyle, b.education] {
        assert!((0.0..=100.0).contains(&value), "sub-score {} out of range", value);
    }
}

#[test]
fn test_identical_profiles_fully_compatible() {
    let a = create_test_profile(&["Music", "Travel"], 30, "Austin, TX", ("Socially", "Never", "Daily", "Dogs"), "Bachelor's Degree", "Nurse");
    let b = create_test_profile(&["Music", "Travel"], 30, "Austin, TX", ("Socially", "Never", "Daily", "Dogs"), "Bachelor's Degree", "Nurse");

    let result = score(&a, &b);

    assert_eq!(result.score, 100);
    assert!(result.compatible);
}

#[test]
fn test_dissimilar_profiles_not_compatible() {
    let a = create_test_profile(&["Music", "Travel"], 25, "Austin, TX", ("Socially", "Never", "Daily", "Dogs"), "PhD", "Pilot");
    let b = create_test_profile(&["Hiking", "Chess"], 45, "Denver, CO", ("Never", "Often", "Rarely", "Cats"), "High School", "Chef");

    let result = score(&a, &b);

    assert!(result.score < 20, "Expected a low score, got {}", result.score);
    assert!(!result.compatible);
    assert_eq!(result.breakdown.hobbies, 0.0);
    assert_eq!(result.breakdown.lifestyle, 0.0);
    assert_eq!(result.breakdown.education, 20.0);
}

#[test]
fn test_scores_within_range_and_symmetric() {
    let profiles = sample_profiles();

    for a in &profiles {
        for b in &profiles {
            let forward = score(a, b);
            let backward = score(b, a);

            assert_in_range(&forward);
            assert_eq!(forward, backward);
        }
    }
}

#[test]
fn test_scoring_is_idempotent() {
    let profiles = sample_profiles();
    let first = score(&profiles[0], &profiles[2]);

    for _ in 0..10 {
        assert_eq!(score(&profiles[0], &profiles[2]), first);
    }
}

#[test]
fn test_score_serializes_to_wire_shape() {
    let profiles = sample_profiles();
    let result = score(&profiles[0], &profiles[2]);

    let json = serde_json::to_value(result).unwrap();

    assert!(json["score"].is_u64());
    assert!(json["compatible"].is_boolean());
    for key in ["hobbies", "job", "age", "location", "lifestyle", "education"] {
        assert!(json["breakdown"][key].is_number(), "missing breakdown.{}", key);
    }
}

#[test]
fn test_request_json_round_trip_through_scorer() {
    let a: Profile = serde_json::from_str(
        r#"{
            "interests": ["Music", {"name": "Travel"}],
            "jobTitle": "Teacher",
            "age": 30,
            "location": "Austin, TX",
            "lifestyle": {"drinking": "Socially"},
            "education": "Bachelor's"
        }"#,
    )
    .unwrap();
    let b: Profile = serde_json::from_str(r#"{"interests": ["travel", "music"], "age": 32}"#).unwrap();

    let result = score(&a, &b);

    assert_eq!(result.breakdown.hobbies, 100.0);
    assert_eq!(result.breakdown.age, 80.0);
    assert_eq!(result.breakdown.job, 0.0);
    assert_eq!(result.breakdown.lifestyle, 50.0);
}

#[test]
fn test_matcher_ranks_end_to_end() {
    let matcher = Matcher::with_default_weights();
    let profiles = sample_profiles();
    let user = profiles[0].clone();

    let candidates: Vec<Candidate> = profiles
        .into_iter()
        .enumerate()
        .map(|(i, profile)| Candidate {
            id: format!("user-{}", i),
            profile,
        })
        .collect();

    let result = matcher.rank(Some("user-0"), &user, candidates, 3);

    assert_eq!(result.total_candidates, 5);
    assert_eq!(result.matches.len(), 3);

    for i in 1..result.matches.len() {
        assert!(
            result.matches[i - 1].score >= result.matches[i].score,
            "Matches not sorted by score"
        );
    }
    assert!(result.matches.iter().all(|m| m.id != "user-0"));
}

#[test]
fn test_null_fields_score_with_neutral_rules() {
    let a: Profile = serde_json::from_str(
        r#"{"interests": null, "lifestyle": null, "jobTitle": null, "age": null, "location": null, "education": null}"#,
    )
    .unwrap();
    let b: Profile = serde_json::from_str(r#"{"interests": [null, "Music", null], "lifestyle": {"pets": null}}"#).unwrap();

    let result = score(&a, &b);

    assert_eq!(result.breakdown.hobbies, 0.0);
    assert_eq!(result.breakdown.lifestyle, 50.0);
    assert_eq!(result.breakdown.age, 50.0);
    assert_eq!(result, score(&b, &a));
}
