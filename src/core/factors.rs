use std::collections::HashSet;
use crate::models::{Interest, Lifestyle};

/// Score assigned when neither side gives enough data to compare
pub const NEUTRAL_SCORE: f64 = 50.0;

/// Industry keyword buckets used to relate two different job titles
const INDUSTRY_KEYWORDS: [(&str, &[&str]); 6] = [
    ("tech", &["developer", "engineer", "programmer", "software", "tech", "data"]),
    ("healthcare", &["doctor", "nurse", "medical", "health", "physician", "therapist", "dentist", "pharmacist"]),
    ("education", &["teacher", "professor", "educator", "tutor", "instructor", "lecturer"]),
    ("finance", &["finance", "financial", "accountant", "banker", "banking", "analyst", "investment"]),
    ("marketing", &["marketing", "sales", "advertising", "brand", "social media"]),
    ("design", &["designer", "design", "artist", "creative", "illustrator", "architect"]),
];

/// Terms that mark an education entry as higher education
const HIGHER_EDUCATION_TERMS: [&str; 6] = [
    "university",
    "college",
    "bachelor",
    "master",
    "phd",
    "doctorate",
];

/// Lower-case and trim; empty strings count as missing
#[inline]
fn normalize(value: Option<&str>) -> Option<String> {
    value
        .map(|v| v.trim().to_lowercase())
        .filter(|v| !v.is_empty())
}

fn interest_set(interests: &[Interest]) -> HashSet<String> {
    interests
        .iter()
        .filter_map(|interest| normalize(interest.label()))
        .collect()
}

/// Hobbies sub-score: Jaccard similarity of the normalized interest sets
pub fn calculate_hobbies_score(a: &[Interest], b: &[Interest]) -> f64 {
    let set_a = interest_set(a);
    let set_b = interest_set(b);

    match (set_a.is_empty(), set_b.is_empty()) {
        (true, true) => NEUTRAL_SCORE,
        (true, false) | (false, true) => 0.0,
        (false, false) => {
            let shared = set_a.intersection(&set_b).count() as f64;
            let union = set_a.union(&set_b).count() as f64;
            100.0 * shared / union
        }
    }
}

fn industries(title: &str) -> impl Iterator<Item = &'static str> + '_ {
    INDUSTRY_KEYWORDS
        .iter()
        .filter(move |(_, keywords)| keywords.iter().any(|k| title.contains(k)))
        .map(|(industry, _)| *industry)
}

/// Job sub-score
///
/// Exact title match scores 100; containment or a shared industry bucket scores 50.
pub fn calculate_job_score(a: Option<&str>, b: Option<&str>) -> f64 {
    let (a, b) = match (normalize(a), normalize(b)) {
        (None, None) => return NEUTRAL_SCORE,
        (Some(a), Some(b)) => (a, b),
        _ => return 0.0,
    };

    if a == b {
        return 100.0;
    }

    if a.contains(&b) || b.contains(&a) {
        return 50.0;
    }

    let shares_industry = industries(&a).any(|industry| industries(&b).any(|other| other == industry));
    if shares_industry {
        50.0
    } else {
        0.0
    }
}

/// Age sub-score: step function over the absolute age gap
///
/// A single missing age is treated like two missing ages.
pub fn calculate_age_score(a: Option<u32>, b: Option<u32>) -> f64 {
    let (a, b) = match (a, b) {
        (Some(a), Some(b)) => (a, b),
        _ => return NEUTRAL_SCORE,
    };

    match a.abs_diff(b) {
        0 => 100.0,
        1..=2 => 80.0,
        3..=5 => 60.0,
        6..=10 => 40.0,
        11..=15 => 20.0,
        _ => 10.0,
    }
}

/// Split "City, Region" into its city and optional region parts
fn split_location(location: &str) -> (&str, Option<&str>) {
    match location.split_once(',') {
        Some((city, region)) => {
            let region = region.trim();
            (city.trim(), (!region.is_empty()).then_some(region))
        }
        None => (location.trim(), None),
    }
}

/// Location sub-score: exact 100, same city 70, same region 50, otherwise 30
pub fn calculate_location_score(a: Option<&str>, b: Option<&str>) -> f64 {
    let (a, b) = match (normalize(a), normalize(b)) {
        (None, None) => return NEUTRAL_SCORE,
        (Some(a), Some(b)) => (a, b),
        _ => return 0.0,
    };

    if a == b {
        return 100.0;
    }

    let (city_a, region_a) = split_location(&a);
    let (city_b, region_b) = split_location(&b);

    if city_a == city_b {
        return 70.0;
    }

    match (region_a, region_b) {
        (Some(ra), Some(rb)) if ra == rb => 50.0,
        _ => 30.0,
    }
}

/// Lifestyle sub-score: share of answered factors on which both sides agree
pub fn calculate_lifestyle_score(a: &Lifestyle, b: &Lifestyle) -> f64 {
    let mut considered = 0u32;
    let mut matches = 0u32;

    for (value_a, value_b) in a.factors().into_iter().zip(b.factors()) {
        if let (Some(value_a), Some(value_b)) = (normalize(value_a), normalize(value_b)) {
            considered += 1;
            if value_a == value_b {
                matches += 1;
            }
        }
    }

    if considered == 0 {
        return NEUTRAL_SCORE;
    }

    100.0 * matches as f64 / considered as f64
}

#[inline]
fn is_higher_education(education: &str) -> bool {
    HIGHER_EDUCATION_TERMS.iter().any(|term| education.contains(term))
}

/// Education sub-score: exact 100, same level 60, mixed levels 20
pub fn calculate_education_score(a: Option<&str>, b: Option<&str>) -> f64 {
    let (a, b) = match (normalize(a), normalize(b)) {
        (None, None) => return NEUTRAL_SCORE,
        (Some(a), Some(b)) => (a, b),
        _ => return 0.0,
    };

    if a == b {
        return 100.0;
    }

    if is_higher_education(&a) == is_higher_education(&b) {
        60.0
    } else {
        20.0
    }
}
