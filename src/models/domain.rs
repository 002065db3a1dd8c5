use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

/// Treat an explicit `null` the same as an absent field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Interest list that tolerates `null` for the list and for its entries
fn deserialize_interests<'de, D>(deserializer: D) -> Result<Vec<Interest>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries: Vec<Option<Interest>> = null_as_default(deserializer)?;
    Ok(entries.into_iter().flatten().collect())
}

/// A single interest as sent by clients: either a bare tag or an object with a `name`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Interest {
    Tag(String),
    Named {
        #[serde(default)]
        name: Option<String>,
    },
}

impl Interest {
    /// Raw label of the interest, if it has one
    pub fn label(&self) -> Option<&str> {
        match self {
            Interest::Tag(tag) => Some(tag),
            Interest::Named { name } => name.as_deref(),
        }
    }
}

impl From<&str> for Interest {
    fn from(tag: &str) -> Self {
        Interest::Tag(tag.to_string())
    }
}

/// Lifestyle answers; every factor is free text and may be absent
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Lifestyle {
    #[serde(default)]
    pub drinking: Option<String>,
    #[serde(default)]
    pub smoking: Option<String>,
    #[serde(default)]
    pub exercise: Option<String>,
    #[serde(default)]
    pub pets: Option<String>,
}

impl Lifestyle {
    /// Factor answers in a fixed order: drinking, smoking, exercise, pets
    pub fn factors(&self) -> [Option<&str>; 4] {
        [
            self.drinking.as_deref(),
            self.smoking.as_deref(),
            self.exercise.as_deref(),
            self.pets.as_deref(),
        ]
    }
}

/// User profile fields that take part in compatibility scoring
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct Profile {
    #[serde(default, deserialize_with = "deserialize_interests")]
    pub interests: Vec<Interest>,
    #[serde(rename = "jobTitle", alias = "job_title", default)]
    pub job_title: Option<String>,
    #[validate(range(min = 1))]
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub lifestyle: Lifestyle,
    #[serde(default)]
    pub education: Option<String>,
}

/// Per-factor sub-scores, each in [0, 100]
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub hobbies: f64,
    pub job: f64,
    pub age: f64,
    pub location: f64,
    pub lifestyle: f64,
    pub education: f64,
}

/// Compatibility between two profiles
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub score: u8,
    pub compatible: bool,
    pub breakdown: ScoreBreakdown,
}

/// A candidate profile offered for ranking
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Candidate {
    #[validate(length(min = 1))]
    pub id: String,
    #[validate(nested)]
    pub profile: Profile,
}

/// Ranked candidate with its compatibility result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedMatch {
    pub id: String,
    pub score: u8,
    pub compatible: bool,
    pub breakdown: ScoreBreakdown,
}

/// Factor weights applied to the sub-scores
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub hobbies: f64,
    pub job: f64,
    pub age: f64,
    pub location: f64,
    pub lifestyle: f64,
    pub education: f64,
}

impl ScoringWeights {
    pub fn sum(&self) -> f64 {
        self.hobbies + self.job + self.age + self.location + self.lifestyle + self.education
    }

    /// Weights must be finite and non-negative
    pub fn is_valid(&self) -> bool {
        [
            self.hobbies,
            self.job,
            self.age,
            self.location,
            self.lifestyle,
            self.education,
        ]
        .iter()
        .all(|w| w.is_finite() && *w >= 0.0)
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            hobbies: 0.60,
            job: 0.05,
            age: 0.10,
            location: 0.10,
            lifestyle: 0.10,
            education: 0.05,
        }
    }
}
