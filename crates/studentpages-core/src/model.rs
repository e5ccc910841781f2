//! Record types decoded from the remote datasets.
//!
//! The datasets are flat JSON arrays maintained by hand, so every field is
//! optional here. Identifiers are accepted as strings or numbers.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

use crate::percentage::Percentage;

/// One (student, sub-topic, difficulty) measurement.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProficiencyRecord {
    /// Stable student identifier, the grouping key.
    #[serde(default, deserialize_with = "lenient_string")]
    pub niat_id: Option<String>,
    #[serde(default)]
    pub student_name: Option<String>,
    /// Secondary identifier used to match recommended questions.
    #[serde(default, deserialize_with = "lenient_string")]
    pub user_id: Option<String>,
    #[serde(default)]
    pub sub_topic: Option<String>,
    /// Raw difficulty text; see [`Difficulty::parse`].
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub percentage_of_questions_solved: Percentage,
}

impl ProficiencyRecord {
    /// The trimmed student identifier, if present and non-empty.
    pub fn student_id(&self) -> Option<&str> {
        self.niat_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }

    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty.as_deref().and_then(Difficulty::parse)
    }
}

/// A recommended practice question.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuestionRecord {
    #[serde(default, deserialize_with = "lenient_string")]
    pub user_id: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(rename = "LINK", default)]
    pub link: Option<String>,
    #[serde(default)]
    pub question_short_text: Option<String>,
}

impl QuestionRecord {
    pub fn matches_user(&self, user_id: &str) -> bool {
        self.user_id.as_deref().map(str::trim) == Some(user_id)
    }

    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty.as_deref().and_then(Difficulty::parse)
    }
}

/// The three difficulty columns of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Parse the dataset spelling. Matching is exact: `"easy"` is not
    /// recognized, mirroring the in-page script.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "EASY" => Some(Difficulty::Easy),
            "MEDIUM" => Some(Difficulty::Medium),
            "HARD" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Column heading used in the report table.
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "EASY"),
            Difficulty::Medium => write!(f, "MEDIUM"),
            Difficulty::Hard => write!(f, "HARD"),
        }
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}
