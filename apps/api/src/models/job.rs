use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::applicant::UnknownLabel;
use crate::models::lenient;

/// Seniority tier a job posting asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    Entry,
    Mid,
    Senior,
    Lead,
}

impl ExperienceLevel {
    /// Years of total career tenure this tier expects.
    pub fn required_years(&self) -> f64 {
        match self {
            Self::Entry => 0.0,
            Self::Mid => 3.0,
            Self::Senior => 7.0,
            Self::Lead => 10.0,
        }
    }
}

impl FromStr for ExperienceLevel {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "entry" => Ok(Self::Entry),
            "mid" => Ok(Self::Mid),
            "senior" => Ok(Self::Senior),
            "lead" => Ok(Self::Lead),
            _ => Err(UnknownLabel(s.to_string())),
        }
    }
}

/// The slice of a job posting the matcher reads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobRequirement {
    #[serde(
        alias = "requiredSkills",
        default,
        deserialize_with = "lenient::text_list"
    )]
    pub required_skills: Vec<String>,
    #[serde(
        alias = "experienceLevel",
        default,
        deserialize_with = "lenient::label"
    )]
    pub experience_level: Option<ExperienceLevel>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobRow {
    pub id: Uuid,
    pub employer_id: Uuid,
    pub title: String,
    pub required_skills: Vec<String>,
    pub experience_level: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<JobRow> for JobRequirement {
    fn from(row: JobRow) -> Self {
        JobRequirement {
            required_skills: row.required_skills,
            experience_level: row.experience_level.as_deref().and_then(|l| l.parse().ok()),
        }
    }
}
