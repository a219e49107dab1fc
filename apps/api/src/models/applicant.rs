use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::lenient;

/// Self-declared proficiency tier on a skill claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProficiencyLevel {
    Basic,
    Intermediate,
    Advanced,
    Expert,
}

impl FromStr for ProficiencyLevel {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "basic" => Ok(Self::Basic),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            "expert" => Ok(Self::Expert),
            _ => Err(UnknownLabel(s.to_string())),
        }
    }
}

/// Returned when a stored or submitted enum label is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLabel(pub String);

impl fmt::Display for UnknownLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown label '{}'", self.0)
    }
}

impl std::error::Error for UnknownLabel {}

/// A single skill an applicant claims to have.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillClaim {
    #[serde(alias = "skill", default, deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::label")]
    pub level: Option<ProficiencyLevel>,
    #[serde(
        alias = "yearsOfExperience",
        default,
        deserialize_with = "lenient::number"
    )]
    pub years_of_experience: Option<f64>,
}

/// One position in an applicant's work history. `end_date = None` means ongoing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    #[serde(default, deserialize_with = "lenient::text")]
    pub position: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub company: String,
    #[serde(alias = "startDate", default, deserialize_with = "lenient::date")]
    pub start_date: Option<NaiveDate>,
    #[serde(alias = "endDate", default, deserialize_with = "lenient::date")]
    pub end_date: Option<NaiveDate>,
}

/// The slice of an applicant record the matcher reads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplicantProfile {
    #[serde(default, deserialize_with = "lenient::list")]
    pub skills: Vec<SkillClaim>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub experience: Vec<ExperienceEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ApplicantSkillRow {
    pub id: i64,
    pub applicant_id: Uuid,
    pub skill: String,
    pub level: Option<String>,
    pub years_of_experience: Option<f64>,
}

impl From<ApplicantSkillRow> for SkillClaim {
    fn from(row: ApplicantSkillRow) -> Self {
        SkillClaim {
            name: row.skill,
            level: row.level.as_deref().and_then(|l| l.parse().ok()),
            years_of_experience: row.years_of_experience,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ApplicantExperienceRow {
    pub id: i64,
    pub applicant_id: Uuid,
    pub position: String,
    pub company: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl From<ApplicantExperienceRow> for ExperienceEntry {
    fn from(row: ApplicantExperienceRow) -> Self {
        ExperienceEntry {
            position: row.position,
            company: row.company,
            start_date: row.start_date,
            end_date: row.end_date,
        }
    }
}

/// Application pipeline stage for one applicant–job pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    New,
    Shortlisted,
    Interview,
    Hired,
    Rejected,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Shortlisted => "shortlisted",
            Self::Interview => "interview",
            Self::Hired => "hired",
            Self::Rejected => "rejected",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ApplicationRow {
    pub id: Uuid,
    pub applicant_id: Uuid,
    pub job_id: Uuid,
    pub match_score: Option<i32>,
    pub status: String,
    pub applied_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
