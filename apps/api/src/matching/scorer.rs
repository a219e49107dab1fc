//! Match Scoring — pluggable, trait-based scorer that measures an applicant profile
//! against a job's requirements and produces a 0–100 match score.
//!
//! Default: `WeightedSkillScorer` (pure, deterministic for a fixed reference date).
//!
//! `AppState` holds an `Arc<dyn MatchScorer>`, so handlers never depend on the backend.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::matching::experience::{experience_bonus, total_tenure_years};
use crate::matching::skill_match::{match_skill, normalize_claims, normalize_skill, MatchTier};
use crate::matching::weights::{level_weight, years_weight};
use crate::models::applicant::{ApplicantProfile, ProficiencyLevel};
use crate::models::job::JobRequirement;

pub const MAX_SCORE: u8 = 100;

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

/// A required skill satisfied by one of the applicant's claims.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillMatch {
    pub required: String,
    pub claimed: String,
    pub tier: MatchTier,
    pub level: Option<ProficiencyLevel>,
    pub level_weight: f64,
    pub years_weight: f64,
    pub contribution: f64, // level_weight × years_weight
}

/// Full scoring breakdown returned to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchReport {
    pub match_score: u8,         // 0 – 100
    pub base_score: f64,         // skill component, 0.0 – 100.0
    pub experience_bonus: f64,   // 0.0 – 15.0
    pub tenure_years: f64,       // 0.0 when no bonus was attempted
    pub matched_skills: Vec<SkillMatch>,
    pub skill_gaps: Vec<String>, // required skills no claim covers
    pub recommendation: String,
    pub scorer_backend: String, // "weighted"
}

impl MatchReport {
    /// Report for inputs with nothing to score against.
    pub fn empty(recommendation: &str) -> Self {
        MatchReport {
            match_score: 0,
            base_score: 0.0,
            experience_bonus: 0.0,
            tenure_years: 0.0,
            matched_skills: vec![],
            skill_gaps: vec![],
            recommendation: recommendation.to_string(),
            scorer_backend: WeightedSkillScorer::BACKEND.to_string(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// The match scorer trait. Implement this to swap backends without touching
/// the endpoint or handler code.
///
/// Carried in `AppState` as `Arc<dyn MatchScorer>`.
pub trait MatchScorer: Send + Sync {
    /// Scores `applicant` against `job`. Ongoing experience entries run until `today`.
    fn score(
        &self,
        applicant: &ApplicantProfile,
        job: &JobRequirement,
        today: NaiveDate,
    ) -> MatchReport;
}

// ────────────────────────────────────────────────────────────────────────────
// WeightedSkillScorer — default implementation
// ────────────────────────────────────────────────────────────────────────────

/// Weighted fuzzy skill matcher with a career-tenure bonus.
///
/// Algorithm:
/// 1. For each non-blank required skill, find a claim (exact → substring → token)
///    and credit `level_weight × years_weight`; unmatched skills credit 0.
/// 2. base = Σ credit / required_count × 100
/// 3. If the job names a seniority tier and the applicant lists experience,
///    add the tenure bonus (0 – 15).
/// 4. match_score = round(min(100, base + bonus)), half away from zero.
pub struct WeightedSkillScorer;

impl WeightedSkillScorer {
    pub const BACKEND: &'static str = "weighted";
}

impl MatchScorer for WeightedSkillScorer {
    fn score(
        &self,
        applicant: &ApplicantProfile,
        job: &JobRequirement,
        today: NaiveDate,
    ) -> MatchReport {
        score_report(applicant, job, today)
    }
}

/// Computes the match score using today's date for ongoing experience.
pub fn compute_match_score(applicant: &ApplicantProfile, job: &JobRequirement) -> u8 {
    compute_match_score_at(applicant, job, Utc::now().date_naive())
}

/// Computes the match score with an explicit reference date.
pub fn compute_match_score_at(
    applicant: &ApplicantProfile,
    job: &JobRequirement,
    today: NaiveDate,
) -> u8 {
    score_report(applicant, job, today).match_score
}

// ────────────────────────────────────────────────────────────────────────────
// Core scoring algorithm
// ────────────────────────────────────────────────────────────────────────────

/// Full breakdown behind [`compute_match_score_at`].
pub fn score_report(
    applicant: &ApplicantProfile,
    job: &JobRequirement,
    today: NaiveDate,
) -> MatchReport {
    let required: Vec<(&str, String)> = job
        .required_skills
        .iter()
        .map(|s| s.trim())
        .filter_map(|s| normalize_skill(s).map(|norm| (s, norm)))
        .collect();

    if required.is_empty() {
        return MatchReport::empty("Job lists no required skills; nothing to match against.");
    }

    let claims = normalize_claims(&applicant.skills);

    let mut matched_skills = Vec::new();
    let mut skill_gaps = Vec::new();
    let mut total_credit = 0.0_f64;

    for (label, norm) in &required {
        match match_skill(norm, &claims) {
            Some(hit) => {
                let lw = level_weight(hit.claim.level);
                let yw = years_weight(hit.claim.years_of_experience);
                let contribution = lw * yw;
                total_credit += contribution;
                matched_skills.push(SkillMatch {
                    required: label.to_string(),
                    claimed: hit.claim.name.clone(),
                    tier: hit.tier,
                    level: hit.claim.level,
                    level_weight: lw,
                    years_weight: yw,
                    contribution,
                });
            }
            None => skill_gaps.push(label.to_string()),
        }
    }

    let base_score = total_credit / required.len() as f64 * 100.0;

    let (tenure_years, bonus) = match job.experience_level {
        Some(level) if !applicant.experience.is_empty() => {
            let tenure = total_tenure_years(&applicant.experience, today);
            (tenure, experience_bonus(tenure, level))
        }
        _ => (0.0, 0.0),
    };

    let match_score = (base_score + bonus)
        .clamp(0.0, f64::from(MAX_SCORE))
        .round() as u8;

    debug!(
        match_score,
        base_score,
        experience_bonus = bonus,
        matched = matched_skills.len(),
        gaps = skill_gaps.len(),
        "Scored applicant against job"
    );

    let recommendation = build_recommendation(match_score, &skill_gaps);

    MatchReport {
        match_score,
        base_score,
        experience_bonus: bonus,
        tenure_years,
        matched_skills,
        skill_gaps,
        recommendation,
        scorer_backend: WeightedSkillScorer::BACKEND.to_string(),
    }
}

/// Builds a human-readable recommendation string from score and gaps.
fn build_recommendation(score: u8, gaps: &[String]) -> String {
    let top_gaps: Vec<&str> = gaps.iter().take(3).map(String::as_str).collect();

    if score >= 80 {
        "Strong match. The applicant covers the key requirements.".to_string()
    } else if top_gaps.is_empty() {
        format!("Partial match ({score}/100). All skills present but at low depth or tenure.")
    } else if score >= 50 {
        format!(
            "Partial match ({score}/100). Missing: {}.",
            top_gaps.join(", ")
        )
    } else {
        format!(
            "Weak match ({score}/100). Significant gaps: {}.",
            top_gaps.join(", ")
        )
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
