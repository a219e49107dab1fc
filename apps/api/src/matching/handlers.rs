//! Axum route handlers for the Matching API.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::extract::ApiJson;
use crate::matching::scorer::MatchReport;
use crate::matching::skill_match::uncovered_skills;
use crate::models::applicant::{ApplicantProfile, ApplicationRow};
use crate::models::job::JobRequirement;
use crate::models::lenient;
use crate::state::AppState;
use crate::store;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct MatchScoreRequest {
    #[serde(default, deserialize_with = "lenient::record")]
    pub applicant: Option<ApplicantProfile>,
    #[serde(default, deserialize_with = "lenient::record")]
    pub job: Option<JobRequirement>,
    /// Reference date for ongoing experience entries. Defaults to today (UTC).
    #[serde(default, alias = "asOf", deserialize_with = "lenient::date")]
    pub as_of: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub struct ComputeMatchResponse {
    pub match_score: u8,
    pub application: ApplicationRow,
    pub report: MatchReport,
}

#[derive(Debug, Serialize)]
pub struct SkillGapsResponse {
    pub applicant_id: Uuid,
    pub skill_gaps: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/match-score
///
/// Scores an inline applicant profile against an inline job requirement.
/// Nothing is read from or written to the database. A missing `applicant` or
/// `job` scores 0 instead of failing. Only an unparseable body is rejected (400).
pub async fn handle_match_score(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<MatchScoreRequest>,
) -> Json<MatchReport> {
    let (Some(applicant), Some(job)) = (request.applicant, request.job) else {
        return Json(MatchReport::empty(
            "Applicant or job missing; score defaults to 0.",
        ));
    };

    let today = request.as_of.unwrap_or_else(|| Utc::now().date_naive());
    Json(state.scorer.score(&applicant, &job, today))
}

/// POST /api/v1/applicants/:id/compute-match/:job_id
///
/// Scores a stored applicant against a stored job and persists the score onto
/// their application, creating the application if it does not exist yet.
pub async fn handle_compute_match(
    State(state): State<AppState>,
    Path((applicant_id, job_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<ComputeMatchResponse>, AppError> {
    let applicant = store::fetch_applicant_profile(&state.db, applicant_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Applicant {applicant_id} not found")))?;

    let job = store::fetch_job_requirement(&state.db, job_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job {job_id} not found")))?;

    let report = state
        .scorer
        .score(&applicant, &job, Utc::now().date_naive());

    let application =
        store::upsert_match_score(&state.db, applicant_id, job_id, report.match_score).await?;

    info!(
        "Computed match score {} for applicant {applicant_id} on job {job_id} ({} gaps)",
        report.match_score,
        report.skill_gaps.len()
    );

    Ok(Json(ComputeMatchResponse {
        match_score: report.match_score,
        application,
        report,
    }))
}

/// GET /api/v1/applicants/:id/skill-gaps
///
/// Required skills across all jobs the applicant applied to that none of their
/// claims cover.
pub async fn handle_skill_gaps(
    State(state): State<AppState>,
    Path(applicant_id): Path<Uuid>,
) -> Result<Json<SkillGapsResponse>, AppError> {
    let applicant = store::fetch_applicant_profile(&state.db, applicant_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Applicant {applicant_id} not found")))?;

    let jobs = store::fetch_applied_job_requirements(&state.db, applicant_id).await?;

    let skill_gaps = uncovered_skills(
        jobs.iter()
            .flat_map(|job| job.required_skills.iter().map(String::as_str)),
        &applicant.skills,
    );

    Ok(Json(SkillGapsResponse {
        applicant_id,
        skill_gaps,
    }))
}
