//! Read/write access to applicant, job and application records.

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::models::applicant::{
    ApplicantExperienceRow, ApplicantProfile, ApplicantSkillRow, ApplicationRow,
    ApplicationStatus,
};
use crate::models::job::{JobRequirement, JobRow};

/// Loads an applicant's skills and work history. `None` if the applicant does not exist.
/// Claims come back in insertion order, which decides ties between fuzzy matches.
pub async fn fetch_applicant_profile(
    pool: &PgPool,
    applicant_id: Uuid,
) -> Result<Option<ApplicantProfile>, sqlx::Error> {
    let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM applicants WHERE id = $1)")
        .bind(applicant_id)
        .fetch_one(pool)
        .await?;
    if !exists {
        return Ok(None);
    }

    let skills = sqlx::query_as::<_, ApplicantSkillRow>(
        "SELECT * FROM applicant_skills WHERE applicant_id = $1 ORDER BY id",
    )
    .bind(applicant_id)
    .fetch_all(pool)
    .await?;

    let experience = sqlx::query_as::<_, ApplicantExperienceRow>(
        "SELECT * FROM applicant_experience WHERE applicant_id = $1 ORDER BY id",
    )
    .bind(applicant_id)
    .fetch_all(pool)
    .await?;

    Ok(Some(ApplicantProfile {
        skills: skills.into_iter().map(Into::into).collect(),
        experience: experience.into_iter().map(Into::into).collect(),
    }))
}

/// Loads the matching-relevant part of a job posting.
pub async fn fetch_job_requirement(
    pool: &PgPool,
    job_id: Uuid,
) -> Result<Option<JobRequirement>, sqlx::Error> {
    let row = sqlx::query_as::<_, JobRow>("SELECT * FROM jobs WHERE id = $1")
        .bind(job_id)
        .fetch_optional(pool)
        .await?;
    Ok(row.map(Into::into))
}

/// Requirements of every job the applicant has an application for, oldest application first.
pub async fn fetch_applied_job_requirements(
    pool: &PgPool,
    applicant_id: Uuid,
) -> Result<Vec<JobRequirement>, sqlx::Error> {
    let rows = sqlx::query_as::<_, JobRow>(
        r#"
        SELECT j.*
        FROM jobs j
        JOIN applications a ON a.job_id = j.id
        WHERE a.applicant_id = $1
        ORDER BY a.applied_at, j.id
        "#,
    )
    .bind(applicant_id)
    .fetch_all(pool)
    .await?;
    Ok(rows.into_iter().map(Into::into).collect())
}

/// Stores `score` on the applicant's application for `job_id`.
///
/// An existing application keeps its status and only has its score replaced;
/// otherwise a new application is created with status `new`. Single statement,
/// so concurrent recomputations resolve to last-writer-wins.
pub async fn upsert_match_score(
    pool: &PgPool,
    applicant_id: Uuid,
    job_id: Uuid,
    score: u8,
) -> Result<ApplicationRow, sqlx::Error> {
    let row = sqlx::query_as::<_, ApplicationRow>(
        r#"
        INSERT INTO applications (id, applicant_id, job_id, match_score, status)
        VALUES ($1, $2, $3, $4, $5)
        ON CONFLICT (applicant_id, job_id)
        DO UPDATE SET match_score = EXCLUDED.match_score, updated_at = NOW()
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(applicant_id)
    .bind(job_id)
    .bind(i32::from(score))
    .bind(ApplicationStatus::New.as_str())
    .fetch_one(pool)
    .await?;

    info!("Stored match score {score} for applicant {applicant_id} on job {job_id}");
    Ok(row)
}
