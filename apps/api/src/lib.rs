//! SkillMatch: applicant-to-job match scoring and the HTTP service around it.
//!
//! The scoring core lives in [`matching`] and is usable without the service:
//!
//! ```
//! use skillmatch::matching::scorer::compute_match_score;
//! use skillmatch::models::applicant::{ApplicantProfile, ProficiencyLevel, SkillClaim};
//! use skillmatch::models::job::JobRequirement;
//!
//! let applicant = ApplicantProfile {
//!     skills: vec![SkillClaim {
//!         name: "JavaScript/React".to_string(),
//!         level: Some(ProficiencyLevel::Expert),
//!         years_of_experience: Some(5.0),
//!     }],
//!     experience: vec![],
//! };
//! let job = JobRequirement {
//!     required_skills: vec!["React".to_string()],
//!     experience_level: None,
//! };
//! assert_eq!(compute_match_score(&applicant, &job), 85);
//! ```

pub mod config;
pub mod db;
pub mod errors;
pub mod extract;
pub mod matching;
pub mod models;
pub mod routes;
pub mod state;
pub mod store;
