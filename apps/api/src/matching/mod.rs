// Applicant-to-job matching: skill matching, weight tables, tenure bonus, scoring.
// Everything below `handlers` is pure and framework-free.

pub mod experience;
pub mod handlers;
pub mod scorer;
pub mod skill_match;
pub mod weights;
