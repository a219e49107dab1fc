pub mod applicant;
pub mod job;
pub(crate) mod lenient;
