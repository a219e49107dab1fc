use chrono::NaiveDate;

use crate::models::applicant::ExperienceEntry;
use crate::models::job::ExperienceLevel;

const DAYS_PER_YEAR: f64 = 365.0;

/// Bonus for meeting a tier's tenure requirement.
pub const MEETS_REQUIREMENT_BONUS: f64 = 10.0;
/// Extra bonus ceiling for tenure beyond the requirement.
pub const MAX_EXCESS_BONUS: f64 = 5.0;
/// Extra bonus per year of tenure beyond the requirement.
pub const EXCESS_BONUS_PER_YEAR: f64 = 0.75;
/// Ceiling of the partial credit given to applicants below the requirement.
pub const PARTIAL_CREDIT_SCALE: f64 = 6.0;

/// Years spanned by a single entry. Ongoing entries run until `today`.
/// Entries without a start date, or ending before they start, count as zero.
pub fn entry_years(entry: &ExperienceEntry, today: NaiveDate) -> f64 {
    let Some(start) = entry.start_date else {
        return 0.0;
    };
    let end = entry.end_date.unwrap_or(today);
    let years = (end - start).num_days() as f64 / DAYS_PER_YEAR;
    if years.is_finite() && years > 0.0 {
        years
    } else {
        0.0
    }
}

/// Total career tenure in years across all entries. Overlapping entries are summed.
pub fn total_tenure_years(entries: &[ExperienceEntry], today: NaiveDate) -> f64 {
    entries.iter().map(|e| entry_years(e, today)).sum()
}

/// Additive bonus for total tenure measured against the job's seniority tier.
///
/// - tenure ≥ required: 10 plus 0.75 per extra year, capped at 15
/// - tenure < required: partial credit `tenure / required * 6`
pub fn experience_bonus(tenure_years: f64, level: ExperienceLevel) -> f64 {
    let required = level.required_years();
    if tenure_years >= required {
        let extra =
            ((tenure_years - required).max(0.0) * EXCESS_BONUS_PER_YEAR).min(MAX_EXCESS_BONUS);
        MEETS_REQUIREMENT_BONUS + extra
    } else if required > 0.0 {
        (tenure_years / required * PARTIAL_CREDIT_SCALE).max(0.0)
    } else {
        0.0
    }
}
