use crate::models::applicant::ProficiencyLevel;

/// Years of per-skill experience beyond which the years weight stops growing.
pub const YEARS_CAP: f64 = 8.0;

/// Weight applied when a claim carries no recognised proficiency level.
pub const UNSPECIFIED_LEVEL_WEIGHT: f64 = 0.65;

/// Multiplier for a claimed proficiency tier.
pub fn level_weight(level: Option<ProficiencyLevel>) -> f64 {
    match level {
        Some(ProficiencyLevel::Expert) => 1.0,
        Some(ProficiencyLevel::Advanced) => 0.85,
        Some(ProficiencyLevel::Intermediate) => 0.7,
        Some(ProficiencyLevel::Basic) => 0.55,
        None => UNSPECIFIED_LEVEL_WEIGHT,
    }
}

/// Multiplier for years of experience with a skill: 0 years → 0.6, 8+ years → 1.0.
/// Absent, negative or NaN years count as zero.
pub fn years_weight(years: Option<f64>) -> f64 {
    let years = match years {
        Some(y) if !y.is_nan() => y.clamp(0.0, YEARS_CAP),
        _ => 0.0,
    };
    0.6 + (years / YEARS_CAP) * 0.4
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_weights() {
        assert_eq!(level_weight(Some(ProficiencyLevel::Expert)), 1.0);
        assert_eq!(level_weight(Some(ProficiencyLevel::Advanced)), 0.85);
        assert_eq!(level_weight(Some(ProficiencyLevel::Intermediate)), 0.7);
        assert_eq!(level_weight(Some(ProficiencyLevel::Basic)), 0.55);
        assert_eq!(level_weight(None), 0.65);
    }

    #[test]
    fn test_years_weight_endpoints() {
        assert!((years_weight(Some(0.0)) - 0.6).abs() < 1e-9);
        assert!((years_weight(Some(8.0)) - 1.0).abs() < 1e-9);
        assert!((years_weight(Some(5.0)) - 0.85).abs() < 1e-9);
    }

    #[test]
    fn test_years_weight_clamps() {
        assert_eq!(years_weight(Some(20.0)), years_weight(Some(8.0)));
        assert_eq!(years_weight(Some(-3.0)), years_weight(Some(0.0)));
        assert_eq!(years_weight(None), years_weight(Some(0.0)));
        assert_eq!(years_weight(Some(f64::NAN)), years_weight(Some(0.0)));
        assert_eq!(years_weight(Some(f64::INFINITY)), years_weight(Some(8.0)));
    }

    #[test]
    fn test_years_weight_is_monotone() {
        let mut prev = years_weight(Some(0.0));
        for tenth in 1..=120 {
            let w = years_weight(Some(tenth as f64 / 10.0));
            assert!(w >= prev, "weight dropped at {} years", tenth as f64 / 10.0);
            prev = w;
        }
    }

    #[test]
    fn test_contribution_bounds() {
        let lowest = level_weight(Some(ProficiencyLevel::Basic)) * years_weight(Some(0.0));
        let highest = level_weight(Some(ProficiencyLevel::Expert)) * years_weight(Some(8.0));
        assert!((lowest - 0.33).abs() < 1e-9, "lowest was {lowest}");
        assert!((highest - 1.0).abs() < 1e-9);
    }
}
