//! Skill-name matching between a job's required skills and an applicant's claims.
//!
//! Free-text labels on both sides are compared case-insensitively with three
//! tiers, tried in order: exact equality, substring containment (either
//! direction), then token equality after splitting the claim on any run of
//! non-alphanumeric characters.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::models::applicant::SkillClaim;

/// How a required skill was satisfied by a claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    Exact,
    Substring,
    Token,
}

/// A claim paired with its normalized (trimmed, lower-cased) name.
#[derive(Debug, Clone)]
pub struct NormalizedClaim<'a> {
    pub claim: &'a SkillClaim,
    pub norm: String,
}

/// A required skill resolved against one claim.
#[derive(Debug, Clone, Copy)]
pub struct SkillHit<'a> {
    pub claim: &'a SkillClaim,
    pub tier: MatchTier,
}

/// Trims and lower-cases a skill label. Returns `None` for blank labels.
pub fn normalize_skill(raw: &str) -> Option<String> {
    let norm = raw.trim().to_lowercase();
    if norm.is_empty() {
        None
    } else {
        Some(norm)
    }
}

/// Normalizes every claim name, dropping claims whose name is blank.
pub fn normalize_claims(claims: &[SkillClaim]) -> Vec<NormalizedClaim<'_>> {
    claims
        .iter()
        .filter_map(|claim| {
            normalize_skill(&claim.name).map(|norm| NormalizedClaim { claim, norm })
        })
        .collect()
}

fn tokens(norm: &str) -> impl Iterator<Item = &str> {
    norm.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
}

fn tier_for(required: &str, claim: &str) -> Option<MatchTier> {
    if claim == required {
        Some(MatchTier::Exact)
    } else if claim.contains(required) || required.contains(claim) {
        Some(MatchTier::Substring)
    } else if tokens(claim).any(|t| t == required) {
        // Unreachable in practice: a token equal to `required` is also a substring.
        Some(MatchTier::Token)
    } else {
        None
    }
}

/// Finds the claim satisfying `required` (already normalized).
///
/// An exact match anywhere in the list beats a fuzzy match earlier in the list.
/// Among fuzzy matches the first claim in list order wins.
pub fn match_skill<'a>(required: &str, claims: &[NormalizedClaim<'a>]) -> Option<SkillHit<'a>> {
    if required.is_empty() {
        return None;
    }

    if let Some(c) = claims.iter().find(|c| c.norm == required) {
        return Some(SkillHit {
            claim: c.claim,
            tier: MatchTier::Exact,
        });
    }

    claims.iter().find_map(|c| {
        if c.norm.is_empty() {
            return None;
        }
        tier_for(required, &c.norm).map(|tier| SkillHit {
            claim: c.claim,
            tier,
        })
    })
}

/// Required skills (trimmed, original spelling) that no claim covers.
/// Duplicates are reported once, case-insensitively, in first-seen order.
pub fn uncovered_skills<'r>(
    required: impl IntoIterator<Item = &'r str>,
    claims: &[SkillClaim],
) -> Vec<String> {
    let normalized = normalize_claims(claims);
    let mut seen = HashSet::new();
    let mut gaps = Vec::new();

    for label in required {
        let label = label.trim();
        let Some(norm) = normalize_skill(label) else {
            continue;
        };
        if !seen.insert(norm.clone()) {
            continue;
        }
        if match_skill(&norm, &normalized).is_none() {
            gaps.push(label.to_string());
        }
    }

    gaps
}
