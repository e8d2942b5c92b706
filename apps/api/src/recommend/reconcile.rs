//! Recommendation Reconciler — the single enforcement point for skill
//! classification. Generative output misplaces skills often enough that the
//! rule lives here, not in the prompt: a skill belongs in `skills_have` iff
//! the profile rates it >= 2; otherwise (rated <= 1, or never rated) it
//! belongs in `skills_missing`. Pure function of (profile, recommendations),
//! idempotent, and runs on EVERY recommendation set regardless of origin —
//! on compliant fallback output it is a no-op.

use std::collections::{HashMap, HashSet};

use crate::models::profile::Profile;
use crate::models::recommendation::Recommendation;

/// UI clutter cap on the gap list.
const MISSING_CAP: usize = 6;

pub fn reconcile(profile: &Profile, recommendations: Vec<Recommendation>) -> Vec<Recommendation> {
    let strengths = profile.strengths();
    let casing = profile.casing_map();

    recommendations
        .into_iter()
        .map(|rec| reconcile_one(&strengths, &casing, rec))
        .collect()
}

fn reconcile_one(
    strengths: &HashSet<String>,
    casing: &HashMap<String, String>,
    rec: Recommendation,
) -> Recommendation {
    // Strengths: anything the source put in either list that the user
    // actually rated >= 2. A strength misfiled under "missing" is relocated.
    let skills_have = collect_partition(
        rec.skills_have.iter().chain(rec.skills_missing.iter()),
        |lower| strengths.contains(lower),
        casing,
    );

    // Gaps: everything else, with misfiled non-strengths relocated out of
    // "have". Earliest-seen entries win the cap.
    let mut skills_missing = collect_partition(
        rec.skills_missing.iter().chain(rec.skills_have.iter()),
        |lower| !strengths.contains(lower),
        casing,
    );
    skills_missing.truncate(MISSING_CAP);

    Recommendation {
        skills_have,
        skills_missing,
        ..rec
    }
}

/// Filters the candidate names through `belongs`, deduplicating
/// case-insensitively (first occurrence wins) and restoring the profile's
/// display casing where the skill is known.
fn collect_partition<'a>(
    candidates: impl Iterator<Item = &'a String>,
    belongs: impl Fn(&str) -> bool,
    casing: &HashMap<String, String>,
) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for name in candidates {
        let lower = name.to_lowercase();
        if belongs(&lower) && seen.insert(lower.clone()) {
            out.push(casing.get(&lower).cloned().unwrap_or_else(|| name.clone()));
        }
    }
    out
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::{SkillRating, UserType};
    use crate::recommend::fallback::{fallback_recommendations, FixedJitter};

    fn make_profile(skills: Vec<(&str, u8)>) -> Profile {
        Profile {
            user_type: UserType::JobSeeker,
            field: "CSE".to_string(),
            cgpa: 7.5,
            interests: vec![],
            skills: skills
                .into_iter()
                .map(|(name, rating)| SkillRating { name: name.to_string(), rating })
                .collect(),
            aptitude_score: 60,
        }
    }

    fn make_rec(have: Vec<&str>, missing: Vec<&str>) -> Recommendation {
        Recommendation {
            role_name: "Backend Engineer".to_string(),
            match_percentage: 90,
            reasons: vec!["Strong server-side profile.".to_string()],
            skills_have: have.into_iter().map(String::from).collect(),
            skills_missing: missing.into_iter().map(String::from).collect(),
            roadmap: vec![],
            resource_links: vec![],
        }
    }

    #[test]
    fn test_misplaced_strength_is_relocated_to_have() {
        // Scenario C: a skill rated 4 wrongly listed as missing.
        let profile = make_profile(vec![("Python", 4)]);
        let recs = reconcile(&profile, vec![make_rec(vec![], vec!["Python", "Kafka"])]);

        assert_eq!(recs[0].skills_have, vec!["Python"]);
        assert_eq!(recs[0].skills_missing, vec!["Kafka"]);
    }

    #[test]
    fn test_misplaced_weakness_is_relocated_to_missing() {
        let profile = make_profile(vec![("Java", 1), ("Python", 3)]);
        let recs = reconcile(&profile, vec![make_rec(vec!["Python", "Java"], vec![])]);

        assert_eq!(recs[0].skills_have, vec!["Python"]);
        assert_eq!(recs[0].skills_missing, vec!["Java"]);
    }

    #[test]
    fn test_unrated_skill_never_counts_as_strength() {
        let profile = make_profile(vec![("Python", 5)]);
        let recs = reconcile(&profile, vec![make_rec(vec!["Python", "Rust"], vec![])]);

        assert_eq!(recs[0].skills_have, vec!["Python"]);
        assert_eq!(recs[0].skills_missing, vec!["Rust"]);
    }

    #[test]
    fn test_idempotent() {
        let profile = make_profile(vec![("Python", 4), ("Java", 1), ("SQL", 2)]);
        let raw = vec![
            make_rec(vec!["Java", "python"], vec!["SQL", "Kafka", "Docker"]),
            make_rec(vec![], vec!["python", "AWS"]),
        ];

        let once = reconcile(&profile, raw);
        let twice = reconcile(&profile, once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_dedup_is_case_insensitive_and_restores_profile_casing() {
        let profile = make_profile(vec![("TensorFlow", 5)]);
        let recs = reconcile(
            &profile,
            vec![make_rec(vec!["tensorflow", "TENSORFLOW"], vec!["Tensorflow"])],
        );

        assert_eq!(recs[0].skills_have, vec!["TensorFlow"]);
        assert!(recs[0].skills_missing.is_empty());
    }

    #[test]
    fn test_unknown_skill_keeps_source_casing() {
        let profile = make_profile(vec![]);
        let recs = reconcile(&profile, vec![make_rec(vec![], vec!["GraphQL"])]);
        assert_eq!(recs[0].skills_missing, vec!["GraphQL"]);
    }

    #[test]
    fn test_missing_capped_at_six_earliest_kept() {
        let profile = make_profile(vec![]);
        let raw = make_rec(
            vec![],
            vec!["A", "B", "C", "D", "E", "F", "G", "H"],
        );
        let recs = reconcile(&profile, vec![raw]);
        assert_eq!(recs[0].skills_missing, vec!["A", "B", "C", "D", "E", "F"]);
    }

    #[test]
    fn test_no_synthetic_backfill_without_strengths() {
        // Every skill rated 1: skills_have must come back empty, never guessed.
        let profile = make_profile(vec![("Python", 1), ("SQL", 1)]);
        let recs = reconcile(
            &profile,
            vec![make_rec(vec!["Python", "SQL", "Go"], vec![])],
        );
        assert!(recs[0].skills_have.is_empty());
        assert_eq!(recs[0].skills_missing, vec!["Python", "SQL", "Go"]);
    }

    #[test]
    fn test_partition_is_exclusive() {
        let profile = make_profile(vec![("Python", 3), ("Java", 1)]);
        let recs = reconcile(
            &profile,
            vec![make_rec(vec!["Python", "Java"], vec!["Python", "Java"])],
        );

        for rec in &recs {
            for have in &rec.skills_have {
                assert!(!rec
                    .skills_missing
                    .iter()
                    .any(|m| m.eq_ignore_ascii_case(have)));
            }
        }
        assert_eq!(recs[0].skills_have, vec!["Python"]);
        assert_eq!(recs[0].skills_missing, vec!["Java"]);
    }

    #[test]
    fn test_other_fields_pass_through_untouched() {
        let profile = make_profile(vec![("Python", 4)]);
        let raw = make_rec(vec!["Python"], vec![]);
        let recs = reconcile(&profile, vec![raw.clone()]);

        assert_eq!(recs[0].role_name, raw.role_name);
        assert_eq!(recs[0].match_percentage, raw.match_percentage);
        assert_eq!(recs[0].reasons, raw.reasons);
        assert_eq!(recs[0].roadmap, raw.roadmap);
        assert_eq!(recs[0].resource_links, raw.resource_links);
    }

    #[test]
    fn test_noop_on_compliant_fallback_output() {
        let profile = make_profile(vec![("Python", 5), ("React", 1), ("aws", 3)]);
        let raw = fallback_recommendations(&profile, &FixedJitter(2));
        let reconciled = reconcile(&profile, raw.clone());
        assert_eq!(raw, reconciled);
    }
}
