//! Fallback Recommendation Engine — deterministic, dependency-free scorer
//! that ranks the candidate catalog against a profile. Total over any
//! well-formed profile: zero skills and zero interests still yield the top
//! three catalog roles, in catalog order.
//!
//! Scoring: `rating × 5` per case-insensitive keyword match (max 25 per
//! skill), flat `+20` per interest-tag match. Displayed percentage per rank
//! i is `min(95 − 7·i − jitter, 98)` — the 7-point step always exceeds the
//! 3-point jitter range, so ranks never invert.

use rand::Rng;

use crate::catalog::{CandidateRole, CAREER_PATHS};
use crate::models::profile::Profile;
use crate::models::recommendation::{Recommendation, ResourceLink, RoadmapWeek};

/// How many recommendations every source must produce.
pub const RECOMMENDATION_COUNT: usize = 3;

const MISSING_LIMIT: usize = 4;
const BASELINE_MISSING_LIMIT: usize = 3;

// ────────────────────────────────────────────────────────────────────────────
// Jitter seam
// ────────────────────────────────────────────────────────────────────────────

/// Bounded randomness applied to displayed match percentages, isolated as a
/// trait so tests can pin it. Carried in `AppState` as `Arc<dyn JitterSource>`.
pub trait JitterSource: Send + Sync {
    /// Draws an offset in [0, 3].
    fn draw(&self) -> u8;
}

pub struct RandomJitter;

impl JitterSource for RandomJitter {
    fn draw(&self) -> u8 {
        rand::thread_rng().gen_range(0..=3)
    }
}

/// Deterministic source for tests and reproducible runs.
pub struct FixedJitter(pub u8);

impl JitterSource for FixedJitter {
    fn draw(&self) -> u8 {
        self.0.min(3)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Scoring
// ────────────────────────────────────────────────────────────────────────────

struct ScoredPath {
    path: &'static CandidateRole,
    score: u32,
    matches: Vec<String>,
}

fn score_path(path: &'static CandidateRole, profile: &Profile) -> ScoredPath {
    let mut score = 0u32;
    let mut matches = Vec::new();

    for skill in &profile.skills {
        let is_match = path
            .keywords
            .iter()
            .any(|k| k.eq_ignore_ascii_case(&skill.name));
        if is_match {
            score += skill.rating as u32 * 5;
            matches.push(skill.name.clone());
        }
    }

    for interest in &profile.interests {
        if path.interests.iter().any(|i| *i == interest.as_str()) {
            score += 20;
        }
    }

    ScoredPath { path, score, matches }
}

/// Ranks the full catalog against the profile and returns the top three as
/// presentation-ready recommendations. Never fails.
pub fn fallback_recommendations(
    profile: &Profile,
    jitter: &dyn JitterSource,
) -> Vec<Recommendation> {
    let mut scored: Vec<ScoredPath> = CAREER_PATHS
        .iter()
        .map(|path| score_path(path, profile))
        .collect();

    // Stable sort: catalog order breaks ties.
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(RECOMMENDATION_COUNT);

    scored
        .into_iter()
        .enumerate()
        .map(|(rank, sp)| build_recommendation(profile, sp, rank, jitter))
        .collect()
}

fn build_recommendation(
    profile: &Profile,
    scored: ScoredPath,
    rank: usize,
    jitter: &dyn JitterSource,
) -> Recommendation {
    let path = scored.path;

    let jitter_value = i32::from(jitter.draw().min(3));
    let match_percentage = (95 - (rank as i32) * 7 - jitter_value).min(98);

    let skills_have: Vec<String> = profile
        .skills
        .iter()
        .filter(|s| s.rating >= 2)
        .filter(|s| path.keywords.iter().any(|k| k.eq_ignore_ascii_case(&s.name)))
        .map(|s| s.name.clone())
        .collect();

    let skills_missing = derive_missing(profile, path);

    let lead_reason = if scored.matches.is_empty() {
        format!("Aligned with your interest in {}.", path.interests[0])
    } else {
        let top: Vec<&str> = scored.matches.iter().take(3).map(String::as_str).collect();
        format!("Matches your proficiency in {}.", top.join(", "))
    };

    Recommendation {
        role_name: path.role.to_string(),
        match_percentage,
        reasons: vec![
            lead_reason,
            format!("Strong fit for your {} background.", profile.field),
            path.description.to_string(),
        ],
        skills_have,
        skills_missing,
        roadmap: build_roadmap(path),
        resource_links: vec![
            ResourceLink {
                title: format!("{} Roadmap", path.role),
                url: "https://roadmap.sh".to_string(),
                category: "Guide".to_string(),
            },
            ResourceLink {
                title: "FreeCodeCamp".to_string(),
                url: "https://freecodecamp.org".to_string(),
                category: "Course".to_string(),
            },
        ],
    }
}

/// Gap list, in priority order: keywords the user rated <= 1, keywords the
/// user never mentioned, then the role's baseline gaps — capped at 4. When
/// the profile gives no signal at all (no weak and no unmentioned keywords),
/// the baseline list alone is used, capped at 3.
fn derive_missing(profile: &Profile, path: &CandidateRole) -> Vec<String> {
    let weak: Vec<String> = profile
        .skills
        .iter()
        .filter(|s| s.rating <= 1)
        .filter(|s| path.keywords.iter().any(|k| k.eq_ignore_ascii_case(&s.name)))
        .map(|s| s.name.clone())
        .collect();

    let unmentioned: Vec<String> = path
        .keywords
        .iter()
        .filter(|k| {
            !profile
                .skills
                .iter()
                .any(|s| s.name.eq_ignore_ascii_case(k))
        })
        .map(|k| k.to_string())
        .collect();

    if weak.is_empty() && unmentioned.is_empty() {
        return path
            .missing
            .iter()
            .take(BASELINE_MISSING_LIMIT)
            .map(|s| s.to_string())
            .collect();
    }

    let mut combined = weak;
    combined.extend(unmentioned);
    combined.extend(path.missing.iter().map(|s| s.to_string()));
    combined.truncate(MISSING_LIMIT);
    combined
}

fn build_roadmap(path: &CandidateRole) -> Vec<RoadmapWeek> {
    // Catalog invariant: every path carries at least three keywords.
    let kw = |i: usize| path.keywords.get(i).copied().unwrap_or(path.role);

    vec![
        RoadmapWeek {
            week: 1,
            topics: vec![
                format!("{} Foundations", path.role),
                "Setup & Core Tools".to_string(),
            ],
            tasks: vec![
                format!("Review core concepts for {}", path.role),
                format!("Set up development environment containing {}", kw(0)),
                "Understand the ecosystem and main paradigms".to_string(),
            ],
            project: format!("{} Fundamentals Sandbox", path.role),
        },
        RoadmapWeek {
            week: 2,
            topics: vec![
                format!("Deep Dive: {}", kw(1)),
                format!("Building with {}", kw(2)),
            ],
            tasks: vec![
                "Build proof-of-concept application".to_string(),
                "Deep dive into advanced tools".to_string(),
                "Connect different components of the stack".to_string(),
            ],
            project: format!("{} System Design & Core Features", path.role),
        },
        RoadmapWeek {
            week: 3,
            topics: vec![
                "Advanced Concepts".to_string(),
                format!("Optimizing {}", kw(0)),
            ],
            tasks: vec![
                "Optimize performance and scaling".to_string(),
                "Implement industry best practices".to_string(),
                "Refactor code for real-world usage".to_string(),
            ],
            project: "Production-ready Feature Expansion".to_string(),
        },
        RoadmapWeek {
            week: 4,
            topics: vec![
                "Production Readiness".to_string(),
                "System Architecture & Deployment".to_string(),
            ],
            tasks: vec![
                "Testing, Debugging & Quality Assurance".to_string(),
                format!("Final Deployment as a {}", path.role),
                "Documenting technical decisions".to_string(),
            ],
            project: format!("{} Portfolio Showcase Implementation", path.role),
        },
    ]
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
