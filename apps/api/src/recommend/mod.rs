//! Recommendation pipeline — orchestrates source selection and the
//! consistency pass.
//!
//! Flow: profile → {Gemini adapter | fallback engine} → reconcile →
//!       sort by match descending → caller.
//!
//! The pipeline is total: every failure of the external service resolves to
//! the fallback engine, and the caller always receives 3 reconciled
//! recommendations.

pub mod fallback;
pub mod reconcile;

use std::time::Duration;

use tracing::{info, warn};

use crate::llm_client::prompts::{build_recommendation_prompt, recommendation_schema};
use crate::llm_client::{GeminiClient, LlmError};
use crate::models::profile::Profile;
use crate::models::recommendation::Recommendation;
use crate::recommend::fallback::{fallback_recommendations, JitterSource, RECOMMENDATION_COUNT};

/// Artificial latency for demo mode (no API key), so the client's progress
/// UI behaves the same with and without a configured service.
const DEMO_MODE_DELAY: Duration = Duration::from_millis(1500);

/// Produces the final recommendation set for one assessment submission.
/// Infallible by contract: external failures are absorbed here.
pub async fn career_recommendations(
    llm: Option<&GeminiClient>,
    profile: &Profile,
    jitter: &dyn JitterSource,
) -> Vec<Recommendation> {
    let raw = match llm {
        None => {
            warn!("No Gemini API key configured — serving fallback recommendations in demo mode");
            tokio::time::sleep(DEMO_MODE_DELAY).await;
            fallback_recommendations(profile, jitter)
        }
        Some(client) => match generate_via_llm(client, profile).await {
            Ok(recs) => {
                info!("Gemini returned {} recommendations", recs.len());
                recs
            }
            Err(e) => {
                warn!("Gemini request failed, switching to fallback generator: {e}");
                fallback_recommendations(profile, jitter)
            }
        },
    };

    // Every set passes through the reconciler, whatever its origin.
    let mut recommendations = reconcile::reconcile(profile, raw);

    // Present highest match first; stable, so equal percentages keep
    // source order.
    recommendations.sort_by(|a, b| b.match_percentage.cmp(&a.match_percentage));
    recommendations
}

/// Asks Gemini for exactly 3 recommendations. A parse success with the
/// wrong cardinality is still an adapter failure — the contract upstream
/// is "3 usable recommendations", not "whatever came back".
async fn generate_via_llm(
    client: &GeminiClient,
    profile: &Profile,
) -> Result<Vec<Recommendation>, LlmError> {
    let prompt = build_recommendation_prompt(profile);
    let recommendations: Vec<Recommendation> = client
        .generate_json(&prompt, recommendation_schema())
        .await?;

    if recommendations.len() != RECOMMENDATION_COUNT {
        return Err(LlmError::UnexpectedCount {
            count: recommendations.len(),
            expected: RECOMMENDATION_COUNT,
        });
    }

    Ok(recommendations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::{SkillRating, UserType};
    use crate::recommend::fallback::FixedJitter;

    fn make_profile() -> Profile {
        Profile {
            user_type: UserType::CurrentStudent,
            field: "AIML".to_string(),
            cgpa: 8.2,
            interests: vec!["AI/ML".to_string()],
            skills: vec![
                SkillRating { name: "Python".to_string(), rating: 5 },
                SkillRating { name: "React".to_string(), rating: 1 },
            ],
            aptitude_score: 72,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_missing_credential_yields_reconciled_fallback() {
        // Scenario D (credential path): the pipeline output must be exactly
        // the reconciled fallback output for the same profile and jitter.
        let profile = make_profile();
        let jitter = FixedJitter(0);

        let got = career_recommendations(None, &profile, &jitter).await;

        let mut expected =
            reconcile::reconcile(&profile, fallback_recommendations(&profile, &jitter));
        expected.sort_by(|a, b| b.match_percentage.cmp(&a.match_percentage));

        assert_eq!(got, expected);
        assert_eq!(got.len(), RECOMMENDATION_COUNT);
    }

    #[tokio::test(start_paused = true)]
    async fn test_output_sorted_non_increasing() {
        let profile = make_profile();
        let got = career_recommendations(None, &profile, &FixedJitter(3)).await;
        for pair in got.windows(2) {
            assert!(pair[0].match_percentage >= pair[1].match_percentage);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_partition_holds_end_to_end() {
        let profile = make_profile();
        let got = career_recommendations(None, &profile, &FixedJitter(1)).await;
        for rec in &got {
            assert!(!rec.skills_have.iter().any(|s| s.eq_ignore_ascii_case("react")));
            assert!(rec.skills_missing.len() <= 6);
            for have in &rec.skills_have {
                assert!(!rec.skills_missing.iter().any(|m| m.eq_ignore_ascii_case(have)));
            }
        }
    }
}
