// Prompt and response-schema constants for the recommendation call.
// The schema does the heavy lifting (Gemini enforces it server-side);
// the prompt carries the classification contract the reconciler re-checks.

use serde_json::{json, Value};

use crate::models::profile::Profile;

/// Recommendation prompt. The SKILLS HAVE / SKILLS MISSING rules mirror the
/// reconciler's invariant — the model is asked to comply, the reconciler
/// guarantees it.
pub fn build_recommendation_prompt(profile: &Profile) -> String {
    let skills = profile
        .skills
        .iter()
        .map(|s| format!("{}: {}", s.name, s.rating))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        r#"As a Technical Talent Quant, perform a MATHEMATICAL MATCH between the user's skills and 3 career roles.

USER PROFILE:
- Major: {field}
- CGPA: {cgpa}/10
- Interests: {interests}
- SKILL LEVELS (1-5): {skills}

STRICT CONTENT RULES:
1. **SKILLS HAVE**: List ONLY skills the user rated **2, 3, 4, or 5**.
2. **SKILLS MISSING**: List CRITICAL skills the user rated **1**, OR simply did not list at all.
   - Example: If role allows Java but user has Java (1), it is a "Missing Skill".
3. NEVER mention numerical ratings like "5/5" in the text output.
4. Calculate 'matchPercentage' based ONLY on the count of 'Skills Have' vs total role requirements.
5. CRITICAL: Return exactly 3 DISTINCT career roles. Do NOT return similar roles.
   - Role 1: The absolute best match.
   - Role 2: A strong alternative.
   - Role 3: An emerging path.
6. STRICTLY SORT the output array by 'matchPercentage' in DESCENDING order.
7. CRITICAL: The 4-week 'roadmap' MUST BE UNIQUE AND HIGHLY SPECIFIC to the given 'roleName'.
   - Generate completely customized 'topics', 'tasks', and 'project' for every single role.
   - Do NOT use generic terms like "Foundations" or "Advanced Concepts". Use real technologies and role-specific jargon.
   - The technical blueprint for a Data Scientist should look completely different from a DevOps Engineer.

OUTPUT: Return exactly 3 recommendations in raw JSON format."#,
        field = profile.field,
        cgpa = profile.cgpa,
        interests = profile.interests.join(", "),
        skills = skills,
    )
}

/// Gemini response schema for the recommendation array — the REST form of
/// the structured-output config the generateContent API accepts.
pub fn recommendation_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "roleName": { "type": "STRING" },
                "matchPercentage": { "type": "NUMBER" },
                "reasons": { "type": "ARRAY", "items": { "type": "STRING" } },
                "skillsHave": { "type": "ARRAY", "items": { "type": "STRING" } },
                "skillsMissing": { "type": "ARRAY", "items": { "type": "STRING" } },
                "roadmap": {
                    "type": "ARRAY",
                    "items": {
                        "type": "OBJECT",
                        "properties": {
                            "week": { "type": "NUMBER" },
                            "topics": { "type": "ARRAY", "items": { "type": "STRING" } },
                            "tasks": { "type": "ARRAY", "items": { "type": "STRING" } },
                            "project": { "type": "STRING" }
                        }
                    }
                },
                "resourceLinks": {
                    "type": "ARRAY",
                    "items": {
                        "type": "OBJECT",
                        "properties": {
                            "title": { "type": "STRING" },
                            "url": { "type": "STRING" },
                            "category": { "type": "STRING" }
                        }
                    }
                }
            },
            "required": ["roleName", "matchPercentage", "reasons", "skillsHave", "skillsMissing", "roadmap"]
        }
    })
}
