use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

/// How far along the user is in their career. Wire values are the display
/// strings the assessment form submits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserType {
    #[serde(rename = "Current Student")]
    CurrentStudent,
    #[serde(rename = "Job Seeker")]
    JobSeeker,
    #[serde(rename = "Working Professional")]
    WorkingProfessional,
}

/// A single self-reported skill rating, 1 (aware) to 5 (expert).
/// A skill absent from the profile is "unrated" — not the same as 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillRating {
    pub name: String,
    pub rating: u8,
}

/// One assessment submission. Immutable once normalized — the recommendation
/// pipeline only ever reads it; a new submission creates a new Profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub user_type: UserType,
    pub field: String,
    pub cgpa: f64,
    pub interests: Vec<String>,
    pub skills: Vec<SkillRating>,
    pub aptitude_score: u8,
}

impl Profile {
    /// Checks the numeric ranges the assessment form is supposed to enforce.
    /// Returns the first violation as a user-facing message.
    pub fn validate(&self) -> Result<(), String> {
        if !(4.0..=10.0).contains(&self.cgpa) {
            return Err(format!("CGPA must be between 4.0 and 10.0, got {}", self.cgpa));
        }
        if self.aptitude_score > 100 {
            return Err(format!(
                "Aptitude score must be between 0 and 100, got {}",
                self.aptitude_score
            ));
        }
        for skill in &self.skills {
            if !(1..=5).contains(&skill.rating) {
                return Err(format!(
                    "Skill '{}' has rating {}; ratings must be between 1 and 5",
                    skill.name, skill.rating
                ));
            }
        }
        Ok(())
    }

    /// Collapses case-insensitive duplicate skill names (last write wins,
    /// first-seen position kept) and duplicate interests (first wins).
    pub fn normalized(mut self) -> Self {
        let mut index_by_name: HashMap<String, usize> = HashMap::new();
        let mut skills: Vec<SkillRating> = Vec::with_capacity(self.skills.len());
        for skill in self.skills.drain(..) {
            match index_by_name.get(&skill.name.to_lowercase()) {
                Some(&i) => skills[i] = skill,
                None => {
                    index_by_name.insert(skill.name.to_lowercase(), skills.len());
                    skills.push(skill);
                }
            }
        }
        self.skills = skills;

        let mut seen = HashSet::new();
        self.interests.retain(|i| seen.insert(i.clone()));
        self
    }

    /// Lowercased names of skills rated >= 2 — the user's confirmed strengths.
    pub fn strengths(&self) -> HashSet<String> {
        self.skills
            .iter()
            .filter(|s| s.rating >= 2)
            .map(|s| s.name.to_lowercase())
            .collect()
    }

    /// Lowercase -> original display casing, for restoring user spelling
    /// after case-insensitive matching.
    pub fn casing_map(&self) -> HashMap<String, String> {
        self.skills
            .iter()
            .map(|s| (s.name.to_lowercase(), s.name.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_profile() -> Profile {
        Profile {
            user_type: UserType::CurrentStudent,
            field: "CSE".to_string(),
            cgpa: 8.0,
            interests: vec![],
            skills: vec![],
            aptitude_score: 50,
        }
    }

    #[test]
    fn test_duplicate_skills_collapse_last_write_wins() {
        let profile = Profile {
            skills: vec![
                SkillRating { name: "Python".to_string(), rating: 2 },
                SkillRating { name: "SQL".to_string(), rating: 3 },
                SkillRating { name: "python".to_string(), rating: 5 },
            ],
            ..base_profile()
        }
        .normalized();

        assert_eq!(profile.skills.len(), 2);
        assert_eq!(profile.skills[0].name, "python");
        assert_eq!(profile.skills[0].rating, 5);
        assert_eq!(profile.skills[1].name, "SQL");
    }

    #[test]
    fn test_duplicate_interests_collapse_first_wins() {
        let profile = Profile {
            interests: vec![
                "AI/ML".to_string(),
                "Web Development".to_string(),
                "AI/ML".to_string(),
            ],
            ..base_profile()
        }
        .normalized();

        assert_eq!(profile.interests, vec!["AI/ML", "Web Development"]);
    }

    #[test]
    fn test_strengths_excludes_rating_one() {
        let profile = Profile {
            skills: vec![
                SkillRating { name: "Python".to_string(), rating: 5 },
                SkillRating { name: "React".to_string(), rating: 1 },
            ],
            ..base_profile()
        };

        let strengths = profile.strengths();
        assert!(strengths.contains("python"));
        assert!(!strengths.contains("react"));
    }

    #[test]
    fn test_casing_map_preserves_display_names() {
        let profile = Profile {
            skills: vec![SkillRating { name: "TensorFlow".to_string(), rating: 3 }],
            ..base_profile()
        };
        assert_eq!(
            profile.casing_map().get("tensorflow"),
            Some(&"TensorFlow".to_string())
        );
    }

    #[test]
    fn test_validate_rejects_out_of_range_cgpa() {
        let profile = Profile { cgpa: 3.2, ..base_profile() };
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_rating() {
        let profile = Profile {
            skills: vec![SkillRating { name: "Go".to_string(), rating: 0 }],
            ..base_profile()
        };
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_bounds() {
        let profile = Profile {
            cgpa: 10.0,
            aptitude_score: 100,
            skills: vec![SkillRating { name: "Go".to_string(), rating: 5 }],
            ..base_profile()
        };
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn test_user_type_wire_names() {
        let json = serde_json::to_string(&UserType::WorkingProfessional).unwrap();
        assert_eq!(json, "\"Working Professional\"");
        let back: UserType = serde_json::from_str("\"Job Seeker\"").unwrap();
        assert_eq!(back, UserType::JobSeeker);
    }

    #[test]
    fn test_profile_wire_shape_is_camel_case() {
        let profile = base_profile();
        let value = serde_json::to_value(&profile).unwrap();
        assert!(value.get("userType").is_some());
        assert!(value.get("aptitudeScore").is_some());
    }
}
