use serde::{Deserialize, Deserializer, Serialize};

/// One week of the 4-week learning roadmap attached to a recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapWeek {
    #[serde(default)]
    pub week: u32,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub tasks: Vec<String>,
    #[serde(default)]
    pub project: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceLink {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub category: String,
}

/// A ranked career recommendation, from either the fallback engine or the
/// AI adapter. Every field defaults on deserialization: generative output
/// with missing fields coalesces to empty values instead of failing, since
/// the pipeline must stay total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    #[serde(default)]
    pub role_name: String,
    #[serde(default, deserialize_with = "lenient_percentage")]
    pub match_percentage: i32,
    #[serde(default)]
    pub reasons: Vec<String>,
    #[serde(default)]
    pub skills_have: Vec<String>,
    #[serde(default)]
    pub skills_missing: Vec<String>,
    #[serde(default)]
    pub roadmap: Vec<RoadmapWeek>,
    #[serde(default)]
    pub resource_links: Vec<ResourceLink>,
}

/// Accepts both integer and float match percentages. The schema asks the
/// model for a number; "87.4" still happens.
fn lenient_percentage<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    Ok(value.round() as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trips_camel_case() {
        let rec = Recommendation {
            role_name: "Data Scientist".to_string(),
            match_percentage: 92,
            reasons: vec!["Matches your proficiency in Python.".to_string()],
            skills_have: vec!["Python".to_string()],
            skills_missing: vec!["Spark".to_string()],
            roadmap: vec![RoadmapWeek {
                week: 1,
                topics: vec!["Pandas".to_string()],
                tasks: vec!["Clean a dataset".to_string()],
                project: "EDA notebook".to_string(),
            }],
            resource_links: vec![ResourceLink {
                title: "Data Scientist Roadmap".to_string(),
                url: "https://roadmap.sh".to_string(),
                category: "Guide".to_string(),
            }],
        };

        let value = serde_json::to_value(&rec).unwrap();
        assert!(value.get("roleName").is_some());
        assert!(value.get("matchPercentage").is_some());
        assert!(value.get("skillsHave").is_some());

        let back: Recommendation = serde_json::from_value(value).unwrap();
        assert_eq!(back, rec);
    }

    #[test]
    fn test_missing_fields_coalesce_to_defaults() {
        let rec: Recommendation =
            serde_json::from_str(r#"{"roleName": "Backend Engineer"}"#).unwrap();
        assert_eq!(rec.role_name, "Backend Engineer");
        assert_eq!(rec.match_percentage, 0);
        assert!(rec.skills_have.is_empty());
        assert!(rec.roadmap.is_empty());
    }

    #[test]
    fn test_float_percentage_rounds() {
        let rec: Recommendation =
            serde_json::from_str(r#"{"matchPercentage": 87.6}"#).unwrap();
        assert_eq!(rec.match_percentage, 88);
    }

    #[test]
    fn test_integer_percentage_accepted() {
        let rec: Recommendation =
            serde_json::from_str(r#"{"matchPercentage": 95}"#).unwrap();
        assert_eq!(rec.match_percentage, 95);
    }
}
