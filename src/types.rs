//! API types matching the SkillForge generation service

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// User details request
#[derive(Debug, Clone, Serialize)]
pub struct UserDetailsRequest {
    pub user_id: String,
}

/// User details response envelope
#[derive(Debug, Clone, Deserialize)]
pub struct UserDetailsResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Option<UserDetails>,
}

/// User profile
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct UserDetails {
    pub name: String,
    pub age: u32,
    pub education: String,
    /// Free-text goal used as the seed for skill generation; null until set.
    pub dream: Option<String>,
}

/// Skill generation request
#[derive(Debug, Clone, Serialize)]
pub struct GenerateSkillsRequest {
    pub dream: String,
}

/// Skill generation response envelope
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateSkillsResponse {
    pub response: SkillList,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SkillList {
    pub skills: Vec<Skill>,
}

/// A generated skill shown on the dashboard
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Skill {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub power: String,
}

/// Roadmap generation request
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRoadmapRequest {
    pub skill: String,
}

/// Roadmap response: the service keys the stage list by the requested skill
/// name rather than a fixed field, so this deserializes as a map and the
/// caller looks its skill up.
pub type GenerateRoadmapResponse = HashMap<String, Vec<StageRecord>>;

/// One roadmap stage as returned by the service
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct StageRecord {
    pub stage: String,
    pub description: String,
}

/// Task generation request
#[derive(Debug, Clone, Serialize)]
pub struct GenerateTasksRequest {
    pub skill: String,
    pub stage: String,
    pub description: String,
}

/// Task generation response envelope
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateTasksResponse {
    pub response: TaskList,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TaskList {
    pub tasks: Vec<TaskRecord>,
}

/// One task as returned by the service
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TaskRecord {
    pub task: String,
    pub description: String,
    pub proof: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_details_parses_null_dream() {
        let json = r#"{"success": true, "data": {"name": "Ada", "age": 21,
            "education": "BSc", "dream": null}}"#;
        let resp: UserDetailsResponse = serde_json::from_str(json).unwrap();
        assert!(resp.success);
        assert_eq!(resp.data.unwrap().dream, None);
    }

    #[test]
    fn user_details_failure_omits_data() {
        let json = r#"{"success": false}"#;
        let resp: UserDetailsResponse = serde_json::from_str(json).unwrap();
        assert!(!resp.success);
        assert!(resp.data.is_none());
    }

    #[test]
    fn skills_envelope_parses() {
        let json = r#"{"response": {"skills": [
            {"id": 1, "name": "Rust", "description": "Systems", "power": "A"}
        ]}}"#;
        let resp: GenerateSkillsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.response.skills.len(), 1);
        assert_eq!(resp.response.skills[0].name, "Rust");
    }

    #[test]
    fn roadmap_is_keyed_by_skill_name() {
        let json = r#"{"Rust": [
            {"stage": "Basics", "description": "Syntax and ownership"},
            {"stage": "Async", "description": "Futures and executors"}
        ]}"#;
        let resp: GenerateRoadmapResponse = serde_json::from_str(json).unwrap();
        let stages = resp.get("Rust").unwrap();
        assert_eq!(stages.len(), 2);
        assert_eq!(stages[0].stage, "Basics");
        assert!(resp.get("Go").is_none());
    }

    #[test]
    fn request_bodies_serialize_with_expected_keys() {
        let body = GenerateTasksRequest {
            skill: "Rust".into(),
            stage: "Basics".into(),
            description: "Syntax".into(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["skill"], "Rust");
        assert_eq!(json["stage"], "Basics");
        assert_eq!(json["description"], "Syntax");

        let body = UserDetailsRequest { user_id: "u1".into() };
        assert_eq!(serde_json::to_value(&body).unwrap()["user_id"], "u1");

        let body = GenerateSkillsRequest { dream: "astronaut".into() };
        assert_eq!(serde_json::to_value(&body).unwrap()["dream"], "astronaut");
    }
}
