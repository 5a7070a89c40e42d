//! API client for the skill generation service

use crate::types::*;
use gloo_net::http::Request;

/// POST a JSON body and parse a JSON response
pub async fn post_json<T, R>(url: &str, body: &T) -> Result<R, String>
where
    T: serde::Serialize,
    R: serde::de::DeserializeOwned,
{
    let resp = Request::post(url)
        .header("Content-Type", "application/json")
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !resp.ok() {
        return Err(format!("Request failed with status {}", resp.status()));
    }

    resp.json::<R>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Fetch the user's profile. Returns `None` when the service reports a
/// lookup failure for this user id.
pub async fn fetch_user_details(base_url: &str, user_id: &str) -> Result<Option<UserDetails>, String> {
    let url = format!("{}/user/details", base_url);
    let body = UserDetailsRequest {
        user_id: user_id.to_string(),
    };
    let resp: UserDetailsResponse = post_json(&url, &body).await?;
    if resp.success {
        Ok(resp.data)
    } else {
        Ok(None)
    }
}

/// Generate skills from the user's dream
pub async fn generate_skills(base_url: &str, dream: &str) -> Result<Vec<Skill>, String> {
    let url = format!("{}/generate-skills", base_url);
    let body = GenerateSkillsRequest {
        dream: dream.to_string(),
    };
    let resp: GenerateSkillsResponse = post_json(&url, &body).await?;
    Ok(resp.response.skills)
}

/// Generate the mastery roadmap for a skill.
///
/// The response is keyed by the requested skill name; a response missing
/// that key counts as a failed fetch.
pub async fn generate_roadmap(base_url: &str, skill: &str) -> Result<Vec<StageRecord>, String> {
    let url = format!("{}/generate-skill-mastery-roadmap", base_url);
    let body = GenerateRoadmapRequest {
        skill: skill.to_string(),
    };
    let resp: GenerateRoadmapResponse = post_json(&url, &body).await?;
    roadmap_stages(resp, skill)
}

/// Extract the stage list from the skill-keyed roadmap response.
fn roadmap_stages(
    mut resp: GenerateRoadmapResponse,
    skill: &str,
) -> Result<Vec<StageRecord>, String> {
    resp.remove(skill)
        .ok_or_else(|| format!("Roadmap response missing entry for '{}'", skill))
}

/// Generate the task list for one roadmap stage
pub async fn generate_tasks(
    base_url: &str,
    skill: &str,
    stage: &str,
    description: &str,
) -> Result<Vec<TaskRecord>, String> {
    let url = format!("{}/generate-tasks", base_url);
    let body = GenerateTasksRequest {
        skill: skill.to_string(),
        stage: stage.to_string(),
        description: description.to_string(),
    };
    let resp: GenerateTasksResponse = post_json(&url, &body).await?;
    Ok(resp.response.tasks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roadmap_stages_found_under_skill_key() {
        let json = r#"{"Rust": [{"stage": "Basics", "description": "Syntax"}]}"#;
        let resp: GenerateRoadmapResponse = serde_json::from_str(json).unwrap();
        let stages = roadmap_stages(resp, "Rust").unwrap();
        assert_eq!(stages.len(), 1);
        assert_eq!(stages[0].stage, "Basics");
    }

    #[test]
    fn roadmap_missing_skill_key_is_an_error() {
        let json = r#"{"Go": [{"stage": "Basics", "description": "Syntax"}]}"#;
        let resp: GenerateRoadmapResponse = serde_json::from_str(json).unwrap();
        let err = roadmap_stages(resp, "Rust").unwrap_err();
        assert!(err.contains("Rust"));
    }
}
