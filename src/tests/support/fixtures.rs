use chrono::{TimeZone, Utc};
use uuid::Uuid;

use crate::modules::achievement::domain::entities::Achievement;
use crate::modules::project::application::ports::outgoing::project_query::ProjectView;
use crate::modules::project_index::domain::entities::ProjectIndex;

pub fn project_view(project_id: &str) -> ProjectView {
    let now = Utc::now();
    ProjectView {
        id: Uuid::new_v4(),
        project_id: project_id.to_string(),
        project_title: format!("Project {}", project_id),
        project_subtitle: None,
        project_cover_img: None,
        project_description: Some("A sample project".to_string()),
        project_tech_stacks: vec!["Go".to_string(), "SQL".to_string()],
        technical_specifications: None,
        project_link: None,
        github_link: None,
        project_status: Some("completed".to_string()),
        personal: true,
        is_details: false,
        project_features: vec![],
        project_goals: vec![],
        project_timeline: vec![],
        team_members: vec![],
        project_detail: None,
        diagnostics: vec![],
        created_at: now,
        updated_at: now,
    }
}

pub fn project_index(project_id: &str) -> ProjectIndex {
    let now = Utc::now();
    ProjectIndex {
        id: Uuid::new_v4(),
        project_id: project_id.to_string(),
        project_title: format!("Project {}", project_id),
        project_subtitle: None,
        project_cover_img: None,
        project_tech_stacks: vec!["Rust".to_string()],
        project_link: None,
        github_link: None,
        project_status: None,
        personal: false,
        diagnostics: vec![],
        created_at: now,
        updated_at: now,
    }
}

pub fn achievement(id: i32) -> Achievement {
    let date = Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap();
    Achievement {
        id,
        title: "Hackathon winner".to_string(),
        achievement_type: Some("award".to_string()),
        date,
        description: None,
        category: Some("competition".to_string()),
        image_url: Some("https://cdn.test/trophy.png".to_string()),
        created_at: date,
        updated_at: date,
    }
}
