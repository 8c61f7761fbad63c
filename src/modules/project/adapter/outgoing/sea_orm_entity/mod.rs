pub mod project_details;
pub mod project_features;
pub mod project_goals;
pub mod project_timeline;
pub mod projects;
pub mod team_members;
