mod create_achievement;
mod delete_achievement;
mod fetch_achievement;
mod fetch_achievements;
mod update_achievement;

#[cfg(test)]
pub(crate) mod test_doubles;

pub use create_achievement::CreateAchievementService;
pub use delete_achievement::DeleteAchievementService;
pub use fetch_achievement::FetchAchievementService;
pub use fetch_achievements::FetchAchievementsService;
pub use update_achievement::UpdateAchievementService;

use crate::shared::patch::PatchField;

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| v.trim().is_empty())
}

/// Blank counts as absent.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Unsent keeps, blank clears, text replaces.
fn to_patch(value: Option<String>) -> PatchField<String> {
    match value {
        None => PatchField::Unset,
        Some(v) if v.trim().is_empty() => PatchField::Null,
        Some(v) => PatchField::Value(v),
    }
}
