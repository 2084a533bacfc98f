use crate::models::auth::ProfileRow;
use crate::models::Role;
use crate::services::TableClient;
use crate::utils::constants::TABLE_PROFILES;

/// Look up the role for a signed-in user.
///
/// A missing row is not an error: new accounts may not have a profile yet,
/// so they get the default student role.
pub async fn fetch_role(user_id: &str) -> Result<Role, String> {
    let row = TableClient::new(TABLE_PROFILES)
        .find_by_id::<ProfileRow>(user_id)
        .await?;

    match row {
        Some(profile) => Ok(Role::parse(profile.role.as_deref().unwrap_or("student"))),
        None => {
            log::warn!("⚠️ No profile row for user {}, defaulting to student", user_id);
            Ok(Role::Student)
        }
    }
}
