use serde::{Deserialize, Serialize};
use std::fmt;

/// Account role attached to a managed user record. Distinct from the
/// session-level [`crate::models::Role`]: admins manage instructor accounts
/// even though no instructor session role exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AccountRole {
    #[default]
    Student,
    Instructor,
    Admin,
}

impl AccountRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountRole::Student => "student",
            AccountRole::Instructor => "instructor",
            AccountRole::Admin => "admin",
        }
    }

    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "admin" => AccountRole::Admin,
            "instructor" => AccountRole::Instructor,
            _ => AccountRole::Student,
        }
    }
}

impl fmt::Display for AccountRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    #[default]
    Active,
    Inactive,
}

impl UserStatus {
    pub fn toggled(self) -> Self {
        match self {
            UserStatus::Active => UserStatus::Inactive,
            UserStatus::Inactive => UserStatus::Active,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Inactive => "inactive",
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Admin-managed user row. Also the insert payload for the
/// `user_management` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: AccountRole,
    pub status: UserStatus,
    pub courses: u32,
}

/// Draft captured by the add-user form before validation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub role: AccountRole,
    pub status: UserStatus,
    pub courses: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_never_produces_a_third_status() {
        assert_eq!(UserStatus::Active.toggled(), UserStatus::Inactive);
        assert_eq!(UserStatus::Inactive.toggled(), UserStatus::Active);
        assert_eq!(UserStatus::Active.toggled().toggled(), UserStatus::Active);
    }
}
