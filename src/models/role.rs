use std::fmt;

/// Session-level role resolved from the `profiles` table.
///
/// Kept as a closed enum so route gating and navigation can never drift on
/// free-text comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Anonymous,
    Student,
    Admin,
}

impl Role {
    /// Parse the raw role column, case-insensitively.
    ///
    /// Anything that is not recognizably an admin is treated as a student,
    /// matching the backend's default profile role.
    pub fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("admin") {
            Role::Admin
        } else {
            Role::Student
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Anonymous => "anonymous",
            Role::Student => "student",
            Role::Admin => "admin",
        }
    }

}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Role::parse("admin"), Role::Admin);
        assert_eq!(Role::parse("Admin"), Role::Admin);
        assert_eq!(Role::parse("ADMIN"), Role::Admin);
        assert_eq!(Role::parse("  admin "), Role::Admin);
    }

    #[test]
    fn unknown_roles_fall_back_to_student() {
        assert_eq!(Role::parse("student"), Role::Student);
        assert_eq!(Role::parse("instructor"), Role::Student);
        assert_eq!(Role::parse("User"), Role::Student);
        assert_eq!(Role::parse(""), Role::Student);
    }
}
