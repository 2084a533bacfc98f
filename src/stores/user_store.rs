use crate::models::{NewUser, UserRecord, UserStatus};

/// Single source of truth for the admin user list. Pure list container;
/// toasts and backend persistence live in the `use_users` hook.
#[derive(Clone, PartialEq, Debug)]
pub struct UserDirectory {
    users: Vec<UserRecord>,
    next_id: i64,
}

impl UserDirectory {
    /// Demo roster shown until the backend owns this table.
    pub fn seeded() -> Self {
        let users = vec![
            UserRecord {
                id: 1,
                name: "John Doe".to_string(),
                email: "john@example.com".to_string(),
                role: crate::models::AccountRole::Student,
                status: UserStatus::Active,
                courses: 3,
            },
            UserRecord {
                id: 2,
                name: "Jane Smith".to_string(),
                email: "jane@example.com".to_string(),
                role: crate::models::AccountRole::Instructor,
                status: UserStatus::Active,
                courses: 5,
            },
            UserRecord {
                id: 3,
                name: "Mike Johnson".to_string(),
                email: "mike@example.com".to_string(),
                role: crate::models::AccountRole::Student,
                status: UserStatus::Inactive,
                courses: 1,
            },
            UserRecord {
                id: 4,
                name: "Sarah Wilson".to_string(),
                email: "sarah@example.com".to_string(),
                role: crate::models::AccountRole::Admin,
                status: UserStatus::Active,
                courses: 0,
            },
            UserRecord {
                id: 5,
                name: "Tom Brown".to_string(),
                email: "tom@example.com".to_string(),
                role: crate::models::AccountRole::Student,
                status: UserStatus::Active,
                courses: 2,
            },
        ];
        Self { users, next_id: 6 }
    }

    pub fn users(&self) -> &[UserRecord] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Validate and append a new record. On validation failure nothing is
    /// mutated.
    pub fn add(&mut self, draft: NewUser) -> Result<UserRecord, String> {
        if draft.name.trim().is_empty() || draft.email.trim().is_empty() {
            return Err("Please fill all required fields.".to_string());
        }

        let record = UserRecord {
            id: self.next_id,
            name: draft.name.trim().to_string(),
            email: draft.email.trim().to_string(),
            role: draft.role,
            status: draft.status,
            courses: draft.courses,
        };
        self.next_id += 1;
        self.users.push(record.clone());
        Ok(record)
    }

    /// Remove exactly the addressed record, keeping the survivors in order.
    pub fn remove(&mut self, id: i64) -> Option<UserRecord> {
        let index = self.users.iter().position(|u| u.id == id)?;
        Some(self.users.remove(index))
    }

    /// Flip active/inactive on one record, returning the updated copy.
    pub fn toggle_status(&mut self, id: i64) -> Option<UserRecord> {
        let user = self.users.iter_mut().find(|u| u.id == id)?;
        user.status = user.status.toggled();
        Some(user.clone())
    }

    /// Case-insensitive search over name and email.
    pub fn filter(&self, term: &str) -> Vec<&UserRecord> {
        let needle = term.to_lowercase();
        self.users
            .iter()
            .filter(|u| {
                u.name.to_lowercase().contains(&needle)
                    || u.email.to_lowercase().contains(&needle)
            })
            .collect()
    }

    pub fn count_with_role(&self, role: crate::models::AccountRole) -> usize {
        self.users.iter().filter(|u| u.role == role).count()
    }

    pub fn active_count(&self) -> usize {
        self.users
            .iter()
            .filter(|u| u.status == UserStatus::Active)
            .count()
    }
}

impl Default for UserDirectory {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AccountRole;

    fn draft(name: &str, email: &str) -> NewUser {
        NewUser {
            name: name.to_string(),
            email: email.to_string(),
            ..NewUser::default()
        }
    }

    #[test]
    fn valid_add_grows_the_list_by_exactly_one() {
        let mut directory = UserDirectory::seeded();
        let before = directory.len();

        let record = directory.add(draft("Amina Yusuf", "amina@example.com")).unwrap();

        assert_eq!(directory.len(), before + 1);
        assert_eq!(record.name, "Amina Yusuf");
        assert_eq!(record.role, AccountRole::Student);
    }

    #[test]
    fn missing_required_field_leaves_the_list_untouched() {
        let mut directory = UserDirectory::seeded();
        let before = directory.clone();

        assert!(directory.add(draft("", "x@example.com")).is_err());
        assert!(directory.add(draft("Nameless", "  ")).is_err());
        assert_eq!(directory, before);
    }

    #[test]
    fn ids_stay_unique_across_adds_and_removes() {
        let mut directory = UserDirectory::seeded();
        let a = directory.add(draft("A", "a@example.com")).unwrap();
        directory.remove(a.id);
        let b = directory.add(draft("B", "b@example.com")).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn remove_deletes_exactly_one_and_preserves_order() {
        let mut directory = UserDirectory::seeded();
        let removed = directory.remove(3).unwrap();

        assert_eq!(removed.name, "Mike Johnson");
        let ids: Vec<i64> = directory.users().iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![1, 2, 4, 5]);
    }

    #[test]
    fn remove_of_unknown_id_is_a_no_op() {
        let mut directory = UserDirectory::seeded();
        assert!(directory.remove(999).is_none());
        assert_eq!(directory.len(), 5);
    }

    #[test]
    fn toggle_flips_exactly_once_per_call() {
        let mut directory = UserDirectory::seeded();

        let toggled = directory.toggle_status(1).unwrap();
        assert_eq!(toggled.status, UserStatus::Inactive);

        let toggled = directory.toggle_status(1).unwrap();
        assert_eq!(toggled.status, UserStatus::Active);

        // Everyone else stays untouched.
        assert_eq!(directory.users()[2].status, UserStatus::Inactive);
    }

    #[test]
    fn filter_matches_name_and_email_case_insensitively() {
        let directory = UserDirectory::seeded();
        assert_eq!(directory.filter("JANE").len(), 1);
        assert_eq!(directory.filter("example.com").len(), 5);
        assert!(directory.filter("zzz").is_empty());
    }

    #[test]
    fn role_and_status_counts() {
        let directory = UserDirectory::seeded();
        assert_eq!(directory.count_with_role(AccountRole::Student), 3);
        assert_eq!(directory.count_with_role(AccountRole::Instructor), 1);
        assert_eq!(directory.active_count(), 4);
    }
}
