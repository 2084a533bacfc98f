// ============================================================================
// NAVIGATION - derive the visible sidebar links from the resolved role
// ============================================================================

use crate::models::Role;
use crate::routes::Route;

#[derive(Clone, PartialEq, Debug)]
pub struct NavEntry {
    pub route: Route,
    pub label: &'static str,
    pub icon: &'static str,
}

const fn entry(route: Route, label: &'static str, icon: &'static str) -> NavEntry {
    NavEntry { route, label, icon }
}

/// Pure function from role to the ordered link set. No side effects, no
/// external calls; the sidebar renders exactly this list.
pub fn links_for(role: Role) -> Vec<NavEntry> {
    match role {
        Role::Anonymous => vec![entry(Route::Auth, "Sign In", "👤")],
        Role::Admin => vec![
            entry(Route::Dashboard, "Home", "🏠"),
            entry(Route::Admin, "Dashboard", "📊"),
            entry(Route::AdminUsers, "Manage Users", "👥"),
            entry(Route::AdminCourses, "Manage Courses", "📚"),
        ],
        Role::Student => vec![
            entry(Route::Dashboard, "Dashboard", "🏠"),
            entry(Route::Courses, "My Courses", "📚"),
            entry(Route::Assignments, "Assignments", "📝"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::{access_for, Access};

    #[test]
    fn non_admin_roles_get_the_student_link_set() {
        let student = links_for(Role::Student);
        assert_eq!(
            student.iter().map(|e| e.route.clone()).collect::<Vec<_>>(),
            vec![Route::Dashboard, Route::Courses, Route::Assignments]
        );
        // Role parsing is case-insensitive, so any non-admin spelling maps here.
        assert_eq!(links_for(Role::parse("Instructor")), student);
    }

    #[test]
    fn admin_gets_the_admin_link_set() {
        let admin = links_for(Role::Admin);
        assert_eq!(
            admin.iter().map(|e| e.route.clone()).collect::<Vec<_>>(),
            vec![
                Route::Dashboard,
                Route::Admin,
                Route::AdminUsers,
                Route::AdminCourses
            ]
        );
        assert_eq!(links_for(Role::parse("ADMIN")), admin);
    }

    #[test]
    fn anonymous_only_sees_sign_in() {
        let links = links_for(Role::Anonymous);
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].route, Route::Auth);
    }

    #[test]
    fn every_visible_link_is_actually_reachable() {
        for role in [Role::Anonymous, Role::Student, Role::Admin] {
            for link in links_for(role) {
                assert_eq!(
                    access_for(role, &link.route),
                    Access::Granted,
                    "{:?} shows {:?} but cannot open it",
                    role,
                    link.route
                );
            }
        }
    }
}
