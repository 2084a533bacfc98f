// ============================================================================
// ROUTES - route table + the single authorization policy
// ============================================================================
// Both the router gate and the sidebar consume `access_for`, so route access
// and visible navigation cannot drift apart.
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::Guard;
use crate::models::Role;
use crate::views::{
    AdminDashboard, AssignmentSubmission, AuthPage, CourseContent, CourseManagement, Dashboard,
    NotFoundPage, UserManagement,
};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Dashboard,
    #[at("/auth")]
    Auth,
    #[at("/courses")]
    Courses,
    #[at("/assignments")]
    Assignments,
    #[at("/admin")]
    Admin,
    #[at("/admin/users")]
    AdminUsers,
    #[at("/admin/courses")]
    AdminCourses,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    pub fn is_admin_area(&self) -> bool {
        matches!(self, Route::Admin | Route::AdminUsers | Route::AdminCourses)
    }
}

/// Outcome of the gate check. A pure function of (role, route), so redirect
/// loops are impossible.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Access {
    Granted,
    RequiresSignIn,
    Forbidden,
}

/// The authorization policy. Admin paths require the admin role, not merely
/// an authenticated session.
pub fn access_for(role: Role, route: &Route) -> Access {
    match route {
        // Sign-in and the not-found view resolve for everyone.
        Route::Auth | Route::NotFound => Access::Granted,
        r if r.is_admin_area() => match role {
            Role::Admin => Access::Granted,
            Role::Anonymous => Access::RequiresSignIn,
            Role::Student => Access::Forbidden,
        },
        _ => {
            if role == Role::Anonymous {
                Access::RequiresSignIn
            } else {
                Access::Granted
            }
        }
    }
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Auth => html! { <AuthPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
        protected => {
            let page = page_for(&protected);
            html! { <Guard route={protected}>{ page }</Guard> }
        }
    }
}

fn page_for(route: &Route) -> Html {
    match route {
        Route::Dashboard => html! { <Dashboard /> },
        Route::Courses => html! { <CourseContent /> },
        Route::Assignments => html! { <AssignmentSubmission /> },
        Route::Admin => html! { <AdminDashboard /> },
        Route::AdminUsers => html! { <UserManagement /> },
        Route::AdminCourses => html! { <CourseManagement /> },
        // Handled before the gate; never reached here.
        Route::Auth | Route::NotFound => Html::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROTECTED: [Route; 6] = [
        Route::Dashboard,
        Route::Courses,
        Route::Assignments,
        Route::Admin,
        Route::AdminUsers,
        Route::AdminCourses,
    ];

    #[test]
    fn anonymous_never_reaches_a_protected_view() {
        for route in &PROTECTED {
            assert_eq!(
                access_for(Role::Anonymous, route),
                Access::RequiresSignIn,
                "{:?} should redirect to sign-in",
                route
            );
        }
    }

    #[test]
    fn auth_and_not_found_resolve_for_everyone() {
        for role in [Role::Anonymous, Role::Student, Role::Admin] {
            assert_eq!(access_for(role, &Route::Auth), Access::Granted);
            assert_eq!(access_for(role, &Route::NotFound), Access::Granted);
        }
    }

    #[test]
    fn students_cannot_enter_the_admin_area() {
        for route in [Route::Admin, Route::AdminUsers, Route::AdminCourses] {
            assert_eq!(access_for(Role::Student, &route), Access::Forbidden);
            assert_eq!(access_for(Role::Admin, &route), Access::Granted);
        }
    }

    #[test]
    fn students_reach_every_non_admin_view() {
        for route in PROTECTED.iter().filter(|r| !r.is_admin_area()) {
            assert_eq!(access_for(Role::Student, route), Access::Granted);
        }
    }
}
