pub mod admin_dashboard;
pub mod assignment_admin;
pub mod assignment_submission;
pub mod auth_page;
pub mod course_content;
pub mod course_management;
pub mod dashboard;
pub mod not_found;
pub mod user_management;

pub use admin_dashboard::AdminDashboard;
pub use assignment_admin::AssignmentAdmin;
pub use assignment_submission::AssignmentSubmission;
pub use auth_page::AuthPage;
pub use course_content::CourseContent;
pub use course_management::CourseManagement;
pub use dashboard::Dashboard;
pub use not_found::NotFoundPage;
pub use user_management::UserManagement;
