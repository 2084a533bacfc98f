pub mod session_context;
pub mod use_assignments;
pub mod use_auth;
pub mod use_courses;
pub mod use_role;
pub mod use_toast;
pub mod use_users;

pub use session_context::{use_session_context, SessionProvider};
pub use use_assignments::use_assignments;
pub use use_courses::use_courses;
pub use use_toast::use_toast;
pub use use_users::use_users;
