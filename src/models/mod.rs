pub mod assignment;
pub mod auth;
pub mod course;
pub mod role;
pub mod user;

pub use assignment::{Assignment, NewAssignment, Submission};
pub use auth::Session;
pub use course::{Course, CourseStatus, NewCourse};
pub use role::Role;
pub use user::{AccountRole, NewUser, UserRecord, UserStatus};
