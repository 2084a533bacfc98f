pub mod assignment_store;
pub mod course_store;
pub mod user_store;

pub use assignment_store::AssignmentBook;
pub use course_store::CourseCatalog;
pub use user_store::UserDirectory;
