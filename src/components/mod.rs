pub mod guard;
pub mod header;
pub mod layout;
pub mod sidebar;
pub mod toaster;

pub use guard::Guard;
pub use header::Header;
pub use layout::Layout;
pub use sidebar::Sidebar;
pub use toaster::ToastProvider;
