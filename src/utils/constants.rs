/// Base URL of the hosted backend (auth + row store).
/// Configured at compile time via the LMS_BACKEND_URL env var (see build.rs);
/// defaults to a local development stack.
pub const BACKEND_URL: &str = match option_env!("LMS_BACKEND_URL") {
    Some(url) => url,
    None => "http://localhost:54321",
};

/// Publishable API key sent with every backend request.
pub const ANON_KEY: &str = match option_env!("LMS_ANON_KEY") {
    Some(key) => key,
    None => "dev-anon-key",
};

pub const APP_NAME: &str = "Taleem-Dekhteer";

pub const STORAGE_KEY_SESSION: &str = "taleem_session";

pub const TABLE_PROFILES: &str = "profiles";
pub const TABLE_USER_MANAGEMENT: &str = "user_management";

/// How long a toast stays on screen before auto-dismissing.
pub const TOAST_DISMISS_MS: u32 = 4_000;
