use serde::{Deserialize, Serialize};

/// Read-only copy of the auth collaborator's session. The source of truth
/// lives on the backend; this is only what the UI needs to render and to
/// authorize follow-up requests.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Session {
    pub user_id: String,
    pub email: String,
    pub access_token: String,
}

#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    pub data: SignUpMetadata,
}

#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct SignUpMetadata {
    pub full_name: String,
}

#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct TokenResponse {
    pub access_token: String,
    pub user: AuthUser,
}

#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct AuthUser {
    pub id: String,
    pub email: Option<String>,
}

/// Error payload shape varies across auth endpoints; collect the candidates.
#[derive(Clone, PartialEq, Deserialize, Debug, Default)]
pub struct AuthErrorBody {
    #[serde(default)]
    pub error_description: Option<String>,
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl AuthErrorBody {
    pub fn into_message(self) -> Option<String> {
        self.error_description.or(self.msg).or(self.message)
    }
}

/// One row of the `profiles` table: user id -> role.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct ProfileRow {
    pub id: String,
    pub role: Option<String>,
}
