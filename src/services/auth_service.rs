// ============================================================================
// AUTH SERVICE - HTTP calls against the hosted auth collaborator (stateless)
// ============================================================================

use gloo_net::http::{Request, Response};

use crate::models::auth::{
    AuthErrorBody, Session, SignInRequest, SignUpMetadata, SignUpRequest, TokenResponse,
};
use crate::utils::constants::{ANON_KEY, BACKEND_URL};

/// Exchange email + password for a session.
pub async fn sign_in(email: &str, password: &str) -> Result<Session, String> {
    let url = format!("{}/auth/v1/token?grant_type=password", BACKEND_URL);
    let request = SignInRequest {
        email: email.to_string(),
        password: password.to_string(),
    };

    log::info!("🔐 Signing in: {}", email);

    let response = Request::post(&url)
        .header("apikey", ANON_KEY)
        .json(&request)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(read_error_message(response).await);
    }

    let token = response
        .json::<TokenResponse>()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(Session {
        user_id: token.user.id,
        email: token.user.email.unwrap_or_else(|| email.to_string()),
        access_token: token.access_token,
    })
}

/// Create an account. The backend sends a confirmation email; no session is
/// returned until the address is verified.
pub async fn sign_up(email: &str, password: &str, full_name: &str) -> Result<(), String> {
    let url = format!("{}/auth/v1/signup", BACKEND_URL);
    let request = SignUpRequest {
        email: email.to_string(),
        password: password.to_string(),
        data: SignUpMetadata {
            full_name: full_name.to_string(),
        },
    };

    log::info!("📝 Signing up: {}", email);

    let response = Request::post(&url)
        .header("apikey", ANON_KEY)
        .json(&request)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(read_error_message(response).await);
    }

    Ok(())
}

/// Revoke the session on the backend.
pub async fn sign_out(access_token: &str) -> Result<(), String> {
    let url = format!("{}/auth/v1/logout", BACKEND_URL);

    let response = Request::post(&url)
        .header("apikey", ANON_KEY)
        .header("Authorization", &format!("Bearer {}", access_token))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!(
            "HTTP {}: {}",
            response.status(),
            response.status_text()
        ));
    }

    Ok(())
}

/// Pull a human-readable message out of a failed auth response.
async fn read_error_message(response: Response) -> String {
    let status = response.status();
    let status_text = response.status_text();
    match response.json::<AuthErrorBody>().await {
        Ok(body) => body
            .into_message()
            .unwrap_or_else(|| format!("HTTP {}: {}", status, status_text)),
        Err(_) => format!("HTTP {}: {}", status, status_text),
    }
}
