// ============================================================================
// TABLE SERVICE - generic row store addressed by table name (stateless)
// ============================================================================
// No business logic here, only HTTP against the hosted REST surface.
// ============================================================================

use gloo_net::http::Request;
use serde::{de::DeserializeOwned, Serialize};

use crate::utils::constants::{ANON_KEY, BACKEND_URL};

/// Thin client for one backend table. Point lookups and inserts only; the
/// views never need more than that.
#[derive(Clone)]
pub struct TableClient {
    base_url: String,
    table: &'static str,
}

impl TableClient {
    pub fn new(table: &'static str) -> Self {
        Self {
            base_url: BACKEND_URL.to_string(),
            table,
        }
    }

    /// Point lookup by primary key. Returns `Ok(None)` when no row matches.
    pub async fn find_by_id<T: DeserializeOwned>(&self, id: &str) -> Result<Option<T>, String> {
        let url = format!(
            "{}/rest/v1/{}?id=eq.{}&select=*",
            self.base_url, self.table, id
        );

        let response = Request::get(&url)
            .header("apikey", ANON_KEY)
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

        let rows = response
            .json::<Vec<T>>()
            .await
            .map_err(|e| format!("Parse error: {}", e))?;

        Ok(rows.into_iter().next())
    }

    /// Insert one row. The response body is not needed by any caller.
    pub async fn insert<T: Serialize>(&self, row: &T) -> Result<(), String> {
        let url = format!("{}/rest/v1/{}", self.base_url, self.table);

        let response = Request::post(&url)
            .header("apikey", ANON_KEY)
            .header("Prefer", "return=minimal")
            .json(row)
            .map_err(|e| format!("Serialization error: {}", e))?
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
}
