use gloo::net::http::{Request, RequestBuilder, Response};
use serde::{Deserialize, Serialize};
use skiff_core::record::{NewTaskRecord, TaskRecord};
use uuid::Uuid;

/// Connection settings for the hosted store and its auth gate. Parsed from
/// the embedded `remote.toml`; sanitized by the composition root on load.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub endpoint: String,
    #[serde(default)]
    pub anon_key: String,
    #[serde(default = "default_table")]
    pub table: String,
    #[serde(default = "default_toast_ttl_ms")]
    pub toast_ttl_ms: u32,
}

fn default_table() -> String {
    "tasks".to_string()
}

fn default_toast_ttl_ms() -> u32 {
    4_000
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            anon_key: String::new(),
            table: default_table(),
            toast_ttl_ms: default_toast_ttl_ms(),
        }
    }
}

/// The auth gate's view of the signed-in user. Captured from the magic
/// link redirect, persisted in local storage by the composition root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    pub user_id: Uuid,
    pub email: Option<String>,
}

#[derive(Deserialize)]
struct TokenClaims {
    sub: Uuid,
    email: Option<String>,
}

/// Builds a session from the redirect tokens. The access token is a JWT
/// whose payload carries the user id (`sub`) and email.
pub fn session_from_tokens(access_token: &str, refresh_token: &str) -> Result<Session, String> {
    let payload = access_token
        .split('.')
        .nth(1)
        .ok_or_else(|| "access token is not a JWT".to_string())?;
    let decoded = decode_base64url(payload)?;
    let claims: TokenClaims = serde_json::from_str(&decoded)
        .map_err(|e| format!("token claims decode error: {e}"))?;

    Ok(Session {
        access_token: access_token.to_string(),
        refresh_token: refresh_token.to_string(),
        user_id: claims.sub,
        email: claims.email,
    })
}

fn decode_base64url(payload: &str) -> Result<String, String> {
    let mut normalized = payload.replace('-', "+").replace('_', "/");
    while normalized.len() % 4 != 0 {
        normalized.push('=');
    }

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    window
        .atob(&normalized)
        .map_err(|_| "access token payload is not base64".to_string())
}

pub async fn request_login_link(config: &StoreConfig, email: &str) -> Result<(), String> {
    let body = serde_json::json!({ "email": email, "create_user": true });
    let response = Request::post(&format!("{}/auth/v1/otp", config.endpoint))
        .header("apikey", &config.anon_key)
        .json(&body)
        .map_err(|e| format!("failed to encode login request: {e}"))?
        .send()
        .await
        .map_err(|e| format!("login link request error: {e}"))?;

    if response.ok() {
        Ok(())
    } else {
        Err(status_error("login link request", &response))
    }
}

/// Best-effort server-side logout; the caller clears local state either way.
pub async fn sign_out(config: &StoreConfig, session: &Session) -> Result<(), String> {
    let url = format!("{}/auth/v1/logout", config.endpoint);
    let response = with_auth(Request::post(&url), config, session)
        .send()
        .await
        .map_err(|e| format!("logout request error: {e}"))?;

    if response.ok() {
        Ok(())
    } else {
        Err(status_error("logout", &response))
    }
}

pub async fn list_tasks(config: &StoreConfig, session: &Session) -> Result<Vec<TaskRecord>, String> {
    let url = format!(
        "{}?select=*&user_id=eq.{}&order=created_at.desc",
        rest_url(config),
        session.user_id
    );
    let response = with_auth(Request::get(&url), config, session)
        .send()
        .await
        .map_err(|e| format!("task list request error: {e}"))?;

    if !response.ok() {
        return Err(status_error("task list", &response));
    }

    response
        .json::<Vec<TaskRecord>>()
        .await
        .map_err(|e| format!("task list decode error: {e}"))
}

pub async fn insert_task(
    config: &StoreConfig,
    session: &Session,
    record: &NewTaskRecord,
) -> Result<TaskRecord, String> {
    let response = with_auth(Request::post(&rest_url(config)), config, session)
        .header("Prefer", "return=representation")
        .json(record)
        .map_err(|e| format!("failed to encode task insert: {e}"))?
        .send()
        .await
        .map_err(|e| format!("task insert request error: {e}"))?;

    if !response.ok() {
        return Err(status_error("task insert", &response));
    }

    // The store answers a representation request with a one-row array.
    let mut rows: Vec<TaskRecord> = response
        .json()
        .await
        .map_err(|e| format!("task insert decode error: {e}"))?;
    if rows.is_empty() {
        return Err("task insert returned no rows".to_string());
    }
    Ok(rows.remove(0))
}

pub async fn update_task<P>(
    config: &StoreConfig,
    session: &Session,
    id: Uuid,
    patch: &P,
) -> Result<(), String>
where
    P: Serialize + ?Sized,
{
    let url = format!("{}?id=eq.{id}", rest_url(config));
    let response = with_auth(Request::patch(&url), config, session)
        .json(patch)
        .map_err(|e| format!("failed to encode task update: {e}"))?
        .send()
        .await
        .map_err(|e| format!("task update request error: {e}"))?;

    if response.ok() {
        Ok(())
    } else {
        Err(status_error("task update", &response))
    }
}

pub async fn delete_task(config: &StoreConfig, session: &Session, id: Uuid) -> Result<(), String> {
    let url = format!("{}?id=eq.{id}", rest_url(config));
    let response = with_auth(Request::delete(&url), config, session)
        .send()
        .await
        .map_err(|e| format!("task delete request error: {e}"))?;

    if response.ok() {
        Ok(())
    } else {
        Err(status_error("task delete", &response))
    }
}

fn rest_url(config: &StoreConfig) -> String {
    format!("{}/rest/v1/{}", config.endpoint, config.table)
}

fn with_auth(builder: RequestBuilder, config: &StoreConfig, session: &Session) -> RequestBuilder {
    builder
        .header("apikey", &config.anon_key)
        .header("Authorization", &format!("Bearer {}", session.access_token))
}

fn status_error(context: &str, response: &Response) -> String {
    format!("{context} returned status {}", response.status())
}
