//! REST API wrappers for the ChapFarm backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with the bearer
//! token read from browser storage on every call.
//! Server-side (SSR): the transport returns `ApiError::Unavailable` since these
//! endpoints are only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every wrapper returns `Result<_, ApiError>`; callers log and toast failures
//! and keep their previous state.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{
    AdminCreate, AgricultureAuthority, AgricultureAuthorityCreate, AlertCount, AlertRequest, AlertResponse,
    AuthoritySummary, BulkSmsRequest, ContactRequest, ContactResponse, DashboardSummary, Farmer, FarmerCreate,
    FarmerReport, LoginData, MessageResponse, RegisterData, RegisterResponse, RoleChangeResponse, Token,
    TransportProvider, TransportProviderCreate, TransportRequest, TransportStatus, TransportStatusUpdate,
    TransportSummary, TransportUpdateResponse, UserRead, UserRole,
};

// =============================================================
// Endpoint paths
// =============================================================

const AUTH_LOGIN: &str = "/auth/login";
const AUTH_REGISTER: &str = "/auth/register";
const ADMIN_USERS: &str = "/admin/users";
const ADMIN_REGISTER_ADMIN: &str = "/admin/admins/register";
const ADMIN_REGISTER_FARMER: &str = "/admin/farmers/register";
const ADMIN_REGISTER_AUTHORITY: &str = "/admin/authority/register";
const ADMIN_REGISTER_TRANSPORT: &str = "/admin/transport/register";
const ADMIN_DASHBOARD_SUMMARY: &str = "/admin/dashboard/summary";
const ADMIN_FARMERS: &str = "/admin/farmers";
const ADMIN_TRANSPORT_PROVIDERS: &str = "/admin/transport-providers";
const ADMIN_AUTHORITIES: &str = "/admin/agriculture-authorities";
const AUTHORITY_REPORTS: &str = "/agric_auth/Reports";
const AUTHORITY_REPORT_SUMMARY: &str = "/agric_auth/reports/summary";
const AUTHORITY_ALERT_COUNT: &str = "/agric_auth/alerts/count";
const TRANSPORT_REQUESTS: &str = "/transport/transport_requests";
const TRANSPORT_HISTORY: &str = "/transport/transport_requests/history";
const TRANSPORT_SUMMARY: &str = "/transport/summary";
const ALERTS_SEND: &str = "/alerts/send";
const CONTACT_SEND: &str = "/contact/send";
const SMS_BULK_SEND: &str = "/sms/send-bulk-sms/";

fn user_role_endpoint(user_id: i64, role: UserRole) -> String {
    format!("/admin/users/{user_id}/role?new_role={}", role.as_str())
}

fn user_endpoint(user_id: i64) -> String {
    format!("/admin/users/{user_id}")
}

fn report_resolve_endpoint(report_id: i64) -> String {
    format!("/agric_auth/reports/{report_id}/resolve")
}

fn transport_request_endpoint(request_id: i64) -> String {
    format!("/transport/transport_requests/{request_id}")
}

/// `Authorization` header value for a bearer token.
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Encode OAuth2 password-form credentials.
fn login_form_body(data: &LoginData) -> Result<String, ApiError> {
    serde_urlencoded::to_string(data).map_err(|e| ApiError::Decode(e.to_string()))
}

// =============================================================
// Auth
// =============================================================

/// Exchange credentials for a bearer token via `POST /auth/login`.
///
/// # Errors
///
/// Returns `ApiError::Status` with the backend detail on invalid credentials.
pub async fn login(data: &LoginData) -> Result<Token, ApiError> {
    let body = login_form_body(data)?;
    transport::post_form(AUTH_LOGIN, body).await
}

/// Self-register via `POST /auth/register`.
///
/// # Errors
///
/// Returns an error if the request fails or the backend rejects the payload.
pub async fn register(data: &RegisterData) -> Result<MessageResponse, ApiError> {
    transport::post_json(AUTH_REGISTER, data).await
}

// =============================================================
// Admin
// =============================================================

/// # Errors
///
/// Returns an error if the request fails or the caller is not an admin.
pub async fn fetch_dashboard_summary() -> Result<DashboardSummary, ApiError> {
    transport::get_json(ADMIN_DASHBOARD_SUMMARY).await
}

/// # Errors
///
/// Returns an error if the request fails or the caller is not an admin.
pub async fn list_users() -> Result<Vec<UserRead>, ApiError> {
    transport::get_json(ADMIN_USERS).await
}

/// Change a user's role via `PATCH /admin/users/{id}/role`.
///
/// # Errors
///
/// Returns an error if the request fails or the user does not exist.
pub async fn change_user_role(user_id: i64, role: UserRole) -> Result<RoleChangeResponse, ApiError> {
    transport::patch_empty(&user_role_endpoint(user_id, role)).await
}

/// Deactivate a user via `DELETE /admin/users/{id}`.
///
/// # Errors
///
/// Returns an error if the request fails or the user does not exist.
pub async fn deactivate_user(user_id: i64) -> Result<MessageResponse, ApiError> {
    transport::delete(&user_endpoint(user_id)).await
}

/// # Errors
///
/// Returns an error if the request fails or the email is already registered.
pub async fn register_admin(data: &AdminCreate) -> Result<RegisterResponse, ApiError> {
    transport::post_json(ADMIN_REGISTER_ADMIN, data).await
}

/// # Errors
///
/// Returns an error if the request fails or the email is already registered.
pub async fn register_farmer(data: &FarmerCreate) -> Result<RegisterResponse, ApiError> {
    transport::post_json(ADMIN_REGISTER_FARMER, data).await
}

/// # Errors
///
/// Returns an error if the request fails or the email is already registered.
pub async fn register_authority(data: &AgricultureAuthorityCreate) -> Result<RegisterResponse, ApiError> {
    transport::post_json(ADMIN_REGISTER_AUTHORITY, data).await
}

/// # Errors
///
/// Returns an error if the request fails or the email is already registered.
pub async fn register_transport(data: &TransportProviderCreate) -> Result<RegisterResponse, ApiError> {
    transport::post_json(ADMIN_REGISTER_TRANSPORT, data).await
}

/// # Errors
///
/// Returns an error if the request fails or the caller is not an admin.
pub async fn list_farmers() -> Result<Vec<Farmer>, ApiError> {
    transport::get_json(ADMIN_FARMERS).await
}

/// # Errors
///
/// Returns an error if the request fails or the caller is not an admin.
pub async fn list_transport_providers() -> Result<Vec<TransportProvider>, ApiError> {
    transport::get_json(ADMIN_TRANSPORT_PROVIDERS).await
}

/// # Errors
///
/// Returns an error if the request fails or the caller is not an admin.
pub async fn list_authorities() -> Result<Vec<AgricultureAuthority>, ApiError> {
    transport::get_json(ADMIN_AUTHORITIES).await
}

// =============================================================
// Agricultural authority
// =============================================================

/// # Errors
///
/// Returns an error if the request fails.
pub async fn fetch_report_summary() -> Result<AuthoritySummary, ApiError> {
    transport::get_json(AUTHORITY_REPORT_SUMMARY).await
}

/// # Errors
///
/// Returns an error if the request fails.
pub async fn fetch_alert_count() -> Result<AlertCount, ApiError> {
    transport::get_json(AUTHORITY_ALERT_COUNT).await
}

/// # Errors
///
/// Returns an error if the request fails. The backend answers 404 when no
/// reports exist; callers treat that like any other failure.
pub async fn fetch_reports() -> Result<Vec<FarmerReport>, ApiError> {
    transport::get_json(AUTHORITY_REPORTS).await
}

/// Mark a report resolved via `PATCH /agric_auth/reports/{id}/resolve`.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn resolve_report(report_id: i64) -> Result<MessageResponse, ApiError> {
    transport::patch_json(&report_resolve_endpoint(report_id), &serde_json::json!({})).await
}

// =============================================================
// Transport
// =============================================================

/// # Errors
///
/// Returns an error if the request fails.
pub async fn fetch_transport_requests() -> Result<Vec<TransportRequest>, ApiError> {
    transport::get_json(TRANSPORT_REQUESTS).await
}

/// # Errors
///
/// Returns an error if the request fails.
pub async fn fetch_transport_history() -> Result<Vec<TransportRequest>, ApiError> {
    transport::get_json(TRANSPORT_HISTORY).await
}

/// # Errors
///
/// Returns an error if the request fails.
pub async fn fetch_transport_summary() -> Result<TransportSummary, ApiError> {
    transport::get_json(TRANSPORT_SUMMARY).await
}

/// Move a request to `status` via `PATCH /transport/transport_requests/{id}`.
///
/// The status is sent in the backend's Title Case form (`"In Transit"`).
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn update_transport_status(
    request_id: i64,
    status: TransportStatus,
) -> Result<TransportUpdateResponse, ApiError> {
    let body = TransportStatusUpdate { status };
    transport::patch_json(&transport_request_endpoint(request_id), &body).await
}

// =============================================================
// Alerts, contact, messaging
// =============================================================

/// Broadcast an alert to a region via `POST /alerts/send`.
///
/// # Errors
///
/// Returns an error if the request fails or the backend reports a non-success
/// status (for example no farmers in the selected region).
pub async fn send_alert(data: &AlertRequest) -> Result<AlertResponse, ApiError> {
    let resp: AlertResponse = transport::post_json(ALERTS_SEND, data).await?;
    ensure_success(resp)
}

/// # Errors
///
/// Returns an error if the request fails or the backend rejects the message.
pub async fn send_contact(data: &ContactRequest) -> Result<ContactResponse, ApiError> {
    transport::post_json(CONTACT_SEND, data).await
}

/// Send one SMS to many recipients via `POST /sms/send-bulk-sms/`.
///
/// # Errors
///
/// Returns an error if the request fails or the provider rejects the send.
pub async fn send_bulk_sms(data: &BulkSmsRequest) -> Result<AlertResponse, ApiError> {
    let resp: AlertResponse = transport::post_json(SMS_BULK_SEND, data).await?;
    ensure_success(resp)
}

fn ensure_success(resp: AlertResponse) -> Result<AlertResponse, ApiError> {
    if resp.status == "success" {
        Ok(resp)
    } else {
        Err(ApiError::Status { status: 200, detail: resp.detail.or(Some(resp.status)) })
    }
}

// =============================================================
// Transport layer
// =============================================================

#[cfg(feature = "hydrate")]
mod transport {
    use gloo_net::http::{Request, RequestBuilder, Response};
    use serde::Serialize;
    use serde::de::DeserializeOwned;

    use super::{ApiError, bearer};
    use crate::config;

    fn network(err: gloo_net::Error) -> ApiError {
        ApiError::Network(err.to_string())
    }

    fn authorized(builder: RequestBuilder) -> RequestBuilder {
        match crate::state::auth::stored_token() {
            Some(token) => builder.header("Authorization", &bearer(&token)),
            None => builder,
        }
    }

    async fn finish<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
        if !resp.ok() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::from_status(status, &body));
        }
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
        let resp = authorized(Request::get(&config::endpoint(path)))
            .send()
            .await
            .map_err(network)?;
        finish(resp).await
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
        let resp = authorized(Request::post(&config::endpoint(path)))
            .json(body)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        finish(resp).await
    }

    pub async fn patch_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
        let resp = authorized(Request::patch(&config::endpoint(path)))
            .json(body)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        finish(resp).await
    }

    pub async fn patch_empty<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
        let resp = authorized(Request::patch(&config::endpoint(path)))
            .send()
            .await
            .map_err(network)?;
        finish(resp).await
    }

    pub async fn delete<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
        let resp = authorized(Request::delete(&config::endpoint(path)))
            .send()
            .await
            .map_err(network)?;
        finish(resp).await
    }

    pub async fn post_form<T: DeserializeOwned>(path: &str, body: String) -> Result<T, ApiError> {
        let resp = Request::post(&config::endpoint(path))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        finish(resp).await
    }
}

#[cfg(not(feature = "hydrate"))]
mod transport {
    use serde::Serialize;
    use serde::de::DeserializeOwned;

    use super::ApiError;

    pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
        let _ = path;
        Err(ApiError::Unavailable)
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
        let _ = (path, body);
        Err(ApiError::Unavailable)
    }

    pub async fn patch_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
        let _ = (path, body);
        Err(ApiError::Unavailable)
    }

    pub async fn patch_empty<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
        let _ = path;
        Err(ApiError::Unavailable)
    }

    pub async fn delete<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
        let _ = path;
        Err(ApiError::Unavailable)
    }

    pub async fn post_form<T: DeserializeOwned>(path: &str, body: String) -> Result<T, ApiError> {
        let _ = (path, body);
        Err(ApiError::Unavailable)
    }
}
