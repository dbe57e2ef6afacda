//! REST DTOs for the client/backend boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON shapes. Optional and defaulted fields
//! absorb the backend's looser responses (missing counters, absent farmer
//! names) so a partial payload still renders instead of failing to decode.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

// =============================================================
// Users and auth
// =============================================================

/// Account role as encoded by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    TransportProvider,
    AgriculturalAuthority,
    Farmer,
}

impl UserRole {
    pub const ALL: [UserRole; 4] = [
        UserRole::Admin,
        UserRole::AgriculturalAuthority,
        UserRole::TransportProvider,
        UserRole::Farmer,
    ];

    /// Wire value, also used for the `new_role` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::TransportProvider => "transport_provider",
            UserRole::AgriculturalAuthority => "agricultural_authority",
            UserRole::Farmer => "farmer",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            UserRole::Admin => "Admin",
            UserRole::TransportProvider => "Transport Provider",
            UserRole::AgriculturalAuthority => "Agric Authority",
            UserRole::Farmer => "Farmer",
        }
    }

    pub fn parse(raw: &str) -> Option<UserRole> {
        UserRole::ALL.into_iter().find(|r| r.as_str() == raw.trim())
    }

    /// Landing route after login; farmers use USSD and have no dashboard.
    pub fn home_path(self) -> Option<&'static str> {
        match self {
            UserRole::Admin => Some("/admin"),
            UserRole::AgriculturalAuthority => Some("/authority"),
            UserRole::TransportProvider => Some("/transport"),
            UserRole::Farmer => None,
        }
    }
}

/// A user account as listed by `/admin/users`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserRead {
    pub id: i64,
    pub email: String,
    pub username: String,
    pub role: UserRole,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

/// Response of `POST /auth/login` and `POST /auth/register`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// Claims read from the JWT payload segment. The signature is not checked;
/// the backend stays the authority on every request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    #[serde(default)]
    pub role: Option<UserRole>,
    #[serde(default)]
    pub exp: Option<i64>,
}

/// OAuth2 password-form credentials.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LoginData {
    pub username: String,
    pub password: String,
}

/// Self-registration payload for `POST /auth/register`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RegisterData {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AdminCreate {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FarmerCreate {
    pub name: String,
    pub phone: String,
    pub location: String,
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TransportProviderCreate {
    pub name: String,
    pub phone: String,
    pub vehicle_type: String,
    pub location: String,
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AgricultureAuthorityCreate {
    pub institution_name: String,
    pub name: String,
    pub phone: String,
    pub location: String,
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RegisterResponse {
    pub message: String,
    pub user_id: i64,
    #[serde(default)]
    pub farmer_id: Option<i64>,
    #[serde(default)]
    pub authority_id: Option<i64>,
    #[serde(default)]
    pub transport_id: Option<i64>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RoleChangeResponse {
    pub message: String,
    pub user_id: i64,
    pub new_role: UserRole,
}

/// Generic `{ "message": ... }` acknowledgement.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

// =============================================================
// Role directories
// =============================================================

/// Row of `GET /admin/farmers`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Farmer {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub registered_at: Option<String>,
    #[serde(default)]
    pub user_id: Option<i64>,
}

/// Row of `GET /admin/transport-providers`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransportProvider {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub vehicle_type: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub user_id: Option<i64>,
}

/// Row of `GET /admin/agriculture-authorities`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AgricultureAuthority {
    pub id: i64,
    #[serde(default)]
    pub institution_name: String,
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub user_id: Option<i64>,
}

// =============================================================
// Summaries
// =============================================================

/// Admin counters from `/admin/dashboard/summary`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardSummary {
    pub total_users: u64,
    pub total_farmers: u64,
    pub total_transport_providers: u64,
    pub total_agriculture_authorities: u64,
    pub total_transport_requests: u64,
    pub total_reports: u64,
    pub pending_reports: u64,
    pub pending_transport_requests: u64,
    pub total_weather_alerts: u64,
    pub total_agriculture_alerts: u64,
}

/// Report counters from `/agric_auth/reports/summary`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthoritySummary {
    pub total_reports: u64,
    pub pending_reports: u64,
    pub in_progress_reports: u64,
    pub resolved_reports: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertCount {
    pub count: u64,
}

/// Provider counters from `/transport/summary`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransportSummary {
    pub active_requests: u64,
    pub completed_trips: u64,
    pub pending_requests: u64,
}

// =============================================================
// Farmer reports
// =============================================================

/// Review status of a farmer report.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ReportStatus {
    #[default]
    Pending,
    InProgress,
    Resolved,
    Other(String),
}

impl ReportStatus {
    pub const TABS: [ReportStatus; 3] = [ReportStatus::Pending, ReportStatus::InProgress, ReportStatus::Resolved];

    pub fn parse(raw: &str) -> ReportStatus {
        match raw.trim().to_ascii_lowercase().replace('_', " ").as_str() {
            "pending" => ReportStatus::Pending,
            "in progress" => ReportStatus::InProgress,
            "resolved" => ReportStatus::Resolved,
            _ => ReportStatus::Other(raw.to_owned()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            ReportStatus::Pending => "Pending",
            ReportStatus::InProgress => "In Progress",
            ReportStatus::Resolved => "Resolved",
            ReportStatus::Other(raw) => raw,
        }
    }

    /// Badge modifier class for the status pill.
    pub fn badge_class(&self) -> &'static str {
        match self {
            ReportStatus::Pending => "badge badge--pending",
            ReportStatus::InProgress => "badge badge--progress",
            ReportStatus::Resolved => "badge badge--resolved",
            ReportStatus::Other(_) => "badge",
        }
    }
}

impl From<String> for ReportStatus {
    fn from(raw: String) -> Self {
        ReportStatus::parse(&raw)
    }
}

impl From<ReportStatus> for String {
    fn from(status: ReportStatus) -> Self {
        status.label().to_owned()
    }
}

/// An issue submitted by a farmer (pest, flood, drought, ...).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FarmerReport {
    pub id: i64,
    pub farmer_id: i64,
    #[serde(default)]
    pub farmer_name: Option<String>,
    #[serde(default)]
    pub farmer_phone: Option<String>,
    pub issue_type: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub status: ReportStatus,
    #[serde(default)]
    pub timestamp: String,
}

impl FarmerReport {
    /// Heading shown on the report card.
    pub fn display_name(&self) -> String {
        match self.farmer_name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_owned(),
            _ => format!("Farmer ID: {}", self.farmer_id),
        }
    }
}

/// Tag class for a report's issue type.
pub fn issue_tag_class(issue_type: &str) -> &'static str {
    match issue_type.trim().to_ascii_lowercase().as_str() {
        "pest" | "pests" => "tag tag--pest",
        "flood" | "flooding" => "tag tag--flood",
        "drought" => "tag tag--drought",
        "disease" => "tag tag--disease",
        _ => "tag",
    }
}

// =============================================================
// Transport requests
// =============================================================

/// Lifecycle of a transport request:
/// `Pending -> Accepted -> In Transit -> Completed`, or `Rejected`/`Cancelled`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TransportStatus {
    #[default]
    Pending,
    Accepted,
    InTransit,
    Completed,
    Rejected,
    Cancelled,
    Other(String),
}

impl TransportStatus {
    pub const TABS: [TransportStatus; 5] = [
        TransportStatus::Pending,
        TransportStatus::Accepted,
        TransportStatus::InTransit,
        TransportStatus::Completed,
        TransportStatus::Rejected,
    ];

    /// Accepts any casing and `_`/space separators (`in_transit`, `In Transit`).
    pub fn parse(raw: &str) -> TransportStatus {
        match raw.trim().to_ascii_lowercase().replace('_', " ").as_str() {
            "pending" => TransportStatus::Pending,
            "accepted" => TransportStatus::Accepted,
            "in transit" => TransportStatus::InTransit,
            "completed" => TransportStatus::Completed,
            "rejected" => TransportStatus::Rejected,
            "cancelled" | "canceled" => TransportStatus::Cancelled,
            _ => TransportStatus::Other(raw.to_owned()),
        }
    }

    /// Title Case value the backend stores.
    pub fn label(&self) -> &str {
        match self {
            TransportStatus::Pending => "Pending",
            TransportStatus::Accepted => "Accepted",
            TransportStatus::InTransit => "In Transit",
            TransportStatus::Completed => "Completed",
            TransportStatus::Rejected => "Rejected",
            TransportStatus::Cancelled => "Cancelled",
            TransportStatus::Other(raw) => raw,
        }
    }

    /// Statuses reachable from this one by a provider action.
    pub fn next_actions(&self) -> Vec<TransportStatus> {
        match self {
            TransportStatus::Pending => vec![TransportStatus::Accepted, TransportStatus::Rejected],
            TransportStatus::Accepted => vec![TransportStatus::InTransit],
            TransportStatus::InTransit => vec![TransportStatus::Completed],
            _ => Vec::new(),
        }
    }

    /// Button label for moving a request into this status.
    pub fn action_label(&self) -> &'static str {
        match self {
            TransportStatus::Accepted => "Accept",
            TransportStatus::Rejected => "Reject",
            TransportStatus::InTransit => "Start Transit",
            TransportStatus::Completed => "Mark Completed",
            TransportStatus::Cancelled => "Cancel",
            TransportStatus::Pending | TransportStatus::Other(_) => "Update",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            TransportStatus::Completed | TransportStatus::Rejected | TransportStatus::Cancelled
        )
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            TransportStatus::Pending => "badge badge--pending",
            TransportStatus::Accepted => "badge badge--accepted",
            TransportStatus::InTransit => "badge badge--progress",
            TransportStatus::Completed => "badge badge--resolved",
            TransportStatus::Rejected | TransportStatus::Cancelled => "badge badge--rejected",
            TransportStatus::Other(_) => "badge",
        }
    }
}

impl From<String> for TransportStatus {
    fn from(raw: String) -> Self {
        TransportStatus::parse(&raw)
    }
}

impl From<TransportStatus> for String {
    fn from(status: TransportStatus) -> Self {
        status.label().to_owned()
    }
}

/// A farmer's request for produce transport.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransportRequest {
    pub id: i64,
    pub farmer_id: i64,
    #[serde(default)]
    pub farmer_name: String,
    #[serde(default)]
    pub farmer_phone: Option<String>,
    #[serde(default)]
    pub transport_type: Option<String>,
    #[serde(default)]
    pub pickup_location: Option<String>,
    #[serde(default)]
    pub dropoff_location: Option<String>,
    #[serde(default)]
    pub status: TransportStatus,
    #[serde(default)]
    pub timestamp: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TransportStatusUpdate {
    pub status: TransportStatus,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TransportUpdateResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub request_id: Option<i64>,
    #[serde(default)]
    pub new_status: Option<TransportStatus>,
}

// =============================================================
// Alerts, contact, messaging
// =============================================================

/// Payload of `POST /alerts/send`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AlertRequest {
    pub title: String,
    pub alert_type: String,
    pub severity: String,
    pub region: String,
    pub message: String,
    pub delivery_time: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AlertResponse {
    pub status: String,
    #[serde(default)]
    pub detail: Option<String>,
}

/// Payload of `POST /contact/send`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ContactResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

/// Payload of `POST /sms/send-bulk-sms/`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BulkSmsRequest {
    pub phone_numbers: Vec<String>,
    pub message: String,
}
