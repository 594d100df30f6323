//! Inbound voice request envelope
//!
//! Only the fields the skill reads are modelled; everything else in the
//! platform's request is ignored during deserialization.

use serde::Deserialize;

/// A voice request as delivered by the platform
#[derive(Debug, Clone, Deserialize)]
pub struct VoiceEvent {
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub session: Option<Session>,
    #[serde(default)]
    pub context: Context,
    pub request: Request,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub application: Option<Application>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub application_id: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Context {
    #[serde(rename = "System", default)]
    pub system: SystemContext,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemContext {
    #[serde(default)]
    pub application: Option<Application>,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub device: Option<Device>,
    #[serde(default)]
    pub api_endpoint: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub permissions: Option<Permissions>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Permissions {
    #[serde(default)]
    pub consent_token: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    #[serde(default)]
    pub device_id: Option<String>,
}

/// The request body: what the user asked for
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    /// `LaunchRequest`, `IntentRequest`, `SessionEndedRequest`, ...
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub request_id: Option<String>,
    #[serde(default)]
    pub intent: Option<RequestIntent>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RequestIntent {
    pub name: String,
}

impl VoiceEvent {
    /// Consent token, if the user granted address permission
    ///
    /// An empty token counts as absent.
    #[must_use]
    pub fn consent_token(&self) -> Option<&str> {
        self.context
            .system
            .user
            .as_ref()
            .and_then(|u| u.permissions.as_ref())
            .and_then(|p| p.consent_token.as_deref())
            .filter(|token| !token.is_empty())
    }

    #[must_use]
    pub fn has_consent(&self) -> bool {
        self.consent_token().is_some()
    }

    #[must_use]
    pub fn device_id(&self) -> &str {
        self.context
            .system
            .device
            .as_ref()
            .and_then(|d| d.device_id.as_deref())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn api_endpoint(&self) -> &str {
        self.context
            .system
            .api_endpoint
            .as_deref()
            .unwrap_or_default()
    }

    /// Application id from the system context, else from the session
    #[must_use]
    pub fn application_id(&self) -> Option<&str> {
        self.context
            .system
            .application
            .as_ref()
            .or_else(|| self.session.as_ref().and_then(|s| s.application.as_ref()))
            .map(|a| a.application_id.as_str())
    }

    #[must_use]
    pub fn request_id(&self) -> &str {
        self.request.request_id.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn intent_name(&self) -> Option<&str> {
        self.request.intent.as_ref().map(|i| i.name.as_str())
    }
}
