//! Intent classification

use super::event::Request;

/// Everything the skill knows how to answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Skill opened without a command; treated as a pressure request
    Launch,
    GetPressure,
    Help,
    /// Cancel or stop
    Stop,
    /// Session closed by the platform; no speech allowed
    SessionEnded,
    Unhandled,
}

impl Intent {
    /// Classify a request by its type and intent name
    #[must_use]
    pub fn from_request(request: &Request) -> Self {
        match request.kind.as_str() {
            "LaunchRequest" => Self::Launch,
            "SessionEndedRequest" => Self::SessionEnded,
            "IntentRequest" => match request.intent.as_ref().map(|i| i.name.as_str()) {
                Some("GetPressureIntent" | "CurrentPressure") => Self::GetPressure,
                Some("AMAZON.HelpIntent") => Self::Help,
                Some("AMAZON.CancelIntent" | "AMAZON.StopIntent") => Self::Stop,
                _ => Self::Unhandled,
            },
            _ => Self::Unhandled,
        }
    }
}
