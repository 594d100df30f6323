//! Voice skill: request classification and the pressure pipeline
//!
//! [`Skill::dispatch`] maps each [`Intent`] to its handler in a single
//! `match`; the pressure intent is answered by [`PressureCheck`].

pub mod event;
pub mod format;
pub mod intent;
pub mod messages;
pub mod orchestrator;
pub mod response;

pub use event::VoiceEvent;
pub use format::format_pressure;
pub use intent::Intent;
pub use orchestrator::PressureCheck;
pub use response::{ResponseEnvelope, SpeechResponse};

use crate::{Error, Result};
use messages::{HELP_MESSAGE, HELP_REPROMPT, STOP_MESSAGE};

/// Skill entrypoint
#[derive(Clone)]
pub struct Skill {
    pressure: PressureCheck,
    application_id: Option<String>,
}

impl Skill {
    /// Create a skill; `application_id` of `None` accepts any caller
    #[must_use]
    pub const fn new(pressure: PressureCheck, application_id: Option<String>) -> Self {
        Self {
            pressure,
            application_id,
        }
    }

    /// Check that `event` was sent for this skill
    ///
    /// # Errors
    ///
    /// Returns `Error::ApplicationMismatch` if an application id is configured
    /// and the event carries a different one or none at all
    pub fn verify_application(&self, event: &VoiceEvent) -> Result<()> {
        let Some(expected) = &self.application_id else {
            return Ok(());
        };

        match event.application_id() {
            Some(actual) if actual == expected => Ok(()),
            Some(actual) => Err(Error::ApplicationMismatch(actual.to_string())),
            None => Err(Error::ApplicationMismatch("<missing>".to_string())),
        }
    }

    /// Answer one event
    ///
    /// Returns `None` only for session-ended notifications, which take no speech.
    pub async fn dispatch(&self, event: &VoiceEvent) -> Option<SpeechResponse> {
        let intent = Intent::from_request(&event.request);
        tracing::debug!(?intent, request_id = %event.request_id(), "dispatching request");

        let speech = match intent {
            Intent::Launch | Intent::GetPressure => self.pressure.handle(event).await,
            Intent::Help => SpeechResponse::ask(HELP_MESSAGE, HELP_REPROMPT),
            Intent::Stop => SpeechResponse::tell(STOP_MESSAGE),
            Intent::Unhandled => {
                tracing::debug!(intent_name = ?event.intent_name(), "unhandled request");
                SpeechResponse::ask(HELP_MESSAGE, HELP_MESSAGE)
            }
            Intent::SessionEnded => return None,
        };

        Some(speech)
    }
}
